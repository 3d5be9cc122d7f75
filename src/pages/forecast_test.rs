use futures::executor::block_on;

use super::*;
use crate::net::mock::Harness;
use crate::util::auth::LOGIN_PATH;

const DAILY: &str = r#"{"success":true,"data":[
    {"date":"Mon, Jun 2","icon":"10d","description":"light rain","temp_max":18.6,"temp_min":11.2,"pop":60,"wind_speed":4.2}]}"#;

fn hourly_body(slots: usize) -> String {
    let entries: Vec<serde_json::Value> = (0..slots)
        .map(|i| serde_json::json!({"time": format!("{i}h"), "icon": "01n", "description": "clear", "temp": 12.5}))
        .collect();
    serde_json::json!({"success": true, "data": entries}).to_string()
}

#[test]
fn bundle_holds_both_lists_with_hourly_capped() {
    let h = Harness::logged_in("tok", "a@b.com");
    h.transport.respond("/forecast/daily/", 200, DAILY);
    h.transport.respond("/forecast/hourly/", 200, &hourly_body(30));

    let bundle = block_on(load_forecast_bundle(&h.client, "Oslo")).unwrap();
    assert_eq!(bundle.daily.len(), 1);
    assert_eq!(bundle.hourly.len(), HOURLY_WINDOW);
    assert_eq!(h.transport.sent_count(), 2);
}

#[test]
fn bundle_fails_as_a_whole_when_one_side_fails() {
    let h = Harness::logged_in("tok", "a@b.com");
    h.transport.respond("/forecast/daily/", 200, DAILY);
    h.transport.respond("/forecast/hourly/", 200, r#"{"success":false}"#);

    let err = block_on(load_forecast_bundle(&h.client, "Oslo")).unwrap_err();
    assert_eq!(err, ApiError::InvalidResponse);
    assert_eq!(forecast_error_message(&err), "Failed to load forecast: Invalid response from server");
}

#[test]
fn bundle_error_carries_backend_detail() {
    let h = Harness::logged_in("tok", "a@b.com");
    h.transport.respond("/forecast/daily/", 404, r#"{"detail":"City not found"}"#);
    h.transport.respond("/forecast/hourly/", 200, &hourly_body(2));

    let err = block_on(load_forecast_bundle(&h.client, "Atlantis")).unwrap_err();
    assert_eq!(forecast_error_message(&err), "Failed to load forecast: City not found");
}

#[test]
fn bundle_on_expired_session_redirects_to_login() {
    let h = Harness::logged_in("stale", "a@b.com");
    h.transport.respond("/forecast/daily/", 401, r#"{"detail":"Token expired"}"#);
    h.transport.respond("/forecast/hourly/", 401, r#"{"detail":"Token expired"}"#);

    let err = block_on(load_forecast_bundle(&h.client, "Oslo")).unwrap_err();
    assert!(err.is_session_expired());
    assert!(!h.store().has_session());
    assert_eq!(h.navigator.last().as_deref(), Some(LOGIN_PATH));
}
