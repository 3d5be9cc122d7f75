use super::*;

#[test]
fn localhost_uses_dev_backend() {
    assert_eq!(api_base_url_for("localhost", "http://localhost:5500"), LOCAL_API_BASE_URL);
}

#[test]
fn loopback_ip_uses_dev_backend() {
    assert_eq!(api_base_url_for("127.0.0.1", "http://127.0.0.1:3000"), LOCAL_API_BASE_URL);
}

#[test]
fn other_hosts_use_same_origin_api() {
    assert_eq!(
        api_base_url_for("weather.example.com", "https://weather.example.com"),
        "https://weather.example.com/api"
    );
}

#[test]
fn trailing_slash_on_origin_is_dropped() {
    assert_eq!(api_base_url_for("app.test", "https://app.test/"), "https://app.test/api");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn api_base_url_defaults_to_local_outside_browser() {
    assert_eq!(api_base_url(), LOCAL_API_BASE_URL);
}
