use super::*;

fn paris() -> CurrentWeather {
    CurrentWeather {
        city: "Paris".to_owned(),
        country: "FR".to_owned(),
        icon: "01d".to_owned(),
        description: "clear sky".to_owned(),
        temperature: 21.4,
        feels_like: 20.9,
        humidity: 40.0,
        wind_speed: 3.1,
        pressure: 1018.0,
    }
}

fn hour(i: usize) -> HourlyForecast {
    HourlyForecast {
        time: format!("{i:02}:00"),
        icon: "01n".to_owned(),
        description: "clear".to_owned(),
        temp: 10.0,
        pop: 0.0,
    }
}

fn day(date: &str) -> DailyForecast {
    DailyForecast {
        date: date.to_owned(),
        icon: "10d".to_owned(),
        description: "rain".to_owned(),
        temp_max: 12.0,
        temp_min: 4.0,
        pop: 70.0,
        wind_speed: 5.5,
    }
}

// =============================================================
// Search
// =============================================================

#[test]
fn begin_search_rejects_blank_query() {
    let mut state = WeatherState::default();
    assert_eq!(state.begin_search("   "), None);
    assert_eq!(state.error.as_deref(), Some(EMPTY_QUERY_MESSAGE));
    assert!(!state.loading);
}

#[test]
fn begin_search_trims_and_enters_loading() {
    let mut state = WeatherState { error: Some("old".to_owned()), ..WeatherState::default() };
    assert_eq!(state.begin_search("  Paris "), Some("Paris".to_owned()));
    assert!(state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.current_city.as_deref(), Some("Paris"));
}

#[test]
fn begin_search_hides_previous_results() {
    let mut state = WeatherState::default();
    state.current = Some(paris());
    state.set_daily(vec![day("Mon")]);
    state.open_day(0);
    state.begin_search("Oslo");
    assert!(state.current.is_none());
    assert!(!state.has_forecast());
    assert!(state.selected_day.is_none());
}

#[test]
fn finish_search_success_requests_forecasts() {
    let mut state = WeatherState::default();
    state.begin_search("Paris");
    assert!(state.finish_search(Ok(paris())));
    assert!(!state.loading);
    assert_eq!(state.current.as_ref().map(|w| w.city.as_str()), Some("Paris"));
}

#[test]
fn finish_search_failure_shows_message() {
    let mut state = WeatherState::default();
    state.begin_search("Atlantis");
    let err = ApiError::Backend { status: 404, detail: "Location not found".to_owned() };
    assert!(!state.finish_search(Err(err)));
    assert_eq!(state.error.as_deref(), Some("Location not found"));
    assert!(!state.loading);
}

#[test]
fn finish_search_session_expiry_shows_nothing() {
    let mut state = WeatherState::default();
    state.begin_search("Paris");
    assert!(!state.finish_search(Err(ApiError::SessionExpired)));
    assert_eq!(state.error, None);
}

// =============================================================
// Forecasts and the day modal
// =============================================================

#[test]
fn set_hourly_keeps_first_window() {
    let mut state = WeatherState::default();
    state.set_hourly((0..48).map(hour).collect());
    assert_eq!(state.hourly.len(), HOURLY_WINDOW);
    assert_eq!(state.hourly[0].time, "00:00");
    assert_eq!(state.hourly[23].time, "23:00");
}

#[test]
fn set_hourly_short_list_is_kept_whole() {
    let mut state = WeatherState::default();
    state.set_hourly((0..3).map(hour).collect());
    assert_eq!(state.hourly.len(), 3);
    assert!(state.has_forecast());
}

#[test]
fn open_and_close_day() {
    let mut state = WeatherState::default();
    state.set_daily(vec![day("Mon"), day("Tue")]);
    state.open_day(1);
    assert_eq!(state.selected_day.as_ref().map(|d| d.date.as_str()), Some("Tue"));
    state.close_day();
    assert!(state.selected_day.is_none());
}

#[test]
fn open_day_out_of_range_selects_nothing() {
    let mut state = WeatherState::default();
    state.set_daily(vec![day("Mon")]);
    state.open_day(5);
    assert!(state.selected_day.is_none());
}

// =============================================================
// Save
// =============================================================

#[test]
fn begin_save_without_weather_errors() {
    let mut state = WeatherState::default();
    assert_eq!(state.begin_save(), None);
    assert_eq!(state.error.as_deref(), Some(NOTHING_TO_SAVE_MESSAGE));
    assert_eq!(state.save_status, SaveStatus::Idle);
}

#[test]
fn begin_save_returns_current_weather() {
    let mut state = WeatherState { current: Some(paris()), ..WeatherState::default() };
    assert_eq!(state.begin_save(), Some(paris()));
    assert_eq!(state.save_status, SaveStatus::Saving);
}

#[test]
fn begin_save_while_busy_is_ignored() {
    let mut state = WeatherState { current: Some(paris()), ..WeatherState::default() };
    state.begin_save();
    assert_eq!(state.begin_save(), None);
}

#[test]
fn save_success_then_reset() {
    let mut state = WeatherState { current: Some(paris()), ..WeatherState::default() };
    state.begin_save();
    assert!(state.finish_save(Ok(MessageResponse::default())));
    assert_eq!(state.save_status, SaveStatus::Saved);
    assert!(state.save_status.is_busy());
    state.reset_save();
    assert_eq!(state.save_status, SaveStatus::Idle);
}

#[test]
fn save_failure_reenables_button_with_message() {
    let mut state = WeatherState { current: Some(paris()), ..WeatherState::default() };
    state.begin_save();
    let err = ApiError::Backend { status: 500, detail: "Failed to save".to_owned() };
    assert!(!state.finish_save(Err(err)));
    assert_eq!(state.save_status, SaveStatus::Idle);
    assert_eq!(state.error.as_deref(), Some("Failed to save"));
}

#[test]
fn save_status_labels() {
    assert_eq!(SaveStatus::Idle.label(), "Save to History");
    assert_eq!(SaveStatus::Saving.label(), "Saving...");
    assert_eq!(SaveStatus::Saved.label(), "Saved!");
}
