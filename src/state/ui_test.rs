use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_theme_is_dark() {
    assert_eq!(UiState::default().theme, Theme::Dark);
}

#[test]
fn ui_state_default_tab_is_hourly() {
    let state = UiState::default();
    assert_eq!(state.forecast_tab, ForecastTab::Hourly);
    assert!(!state.menu_open);
}

#[test]
fn ui_state_with_theme_keeps_other_defaults() {
    let state = UiState::with_theme(Theme::Light);
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.forecast_tab, ForecastTab::Hourly);
}

#[test]
fn forecast_tab_labels() {
    assert_eq!(ForecastTab::Hourly.label(), "Hourly");
    assert_eq!(ForecastTab::Daily.label(), "Daily");
}
