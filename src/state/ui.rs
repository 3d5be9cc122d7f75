//! Local UI chrome state (theme, forecast tab, mobile menu).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of weather and history state so
//! rendering controls can evolve independently of backend data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// Forecast view shown under the current conditions card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ForecastTab {
    #[default]
    Hourly,
    Daily,
}

impl ForecastTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Hourly => "Hourly",
            Self::Daily => "Daily",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub forecast_tab: ForecastTab,
    pub menu_open: bool,
}

impl UiState {
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }
}
