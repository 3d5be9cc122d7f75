//! Weather lookup state: current city, conditions, forecasts, and save status.
//!
//! DESIGN
//! ======
//! Pages hold one `WeatherState` in an `RwSignal` and drive it only through
//! the transition methods below, so search/save bookkeeping is testable
//! without a DOM. Forecast results are applied as they arrive; a slower
//! response from an older search can overwrite a newer one.

#[cfg(test)]
#[path = "weather_test.rs"]
mod weather_test;

use crate::net::http::ApiError;
use crate::net::types::{CurrentWeather, DailyForecast, HourlyForecast, MessageResponse};
use crate::util::config::HOURLY_WINDOW;

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a location name";
pub const NOTHING_TO_SAVE_MESSAGE: &str = "No weather data to save";

/// Save button lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
}

impl SaveStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Save to History",
            Self::Saving => "Saving...",
            Self::Saved => "Saved!",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Idle => "💾",
            Self::Saving => "⏳",
            Self::Saved => "✅",
        }
    }

    /// The button is disabled while saving and while showing "Saved!".
    pub fn is_busy(self) -> bool {
        self != Self::Idle
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeatherState {
    /// City of the most recent search, used by the day detail modal.
    pub current_city: Option<String>,
    /// Conditions from the most recent successful lookup; also what "save"
    /// persists.
    pub current: Option<CurrentWeather>,
    pub hourly: Vec<HourlyForecast>,
    pub daily: Vec<DailyForecast>,
    pub loading: bool,
    pub error: Option<String>,
    pub save_status: SaveStatus,
    /// Day shown in the detail modal.
    pub selected_day: Option<DailyForecast>,
}

/// Message to show for a failed call, or `None` when the session expired and
/// the page is already navigating to login.
pub fn visible_error(err: &ApiError) -> Option<String> {
    if err.is_session_expired() { None } else { Some(err.to_string()) }
}

impl WeatherState {
    /// Validate a search query and enter the loading state.
    ///
    /// Returns the trimmed city to look up, or `None` (with `error` set) when
    /// the query is blank.
    pub fn begin_search(&mut self, query: &str) -> Option<String> {
        let city = query.trim();
        if city.is_empty() {
            self.loading = false;
            self.error = Some(EMPTY_QUERY_MESSAGE.to_owned());
            return None;
        }
        self.loading = true;
        self.error = None;
        self.current = None;
        self.hourly.clear();
        self.daily.clear();
        self.selected_day = None;
        self.current_city = Some(city.to_owned());
        Some(city.to_owned())
    }

    /// Apply the current-conditions result. Returns `true` when forecasts
    /// should be loaded next.
    pub fn finish_search(&mut self, result: Result<CurrentWeather, ApiError>) -> bool {
        self.loading = false;
        match result {
            Ok(weather) => {
                self.current = Some(weather);
                true
            }
            Err(err) => {
                self.error = visible_error(&err);
                false
            }
        }
    }

    /// Keep at most the first `HOURLY_WINDOW` slots.
    pub fn set_hourly(&mut self, mut entries: Vec<HourlyForecast>) {
        entries.truncate(HOURLY_WINDOW);
        self.hourly = entries;
    }

    pub fn set_daily(&mut self, entries: Vec<DailyForecast>) {
        self.daily = entries;
    }

    /// Whether the forecast section has anything to show.
    pub fn has_forecast(&self) -> bool {
        !self.hourly.is_empty() || !self.daily.is_empty()
    }

    /// Open the detail modal for the daily entry at `index`.
    pub fn open_day(&mut self, index: usize) {
        self.selected_day = self.daily.get(index).cloned();
    }

    pub fn close_day(&mut self) {
        self.selected_day = None;
    }

    /// Enter the saving state and return the conditions to persist.
    ///
    /// Returns `None` when a save is already in flight or there is nothing to
    /// save (the latter also sets `error`).
    pub fn begin_save(&mut self) -> Option<CurrentWeather> {
        if self.save_status.is_busy() {
            return None;
        }
        let Some(weather) = self.current.clone() else {
            self.error = Some(NOTHING_TO_SAVE_MESSAGE.to_owned());
            return None;
        };
        self.save_status = SaveStatus::Saving;
        Some(weather)
    }

    /// Apply the save result. Returns `true` when history should refresh.
    pub fn finish_save(&mut self, result: Result<MessageResponse, ApiError>) -> bool {
        match result {
            Ok(_) => {
                self.save_status = SaveStatus::Saved;
                true
            }
            Err(err) => {
                self.save_status = SaveStatus::Idle;
                self.error = visible_error(&err);
                false
            }
        }
    }

    /// Return the save button to idle after the "Saved!" pause.
    pub fn reset_save(&mut self) {
        if self.save_status == SaveStatus::Saved {
            self.save_status = SaveStatus::Idle;
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
