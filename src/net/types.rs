//! Wire DTOs for the backend REST contract.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON exactly. History rows come straight
//! from a spreadsheet, so their keys are the sheet's column headers and cell
//! values may arrive as numbers or strings; those are normalized to strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Body for `POST /auth/login` and `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful `POST /auth/login` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Plain `{message}` body returned by signup and save.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Backend error body (`{detail}`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// `{success, data}` wrapper used by the weather, forecast and history
/// endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// The payload when the backend reported success and included data.
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }
}

/// Current conditions for a location. Also the body of `POST /weather/save`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub city: String,
    #[serde(default)]
    pub country: String,
    pub icon: String,
    pub description: String,
    /// Degrees Celsius.
    pub temperature: f64,
    pub feels_like: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    /// Meters per second.
    pub wind_speed: f64,
    /// Hectopascals.
    pub pressure: f64,
}

/// One hourly forecast slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    /// Display label such as `"14:00"`.
    pub time: String,
    pub icon: String,
    pub description: String,
    pub temp: f64,
    /// Probability of precipitation, percent.
    #[serde(default)]
    pub pop: f64,
}

/// One daily forecast entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: String,
    pub icon: String,
    pub description: String,
    pub temp_max: f64,
    pub temp_min: f64,
    #[serde(default)]
    pub pop: f64,
    #[serde(default)]
    pub wind_speed: f64,
}

/// A saved lookup as returned by `GET /weather/history`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct HistoryRecord {
    #[serde(rename = "City", default, deserialize_with = "deserialize_cell")]
    pub city: Option<String>,
    #[serde(rename = "Country", default, deserialize_with = "deserialize_cell")]
    pub country: Option<String>,
    #[serde(rename = "Temperature (°C)", default, deserialize_with = "deserialize_cell")]
    pub temperature: Option<String>,
    #[serde(rename = "Timestamp", default, deserialize_with = "deserialize_cell")]
    pub timestamp: Option<String>,
}

impl HistoryRecord {
    pub fn city_label(&self) -> &str {
        self.city.as_deref().unwrap_or("Unknown")
    }

    pub fn country_label(&self) -> &str {
        self.country.as_deref().unwrap_or("")
    }

    pub fn temperature_label(&self) -> &str {
        self.temperature.as_deref().unwrap_or("N/A")
    }
}

/// Accept a sheet cell as a string or number. Empty strings and nulls map to
/// `None`.
fn deserialize_cell<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}
