//! Typed endpoint helpers for the weather backend.
//!
//! Credential endpoints go through `ApiClient::request_public`; everything
//! else is authenticated and subject to the client's 401 handling.
//!
//! ERROR HANDLING
//! ==============
//! Each helper supplies the fallback message shown when a non-2xx response
//! carries no `detail`, so pages can display `ApiError`'s text as-is.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{ApiClient, ApiError, RequestOptions, Transport};
use super::types::{
    Credentials, CurrentWeather, DailyForecast, Envelope, HistoryRecord, HourlyForecast,
    LoginResponse, MessageResponse,
};
use crate::util::navigation::Navigator;
use crate::util::storage::KeyValueStorage;

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const SIGNUP_ENDPOINT: &str = "/auth/signup";
pub const SAVE_ENDPOINT: &str = "/weather/save";

fn weather_endpoint(city: &str) -> String {
    format!("/weather/{}", urlencoding::encode(city))
}

fn hourly_endpoint(city: &str) -> String {
    format!("/forecast/hourly/{}", urlencoding::encode(city))
}

fn daily_endpoint(city: &str) -> String {
    format!("/forecast/daily/{}", urlencoding::encode(city))
}

fn history_endpoint(limit: usize) -> String {
    format!("/weather/history?limit={limit}")
}

fn credentials(email: &str, password: &str) -> Credentials {
    Credentials { email: email.to_owned(), password: password.to_owned() }
}

/// Exchange credentials for an access token via `POST /auth/login`.
///
/// # Errors
///
/// Returns `ApiError::Backend` with the backend's detail on rejection (bad
/// password arrives as a 401 and is reported here, not as session expiry).
pub async fn login<S, T, N>(
    client: &ApiClient<S, T, N>,
    email: &str,
    password: &str,
) -> Result<LoginResponse, ApiError>
where
    S: KeyValueStorage,
    T: Transport,
    N: Navigator,
{
    let options = RequestOptions::post_json(&credentials(email, password))?;
    client
        .request_public(LOGIN_ENDPOINT, options)
        .await?
        .error_for_status("Login failed")?
        .json()
}

/// Register an account via `POST /auth/signup`.
///
/// # Errors
///
/// Returns `ApiError::Backend` with the backend's detail on rejection.
pub async fn signup<S, T, N>(
    client: &ApiClient<S, T, N>,
    email: &str,
    password: &str,
) -> Result<MessageResponse, ApiError>
where
    S: KeyValueStorage,
    T: Transport,
    N: Navigator,
{
    let options = RequestOptions::post_json(&credentials(email, password))?;
    client
        .request_public(SIGNUP_ENDPOINT, options)
        .await?
        .error_for_status("Signup failed")?
        .json()
}

/// Current conditions for `city`.
///
/// # Errors
///
/// Returns `ApiError::InvalidResponse` when the envelope reports no data.
pub async fn fetch_current_weather<S, T, N>(
    client: &ApiClient<S, T, N>,
    city: &str,
) -> Result<CurrentWeather, ApiError>
where
    S: KeyValueStorage,
    T: Transport,
    N: Navigator,
{
    client
        .get_json::<Envelope<CurrentWeather>>(&weather_endpoint(city), "Failed to fetch weather")
        .await?
        .into_data()
        .ok_or(ApiError::InvalidResponse)
}

/// Hourly forecast for `city`, as many slots as the backend returns.
///
/// # Errors
///
/// Returns `ApiError::InvalidResponse` when the envelope reports no data.
pub async fn fetch_hourly_forecast<S, T, N>(
    client: &ApiClient<S, T, N>,
    city: &str,
) -> Result<Vec<HourlyForecast>, ApiError>
where
    S: KeyValueStorage,
    T: Transport,
    N: Navigator,
{
    client
        .get_json::<Envelope<Vec<HourlyForecast>>>(&hourly_endpoint(city), "Failed to load hourly forecast")
        .await?
        .into_data()
        .ok_or(ApiError::InvalidResponse)
}

/// Daily forecast for `city`.
///
/// # Errors
///
/// Returns `ApiError::InvalidResponse` when the envelope reports no data.
pub async fn fetch_daily_forecast<S, T, N>(
    client: &ApiClient<S, T, N>,
    city: &str,
) -> Result<Vec<DailyForecast>, ApiError>
where
    S: KeyValueStorage,
    T: Transport,
    N: Navigator,
{
    client
        .get_json::<Envelope<Vec<DailyForecast>>>(&daily_endpoint(city), "Failed to load daily forecast")
        .await?
        .into_data()
        .ok_or(ApiError::InvalidResponse)
}

/// Persist a lookup to the history log via `POST /weather/save`.
///
/// # Errors
///
/// Returns `ApiError::Backend` with the backend's detail when saving fails.
pub async fn save_weather<S, T, N>(
    client: &ApiClient<S, T, N>,
    weather: &CurrentWeather,
) -> Result<MessageResponse, ApiError>
where
    S: KeyValueStorage,
    T: Transport,
    N: Navigator,
{
    client.post_json(SAVE_ENDPOINT, weather, "Failed to save").await
}

/// Most recent `limit` history records, newest first. An unsuccessful or
/// empty envelope yields an empty list.
///
/// # Errors
///
/// Returns the underlying `ApiError` when the request itself fails.
pub async fn fetch_history<S, T, N>(
    client: &ApiClient<S, T, N>,
    limit: usize,
) -> Result<Vec<HistoryRecord>, ApiError>
where
    S: KeyValueStorage,
    T: Transport,
    N: Navigator,
{
    let envelope = client
        .get_json::<Envelope<Vec<HistoryRecord>>>(&history_endpoint(limit), "Failed to load history")
        .await?;
    Ok(envelope.into_data().unwrap_or_default())
}
