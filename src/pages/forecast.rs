//! Standalone forecast page.
//!
//! Loads the daily and hourly forecasts for a searched city together and
//! shows both lists. Unlike the weather page, the two requests succeed or
//! fail as one: if either fails the page shows a single error and no data.

#[cfg(test)]
#[path = "forecast_test.rs"]
mod forecast_test;

use leptos::prelude::*;

use crate::components::forecast_lists::{DailyForecastList, HourlyForecastList};
use crate::components::navbar::Navbar;
use crate::net::api;
use crate::net::http::{ApiClient, ApiError, Transport};
use crate::net::types::{DailyForecast, HourlyForecast};
use crate::util::auth::{FORECAST_PATH, guard_page};
use crate::util::config::HOURLY_WINDOW;
use crate::util::navigation::Navigator;
use crate::util::storage::KeyValueStorage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ForecastBundle {
    pub daily: Vec<DailyForecast>,
    pub hourly: Vec<HourlyForecast>,
}

/// Fetch both forecasts for `city` concurrently. Hourly entries are capped
/// to the display window.
///
/// # Errors
///
/// Returns the first failure of either request.
pub async fn load_forecast_bundle<S, T, N>(client: &ApiClient<S, T, N>, city: &str) -> Result<ForecastBundle, ApiError>
where
    S: KeyValueStorage,
    T: Transport,
    N: Navigator,
{
    let (daily, mut hourly) = futures::try_join!(
        api::fetch_daily_forecast(client, city),
        api::fetch_hourly_forecast(client, city),
    )?;
    hourly.truncate(HOURLY_WINDOW);
    Ok(ForecastBundle { daily, hourly })
}

/// Page-level message for a failed bundle load.
pub fn forecast_error_message(err: &ApiError) -> String {
    format!("Failed to load forecast: {err}")
}

#[component]
pub fn ForecastPage() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let bundle = RwSignal::new(ForecastBundle::default());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        guard_page(FORECAST_PATH);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let city = query.get_untracked().trim().to_owned();
        if city.is_empty() {
            error.set(Some(crate::state::weather::EMPTY_QUERY_MESSAGE.to_owned()));
            return;
        }
        loading.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let client = ApiClient::browser();
            match load_forecast_bundle(&client, &city).await {
                Ok(loaded) => bundle.set(loaded),
                Err(e) => {
                    bundle.set(ForecastBundle::default());
                    if !e.is_session_expired() {
                        error.set(Some(forecast_error_message(&e)));
                    }
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = city;
    };

    let daily = Signal::derive(move || bundle.get().daily);
    let hourly = Signal::derive(move || bundle.get().hourly);

    view! {
        <div class="forecast-page">
            <Navbar active=FORECAST_PATH/>
            <main class="forecast-page__main">
                <form class="search" on:submit=on_submit>
                    <input
                        class="search__input"
                        type="text"
                        placeholder="Enter city name..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary search__button" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Loading..." } else { "Get Forecast" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <div class="weather-error" role="alert">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <Show when=move || !bundle.get().daily.is_empty()>
                    <section class="forecast">
                        <h3>"Daily Forecast"</h3>
                        <DailyForecastList entries=daily/>
                    </section>
                </Show>
                <Show when=move || !bundle.get().hourly.is_empty()>
                    <section class="forecast">
                        <h3>"Hourly Forecast"</h3>
                        <HourlyForecastList entries=hourly/>
                    </section>
                </Show>
            </main>
        </div>
    }
}
