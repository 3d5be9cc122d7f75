//! Weather page: search, current conditions, forecasts, save, and history.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. A search loads current
//! conditions first; only on success are the hourly and daily forecasts
//! requested, each applied independently as it arrives. Saving persists the
//! current conditions and refreshes the history panel.
//!
//! DESIGN
//! ======
//! UI events are mapped to `WeatherCommand`s and handled by a single
//! `WeatherController::dispatch`, which applies state transitions and spawns
//! the backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Failed lookups surface inline through `WeatherState::error`. A 401 has
//! already sent the browser to login, so it is not shown.

#[cfg(test)]
#[path = "weather_test.rs"]
mod weather_test;

use leptos::prelude::*;

use crate::components::current_weather::CurrentWeatherCard;
use crate::components::day_modal::DayModal;
use crate::components::forecast_lists::{DailyForecastList, HourlyForecastList};
use crate::components::history_panel::HistoryPanel;
use crate::components::navbar::Navbar;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::http::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::http::ApiClient;
use crate::net::types::{DailyForecast, HourlyForecast};
use crate::state::history::HistoryState;
use crate::state::ui::{ForecastTab, UiState};
use crate::state::weather::WeatherState;
use crate::util::auth::{LANDING_PATH, guard_page};

/// Apply an hourly forecast result. A failure is logged and leaves the
/// hourly list empty.
pub fn apply_hourly(state: &mut WeatherState, result: Result<Vec<HourlyForecast>, ApiError>) {
    match result {
        Ok(entries) => state.set_hourly(entries),
        Err(e) => leptos::logging::warn!("hourly forecast failed: {e}"),
    }
}

/// Apply a daily forecast result. A failure is logged and leaves the daily
/// list empty.
pub fn apply_daily(state: &mut WeatherState, result: Result<Vec<DailyForecast>, ApiError>) {
    match result {
        Ok(entries) => state.set_daily(entries),
        Err(e) => leptos::logging::warn!("daily forecast failed: {e}"),
    }
}

/// User intents on the weather page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WeatherCommand {
    /// Look up the city currently in the search box.
    Search,
    /// Put `city` in the search box and look it up.
    SearchCity(String),
    Save,
    RefreshHistory,
    OpenDay(usize),
    CloseDay,
    SelectTab(ForecastTab),
    DismissError,
}

#[derive(Clone, Copy)]
pub struct WeatherController {
    pub weather: RwSignal<WeatherState>,
    pub history: RwSignal<HistoryState>,
    pub ui: RwSignal<UiState>,
    pub query: RwSignal<String>,
}

impl WeatherController {
    pub fn from_context() -> Self {
        Self {
            weather: expect_context::<RwSignal<WeatherState>>(),
            history: expect_context::<RwSignal<HistoryState>>(),
            ui: expect_context::<RwSignal<UiState>>(),
            query: RwSignal::new(String::new()),
        }
    }

    pub fn dispatch(self, command: WeatherCommand) {
        match command {
            WeatherCommand::Search => self.search(),
            WeatherCommand::SearchCity(city) => {
                self.query.set(city);
                self.search();
            }
            WeatherCommand::Save => self.save(),
            WeatherCommand::RefreshHistory => self.refresh_history(),
            WeatherCommand::OpenDay(index) => self.weather.update(|w| w.open_day(index)),
            WeatherCommand::CloseDay => self.weather.update(|w| w.close_day()),
            WeatherCommand::SelectTab(tab) => self.ui.update(|u| u.forecast_tab = tab),
            WeatherCommand::DismissError => self.weather.update(|w| w.dismiss_error()),
        }
    }

    fn search(self) {
        let query = self.query.get_untracked();
        let Some(city) = self.weather.try_update(|w| w.begin_search(&query)).flatten() else {
            return;
        };
        let weather = self.weather;

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let client = ApiClient::browser();
            let result = api::fetch_current_weather(&client, &city).await;
            let load_forecasts_next = weather.try_update(|w| w.finish_search(result)).unwrap_or(false);
            if !load_forecasts_next {
                return;
            }
            let (daily_client, daily_city) = (client.clone(), city.clone());
            leptos::task::spawn_local(async move {
                let result = api::fetch_daily_forecast(&daily_client, &daily_city).await;
                weather.update(|w| apply_daily(w, result));
            });
            let result = api::fetch_hourly_forecast(&client, &city).await;
            weather.update(|w| apply_hourly(w, result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (city, weather);
    }

    fn save(self) {
        let Some(current) = self.weather.try_update(WeatherState::begin_save).flatten() else {
            return;
        };
        let weather = self.weather;
        let controller = self;

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let client = ApiClient::browser();
            let result = api::save_weather(&client, &current).await;
            let refresh = weather.try_update(|w| w.finish_save(result)).unwrap_or(false);
            if refresh {
                controller.refresh_history();
                gloo_timers::future::sleep(crate::util::config::SAVE_RESET_DELAY).await;
                weather.update(WeatherState::reset_save);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (current, weather, controller);
    }

    fn refresh_history(self) {
        let history = self.history;
        history.update(HistoryState::begin_load);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let client = ApiClient::browser();
            let result = api::fetch_history(&client, crate::util::config::HISTORY_LIMIT).await;
            history.update(|h| h.finish_load(result));
        });
    }
}

#[component]
pub fn WeatherPage() -> impl IntoView {
    let controller = WeatherController::from_context();
    let WeatherController { weather, history, ui, query } = controller;

    Effect::new(move || {
        if !guard_page(LANDING_PATH).is_redirect() {
            controller.dispatch(WeatherCommand::RefreshHistory);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        controller.dispatch(WeatherCommand::Search);
    };

    let hourly = Signal::derive(move || weather.get().hourly);
    let daily = Signal::derive(move || weather.get().daily);

    view! {
        <div class="weather-page">
            <Navbar active=LANDING_PATH/>
            <main class="weather-page__main">
                <form class="search" on:submit=on_submit>
                    <input
                        class="search__input"
                        type="text"
                        placeholder="Enter city name..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary search__button" type="submit" disabled=move || weather.get().loading>
                        {move || if weather.get().loading { "Searching..." } else { "Search" }}
                    </button>
                </form>

                <Show when=move || weather.get().error.is_some()>
                    <div class="weather-error" role="alert">
                        <span>{move || weather.get().error.unwrap_or_default()}</span>
                        <button
                            class="weather-error__dismiss"
                            aria-label="Dismiss"
                            on:click=move |_| controller.dispatch(WeatherCommand::DismissError)
                        >
                            "×"
                        </button>
                    </div>
                </Show>

                <Show when=move || weather.get().loading>
                    <div class="weather-loading">"Loading weather..."</div>
                </Show>

                {move || {
                    weather
                        .get()
                        .current
                        .map(|current| {
                            view! {
                                <CurrentWeatherCard weather=current/>
                                <button
                                    class="btn save-button"
                                    disabled=move || weather.get().save_status.is_busy()
                                    on:click=move |_| controller.dispatch(WeatherCommand::Save)
                                >
                                    {move || {
                                        let status = weather.get().save_status;
                                        format!("{} {}", status.icon(), status.label())
                                    }}
                                </button>
                            }
                        })
                }}

                <Show when=move || weather.get().has_forecast()>
                    <section class="forecast">
                        <div class="forecast__tabs">
                            {[ForecastTab::Hourly, ForecastTab::Daily]
                                .into_iter()
                                .map(|tab| {
                                    view! {
                                        <button
                                            class="forecast__tab"
                                            class:forecast__tab--active=move || ui.get().forecast_tab == tab
                                            on:click=move |_| controller.dispatch(WeatherCommand::SelectTab(tab))
                                        >
                                            {tab.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <Show
                            when=move || ui.get().forecast_tab == ForecastTab::Hourly
                            fallback=move || {
                                view! {
                                    <DailyForecastList
                                        entries=daily
                                        on_select=Callback::new(move |index| {
                                            controller.dispatch(WeatherCommand::OpenDay(index));
                                        })
                                    />
                                }
                            }
                        >
                            <HourlyForecastList entries=hourly/>
                        </Show>
                    </section>
                </Show>

                <HistoryPanel
                    history=history
                    on_refresh=Callback::new(move |()| controller.dispatch(WeatherCommand::RefreshHistory))
                    on_pick=Callback::new(move |city| controller.dispatch(WeatherCommand::SearchCity(city)))
                />
            </main>

            {move || {
                let state = weather.get();
                state
                    .selected_day
                    .map(|day| {
                        view! {
                            <DayModal
                                day=day
                                city=state.current_city.clone().unwrap_or_default()
                                on_close=Callback::new(move |()| controller.dispatch(WeatherCommand::CloseDay))
                            />
                        }
                    })
            }}
        </div>
    }
}
