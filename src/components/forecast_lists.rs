//! Hourly and daily forecast card strips.
//!
//! Both lists render whatever slice they are given; the hourly window cut is
//! applied in `WeatherState::set_hourly` before data reaches the view.

use leptos::prelude::*;

use crate::net::types::{DailyForecast, HourlyForecast};
use crate::util::format::{self, IconSize};

#[component]
pub fn HourlyForecastList(entries: Signal<Vec<HourlyForecast>>) -> impl IntoView {
    view! {
        <div class="hourly-forecast">
            {move || {
                entries
                    .get()
                    .into_iter()
                    .map(|hour| {
                        let icon = format::icon_url(&hour.icon, IconSize::Small);
                        view! {
                            <div class="hourly-card">
                                <div class="hourly-card__time">{hour.time}</div>
                                <img class="hourly-card__icon" src=icon alt=hour.description.clone()/>
                                <div class="hourly-card__temp">{format::degrees(hour.temp)}</div>
                                <div class="hourly-card__desc">{hour.description}</div>
                                <div class="hourly-card__pop">{format!("💧 {}", format::percent(hour.pop))}</div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Daily cards. When `on_select` is set, clicking a card reports its index.
#[component]
pub fn DailyForecastList(
    entries: Signal<Vec<DailyForecast>>,
    #[prop(optional)] on_select: Option<Callback<usize>>,
) -> impl IntoView {
    view! {
        <div class="daily-forecast">
            {move || {
                entries
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, day)| {
                        let icon = format::icon_url(&day.icon, IconSize::Small);
                        view! {
                            <div
                                class="daily-card"
                                class:daily-card--clickable=on_select.is_some()
                                on:click=move |_| {
                                    if let Some(on_select) = on_select.as_ref() {
                                        on_select.run(index);
                                    }
                                }
                            >
                                <div class="daily-card__date">{day.date}</div>
                                <div class="daily-card__content">
                                    <img class="daily-card__icon" src=icon alt=day.description.clone()/>
                                    <div class="daily-card__temps">
                                        <div class="daily-card__high">{format::degrees(day.temp_max)}</div>
                                        <div class="daily-card__low">{format::degrees(day.temp_min)}</div>
                                    </div>
                                </div>
                                <div class="daily-card__desc">{day.description}</div>
                                <div class="daily-card__stats">
                                    <span>{format!("💧 {}", format::percent(day.pop))}</span>
                                    <span>{format!("💨 {}", format::wind_speed(day.wind_speed))}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
