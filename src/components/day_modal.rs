//! Detail modal for a single daily forecast entry.

use leptos::prelude::*;

use crate::net::types::DailyForecast;
use crate::util::format::{self, IconSize};

/// Closes on the close button or a click on the backdrop.
#[component]
pub fn DayModal(day: DailyForecast, city: String, on_close: Callback<()>) -> impl IntoView {
    let icon = format::icon_url(&day.icon, IconSize::Large);
    let high = format!("{}°C", format::round_whole(day.temp_max));
    let low = format!("{}°C", format::round_whole(day.temp_min));
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog day-modal" on:click=move |ev| ev.stop_propagation()>
                <button class="dialog__close" aria-label="Close" on:click=move |_| on_close.run(())>
                    "×"
                </button>
                <header class="day-modal__header">
                    <h2>{day.date}</h2>
                    <p class="day-modal__city">{city}</p>
                </header>
                <div class="day-modal__summary">
                    <img class="day-modal__icon" src=icon alt=day.description.clone()/>
                    <div>
                        <div class="day-modal__temp">{format::degrees(day.temp_max)}</div>
                        <div class="day-modal__desc">{day.description}</div>
                    </div>
                </div>
                <div class="day-modal__grid">
                    <div class="day-modal__stat">
                        <span class="day-modal__stat-icon">"🌡️"</span>
                        <span class="day-modal__stat-label">"High"</span>
                        <span class="day-modal__stat-value">{high}</span>
                    </div>
                    <div class="day-modal__stat">
                        <span class="day-modal__stat-icon">"❄️"</span>
                        <span class="day-modal__stat-label">"Low"</span>
                        <span class="day-modal__stat-value">{low}</span>
                    </div>
                    <div class="day-modal__stat">
                        <span class="day-modal__stat-icon">"🌧️"</span>
                        <span class="day-modal__stat-label">"Rain Chance"</span>
                        <span class="day-modal__stat-value">{format::percent(day.pop)}</span>
                    </div>
                    <div class="day-modal__stat">
                        <span class="day-modal__stat-icon">"💨"</span>
                        <span class="day-modal__stat-label">"Wind Speed"</span>
                        <span class="day-modal__stat-value">{format::wind_speed(day.wind_speed)}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
