//! Current conditions card.

use leptos::prelude::*;

use crate::net::types::CurrentWeather;
use crate::util::format::{self, IconSize};

#[component]
pub fn CurrentWeatherCard(weather: CurrentWeather) -> impl IntoView {
    let icon = format::icon_url(&weather.icon, IconSize::Large);
    view! {
        <section class="current-weather">
            <header class="current-weather__location">
                <h2 class="current-weather__city">{weather.city}</h2>
                <span class="current-weather__country">{weather.country}</span>
            </header>
            <div class="current-weather__main">
                <img class="current-weather__icon" src=icon alt=weather.description.clone()/>
                <div class="current-weather__temp">
                    <span class="current-weather__value">{format::round_whole(weather.temperature)}</span>
                    <span class="current-weather__unit">"°C"</span>
                </div>
                <p class="current-weather__desc">{weather.description}</p>
            </div>
            <dl class="current-weather__details">
                <div>
                    <dt>"Feels like"</dt>
                    <dd>{format::degrees(weather.feels_like)}</dd>
                </div>
                <div>
                    <dt>"Humidity"</dt>
                    <dd>{format::percent(weather.humidity)}</dd>
                </div>
                <div>
                    <dt>"Wind"</dt>
                    <dd>{format::wind_speed(weather.wind_speed)}</dd>
                </div>
                <div>
                    <dt>"Pressure"</dt>
                    <dd>{format::pressure(weather.pressure)}</dd>
                </div>
            </dl>
        </section>
    }
}
