//! Recent lookups panel with refresh and click-to-search.

use leptos::prelude::*;

use crate::state::history::HistoryState;
use crate::util::format;

#[component]
pub fn HistoryPanel(
    history: RwSignal<HistoryState>,
    on_refresh: Callback<()>,
    /// Receives the city of a clicked record.
    on_pick: Callback<String>,
) -> impl IntoView {
    view! {
        <section class="history">
            <header class="history__header">
                <h3>"Recent Searches"</h3>
                <button class="btn history__refresh" on:click=move |_| on_refresh.run(())>
                    "↻ Refresh"
                </button>
            </header>
            <Show when=move || history.get().loading>
                <p class="history__loading">"Loading history..."</p>
            </Show>
            <Show when=move || history.get().is_empty_view()>
                <p class="history__empty">"No history yet. Search and save a location to see it here."</p>
            </Show>
            <Show when=move || !history.get().loading>
                <div class="history__grid">
                    {move || {
                        history
                            .get()
                            .records
                            .into_iter()
                            .enumerate()
                            .map(|(index, record)| {
                                let city = record.city_label().to_owned();
                                let country = record.country_label().to_owned();
                                let temp = format!("{}°C", record.temperature_label());
                                let time = record
                                    .timestamp
                                    .as_deref()
                                    .map(format::history_time)
                                    .unwrap_or_default();
                                view! {
                                    <div class="history-card" on:click=move |_| {
                                        if let Some(city) = history.with_untracked(|h| h.city_at(index)) {
                                            on_pick.run(city);
                                        }
                                    }>
                                        <div class="history-card__header">
                                            <div class="history-card__city">{city}</div>
                                            <div class="history-card__country">{country}</div>
                                        </div>
                                        <div class="history-card__temp">{temp}</div>
                                        <div class="history-card__time">{time}</div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </section>
    }
}
