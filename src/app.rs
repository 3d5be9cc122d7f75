//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::pages::{
    forecast::ForecastPage, home::HomePage, login::LoginPage, signup::SignupPage, weather::WeatherPage,
};
use crate::state::{auth::AuthState, history::HistoryState, ui::UiState, weather::WeatherState};
use crate::util::auth::guard_page;
use crate::util::storage::LocalStorage;
use crate::util::theme;
use crate::util::token_store::TokenStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Seeds shared state from browser storage, provides it as context, and sets
/// up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = TokenStore::new(LocalStorage).read();
    let preference = theme::read_preference(&LocalStorage);
    theme::apply(preference);

    let auth = RwSignal::new(AuthState::from_session(session.as_ref()));
    let ui = RwSignal::new(UiState::with_theme(preference));
    let weather = RwSignal::new(WeatherState::default());
    let history = RwSignal::new(HistoryState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(weather);
    provide_context(history);

    view! {
        <Stylesheet id="leptos" href="/pkg/weather-client.css"/>
        <Title text="Weather Pro"/>

        <Router>
            <Routes fallback=NotFound>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("weather") view=WeatherPage/>
                <Route path=StaticSegment("forecast") view=ForecastPage/>
            </Routes>
        </Router>
    }
}

/// Unknown paths are guarded like protected pages.
#[component]
fn NotFound() -> impl IntoView {
    let path = use_location().pathname;
    Effect::new(move || {
        guard_page(&path.get_untracked());
    });
    view! { <p class="not-found">"Page not found."</p> }
}
