//! Top navigation bar for authenticated pages.
//!
//! Holds page links, the mobile menu toggle, the theme toggle, the signed-in
//! email, and logout.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::{FORECAST_PATH, LANDING_PATH};
use crate::util::navigation::BrowserNavigator;
use crate::util::storage::LocalStorage;
use crate::util::theme;
use crate::util::token_store::TokenStore;

#[component]
pub fn Navbar(
    /// Path of the page rendering the bar, used to mark the active link.
    active: &'static str,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle_theme = move |_| {
        let next = theme::toggle(&LocalStorage, ui.get_untracked().theme);
        ui.update(|u| u.theme = next);
    };

    let on_logout = move |_| {
        auth.set(AuthState::default());
        crate::util::auth::logout(&TokenStore::new(LocalStorage), &BrowserNavigator);
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href=LANDING_PATH>"Weather Pro"</a>
            <button
                class="navbar__menu-toggle"
                aria-label="Toggle menu"
                on:click=move |_| ui.update(|u| u.menu_open = !u.menu_open)
            >
                "☰"
            </button>
            <div class="navbar__menu" class:active=move || ui.get().menu_open>
                <a
                    class="navbar__link"
                    class:navbar__link--active={active == LANDING_PATH}
                    href=LANDING_PATH
                >
                    "Weather"
                </a>
                <a
                    class="navbar__link"
                    class:navbar__link--active={active == FORECAST_PATH}
                    href=FORECAST_PATH
                >
                    "Forecast"
                </a>
                <span class="navbar__spacer"></span>
                <button class="btn navbar__theme" on:click=on_toggle_theme title="Toggle theme">
                    {move || ui.get().theme.toggle_icon()}
                </button>
                <span class="navbar__email">{move || auth.get().email.unwrap_or_default()}</span>
                <button class="btn navbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </div>
        </nav>
    }
}
