//! Public welcome page at `/`.
//!
//! A signed-in visitor is sent straight to the weather page.

use leptos::prelude::*;

use crate::util::auth::{LOGIN_PATH, ROOT_PATH, SIGNUP_PATH, guard_page};

#[component]
pub fn HomePage() -> impl IntoView {
    Effect::new(move || {
        guard_page(ROOT_PATH);
    });

    view! {
        <div class="home-page">
            <div class="home-card">
                <h1>"Weather Pro"</h1>
                <p class="home-card__subtitle">
                    "Current conditions, hourly and daily forecasts, and a history of your lookups."
                </p>
                <div class="home-card__actions">
                    <a class="btn btn--primary" href=LOGIN_PATH>"Login"</a>
                    <a class="btn" href=SIGNUP_PATH>"Sign Up"</a>
                </div>
            </div>
        </div>
    }
}
