//! Account creation page.

use leptos::prelude::*;

use crate::components::flash_message::{FlashMessage, flash};
use crate::util::auth::{LOGIN_PATH, SIGNUP_PATH, guard_page};

#[component]
pub fn SignupPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        guard_page(SIGNUP_PATH);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get();
        let password_value = password.get();
        let confirm_value = confirm.get();
        if let Err(message) = super::credentials::validate_signup_input(&email_value, &password_value, &confirm_value)
        {
            flash(error, message.to_owned());
            return;
        }
        busy.set(true);
        error.set(None);
        success.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use super::credentials::{FlowOutcome, schedule_redirect, submit_signup};
            use crate::net::http::ApiClient;
            use crate::util::navigation::BrowserNavigator;

            let client = ApiClient::browser();
            match submit_signup(&client, &email_value, &password_value, &confirm_value).await {
                FlowOutcome::Success { message, redirect } => {
                    flash(success, message);
                    schedule_redirect(redirect, BrowserNavigator);
                }
                FlowOutcome::Failure(message) => {
                    flash(error, message);
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Weather Pro"</h1>
                <p class="auth-card__subtitle">"Create an account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password (min. 6 characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <FlashMessage message=error kind="error"/>
                <FlashMessage message=success kind="success"/>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href=LOGIN_PATH>"Login"</a>
                </p>
            </div>
        </div>
    }
}
