//! Inline success/error message with auto-hide.
//!
//! ERROR HANDLING
//! ==============
//! The hide timer can outlive the page that owns the message signal (the
//! user may navigate away within the timeout). Expiry only uses the `try_`
//! signal accessors, so a disposed slot is left alone.

#[cfg(test)]
#[path = "flash_message_test.rs"]
mod flash_message_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::util::config::MESSAGE_TIMEOUT;

/// Show `message` in `slot`, clearing it after `MESSAGE_TIMEOUT` unless it
/// was replaced in the meantime.
pub fn flash(slot: RwSignal<Option<String>>, message: String) {
    slot.set(Some(message.clone()));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(MESSAGE_TIMEOUT).await;
        expire(slot, &message);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = message;
}

/// Whether a message shown earlier as `shown` is still the current one.
fn should_clear(current: Option<&str>, shown: &str) -> bool {
    current == Some(shown)
}

/// Clear `slot` if it still holds `shown`. Returns whether it was cleared.
/// A replaced message or a disposed slot is left untouched.
pub fn expire(slot: RwSignal<Option<String>>, shown: &str) -> bool {
    let clear = slot
        .try_with_untracked(|current| should_clear(current.as_deref(), shown))
        .unwrap_or(false);
    if clear {
        let _ = slot.try_set(None);
    }
    clear
}

/// Renders `message` when set. `kind` selects styling (`error` / `success`).
#[component]
pub fn FlashMessage(message: RwSignal<Option<String>>, kind: &'static str) -> impl IntoView {
    let class = format!("auth-message auth-message--{kind}");
    view! {
        <Show when=move || message.get().is_some()>
            <p class=class.clone() role="alert">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}
