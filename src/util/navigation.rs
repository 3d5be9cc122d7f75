//! Full-page navigation.
//!
//! Session changes (login, logout, expiry) reload the target page instead of
//! routing in place so every page starts from a fresh guard check. Once a
//! navigation is issued, nothing after it on the current page should be
//! relied on.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Sink for full-page navigations.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Navigates via `window.location.href`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            leptos::logging::log!("navigation requested outside browser: {path}");
        }
    }
}

/// Records requested paths instead of navigating. Clones share the log.
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    visits: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.visits.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits.borrow_mut().push(path.to_owned());
    }
}
