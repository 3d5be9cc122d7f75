//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `weather`, `history`, `ui`) so individual
//! components can depend on small focused models. Each is provided once via
//! context as an `RwSignal`.

pub mod auth;
pub mod history;
pub mod ui;
pub mod weather;
