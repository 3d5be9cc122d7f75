//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, location,
//! the `<html>` theme attribute) from page and component logic to improve
//! reuse and testability.

pub mod auth;
pub mod config;
pub mod format;
pub mod navigation;
pub mod storage;
pub mod theme;
pub mod token_store;
