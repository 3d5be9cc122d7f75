//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render weather data and page chrome. They receive data and
//! callbacks as props; only the navbar reads shared state from context.

pub mod current_weather;
pub mod day_modal;
pub mod flash_message;
pub mod forecast_lists;
pub mod history_panel;
pub mod navbar;
