//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page runs the route guard for its own path once mounted, then
//! renders. Credential flows shared by login and signup live in
//! `credentials`.

pub mod credentials;
pub mod forecast;
pub mod home;
pub mod login;
pub mod signup;
pub mod weather;
