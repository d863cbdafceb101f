//! Application pages

pub mod analytics;
pub mod billing;
pub mod dashboard;
pub mod genies;
pub mod home;
pub mod login;
pub mod oauth_callback;
pub mod settings;
