//! Core pwx library (config, logging, session storage, API client).

pub mod api;
pub mod config;
pub mod logging;
pub mod session;
