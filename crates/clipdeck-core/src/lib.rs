//! Core clipdeck library (config, session, API client, navigation).

pub mod api;
pub mod claims;
pub mod config;
pub mod forms;
pub mod logging;
pub mod media;
pub mod models;
pub mod navigator;
pub mod session;
pub mod store;
