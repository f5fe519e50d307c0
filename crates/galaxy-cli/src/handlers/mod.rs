//! Command handlers.

pub mod check_config;
pub mod serve;
