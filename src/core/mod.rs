//! Core infrastructure: configuration, errors, and status output.

pub mod config;
pub mod error;
pub mod output;
