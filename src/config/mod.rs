//! Configuration module for the relay.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument parsing and merging
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::Config;
pub use validation::{validate_config, validate_subreddit, validate_webhook_url};
