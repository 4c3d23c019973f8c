//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;
use url::Url;

/// Required prefix for Discord webhook URLs.
const WEBHOOK_PREFIX: &str = "https://discord.com/api/webhooks/";

/// Accepted time windows for the "top" feed.
const TOP_TIME_WINDOWS: &[&str] = &["hour", "day", "week", "month", "year", "all"];

/// Validate the entire configuration.
///
/// Runs before any state file or network access, so an invalid
/// configuration never mutates anything.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_webhook_url(&config.webhook_url)?;
    validate_subreddit(&config.subreddit)?;
    validate_top_time(&config.top_time)?;

    if config.max_per_run == 0 {
        return Err(Error::ConfigValidation {
            field: "max_per_run".to_string(),
            message: "Must be at least 1".to_string(),
        });
    }

    Ok(())
}

/// Validate the Discord webhook URL shape.
pub fn validate_webhook_url(webhook_url: &str) -> Result<()> {
    if webhook_url.is_empty() {
        return Err(Error::MissingConfig("webhook_url".to_string()));
    }

    if !webhook_url.starts_with(WEBHOOK_PREFIX) {
        return Err(Error::ConfigValidation {
            field: "webhook_url".to_string(),
            message: format!("Must start with {}", WEBHOOK_PREFIX),
        });
    }

    Url::parse(webhook_url)?;

    Ok(())
}

/// Validate the subreddit name.
pub fn validate_subreddit(subreddit: &str) -> Result<()> {
    if subreddit.is_empty() {
        return Err(Error::MissingConfig("subreddit".to_string()));
    }

    // Reddit naming rules: 2-21 chars, alphanumeric and underscores
    let pattern = Regex::new(r"^[A-Za-z0-9_]{2,21}$").unwrap();

    let clean = subreddit.trim_start_matches("r/");
    if !pattern.is_match(clean) {
        return Err(Error::ConfigValidation {
            field: "subreddit".to_string(),
            message: format!(
                "'{}' is not a valid subreddit name. Use 2-21 alphanumeric or underscore characters.",
                subreddit
            ),
        });
    }

    Ok(())
}

/// Validate the "top" feed time window.
pub fn validate_top_time(top_time: &str) -> Result<()> {
    if !TOP_TIME_WINDOWS.contains(&top_time) {
        return Err(Error::ConfigValidation {
            field: "top_time".to_string(),
            message: format!(
                "'{}' is not a valid time window. Expected one of: {}",
                top_time,
                TOP_TIME_WINDOWS.join(", ")
            ),
        });
    }

    Ok(())
}
