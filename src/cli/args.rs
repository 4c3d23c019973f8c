//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Reddit-to-Discord image relay CLI.
#[derive(Parser, Debug)]
#[command(
    name = "reddit-embed-relay",
    version,
    about = "Relay images from a subreddit's RSS feeds to a Discord webhook",
    long_about = "Polls a subreddit's new/hot/top RSS feeds, extracts direct image URLs,\n\
                  skips previously-seen and blocklisted entries, and posts the rest as\n\
                  Discord embeds. Seen identifiers persist across runs in a state file."
)]
pub struct Args {
    /// Subreddit to poll (without the "r/" prefix).
    #[arg(short, long, env = "SUBREDDIT")]
    pub subreddit: Option<String>,

    /// Discord webhook URL to post embeds to.
    #[arg(short, long, env = "DISCORD_WEBHOOK_URL")]
    pub webhook_url: Option<String>,

    /// Time window for the "top" feed (hour, day, week, month, year, all).
    #[arg(short, long, env = "TOP_TIME")]
    pub top_time: Option<String>,

    /// Maximum number of images posted in a single run.
    #[arg(short, long, env = "MAX_PER_RUN")]
    pub max_per_run: Option<usize>,

    /// Path of the seen-identifier state file.
    #[arg(long, env = "STATE_FILE")]
    pub state_file: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Fetch and extract but do not post or persist state.
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(subreddit) = self.subreddit {
            config.subreddit = subreddit;
        }

        if let Some(webhook_url) = self.webhook_url {
            config.webhook_url = webhook_url;
        }

        if let Some(top_time) = self.top_time {
            config.top_time = top_time;
        }

        if let Some(max_per_run) = self.max_per_run {
            config.max_per_run = max_per_run;
        }

        if let Some(state_file) = self.state_file {
            config.state_file = state_file;
        }

        if self.dry_run {
            config.dry_run = true;
        }
    }
}
