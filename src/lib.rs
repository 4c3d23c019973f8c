//! reddit-embed-relay - relays subreddit images to a Discord webhook.
//!
//! This library polls a subreddit's RSS feeds and republishes direct image
//! URLs as Discord embeds.
//!
//! # Features
//!
//! - Polls the new, hot, and top feeds of one subreddit
//! - Cross-run dedup via a persisted seen-identifier state file
//! - Title blocklist filtering
//! - Image URL extraction from media fields and inline HTML
//! - Batched webhook posting with bounded rate-limit backoff
//!
//! # Example
//!
//! ```no_run
//! use reddit_embed_relay::{run, validate_config, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config {
//!         subreddit: "EarthPorn".to_string(),
//!         webhook_url: "https://discord.com/api/webhooks/123/token".to_string(),
//!         ..Default::default()
//!     };
//!     validate_config(&config)?;
//!
//!     let stats = run(&config).await?;
//!     println!("Sent {} item(s).", stats.sent);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod feed;
pub mod filter;
pub mod media;
pub mod output;
pub mod publish;
pub mod run;
pub mod state;

// Re-exports for convenience
pub use config::{validate_config, Config};
pub use error::{Error, Result};
pub use feed::{Bucket, FeedClient, FeedEntry};
pub use run::{run, RunStats};
pub use state::SeenState;
