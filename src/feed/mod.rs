//! Subreddit RSS feed fetching and parsing.

pub mod bucket;
pub mod client;
pub mod entry;

pub use bucket::{Bucket, ALL_BUCKETS};
pub use client::FeedClient;
pub use entry::FeedEntry;
