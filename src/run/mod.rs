//! Run orchestration: fetch, dedup, filter, extract, publish, persist.

use std::collections::HashSet;
use std::time::Duration;

use tokio::time::sleep;

use crate::config::Config;
use crate::error::Result;
use crate::feed::{Bucket, FeedClient, FeedEntry, ALL_BUCKETS};
use crate::filter::is_blocked;
use crate::media::pick_media_url;
use crate::output::{print_info, print_warning};
use crate::publish::{build_batches, WebhookClient};
use crate::state::SeenState;

/// Pause between consecutive webhook batches.
const INTER_BATCH_DELAY: Duration = Duration::from_secs(1);

/// Counters accumulated over one run.
#[derive(Debug, Default)]
pub struct RunStats {
    pub fetched: u64,
    pub already_seen: u64,
    pub blocked: u64,
    pub found: u64,
    pub sent: u64,
    pub batches_failed: u64,
}

/// Run-local map of entry identifier to resolved image URL.
///
/// An identifier that appears in more than one bucket contributes a
/// single item; insertion order is posting order.
#[derive(Debug, Default)]
pub struct MergedItems {
    uids: HashSet<String>,
    items: Vec<(String, String)>,
}

impl MergedItems {
    /// Record a uid's image URL unless the uid already produced one.
    pub fn insert(&mut self, uid: String, url: String) {
        if self.uids.insert(uid.clone()) {
            self.items.push((uid, url));
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Image URLs in insertion order, truncated to `max` items.
    pub fn into_urls(self, max: usize) -> Vec<String> {
        self.items
            .into_iter()
            .take(max)
            .map(|(_, url)| url)
            .collect()
    }
}

/// Execute one relay run with a validated configuration.
pub async fn run(config: &Config) -> Result<RunStats> {
    let mut state = SeenState::load(&config.state_file);
    let feed_client = FeedClient::new()?;

    let mut merged = MergedItems::default();
    let mut stats = RunStats::default();

    for bucket in ALL_BUCKETS {
        print_info(&format!("Fetching {}...", bucket));
        let url = bucket.feed_url(&config.subreddit, &config.top_time);
        let entries = feed_client.fetch_entries(&url).await;
        process_bucket(&mut state, bucket, entries, &mut merged, &mut stats);
    }

    let urls = merged.into_urls(config.max_per_run);
    stats.found = urls.len() as u64;
    print_info(&format!("Found {} new image(s) to post.", stats.found));

    if config.dry_run {
        // No posting and no state save, so a later real run still picks
        // these entries up.
        print_info("Dry run: skipping webhook posts and state save.");
        return Ok(stats);
    }

    let webhook = WebhookClient::new(config.webhook_url.clone())?;

    for (i, batch) in build_batches(urls).into_iter().enumerate() {
        if i > 0 {
            sleep(INTER_BATCH_DELAY).await;
        }

        match webhook.post_batch(&batch).await {
            Ok(()) => stats.sent += batch.len() as u64,
            Err(e) => {
                // At-most-once: the batch is dropped, not re-queued
                print_warning(&format!("Dropping batch of {}: {}", batch.len(), e));
                stats.batches_failed += 1;
            }
        }
    }

    state.save(&config.state_file)?;

    Ok(stats)
}

/// Process one bucket's entries against the seen state.
///
/// The "new" feed arrives newest-first and is reversed so sequential
/// posting preserves temporal order; hot/top keep feed order. Every
/// unseen entry is marked seen before filtering or extraction, so
/// blocked and media-less entries are never revisited on later runs.
pub fn process_bucket(
    state: &mut SeenState,
    bucket: Bucket,
    mut entries: Vec<FeedEntry>,
    merged: &mut MergedItems,
    stats: &mut RunStats,
) {
    if bucket == Bucket::New {
        entries.reverse();
    }

    stats.fetched += entries.len() as u64;

    for entry in &entries {
        let uid = entry.uid();

        if state.is_seen(bucket, &uid) {
            stats.already_seen += 1;
            continue;
        }
        state.mark_seen(bucket, uid.clone());

        if let Some(title) = &entry.title {
            if is_blocked(title) {
                print_info(&format!("Skipping blocked title: {}", title));
                stats.blocked += 1;
                continue;
            }
        }

        if let Some(url) = pick_media_url(entry) {
            merged.insert(uid, url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, title: Option<&str>, image: Option<&str>) -> FeedEntry {
        FeedEntry {
            id: Some(id.to_string()),
            title: title.map(str::to_string),
            summary: image.map(|url| format!(r#"<img src="{}">"#, url)),
            ..Default::default()
        }
    }

    #[test]
    fn test_scenario_blocked_and_posted() {
        // Two new entries: one blocked by title, one with a qualifying image
        let mut state = SeenState::default();
        let mut merged = MergedItems::default();
        let mut stats = RunStats::default();

        let entries = vec![
            entry("b", Some("cute kid pic"), Some("https://x/b.jpg")),
            entry("a", Some("nice sunset"), Some("https://x/a.jpg")),
        ];
        process_bucket(&mut state, Bucket::New, entries, &mut merged, &mut stats);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged.into_urls(30), vec!["https://x/a.jpg"]);
        assert_eq!(stats.blocked, 1);
        // Both marked seen, including the blocked one
        assert!(state.is_seen(Bucket::New, "a"));
        assert!(state.is_seen(Bucket::New, "b"));
    }

    #[test]
    fn test_second_pass_is_idempotent() {
        let mut state = SeenState::default();
        let mut stats = RunStats::default();

        let entries = vec![
            entry("a", Some("one"), Some("https://x/a.png")),
            entry("b", None, None),
        ];

        let mut merged = MergedItems::default();
        process_bucket(
            &mut state,
            Bucket::Hot,
            entries.clone(),
            &mut merged,
            &mut stats,
        );
        assert_eq!(merged.len(), 1);

        // Same feed content again: everything already seen, nothing new
        let mut merged = MergedItems::default();
        process_bucket(&mut state, Bucket::Hot, entries, &mut merged, &mut stats);
        assert!(merged.is_empty());
        assert_eq!(stats.already_seen, 2);
    }

    #[test]
    fn test_new_bucket_reversed_to_oldest_first() {
        let mut state = SeenState::default();
        let mut merged = MergedItems::default();
        let mut stats = RunStats::default();

        // Feed order is newest-first
        let entries = vec![
            entry("newest", None, Some("https://x/2.jpg")),
            entry("oldest", None, Some("https://x/1.jpg")),
        ];
        process_bucket(&mut state, Bucket::New, entries, &mut merged, &mut stats);

        assert_eq!(
            merged.into_urls(30),
            vec!["https://x/1.jpg", "https://x/2.jpg"]
        );
    }

    #[test]
    fn test_hot_bucket_keeps_feed_order() {
        let mut state = SeenState::default();
        let mut merged = MergedItems::default();
        let mut stats = RunStats::default();

        let entries = vec![
            entry("first", None, Some("https://x/1.jpg")),
            entry("second", None, Some("https://x/2.jpg")),
        ];
        process_bucket(&mut state, Bucket::Hot, entries, &mut merged, &mut stats);

        assert_eq!(
            merged.into_urls(30),
            vec!["https://x/1.jpg", "https://x/2.jpg"]
        );
    }

    #[test]
    fn test_uid_deduped_across_buckets_in_one_run() {
        let mut state = SeenState::default();
        let mut merged = MergedItems::default();
        let mut stats = RunStats::default();

        let e = entry("same", None, Some("https://x/a.jpg"));
        process_bucket(
            &mut state,
            Bucket::Hot,
            vec![e.clone()],
            &mut merged,
            &mut stats,
        );
        process_bucket(&mut state, Bucket::Top, vec![e], &mut merged, &mut stats);

        // Seen per bucket, but one merged item only
        assert_eq!(stats.already_seen, 0);
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn test_merged_items_truncation() {
        let mut merged = MergedItems::default();
        for i in 0..40 {
            merged.insert(format!("id-{}", i), format!("https://x/{}.jpg", i));
        }
        let urls = merged.into_urls(30);
        assert_eq!(urls.len(), 30);
        assert_eq!(urls[0], "https://x/0.jpg");
        assert_eq!(urls[29], "https://x/29.jpg");
    }

    #[test]
    fn test_entries_without_media_still_marked_seen() {
        let mut state = SeenState::default();
        let mut merged = MergedItems::default();
        let mut stats = RunStats::default();

        let entries = vec![entry("text-post", Some("just talk"), None)];
        process_bucket(&mut state, Bucket::Top, entries, &mut merged, &mut stats);

        assert!(merged.is_empty());
        assert!(state.is_seen(Bucket::Top, "text-post"));
    }
}
