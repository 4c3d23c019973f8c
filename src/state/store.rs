//! Persistent seen-identifier state.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::feed::Bucket;

/// Maximum identifiers retained per bucket; oldest are evicted on save.
pub const MAX_SEEN_PER_BUCKET: usize = 4000;

/// Seen entry identifiers per feed bucket, persisted across runs.
///
/// Lists are append-ordered: index 0 is the oldest identifier still
/// retained. The file is read once at process start and written once at
/// the end of a successful run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeenState {
    #[serde(default)]
    pub new: Vec<String>,

    #[serde(default)]
    pub hot: Vec<String>,

    #[serde(default)]
    pub top: Vec<String>,
}

impl SeenState {
    /// Load state from a file.
    ///
    /// A missing or corrupt file yields empty state; prior-run dedup is
    /// lost in the corrupt case but the run proceeds.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(state) => state,
                Err(e) => {
                    tracing::warn!(
                        "State file {} is corrupt ({}), starting from empty state",
                        path.display(),
                        e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(
                    "Could not read state file {} ({}), starting from empty state",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Truncate each bucket to its most recent identifiers and write to a file.
    pub fn save(&mut self, path: &Path) -> Result<()> {
        for bucket in [Bucket::New, Bucket::Hot, Bucket::Top] {
            let list = self.bucket_mut(bucket);
            if list.len() > MAX_SEEN_PER_BUCKET {
                list.drain(..list.len() - MAX_SEEN_PER_BUCKET);
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check whether an identifier was already processed in a bucket.
    pub fn is_seen(&self, bucket: Bucket, uid: &str) -> bool {
        self.bucket_list(bucket).iter().any(|seen| seen == uid)
    }

    /// Record an identifier as processed in a bucket.
    pub fn mark_seen(&mut self, bucket: Bucket, uid: String) {
        self.bucket_mut(bucket).push(uid);
    }

    fn bucket_list(&self, bucket: Bucket) -> &Vec<String> {
        match bucket {
            Bucket::New => &self.new,
            Bucket::Hot => &self.hot,
            Bucket::Top => &self.top,
        }
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut Vec<String> {
        match bucket {
            Bucket::New => &mut self.new,
            Bucket::Hot => &mut self.hot,
            Bucket::Top => &mut self.top,
        }
    }
}
