//! Feed bucket definitions.

use std::fmt;

/// One of the three subreddit feed categories, each with independent
/// dedup state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    New,
    Hot,
    Top,
}

/// All buckets in processing order.
pub const ALL_BUCKETS: [Bucket; 3] = [Bucket::New, Bucket::Hot, Bucket::Top];

impl Bucket {
    /// Stable key used in the state file and log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::New => "new",
            Bucket::Hot => "hot",
            Bucket::Top => "top",
        }
    }

    /// RSS endpoint for this bucket of a subreddit.
    ///
    /// Only the "top" feed takes a time window parameter.
    pub fn feed_url(&self, subreddit: &str, top_time: &str) -> String {
        match self {
            Bucket::New => format!("https://old.reddit.com/r/{}/new/.rss", subreddit),
            Bucket::Hot => format!("https://old.reddit.com/r/{}/hot/.rss", subreddit),
            Bucket::Top => format!(
                "https://old.reddit.com/r/{}/top/.rss?t={}",
                subreddit, top_time
            ),
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
