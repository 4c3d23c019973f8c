//! Media URL extraction heuristics.

pub mod extract;

pub use extract::{extract_urls_from_html, guess_ext, normalize_url, pick_media_url};
