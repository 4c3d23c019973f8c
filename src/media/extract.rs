//! Media URL extraction from feed entries.

use std::collections::HashSet;

use scraper::{Html, Selector};

use crate::feed::FeedEntry;

/// File extensions accepted as direct images (lowercase, without dot).
const IMAGE_EXTS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Pick the first direct-image URL for an entry, if any.
///
/// Candidates are gathered in priority order: explicit media-content
/// fields, then `<img src>` / `<a href>` URLs in the content body, then
/// the same scrape of the summary. Candidates are entity-normalized and
/// deduplicated preserving first-seen order before the extension check.
pub fn pick_media_url(entry: &FeedEntry) -> Option<String> {
    let mut candidates: Vec<String> = entry.media_urls.clone();

    if let Some(content) = &entry.content {
        candidates.extend(extract_urls_from_html(content));
    }

    if let Some(summary) = &entry.summary {
        candidates.extend(extract_urls_from_html(summary));
    }

    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .map(|url| normalize_url(&url))
        .filter(|url| seen.insert(url.clone()))
        .find(|url| is_image_url(url))
}

/// Collect `<img src>` then `<a href>` URLs from an HTML fragment.
pub fn extract_urls_from_html(html: &str) -> Vec<String> {
    let document = Html::parse_fragment(html);
    let img_selector = Selector::parse("img").unwrap();
    let a_selector = Selector::parse("a").unwrap();

    let mut urls = Vec::new();

    for element in document.select(&img_selector) {
        if let Some(src) = element.value().attr("src") {
            urls.push(src.to_string());
        }
    }

    for element in document.select(&a_selector) {
        if let Some(href) = element.value().attr("href") {
            urls.push(href.to_string());
        }
    }

    urls
}

/// Decode the one HTML entity reddit leaves in media URLs.
pub fn normalize_url(url: &str) -> String {
    url.replace("&amp;", "&")
}

/// Lowercased file extension of a URL, ignoring query string and fragment.
pub fn guess_ext(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next()?;
    let filename = path.rsplit('/').next()?;

    let (_, ext) = filename.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }

    Some(ext.to_lowercase())
}

fn is_image_url(url: &str) -> bool {
    guess_ext(url).is_some_and(|ext| IMAGE_EXTS.contains(&ext.as_str()))
}
