//! Feed entry representation.

use feed_rs::model::Entry;

/// A feed entry with its optional fields resolved once at parse time.
///
/// RSS entries expose fields unevenly (no id, no title, media in
/// extensions or inline HTML), so everything downstream works off this
/// struct instead of probing the raw model.
#[derive(Debug, Clone, Default)]
pub struct FeedEntry {
    /// Feed-provided identifier, if any.
    pub id: Option<String>,

    /// Primary link, if any.
    pub link: Option<String>,

    /// Entry title, trimmed, if non-empty.
    pub title: Option<String>,

    /// URLs from explicit media-content extensions, in feed order.
    pub media_urls: Vec<String>,

    /// Raw HTML content body, if any.
    pub content: Option<String>,

    /// Raw HTML summary, if any.
    pub summary: Option<String>,
}

impl FeedEntry {
    /// Stable identifier for dedup: id, else link, else title, else "unknown".
    pub fn uid(&self) -> String {
        self.id
            .clone()
            .or_else(|| self.link.clone())
            .or_else(|| self.title.clone())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

impl From<&Entry> for FeedEntry {
    fn from(entry: &Entry) -> Self {
        let id = if entry.id.is_empty() {
            None
        } else {
            Some(entry.id.clone())
        };

        let link = entry.links.first().map(|l| l.href.clone());

        let title = entry
            .title
            .as_ref()
            .map(|t| t.content.trim().to_string())
            .filter(|t| !t.is_empty());

        let mut media_urls = Vec::new();
        for media in &entry.media {
            for content in &media.content {
                if let Some(url) = &content.url {
                    media_urls.push(url.to_string());
                }
            }
            for thumbnail in &media.thumbnails {
                media_urls.push(thumbnail.image.uri.clone());
            }
        }

        let content = entry.content.as_ref().and_then(|c| c.body.clone());

        let summary = entry.summary.as_ref().map(|s| s.content.clone());

        Self {
            id,
            link,
            title,
            media_urls,
            content,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uid_prefers_id() {
        let entry = FeedEntry {
            id: Some("t3_abc".to_string()),
            link: Some("https://example.com/post".to_string()),
            title: Some("A post".to_string()),
            ..Default::default()
        };
        assert_eq!(entry.uid(), "t3_abc");
    }

    #[test]
    fn test_uid_falls_back_to_link_then_title() {
        let entry = FeedEntry {
            link: Some("https://example.com/post".to_string()),
            title: Some("A post".to_string()),
            ..Default::default()
        };
        assert_eq!(entry.uid(), "https://example.com/post");

        let entry = FeedEntry {
            title: Some("A post".to_string()),
            ..Default::default()
        };
        assert_eq!(entry.uid(), "A post");
    }

    #[test]
    fn test_uid_unknown_when_all_absent() {
        assert_eq!(FeedEntry::default().uid(), "unknown");
    }
}
