//! Discord webhook payload types and batching.

use serde::Serialize;

/// Fixed embed accent color.
pub const EMBED_COLOR_RED: u32 = 0xFF0000;

/// Maximum embeds Discord accepts per webhook message.
pub const EMBEDS_PER_MESSAGE: usize = 10;

/// An image-only embed: just a color and the image URL, no text.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Embed {
    pub color: u32,
    pub image: EmbedImage,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EmbedImage {
    pub url: String,
}

/// Outbound webhook message body.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload {
    pub content: String,
    pub embeds: Vec<Embed>,
    pub allowed_mentions: AllowedMentions,
}

/// Mention suppression: an empty parse list disables all mentions.
#[derive(Debug, Clone, Serialize)]
pub struct AllowedMentions {
    pub parse: Vec<String>,
}

impl WebhookPayload {
    /// Build a message carrying the given embeds with mentions suppressed.
    pub fn new(embeds: Vec<Embed>) -> Self {
        Self {
            content: String::new(),
            embeds,
            allowed_mentions: AllowedMentions { parse: Vec::new() },
        }
    }
}

/// Build an image-only embed for a URL.
pub fn image_embed(url: String) -> Embed {
    Embed {
        color: EMBED_COLOR_RED,
        image: EmbedImage { url },
    }
}

/// Partition image URLs into ordered embed batches of up to
/// [`EMBEDS_PER_MESSAGE`] each.
pub fn build_batches(urls: Vec<String>) -> Vec<Vec<Embed>> {
    let mut batches = Vec::new();
    let mut current = Vec::new();

    for url in urls {
        current.push(image_embed(url));
        if current.len() >= EMBEDS_PER_MESSAGE {
            batches.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        batches.push(current);
    }

    batches
}
