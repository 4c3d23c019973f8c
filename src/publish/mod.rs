//! Discord webhook publishing.

pub mod embed;
pub mod webhook;

pub use embed::{build_batches, image_embed, Embed, EMBEDS_PER_MESSAGE, EMBED_COLOR_RED};
pub use webhook::WebhookClient;
