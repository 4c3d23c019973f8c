//! Cross-run dedup state persistence.

pub mod store;

pub use store::{SeenState, MAX_SEEN_PER_BUCKET};
