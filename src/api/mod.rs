//! HTTP client for the artist backend.
//!
//! - [`ArtistFeed`]: one-shot fetch of the artist list

pub mod feed;

pub use feed::{ArtistFeed, FeedConfig};
