//! Data models for the artist feed.

pub mod artist;

pub use artist::{Artist, ArtistId, DETAIL_PATH};
