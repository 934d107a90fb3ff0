//! # artistfall
//!
//! A "falling blocks" display of artist thumbnails.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use artistfall::{AnimatorConfig, ArtistRain, ConsoleSurface, FeedConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let surface = Arc::new(ConsoleSurface::new(1280.0));
//!
//!     // Fetch /api/artists once and start 14 falling blocks
//!     let rain = ArtistRain::load(
//!         FeedConfig::with_base_url("http://localhost:8000"),
//!         surface,
//!         AnimatorConfig::default(),
//!     )
//!     .await?;
//!
//!     // Narrow the animation; no match falls back to everyone
//!     rain.search("queen");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Building blocks
//!
//! - [`ArtistFeed`] - one-shot fetch of the artist list
//! - [`ArtistCatalog`] - read-only artist state
//! - [`Animator`] - slot scheduler driving a [`BlockSurface`]
//! - [`SearchFilter`] - query handling with full-list fallback

pub mod animator;
pub mod api;
pub mod catalog;
pub mod error;
pub mod models;
pub mod search;
mod showcase;
pub mod surface;

// Main interface (recommended)
pub use showcase::{ArtistRain, LOAD_FAILED_NOTICE};

pub use animator::{Animator, AnimatorConfig, Block, BlockId};
pub use api::{ArtistFeed, FeedConfig};
pub use catalog::ArtistCatalog;
pub use error::FeedError;
pub use models::{Artist, ArtistId};
pub use search::{SearchFilter, Selection};
pub use surface::{BlockSurface, ConsoleSurface, MemorySurface};
