//! High-level interface wiring feed, animator and filter together.

use std::sync::Arc;

use tracing::{error, info};

use crate::animator::{Animator, AnimatorConfig};
use crate::api::{ArtistFeed, FeedConfig};
use crate::catalog::ArtistCatalog;
use crate::error::Result;
use crate::search::{SearchFilter, Selection};
use crate::surface::BlockSurface;

/// Notice shown when the artist list cannot be loaded.
pub const LOAD_FAILED_NOTICE: &str = "Unable to load artists";

/// A running falling-artists display.
///
/// Created once the feed has loaded; the catalog is read-only from then
/// on. Dropping the value stops every slot.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use artistfall::{AnimatorConfig, ArtistRain, ConsoleSurface, FeedConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let surface = Arc::new(ConsoleSurface::new(1280.0));
///     let rain = ArtistRain::load(
///         FeedConfig::with_base_url("http://localhost:8000"),
///         surface,
///         AnimatorConfig::default(),
///     )
///     .await?;
///
///     rain.search("queen");
///     Ok(())
/// }
/// ```
pub struct ArtistRain<S: BlockSurface> {
    catalog: ArtistCatalog,
    animator: Arc<Animator<S>>,
    filter: SearchFilter<S>,
}

impl<S: BlockSurface> ArtistRain<S> {
    /// Fetch the artist list and start falling with all of it.
    ///
    /// On failure the surface shows [`LOAD_FAILED_NOTICE`] and the error
    /// is returned.
    pub async fn load(feed: FeedConfig, surface: Arc<S>, config: AnimatorConfig) -> Result<Self> {
        let animator = Animator::new(Arc::clone(&surface), config)?;
        let feed = ArtistFeed::new(feed)?;

        match feed.fetch_artists().await {
            Ok(catalog) => Ok(Self::with_catalog(catalog, animator)),
            Err(e) => {
                error!("Could not load artists: {}", e);
                surface.show_notice(LOAD_FAILED_NOTICE);
                Err(e)
            }
        }
    }

    /// Start animating an already loaded catalog.
    pub fn with_catalog(catalog: ArtistCatalog, animator: Animator<S>) -> Self {
        let animator = Arc::new(animator);
        let filter = SearchFilter::new(catalog.clone(), Arc::clone(&animator));
        animator.start(catalog.all().to_vec());
        info!("Animating {} artists", catalog.len());

        Self {
            catalog,
            animator,
            filter,
        }
    }

    pub fn catalog(&self) -> &ArtistCatalog {
        &self.catalog
    }

    pub fn animator(&self) -> &Animator<S> {
        &self.animator
    }

    /// Apply a search query, see [`SearchFilter::on_input`].
    pub fn search(&self, query: &str) -> Selection {
        self.filter.on_input(query)
    }

    /// Stop the animation and clear the surface.
    pub fn shutdown(self) {
        self.animator.stop();
    }
}
