//! Text filter that narrows which artists fall.

use std::sync::Arc;

use tracing::debug;

use crate::animator::Animator;
use crate::catalog::ArtistCatalog;
use crate::models::Artist;
use crate::surface::BlockSurface;

/// Artists chosen for a query.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// At least one name contained the query.
    Matched(Vec<Artist>),
    /// Nothing matched, so the whole catalog is used.
    Fallback(Vec<Artist>),
}

impl Selection {
    pub fn artists(&self) -> &[Artist] {
        match self {
            Selection::Matched(list) | Selection::Fallback(list) => list,
        }
    }

    pub fn into_artists(self) -> Vec<Artist> {
        match self {
            Selection::Matched(list) | Selection::Fallback(list) => list,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Selection::Fallback(_))
    }
}

/// Case-insensitive substring selection over `catalog`.
///
/// Never returns an empty list unless the catalog itself is empty.
pub fn select(catalog: &ArtistCatalog, query: &str) -> Selection {
    let matched = catalog.filter(query);
    if matched.is_empty() {
        Selection::Fallback(catalog.all().to_vec())
    } else {
        Selection::Matched(matched)
    }
}

/// Restarts the animator whenever the query changes.
pub struct SearchFilter<S: BlockSurface> {
    catalog: ArtistCatalog,
    animator: Arc<Animator<S>>,
}

impl<S: BlockSurface> SearchFilter<S> {
    pub fn new(catalog: ArtistCatalog, animator: Arc<Animator<S>>) -> Self {
        Self { catalog, animator }
    }

    /// Handle one input change.
    pub fn on_input(&self, query: &str) -> Selection {
        let selection = select(&self.catalog, query);
        debug!(
            "Query {:?} selected {} artists{}",
            query,
            selection.artists().len(),
            if selection.is_fallback() {
                " (fallback)"
            } else {
                ""
            }
        );
        self.animator.start(selection.artists().to_vec());
        selection
    }
}
