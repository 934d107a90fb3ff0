//! Read-only artist state for one session.

use std::sync::Arc;

use crate::models::{Artist, ArtistId};

/// The artist list as fetched from the feed.
///
/// Immutable once built. Clones share the same backing slice, and
/// filtering always returns a derived list.
#[derive(Debug, Clone, Default)]
pub struct ArtistCatalog {
    artists: Arc<[Artist]>,
}

impl ArtistCatalog {
    /// Build a catalog from fetched records.
    pub fn new(artists: Vec<Artist>) -> Self {
        Self {
            artists: artists.into(),
        }
    }

    /// All artists in feed order.
    pub fn all(&self) -> &[Artist] {
        &self.artists
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// Look up an artist by id.
    pub fn get(&self, id: &ArtistId) -> Option<&Artist> {
        self.artists.iter().find(|a| &a.id == id)
    }

    /// Artists whose name contains `query`, ignoring case.
    ///
    /// An empty query matches everyone.
    pub fn filter(&self, query: &str) -> Vec<Artist> {
        let needle = query.to_lowercase();
        self.artists
            .iter()
            .filter(|a| a.name_contains(&needle))
            .cloned()
            .collect()
    }
}

impl From<Vec<Artist>> for ArtistCatalog {
    fn from(artists: Vec<Artist>) -> Self {
        Self::new(artists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ArtistCatalog {
        ArtistCatalog::new(vec![
            Artist::new(1, "Abba", "a.png"),
            Artist::new(2, "Queen", "q.png"),
            Artist::new(3, "Black Sabbath", "b.png"),
        ])
    }

    #[test]
    fn test_filter_substring() {
        let found = catalog().filter("AB");
        let ids: Vec<_> = found.iter().map(|a| a.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_filter_empty_query_matches_all() {
        assert_eq!(catalog().filter("").len(), 3);
    }

    #[test]
    fn test_filter_leaves_source_untouched() {
        let catalog = catalog();
        let shared = catalog.clone();
        assert!(catalog.filter("zz").is_empty());
        assert_eq!(shared.len(), 3);
        assert_eq!(shared.all()[0].name, "Abba");
    }

    #[test]
    fn test_get() {
        let catalog = catalog();
        assert_eq!(catalog.get(&ArtistId::Number(2)).unwrap().name, "Queen");
        assert!(catalog.get(&ArtistId::Number(9)).is_none());
    }
}
