//! Artist model.
//!
//! Records come from the `/api/artists` endpoint. Only `id`, `name` and
//! `image` are required; the remaining fields are kept when the backend
//! sends them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Path of the artist detail page, keyed by `?id=`.
pub const DETAIL_PATH: &str = "/artist";

/// Opaque artist identifier.
///
/// Backends send either a number or a string; both are accepted and
/// rendered verbatim in links.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArtistId {
    Number(i64),
    Text(String),
}

impl Default for ArtistId {
    fn default() -> Self {
        ArtistId::Number(0)
    }
}

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtistId::Number(n) => write!(f, "{}", n),
            ArtistId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ArtistId {
    fn from(id: i64) -> Self {
        ArtistId::Number(id)
    }
}

impl From<i32> for ArtistId {
    fn from(id: i32) -> Self {
        ArtistId::Number(i64::from(id))
    }
}

impl From<&str> for ArtistId {
    fn from(id: &str) -> Self {
        ArtistId::Text(id.to_string())
    }
}

/// A single artist record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    /// Artist identifier.
    pub id: ArtistId,

    /// Display name, also the search key.
    pub name: String,

    /// Thumbnail URL or path.
    pub image: String,

    /// Band members.
    #[serde(default)]
    pub members: Vec<String>,

    /// Year the act was formed.
    #[serde(
        rename = "creationDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_date: Option<i32>,

    /// First album release date as sent by the backend.
    #[serde(
        rename = "firstAlbum",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub first_album: Option<String>,
}

impl Artist {
    /// Create a new artist with the required fields.
    pub fn new<I: Into<ArtistId>, S1: Into<String>, S2: Into<String>>(
        id: I,
        name: S1,
        image: S2,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            ..Default::default()
        }
    }

    /// Link to this artist's detail page.
    pub fn detail_link(&self) -> String {
        format!("{}?id={}", DETAIL_PATH, self.id)
    }

    /// Case-insensitive substring match against the name.
    ///
    /// `needle` must already be lowercase.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}
