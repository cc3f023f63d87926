use std::sync::Arc;

use serde::{Deserialize, Serialize};

// =============================================================================
// Response Schema
// =============================================================================

/// Cover art or profile picture. The API lists images widest first.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Simplified artist object embedded in tracks.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ArtistRef {
    pub id: String,
    pub name: String,
}

/// Simplified album object embedded in tracks.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    /// Contributing artists, in credit order
    pub artists: Vec<ArtistRef>,
    pub album: Album,
    pub popularity: Option<u32>,
    pub duration_ms: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
    /// Genre tags, most representative first
    #[serde(default)]
    pub genres: Vec<String>,
    pub popularity: Option<u32>,
}

/// Paging envelope wrapping every list endpoint.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
    pub total: Option<u32>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// Current user's profile from `/me`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct UserProfile {
    pub id: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
}

impl UserProfile {
    /// Display name, falling back to the account id.
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.id)
    }
}

// =============================================================================
// Ranked Items
// =============================================================================

/// Number of genre tags shown under an artist.
const SUBTITLE_GENRES: usize = 2;

/// One ranked entry of a top-items list.
#[derive(Clone, Debug, PartialEq)]
pub enum TopItem {
    Track(Track),
    Artist(Artist),
}

impl TopItem {
    pub fn id(&self) -> &str {
        match self {
            TopItem::Track(t) => &t.id,
            TopItem::Artist(a) => &a.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TopItem::Track(t) => &t.name,
            TopItem::Artist(a) => &a.name,
        }
    }

    /// First (largest) image: album art for tracks, the artist photo otherwise.
    pub fn image_url(&self) -> Option<&str> {
        let images = match self {
            TopItem::Track(t) => &t.album.images,
            TopItem::Artist(a) => &a.images,
        };
        images.first().map(|img| img.url.as_str())
    }

    /// Secondary line: credited artists for tracks, leading genres for artists.
    pub fn subtitle(&self) -> String {
        match self {
            TopItem::Track(t) => t
                .artists
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            TopItem::Artist(a) => a
                .genres
                .iter()
                .take(SUBTITLE_GENRES)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Immutable, cheaply clonable list of ranked items, in API order.
pub type ResultList = Arc<[TopItem]>;
