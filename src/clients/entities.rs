use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artist {
    pub name: String,
}

/// A track as returned by the search endpoint. The `id` is the opaque
/// catalog identifier used as a recommendation seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: Artist, // assume one artist for simplicity
}

/// A track as returned by the recommendation endpoint. Lives only for the
/// duration of one rendered response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendedTrack {
    pub name: String,
    pub artist: Artist,
    /// Mainstream popularity score, 0-100.
    pub popularity: u32,
    pub preview_url: Option<String>,
    pub external_url: String,
}
