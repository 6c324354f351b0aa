/// Data entities for tracks and artists
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Spotify API client
pub mod spotify;

pub use spotify::SpotifyClient;

use entities::{RecommendedTrack, Track};
use errors::Result;

/// The recommendation endpoint accepts at most this many seed tracks.
pub const MAX_SEEDS: usize = 3;
/// Smallest recommendation count a caller may request.
pub const MIN_REC_COUNT: u32 = 5;
/// Largest recommendation count a caller may request.
pub const MAX_REC_COUNT: u32 = 50;
/// Search result cap used when the caller does not override it.
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// Transport seam over the remote catalog.
///
/// `seed_ids` is always a genuine ordered slice. Implementations must hand
/// the ids to the wire as a list-valued parameter, never pre-joined into a
/// delimited string.
pub trait Catalog {
    /// Free-text track search, capped at `limit` results.
    fn search_tracks(
        &self,
        query: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Track>>>;

    /// Seed-based recommendations. `seed_ids` must hold 1 to [`MAX_SEEDS`] ids.
    fn recommend_tracks(
        &self,
        seed_ids: &[String],
        limit: u32,
    ) -> impl Future<Output = Result<Vec<RecommendedTrack>>>;
}
