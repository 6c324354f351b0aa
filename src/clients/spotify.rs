use std::path::PathBuf;

use log::debug;

use crate::clients::{
    Catalog, MAX_SEEDS,
    entities::{Artist, RecommendedTrack, Track},
    errors::{Error, Result},
};
use rspotify::{
    ClientCredsSpotify, Config, Credentials,
    model::{ArtistId, FullTrack, RecommendationsAttribute, SearchResult, SearchType, TrackId},
    prelude::*,
};

fn first_artist(artists: &[rspotify::model::SimplifiedArtist]) -> Artist {
    Artist {
        name: artists.first().map(|a| a.name.clone()).unwrap_or_default(),
    }
}

impl From<FullTrack> for Track {
    fn from(f: FullTrack) -> Track {
        Track {
            id: f.id.map(|id| id.id().to_string()).unwrap_or_default(),
            title: f.name,
            artist: first_artist(&f.artists),
        }
    }
}

impl From<FullTrack> for RecommendedTrack {
    fn from(f: FullTrack) -> RecommendedTrack {
        RecommendedTrack {
            artist: first_artist(&f.artists),
            name: f.name,
            popularity: f.popularity,
            preview_url: f.preview_url,
            external_url: f.external_urls.get("spotify").cloned().unwrap_or_default(),
        }
    }
}

pub struct SpotifyClient {
    pub spotify: ClientCredsSpotify,
}

impl SpotifyClient {
    pub fn new(spotify: ClientCredsSpotify) -> Self {
        SpotifyClient { spotify }
    }

    // Authorize via the client-credentials flow. One token request per
    // process lifetime; every catalog call reuses (and auto-refreshes) it.
    pub async fn authorize_client(&self) -> Result<()> {
        debug!("Requesting Spotify client-credentials token ...");
        self.spotify.request_token().await?;
        Ok(())
    }

    // Create a SpotifyClient from environment variables or raise a configuration error
    pub fn try_default() -> Result<Self> {
        let creds = Credentials::from_env().ok_or_else(|| {
            Error::ConfigurationError(
                "Missing Spotify credentials in environment variables. Check README.md for details."
                    .into(),
            )
        })?;

        // Cache the short-lived token so repeated runs skip the token request
        let cache_path = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp")) // Fallback to /tmp if cache directory can't be determined
            .join(".rcurator_cache");

        let spotify = ClientCredsSpotify::with_config(
            creds,
            Config {
                token_cached: true,
                cache_path,
                ..Default::default()
            },
        );

        Ok(Self { spotify })
    }
}

impl Catalog for SpotifyClient {
    // One search call per non-empty query; no caching, no retry.
    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>> {
        let query = query.trim();
        if query.is_empty() {
            // Spotify rejects empty queries; skip the round trip entirely
            return Ok(vec![]);
        }
        debug!("Searching tracks for {query:?} (limit {limit})");
        let result = self
            .spotify
            .search(query, SearchType::Track, None, None, Some(limit), None)
            .await?;
        match result {
            SearchResult::Tracks(page) => Ok(page.items.into_iter().map(Track::from).collect()),
            other => Err(Error::UnexpectedResponse(format!(
                "asked for tracks, got {other:?}"
            ))),
        }
    }

    // Seed ids travel as a list of TrackId values all the way to the wire
    // codec. Joining them into one comma-separated string here silently
    // breaks the endpoint, so the ids stay a sequence.
    async fn recommend_tracks(&self, seed_ids: &[String], limit: u32) -> Result<Vec<RecommendedTrack>> {
        if seed_ids.is_empty() {
            return Err(Error::NoSeedsSelected);
        }
        if seed_ids.len() > MAX_SEEDS {
            return Err(Error::TooManySeeds(seed_ids.len()));
        }

        let seeds = seed_ids
            .iter()
            .map(|id| TrackId::from_id(id.as_str()))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!("Requesting {limit} recommendations for seeds {seed_ids:?}");
        let rec = self
            .spotify
            .recommendations(
                std::iter::empty::<RecommendationsAttribute>(),
                None::<Vec<ArtistId<'_>>>,
                None::<Vec<&str>>,
                Some(seeds),
                None,
                Some(limit),
            )
            .await?;

        // The recommendation payload model carries no popularity score, so
        // follow up with one batch lookup of the full track records.
        let ids: Vec<TrackId<'static>> = rec.tracks.into_iter().filter_map(|t| t.id).collect();
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let full = self.spotify.tracks(ids, None).await?;
        Ok(full.into_iter().map(RecommendedTrack::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_client() -> SpotifyClient {
        SpotifyClient::new(ClientCredsSpotify::new(Credentials::new("id", "secret")))
    }

    #[tokio::test]
    async fn whitespace_query_short_circuits_without_a_token() {
        // No token was ever requested, so reaching the network would error
        let client = offline_client();
        let tracks = client.search_tracks("   \t ", 10).await.unwrap();
        assert!(tracks.is_empty());
    }

    #[tokio::test]
    async fn zero_seeds_rejected_before_any_network_use() {
        let client = offline_client();
        let err = client.recommend_tracks(&[], 15).await.unwrap_err();
        assert!(matches!(err, Error::NoSeedsSelected));
    }

    #[tokio::test]
    async fn four_seeds_rejected_before_any_network_use() {
        let client = offline_client();
        let seeds: Vec<String> = (0..4).map(|i| format!("seed{i}")).collect();
        let err = client.recommend_tracks(&seeds, 15).await.unwrap_err();
        assert!(matches!(err, Error::TooManySeeds(4)));
    }
}
