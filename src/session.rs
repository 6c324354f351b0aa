use log::debug;

use crate::clients::{
    Catalog, DEFAULT_SEARCH_LIMIT, MAX_REC_COUNT, MAX_SEEDS, MIN_REC_COUNT,
    entities::{RecommendedTrack, Track},
    errors::{Error, Result},
};

/// Popularity scores at or above this are dropped by the less-popular mode.
pub const POPULARITY_CEILING: u32 = 50;

/// Post-fetch curation policy applied to recommendation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurationMode {
    /// Render the recommendation results as returned.
    #[default]
    Standard,
    /// Keep only tracks with popularity below [`POPULARITY_CEILING`].
    LessPopular,
}

/// Where the curate flow currently stands. Linear, single session, no
/// concurrency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No queries entered yet.
    Idle,
    /// At least one slot holds a query, nothing picked yet.
    Searching,
    /// At least one seed picked; recommendations may be requested.
    SeedsAssembled,
    /// A recommendation request has been issued.
    Recommending,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub search_limit: u32,
    pub curation: CurationMode,
}

impl SessionConfig {
    pub fn new() -> Self {
        SessionConfig {
            search_limit: DEFAULT_SEARCH_LIMIT,
            curation: CurationMode::Standard,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig::new()
    }
}

/// One of the three independent search-and-pick slots.
#[derive(Debug, Clone, Default)]
struct SeedSlot {
    query: String,
    results: Vec<Track>,
    picked: Option<Track>,
}

/// Drives the search / pick / recommend flow against an injected catalog
/// client. All remote calls are sequential; each user action maps to at most
/// one catalog call.
pub struct CuratorSession<C: Catalog> {
    catalog: C,
    config: SessionConfig,
    slots: [SeedSlot; MAX_SEEDS],
    state: SessionState,
}

impl<C: Catalog> CuratorSession<C> {
    pub fn new(catalog: C, config: SessionConfig) -> Self {
        CuratorSession {
            catalog,
            config,
            slots: Default::default(),
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Run the slot's query against the catalog. A new query supersedes the
    /// slot's previous results and clears its pick; an empty or
    /// whitespace-only query clears the slot without a remote call.
    pub async fn search_slot(&mut self, index: usize, query: &str) -> Result<&[Track]> {
        if index >= MAX_SEEDS {
            return Err(Error::InvalidSlot(index));
        }
        let query = query.trim();
        let results = if query.is_empty() {
            Vec::new()
        } else {
            self.catalog
                .search_tracks(query, self.config.search_limit)
                .await?
        };
        debug!("Slot {index}: {} results for {query:?}", results.len());

        let slot = &mut self.slots[index];
        slot.query = query.to_string();
        slot.results = results;
        slot.picked = None;
        self.refresh_state();
        Ok(&self.slots[index].results)
    }

    /// Pick the `choice`-th result of a slot as its seed. The picked track's
    /// id is the opaque handle later passed to the recommender, so no label
    /// round-tripping is ever needed.
    pub fn pick_seed(&mut self, index: usize, choice: usize) -> Result<Track> {
        if index >= MAX_SEEDS {
            return Err(Error::InvalidSlot(index));
        }
        let slot = &mut self.slots[index];
        let track = slot
            .results
            .get(choice)
            .ok_or(Error::InvalidPick {
                slot: index,
                choice,
            })?
            .clone();
        slot.picked = Some(track.clone());
        self.refresh_state();
        Ok(track)
    }

    pub fn clear_seed(&mut self, index: usize) -> Result<()> {
        if index >= MAX_SEEDS {
            return Err(Error::InvalidSlot(index));
        }
        self.slots[index].picked = None;
        self.refresh_state();
        Ok(())
    }

    /// Picked track ids in slot order 1→2→3, empty slots skipped.
    /// Structurally never longer than [`MAX_SEEDS`].
    pub fn seed_ids(&self) -> Vec<String> {
        self.slots
            .iter()
            .filter_map(|s| s.picked.as_ref().map(|t| t.id.clone()))
            .collect()
    }

    /// Explicit trigger: request `count` recommendations for the assembled
    /// seeds and apply the configured curation mode. With zero seeds this is
    /// a validation error and no remote call happens; on a remote error the
    /// session drops back to [`SessionState::SeedsAssembled`] so the user can
    /// try again.
    pub async fn recommend(&mut self, count: u32) -> Result<Vec<RecommendedTrack>> {
        let seeds = self.seed_ids();
        if seeds.is_empty() {
            return Err(Error::NoSeedsSelected);
        }
        if !(MIN_REC_COUNT..=MAX_REC_COUNT).contains(&count) {
            return Err(Error::CountOutOfRange(count));
        }

        self.state = SessionState::Recommending;
        match self.catalog.recommend_tracks(&seeds, count).await {
            Ok(tracks) => Ok(match self.config.curation {
                CurationMode::Standard => tracks,
                // Curation may leave fewer than `count` tracks; the upstream
                // limit is never inflated to compensate.
                CurationMode::LessPopular => filter_less_popular(tracks),
            }),
            Err(e) => {
                self.state = SessionState::SeedsAssembled;
                Err(e)
            }
        }
    }

    fn refresh_state(&mut self) {
        self.state = if self.slots.iter().any(|s| s.picked.is_some()) {
            SessionState::SeedsAssembled
        } else if self.slots.iter().any(|s| !s.query.is_empty()) {
            SessionState::Searching
        } else {
            SessionState::Idle
        };
    }
}

/// Keep only tracks strictly below the popularity ceiling, preserving order.
pub fn filter_less_popular(tracks: Vec<RecommendedTrack>) -> Vec<RecommendedTrack> {
    tracks
        .into_iter()
        .filter(|t| t.popularity < POPULARITY_CEILING)
        .collect()
}
