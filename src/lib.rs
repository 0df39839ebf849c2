//! Gamzic Feed Engine
//!
//! Platform-agnostic feed policy logic for the Gamzic esports platform:
//! sponsored-slot selection, story-rail aggregation, the story viewer timer,
//! and game display lookup. This crate owns the decision rules only; data
//! fetching, persistence, and rendering live in the host layers behind the
//! [`ContentStore`] seam.

pub mod feed_plan;
pub mod games;
pub mod selector;
pub mod session;
pub mod sponsored;
pub mod stories;
pub mod story_timer;

// Re-export commonly used types
pub use feed_plan::{FeedPlan, FeedSlot, plan_feed};
pub use games::{FALLBACK_GAME_ICON, GameCatalog, GameDisplay, GameInfo, GameRegistry};
pub use selector::{SlotError, SlotRequest, select_ad};
pub use session::{Role, Session, SessionPolicy, UserProfile};
pub use sponsored::{
    AdFormat, DisplaySize, Placement, SlotPosition, SponsoredCatalog, SponsoredItem,
};
pub use stories::{
    AdminStory, FeedStoryItem, LiveMatch, StoryKind, StoryRail, Tournament, TournamentStatus,
    build_story_rail,
};
pub use story_timer::{StoryTimer, StoryTimerPhase, TickOutcome};

/// Trait for abstracting reads from the external document store.
/// Platform-specific implementations should provide this; tests use
/// in-memory fakes.
pub trait ContentStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load every sponsored content record, active or not.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be fetched.
    fn load_sponsored(&self) -> Result<Vec<SponsoredItem>, Self::Error>;

    /// Load admin-authored stories, already filtered for activity/expiry.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be fetched.
    fn load_stories(&self) -> Result<Vec<AdminStory>, Self::Error>;

    /// Load matches currently being played, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be fetched.
    fn load_live_matches(&self) -> Result<Vec<LiveMatch>, Self::Error>;

    /// Load tournament records regardless of lifecycle state.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be fetched.
    fn load_tournaments(&self) -> Result<Vec<Tournament>, Self::Error>;

    /// Load the dynamic game list.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be fetched.
    fn load_games(&self) -> Result<Vec<GameInfo>, Self::Error>;
}

/// Immutable per-refresh view of everything the feed policies consume.
///
/// A render pass works off exactly one snapshot; data changing in the store
/// mid-session only becomes visible through an explicit refresh, which
/// produces a new snapshot with a higher `generation`.
#[derive(Debug, Clone)]
pub struct FeedSnapshot {
    pub generation: u64,
    pub sponsored: SponsoredCatalog,
    pub stories: Vec<AdminStory>,
    pub live_matches: Vec<LiveMatch>,
    pub tournaments: Vec<Tournament>,
    pub games: GameRegistry,
}

impl FeedSnapshot {
    /// Build the story rail for this snapshot.
    #[must_use]
    pub fn story_rail(&self) -> StoryRail {
        build_story_rail(
            &self.live_matches,
            &self.stories,
            &self.tournaments,
            &self.games,
        )
    }

    /// Interleave the loaded feed with sponsored slots.
    ///
    /// # Errors
    ///
    /// Propagates [`SlotError`] for out-of-range indices.
    pub fn plan_feed(
        &self,
        total_posts: usize,
        target_game: Option<&str>,
    ) -> Result<FeedPlan, SlotError> {
        plan_feed(
            &self.sponsored.items,
            total_posts,
            Placement::Feed,
            target_game,
        )
    }

    /// Select the sponsored item for one slot on one surface.
    ///
    /// # Errors
    ///
    /// Propagates [`SlotError`] for out-of-range indices.
    pub fn select_ad(
        &self,
        placement: Placement,
        post_index: usize,
        total_posts: usize,
        target_game: Option<&str>,
    ) -> Result<Option<&SponsoredItem>, SlotError> {
        select_ad(&SlotRequest {
            candidates: &self.sponsored.items,
            placement,
            post_index,
            total_posts,
            target_game,
        })
    }
}

/// Produces [`FeedSnapshot`]s from a [`ContentStore`] and applies the ingest
/// rules the policies assume: sponsored normalization, inactive-item drop,
/// and the tournament lifecycle filter.
pub struct FeedEngine<S>
where
    S: ContentStore,
{
    store: S,
    policy: SessionPolicy,
    generation: u64,
}

impl<S> FeedEngine<S>
where
    S: ContentStore,
{
    /// Create an engine over the given store and session policy.
    pub const fn new(store: S, policy: SessionPolicy) -> Self {
        Self {
            store,
            policy,
            generation: 0,
        }
    }

    /// Fetch fresh data and materialize the next snapshot.
    ///
    /// # Errors
    ///
    /// Returns the store's error if any fetch fails; no partial snapshot is
    /// produced.
    pub fn snapshot(&mut self) -> Result<FeedSnapshot, S::Error> {
        let sponsored_raw = self.store.load_sponsored()?;
        let stories = self.store.load_stories()?;
        let live_matches = self.store.load_live_matches()?;
        let tournaments_raw = self.store.load_tournaments()?;
        let games = self.store.load_games()?;

        let sponsored = SponsoredCatalog::from_items(
            sponsored_raw
                .into_iter()
                .filter(|item| item.is_active)
                .collect(),
        );
        let tournaments: Vec<Tournament> = tournaments_raw
            .into_iter()
            .filter(|tournament| tournament.status.is_open())
            .collect();

        self.generation += 1;
        log::info!(
            "feed snapshot {}: {} sponsored, {} stories, {} matches, {} tournaments",
            self.generation,
            sponsored.items.len(),
            stories.len(),
            live_matches.len(),
            tournaments.len()
        );
        Ok(FeedSnapshot {
            generation: self.generation,
            sponsored,
            stories,
            live_matches,
            tournaments,
            games: GameRegistry::new(games),
        })
    }

    /// Establish a session for a signed-in profile and take its first
    /// snapshot in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial snapshot cannot be fetched.
    pub fn establish(&mut self, profile: &UserProfile) -> Result<(Session, FeedSnapshot), anyhow::Error>
    where
        S::Error: Into<anyhow::Error>,
    {
        let session = self.policy.establish(profile);
        let snapshot = self.snapshot().map_err(Into::into)?;
        Ok((session, snapshot))
    }
}
