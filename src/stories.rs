//! Feed story rail aggregation
use crate::games::GameRegistry;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Live matches shown at the head of the rail.
pub const MAX_LIVE_MATCH_STORIES: usize = 3;
/// Open tournaments shown at the tail of the rail.
pub const MAX_TOURNAMENT_STORIES: usize = 3;

pub const LIVE_BADGE: &str = "LIVE";
pub const OPEN_BADGE: &str = "OPEN";
pub const LIVE_GRADIENT: &str = "from-red-500 to-orange-500";
pub const TOURNAMENT_GRADIENT: &str = "from-purple-500 to-indigo-500";
pub const DEFAULT_STORY_GRADIENT: &str = "from-cyan-500 to-purple-500";
pub const LIVE_BADGE_COLOR: &str = "bg-red-500";
pub const OPEN_BADGE_COLOR: &str = "bg-emerald-500";

/// Rail capacity that avoids allocation for the common small case.
pub type StoryRail = SmallVec<[FeedStoryItem; 8]>;

/// A match currently being played, as fetched from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveMatch {
    pub id: String,
    pub title: String,
    pub game_id: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub viewers: u32,
}

/// An admin-authored announcement story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStory {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub badge: String,
    #[serde(default)]
    pub badge_color: String,
    #[serde(default)]
    pub gradient: String,
}

/// Lifecycle state of a tournament record. Unrecognized historical values
/// deserialize to `Unknown` and are filtered out before aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    RegistrationOpen,
    InProgress,
    Upcoming,
    Completed,
    #[serde(other)]
    Unknown,
}

impl TournamentStatus {
    /// Whether the tournament belongs on the story rail.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::RegistrationOpen | Self::InProgress)
    }
}

/// A tournament record as fetched from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: String,
    pub name: String,
    pub game_id: String,
    pub status: TournamentStatus,
    #[serde(default)]
    pub image: String,
}

/// Which source a rail entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryKind {
    Story,
    LiveMatch,
    Tournament,
}

/// Display-normalized carousel entry. Recomputed on every render pass; ids
/// are globally unique by source prefix construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedStoryItem {
    pub id: String,
    pub kind: StoryKind,
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub icon: String,
    pub href: String,
    pub badge: String,
    pub badge_color: String,
    pub gradient: String,
    pub is_live: bool,
}

/// Merge the three story sources into the ordered rail: up to three live
/// matches, then every admin story, then up to three open tournaments.
///
/// Pure transform; returns an empty rail (carousel hidden) when all sources
/// are empty. Sources are not deduplicated against each other — a tournament
/// that also surfaces as a live match shows twice, by design of the feed.
#[must_use]
pub fn build_story_rail(
    live_matches: &[LiveMatch],
    admin_stories: &[AdminStory],
    tournaments: &[Tournament],
    games: &GameRegistry,
) -> StoryRail {
    let mut rail = StoryRail::new();

    for live in live_matches.iter().take(MAX_LIVE_MATCH_STORIES) {
        let game = games.display(&live.game_id);
        rail.push(FeedStoryItem {
            id: format!("match-{}", live.id),
            kind: StoryKind::LiveMatch,
            title: live.title.clone(),
            subtitle: game.name,
            image: live.image.clone(),
            icon: game.icon,
            href: format!("/matches/{}", live.id),
            badge: LIVE_BADGE.to_string(),
            badge_color: LIVE_BADGE_COLOR.to_string(),
            gradient: LIVE_GRADIENT.to_string(),
            is_live: true,
        });
    }

    for story in admin_stories {
        rail.push(FeedStoryItem {
            id: format!("story-{}", story.id),
            kind: StoryKind::Story,
            title: story.title.clone(),
            subtitle: story.subtitle.clone(),
            image: story.image.clone(),
            icon: String::new(),
            href: story.href.clone(),
            badge: story.badge.clone(),
            badge_color: story.badge_color.clone(),
            gradient: if story.gradient.is_empty() {
                DEFAULT_STORY_GRADIENT.to_string()
            } else {
                story.gradient.clone()
            },
            is_live: false,
        });
    }

    for tournament in tournaments
        .iter()
        .filter(|tournament| tournament.status.is_open())
        .take(MAX_TOURNAMENT_STORIES)
    {
        let game = games.display(&tournament.game_id);
        let in_progress = tournament.status == TournamentStatus::InProgress;
        rail.push(FeedStoryItem {
            id: format!("tournament-{}", tournament.id),
            kind: StoryKind::Tournament,
            title: tournament.name.clone(),
            subtitle: game.name,
            image: tournament.image.clone(),
            icon: game.icon,
            href: format!("/tournaments/{}", tournament.id),
            badge: (if in_progress { LIVE_BADGE } else { OPEN_BADGE }).to_string(),
            badge_color: (if in_progress {
                LIVE_BADGE_COLOR
            } else {
                OPEN_BADGE_COLOR
            })
            .to_string(),
            gradient: TOURNAMENT_GRADIENT.to_string(),
            is_live: in_progress,
        });
    }

    log::debug!(
        "story rail: {} matches, {} stories, {} tournaments -> {} entries",
        live_matches.len(),
        admin_stories.len(),
        tournaments.len(),
        rail.len()
    );
    rail
}
