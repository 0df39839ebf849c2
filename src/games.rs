//! Game catalog lookup with static fallback
use serde::{Deserialize, Serialize};

const DEFAULT_GAMES_DATA: &str = include_str!("../assets/data/games.json");

/// Glyph shown for games with no configured icon.
pub const FALLBACK_GAME_ICON: &str = "🎮";

/// A single game entry as stored in the game catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GameInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

/// Container for the game catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GameCatalog {
    #[serde(default)]
    pub games: Vec<GameInfo>,
}

impl GameCatalog {
    /// Create an empty catalog (useful for tests)
    #[must_use]
    pub fn empty() -> Self {
        Self { games: Vec::new() }
    }

    /// Load the built-in default catalog shipped with the crate.
    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_GAMES_DATA).unwrap_or_default()
    }

    /// Load a catalog from JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a valid catalog.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Create a catalog from pre-parsed entries
    #[must_use]
    pub fn from_games(games: Vec<GameInfo>) -> Self {
        Self { games }
    }
}

/// Display metadata resolved for a game id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDisplay {
    pub name: String,
    pub icon: String,
}

/// Resolves game ids to display metadata, preferring the dynamic list fetched
/// from the store over the static default catalog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameRegistry {
    dynamic: Vec<GameInfo>,
    catalog: GameCatalog,
}

impl GameRegistry {
    /// Build a registry over the dynamic game list and the built-in catalog.
    #[must_use]
    pub fn new(dynamic: Vec<GameInfo>) -> Self {
        Self {
            dynamic,
            catalog: GameCatalog::load_from_static(),
        }
    }

    /// Build a registry with an explicit fallback catalog.
    #[must_use]
    pub const fn with_catalog(dynamic: Vec<GameInfo>, catalog: GameCatalog) -> Self {
        Self { dynamic, catalog }
    }

    /// Resolve display metadata for a game id. Unknown ids fall back to the id
    /// itself with a generic controller glyph; this never fails.
    #[must_use]
    pub fn display(&self, game_id: &str) -> GameDisplay {
        self.dynamic
            .iter()
            .find(|game| game.id == game_id)
            .or_else(|| self.catalog.games.iter().find(|game| game.id == game_id))
            .map_or_else(
                || GameDisplay {
                    name: game_id.to_string(),
                    icon: FALLBACK_GAME_ICON.to_string(),
                },
                |game| GameDisplay {
                    name: game.name.clone(),
                    icon: if game.icon.is_empty() {
                        FALLBACK_GAME_ICON.to_string()
                    } else {
                        game.icon.clone()
                    },
                },
            )
    }
}
