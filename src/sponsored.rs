//! Sponsored content data model
use serde::{Deserialize, Serialize};

/// Lowest admin-assignable priority.
pub const MIN_PRIORITY: u8 = 1;
/// Highest admin-assignable priority.
pub const MAX_PRIORITY: u8 = 10;

/// Rendering format of a sponsored unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AdFormat {
    Banner,
    #[default]
    Native,
    Promotion,
    Featured,
}

/// How much room the unit takes in its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisplaySize {
    #[default]
    Full,
    Compact,
    Inline,
}

/// Surface a sponsored unit may appear on. Historical records can carry
/// surfaces this build does not know; those deserialize to `Unknown` and are
/// never matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    Feed,
    Stories,
    Sidebar,
    MatchPage,
    TournamentPage,
    #[serde(other)]
    Unknown,
}

/// Vertical band of the feed the unit is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SlotPosition {
    #[default]
    Anywhere,
    Top,
    Middle,
    Bottom,
}

/// An admin-configured promotional unit with placement and scheduling rules.
///
/// Read-only to the selection logic; only admin edits mutate these records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsoredItem {
    pub id: String,
    #[serde(rename = "type", default)]
    pub format: AdFormat,
    pub title: String,
    pub sponsor_name: String,
    #[serde(default)]
    pub cta_text: String,
    #[serde(default)]
    pub cta_url: String,
    #[serde(default)]
    pub display_size: DisplaySize,
    #[serde(default)]
    pub placements: Vec<Placement>,
    #[serde(default)]
    pub position: SlotPosition,
    /// One ad per `frequency` feed posts.
    #[serde(default = "default_frequency")]
    pub frequency: u32,
    /// Tie-break rank among simultaneously eligible ads, 1..=10.
    #[serde(default = "default_priority")]
    pub priority: u8,
    /// Minimum organic posts before the item becomes eligible.
    #[serde(default)]
    pub min_posts_required: u32,
    /// Allows the item on a feed with zero posts.
    #[serde(default)]
    pub show_on_empty_feed: bool,
    /// Empty means "all games".
    #[serde(default)]
    pub target_games: Vec<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_frequency() -> u32 {
    1
}

fn default_priority() -> u8 {
    5
}

fn default_active() -> bool {
    true
}

impl SponsoredItem {
    /// Clamp scheduling fields into their valid ranges. Applied at the ingest
    /// boundary so the selector only ever sees `frequency >= 1` and
    /// `priority` in `[1,10]`.
    pub fn normalize(&mut self) {
        self.frequency = self.frequency.max(1);
        self.priority = self.priority.clamp(MIN_PRIORITY, MAX_PRIORITY);
    }

    /// Whether the item may appear on the given surface.
    #[must_use]
    pub fn targets_placement(&self, placement: Placement) -> bool {
        placement != Placement::Unknown && self.placements.contains(&placement)
    }

    /// Whether the item targets the given game. An empty target set means
    /// every game qualifies.
    #[must_use]
    pub fn targets_game(&self, game_id: &str) -> bool {
        self.target_games.is_empty() || self.target_games.iter().any(|id| id == game_id)
    }
}

/// Container for sponsored content records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SponsoredCatalog {
    pub items: Vec<SponsoredItem>,
}

impl SponsoredCatalog {
    /// Create an empty catalog (useful for tests)
    #[must_use]
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Load and normalize sponsored records from JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid records.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut catalog: Self = serde_json::from_str(json)?;
        catalog.normalize();
        Ok(catalog)
    }

    /// Create a catalog from pre-parsed items, normalizing each.
    #[must_use]
    pub fn from_items(items: Vec<SponsoredItem>) -> Self {
        let mut catalog = Self { items };
        catalog.normalize();
        catalog
    }

    fn normalize(&mut self) {
        for item in &mut self.items {
            item.normalize();
        }
    }

    /// Active items targeting the given surface, in stored (creation) order.
    #[must_use]
    pub fn active_for(&self, placement: Placement) -> Vec<&SponsoredItem> {
        self.items
            .iter()
            .filter(|item| item.is_active && item.targets_placement(placement))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingest_normalizes_out_of_range_fields() {
        let json = r#"{
            "items": [
                {
                    "id": "promo-1",
                    "type": "banner",
                    "title": "Season Pass",
                    "sponsorName": "Acme Energy",
                    "frequency": 0,
                    "priority": 42,
                    "placements": ["feed"]
                }
            ]
        }"#;
        let catalog = SponsoredCatalog::from_json(json).unwrap();
        assert_eq!(catalog.items[0].frequency, 1);
        assert_eq!(catalog.items[0].priority, MAX_PRIORITY);
    }

    #[test]
    fn sparse_record_gets_defaults() {
        let json = r#"{"id": "x", "title": "T", "sponsorName": "S"}"#;
        let item: SponsoredItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.format, AdFormat::Native);
        assert_eq!(item.display_size, DisplaySize::Full);
        assert_eq!(item.frequency, 1);
        assert_eq!(item.priority, 5);
        assert!(item.is_active);
        assert!(item.placements.is_empty());
        assert!(!item.show_on_empty_feed);
    }

    #[test]
    fn unknown_placement_value_is_tolerated() {
        let json = r#"{
            "id": "legacy",
            "title": "Old",
            "sponsorName": "S",
            "placements": ["feed", "homepage_takeover"]
        }"#;
        let item: SponsoredItem = serde_json::from_str(json).unwrap();
        assert!(item.targets_placement(Placement::Feed));
        assert_eq!(item.placements[1], Placement::Unknown);
        // An unknown surface on the query side never matches anything.
        assert!(!item.targets_placement(Placement::Unknown));
    }

    #[test]
    fn empty_target_games_means_all() {
        let mut item: SponsoredItem =
            serde_json::from_str(r#"{"id": "x", "title": "T", "sponsorName": "S"}"#).unwrap();
        assert!(item.targets_game("valorant"));
        item.target_games = vec!["cs2".to_string()];
        assert!(item.targets_game("cs2"));
        assert!(!item.targets_game("valorant"));
    }

    #[test]
    fn active_for_keeps_creation_order() {
        let mk = |id: &str, active: bool| SponsoredItem {
            id: id.to_string(),
            format: AdFormat::Native,
            title: String::new(),
            sponsor_name: String::new(),
            cta_text: String::new(),
            cta_url: String::new(),
            display_size: DisplaySize::Full,
            placements: vec![Placement::Feed],
            position: SlotPosition::Anywhere,
            frequency: 1,
            priority: 5,
            min_posts_required: 0,
            show_on_empty_feed: false,
            target_games: Vec::new(),
            is_active: active,
        };
        let catalog =
            SponsoredCatalog::from_items(vec![mk("a", true), mk("b", false), mk("c", true)]);
        let ids: Vec<_> = catalog
            .active_for(Placement::Feed)
            .iter()
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
