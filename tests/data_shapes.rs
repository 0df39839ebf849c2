//! Wire-shape tests over the document-store record formats.

use gamzic_core::{
    AdFormat, DisplaySize, FeedStoryItem, Placement, SlotPosition, SponsoredCatalog,
    SponsoredItem, Tournament, TournamentStatus,
};

#[test]
fn sponsored_record_parses_full_camel_case_document() {
    let json = r#"{
        "id": "ad-2024-001",
        "type": "featured",
        "title": "Regional Finals",
        "sponsorName": "HyperFuel",
        "ctaText": "Watch now",
        "ctaUrl": "https://example.com/finals",
        "displaySize": "compact",
        "placements": ["feed", "sidebar", "tournament_page"],
        "position": "middle",
        "frequency": 6,
        "priority": 9,
        "minPostsRequired": 4,
        "showOnEmptyFeed": false,
        "targetGames": ["valorant", "cs2"],
        "isActive": true
    }"#;
    let item: SponsoredItem = serde_json::from_str(json).unwrap();
    assert_eq!(item.format, AdFormat::Featured);
    assert_eq!(item.display_size, DisplaySize::Compact);
    assert_eq!(item.position, SlotPosition::Middle);
    assert_eq!(
        item.placements,
        vec![Placement::Feed, Placement::Sidebar, Placement::TournamentPage]
    );
    assert_eq!(item.frequency, 6);
    assert_eq!(item.min_posts_required, 4);
    assert_eq!(item.target_games, vec!["valorant", "cs2"]);
}

#[test]
fn sponsored_item_roundtrips_with_wire_field_names() {
    let item: SponsoredItem = serde_json::from_str(
        r#"{"id": "x", "title": "T", "sponsorName": "S", "placements": ["feed"]}"#,
    )
    .unwrap();
    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value["sponsorName"], "S");
    assert_eq!(value["type"], "native");
    assert_eq!(value["isActive"], true);
    assert!(value.get("sponsor_name").is_none());
}

#[test]
fn one_malformed_record_does_not_poison_the_catalog() {
    // A surface this build has never heard of and out-of-range scheduling
    // fields both survive ingest; the record just never matches anything.
    let json = r#"{"items": [
        {"id": "fine", "title": "A", "sponsorName": "S", "placements": ["feed"]},
        {"id": "odd", "title": "B", "sponsorName": "S",
         "placements": ["hologram_billboard"], "frequency": 0, "priority": 99}
    ]}"#;
    let catalog = SponsoredCatalog::from_json(json).unwrap();
    assert_eq!(catalog.items.len(), 2);
    assert_eq!(catalog.items[1].placements, vec![Placement::Unknown]);
    assert_eq!(catalog.items[1].frequency, 1);
    assert_eq!(catalog.items[1].priority, 10);
    assert_eq!(catalog.active_for(Placement::Feed).len(), 1);
}

#[test]
fn tournament_status_tolerates_unknown_wire_values() {
    let open: Tournament = serde_json::from_str(
        r#"{"id": "t1", "name": "Cup", "gameId": "cs2", "status": "registration_open"}"#,
    )
    .unwrap();
    assert!(open.status.is_open());

    let legacy: Tournament = serde_json::from_str(
        r#"{"id": "t2", "name": "Cup", "gameId": "cs2", "status": "archived_v1"}"#,
    )
    .unwrap();
    assert_eq!(legacy.status, TournamentStatus::Unknown);
    assert!(!legacy.status.is_open());
}

#[test]
fn feed_story_item_serializes_camel_case_for_the_ui() {
    let item = FeedStoryItem {
        id: "match-9".to_string(),
        kind: gamzic_core::StoryKind::LiveMatch,
        title: "GX vs TLN".to_string(),
        subtitle: "Valorant".to_string(),
        image: String::new(),
        icon: "🎯".to_string(),
        href: "/matches/9".to_string(),
        badge: "LIVE".to_string(),
        badge_color: "bg-red-500".to_string(),
        gradient: "from-red-500 to-orange-500".to_string(),
        is_live: true,
    };
    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value["badgeColor"], "bg-red-500");
    assert_eq!(value["isLive"], true);
    assert_eq!(value["kind"], "live_match");
}
