//! Sponsored slot selection logic
use crate::sponsored::{Placement, SlotPosition, SponsoredItem};
use thiserror::Error;

/// Slots counted as "near the start" for top-positioned items.
pub const TOP_WINDOW_SLOTS: usize = 2;
/// Slots counted as "near the end" for bottom-positioned items.
pub const BOTTOM_WINDOW_SLOTS: usize = 2;

/// Render context for a single feed slot. The game context carries its own
/// lifetime so a transient game id does not pin the returned item borrow.
pub struct SlotRequest<'a, 'g> {
    /// Items already filtered to active records; the selector re-checks
    /// `is_active` and placement so stale inputs stay harmless.
    pub candidates: &'a [SponsoredItem],
    /// Surface being rendered.
    pub placement: Placement,
    /// Zero-based index of the post currently being rendered.
    pub post_index: usize,
    /// Count of organic posts currently loaded.
    pub total_posts: usize,
    /// Current game context, if the feed is scoped to one game.
    pub target_game: Option<&'g str>,
}

/// Programmer-error inputs to [`select_ad`]. Data-shape problems never land
/// here; malformed records are skipped instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("post index {post_index} is out of range for a feed of {total_posts} posts")]
    PostIndexOutOfRange {
        post_index: usize,
        total_posts: usize,
    },
}

/// Decide which sponsored item, if any, fills the slot at `post_index`.
///
/// Deterministic and idempotent: identical inputs always produce the same
/// choice. `Ok(None)` means the slot renders organic content only, which is
/// the normal case, not an error.
///
/// # Errors
///
/// Returns [`SlotError::PostIndexOutOfRange`] when `post_index` points past
/// the loaded feed. An empty feed still admits a single probe at index 0.
pub fn select_ad<'a>(request: &SlotRequest<'a, '_>) -> Result<Option<&'a SponsoredItem>, SlotError> {
    if request.post_index >= request.total_posts && request.post_index != 0 {
        return Err(SlotError::PostIndexOutOfRange {
            post_index: request.post_index,
            total_posts: request.total_posts,
        });
    }

    let mut best: Option<&SponsoredItem> = None;
    for item in request.candidates {
        if !eligible_at_slot(item, request) {
            continue;
        }
        // Strict comparison keeps insertion order on priority ties.
        match best {
            Some(current) if item.priority <= current.priority => {}
            _ => best = Some(item),
        }
    }

    log::debug!(
        "sponsored slot {}/{}: {} candidates, picked {:?}",
        request.post_index,
        request.total_posts,
        request.candidates.len(),
        best.map(|item| item.id.as_str())
    );
    Ok(best)
}

fn eligible_at_slot(item: &SponsoredItem, request: &SlotRequest<'_, '_>) -> bool {
    if !item.is_active || !item.targets_placement(request.placement) {
        return false;
    }
    if let Some(game_id) = request.target_game
        && !item.targets_game(game_id)
    {
        return false;
    }
    if !passes_post_gate(item, request.total_posts) {
        return false;
    }
    if !position_allows(item.position, request.post_index, request.total_posts) {
        return false;
    }
    frequency_hit(item.frequency, request.post_index)
}

/// Minimum-post gating with the empty-feed override: a feed with zero posts
/// only admits items explicitly marked `show_on_empty_feed`.
fn passes_post_gate(item: &SponsoredItem, total_posts: usize) -> bool {
    if total_posts == 0 {
        return item.show_on_empty_feed;
    }
    total_posts >= item.min_posts_required as usize
}

const fn position_allows(position: SlotPosition, post_index: usize, total_posts: usize) -> bool {
    match position {
        SlotPosition::Anywhere => true,
        SlotPosition::Top => post_index < TOP_WINDOW_SLOTS,
        SlotPosition::Bottom => post_index + BOTTOM_WINDOW_SLOTS >= total_posts,
        SlotPosition::Middle => {
            post_index >= TOP_WINDOW_SLOTS && post_index + BOTTOM_WINDOW_SLOTS < total_posts
        }
    }
}

/// An item surfaces every Nth post. Guards against un-normalized records with
/// `frequency == 0` rather than assuming ingest already clamped them.
const fn frequency_hit(frequency: u32, post_index: usize) -> bool {
    let frequency = if frequency == 0 { 1 } else { frequency as usize };
    (post_index + 1) % frequency == 0
}
