//! Feed interleaving plan
//!
//! The UI renders the feed as a flat sequence; this module computes that
//! sequence up front as a value instead of deciding slot-by-slot inside the
//! render loop. `post_index` is global across every post loaded so far, so
//! loading another page extends the plan without changing the meaning of
//! earlier indices.

use crate::selector::{SlotError, SlotRequest, select_ad};
use crate::sponsored::{Placement, SponsoredItem};
use serde::{Deserialize, Serialize};

/// One renderable entry of the interleaved feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedSlot {
    /// Organic post at this loaded index.
    Post { index: usize },
    /// Sponsored unit, rendered after its qualifying post.
    Ad { item_id: String },
}

/// Ordered render plan for the currently loaded feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FeedPlan {
    pub slots: Vec<FeedSlot>,
}

impl FeedPlan {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of sponsored slots in the plan.
    #[must_use]
    pub fn ad_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, FeedSlot::Ad { .. }))
            .count()
    }

    /// Ids of the sponsored items placed, in render order.
    #[must_use]
    pub fn ad_ids(&self) -> Vec<&str> {
        self.slots
            .iter()
            .filter_map(|slot| match slot {
                FeedSlot::Ad { item_id } => Some(item_id.as_str()),
                FeedSlot::Post { .. } => None,
            })
            .collect()
    }
}

/// Walk the loaded feed and interleave sponsored slots.
///
/// Each post gets a slot probe right after it; an empty feed gets a single
/// leading probe so `show_on_empty_feed` items can still surface.
///
/// # Errors
///
/// Propagates [`SlotError`] from the selector; with indices generated here
/// that only happens on arithmetic misuse, not data problems.
pub fn plan_feed(
    candidates: &[SponsoredItem],
    total_posts: usize,
    placement: Placement,
    target_game: Option<&str>,
) -> Result<FeedPlan, SlotError> {
    let mut slots = Vec::with_capacity(total_posts + total_posts / 2 + 1);

    if total_posts == 0 {
        if let Some(item) = probe(candidates, 0, 0, placement, target_game)? {
            slots.push(FeedSlot::Ad {
                item_id: item.id.clone(),
            });
        }
        return Ok(FeedPlan { slots });
    }

    for index in 0..total_posts {
        slots.push(FeedSlot::Post { index });
        if let Some(item) = probe(candidates, index, total_posts, placement, target_game)? {
            slots.push(FeedSlot::Ad {
                item_id: item.id.clone(),
            });
        }
    }
    Ok(FeedPlan { slots })
}

fn probe<'a>(
    candidates: &'a [SponsoredItem],
    post_index: usize,
    total_posts: usize,
    placement: Placement,
    target_game: Option<&str>,
) -> Result<Option<&'a SponsoredItem>, SlotError> {
    select_ad(&SlotRequest {
        candidates,
        placement,
        post_index,
        total_posts,
        target_game,
    })
}
