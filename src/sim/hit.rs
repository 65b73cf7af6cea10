//! Pointer-vs-spot hit detection
//!
//! A spot is anchored at its top-left corner but judged from its center.
//! Every spot within reach of the pointer goes in a single pass.

use glam::Vec2;

use super::state::{GameEvent, GameState};
use crate::consts::{HIT_RADIUS, SPOT_SIZE};

/// Result of one pointer pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitOutcome {
    /// Spots removed and counted
    pub removed: u32,
    /// This pass finished the level
    pub level_cleared: bool,
}

/// Center of a spot whose top-left corner is at `pos`
#[inline]
pub fn spot_center(pos: Vec2) -> Vec2 {
    pos + Vec2::splat(SPOT_SIZE / 2.0)
}

/// True if `point` is within the hit radius of the spot at `pos`
#[inline]
pub fn is_hit(pos: Vec2, point: Vec2) -> bool {
    spot_center(pos).distance(point) <= HIT_RADIUS
}

/// Remove every spot under `point` and count each clear
pub fn hit_test(state: &mut GameState, point: Vec2) -> HitOutcome {
    let mut outcome = HitOutcome::default();
    if state.is_banner_showing() || !point.is_finite() {
        return outcome;
    }

    let (hits, kept): (Vec<_>, Vec<_>) = state
        .spots
        .iter()
        .copied()
        .partition(|spot| is_hit(spot.pos, point));
    if hits.is_empty() {
        return outcome;
    }
    state.spots = kept;

    for spot in hits {
        state.events.push(GameEvent::SpotRemoved {
            variant: spot.variant,
            pos: spot.pos,
        });
        outcome.removed += 1;
        log::debug!("Cleared spot {} ({} total)", spot.id, state.cleared + 1);

        // Quota fires at most once; later hits in the pass still count and pop
        outcome.level_cleared |= state.on_spot_cleared();
    }

    outcome
}
