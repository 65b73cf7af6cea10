//! Periodic spot spawning
//!
//! The scheduler keeps virtual time: the caller feeds elapsed time and gets
//! back how many spawn ticks fell due. Re-arming resets the phase of the timer.

use std::time::Duration;

use glam::Vec2;
use rand::Rng;

use super::layout::Rect;
use super::state::{GameState, SpotVariant};

/// Repeating timer driving spot spawns
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    interval: Duration,
    elapsed: Duration,
}

impl SpawnScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Cancel the running timer and start a new one with `interval`
    pub fn rearm(&mut self, interval: Duration) {
        self.interval = interval.max(Duration::from_millis(1));
        self.elapsed = Duration::ZERO;
        log::debug!("Spawn timer armed at {} ms", self.interval.as_millis());
    }

    /// Advance the timer, returning the number of ticks that fired
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }

    /// Time left until the next tick
    pub fn remaining(&self) -> Duration {
        self.interval - self.elapsed
    }
}

/// Handle one spawn tick: add a random spot unless the banner is up.
/// Returns the new spot's ID.
pub fn spawn_spot<R: Rng + ?Sized>(
    state: &mut GameState,
    region: &Rect,
    rng: &mut R,
) -> Option<u32> {
    if state.is_banner_showing() {
        return None;
    }

    let t = Vec2::new(rng.random::<f32>(), rng.random::<f32>());
    let pos = region.lerp(t);
    let variant = SpotVariant::ALL[rng.random_range(0..SpotVariant::ALL.len())];
    let id = state.add_spot(pos, variant);
    log::trace!("Spawned spot {} at ({:.1}, {:.1})", id, pos.x, pos.y);
    Some(id)
}
