//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Virtual time only (callers feed elapsed durations)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod hit;
pub mod layout;
pub mod level;
pub mod spawn;
pub mod state;
pub mod tick;

pub use hit::{HitOutcome, hit_test, is_hit, spot_center};
pub use layout::{Layout, Rect};
pub use level::{CHAOS_LEVEL, LevelConfig, Quota, config_for};
pub use spawn::{SpawnScheduler, spawn_spot};
pub use state::{GameEvent, GameState, Phase, Spot, SpotVariant};
pub use tick::{Game, LEVEL_TRANSITION};
