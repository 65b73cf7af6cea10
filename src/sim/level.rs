//! Level table and progression
//!
//! Levels 1-4 have hand-tuned spawn intervals and clear quotas. Everything past
//! that is "chaos": spots pour in every 50 ms and the level never ends.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How many spots must be cleared to finish a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quota {
    Clears(u32),
    /// No clear count ends the level
    Endless,
}

impl Quota {
    /// Exact match only; overshooting never counts as reaching the quota
    #[inline]
    pub fn is_met_by(&self, cleared: u32) -> bool {
        matches!(*self, Quota::Clears(required) if cleared == required)
    }

    pub fn required(&self) -> Option<u32> {
        match *self {
            Quota::Clears(n) => Some(n),
            Quota::Endless => None,
        }
    }
}

/// Difficulty parameters for one level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// 1-based level number
    pub level: u32,
    pub spawn_interval_ms: u64,
    pub quota: Quota,
}

impl LevelConfig {
    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    pub fn is_chaos(&self) -> bool {
        self.quota == Quota::Endless
    }
}

/// First level that uses the chaos config
pub const CHAOS_LEVEL: u32 = 5;

/// Look up the config for a level. Level 0 is treated as level 1.
pub fn config_for(level: u32) -> LevelConfig {
    let level = level.max(1);
    let (spawn_interval_ms, quota) = match level {
        1 => (2000, Quota::Clears(6)),
        2 => (1600, Quota::Clears(10)),
        3 => (1400, Quota::Clears(25)),
        4 => (1200, Quota::Clears(30)),
        _ => (50, Quota::Endless),
    };
    LevelConfig {
        level,
        spawn_interval_ms,
        quota,
    }
}
