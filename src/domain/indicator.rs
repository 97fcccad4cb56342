//! Weekly goal indicators

use serde::{Deserialize, Serialize};

/// A named weekly counter with a target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicator {
    pub id: String,
    pub name: String,
    pub current: u32,
    pub goal: u32,
}

impl Indicator {
    pub fn is_met(&self) -> bool {
        self.current >= self.goal
    }

    /// Progress toward the goal in [0, 1]; a zero goal counts as met
    pub fn progress(&self) -> f64 {
        if self.goal == 0 {
            1.0
        } else {
            (self.current as f64 / self.goal as f64).min(1.0)
        }
    }

    /// Move the counter by a signed delta, saturating at zero
    pub fn bump(&mut self, delta: i64) {
        let next = self.current as i64 + delta;
        self.current = next.max(0) as u32;
    }
}
