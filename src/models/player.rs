//! Player ranking stats.

use serde::{Deserialize, Serialize};

/// Stable external identifier for a player (the key in the ranking document).
pub type PlayerId = String;

/// Running stats for one player. Created lazily on first appearance in a
/// match and never deleted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStat {
    pub id: PlayerId,
    /// Signed total; losses can push it below zero (no floor).
    pub points: i64,
    pub wins: u32,
    pub losses: u32,
    /// Consecutive wins; reset to 0 on any loss.
    pub streak: u32,
}

impl PlayerStat {
    /// Create a fresh entry for a player. All counters start at zero.
    pub fn new(id: impl Into<PlayerId>) -> Self {
        Self {
            id: id.into(),
            points: 0,
            wins: 0,
            losses: 0,
            streak: 0,
        }
    }

    /// Record a win: extend the streak, grant 3 points, plus 1 more while the
    /// streak is at 3 or higher.
    pub fn record_win(&mut self) {
        self.streak += 1;
        let gained = if self.streak >= 3 { 4 } else { 3 };
        self.points += gained;
        self.wins += 1;
    }

    /// Record a loss: 2 points down, streak broken.
    pub fn record_loss(&mut self) {
        self.points -= 2;
        self.losses += 1;
        self.streak = 0;
    }
}
