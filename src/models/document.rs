//! The persisted ranking document.

use crate::models::player::{PlayerId, PlayerStat};
use crate::models::record::MatchRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The complete persisted state: all players and all matches, read and
/// written as one unit. Every mutation loads the whole document, changes it
/// in memory, and writes it back whole.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RankingDocument {
    /// Player stats keyed by player id.
    pub players: HashMap<PlayerId, PlayerStat>,
    /// Match log, most recent first.
    pub matches: Vec<MatchRecord>,
}

impl RankingDocument {
    /// Empty document: no players, no matches.
    pub fn new() -> Self {
        Self::default()
    }
}
