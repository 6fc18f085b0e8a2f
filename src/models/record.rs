//! Match records, submission input, and the winning-side tag.

use crate::models::player::PlayerId;
use chrono::{DateTime, Utc};
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};

/// Unique identifier for a recorded match: an 8-character random token.
pub type MatchRecordId = String;

/// Which side won the match. Serialized as the literal tags `"Black"` / `"White"`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum TeamColor {
    Black,
    White,
}

impl std::fmt::Display for TeamColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamColor::Black => write!(f, "Black"),
            TeamColor::White => write!(f, "White"),
        }
    }
}

/// Errors for an invalid match submission.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MatchError {
    /// A roster has no players.
    EmptyTeam(TeamColor),
    /// The same player appears on both rosters.
    OverlappingTeams(PlayerId),
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchError::EmptyTeam(color) => write!(f, "Team {} has no players", color),
            MatchError::OverlappingTeams(id) => write!(f, "Player {} is on both teams", id),
        }
    }
}

/// A recorded match: two rosters and the winning side. Immutable once created.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: MatchRecordId,
    pub date: DateTime<Utc>,
    pub team_black: Vec<PlayerId>,
    pub team_white: Vec<PlayerId>,
    pub winner: TeamColor,
}

impl MatchRecord {
    /// Create a record with a fresh id for the given rosters and winner.
    pub fn new(
        team_black: Vec<PlayerId>,
        team_white: Vec<PlayerId>,
        winner: TeamColor,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: new_match_id(),
            date,
            team_black,
            team_white,
            winner,
        }
    }
}

/// Incoming match submission. `date` stays a raw string so an ill-formed
/// value falls back to the recording time instead of rejecting the match.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInput {
    pub team_black: Vec<PlayerId>,
    pub team_white: Vec<PlayerId>,
    pub winner: TeamColor,
    #[serde(default)]
    pub date: Option<String>,
}

/// Generate a match id: 8 alphanumeric characters. Uniqueness is
/// probabilistic; existing records are not checked for collisions.
pub fn new_match_id() -> MatchRecordId {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect()
}
