//! Ranking engine: apply one match outcome to the document.

use crate::models::{MatchError, MatchInput, MatchRecord, PlayerStat, RankingDocument, TeamColor};
use chrono::{DateTime, Utc};

/// Apply a match to the document and return the new record.
///
/// 1. Validate the rosters (non-empty, disjoint); on error the document is untouched.
/// 2. Create a zeroed stats entry for every participant not seen before.
/// 3. Score winners (streak-dependent 3 or 4 points) and losers (always -2).
/// 4. Prepend the new record to the match log (most recent first).
///
/// Submitting the same input twice records two distinct matches and applies
/// the scoring delta twice; there is no content-derived dedup key.
/// Persisting the updated document is the caller's job.
pub fn apply_match(
    doc: &mut RankingDocument,
    input: &MatchInput,
) -> Result<MatchRecord, MatchError> {
    if input.team_black.is_empty() {
        return Err(MatchError::EmptyTeam(TeamColor::Black));
    }
    if input.team_white.is_empty() {
        return Err(MatchError::EmptyTeam(TeamColor::White));
    }
    if let Some(dup) = input
        .team_black
        .iter()
        .find(|id| input.team_white.contains(*id))
    {
        return Err(MatchError::OverlappingTeams(dup.clone()));
    }

    let (winners, losers) = match input.winner {
        TeamColor::Black => (&input.team_black, &input.team_white),
        TeamColor::White => (&input.team_white, &input.team_black),
    };

    for id in winners {
        doc.players
            .entry(id.clone())
            .or_insert_with(|| PlayerStat::new(id.clone()))
            .record_win();
    }
    for id in losers {
        doc.players
            .entry(id.clone())
            .or_insert_with(|| PlayerStat::new(id.clone()))
            .record_loss();
    }

    let record = MatchRecord::new(
        input.team_black.clone(),
        input.team_white.clone(),
        input.winner,
        resolve_date(input.date.as_deref()),
    );
    doc.matches.insert(0, record.clone());
    Ok(record)
}

/// The caller-supplied date if it parses as RFC 3339, otherwise the current time.
fn resolve_date(date: Option<&str>) -> DateTime<Utc> {
    date.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|d| d.with_timezone(&Utc))
        .unwrap_or_else(Utc::now)
}
