//! Data structures for the ranking tracker: player stats, match records, the document.

mod document;
mod player;
mod record;

pub use document::RankingDocument;
pub use player::{PlayerId, PlayerStat};
pub use record::{MatchError, MatchInput, MatchRecord, MatchRecordId, TeamColor};
