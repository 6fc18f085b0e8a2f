//! Team match ranking web app: library with models, ranking logic, and store.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::apply_match;
pub use models::{
    MatchError, MatchInput, MatchRecord, MatchRecordId, PlayerId, PlayerStat, RankingDocument,
    TeamColor,
};
pub use store::{FileStore, StoreError};
