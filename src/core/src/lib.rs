pub mod career;
pub mod club;
pub mod competition;
pub mod utils;

// Re-export career items
pub use career::{
    Career, CareerError, Finances, SaveRecord, TransferMarket, TRANSFER_FEE,
};

// Re-export club items
pub use club::{
    Club, ClubId, Formation, Player, PlayerId, PlayerPosition, Squad, SquadSelector,
};

// Re-export competition items
pub use competition::{
    Competition, CompetitionError, CompetitionRules, CompetitionState, CompetitionTable,
    Fixture, FixtureResult, MatchEngine, PlayedFixture, RoundReport, Schedule,
    ScheduleBuilder, ScoringRules, TableRow,
};

pub use utils::TimeEstimation;
