pub mod generators;
pub mod loaders;

pub use generators::{DatabaseGenerator, GameData, PlayerGenerator};
pub use loaders::{
    ClubEntity, CompetitionEntity, CompetitionRulesEntity, CompetitionType, DatabaseLoader,
    StaticDatabase,
};
