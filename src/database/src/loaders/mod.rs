pub mod club;
pub mod competition;

pub use club::{ClubEntity, ClubLoader};
pub use competition::{
    CompetitionEntity, CompetitionLoader, CompetitionRulesEntity, CompetitionType,
};

use log::info;

/// The embedded data pack, parsed once at startup.
pub struct StaticDatabase {
    pub clubs: Vec<ClubEntity>,
    pub competitions: Vec<CompetitionEntity>,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> StaticDatabase {
        let database = StaticDatabase {
            clubs: ClubLoader::load(),
            competitions: CompetitionLoader::load(),
        };

        info!(
            "data pack loaded: {} clubs, {} competitions",
            database.clubs.len(),
            database.competitions.len()
        );

        database
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_pack_parses() {
        let database = DatabaseLoader::load();
        assert_eq!(database.clubs.len(), 8);
        assert!(!database.competitions.is_empty());
    }
}
