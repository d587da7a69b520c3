use crate::generators::PlayerGenerator;
use crate::loaders::{CompetitionEntity, StaticDatabase};
use log::debug;
use rand::Rng;
use vfm_core::{Club, Player};

/// A fresh game world: static club data plus a generated player pool.
pub struct GameData {
    pub clubs: Vec<Club>,
    pub players: Vec<Player>,
    pub competitions: Vec<CompetitionEntity>,
}

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    pub fn generate<R: Rng + ?Sized>(database: &StaticDatabase, rng: &mut R) -> GameData {
        let clubs: Vec<Club> = database
            .clubs
            .iter()
            .map(|club| {
                Club::new(
                    club.id,
                    club.name.clone(),
                    club.league.clone(),
                    club.logo.clone(),
                    club.country.clone(),
                )
            })
            .collect();

        let players: Vec<Player> = database
            .clubs
            .iter()
            .flat_map(|club| PlayerGenerator::generate_squad(club.id, &club.country, rng))
            .collect();

        debug!(
            "game world generated: {} clubs, {} players",
            clubs.len(),
            players.len()
        );

        GameData {
            clubs,
            players,
            competitions: database.competitions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::DatabaseLoader;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn every_club_gets_a_full_squad() {
        let database = DatabaseLoader::load();
        let mut rng = StdRng::seed_from_u64(1);

        let game = DatabaseGenerator::generate(&database, &mut rng);

        assert_eq!(game.clubs.len(), 8);
        assert_eq!(game.players.len(), 8 * 18);

        for club in &game.clubs {
            let squad_size = game.players.iter().filter(|p| p.club_id == club.id).count();
            assert_eq!(squad_size, 18, "{}", club.name);
        }
    }

    #[test]
    fn competitions_carry_over_from_the_data_pack() {
        let database = DatabaseLoader::load();
        let mut rng = StdRng::seed_from_u64(2);

        let game = DatabaseGenerator::generate(&database, &mut rng);

        assert!(game.competitions.iter().any(|c| c.id == "brasileirao"));
    }
}
