use rand::seq::SliceRandom;
use rand::{Rng, RngExt};
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU32, Ordering};
use vfm_core::{ClubId, Player, PlayerPosition};

static PLAYER_ID_SEQUENCE: LazyLock<AtomicU32> = LazyLock::new(|| AtomicU32::new(1));

/// Position mix of a generated squad: 2 goalkeepers, 6 defenders,
/// 6 midfielders, 4 forwards.
const SQUAD_POSITIONS: [PlayerPosition; 18] = [
    PlayerPosition::Goalkeeper,
    PlayerPosition::Goalkeeper,
    PlayerPosition::Defender,
    PlayerPosition::Defender,
    PlayerPosition::Defender,
    PlayerPosition::Defender,
    PlayerPosition::Defender,
    PlayerPosition::Defender,
    PlayerPosition::Midfielder,
    PlayerPosition::Midfielder,
    PlayerPosition::Midfielder,
    PlayerPosition::Midfielder,
    PlayerPosition::Midfielder,
    PlayerPosition::Midfielder,
    PlayerPosition::Forward,
    PlayerPosition::Forward,
    PlayerPosition::Forward,
    PlayerPosition::Forward,
];

const FIRST_NAMES: [&str; 20] = [
    "Gabriel", "Lucas", "Matheus", "Pedro", "Rafael", "Thiago", "Bruno", "Felipe", "Gustavo",
    "Joao", "Vinicius", "Eduardo", "Caio", "Diego", "Igor", "Renan", "Wesley", "Andre", "Danilo",
    "Everton",
];

const LAST_NAMES: [&str; 20] = [
    "Silva", "Santos", "Oliveira", "Souza", "Lima", "Pereira", "Costa", "Almeida", "Ferreira",
    "Rodrigues", "Gomes", "Martins", "Barbosa", "Ribeiro", "Carvalho", "Araujo", "Nascimento",
    "Moraes", "Cardoso", "Teixeira",
];

pub struct PlayerGenerator;

impl PlayerGenerator {
    /// A full 18-man squad for one club, position order shuffled so the
    /// roster listing does not read as a template.
    pub fn generate_squad<R: Rng + ?Sized>(
        club_id: ClubId,
        nationality: &str,
        rng: &mut R,
    ) -> Vec<Player> {
        let mut positions = SQUAD_POSITIONS;
        positions.shuffle(rng);

        positions
            .iter()
            .map(|&position| Self::generate(club_id, position, nationality, rng))
            .collect()
    }

    pub fn generate<R: Rng + ?Sized>(
        club_id: ClubId,
        position: PlayerPosition,
        nationality: &str,
        rng: &mut R,
    ) -> Player {
        Player::new(
            PLAYER_ID_SEQUENCE.fetch_add(1, Ordering::SeqCst),
            club_id,
            Self::generate_name(rng),
            position,
            rng.random_range(60..=85),
            rng.random_range(18..=35),
            nationality.to_string(),
        )
    }

    fn generate_name<R: Rng + ?Sized>(rng: &mut R) -> String {
        let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];

        format!("{} {}", first, last)
    }
}
