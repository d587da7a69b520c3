use crate::club::{ClubId, Formation, Player, PlayerPosition};
use log::{debug, warn};

/// A club's current roster, borrowed from the full player list.
#[derive(Debug, Clone)]
pub struct Squad<'p> {
    pub club_id: ClubId,
    pub players: Vec<&'p Player>,
}

impl<'p> Squad<'p> {
    pub fn from_players(club_id: ClubId, players: &'p [Player]) -> Self {
        Squad {
            club_id,
            players: players.iter().filter(|p| p.club_id == club_id).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Mean `overall` across the assigned players, the scalar the match
    /// engine simulates from. An empty squad rates 0.
    pub fn strength_rating(&self) -> f32 {
        if self.players.is_empty() {
            return 0.0;
        }

        let total: u32 = self.players.iter().map(|p| p.overall as u32).sum();
        total as f32 / self.players.len() as f32
    }
}

const STARTING_ELEVEN: usize = 11;

/// Naive best-XI auto-selection: per formation line, highest overall first.
pub struct SquadSelector;

impl SquadSelector {
    pub fn select<'p>(squad: &Squad<'p>, formation: Formation) -> Vec<&'p Player> {
        let mut selected: Vec<&'p Player> = Vec::with_capacity(STARTING_ELEVEN);

        for position in [
            PlayerPosition::Goalkeeper,
            PlayerPosition::Defender,
            PlayerPosition::Midfielder,
            PlayerPosition::Forward,
        ] {
            let wanted = formation.count_for(position);
            let mut candidates: Vec<&'p Player> = squad
                .players
                .iter()
                .copied()
                .filter(|p| p.position == position)
                .collect();
            candidates.sort_by(|a, b| b.overall.cmp(&a.overall));

            if candidates.len() < wanted {
                warn!(
                    "club {}: only {} of {} players for {}",
                    squad.club_id,
                    candidates.len(),
                    wanted,
                    position.short_name()
                );
            }

            selected.extend(candidates.into_iter().take(wanted));
        }

        debug!(
            "club {}: selected {} of {} starters ({})",
            squad.club_id,
            selected.len(),
            STARTING_ELEVEN,
            formation.label()
        );

        selected
    }
}
