use crate::club::ClubId;
use serde::{Deserialize, Serialize};

pub type PlayerId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerPosition {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DF")]
    Defender,
    #[serde(rename = "MF")]
    Midfielder,
    #[serde(rename = "FW")]
    Forward,
}

impl PlayerPosition {
    pub fn short_name(&self) -> &'static str {
        match self {
            PlayerPosition::Goalkeeper => "GK",
            PlayerPosition::Defender => "DF",
            PlayerPosition::Midfielder => "MF",
            PlayerPosition::Forward => "FW",
        }
    }
}

/// A player as the data pack describes them: a club assignment and the
/// `overall` rating everything else is derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub club_id: ClubId,
    pub name: String,
    pub position: PlayerPosition,
    pub overall: u8,
    pub age: u8,
    pub nationality: String,
}

impl Player {
    pub fn new(
        id: PlayerId,
        club_id: ClubId,
        name: String,
        position: PlayerPosition,
        overall: u8,
        age: u8,
        nationality: String,
    ) -> Self {
        Player {
            id,
            club_id,
            name,
            position,
            overall,
            age,
            nationality,
        }
    }
}
