use crate::club::{ClubId, Formation, PlayerId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const STARTING_BALANCE: i64 = 1_000_000;
const DEFAULT_TRAINING_INTENSITY: f32 = 0.5;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CareerError {
    #[error("coach name must not be empty")]
    EmptyCoachName,
    #[error("insufficient funds: {required} required, {available} available")]
    InsufficientFunds { required: i64, available: i64 },
    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),
    #[error("player {0} already plays for this club")]
    AlreadySigned(PlayerId),
}

/// Club money, simplified to a single balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finances {
    pub balance: i64,
}

impl Default for Finances {
    fn default() -> Self {
        Finances {
            balance: STARTING_BALANCE,
        }
    }
}

impl Finances {
    pub fn credit(&mut self, amount: i64) {
        self.balance += amount;
    }

    pub fn debit(&mut self, amount: i64) -> Result<(), CareerError> {
        if self.balance < amount {
            return Err(CareerError::InsufficientFunds {
                required: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }
}

/// The coaching career a save slot revolves around: who the coach is,
/// which club they run, and their standing choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    #[serde(rename = "name")]
    pub coach_name: String,
    pub nationality: String,
    pub avatar: Option<String>,
    /// Data-package label, e.g. "2025/2026".
    pub season: String,
    pub club_id: ClubId,
    pub club_name: String,
    pub formation: Formation,
    pub training_intensity: f32,
    pub finances: Finances,
}

impl Career {
    pub fn new(
        coach_name: &str,
        nationality: &str,
        avatar: Option<String>,
        season: &str,
        club_id: ClubId,
        club_name: &str,
    ) -> Result<Self, CareerError> {
        let coach_name = coach_name.trim();
        if coach_name.is_empty() {
            return Err(CareerError::EmptyCoachName);
        }

        let nationality = nationality.trim();

        Ok(Career {
            coach_name: coach_name.to_string(),
            nationality: if nationality.is_empty() {
                "Unknown".to_string()
            } else {
                nationality.to_string()
            },
            avatar,
            season: season.to_string(),
            club_id,
            club_name: club_name.to_string(),
            formation: Formation::default(),
            training_intensity: DEFAULT_TRAINING_INTENSITY,
            finances: Finances::default(),
        })
    }

    pub fn set_formation(&mut self, formation: Formation) {
        self.formation = formation;
    }

    /// Weekly training intensity, clamped to 0..=1.
    pub fn set_training_intensity(&mut self, intensity: f32) {
        self.training_intensity = intensity.clamp(0.0, 1.0);
    }
}
