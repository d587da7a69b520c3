use crate::club::PlayerPosition;
use serde::{Deserialize, Serialize};

/// The formations the original game offers on its tactics screen.
/// Serialized by label so saves read naturally ("4-4-2").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Formation {
    #[default]
    #[serde(rename = "4-4-2")]
    FourFourTwo,
    #[serde(rename = "4-3-3")]
    FourThreeThree,
    #[serde(rename = "3-5-2")]
    ThreeFiveTwo,
    #[serde(rename = "4-2-3-1")]
    FourTwoThreeOne,
}

impl Formation {
    pub const ALL: [Formation; 4] = [
        Formation::FourFourTwo,
        Formation::FourThreeThree,
        Formation::ThreeFiveTwo,
        Formation::FourTwoThreeOne,
    ];

    /// Outfield line sizes (defenders, midfielders, forwards). Every
    /// formation fields one goalkeeper.
    pub fn line_counts(&self) -> (usize, usize, usize) {
        match self {
            Formation::FourFourTwo => (4, 4, 2),
            Formation::FourThreeThree => (4, 3, 3),
            Formation::ThreeFiveTwo => (3, 5, 2),
            Formation::FourTwoThreeOne => (4, 5, 1),
        }
    }

    pub fn count_for(&self, position: PlayerPosition) -> usize {
        let (defenders, midfielders, forwards) = self.line_counts();
        match position {
            PlayerPosition::Goalkeeper => 1,
            PlayerPosition::Defender => defenders,
            PlayerPosition::Midfielder => midfielders,
            PlayerPosition::Forward => forwards,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Formation::FourFourTwo => "4-4-2",
            Formation::FourThreeThree => "4-3-3",
            Formation::ThreeFiveTwo => "3-5-2",
            Formation::FourTwoThreeOne => "4-2-3-1",
        }
    }
}
