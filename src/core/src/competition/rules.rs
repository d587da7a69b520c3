use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Point values per result, an external rule input. Defaults to the
/// standard 3/1/0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    pub points_win: u16,
    pub points_draw: u16,
    pub points_loss: u16,
}

impl Default for ScoringRules {
    fn default() -> Self {
        ScoringRules {
            points_win: 3,
            points_draw: 1,
            points_loss: 0,
        }
    }
}

/// Competition configuration beyond scoring. Relegation and qualification
/// are recorded as thresholds only; no automation hangs off them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionRules {
    pub scoring: ScoringRules,
    pub relegation_slots: u8,
    /// Named qualification thresholds, e.g. "libertadores" -> top 2.
    pub qualification: BTreeMap<String, u8>,
}

impl CompetitionRules {
    pub fn with_scoring(scoring: ScoringRules) -> Self {
        CompetitionRules {
            scoring,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scoring_is_three_one_zero() {
        let rules = ScoringRules::default();
        assert_eq!(rules.points_win, 3);
        assert_eq!(rules.points_draw, 1);
        assert_eq!(rules.points_loss, 0);
    }
}
