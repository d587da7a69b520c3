use serde::Deserialize;
use std::collections::BTreeMap;
use vfm_core::{CompetitionRules, ScoringRules};

const STATIC_COMPETITIONS_JSON: &str = include_str!("../data/competitions.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionType {
    League,
    Cup,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompetitionEntity {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub competition_type: CompetitionType,
    #[serde(default)]
    pub teams: Vec<u32>,
    #[serde(default)]
    pub rules: CompetitionRulesEntity,
    /// Knockout depth, cup competitions only.
    pub rounds: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionRulesEntity {
    #[serde(default = "default_points_win")]
    pub points_win: u16,
    #[serde(default = "default_points_draw")]
    pub points_draw: u16,
    #[serde(default)]
    pub points_loss: u16,
    #[serde(default)]
    pub relegation: u8,
    #[serde(default)]
    pub qualification: BTreeMap<String, u8>,
}

fn default_points_win() -> u16 {
    3
}

fn default_points_draw() -> u16 {
    1
}

impl Default for CompetitionRulesEntity {
    fn default() -> Self {
        CompetitionRulesEntity {
            points_win: default_points_win(),
            points_draw: default_points_draw(),
            points_loss: 0,
            relegation: 0,
            qualification: BTreeMap::new(),
        }
    }
}

impl From<&CompetitionRulesEntity> for CompetitionRules {
    fn from(entity: &CompetitionRulesEntity) -> Self {
        CompetitionRules {
            scoring: ScoringRules {
                points_win: entity.points_win,
                points_draw: entity.points_draw,
                points_loss: entity.points_loss,
            },
            relegation_slots: entity.relegation,
            qualification: entity.qualification.clone(),
        }
    }
}

pub struct CompetitionLoader;

impl CompetitionLoader {
    pub fn load() -> Vec<CompetitionEntity> {
        serde_json::from_str(STATIC_COMPETITIONS_JSON).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn league_rules_are_fully_specified() {
        let competitions = CompetitionLoader::load();
        let league = competitions
            .iter()
            .find(|c| c.id == "brasileirao")
            .unwrap();

        assert_eq!(league.competition_type, CompetitionType::League);
        assert_eq!(league.teams.len(), 8);
        assert_eq!(league.rules.points_win, 3);
        assert_eq!(league.rules.points_draw, 1);
        assert_eq!(league.rules.relegation, 2);
        assert_eq!(league.rules.qualification.get("libertadores"), Some(&2));
        assert_eq!(league.rules.qualification.get("sulamericana"), Some(&4));
    }

    #[test]
    fn cup_falls_back_to_default_rules() {
        let competitions = CompetitionLoader::load();
        let cup = competitions
            .iter()
            .find(|c| c.id == "copa_do_brasil")
            .unwrap();

        assert_eq!(cup.competition_type, CompetitionType::Cup);
        assert_eq!(cup.rounds, Some(3));
        assert_eq!(cup.rules.points_win, 3);
        assert_eq!(cup.rules.relegation, 0);
    }

    #[test]
    fn rules_convert_to_core_form() {
        let entity = CompetitionRulesEntity {
            points_win: 2,
            points_draw: 1,
            points_loss: 0,
            relegation: 4,
            qualification: BTreeMap::from([("libertadores".to_string(), 2)]),
        };

        let rules = CompetitionRules::from(&entity);
        assert_eq!(rules.scoring.points_win, 2);
        assert_eq!(rules.relegation_slots, 4);
        assert_eq!(rules.qualification.get("libertadores"), Some(&2));
    }
}
