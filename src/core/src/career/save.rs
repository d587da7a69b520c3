use crate::career::Career;
use crate::competition::Competition;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One save slot: the career plus every competition it takes part in,
/// keyed by competition id ("brasileirao", "copa_do_brasil", ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecord {
    pub career: Career,
    pub competitions: HashMap<String, Competition>,
    /// Unix millis of the last write.
    pub timestamp: i64,
}

impl SaveRecord {
    pub fn new(career: Career) -> Self {
        SaveRecord {
            career,
            competitions: HashMap::new(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    pub fn add_competition(&mut self, id: &str, competition: Competition) {
        self.competitions.insert(id.to_string(), competition);
        self.touch();
    }

    pub fn competition(&self, id: &str) -> Option<&Competition> {
        self.competitions.get(id)
    }

    pub fn competition_mut(&mut self, id: &str) -> Option<&mut Competition> {
        self.competitions.get_mut(id)
    }

    pub fn touch(&mut self) {
        self.timestamp = Utc::now().timestamp_millis();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::competition::CompetitionRules;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn save_with_league() -> SaveRecord {
        let career =
            Career::new("Tite", "Brazil", None, "2025/2026", 1, "Palmeiras").unwrap();
        let mut save = SaveRecord::new(career);

        let mut competition =
            Competition::new(&[1, 2, 3, 4], CompetitionRules::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        competition
            .advance_round(|_| Some(70.0), &mut rng)
            .unwrap();
        save.add_competition("brasileirao", competition);
        save
    }

    #[test]
    fn save_json_keeps_the_original_field_names() {
        let save = save_with_league();
        let json = serde_json::to_value(&save).unwrap();

        let career = &json["career"];
        assert!(career["name"].is_string());
        assert_eq!(career["clubId"], 1);
        assert_eq!(career["formation"], "4-4-2");
        assert_eq!(career["trainingIntensity"], 0.5);
        assert_eq!(career["finances"]["balance"], 1_000_000);

        let league = &json["competitions"]["brasileirao"];
        assert_eq!(league["currentRound"], 1);

        let fixture = &league["fixtures"][0];
        assert!(fixture["result"]["homeGoals"].is_u64());
        assert!(fixture["result"]["awayGoals"].is_u64());

        let row = &league["table"]["1"];
        for key in ["pts", "p", "w", "d", "l", "gf", "ga", "sg"] {
            assert!(row[key].is_number(), "missing table key {}", key);
        }
        assert_eq!(
            row["sg"].as_i64().unwrap(),
            row["gf"].as_i64().unwrap() - row["ga"].as_i64().unwrap()
        );
    }

    #[test]
    fn save_round_trips_through_json() {
        let save = save_with_league();
        let json = serde_json::to_string(&save).unwrap();
        let restored: SaveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.career, save.career);
        assert_eq!(restored.timestamp, save.timestamp);

        let before = save.competition("brasileirao").unwrap();
        let after = restored.competition("brasileirao").unwrap();
        assert_eq!(after.current_round, before.current_round);
        assert_eq!(after.schedule.fixtures, before.schedule.fixtures);
        assert_eq!(after.table.rows(), before.table.rows());
        // scoring rules are configuration, not save data
        assert_eq!(after.rules, CompetitionRules::default());
    }

    #[test]
    fn add_competition_refreshes_the_timestamp() {
        let career =
            Career::new("Tite", "Brazil", None, "2025/2026", 1, "Palmeiras").unwrap();
        let mut save = SaveRecord::new(career);
        save.timestamp = 0;

        let competition =
            Competition::new(&[1, 2], CompetitionRules::default()).unwrap();
        save.add_competition("brasileirao", competition);

        assert!(save.timestamp > 0);
    }
}
