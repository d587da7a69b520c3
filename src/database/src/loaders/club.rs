use serde::Deserialize;

const STATIC_CLUBS_JSON: &str = include_str!("../data/clubs.json");

#[derive(Debug, Clone, Deserialize)]
pub struct ClubEntity {
    pub id: u32,
    pub name: String,
    pub league: String,
    pub logo: String,
    pub country: String,
}

pub struct ClubLoader;

impl ClubLoader {
    pub fn load() -> Vec<ClubEntity> {
        serde_json::from_str(STATIC_CLUBS_JSON).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clubs_have_unique_ids_and_a_league() {
        let clubs = ClubLoader::load();

        assert_eq!(clubs.len(), 8);

        let mut ids: Vec<u32> = clubs.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), clubs.len());

        assert!(clubs.iter().all(|c| c.league == "Serie A"));
        assert!(clubs.iter().all(|c| c.country == "Brazil"));
    }
}
