use crate::club::ClubId;
use crate::competition::CompetitionError;
use itertools::Itertools;

/// Final score of a played fixture. Attached once, never overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureResult {
    pub home_goals: u8,
    pub away_goals: u8,
}

/// One scheduled match between two clubs in a given round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub round: u32,
    pub home: ClubId,
    pub away: ClubId,
    pub result: Option<FixtureResult>,
}

impl Fixture {
    fn new(round: u32, home: ClubId, away: ClubId) -> Self {
        Fixture {
            round,
            home,
            away,
            result: None,
        }
    }

    pub fn is_played(&self) -> bool {
        self.result.is_some()
    }
}

/// The complete fixture list of a season, ordered first leg then second leg.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    pub fixtures: Vec<Fixture>,
}

impl Schedule {
    pub fn total_rounds(&self) -> u32 {
        self.fixtures
            .iter()
            .map(|f| f.round + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn fixtures_for_round(&self, round: u32) -> impl Iterator<Item = &Fixture> {
        self.fixtures.iter().filter(move |f| f.round == round)
    }

    pub fn remaining_matches(&self, club_id: ClubId) -> usize {
        self.fixtures
            .iter()
            .filter(|f| f.result.is_none() && (f.home == club_id || f.away == club_id))
            .count()
    }
}

/// Builds a balanced double round robin with the circle method: fix the
/// first slot, rotate the rest once per round, pair opposite slots. The
/// second leg mirrors the first with home and away swapped.
pub struct ScheduleBuilder;

impl ScheduleBuilder {
    pub fn build(participants: &[ClubId]) -> Result<Schedule, CompetitionError> {
        if participants.len() < 2 {
            return Err(CompetitionError::NotEnoughParticipants(participants.len()));
        }

        if let Some(&duplicate) = participants.iter().duplicates().next() {
            return Err(CompetitionError::DuplicateParticipant(duplicate));
        }

        // Odd club count gets a synthetic bye slot; pairings against it are
        // dropped, which gives the real opponent a rest round.
        let mut slots: Vec<Option<ClubId>> = participants.iter().copied().map(Some).collect();
        if slots.len() % 2 == 1 {
            slots.push(None);
        }

        let rounds_per_leg = (slots.len() - 1) as u32;
        let mut fixtures = Vec::with_capacity(participants.len() * (participants.len() - 1));

        for round in 0..rounds_per_leg {
            for i in 0..slots.len() / 2 {
                let home = slots[i];
                let away = slots[slots.len() - 1 - i];

                if let (Some(home), Some(away)) = (home, away) {
                    fixtures.push(Fixture::new(round, home, away));
                }
            }

            // Rotate everything except the fixed first slot.
            let last = slots.remove(slots.len() - 1);
            slots.insert(1, last);
        }

        let second_leg: Vec<Fixture> = fixtures
            .iter()
            .map(|f| Fixture::new(f.round + rounds_per_leg, f.away, f.home))
            .collect();
        fixtures.extend(second_leg);

        Ok(Schedule { fixtures })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use std::collections::HashSet;

    fn pair_count(schedule: &Schedule, a: ClubId, b: ClubId) -> (usize, usize) {
        let home_a = schedule
            .fixtures
            .iter()
            .filter(|f| f.home == a && f.away == b)
            .count();
        let home_b = schedule
            .fixtures
            .iter()
            .filter(|f| f.home == b && f.away == a)
            .count();
        (home_a, home_b)
    }

    fn assert_one_match_per_club_per_round(schedule: &Schedule) {
        for round in 0..schedule.total_rounds() {
            let mut seen = HashSet::new();
            for fixture in schedule.fixtures_for_round(round) {
                assert!(seen.insert(fixture.home), "club {} twice in round {}", fixture.home, round);
                assert!(seen.insert(fixture.away), "club {} twice in round {}", fixture.away, round);
            }
        }
    }

    #[test]
    fn four_clubs_give_twelve_fixtures_over_six_rounds() {
        let clubs = [1, 2, 3, 4];
        let schedule = ScheduleBuilder::build(&clubs).unwrap();

        assert_eq!(schedule.fixtures.len(), 12);
        assert_eq!(schedule.total_rounds(), 6);

        for (&a, &b) in clubs.iter().tuple_combinations() {
            assert_eq!(pair_count(&schedule, a, b), (1, 1));
        }

        assert_one_match_per_club_per_round(&schedule);

        // Nothing played yet, so every club still has a full season ahead.
        assert_eq!(schedule.remaining_matches(1), 6);
    }

    #[test]
    fn every_even_size_covers_all_pairs_twice() {
        for n in [2u32, 6, 8, 20] {
            let clubs: Vec<ClubId> = (1..=n).collect();
            let schedule = ScheduleBuilder::build(&clubs).unwrap();

            assert_eq!(schedule.fixtures.len() as u32, n * (n - 1));
            assert_eq!(schedule.total_rounds(), 2 * (n - 1));

            for (&a, &b) in clubs.iter().tuple_combinations() {
                assert_eq!(pair_count(&schedule, a, b), (1, 1), "pair {a}-{b} for n={n}");
            }

            assert_one_match_per_club_per_round(&schedule);
        }
    }

    #[test]
    fn odd_size_gets_one_bye_round_per_leg() {
        let clubs: Vec<ClubId> = (1..=5).collect();
        let schedule = ScheduleBuilder::build(&clubs).unwrap();

        assert_eq!(schedule.fixtures.len(), 20);
        assert_eq!(schedule.total_rounds(), 10);

        for (&a, &b) in clubs.iter().tuple_combinations() {
            assert_eq!(pair_count(&schedule, a, b), (1, 1));
        }

        assert_one_match_per_club_per_round(&schedule);

        // Each club rests exactly once per leg.
        for &club in &clubs {
            for leg_rounds in [0..5u32, 5..10u32] {
                let played = leg_rounds
                    .filter(|&round| {
                        schedule
                            .fixtures_for_round(round)
                            .any(|f| f.home == club || f.away == club)
                    })
                    .count();
                assert_eq!(played, 4, "club {} byes in one leg", club);
            }
        }
    }

    #[test]
    fn generation_is_deterministic_for_a_fixed_input_order() {
        let clubs: Vec<ClubId> = (1..=16).collect();

        let first = ScheduleBuilder::build(&clubs).unwrap();
        let second = ScheduleBuilder::build(&clubs).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn rejects_fewer_than_two_participants() {
        assert_eq!(
            ScheduleBuilder::build(&[]),
            Err(CompetitionError::NotEnoughParticipants(0))
        );
        assert_eq!(
            ScheduleBuilder::build(&[7]),
            Err(CompetitionError::NotEnoughParticipants(1))
        );
    }

    #[test]
    fn rejects_duplicate_participants() {
        assert_eq!(
            ScheduleBuilder::build(&[1, 2, 3, 2]),
            Err(CompetitionError::DuplicateParticipant(2))
        );
    }
}
