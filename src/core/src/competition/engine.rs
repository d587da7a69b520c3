use crate::club::ClubId;
use crate::competition::schedule::{FixtureResult, Schedule};
use log::debug;
use rand::{Rng, RngExt};

/// Divisor applied to a club's strength rating before the random term.
/// Together with [`GOAL_RANDOM_SPREAD`] this is the original game's goal
/// heuristic, kept for behavioural compatibility. Tunable, not a law.
pub const GOAL_STRENGTH_DIVISOR: f32 = 20.0;

/// Upper bound (exclusive) of the uniform random term added per side.
pub const GOAL_RANDOM_SPREAD: f32 = 2.0;

/// A fixture resolved by [`MatchEngine::simulate_round`], in resolution
/// order. The round-advance workflow folds each of these into the table
/// exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedFixture {
    pub home: ClubId,
    pub away: ClubId,
    pub result: FixtureResult,
}

/// What happened when a round was simulated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub round: u32,
    /// Fixtures newly resolved by this call.
    pub played: Vec<PlayedFixture>,
    /// Clubs whose rating could not be resolved; their fixtures were left
    /// pending rather than defaulted to a score.
    pub missing_ratings: Vec<ClubId>,
}

impl RoundReport {
    fn new(round: u32) -> Self {
        RoundReport {
            round,
            played: Vec::new(),
            missing_ratings: Vec::new(),
        }
    }
}

/// Resolves a round of fixtures from squad strength ratings.
pub struct MatchEngine;

impl MatchEngine {
    /// Simulate every unplayed fixture of `round`, attaching results in
    /// place. Fixtures that already carry a result are skipped, so calling
    /// this twice for the same round is harmless. A fixture whose club has
    /// no resolvable rating stays pending and is reported instead.
    pub fn simulate_round<S, R>(
        schedule: &mut Schedule,
        round: u32,
        strength_of: S,
        rng: &mut R,
    ) -> RoundReport
    where
        S: Fn(ClubId) -> Option<f32>,
        R: Rng + ?Sized,
    {
        let mut report = RoundReport::new(round);

        for fixture in schedule
            .fixtures
            .iter_mut()
            .filter(|f| f.round == round && !f.is_played())
        {
            let home_strength = strength_of(fixture.home);
            let away_strength = strength_of(fixture.away);

            let (Some(home_strength), Some(away_strength)) = (home_strength, away_strength)
            else {
                if home_strength.is_none() {
                    report.missing_ratings.push(fixture.home);
                }
                if away_strength.is_none() {
                    report.missing_ratings.push(fixture.away);
                }
                continue;
            };

            let result = FixtureResult {
                home_goals: Self::goals(home_strength, rng),
                away_goals: Self::goals(away_strength, rng),
            };

            debug!(
                "round {}: {} {} x {} {}",
                round, fixture.home, result.home_goals, result.away_goals, fixture.away
            );

            fixture.result = Some(result);
            report.played.push(PlayedFixture {
                home: fixture.home,
                away: fixture.away,
                result,
            });
        }

        report
    }

    fn goals<R: Rng + ?Sized>(strength: f32, rng: &mut R) -> u8 {
        let noise: f32 = rng.random_range(0.0..GOAL_RANDOM_SPREAD);
        (strength / GOAL_STRENGTH_DIVISOR + noise).round().max(0.0) as u8
    }
}
