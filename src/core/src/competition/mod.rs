pub mod engine;
pub mod rules;
pub mod schedule;
pub mod table;

pub use engine::{MatchEngine, PlayedFixture, RoundReport};
pub use rules::{CompetitionRules, ScoringRules};
pub use schedule::{Fixture, FixtureResult, Schedule, ScheduleBuilder};
pub use table::{CompetitionTable, TableRow};

use crate::club::ClubId;
use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompetitionError {
    #[error("at least 2 participants are required, got {0}")]
    NotEnoughParticipants(usize),
    #[error("participant {0} appears more than once")]
    DuplicateParticipant(ClubId),
    #[error("club {0} has no entry in the standings table")]
    UnknownClub(ClubId),
    #[error("season is already complete")]
    BoundaryReached,
}

/// Lifecycle of a competition instance, derived from the round cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompetitionState {
    Scheduled,
    InProgress,
    Complete,
}

/// A single league season: the full fixture list, the standings table and
/// the round cursor. Created once when a career is confirmed, mutated once
/// per simulated round, owned exclusively by the save record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "CompetitionRecord", from = "CompetitionRecord")]
pub struct Competition {
    pub schedule: Schedule,
    pub table: CompetitionTable,
    pub current_round: u32,
    pub rules: CompetitionRules,
}

impl Competition {
    pub fn new(
        participants: &[ClubId],
        rules: CompetitionRules,
    ) -> Result<Self, CompetitionError> {
        let schedule = ScheduleBuilder::build(participants)?;

        info!(
            "competition created: {} clubs, {} rounds",
            participants.len(),
            schedule.total_rounds()
        );

        Ok(Competition {
            schedule,
            table: CompetitionTable::with_participants(participants),
            current_round: 0,
            rules,
        })
    }

    pub fn total_rounds(&self) -> u32 {
        self.schedule.total_rounds()
    }

    pub fn state(&self) -> CompetitionState {
        if self.current_round == 0 {
            CompetitionState::Scheduled
        } else if self.current_round < self.total_rounds() {
            CompetitionState::InProgress
        } else {
            CompetitionState::Complete
        }
    }

    /// Play the current round and fold the results into the table.
    ///
    /// The whole step is one logical transition: simulate the round's
    /// unplayed fixtures, apply each newly-resolved result exactly once,
    /// then advance the cursor. The cursor is held back while any fixture
    /// of the round is still unresolved (missing rating data), so a retry
    /// after fixing the roster picks up only the stragglers.
    pub fn advance_round<S, R>(
        &mut self,
        strength_of: S,
        rng: &mut R,
    ) -> Result<RoundReport, CompetitionError>
    where
        S: Fn(ClubId) -> Option<f32>,
        R: Rng + ?Sized,
    {
        if self.state() == CompetitionState::Complete {
            return Err(CompetitionError::BoundaryReached);
        }

        let round = self.current_round;

        // Every participant of the round must already hold a table row,
        // checked before any result is attached. A fixture must never end
        // up played but uncounted.
        for fixture in self.schedule.fixtures_for_round(round) {
            if !fixture.is_played() {
                for club_id in [fixture.home, fixture.away] {
                    if self.table.row(club_id).is_none() {
                        return Err(CompetitionError::UnknownClub(club_id));
                    }
                }
            }
        }

        let report = MatchEngine::simulate_round(&mut self.schedule, round, strength_of, rng);

        for played in &report.played {
            self.table
                .apply_result(played.home, played.away, &played.result, &self.rules.scoring)?;
        }

        if report.missing_ratings.is_empty() {
            self.current_round += 1;
            debug!("round {} complete, cursor at {}", round, self.current_round);
        } else {
            for club_id in &report.missing_ratings {
                warn!(
                    "no rating data for club {} in round {}, fixture left pending",
                    club_id, round
                );
            }
        }

        Ok(report)
    }
}

// Persisted shape of a competition. Field names and the table layout match
// the save format of the original game; scoring rules are configuration,
// not save data, and fall back to 3/1/0 when loading.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompetitionRecord {
    fixtures: Vec<FixtureRecord>,
    table: BTreeMap<String, TableRowRecord>,
    current_round: u32,
}

#[derive(Serialize, Deserialize)]
struct FixtureRecord {
    round: u32,
    home: ClubId,
    away: ClubId,
    result: Option<ResultRecord>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResultRecord {
    home_goals: u8,
    away_goals: u8,
}

#[derive(Serialize, Deserialize)]
struct TableRowRecord {
    pts: u16,
    p: u16,
    w: u16,
    d: u16,
    l: u16,
    gf: u16,
    ga: u16,
    sg: i32,
}

impl From<Competition> for CompetitionRecord {
    fn from(competition: Competition) -> Self {
        CompetitionRecord {
            fixtures: competition
                .schedule
                .fixtures
                .iter()
                .map(|f| FixtureRecord {
                    round: f.round,
                    home: f.home,
                    away: f.away,
                    result: f.result.map(|r| ResultRecord {
                        home_goals: r.home_goals,
                        away_goals: r.away_goals,
                    }),
                })
                .collect(),
            table: competition
                .table
                .rows()
                .iter()
                .map(|row| {
                    (
                        row.club_id.to_string(),
                        TableRowRecord {
                            pts: row.points,
                            p: row.played,
                            w: row.won,
                            d: row.drawn,
                            l: row.lost,
                            gf: row.goals_for,
                            ga: row.goals_against,
                            // derived on write, never stored by the core
                            sg: row.goal_difference(),
                        },
                    )
                })
                .collect(),
            current_round: competition.current_round,
        }
    }
}

impl From<CompetitionRecord> for Competition {
    fn from(record: CompetitionRecord) -> Self {
        let fixtures = record
            .fixtures
            .into_iter()
            .map(|f| Fixture {
                round: f.round,
                home: f.home,
                away: f.away,
                result: f.result.map(|r| FixtureResult {
                    home_goals: r.home_goals,
                    away_goals: r.away_goals,
                }),
            })
            .collect();

        let mut entries: Vec<(ClubId, TableRowRecord)> = record
            .table
            .into_iter()
            .filter_map(|(key, row)| match key.parse::<ClubId>() {
                Ok(club_id) => Some((club_id, row)),
                Err(_) => {
                    warn!("discarding standings entry with malformed club id {:?}", key);
                    None
                }
            })
            .collect();
        entries.sort_by_key(|(club_id, _)| *club_id);

        let rows = entries
            .into_iter()
            .map(|(club_id, row)| TableRow {
                club_id,
                played: row.p,
                won: row.w,
                drawn: row.d,
                lost: row.l,
                goals_for: row.gf,
                goals_against: row.ga,
                points: row.pts,
            })
            .collect();

        Competition {
            schedule: Schedule { fixtures },
            table: CompetitionTable::from_rows(rows),
            current_round: record.current_round,
            rules: CompetitionRules::default(),
        }
    }
}
