use crate::club::ClubId;
use crate::competition::rules::ScoringRules;
use crate::competition::schedule::FixtureResult;
use crate::competition::CompetitionError;
use log::debug;

/// Accumulated record of one club across all played fixtures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    pub club_id: ClubId,
    pub played: u16,
    pub won: u16,
    pub drawn: u16,
    pub lost: u16,
    pub goals_for: u16,
    pub goals_against: u16,
    pub points: u16,
}

impl TableRow {
    fn new(club_id: ClubId) -> Self {
        TableRow {
            club_id,
            ..Default::default()
        }
    }

    /// Always derived from goals, never stored, so it cannot drift.
    pub fn goal_difference(&self) -> i32 {
        self.goals_for as i32 - self.goals_against as i32
    }
}

/// Standings of a competition, one row per participant in entry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompetitionTable {
    rows: Vec<TableRow>,
}

impl CompetitionTable {
    pub fn with_participants(participants: &[ClubId]) -> Self {
        CompetitionTable {
            rows: participants.iter().map(|&id| TableRow::new(id)).collect(),
        }
    }

    pub(crate) fn from_rows(rows: Vec<TableRow>) -> Self {
        CompetitionTable { rows }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn row(&self, club_id: ClubId) -> Option<&TableRow> {
        self.rows.iter().find(|r| r.club_id == club_id)
    }

    /// Fold one result into both clubs' rows. Both rows are located before
    /// either is touched, so a bad id leaves the table untouched. Must be
    /// called exactly once per resolved fixture; the round-advance workflow
    /// guarantees that by only folding fixtures it just resolved.
    pub fn apply_result(
        &mut self,
        home: ClubId,
        away: ClubId,
        result: &FixtureResult,
        rules: &ScoringRules,
    ) -> Result<(), CompetitionError> {
        let home_index = self.index_of(home).ok_or(CompetitionError::UnknownClub(home))?;
        let away_index = self.index_of(away).ok_or(CompetitionError::UnknownClub(away))?;

        let home_goals = result.home_goals as u16;
        let away_goals = result.away_goals as u16;

        {
            let row = &mut self.rows[home_index];
            row.played += 1;
            row.goals_for += home_goals;
            row.goals_against += away_goals;
        }
        {
            let row = &mut self.rows[away_index];
            row.played += 1;
            row.goals_for += away_goals;
            row.goals_against += home_goals;
        }

        if home_goals > away_goals {
            self.rows[home_index].won += 1;
            self.rows[home_index].points += rules.points_win;
            self.rows[away_index].lost += 1;
            self.rows[away_index].points += rules.points_loss;
        } else if home_goals < away_goals {
            self.rows[away_index].won += 1;
            self.rows[away_index].points += rules.points_win;
            self.rows[home_index].lost += 1;
            self.rows[home_index].points += rules.points_loss;
        } else {
            self.rows[home_index].drawn += 1;
            self.rows[home_index].points += rules.points_draw;
            self.rows[away_index].drawn += 1;
            self.rows[away_index].points += rules.points_draw;
        }

        debug!(
            "table updated: {} {} x {} {}",
            home, home_goals, away_goals, away
        );

        Ok(())
    }

    /// Rows in ranking order: points, then goal difference, then goals
    /// scored, all descending. The sort is stable, so clubs tied on every
    /// criterion keep their entry order.
    pub fn rank(&self) -> Vec<&TableRow> {
        let mut ranked: Vec<&TableRow> = self.rows.iter().collect();
        ranked.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then(b.goal_difference().cmp(&a.goal_difference()))
                .then(b.goals_for.cmp(&a.goals_for))
        });
        ranked
    }

    fn index_of(&self, club_id: ClubId) -> Option<usize> {
        self.rows.iter().position(|r| r.club_id == club_id)
    }
}
