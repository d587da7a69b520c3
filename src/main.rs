use env_logger::Env;
use log::info;
use vfm_core::utils::TimeEstimation;
use vfm_core::{
    Career, Competition, CompetitionError, CompetitionRules, SaveRecord, Squad, SquadSelector,
};
use vfm_database::{CompetitionType, DatabaseGenerator, DatabaseLoader};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);

    info!("database loaded: {} ms", estimated);

    let mut rng = rand::rng();
    let game = DatabaseGenerator::generate(&database, &mut rng);

    let club = &game.clubs[0];
    let career = Career::new("Coach", &club.country, None, "2025/2026", club.id, &club.name)?;
    let mut save = SaveRecord::new(career);

    let league = game
        .competitions
        .iter()
        .find(|c| c.competition_type == CompetitionType::League)
        .expect("data pack has no league competition");

    let competition = Competition::new(&league.teams, CompetitionRules::from(&league.rules))?;
    save.add_competition(&league.id, competition);

    let squad = Squad::from_players(save.career.club_id, &game.players);
    for player in SquadSelector::select(&squad, save.career.formation) {
        info!(
            "starter: {} ({}, {})",
            player.name,
            player.position.short_name(),
            player.overall
        );
    }

    // An empty squad legally rates 0; only ids outside the club list are
    // unresolvable.
    let strength_of = |club_id| {
        game.clubs
            .iter()
            .find(|c| c.id == club_id)
            .map(|club| Squad::from_players(club.id, &game.players).strength_rating())
    };

    let competition = save
        .competition_mut(&league.id)
        .expect("competition was just added");

    loop {
        match competition.advance_round(&strength_of, &mut rng) {
            Ok(report) => {
                for played in &report.played {
                    info!(
                        "round {}: club {} {} x {} club {}",
                        report.round + 1,
                        played.home,
                        played.result.home_goals,
                        played.result.away_goals,
                        played.away
                    );
                }
            }
            Err(CompetitionError::BoundaryReached) => break,
            Err(error) => return Err(error.into()),
        }
    }

    info!("final standings ({})", league.name);
    for (index, row) in competition.table.rank().iter().enumerate() {
        let club_name = game
            .clubs
            .iter()
            .find(|c| c.id == row.club_id)
            .map(|c| c.name.as_str())
            .unwrap_or("unknown");

        info!(
            "{:>2}. {:<18} pts {:>2} p {:>2} gf {:>2} ga {:>2} sg {:>3}",
            index + 1,
            club_name,
            row.points,
            row.played,
            row.goals_for,
            row.goals_against,
            row.goal_difference()
        );
    }

    save.touch();

    Ok(())
}
