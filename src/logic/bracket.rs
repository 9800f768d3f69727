//! Single-elimination bracket generation.

use crate::logic::naming::RoundNaming;
use crate::logic::results::advance_winners;
use crate::models::{match_id, Match, Round, Team, TeamKind, TournamentData};
use rand::seq::SliceRandom;
use rand::Rng;

/// Generate a bracket for `teams` with randomly shuffled first-round pairings.
///
/// Fewer than two teams gives a tournament with no rounds.
pub fn generate_bracket(teams: &[Team], sport: &str, naming: &RoundNaming) -> TournamentData {
    generate_bracket_with_rng(teams, sport, naming, &mut rand::thread_rng())
}

/// Same as [`generate_bracket`], shuffling with the given RNG.
///
/// 1. Shuffle the teams.
/// 2. Pair them two at a time; an odd team out is paired with a BYE and advances.
/// 3. Halve until one match remains. Match `k` of a round is fed by matches `2k`
///    and `2k + 1` of the previous one; slots with no feeding match get a BYE.
/// 4. Fill every slot whose feeding match is already decided.
pub fn generate_bracket_with_rng<R: Rng + ?Sized>(
    teams: &[Team],
    sport: &str,
    naming: &RoundNaming,
    rng: &mut R,
) -> TournamentData {
    if teams.len() < 2 {
        log::debug!(
            "Not enough teams for a {} bracket ({} given)",
            sport,
            teams.len()
        );
        return TournamentData::empty(sport, teams.len());
    }

    let mut pool: Vec<Team> = teams
        .iter()
        .map(|t| Team {
            kind: TeamKind::Team,
            ..t.advancing()
        })
        .collect();
    pool.shuffle(rng);

    let first_round: Vec<Match> = pool
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            let second = pair.get(1).cloned().unwrap_or_else(Team::bye);
            Match::new(match_id(sport, 1, i), pair[0].clone(), second)
        })
        .collect();

    let mut rounds = vec![Round {
        name: naming.name_for(first_round.len(), 1),
        matches: first_round,
        level: 1,
    }];

    let mut previous = rounds[0].matches.len();
    while previous > 1 {
        let level = rounds.len() + 1;
        let count = previous.div_ceil(2);
        let matches: Vec<Match> = (0..count)
            .map(|k| {
                let second = if 2 * k + 1 < previous {
                    Team::pending()
                } else {
                    Team::bye()
                };
                Match::new(match_id(sport, level, k), Team::pending(), second)
            })
            .collect();
        rounds.push(Round {
            name: naming.name_for(count, level),
            matches,
            level,
        });
        previous = count;
    }

    let mut tournament = TournamentData {
        sport: sport.to_string(),
        total_rounds: rounds.len(),
        total_teams: teams.len(),
        rounds,
    };
    advance_winners(&mut tournament);

    log::debug!(
        "Generated {} bracket: {} teams, {} rounds",
        sport,
        tournament.total_teams,
        tournament.total_rounds
    );
    tournament
}
