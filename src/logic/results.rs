//! Recording results and moving winners forward through the bracket.

use crate::logic::score::Score;
use crate::models::{BracketError, MatchStatus, Slot, TournamentData};

/// How a match was decided.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Only the winner is known.
    Winner(Slot),
    /// Full score; the higher side wins.
    Score(Score),
}

impl Outcome {
    /// Winner given as a slot index (0 or 1).
    pub fn winner_index(i: usize) -> Result<Self, BracketError> {
        Slot::from_index(i)
            .map(Outcome::Winner)
            .ok_or(BracketError::InvalidSlot(i))
    }
}

/// Record the result of a match, then advance its winner.
pub fn record_result(
    tournament: &mut TournamentData,
    match_id: &str,
    outcome: Outcome,
) -> Result<(), BracketError> {
    let m = tournament
        .get_match_mut(match_id)
        .ok_or_else(|| BracketError::MatchNotFound(match_id.to_string()))?;
    if m.status == MatchStatus::Completed || m.winner.is_some() {
        return Err(BracketError::MatchAlreadyCompleted(match_id.to_string()));
    }
    if !m.is_playable() {
        return Err(BracketError::MatchNotReady(match_id.to_string()));
    }

    let winner = match &outcome {
        Outcome::Winner(slot) => *slot,
        Outcome::Score(score) => score.winner().ok_or(BracketError::TiedScore)?,
    };
    if let Outcome::Score(score) = &outcome {
        let (home, away) = score.totals();
        m.teams[0].score = Some(home);
        m.teams[1].score = Some(away);
    }
    m.teams[winner.index()].is_winner = Some(true);
    m.teams[winner.other().index()].is_winner = Some(false);
    m.winner = Some(m.teams[winner.index()].advancing());
    m.status = MatchStatus::Completed;

    log::info!(
        "Recorded result for {}: {} beat {}",
        match_id,
        m.team(winner).name,
        m.team(winner.other()).name
    );

    advance_winners(tournament);
    Ok(())
}

/// Mark a match live, upcoming, or postponed. Completion goes through [`record_result`].
/// A match can only go live once both of its teams are known.
pub fn set_match_status(
    tournament: &mut TournamentData,
    match_id: &str,
    status: MatchStatus,
) -> Result<(), BracketError> {
    let m = tournament
        .get_match_mut(match_id)
        .ok_or_else(|| BracketError::MatchNotFound(match_id.to_string()))?;
    if status == MatchStatus::Completed || m.status == MatchStatus::Completed {
        return Err(BracketError::InvalidStatusChange {
            from: m.status,
            to: status,
        });
    }
    if status == MatchStatus::Live && !m.is_playable() {
        return Err(BracketError::MatchNotReady(match_id.to_string()));
    }
    m.status = status;
    Ok(())
}

/// Copy every decided winner into its slot in the next round and resolve byes
/// that became decidable. Running it again changes nothing.
pub fn advance_winners(tournament: &mut TournamentData) {
    if let Some(first) = tournament.rounds.first_mut() {
        for m in &mut first.matches {
            m.resolve_bye();
        }
    }

    for r in 1..tournament.rounds.len() {
        let winners: Vec<Option<_>> = tournament.rounds[r - 1]
            .matches
            .iter()
            .map(|m| m.winner.clone())
            .collect();

        for (k, m) in tournament.rounds[r].matches.iter_mut().enumerate() {
            for (upstream, slot) in [(2 * k, Slot::First), (2 * k + 1, Slot::Second)] {
                let Some(Some(winner)) = winners.get(upstream) else {
                    continue;
                };
                if m.teams[slot.index()].is_pending() {
                    m.teams[slot.index()] = winner.advancing();
                }
            }
            m.resolve_bye();
        }
    }
}
