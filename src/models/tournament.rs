//! Round, TournamentData, and the engine's error type.

use crate::models::game::{Match, MatchStatus};
use serde::{Deserialize, Serialize};

/// Errors that can occur when operating on a generated bracket.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BracketError {
    /// No match with this id in the tournament.
    MatchNotFound(String),
    /// One of the slots is still BYE or awaiting an earlier result.
    MatchNotReady(String),
    /// A result was already recorded for this match.
    MatchAlreadyCompleted(String),
    /// Slot index other than 0 or 1.
    InvalidSlot(usize),
    /// Elimination matches cannot end tied.
    TiedScore,
    /// Score text could not be parsed.
    InvalidScore(String),
    /// Status transition not allowed (e.g. reopening a completed match).
    InvalidStatusChange { from: MatchStatus, to: MatchStatus },
    /// Team list CSV could not be read.
    InvalidCsv(String),
    /// Round naming table is malformed.
    InvalidNaming(String),
}

impl std::fmt::Display for BracketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BracketError::MatchNotFound(id) => write!(f, "Match {} not found", id),
            BracketError::MatchNotReady(id) => {
                write!(f, "Match {} does not have two teams yet", id)
            }
            BracketError::MatchAlreadyCompleted(id) => {
                write!(f, "Match {} already has a result", id)
            }
            BracketError::InvalidSlot(i) => write!(f, "Invalid team slot {} (must be 0 or 1)", i),
            BracketError::TiedScore => write!(f, "Elimination matches cannot end in a tie"),
            BracketError::InvalidScore(s) => write!(f, "Could not read score '{}'", s),
            BracketError::InvalidStatusChange { from, to } => {
                write!(f, "Cannot change match status from {} to {}", from, to)
            }
            BracketError::InvalidCsv(msg) => write!(f, "Invalid team CSV: {}", msg),
            BracketError::InvalidNaming(msg) => write!(f, "Invalid round naming: {}", msg),
        }
    }
}

impl std::error::Error for BracketError {}

/// One column of the bracket.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// Derived from the number of matches (e.g. "Final", "Semifinal").
    pub name: String,
    pub matches: Vec<Match>,
    /// 1-based round number.
    #[serde(default)]
    pub level: usize,
}

/// A whole single-elimination bracket for one sport.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentData {
    pub sport: String,
    /// Round 1 first. Empty when fewer than two teams were given.
    pub rounds: Vec<Round>,
    pub total_teams: usize,
    pub total_rounds: usize,
}

impl TournamentData {
    /// A bracket with no rounds ("not enough teams").
    pub fn empty(sport: impl Into<String>, total_teams: usize) -> Self {
        Self {
            sport: sport.into(),
            rounds: Vec::new(),
            total_teams,
            total_rounds: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn total_matches(&self) -> usize {
        self.rounds.iter().map(|r| r.matches.len()).sum()
    }

    /// (round index, match index) of the match with this id.
    pub fn position_of(&self, match_id: &str) -> Option<(usize, usize)> {
        self.rounds.iter().enumerate().find_map(|(r, round)| {
            round
                .matches
                .iter()
                .position(|m| m.id == match_id)
                .map(|i| (r, i))
        })
    }

    pub fn get_match(&self, match_id: &str) -> Option<&Match> {
        self.position_of(match_id)
            .map(|(r, i)| &self.rounds[r].matches[i])
    }

    pub fn get_match_mut(&mut self, match_id: &str) -> Option<&mut Match> {
        let (r, i) = self.position_of(match_id)?;
        Some(&mut self.rounds[r].matches[i])
    }

    /// Winner of the Final, once decided.
    pub fn champion(&self) -> Option<&crate::models::Team> {
        self.rounds
            .last()
            .and_then(|r| r.matches.first())
            .and_then(|m| m.winner.as_ref())
    }
}
