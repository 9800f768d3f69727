//! Match, MatchStatus, and the slot a winner feeds into.

use crate::models::team::Team;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Deterministic match id: `{sport}-r{round}-{index}` (round and index 1-based).
pub type MatchId = String;

/// Build the id of the `index`-th (0-based) match of round `round` (1-based).
pub fn match_id(sport: &str, round: usize, index: usize) -> MatchId {
    format!("{}-r{}-{}", sport, round, index + 1)
}

/// Progress of a match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Upcoming,
    Live,
    Completed,
    Postponed,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Upcoming => "upcoming",
            MatchStatus::Live => "live",
            MatchStatus::Completed => "completed",
            MatchStatus::Postponed => "postponed",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts both our own labels and the backend's game statuses
/// (`AGENDADO`, `EM_ANDAMENTO`, `PAUSADO`, `FINALIZADO`, `CANCELADO`).
impl FromStr for MatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upcoming" | "agendado" => Ok(MatchStatus::Upcoming),
            "live" | "em_andamento" | "pausado" => Ok(MatchStatus::Live),
            "completed" | "finalizado" => Ok(MatchStatus::Completed),
            "postponed" | "cancelado" => Ok(MatchStatus::Postponed),
            other => Err(format!("unknown match status '{}'", other)),
        }
    }
}

/// Which of the two team slots of a match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Slot::First),
            1 => Some(Slot::Second),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Slot::First => Slot::Second,
            Slot::Second => Slot::First,
        }
    }
}

/// A single elimination match between two slots.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub teams: [Team; 2],
    #[serde(default)]
    pub status: MatchStatus,
    /// None until resolved (by a result or a bye).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Team>,
}

impl Match {
    pub fn new(id: MatchId, first: Team, second: Team) -> Self {
        Self {
            id,
            teams: [first, second],
            status: MatchStatus::Upcoming,
            winner: None,
        }
    }

    pub fn team(&self, slot: Slot) -> &Team {
        &self.teams[slot.index()]
    }

    /// Both slots hold real teams, so a result can be recorded.
    pub fn is_playable(&self) -> bool {
        self.teams.iter().all(|t| !t.is_placeholder())
    }

    /// Resolve a match where one slot is a real team and the other a BYE:
    /// the real team advances without playing. Returns whether anything changed.
    pub fn resolve_bye(&mut self) -> bool {
        if self.winner.is_some() {
            return false;
        }
        let advancing = match (&self.teams[0], &self.teams[1]) {
            (a, b) if !a.is_placeholder() && b.is_bye() => Slot::First,
            (a, b) if a.is_bye() && !b.is_placeholder() => Slot::Second,
            _ => return false,
        };
        self.teams[advancing.index()].is_winner = Some(true);
        self.winner = Some(self.teams[advancing.index()].advancing());
        self.status = MatchStatus::Completed;
        true
    }
}
