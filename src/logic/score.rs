//! Score strings as typed by the organizers: "2 - 1", "2x1", "2×1", "25-20,22-25,15-10".

use crate::models::{BracketError, Slot};
use serde::{Deserialize, Serialize};

/// Separators accepted between the two sides of a score.
const SEPARATORS: [char; 5] = ['-', 'x', 'X', '×', ':'];

/// A parsed match score, first slot ("home") first.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Score {
    Points { home: u32, away: u32 },
    /// Per-set points (volleyball, table tennis).
    Sets(Vec<(u32, u32)>),
}

impl Score {
    /// Value stored on each team: points, or sets won.
    pub fn totals(&self) -> (u32, u32) {
        match self {
            Score::Points { home, away } => (*home, *away),
            Score::Sets(sets) => sets.iter().fold((0, 0), |(h, a), (sh, sa)| {
                if sh > sa {
                    (h + 1, a)
                } else if sa > sh {
                    (h, a + 1)
                } else {
                    (h, a)
                }
            }),
        }
    }

    /// Winning slot, or None on a tie.
    pub fn winner(&self) -> Option<Slot> {
        let (home, away) = self.totals();
        match home.cmp(&away) {
            std::cmp::Ordering::Greater => Some(Slot::First),
            std::cmp::Ordering::Less => Some(Slot::Second),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Parse a score string. Commas separate sets.
pub fn parse_score(input: &str) -> Result<Score, BracketError> {
    let invalid = || BracketError::InvalidScore(input.to_string());
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }
    if trimmed.contains(',') {
        let sets = trimmed
            .split(',')
            .map(|set| parse_pair(set).ok_or_else(invalid))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(Score::Sets(sets));
    }
    let (home, away) = parse_pair(trimmed).ok_or_else(invalid)?;
    Ok(Score::Points { home, away })
}

fn parse_pair(s: &str) -> Option<(u32, u32)> {
    let mut parts = s.trim().split(|c| SEPARATORS.contains(&c));
    let home = parts.next()?.trim().parse().ok()?;
    let away = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((home, away))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_separators() {
        for s in ["2 - 1", "2-1", "2x1", "2 X 1", "2×1", "2:1"] {
            assert_eq!(parse_score(s), Ok(Score::Points { home: 2, away: 1 }), "{s}");
        }
    }

    #[test]
    fn volleyball_sets_count_sets_won() {
        let score = parse_score("25-20,22-25,15-10").unwrap();
        assert_eq!(score.totals(), (2, 1));
        assert_eq!(score.winner(), Some(Slot::First));
    }

    #[test]
    fn ties_have_no_winner() {
        assert_eq!(parse_score("1 x 1").unwrap().winner(), None);
    }

    #[test]
    fn rejects_garbage() {
        for s in ["", "abc", "1-", "-1", "1-2-3", "25-20,,15-10"] {
            assert!(matches!(parse_score(s), Err(BracketError::InvalidScore(_))), "{s}");
        }
    }
}
