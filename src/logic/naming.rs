//! Round names derived from how many matches a round holds.

use crate::models::BracketError;
use serde::{Deserialize, Serialize};

/// Ordered `(max matches, name)` table. The first entry whose bound covers the
/// match count names the round; larger rounds fall back to `Rodada {N}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundNaming {
    rules: Vec<(usize, String)>,
}

impl RoundNaming {
    /// Build a custom table. Bounds must be non-zero and strictly increasing.
    pub fn new<S: Into<String>>(
        rules: impl IntoIterator<Item = (usize, S)>,
    ) -> Result<Self, BracketError> {
        let rules: Vec<(usize, String)> = rules.into_iter().map(|(n, s)| (n, s.into())).collect();
        let mut previous = 0;
        for (bound, name) in &rules {
            if *bound <= previous {
                return Err(BracketError::InvalidNaming(format!(
                    "bound {} for '{}' must be greater than {}",
                    bound, name, previous
                )));
            }
            if name.trim().is_empty() {
                return Err(BracketError::InvalidNaming(format!(
                    "empty name for bound {}",
                    bound
                )));
            }
            previous = *bound;
        }
        Ok(Self { rules })
    }

    /// Final, Semifinal, Quartas de Final; anything larger is `Rodada {N}`.
    pub fn simple() -> Self {
        Self {
            rules: vec![
                (1, "Final".to_string()),
                (2, "Semifinal".to_string()),
                (4, "Quartas de Final".to_string()),
            ],
        }
    }

    /// [`RoundNaming::simple`] plus "Oitavas de Final" for rounds of up to 8 matches.
    pub fn extended() -> Self {
        let mut naming = Self::simple();
        naming.rules.push((8, "Oitavas de Final".to_string()));
        naming
    }

    /// Name of round `level` (1-based) holding `matches` matches.
    pub fn name_for(&self, matches: usize, level: usize) -> String {
        self.rules
            .iter()
            .find(|(bound, _)| matches <= *bound)
            .map(|(_, name)| name.clone())
            .unwrap_or_else(|| format!("Rodada {}", level))
    }
}

impl Default for RoundNaming {
    fn default() -> Self {
        Self::extended()
    }
}
