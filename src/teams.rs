//! Team lists exported from the admin panel as CSV.
//!
//! Expected header: `name` (or `nome`), with optional `id`, `icon`, `color` columns.

use crate::models::{BracketError, Team, TeamId};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct TeamRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(alias = "nome")]
    name: String,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    color: Option<String>,
}

impl TeamRecord {
    fn into_team(self) -> Team {
        let mut team = Team::new(self.name.trim());
        team.id = self.id.filter(|s| !s.trim().is_empty()).map(|s| TeamId::parse(&s));
        team.icon = self.icon.filter(|s| !s.trim().is_empty());
        team.color = self.color.filter(|s| !s.trim().is_empty());
        team
    }
}

/// Read teams from CSV. Rows with a blank name are skipped.
pub fn teams_from_csv<R: Read>(reader: R) -> Result<Vec<Team>, BracketError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut teams = Vec::new();
    for (row, record) in rdr.deserialize::<TeamRecord>().enumerate() {
        let record = record.map_err(|e| BracketError::InvalidCsv(e.to_string()))?;
        if record.name.trim().is_empty() {
            log::warn!("Skipping team CSV row {}: empty name", row + 1);
            continue;
        }
        teams.push(record.into_team());
    }
    Ok(teams)
}
