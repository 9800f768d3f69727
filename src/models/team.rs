//! Team and its placeholder variants (BYE, awaiting).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display name of the synthetic opponent given to a team that advances without playing.
pub const BYE_NAME: &str = "BYE";

/// Display name of a slot whose team depends on an unresolved earlier match.
pub const PENDING_NAME: &str = "Aguardando...";

/// Identifier coming from the backend API: either numeric or textual.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TeamId {
    Number(i64),
    Text(String),
}

impl TeamId {
    /// Numeric ids stay numeric; anything else is kept as text.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(n) => TeamId::Number(n),
            Err(_) => TeamId::Text(raw.trim().to_string()),
        }
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamId::Number(n) => write!(f, "{}", n),
            TeamId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// What a team slot actually holds.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamKind {
    /// A real participant.
    #[default]
    Team,
    /// No opponent; the other slot advances.
    Bye,
    /// Not known yet ("Aguardando...").
    Pending,
}

/// A team in a bracket slot.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TeamId>,
    /// The backend API returns `nome`; the frontend uses `name`.
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    /// Only set once the outcome of the team's match is known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_winner: Option<bool>,
    #[serde(default)]
    pub kind: TeamKind,
}

impl Team {
    /// Create a real team with the given name. Other fields start empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: TeamId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// The synthetic "BYE" opponent.
    pub fn bye() -> Self {
        Self {
            name: BYE_NAME.to_string(),
            kind: TeamKind::Bye,
            ..Self::default()
        }
    }

    /// A slot waiting on an earlier match.
    pub fn pending() -> Self {
        Self {
            name: PENDING_NAME.to_string(),
            kind: TeamKind::Pending,
            ..Self::default()
        }
    }

    pub fn is_bye(&self) -> bool {
        self.kind == TeamKind::Bye
    }

    pub fn is_pending(&self) -> bool {
        self.kind == TeamKind::Pending
    }

    /// True for BYE and pending slots.
    pub fn is_placeholder(&self) -> bool {
        self.kind != TeamKind::Team
    }

    /// Copy of this team as it enters a new match: identity and decoration only,
    /// no score or result from the previous match.
    pub fn advancing(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            icon: self.icon.clone(),
            color: self.color.clone(),
            score: None,
            is_winner: None,
            kind: self.kind,
        }
    }
}
