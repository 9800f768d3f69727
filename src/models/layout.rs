//! Node/edge graph handed to the bracket diagram widget.

use crate::models::game::{MatchId, MatchStatus, Slot};
use crate::models::team::Team;
use serde::{Deserialize, Serialize};

/// Node type understood by the diagram widget.
pub const MATCH_NODE_TYPE: &str = "matchNode";
/// Edge type understood by the diagram widget.
pub const BRACKET_EDGE_TYPE: &str = "bracketEdge";
/// Output handle on every match node.
pub const WINNER_HANDLE: &str = "winner";

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// What a match node renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub teams: [Team; 2],
    /// Name of the round the match belongs to.
    pub round: String,
    pub status: MatchStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: MatchId,
    #[serde(rename = "type")]
    pub node_type: String,
    pub position: Position,
    pub data: NodeData,
    pub draggable: bool,
}

/// Input handle of a match node: one per team slot.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum TargetHandle {
    #[serde(rename = "team-0")]
    Team0,
    #[serde(rename = "team-1")]
    Team1,
}

impl From<Slot> for TargetHandle {
    fn from(slot: Slot) -> Self {
        match slot {
            Slot::First => TargetHandle::Team0,
            Slot::Second => TargetHandle::Team1,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct EdgeData {
    /// 0 or 1: the target slot fed by the source match's winner.
    pub slot: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub source: MatchId,
    pub target: MatchId,
    pub source_handle: String,
    pub target_handle: TargetHandle,
    #[serde(rename = "type")]
    pub edge_type: String,
    pub data: EdgeData,
}

impl Edge {
    /// Winner of `source` feeds `slot` of `target`.
    pub fn winner_to(source: &str, target: &str, slot: Slot) -> Self {
        Self {
            id: format!("e-{}-{}", source, target),
            source: source.to_string(),
            target: target.to_string(),
            source_handle: WINNER_HANDLE.to_string(),
            target_handle: slot.into(),
            edge_type: BRACKET_EDGE_TYPE.to_string(),
            data: EdgeData { slot: slot.index() },
        }
    }
}

/// Positioned bracket ready for rendering.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BracketLayout {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl BracketLayout {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
