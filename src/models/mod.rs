//! Data structures for the bracket: teams, matches, rounds, and the layout graph.

mod game;
mod layout;
mod team;
mod tournament;

pub use game::{match_id, Match, MatchId, MatchStatus, Slot};
pub use layout::{
    BracketLayout, Edge, EdgeData, Node, NodeData, Position, TargetHandle, BRACKET_EDGE_TYPE,
    MATCH_NODE_TYPE, WINNER_HANDLE,
};
pub use team::{Team, TeamId, TeamKind, BYE_NAME, PENDING_NAME};
pub use tournament::{BracketError, Round, TournamentData};
