//! Interclasse bracket engine: library with models, bracket logic, and the web API.

pub mod api;
pub mod config;
pub mod logic;
pub mod models;
pub mod teams;

pub use config::{AppConfig, ConfigError};
pub use logic::{
    advance_winners, generate_bracket, generate_bracket_with_rng, generate_layout, parse_score,
    record_result, set_match_status, Direction, LayeredGraph, LayoutOptions, Outcome, RoundNaming,
    Score,
};
pub use models::{
    BracketError, BracketLayout, Edge, Match, MatchId, MatchStatus, Node, Position, Round, Slot,
    TargetHandle, Team, TeamId, TeamKind, TournamentData,
};
pub use teams::teams_from_csv;
