//! Bracket logic: generation, naming, layout, and results.

mod bracket;
mod layered;
mod layout;
mod naming;
mod results;
mod score;

pub use bracket::{generate_bracket, generate_bracket_with_rng};
pub use layered::{Direction, LayeredGraph, LayoutOptions};
pub use layout::generate_layout;
pub use naming::RoundNaming;
pub use results::{advance_winners, record_result, set_match_status, Outcome};
pub use score::{parse_score, Score};
