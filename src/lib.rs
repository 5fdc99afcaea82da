//! Rugby World Cup bracket predictor: library with models and bracket logic.

pub mod data;
pub mod logic;
pub mod models;

pub use logic::{
    derive_round_of_16, next_final_and_third_place, next_quarter_finals, next_semi_finals,
    qualified_third_pools, resolve_best_third_opponents, round_resolved,
};
pub use models::{
    BracketMatch, MatchId, PoolId, Stage, Team, TeamId, Tournament, TournamentError,
    TournamentId, TournamentView,
};
