//! Data structures for the bracket predictor: teams, pools, matches, tournament state.

mod game;
mod team;
mod tournament;

pub use game::{BracketMatch, MatchId, Stage};
pub use team::{PoolId, Team, TeamId};
pub use tournament::{Tournament, TournamentError, TournamentId, TournamentView};
