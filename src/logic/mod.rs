//! Bracket logic: Round-of-16 seeding and knockout progression.

mod progression;
mod seeding;

pub use progression::{
    empty_final, empty_quarter_finals, empty_semi_finals, empty_third_place,
    next_final_and_third_place, next_quarter_finals, next_semi_finals, round_resolved,
};
pub use seeding::{derive_round_of_16, qualified_third_pools, resolve_best_third_opponents};
