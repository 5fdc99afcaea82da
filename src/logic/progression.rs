//! Knockout progression: building each round from the previous round's winners.

use crate::models::BracketMatch;

/// True when the round is non-empty and every match has a recorded winner.
pub fn round_resolved(round: &[BracketMatch]) -> bool {
    !round.is_empty() && round.iter().all(BracketMatch::is_resolved)
}

pub fn empty_quarter_finals() -> Vec<BracketMatch> {
    vec![
        BracketMatch::empty("qf1", "QF1"),
        BracketMatch::empty("qf2", "QF2"),
        BracketMatch::empty("qf3", "QF3"),
        BracketMatch::empty("qf4", "QF4"),
    ]
}

pub fn empty_semi_finals() -> Vec<BracketMatch> {
    vec![
        BracketMatch::empty("sf1", "SF1"),
        BracketMatch::empty("sf2", "SF2"),
    ]
}

pub fn empty_final() -> BracketMatch {
    BracketMatch::empty("final", "Final")
}

pub fn empty_third_place() -> BracketMatch {
    BracketMatch::empty("third", "3rd Place")
}

/// Quarter-finals from a resolved Round of 16: winners paired positionally
/// (QF1 = M1 winner vs M2 winner, and so on down the list). While any
/// Round-of-16 match is unresolved this yields the empty template.
pub fn next_quarter_finals(round_of_16: &[BracketMatch]) -> Vec<BracketMatch> {
    if round_of_16.len() != 8 || !round_resolved(round_of_16) {
        return empty_quarter_finals();
    }
    let winner = |i: usize| round_of_16[i].winner.clone();
    vec![
        BracketMatch::new("qf1", "QF1", winner(0), winner(1)),
        BracketMatch::new("qf2", "QF2", winner(2), winner(3)),
        BracketMatch::new("qf3", "QF3", winner(4), winner(5)),
        BracketMatch::new("qf4", "QF4", winner(6), winner(7)),
    ]
}

/// Semi-finals from resolved quarter-finals: SF1 takes the QF1 and QF2
/// winners, SF2 the QF3 and QF4 winners.
pub fn next_semi_finals(quarter_finals: &[BracketMatch]) -> Vec<BracketMatch> {
    if quarter_finals.len() != 4 || !round_resolved(quarter_finals) {
        return empty_semi_finals();
    }
    let winner = |i: usize| quarter_finals[i].winner.clone();
    vec![
        BracketMatch::new("sf1", "SF1", winner(0), winner(1)),
        BracketMatch::new("sf2", "SF2", winner(2), winner(3)),
    ]
}

/// Final and third-place matches from resolved semi-finals: the winners meet
/// in the final, the losing slot of each semi-final goes to the third-place
/// match.
pub fn next_final_and_third_place(semi_finals: &[BracketMatch]) -> (BracketMatch, BracketMatch) {
    if semi_finals.len() != 2 || !round_resolved(semi_finals) {
        return (empty_final(), empty_third_place());
    }
    let final_match = BracketMatch::new(
        "final",
        "Final",
        semi_finals[0].winner.clone(),
        semi_finals[1].winner.clone(),
    );
    let third_place = BracketMatch::new(
        "third",
        "3rd Place",
        semi_finals[0].loser().cloned(),
        semi_finals[1].loser().cloned(),
    );
    (final_match, third_place)
}
