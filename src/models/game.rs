//! Knockout matches and stage identifiers.

use crate::models::team::Team;
use serde::{Deserialize, Serialize};

/// Unique identifier for a bracket slot (e.g. "r16_3", "qf1", "final").
pub type MatchId = String;

/// Knockout rounds in play order. The derive order matters: `Ord` decides
/// which rounds lie downstream of a mutated one, and the third-place match
/// comes last because nothing is rebuilt from it.
#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    RoundOf16,
    QuarterFinals,
    SemiFinals,
    Final,
    ThirdPlace,
}

/// A single knockout match. Slots are `None` until seeding or the previous
/// round fills them; `winner`, when set, equals one of the slots by id.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketMatch {
    pub id: MatchId,
    pub label: String,
    pub team1: Option<Team>,
    pub team2: Option<Team>,
    /// None until a winner is recorded.
    pub winner: Option<Team>,
}

impl BracketMatch {
    pub fn new(
        id: impl Into<MatchId>,
        label: impl Into<String>,
        team1: Option<Team>,
        team2: Option<Team>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            team1,
            team2,
            winner: None,
        }
    }

    /// A match with both slots unfilled and no winner.
    pub fn empty(id: impl Into<MatchId>, label: impl Into<String>) -> Self {
        Self::new(id, label, None, None)
    }

    /// Both slots are filled, so a winner can be recorded.
    pub fn is_ready(&self) -> bool {
        self.team1.is_some() && self.team2.is_some()
    }

    /// A winner has been recorded.
    pub fn is_resolved(&self) -> bool {
        self.winner.is_some()
    }

    /// The slot team with the given id, if either slot holds it.
    pub fn contestant(&self, team_id: &str) -> Option<&Team> {
        self.team1
            .as_ref()
            .filter(|t| t.id == team_id)
            .or_else(|| self.team2.as_ref().filter(|t| t.id == team_id))
    }

    /// The slot that did not win. None until both slots and the winner are set.
    pub fn loser(&self) -> Option<&Team> {
        let (team1, team2) = match (&self.team1, &self.team2) {
            (Some(t1), Some(t2)) => (t1, t2),
            _ => return None,
        };
        match &self.winner {
            Some(w) if w.id == team1.id => Some(team2),
            Some(w) if w.id == team2.id => Some(team1),
            _ => None,
        }
    }
}
