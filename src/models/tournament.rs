//! Tournament state and the controller operations that mutate it.

use crate::logic::{
    derive_round_of_16, empty_final, empty_quarter_finals, empty_semi_finals, empty_third_place,
    next_final_and_third_place, next_quarter_finals, next_semi_finals, round_resolved,
};
use crate::models::game::{BracketMatch, MatchId, Stage};
use crate::models::team::{PoolId, Team, TeamId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Errors that can occur during tournament operations. A rejected operation
/// never changes state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Reorder index outside the pool.
    IndexOutOfRange { index: usize },
    /// Third-place rank outside 1..=6.
    InvalidRank(u8),
    /// No match with this id in the given stage.
    MatchNotFound(MatchId),
    /// The match still has an unfilled slot; no winner can be recorded.
    MatchNotReady(MatchId),
    /// The given team is in neither slot of the match.
    NotAContestant { match_id: MatchId, team_id: TeamId },
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::IndexOutOfRange { index } => {
                write!(f, "Position {} is outside the pool", index)
            }
            TournamentError::InvalidRank(rank) => {
                write!(f, "Third-place rank must be between 1 and 6 (got {})", rank)
            }
            TournamentError::MatchNotFound(id) => write!(f, "No match {} in this round", id),
            TournamentError::MatchNotReady(id) => {
                write!(f, "Match {} does not have both teams yet", id)
            }
            TournamentError::NotAContestant { match_id, team_id } => {
                write!(f, "Team {} is not playing in match {}", team_id, match_id)
            }
        }
    }
}

/// Unique identifier for a tournament prediction session.
pub type TournamentId = Uuid;

/// Full tournament state: pools, third-place rankings, and the knockout tree.
///
/// All mutation goes through the operations below. Derived rounds are rebuilt
/// synchronously whenever their inputs change: a pool or ranking edit
/// re-derives the Round of 16 and collapses everything downstream, a winner
/// change rebuilds only the rounds after the mutated stage.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    pub created_at: DateTime<Utc>,
    /// Ordered pools; index 0 is the pool winner, index 2 the third-place
    /// candidate.
    pub pools: BTreeMap<PoolId, Vec<Team>>,
    /// User preference rank (1..=6) per pool for best-third qualification.
    /// Unranked pools are absent. Duplicates are tolerated; the seeding
    /// engine breaks ties by pool letter.
    pub third_rankings: BTreeMap<PoolId, u8>,
    pub round_of_16: Vec<BracketMatch>,
    pub quarter_finals: Vec<BracketMatch>,
    pub semi_finals: Vec<BracketMatch>,
    #[serde(rename = "final")]
    pub final_match: BracketMatch,
    pub third_place: BracketMatch,
    /// Winner of the final; `None` while the final is unresolved.
    pub champion: Option<Team>,
    /// Pristine copy of the seed ordering, restored by `reset_pools`.
    #[serde(skip)]
    seed_pools: BTreeMap<PoolId, Vec<Team>>,
}

impl Tournament {
    /// Create a tournament from the provided pools (6 pools of 4 teams,
    /// winner first). The Round of 16 is derived immediately; later rounds
    /// start as empty templates.
    pub fn new(pools: BTreeMap<PoolId, Vec<Team>>) -> Self {
        let mut tournament = Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            seed_pools: pools.clone(),
            pools,
            third_rankings: BTreeMap::new(),
            round_of_16: Vec::new(),
            quarter_finals: empty_quarter_finals(),
            semi_finals: empty_semi_finals(),
            final_match: empty_final(),
            third_place: empty_third_place(),
            champion: None,
        };
        tournament.reseed();
        tournament
    }

    /// Move the team at `source` to `target` within one pool (positional
    /// remove-then-insert, so a 0 -> 3 move shifts indices 1..=3 up by one).
    /// Re-derives the bracket unless the move is a no-op.
    pub fn reorder_team(
        &mut self,
        pool: PoolId,
        source: usize,
        target: usize,
    ) -> Result<(), TournamentError> {
        let teams = match self.pools.get_mut(&pool) {
            Some(teams) => teams,
            None => return Ok(()),
        };
        if source >= teams.len() {
            return Err(TournamentError::IndexOutOfRange { index: source });
        }
        if target >= teams.len() {
            return Err(TournamentError::IndexOutOfRange { index: target });
        }
        if source == target {
            return Ok(());
        }
        let team = teams.remove(source);
        teams.insert(target, team);
        self.reseed();
        Ok(())
    }

    /// Set or clear a pool's third-place preference rank (1..=6). Storing the
    /// value a pool already has is a no-op. Uniqueness across pools is not
    /// enforced here.
    pub fn set_third_rank(
        &mut self,
        pool: PoolId,
        rank: Option<u8>,
    ) -> Result<(), TournamentError> {
        if let Some(rank) = rank {
            if !(1..=6).contains(&rank) {
                return Err(TournamentError::InvalidRank(rank));
            }
        }
        if self.third_rankings.get(&pool).copied() == rank {
            return Ok(());
        }
        match rank {
            Some(rank) => {
                self.third_rankings.insert(pool, rank);
            }
            None => {
                self.third_rankings.remove(&pool);
            }
        }
        self.reseed();
        Ok(())
    }

    /// Record `team_id` as the winner of a match. The match must have both
    /// slots filled and the team must occupy one of them. Every round strictly
    /// downstream of `stage` is rebuilt from the recorded winners, so
    /// overwriting an earlier pick wipes later progress.
    pub fn select_winner(
        &mut self,
        stage: Stage,
        match_id: &str,
        team_id: &str,
    ) -> Result<(), TournamentError> {
        let found = self
            .round_mut(stage)
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or_else(|| TournamentError::MatchNotFound(match_id.to_string()))?;
        if !found.is_ready() {
            return Err(TournamentError::MatchNotReady(match_id.to_string()));
        }
        let winner = found
            .contestant(team_id)
            .cloned()
            .ok_or_else(|| TournamentError::NotAContestant {
                match_id: match_id.to_string(),
                team_id: team_id.to_string(),
            })?;
        found.winner = Some(winner);
        self.rebuild_downstream(stage);
        Ok(())
    }

    /// Restore all pools to the seed ordering. Third rankings are kept; the
    /// bracket is re-derived.
    pub fn reset_pools(&mut self) {
        self.pools = self.seed_pools.clone();
        self.reseed();
    }

    /// Clear every recorded winner. Round-of-16 pairings stand (they derive
    /// from the unchanged pools); later rounds collapse to empty templates.
    pub fn reset_bracket(&mut self) {
        for m in &mut self.round_of_16 {
            m.winner = None;
        }
        self.rebuild_downstream(Stage::RoundOf16);
    }

    pub fn is_round_of_16_complete(&self) -> bool {
        round_resolved(&self.round_of_16)
    }

    pub fn is_quarter_finals_complete(&self) -> bool {
        round_resolved(&self.quarter_finals)
    }

    pub fn is_semi_finals_complete(&self) -> bool {
        round_resolved(&self.semi_finals)
    }

    /// Read model handed to the presentation layer: full state plus the
    /// completion flags that gate winner selection in the UI.
    pub fn view(&self) -> TournamentView<'_> {
        TournamentView {
            tournament: self,
            is_round_of_16_complete: self.is_round_of_16_complete(),
            is_quarter_finals_complete: self.is_quarter_finals_complete(),
            is_semi_finals_complete: self.is_semi_finals_complete(),
        }
    }

    fn round_mut(&mut self, stage: Stage) -> &mut [BracketMatch] {
        match stage {
            Stage::RoundOf16 => &mut self.round_of_16,
            Stage::QuarterFinals => &mut self.quarter_finals,
            Stage::SemiFinals => &mut self.semi_finals,
            Stage::Final => std::slice::from_mut(&mut self.final_match),
            Stage::ThirdPlace => std::slice::from_mut(&mut self.third_place),
        }
    }

    /// Re-derive the Round of 16 from pools and rankings and collapse the
    /// whole downstream tree. Invalidation is all-or-nothing: there is no
    /// partial rebuild after a pool or ranking change.
    fn reseed(&mut self) {
        self.round_of_16 = derive_round_of_16(&self.pools, &self.third_rankings);
        self.rebuild_downstream(Stage::RoundOf16);
    }

    /// Rebuild every round strictly after `stage` from recorded winners; an
    /// unresolved prior round yields the empty template. Champion tracks the
    /// final's winner.
    fn rebuild_downstream(&mut self, stage: Stage) {
        if stage < Stage::QuarterFinals {
            self.quarter_finals = next_quarter_finals(&self.round_of_16);
        }
        if stage < Stage::SemiFinals {
            self.semi_finals = next_semi_finals(&self.quarter_finals);
        }
        if stage < Stage::Final {
            let (final_match, third_place) = next_final_and_third_place(&self.semi_finals);
            self.final_match = final_match;
            self.third_place = third_place;
        }
        self.champion = self.final_match.winner.clone();
    }
}

/// Serializable read model: the tournament plus derived completion flags.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentView<'a> {
    #[serde(flatten)]
    pub tournament: &'a Tournament,
    pub is_round_of_16_complete: bool,
    pub is_quarter_finals_complete: bool,
    pub is_semi_finals_complete: bool,
}
