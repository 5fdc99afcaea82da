//! Teams and pool identifiers.

use serde::{Deserialize, Serialize};

/// Unique identifier for a team (short lowercase code, e.g. "nz").
pub type TeamId = String;

/// One of the six pools. The alphabetical `Ord` doubles as the tie-break when
/// two pools carry the same third-place rank.
#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
pub enum PoolId {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl PoolId {
    /// All pools, in letter order.
    pub const ALL: [PoolId; 6] = [
        PoolId::A,
        PoolId::B,
        PoolId::C,
        PoolId::D,
        PoolId::E,
        PoolId::F,
    ];
}

impl std::fmt::Display for PoolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            PoolId::A => "A",
            PoolId::B => "B",
            PoolId::C => "C",
            PoolId::D => "D",
            PoolId::E => "E",
            PoolId::F => "F",
        };
        write!(f, "{}", letter)
    }
}

/// A team in the tournament. Identity is `id`; `flag` and `color` are display
/// tokens passed through to the client untouched.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub flag: String,
    pub color: String,
}

impl Team {
    pub fn new(
        id: impl Into<TeamId>,
        name: impl Into<String>,
        flag: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            flag: flag.into(),
            color: color.into(),
        }
    }
}
