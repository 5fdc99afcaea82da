//! Round-of-16 seeding: the fixed pairing template and best-third assignment.

use crate::models::{BracketMatch, PoolId, Team};
use std::collections::BTreeMap;

/// Index of the third-place candidate within a pool.
const THIRD_PLACE_INDEX: usize = 2;

/// Best-third host matches in resolution order, each with its pool priority
/// list. The lists encode the rule that a seeded team never meets a third
/// from its own pool; both the host order (A, B, C, D) and each list are
/// tournament-rule constants and changing either changes outcomes.
const BEST_THIRD_HOSTS: [(PoolId, [PoolId; 3]); 4] = [
    (PoolId::A, [PoolId::C, PoolId::E, PoolId::F]),
    (PoolId::B, [PoolId::D, PoolId::E, PoolId::F]),
    (PoolId::C, [PoolId::A, PoolId::E, PoolId::F]),
    (PoolId::D, [PoolId::B, PoolId::E, PoolId::F]),
];

/// Pools whose third-place team qualifies: the four lowest rank values among
/// the ranked pools (fewer qualify when fewer are ranked). Equal ranks are
/// broken by pool letter: the map iterates A through F and the sort is stable.
pub fn qualified_third_pools(third_rankings: &BTreeMap<PoolId, u8>) -> Vec<PoolId> {
    let mut ranked: Vec<(PoolId, u8)> = third_rankings.iter().map(|(&p, &r)| (p, r)).collect();
    ranked.sort_by_key(|&(_, rank)| rank);
    ranked.into_iter().take(4).map(|(pool, _)| pool).collect()
}

/// Assign qualified third-place teams to their host matches with the fixed
/// greedy rule: hosts resolve in order A, B, C, D; each takes the first pool
/// from its priority list that qualified and was not consumed by an earlier
/// host. A host with no eligible pool left gets no opponent.
pub fn resolve_best_third_opponents(
    qualified: &[PoolId],
    pools: &BTreeMap<PoolId, Vec<Team>>,
) -> BTreeMap<PoolId, Option<Team>> {
    let mut used: Vec<PoolId> = Vec::new();
    let mut opponents = BTreeMap::new();
    for (host, priority) in BEST_THIRD_HOSTS {
        let pick = priority
            .into_iter()
            .find(|p| qualified.contains(p) && !used.contains(p));
        if let Some(pool) = pick {
            used.push(pool);
        }
        opponents.insert(host, pick.and_then(|p| third_place_team(pools, p)));
    }
    opponents
}

fn third_place_team(pools: &BTreeMap<PoolId, Vec<Team>>, pool: PoolId) -> Option<Team> {
    pools
        .get(&pool)
        .and_then(|teams| teams.get(THIRD_PLACE_INDEX))
        .cloned()
}

/// Derive the eight Round-of-16 matches from pool order and third rankings.
/// Pure and total: identical input yields identical output, missing teams
/// leave slots unfilled, and every winner starts unset.
pub fn derive_round_of_16(
    pools: &BTreeMap<PoolId, Vec<Team>>,
    third_rankings: &BTreeMap<PoolId, u8>,
) -> Vec<BracketMatch> {
    let qualified = qualified_third_pools(third_rankings);
    let mut best_third = resolve_best_third_opponents(&qualified, pools);

    let seeded = |pool: PoolId, position: usize| -> Option<Team> {
        pools.get(&pool).and_then(|teams| teams.get(position)).cloned()
    };
    let mut third = |host: PoolId| -> Option<Team> { best_third.remove(&host).flatten() };

    vec![
        BracketMatch::new("r16_1", "Match 1", seeded(PoolId::A, 0), third(PoolId::A)), // A1 vs C/E/F 3rd
        BracketMatch::new("r16_2", "Match 2", seeded(PoolId::B, 0), third(PoolId::B)), // B1 vs D/E/F 3rd
        BracketMatch::new("r16_3", "Match 3", seeded(PoolId::C, 1), seeded(PoolId::F, 1)), // C2 vs F2
        BracketMatch::new("r16_4", "Match 4", seeded(PoolId::E, 0), seeded(PoolId::D, 1)), // E1 vs D2
        BracketMatch::new("r16_5", "Match 5", seeded(PoolId::A, 1), seeded(PoolId::E, 1)), // A2 vs E2
        BracketMatch::new("r16_6", "Match 6", seeded(PoolId::F, 0), seeded(PoolId::B, 1)), // F1 vs B2
        BracketMatch::new("r16_7", "Match 7", seeded(PoolId::C, 0), third(PoolId::C)), // C1 vs A/E/F 3rd
        BracketMatch::new("r16_8", "Match 8", seeded(PoolId::D, 0), third(PoolId::D)), // D1 vs B/E/F 3rd
    ]
}
