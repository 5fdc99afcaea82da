//! Seed dataset: the 24 teams of the 2027 Rugby World Cup in six pools.
//! The engine never fabricates teams; everything starts from this file.

use crate::models::{PoolId, Team};
use serde::Deserialize;
use std::collections::BTreeMap;

static TEAMS_CSV: &str = include_str!("../data/teams.csv");

/// One row of the embedded dataset. Row order within a pool is the seed
/// ordering (projected pool winner first).
#[derive(Debug, Deserialize)]
struct TeamRecord {
    pool: PoolId,
    id: String,
    name: String,
    flag: String,
    color: String,
}

/// Parse the embedded dataset into the six seed-ordered pools.
pub fn initial_pools() -> Result<BTreeMap<PoolId, Vec<Team>>, csv::Error> {
    let mut pools: BTreeMap<PoolId, Vec<Team>> = BTreeMap::new();
    let mut reader = csv::Reader::from_reader(TEAMS_CSV.as_bytes());
    for record in reader.deserialize() {
        let record: TeamRecord = record?;
        pools
            .entry(record.pool)
            .or_default()
            .push(Team::new(record.id, record.name, record.flag, record.color));
    }
    Ok(pools)
}
