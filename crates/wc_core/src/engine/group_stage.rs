//! Group round-robin simulation and standings.
//!
//! Callers may supply already-known results (user-entered or from an earlier
//! run); the simulator fills in whatever pairings remain and recomputes the
//! table from scratch. Nothing owned by the caller is mutated.

use std::collections::HashMap;

use crate::engine::resolver;
use crate::engine::rng::SimRng;
use crate::models::{MatchOutcome, Standing, Team};

/// All round-robin pairings for a group, canonical order.
fn round_robin_pairs(count: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..count {
        for j in (i + 1)..count {
            pairs.push((i, j));
        }
    }
    pairs
}

/// Merge recorded outcomes with simulated ones for the remaining pairings,
/// then compute the table.
///
/// Later entries in `known` replace earlier ones for the same unordered
/// pairing; outcomes naming teams outside the group are ignored.
pub fn simulate_group(teams: &[Team], known: &[MatchOutcome], rng: &mut SimRng) -> Vec<Standing> {
    let mut by_pair: HashMap<(String, String), MatchOutcome> = HashMap::new();
    for outcome in known {
        by_pair.insert(outcome.pair_key(), outcome.clone());
    }

    let mut outcomes: Vec<MatchOutcome> = Vec::new();
    for (i, j) in round_robin_pairs(teams.len()) {
        let (a, b) = (&teams[i], &teams[j]);
        let probe = MatchOutcome::new(&a.id, &b.id, 0, 0);
        match by_pair.get(&probe.pair_key()) {
            Some(existing) => outcomes.push(existing.clone()),
            None => {
                let score = resolver::resolve_match(a, b, rng);
                outcomes.push(MatchOutcome::new(&a.id, &b.id, score.home, score.away));
            }
        }
    }

    compute_standings(teams, &outcomes)
}

/// Recompute the table from scratch.
///
/// Orders by points, then goal difference, then goals-for, all descending.
/// No further tie-break is defined; ties beyond goals-for keep input order,
/// which callers must treat as arbitrary for identical stats.
pub fn compute_standings(teams: &[Team], outcomes: &[MatchOutcome]) -> Vec<Standing> {
    let mut table: Vec<Standing> = teams.iter().map(|t| Standing::blank(&t.id)).collect();

    for outcome in outcomes {
        let pos1 = table.iter().position(|s| s.team == outcome.team1);
        let pos2 = table.iter().position(|s| s.team == outcome.team2);
        let (Some(pos1), Some(pos2)) = (pos1, pos2) else {
            continue;
        };
        table[pos1].record(outcome.score1, outcome.score2);
        table[pos2].record(outcome.score2, outcome.score1);
    }

    table.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then(b.goals_for.cmp(&a.goals_for))
    });
    table
}
