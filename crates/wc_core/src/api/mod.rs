//! Public tournament operations.
//!
//! Typed entry points over the embedded roster, plus a JSON string API for
//! presentation layers that do not want to link against the model types.

pub mod json_api;

pub use json_api::{
    generate_draw_json, resolve_match_json, simulate_group_json, simulate_tournament_json,
};

use serde::Serialize;

use crate::data::embedded;
use crate::engine::draw::DrawEngine;
use crate::engine::group_stage;
use crate::engine::knockout;
use crate::engine::rng::{self, SimRng};
use crate::error::{DrawError, TournamentError};
use crate::models::{GroupLabel, GroupResult, KnockoutMatch, Standing};

/// Draw the embedded roster into 12 groups, entropy-seeded.
pub fn generate_draw() -> Result<Vec<GroupResult>, DrawError> {
    DrawEngine::new(embedded::roster()).generate(&mut rng::unseeded())
}

/// Reproducible variant of [`generate_draw`].
pub fn generate_draw_seeded(seed: u64) -> Result<Vec<GroupResult>, DrawError> {
    DrawEngine::new(embedded::roster()).generate(&mut rng::seeded(seed))
}

/// Final table of one group alongside its label.
#[derive(Debug, Clone, Serialize)]
pub struct GroupStandings {
    pub group: GroupLabel,
    pub standings: Vec<Standing>,
}

/// Everything one tournament run produces.
#[derive(Debug, Clone, Serialize)]
pub struct TournamentReport {
    /// Groups as drawn, teams in pot order.
    pub groups: Vec<GroupResult>,
    /// Simulated group-stage tables.
    pub standings: Vec<GroupStandings>,
    /// All 31 knockout matches, Round-of-32 first.
    pub matches: Vec<KnockoutMatch>,
    /// Winner of the Final.
    pub champion: String,
}

/// Full pipeline: draw, simulate every group stage, then the knockout
/// bracket, all from one RNG stream.
pub fn simulate_tournament(rng: &mut SimRng) -> Result<TournamentReport, TournamentError> {
    let groups = DrawEngine::new(embedded::roster()).generate(rng)?;

    // Each group's standings decide its knockout placements.
    let mut standings = Vec::with_capacity(groups.len());
    let mut ranked = Vec::with_capacity(groups.len());
    for group in &groups {
        let table = group_stage::simulate_group(&group.teams, &[], rng);
        let ordered = table
            .iter()
            .map(|line| {
                group
                    .teams
                    .iter()
                    .find(|t| t.id == line.team)
                    .expect("standings only rank the group's own teams")
                    .clone()
            })
            .collect();
        ranked.push(GroupResult { group: group.group, teams: ordered });
        standings.push(GroupStandings { group: group.group, standings: table });
    }

    let matches = knockout::build_and_simulate(&ranked, rng)?;
    let champion = matches
        .last()
        .and_then(|m| m.winner.as_ref())
        .map(|t| t.id.clone())
        .expect("a completed bracket ends in a resolved Final");

    Ok(TournamentReport { groups, standings, matches, champion })
}
