//! JSON string API.
//!
//! String-in/string-out entry points for presentation layers. Every request
//! carries a `schema_version` and an optional `seed`; omitting the seed uses
//! OS entropy. Errors come back as plain strings.

use serde::{Deserialize, Serialize};

use crate::data::embedded;
use crate::engine::draw::DrawEngine;
use crate::engine::group_stage;
use crate::engine::resolver;
use crate::engine::rng::{self, SimRng};
use crate::models::{GroupResult, KnockoutMatch, MatchOutcome, Standing, Team};
use crate::SCHEMA_VERSION;

fn check_schema(version: u8) -> Result<(), String> {
    if version != SCHEMA_VERSION {
        return Err(format!(
            "Unsupported schema_version: expected {}, got {}",
            SCHEMA_VERSION, version
        ));
    }
    Ok(())
}

fn rng_from(seed: Option<u64>) -> SimRng {
    match seed {
        Some(seed) => rng::seeded(seed),
        None => rng::unseeded(),
    }
}

fn lookup(id: &str) -> Result<&'static Team, String> {
    embedded::lookup_team(id).ok_or_else(|| format!("Unknown team id: {}", id))
}

#[derive(Debug, Deserialize)]
pub struct DrawRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct DrawResponse {
    pub schema_version: u8,
    pub groups: Vec<GroupResult>,
}

/// Draw the embedded roster into 12 groups.
///
/// Request: `{"schema_version":1,"seed":42}` (seed optional).
pub fn generate_draw_json(request_json: &str) -> Result<String, String> {
    let request: DrawRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;
    check_schema(request.schema_version)?;

    let mut rng = rng_from(request.seed);
    let groups = DrawEngine::new(embedded::roster())
        .generate(&mut rng)
        .map_err(|e| e.to_string())?;

    let response = DrawResponse { schema_version: SCHEMA_VERSION, groups };
    serde_json::to_string(&response).map_err(|e| format!("Serialization error: {}", e))
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub seed: Option<u64>,
    pub team1: String,
    pub team2: String,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub schema_version: u8,
    pub winner: String,
    pub score: String,
}

/// Resolve one match between two rostered teams, always forcing a winner.
pub fn resolve_match_json(request_json: &str) -> Result<String, String> {
    let request: MatchRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;
    check_schema(request.schema_version)?;

    let team1 = lookup(&request.team1)?;
    let team2 = lookup(&request.team2)?;
    let mut rng = rng_from(request.seed);
    let resolved = resolver::resolve_decisive(team1, team2, &mut rng);

    let response = MatchResponse {
        schema_version: SCHEMA_VERSION,
        winner: resolved.winner.id,
        score: resolved.score.to_string(),
    };
    serde_json::to_string(&response).map_err(|e| format!("Serialization error: {}", e))
}

#[derive(Debug, Deserialize)]
pub struct GroupRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub seed: Option<u64>,
    /// Ids of the group's teams.
    pub teams: Vec<String>,
    /// Already-played results; missing pairings are simulated.
    #[serde(default)]
    pub outcomes: Vec<MatchOutcome>,
}

#[derive(Debug, Serialize)]
pub struct GroupResponse {
    pub schema_version: u8,
    pub standings: Vec<Standing>,
}

/// Complete a group's round robin and return the sorted table.
pub fn simulate_group_json(request_json: &str) -> Result<String, String> {
    let request: GroupRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;
    check_schema(request.schema_version)?;

    let teams: Vec<Team> = request
        .teams
        .iter()
        .map(|id| lookup(id).map(Clone::clone))
        .collect::<Result<_, _>>()?;
    let mut rng = rng_from(request.seed);
    let standings = group_stage::simulate_group(&teams, &request.outcomes, &mut rng);

    let response = GroupResponse { schema_version: SCHEMA_VERSION, standings };
    serde_json::to_string(&response).map_err(|e| format!("Serialization error: {}", e))
}

#[derive(Debug, Deserialize)]
pub struct TournamentRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct TournamentResponse {
    pub schema_version: u8,
    pub groups: Vec<GroupResult>,
    pub standings: Vec<super::GroupStandings>,
    pub matches: Vec<KnockoutMatch>,
    pub champion: String,
}

/// Run the whole pipeline: draw, group stages, knockout bracket.
pub fn simulate_tournament_json(request_json: &str) -> Result<String, String> {
    let request: TournamentRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;
    check_schema(request.schema_version)?;

    let mut rng = rng_from(request.seed);
    let report = super::simulate_tournament(&mut rng).map_err(|e| e.to_string())?;

    let response = TournamentResponse {
        schema_version: SCHEMA_VERSION,
        groups: report.groups,
        standings: report.standings,
        matches: report.matches,
        champion: report.champion,
    };
    serde_json::to_string(&response).map_err(|e| format!("Serialization error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_draw_json_roundtrip() {
        let request = json!({ "schema_version": 1, "seed": 42 });
        let result = generate_draw_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(parsed["schema_version"], 1);
        let groups = parsed["groups"].as_array().unwrap();
        assert_eq!(groups.len(), 12);
        for group in groups {
            assert_eq!(group["teams"].as_array().unwrap().len(), 4);
        }
        assert_eq!(groups[0]["group"], "A");
        assert_eq!(groups[0]["teams"][0]["id"], "MEX");
    }

    #[test]
    fn test_wrong_schema_is_rejected() {
        let request = json!({ "schema_version": 9, "seed": 1 });
        let err = generate_draw_json(&request.to_string()).unwrap_err();
        assert!(err.contains("schema_version"), "unexpected error: {}", err);
    }

    #[test]
    fn test_match_json_reports_winner_and_score() {
        let request = json!({
            "schema_version": 1,
            "seed": 5,
            "team1": "ESP",
            "team2": "NZL"
        });
        let result = resolve_match_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();

        let winner = parsed["winner"].as_str().unwrap();
        assert!(winner == "ESP" || winner == "NZL");
        assert!(parsed["score"].as_str().unwrap().contains('-'));
    }

    #[test]
    fn test_match_json_rejects_unknown_team() {
        let request = json!({
            "schema_version": 1,
            "team1": "ESP",
            "team2": "ATL"
        });
        let err = resolve_match_json(&request.to_string()).unwrap_err();
        assert!(err.contains("Unknown team id"), "unexpected error: {}", err);
    }

    #[test]
    fn test_group_json_with_known_outcome() {
        let request = json!({
            "schema_version": 1,
            "seed": 2,
            "teams": ["JPN", "KOR", "AUS", "IRN"],
            "outcomes": [
                { "team1": "JPN", "team2": "KOR", "score1": 2, "score2": 0 }
            ]
        });
        let result = simulate_group_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();

        let standings = parsed["standings"].as_array().unwrap();
        assert_eq!(standings.len(), 4);
        for line in standings {
            assert_eq!(line["played"], 3);
        }
    }

    #[test]
    fn test_tournament_json_full_report() {
        let request = json!({ "schema_version": 1, "seed": 77 });
        let result = simulate_tournament_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(parsed["groups"].as_array().unwrap().len(), 12);
        assert_eq!(parsed["matches"].as_array().unwrap().len(), 31);
        let champion = parsed["champion"].as_str().unwrap();
        assert!(!champion.is_empty());
        let last = parsed["matches"].as_array().unwrap().last().unwrap().clone();
        assert_eq!(last["round"], "Final");
        assert_eq!(last["winner"]["id"], champion);
    }

    #[test]
    fn test_seeded_requests_are_reproducible() {
        let request = json!({ "schema_version": 1, "seed": 123 }).to_string();
        assert_eq!(generate_draw_json(&request).unwrap(), generate_draw_json(&request).unwrap());
    }
}
