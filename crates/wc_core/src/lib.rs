//! # wc_core - Deterministic World Cup Draw & Tournament Simulation Engine
//!
//! Draws 48 national teams into 12 groups under confederation constraints,
//! then projects the knockout stage through probabilistic match simulation.
//!
//! ## Features
//! - Constrained group draw via randomized backtracking (hosts pre-seeded,
//!   top seeds protected)
//! - Rank-driven match resolution with realistic scorelines
//! - Group-stage round robins with user-supplied or simulated results
//! - 32-team knockout bracket seeded from winners, runners-up and the best
//!   third-place finishers
//! - 100% deterministic given a seed (same seed = same tournament)
//! - JSON API for easy integration with presentation layers

pub mod api;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;

// Re-export main API functions
pub use api::{
    generate_draw, generate_draw_json, generate_draw_seeded, resolve_match_json,
    simulate_group_json, simulate_tournament, simulate_tournament_json, GroupStandings,
    TournamentReport,
};
pub use error::{BracketError, DrawError, TournamentError};

// Re-export engine entry points
pub use engine::{
    build_and_simulate, can_place, compute_standings, resolve_decisive, resolve_match,
    simulate_group, DrawConfig, DrawEngine, SimRng,
};

// Re-export the data model
pub use data::{host_teams, lookup_team, pot_teams, roster};
pub use models::{
    Confederation, GroupLabel, GroupResult, KnockoutMatch, MatchOutcome, MatchScore,
    ResolvedMatch, Round, Standing, Team,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
