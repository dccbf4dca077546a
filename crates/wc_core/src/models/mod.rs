//! Core data model: teams, groups, match results, knockout bracket nodes.

pub mod group;
pub mod knockout;
pub mod match_result;
pub mod team;

pub use group::{GroupLabel, GroupResult};
pub use knockout::{KnockoutMatch, Round};
pub use match_result::{MatchOutcome, MatchScore, ResolvedMatch, Standing};
pub use team::{Confederation, Team};
