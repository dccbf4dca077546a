//! Tournament engines.
//!
//! Layered bottom-up: `rng` and `constraint` are stateless primitives,
//! `draw` runs the constrained backtracking search, `resolver` decides
//! single matches, and `group_stage`/`knockout` orchestrate them into full
//! stages. Everything is single-threaded and operates on freshly built
//! state per run.

pub mod constraint;
pub mod draw;
pub mod group_stage;
pub mod knockout;
pub mod resolver;
pub mod rng;

pub use constraint::can_place;
pub use draw::{DrawConfig, DrawEngine};
pub use group_stage::{compute_standings, simulate_group};
pub use knockout::build_and_simulate;
pub use resolver::{resolve_decisive, resolve_match};
pub use rng::SimRng;
