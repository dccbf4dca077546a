//! Reference data embedded in the binary.
//!
//! The team roster is external data the engines consume read-only; every
//! engine accepts an arbitrary roster slice and this module is merely the
//! default source.

pub mod embedded;

pub use embedded::{host_teams, lookup_team, pot_teams, roster};
