use serde::{Deserialize, Serialize};
use std::fmt;

use super::Team;

/// Group letter, A through L.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GroupLabel {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
}

impl GroupLabel {
    /// All 12 groups in draw order.
    pub const ALL: [GroupLabel; 12] = [
        GroupLabel::A,
        GroupLabel::B,
        GroupLabel::C,
        GroupLabel::D,
        GroupLabel::E,
        GroupLabel::F,
        GroupLabel::G,
        GroupLabel::H,
        GroupLabel::I,
        GroupLabel::J,
        GroupLabel::K,
        GroupLabel::L,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupLabel::A => "A",
            GroupLabel::B => "B",
            GroupLabel::C => "C",
            GroupLabel::D => "D",
            GroupLabel::E => "E",
            GroupLabel::F => "F",
            GroupLabel::G => "G",
            GroupLabel::H => "H",
            GroupLabel::I => "I",
            GroupLabel::J => "J",
            GroupLabel::K => "K",
            GroupLabel::L => "L",
        }
    }

    /// Position in [`GroupLabel::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finalized group: label plus its four teams.
///
/// Team order is insertion order from the draw (pot 1 first), or final
/// standings order once a group stage has been played. Read-only after
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupResult {
    pub group: GroupLabel,
    pub teams: Vec<Team>,
}
