use serde::{Deserialize, Serialize};

use super::{MatchScore, Team};

/// Knockout round, in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Round {
    #[serde(rename = "R32")]
    RoundOf32,
    #[serde(rename = "R16")]
    RoundOf16,
    #[serde(rename = "QF")]
    Quarterfinal,
    #[serde(rename = "SF")]
    Semifinal,
    #[serde(rename = "Final")]
    Final,
}

impl Round {
    /// All five rounds in play order.
    pub const ALL: [Round; 5] = [
        Round::RoundOf32,
        Round::RoundOf16,
        Round::Quarterfinal,
        Round::Semifinal,
        Round::Final,
    ];

    /// Canonical short code (e.g., "QF").
    pub fn code(&self) -> &'static str {
        match self {
            Round::RoundOf32 => "R32",
            Round::RoundOf16 => "R16",
            Round::Quarterfinal => "QF",
            Round::Semifinal => "SF",
            Round::Final => "Final",
        }
    }

    /// Number of matches played in this round.
    pub fn match_count(&self) -> usize {
        match self {
            Round::RoundOf32 => 16,
            Round::RoundOf16 => 8,
            Round::Quarterfinal => 4,
            Round::Semifinal => 2,
            Round::Final => 1,
        }
    }

    /// The round the winners advance to, if any.
    pub fn next(&self) -> Option<Round> {
        match self {
            Round::RoundOf32 => Some(Round::RoundOf16),
            Round::RoundOf16 => Some(Round::Quarterfinal),
            Round::Quarterfinal => Some(Round::Semifinal),
            Round::Semifinal => Some(Round::Final),
            Round::Final => None,
        }
    }
}

/// One node of the knockout bracket.
///
/// Created when its round is simulated and immutable afterward. Round-of-32
/// slots come from group placements; every later slot is the winner of a
/// specific pair of prior-round matches (adjacent match numbers).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnockoutMatch {
    pub round: Round,
    /// 1-based sequence number within the round.
    pub number: u8,
    pub team1: Option<Team>,
    pub team2: Option<Team>,
    pub winner: Option<Team>,
    pub score: Option<MatchScore>,
}
