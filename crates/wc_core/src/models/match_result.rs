//! Result data structures produced by the match resolver and the group and
//! knockout simulators.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Team;

/// A single recorded group-stage result.
///
/// Outcomes are keyed by the unordered `(team1, team2)` pair: recording a
/// later outcome for the same pairing replaces the earlier one instead of
/// accumulating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub team1: String,
    pub team2: String,
    pub score1: u8,
    pub score2: u8,
}

impl MatchOutcome {
    pub fn new(team1: &str, team2: &str, score1: u8, score2: u8) -> Self {
        Self { team1: team1.to_string(), team2: team2.to_string(), score1, score2 }
    }

    /// Key identifying the unordered pairing.
    pub fn pair_key(&self) -> (String, String) {
        if self.team1 <= self.team2 {
            (self.team1.clone(), self.team2.clone())
        } else {
            (self.team2.clone(), self.team1.clone())
        }
    }

    /// Goals scored by `id` in this outcome, if it took part.
    pub fn goals_for(&self, id: &str) -> Option<u8> {
        if self.team1 == id {
            Some(self.score1)
        } else if self.team2 == id {
            Some(self.score2)
        } else {
            None
        }
    }
}

/// Final score of one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub home: u8,
    pub away: u8,
    /// Set when a drawn match was decided from the spot; the rendered
    /// scoreline carries a "(PK)" marker to keep it distinct.
    #[serde(default)]
    pub penalties: bool,
}

impl MatchScore {
    pub fn is_draw(&self) -> bool {
        self.home == self.away && !self.penalties
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.penalties {
            write!(f, "{}-{} (PK)", self.home, self.away)
        } else {
            write!(f, "{}-{}", self.home, self.away)
        }
    }
}

/// Resolver output once a winner has been forced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedMatch {
    pub winner: Team,
    pub score: MatchScore,
}

/// One team's line in a group table.
///
/// Always recomputed in full from the current outcome set, never mutated
/// incrementally across recomputations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub team: String,
    pub played: u8,
    pub won: u8,
    pub drawn: u8,
    pub lost: u8,
    pub goals_for: u8,
    pub goals_against: u8,
    pub goal_difference: i16,
    pub points: u8,
}

impl Standing {
    pub fn blank(team: &str) -> Self {
        Self {
            team: team.to_string(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    /// Fold one result into the line: 3 points for a win, 1 for a draw.
    pub fn record(&mut self, scored: u8, conceded: u8) {
        self.played += 1;
        self.goals_for += scored;
        self.goals_against += conceded;
        self.goal_difference += scored as i16 - conceded as i16;
        if scored > conceded {
            self.won += 1;
            self.points += 3;
        } else if scored == conceded {
            self.drawn += 1;
            self.points += 1;
        } else {
            self.lost += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_key_is_unordered() {
        let a = MatchOutcome::new("ESP", "BRA", 2, 1);
        let b = MatchOutcome::new("BRA", "ESP", 1, 2);
        assert_eq!(a.pair_key(), b.pair_key());
    }

    #[test]
    fn test_goals_for_sides() {
        let outcome = MatchOutcome::new("JPN", "KOR", 3, 0);
        assert_eq!(outcome.goals_for("JPN"), Some(3));
        assert_eq!(outcome.goals_for("KOR"), Some(0));
        assert_eq!(outcome.goals_for("BRA"), None);
    }

    #[test]
    fn test_score_display_marks_penalties() {
        let regular = MatchScore { home: 2, away: 1, penalties: false };
        assert_eq!(regular.to_string(), "2-1");
        assert!(!regular.is_draw());

        let shootout = MatchScore { home: 1, away: 1, penalties: true };
        assert_eq!(shootout.to_string(), "1-1 (PK)");
        assert!(!shootout.is_draw());

        let draw = MatchScore { home: 0, away: 0, penalties: false };
        assert!(draw.is_draw());
    }

    #[test]
    fn test_standing_record() {
        let mut line = Standing::blank("ARG");
        line.record(2, 0);
        line.record(1, 1);
        line.record(0, 3);
        assert_eq!(line.played, 3);
        assert_eq!(line.won, 1);
        assert_eq!(line.drawn, 1);
        assert_eq!(line.lost, 1);
        assert_eq!(line.points, 4);
        assert_eq!(line.goals_for, 3);
        assert_eq!(line.goals_against, 4);
        assert_eq!(line.goal_difference, -1);
    }
}
