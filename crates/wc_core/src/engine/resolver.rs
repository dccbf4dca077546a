//! Probabilistic match resolution.
//!
//! Each side's expected goals are driven by the rank gap, then a Poisson
//! draw turns them into a realistic scoreline. Knockout callers force a
//! winner: a drawn scoreline falls to a weighted shootout coin favoring the
//! better-ranked side and is marked as decided from the spot.

use rand::Rng;
use rand_distr::{Distribution, Poisson};

use crate::engine::rng::SimRng;
use crate::models::{MatchScore, ResolvedMatch, Team};

/// Baseline expected goals per side for an even match-up (~2.7 total).
const BASE_XG: f64 = 1.35;
/// Extra expected goals per rank of advantage.
const XG_PER_RANK: f64 = 0.045;
/// Floor keeping weak sides a nonzero scoring chance.
const MIN_XG: f64 = 0.30;
/// Ceiling keeping scorelines in a realistic band.
const MAX_XG: f64 = 3.50;
/// Hard cap on goals per side.
const MAX_GOALS: u8 = 6;
/// Shootout edge per rank of advantage, on top of a fair coin.
const SHOOTOUT_EDGE_PER_RANK: f64 = 0.004;
const SHOOTOUT_EDGE_CAP: f64 = 0.35;

/// Expected goals for a side whose opponent sits at `opp_rank`.
///
/// Monotonic: a bigger rank advantage never lowers the mean.
fn expected_goals(own_rank: u16, opp_rank: u16) -> f64 {
    let advantage = (opp_rank as f64 - own_rank as f64).max(0.0);
    (BASE_XG + advantage * XG_PER_RANK).clamp(MIN_XG, MAX_XG)
}

fn sample_goals(xg: f64, rng: &mut SimRng) -> u8 {
    let poisson = Poisson::new(xg).expect("expected goals is clamped positive");
    (poisson.sample(rng) as u8).min(MAX_GOALS)
}

/// Simulate one match and return the raw scoreline; draws are allowed.
///
/// Group-stage callers record this as-is and award points with draws
/// permitted.
pub fn resolve_match(team1: &Team, team2: &Team, rng: &mut SimRng) -> MatchScore {
    let home = sample_goals(expected_goals(team1.rank, team2.rank), rng);
    let away = sample_goals(expected_goals(team2.rank, team1.rank), rng);
    MatchScore { home, away, penalties: false }
}

/// Simulate one match and force a winner.
///
/// A drawn scoreline goes to a weighted shootout coin favoring the
/// better-ranked side, and the score is marked accordingly. Never returns
/// a draw.
pub fn resolve_decisive(team1: &Team, team2: &Team, rng: &mut SimRng) -> ResolvedMatch {
    let score = resolve_match(team1, team2, rng);
    if score.home != score.away {
        let winner = if score.home > score.away { team1 } else { team2 };
        return ResolvedMatch { winner: winner.clone(), score };
    }

    let (stronger, weaker) =
        if team1.rank <= team2.rank { (team1, team2) } else { (team2, team1) };
    let gap = (weaker.rank - stronger.rank) as f64;
    let p_stronger = 0.5 + (gap * SHOOTOUT_EDGE_PER_RANK).min(SHOOTOUT_EDGE_CAP);
    let winner = if rng.gen_bool(p_stronger) { stronger } else { weaker };

    ResolvedMatch { winner: winner.clone(), score: MatchScore { penalties: true, ..score } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rng::seeded;
    use crate::models::Confederation;

    fn ranked_team(id: &str, rank: u16) -> Team {
        Team {
            id: id.to_string(),
            name: id.to_string(),
            confederation: Confederation::Uefa,
            pot: 1,
            rank,
            host: false,
        }
    }

    #[test]
    fn test_expected_goals_monotonic_and_clamped() {
        assert!(expected_goals(1, 10) > expected_goals(1, 5));
        assert!(expected_goals(1, 200) <= MAX_XG);
        assert!(expected_goals(200, 1) >= MIN_XG);
        // The weaker side keeps the baseline mean.
        assert_eq!(expected_goals(95, 1), BASE_XG);
    }

    #[test]
    fn test_scores_stay_in_band() {
        let strong = ranked_team("STR", 1);
        let weak = ranked_team("WEA", 190);
        let mut rng = seeded(3);
        for _ in 0..500 {
            let score = resolve_match(&strong, &weak, &mut rng);
            assert!(score.home <= MAX_GOALS);
            assert!(score.away <= MAX_GOALS);
            assert!(!score.penalties);
        }
    }

    #[test]
    fn test_large_rank_gap_wins_majority_but_not_all() {
        let strong = ranked_team("STR", 1);
        let weak = ranked_team("WEA", 95);
        let mut rng = seeded(11);

        let trials = 1000;
        let mut strong_wins = 0;
        for _ in 0..trials {
            if resolve_decisive(&strong, &weak, &mut rng).winner.id == "STR" {
                strong_wins += 1;
            }
        }
        assert!(
            strong_wins * 100 > trials * 70,
            "stronger side won only {}/{}",
            strong_wins,
            trials
        );
        assert!(strong_wins < trials, "upsets must stay possible");
    }

    #[test]
    fn test_decisive_never_returns_a_draw() {
        let a = ranked_team("A", 20);
        let b = ranked_team("B", 22);
        let mut rng = seeded(7);
        let mut saw_shootout = false;
        for _ in 0..300 {
            let resolved = resolve_decisive(&a, &b, &mut rng);
            assert!(resolved.winner.id == "A" || resolved.winner.id == "B");
            if resolved.score.penalties {
                saw_shootout = true;
                assert_eq!(resolved.score.home, resolved.score.away);
                assert!(resolved.score.to_string().ends_with("(PK)"));
            } else {
                assert_ne!(resolved.score.home, resolved.score.away);
            }
        }
        assert!(saw_shootout, "near-even sides should tie at least once in 300 matches");
    }

    #[test]
    fn test_resolution_is_deterministic_for_a_seed() {
        let a = ranked_team("A", 4);
        let b = ranked_team("B", 31);
        let first = resolve_decisive(&a, &b, &mut seeded(99));
        let second = resolve_decisive(&a, &b, &mut seeded(99));
        assert_eq!(first.winner.id, second.winner.id);
        assert_eq!(first.score, second.score);
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: sampled scores respect the cap for arbitrary ranks.
            #[test]
            fn prop_scores_capped(rank1 in 1u16..300, rank2 in 1u16..300, seed in 0u64..1000) {
                let a = ranked_team("A", rank1);
                let b = ranked_team("B", rank2);
                let score = resolve_match(&a, &b, &mut seeded(seed));
                prop_assert!(score.home <= MAX_GOALS);
                prop_assert!(score.away <= MAX_GOALS);
            }

            /// Property: the forced path always yields one of the two sides.
            #[test]
            fn prop_decisive_winner_is_participant(rank1 in 1u16..300, rank2 in 1u16..300, seed in 0u64..1000) {
                let a = ranked_team("A", rank1);
                let b = ranked_team("B", rank2);
                let resolved = resolve_decisive(&a, &b, &mut seeded(seed));
                prop_assert!(resolved.winner.id == "A" || resolved.winner.id == "B");
            }
        }
    }
}
