//! Knockout bracket construction and resolution.
//!
//! Seeds a 32-team single-elimination field from the group placements —
//! group winners, runners-up, and the best third-place finishers as
//! wildcard qualifiers — then resolves all five rounds down to a champion.
//! The input groups must already carry their teams in final standings
//! order (position 1 = winner).

use rand::seq::SliceRandom;
use tracing::debug;

use crate::engine::resolver;
use crate::engine::rng::SimRng;
use crate::error::BracketError;
use crate::models::{GroupLabel, GroupResult, KnockoutMatch, Round, Team};

/// Field size of the knockout stage.
const BRACKET_SLOTS: usize = 32;

/// A qualifier together with its source group, kept for rank tie-breaks.
struct Placed {
    team: Team,
    group: GroupLabel,
}

/// Winners, runners-up and third-place candidates per group.
///
/// A group with fewer than three teams is malformed input: it contributes
/// its winner only — no runner-up and no wildcard candidate.
fn split_placements(groups: &[GroupResult]) -> (Vec<Placed>, Vec<Placed>, Vec<Placed>) {
    let mut winners = Vec::new();
    let mut runners = Vec::new();
    let mut thirds = Vec::new();
    for g in groups {
        if let Some(first) = g.teams.first() {
            winners.push(Placed { team: first.clone(), group: g.group });
        }
        if g.teams.len() >= 3 {
            runners.push(Placed { team: g.teams[1].clone(), group: g.group });
            thirds.push(Placed { team: g.teams[2].clone(), group: g.group });
        }
    }
    (winners, runners, thirds)
}

/// Build the Round-of-32 field and simulate every round.
///
/// Returns the full ordered match list, 16+8+4+2+1, ending in exactly one
/// Final. All-or-nothing: a field that cannot be filled or paired yields an
/// error and no partial bracket.
pub fn build_and_simulate(
    groups: &[GroupResult],
    rng: &mut SimRng,
) -> Result<Vec<KnockoutMatch>, BracketError> {
    let (mut winners, mut runners, mut thirds) = split_placements(groups);

    // Rank sort; third-place candidates additionally break rank ties by
    // group letter so wildcard selection is deterministic.
    winners.sort_by(|a, b| a.team.rank.cmp(&b.team.rank).then(a.group.cmp(&b.group)));
    runners.sort_by(|a, b| a.team.rank.cmp(&b.team.rank).then(a.group.cmp(&b.group)));
    thirds.sort_by(|a, b| a.team.rank.cmp(&b.team.rank).then(a.group.cmp(&b.group)));

    let available = winners.len() + runners.len() + thirds.len();
    let direct = winners.len() + runners.len();
    if direct > BRACKET_SLOTS {
        return Err(BracketError::Unseedable(format!(
            "{} direct qualifiers for {} slots",
            direct, BRACKET_SLOTS
        )));
    }
    let wildcard_count = BRACKET_SLOTS - direct;
    if thirds.len() < wildcard_count {
        return Err(BracketError::Incomplete { needed: BRACKET_SLOTS, available });
    }
    let wildcards = &thirds[..wildcard_count];

    // Seeding blocks, index-aligned after the rank sort: the strongest
    // winners meet the wildcards, the remaining winners meet the strongest
    // runners-up, the rest of the runners-up pair off among themselves.
    // Construction-order bias is erased by the shuffle below.
    if wildcard_count > winners.len() {
        return Err(BracketError::Unseedable(format!(
            "{} wildcard slots but only {} group winners to meet them",
            wildcard_count,
            winners.len()
        )));
    }
    let (top_winners, bottom_winners) = winners.split_at(wildcard_count);
    if bottom_winners.len() > runners.len() {
        return Err(BracketError::Unseedable(format!(
            "{} unpaired group winners but only {} runners-up",
            bottom_winners.len(),
            runners.len()
        )));
    }
    let (top_runners, rest_runners) = runners.split_at(bottom_winners.len());
    if rest_runners.len() % 2 != 0 {
        return Err(BracketError::Unseedable(format!(
            "{} runners-up left over, cannot pair sequentially",
            rest_runners.len()
        )));
    }

    let mut field: Vec<(Team, Team)> = Vec::with_capacity(BRACKET_SLOTS / 2);
    for (w, wc) in top_winners.iter().zip(wildcards) {
        field.push((w.team.clone(), wc.team.clone()));
    }
    for (w, r) in bottom_winners.iter().zip(top_runners) {
        field.push((w.team.clone(), r.team.clone()));
    }
    for pair in rest_runners.chunks(2) {
        field.push((pair[0].team.clone(), pair[1].team.clone()));
    }
    debug_assert_eq!(field.len(), BRACKET_SLOTS / 2);

    // Decouple bracket progression from construction order, then number the
    // matches in their shuffled sequence.
    field.shuffle(rng);

    let mut matches: Vec<KnockoutMatch> = Vec::with_capacity(BRACKET_SLOTS - 1);
    for round in Round::ALL {
        let mut advancing: Vec<Team> = Vec::with_capacity(field.len());
        for (i, (team1, team2)) in field.iter().enumerate() {
            let resolved = resolver::resolve_decisive(team1, team2, rng);
            advancing.push(resolved.winner.clone());
            matches.push(KnockoutMatch {
                round,
                number: (i + 1) as u8,
                team1: Some(team1.clone()),
                team2: Some(team2.clone()),
                winner: Some(resolved.winner),
                score: Some(resolved.score),
            });
        }
        if round == Round::Final {
            debug!(champion = %advancing[0].id, "tournament resolved");
            break;
        }
        // Adjacent winners meet in the next round.
        field = advancing.chunks(2).map(|pair| (pair[0].clone(), pair[1].clone())).collect();
    }

    Ok(matches)
}
