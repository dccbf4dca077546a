//! Constrained group draw.
//!
//! Assigns all 48 teams to the 12 groups: hosts are pre-placed into their
//! reserved groups, the protected top seeds are scattered over the host-free
//! groups, the rest of pot 1 fills the remaining groups, and pots 2-4 are
//! placed one pot at a time by a randomized backtracking search under the
//! confederation constraint. A dead-ended attempt is abandoned and retried
//! with fresh randomness; only an exhausted attempt budget is an error.

use rand::seq::SliceRandom;
use tracing::debug;

use crate::engine::constraint::can_place;
use crate::engine::rng::SimRng;
use crate::error::DrawError;
use crate::models::{GroupLabel, GroupResult, Team};

/// Fixed pre-seeding and retry budget for a draw.
#[derive(Debug, Clone)]
pub struct DrawConfig {
    /// Host teams and the groups reserved for them.
    pub host_groups: Vec<(String, GroupLabel)>,
    /// Strongest pot-1 teams, scattered over the host-free groups.
    pub top_seeds: Vec<String>,
    /// Full-draw attempts before giving up.
    pub max_attempts: u32,
}

impl Default for DrawConfig {
    /// 2026 edition: hosts Mexico, Canada and USA open groups A, B and D;
    /// four protected seeds.
    fn default() -> Self {
        Self {
            host_groups: vec![
                ("MEX".to_string(), GroupLabel::A),
                ("CAN".to_string(), GroupLabel::B),
                ("USA".to_string(), GroupLabel::D),
            ],
            top_seeds: ["ESP", "ARG", "FRA", "ENG"].iter().map(|s| s.to_string()).collect(),
            max_attempts: 1000,
        }
    }
}

/// Group contents during the search, indexed by [`GroupLabel::index`].
type Groups = Vec<Vec<Team>>;

/// Backtracking group-draw engine over an injected roster.
pub struct DrawEngine<'a> {
    roster: &'a [Team],
    config: DrawConfig,
}

impl<'a> DrawEngine<'a> {
    pub fn new(roster: &'a [Team]) -> Self {
        Self { roster, config: DrawConfig::default() }
    }

    pub fn with_config(roster: &'a [Team], config: DrawConfig) -> Self {
        Self { roster, config }
    }

    /// Run the draw.
    ///
    /// Constraint violations inside the search are ordinary dead ends and
    /// never escape; each one abandons the attempt and retries with fresh
    /// randomness. Given a fixed RNG stream the result is exactly
    /// reproducible.
    pub fn generate(&self, rng: &mut SimRng) -> Result<Vec<GroupResult>, DrawError> {
        self.validate_roster()?;

        for attempt in 1..=self.config.max_attempts {
            if let Some(groups) = self.try_draw(rng) {
                debug!(attempt, "draw complete");
                return Ok(GroupLabel::ALL
                    .iter()
                    .zip(groups)
                    .map(|(label, teams)| GroupResult { group: *label, teams })
                    .collect());
            }
            debug!(attempt, "draw attempt dead-ended, retrying");
        }

        Err(DrawError::Exhausted { attempts: self.config.max_attempts })
    }

    fn validate_roster(&self) -> Result<(), DrawError> {
        for pot in 1..=4 {
            let count = self.roster.iter().filter(|t| t.pot == pot).count();
            if count != GroupLabel::ALL.len() {
                return Err(DrawError::InvalidRoster(format!(
                    "pot {} holds {} teams, expected {}",
                    pot,
                    count,
                    GroupLabel::ALL.len()
                )));
            }
        }

        let mut reserved: Vec<GroupLabel> = Vec::new();
        let mut host_ids: Vec<&str> = Vec::new();
        for (id, label) in &self.config.host_groups {
            let team = self
                .team(id)
                .ok_or_else(|| DrawError::InvalidRoster(format!("host {} not in roster", id)))?;
            if !team.host {
                return Err(DrawError::InvalidRoster(format!("{} is not flagged as a host", id)));
            }
            if team.pot != 1 {
                return Err(DrawError::InvalidRoster(format!("host {} must be seeded in pot 1", id)));
            }
            if reserved.contains(label) {
                return Err(DrawError::InvalidRoster(format!("group {} reserved twice", label)));
            }
            if host_ids.contains(&id.as_str()) {
                return Err(DrawError::InvalidRoster(format!("host {} listed twice", id)));
            }
            reserved.push(*label);
            host_ids.push(id);
        }
        for team in self.roster.iter().filter(|t| t.host) {
            if !self.config.host_groups.iter().any(|(id, _)| *id == team.id) {
                return Err(DrawError::InvalidRoster(format!(
                    "host {} has no reserved group",
                    team.id
                )));
            }
        }

        for id in &self.config.top_seeds {
            let team = self
                .team(id)
                .ok_or_else(|| DrawError::InvalidRoster(format!("top seed {} not in roster", id)))?;
            if team.pot != 1 || team.host {
                return Err(DrawError::InvalidRoster(format!(
                    "top seed {} must be a non-host pot-1 team",
                    id
                )));
            }
        }

        Ok(())
    }

    fn team(&self, id: &str) -> Option<&Team> {
        self.roster.iter().find(|t| t.id == id)
    }

    /// One complete draw attempt; `None` is a dead end, not an error.
    fn try_draw(&self, rng: &mut SimRng) -> Option<Groups> {
        let mut groups: Groups = vec![Vec::new(); GroupLabel::ALL.len()];

        // 1. Hosts into their reserved groups. Deterministic.
        for (id, label) in &self.config.host_groups {
            let team = self.team(id)?;
            groups[label.index()].push(team.clone());
        }

        // 2. Top seeds over the shuffled host-free groups, one per group.
        let mut open: Vec<GroupLabel> = GroupLabel::ALL
            .iter()
            .copied()
            .filter(|l| !self.config.host_groups.iter().any(|(_, reserved)| reserved == l))
            .collect();
        open.shuffle(rng);

        let mut top_seeds: Vec<&Team> = self
            .roster
            .iter()
            .filter(|t| self.config.top_seeds.contains(&t.id))
            .collect();
        top_seeds.shuffle(rng);
        for (i, team) in top_seeds.iter().enumerate() {
            groups[open[i].index()].push((*team).clone());
        }

        // 3. Remaining pot-1 teams fill the remaining open groups.
        let mut other_pot1: Vec<&Team> = self
            .roster
            .iter()
            .filter(|t| t.pot == 1 && !t.host && !self.config.top_seeds.contains(&t.id))
            .collect();
        other_pot1.shuffle(rng);
        for (i, team) in other_pot1.iter().enumerate() {
            groups[open[top_seeds.len() + i].index()].push((*team).clone());
        }

        // 4. Pots 2-4 in order, each by backtracking over shuffled orders.
        for pot in 2..=4 {
            let mut pot_teams: Vec<&Team> = self.roster.iter().filter(|t| t.pot == pot).collect();
            pot_teams.shuffle(rng);
            groups = Self::place_pot(&groups, &pot_teams, 0, &GroupLabel::ALL, rng)?;
        }

        Some(groups)
    }

    /// Recursive backtracking placement for one pot.
    ///
    /// Each group takes exactly one team per pot, so `open` shrinks by the
    /// used label at every level. Search state is cloned per branch rather
    /// than mutated in place and unwound.
    fn place_pot(
        groups: &Groups,
        teams: &[&Team],
        index: usize,
        open: &[GroupLabel],
        rng: &mut SimRng,
    ) -> Option<Groups> {
        if index >= teams.len() {
            return Some(groups.clone());
        }
        let team = teams[index];

        // Shuffled candidate order keeps the solution distribution unbiased
        // when several groups are feasible.
        let mut order: Vec<GroupLabel> = open.to_vec();
        order.shuffle(rng);

        for label in order {
            if !can_place(&groups[label.index()], team) {
                continue;
            }
            let mut next = groups.clone();
            next[label.index()].push(team.clone());
            let remaining: Vec<GroupLabel> =
                open.iter().copied().filter(|l| *l != label).collect();
            if let Some(done) = Self::place_pot(&next, teams, index + 1, &remaining, rng) {
                return Some(done);
            }
        }

        None
    }
}
