//! Embedded reference data
//!
//! The 48-team tournament roster is included into the binary at compile time
//! via `include_str!` and parsed once on first access. No file I/O at
//! runtime; the parsed roster is process-wide and read-only.

use serde::Deserialize;
use std::sync::OnceLock;

use crate::models::Team;

/// Tournament roster JSON (~4KB).
pub const TEAMS_JSON: &str = include_str!("../../../../data/teams.json");

#[derive(Debug, Deserialize)]
struct RosterFile {
    teams: Vec<Team>,
}

static ROSTER: OnceLock<Vec<Team>> = OnceLock::new();

/// Full 48-team roster, pot order.
///
/// First call parses the embedded JSON, later calls return the cached data.
pub fn roster() -> &'static [Team] {
    ROSTER
        .get_or_init(|| {
            let file: RosterFile = serde_json::from_str(TEAMS_JSON)
                .expect("Embedded team roster JSON is corrupted");
            file.teams
        })
        .as_slice()
}

/// Look up a single team by id.
pub fn lookup_team(id: &str) -> Option<&'static Team> {
    roster().iter().find(|t| t.id == id)
}

/// Teams of one seeding pot, roster order.
pub fn pot_teams(pot: u8) -> Vec<&'static Team> {
    roster().iter().filter(|t| t.pot == pot).collect()
}

/// The designated host teams.
pub fn host_teams() -> Vec<&'static Team> {
    roster().iter().filter(|t| t.host).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_roster_loaded() {
        let teams = roster();
        assert_eq!(teams.len(), 48, "48-team field expected");

        let ids: HashSet<&str> = teams.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), 48, "team ids must be unique");
        assert!(ids.contains("ESP"));
        assert!(ids.contains("NZL"));
    }

    #[test]
    fn test_pots_are_balanced() {
        for pot in 1..=4 {
            assert_eq!(pot_teams(pot).len(), 12, "pot {} should hold 12 teams", pot);
        }
    }

    #[test]
    fn test_hosts() {
        let hosts = host_teams();
        assert_eq!(hosts.len(), 3);
        for host in &hosts {
            assert_eq!(host.pot, 1, "hosts are seeded in pot 1");
        }
        let ids: Vec<&str> = hosts.iter().map(|t| t.id.as_str()).collect();
        assert!(ids.contains(&"USA"));
        assert!(ids.contains(&"MEX"));
        assert!(ids.contains(&"CAN"));
    }

    #[test]
    fn test_lookup_team() {
        let spain = lookup_team("ESP").expect("ESP should exist");
        assert_eq!(spain.name, "Spain");
        assert_eq!(spain.rank, 1);
        assert!(lookup_team("XYZ").is_none());
    }

    #[test]
    fn test_data_is_cached() {
        let first = roster();
        let second = roster();
        assert!(std::ptr::eq(first, second), "Should return cached data");
    }
}
