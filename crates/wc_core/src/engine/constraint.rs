//! Group placement constraint.

use crate::models::Team;

/// May `candidate` join a partially filled group?
///
/// Counts the group's teams per confederation: UEFA is capped at two per
/// group, every other confederation at one. Pure function of its inputs.
pub fn can_place(group_teams: &[Team], candidate: &Team) -> bool {
    let same = group_teams
        .iter()
        .filter(|t| t.confederation == candidate.confederation)
        .count();
    same < candidate.confederation.group_cap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Confederation;

    fn team(id: &str, confederation: Confederation) -> Team {
        Team {
            id: id.to_string(),
            name: id.to_string(),
            confederation,
            pot: 1,
            rank: 1,
            host: false,
        }
    }

    #[test]
    fn test_empty_group_accepts_anyone() {
        assert!(can_place(&[], &team("ESP", Confederation::Uefa)));
        assert!(can_place(&[], &team("NZL", Confederation::Ofc)));
    }

    #[test]
    fn test_uefa_capped_at_two() {
        let group = vec![team("ESP", Confederation::Uefa)];
        assert!(can_place(&group, &team("FRA", Confederation::Uefa)));

        let group = vec![team("ESP", Confederation::Uefa), team("FRA", Confederation::Uefa)];
        assert!(!can_place(&group, &team("GER", Confederation::Uefa)));
    }

    #[test]
    fn test_other_confederations_capped_at_one() {
        let group = vec![team("ARG", Confederation::Conmebol)];
        assert!(!can_place(&group, &team("BRA", Confederation::Conmebol)));
        assert!(can_place(&group, &team("JPN", Confederation::Afc)));
        assert!(can_place(&group, &team("ESP", Confederation::Uefa)));
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn confed_strategy() -> impl Strategy<Value = Confederation> {
            prop_oneof![
                Just(Confederation::Uefa),
                Just(Confederation::Conmebol),
                Just(Confederation::Afc),
                Just(Confederation::Caf),
                Just(Confederation::Concacaf),
                Just(Confederation::Ofc),
            ]
        }

        proptest! {
            /// Property: a group never admits a team past its confederation cap.
            #[test]
            fn prop_cap_never_exceeded(confeds in proptest::collection::vec(confed_strategy(), 0..4),
                                       candidate in confed_strategy()) {
                let group: Vec<Team> = confeds
                    .iter()
                    .enumerate()
                    .map(|(i, c)| team(&format!("T{}", i), *c))
                    .collect();
                let incoming = team("X", candidate);
                let same = group.iter().filter(|t| t.confederation == candidate).count();
                prop_assert_eq!(can_place(&group, &incoming), same < candidate.group_cap());
            }
        }
    }
}
