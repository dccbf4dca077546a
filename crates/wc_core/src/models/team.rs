use serde::{Deserialize, Serialize};

/// Continental federation a team qualifies through.
///
/// The confederation caps how many of its teams may share a group: UEFA
/// sends enough entrants that two per group are allowed, every other
/// confederation is limited to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Confederation {
    #[serde(rename = "UEFA")]
    Uefa,
    #[serde(rename = "CONMEBOL")]
    Conmebol,
    #[serde(rename = "AFC")]
    Afc,
    #[serde(rename = "CAF")]
    Caf,
    #[serde(rename = "CONCACAF")]
    Concacaf,
    #[serde(rename = "OFC")]
    Ofc,
}

impl Confederation {
    /// Maximum number of teams from this confederation allowed in one group.
    pub fn group_cap(&self) -> usize {
        match self {
            Confederation::Uefa => 2,
            _ => 1,
        }
    }

    /// Canonical confederation code string (e.g., "UEFA").
    pub fn code(&self) -> &'static str {
        match self {
            Confederation::Uefa => "UEFA",
            Confederation::Conmebol => "CONMEBOL",
            Confederation::Afc => "AFC",
            Confederation::Caf => "CAF",
            Confederation::Concacaf => "CONCACAF",
            Confederation::Ofc => "OFC",
        }
    }
}

/// A national team as it enters the draw.
///
/// Never mutated after construction; identity is `id` alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub confederation: Confederation,
    /// Seeding tier, 1 (strongest coefficient band) to 4 (weakest).
    pub pot: u8,
    /// World ranking; lower = stronger.
    pub rank: u16,
    /// Tournament host, pre-placed into a fixed group.
    #[serde(default)]
    pub host: bool,
}

// Identity is the id; name/rank edits in reference data must not change it.
impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Team {}
