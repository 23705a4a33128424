use serde::{Deserialize, Serialize};
use std::fmt;

/// An item a trainer can use from its inventory during battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    kind: ItemKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Attempts to catch a wild creature
    Pokeball { catch_chance: f64 },
    /// Restores health to the user's creature
    Food { health_restored: u32 },
}

impl Item {
    pub fn pokeball(name: impl Into<String>, catch_chance: f64) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Pokeball { catch_chance },
        }
    }

    pub fn food(name: impl Into<String>, health_restored: u32) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Food { health_restored },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn is_pokeball(&self) -> bool {
        matches!(self.kind, ItemKind::Pokeball { .. })
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            ItemKind::Pokeball { .. } => "Pokeball",
            ItemKind::Food { .. } => "Food",
        };
        write!(f, "{}('{}')", kind, self.name)
    }
}
