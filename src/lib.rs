//! Pokemon Skirmish Battle Engine
//!
//! A small turn-based battle engine: two trainers queue one action each per
//! round, actions resolve one at a time in priority order, and every step is
//! narrated through an `ActionSummary`.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod errors;
pub mod items;
pub mod moves;
pub mod pokemon;
pub mod prefab_teams;
pub mod rules;
pub mod stats;
pub mod trainer;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::ElementType;

// --- From this crate's modules (`src/`) ---

// Battle state and turn resolution.
pub use battle::actions::{calculate_damage, Action};
pub use battle::ai::{ScaredyCat, Strategy, TeamRocket};
pub use battle::chance::{Chance, RandomChance, ScriptedChance};
pub use battle::state::{create_encounter, Battle, Side};
pub use battle::summary::ActionSummary;

// Core runtime types.
pub use items::{Item, ItemKind};
pub use moves::{Move, MoveEffect};
pub use pokemon::{Pokemon, PokemonId};
pub use stats::{StatBlock, StatModifier};
pub use trainer::{InventoryEntry, Trainer};

// Configuration and prefab data.
pub use prefab_teams::{load_prefab_trainers, prefab_trainer};
pub use rules::{current_rules, initialize_rules, install_rules, Rules};

// Crate-specific error and result types.
pub use errors::{BattleError, BattleResult, DataError, DataResult};
