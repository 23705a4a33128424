use crate::errors::{DataError, DataResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::{LazyLock, RwLock};

// Global rule set - defaults until a rules file is loaded
static RULES: LazyLock<RwLock<Rules>> = LazyLock::new(|| RwLock::new(Rules::default()));

/// Tunable constants of the battle system.
///
/// Narration templates use `{name}` as the placeholder for the creature's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub level_up_stat_growth: f64,
    pub maximum_roster_size: usize,
    pub maximum_move_slots: usize,
    pub default_action_priority: i32,
    pub speed_based_action_priority: i32,
    pub messages: Messages,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub flee_invalid: String,
    pub flee_success: String,
    pub pokeball_invalid_battle_type: String,
    pub pokeball_unsuccessful_catch: String,
    pub pokeball_full_team: String,
    pub pokeball_successful_catch: String,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            level_up_stat_growth: 1.05,
            maximum_roster_size: 6,
            maximum_move_slots: 4,
            default_action_priority: 1,
            speed_based_action_priority: 2,
            messages: Messages::default(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            flee_invalid: "Unable to escape a trainer battle.".to_string(),
            flee_success: "Got away safely!".to_string(),
            pokeball_invalid_battle_type: "Pokeballs can't be used in trainer battles.".to_string(),
            pokeball_unsuccessful_catch: "It was so close, but {name} escaped!".to_string(),
            pokeball_full_team: "There's no more room for {name}. Maybe don't throw a pokeball next time."
                .to_string(),
            pokeball_successful_catch: "{name} was caught!".to_string(),
        }
    }
}

impl Messages {
    /// Fill a template's `{name}` placeholder.
    pub fn render(template: &str, name: &str) -> String {
        template.replace("{name}", name)
    }
}

impl Rules {
    pub fn from_ron(source: &str) -> DataResult<Rules> {
        Ok(ron::from_str(source)?)
    }

    pub fn load(path: &Path) -> DataResult<Rules> {
        let content = fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&content)
    }
}

/// Replace the process-wide rules with the contents of a RON file
pub fn initialize_rules(path: &Path) -> DataResult<()> {
    let rules = Rules::load(path)?;
    tracing::debug!(?path, "loaded battle rules");
    install_rules(rules);
    Ok(())
}

pub fn install_rules(rules: Rules) {
    // A poisoned lock still holds a complete Rules value
    let mut global = RULES.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *global = rules;
}

/// Snapshot of the rules currently in force
pub fn current_rules() -> Rules {
    RULES
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}
