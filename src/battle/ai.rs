//! A module for defining AI behaviors for battle opponents.

use crate::battle::actions::Action;
use crate::battle::state::{Battle, Side};
use crate::errors::BattleResult;

/// A trait for any system that can decide on a battle action.
/// This provides a common interface for different AI difficulties or strategies.
pub trait Strategy {
    /// Inspects the battle and decides on the next action for the given side.
    fn decide(&self, battle: &Battle, side: Side) -> BattleResult<Action>;
}

/// Switch to the first roster slot that can still fight. Falls back to
/// fleeing when nobody can, which the battle then rejects as invalid.
fn switch_to_next_pokemon(battle: &Battle, side: Side) -> Action {
    battle
        .trainer(side)
        .all_pokemon()
        .iter()
        .position(|pokemon| !pokemon.has_fainted())
        .map_or(Action::Flee, |index| Action::SwitchPokemon { index })
}

/// Always tries to run. Sends out the next pokemon when the current one faints.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaredyCat;

impl Strategy for ScaredyCat {
    fn decide(&self, battle: &Battle, side: Side) -> BattleResult<Action> {
        if battle.trainer(side).current_pokemon()?.has_fainted() {
            return Ok(switch_to_next_pokemon(battle, side));
        }
        Ok(Action::Flee)
    }
}

/// A tougher opponent: hunts one coveted pokemon with its pokeballs and
/// otherwise attacks, preferring moves that are super effective.
#[derive(Debug, Clone)]
pub struct TeamRocket {
    coveted: String,
}

impl TeamRocket {
    pub fn new(coveted: impl Into<String>) -> Self {
        Self {
            coveted: coveted.into(),
        }
    }
}

impl Default for TeamRocket {
    fn default() -> Self {
        Self::new("pikachu")
    }
}

impl Strategy for TeamRocket {
    fn decide(&self, battle: &Battle, side: Side) -> BattleResult<Action> {
        let trainer = battle.trainer(side);
        let pokemon = trainer.current_pokemon()?;
        let enemy_pokemon = battle.trainer(side.opponent()).current_pokemon()?;

        // Wild battles aren't worth the trouble
        if pokemon.has_fainted() || !battle.is_trainer_battle() {
            return ScaredyCat.decide(battle, side);
        }

        if enemy_pokemon.name().eq_ignore_ascii_case(&self.coveted) {
            if let Some(entry) = trainer.inventory().iter().find(|entry| entry.item.is_pokeball()) {
                return Ok(Action::UseItem(entry.item.clone()));
            }
        }

        if !pokemon.has_moves_left() {
            return Ok(Action::Flee);
        }

        let defense_type = enemy_pokemon.element_type();
        let usable: Vec<_> = pokemon
            .move_info()
            .into_iter()
            .filter(|(_, uses)| *uses > 0)
            .map(|(move_, _)| move_)
            .collect();

        let choice = usable
            .iter()
            .find(|move_| move_.element_type().is_super_effective_against(defense_type))
            .or_else(|| usable.first())
            .cloned();

        Ok(choice.map_or(Action::Flee, Action::UseMove))
    }
}
