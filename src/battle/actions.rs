use crate::battle::chance::Chance;
use crate::battle::state::{Battle, Side};
use crate::battle::summary::ActionSummary;
use crate::errors::BattleResult;
use crate::items::{Item, ItemKind};
use crate::moves::{Move, MoveEffect};
use crate::pokemon::Pokemon;
use crate::rules::{current_rules, Messages};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Anything that takes up a side's turn in battle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Action {
    /// Try to run from the battle
    Flee,
    /// Send out the pokemon at `index` in the roster
    SwitchPokemon { index: usize },
    /// Use an item from the trainer's inventory
    UseItem(Item),
    /// Have the current pokemon use a move it knows
    UseMove(Move),
}

impl Action {
    /// Lower values resolve first within a round
    pub fn priority(&self) -> i32 {
        match self {
            Action::Flee | Action::SwitchPokemon { .. } | Action::UseItem(_) => {
                current_rules().default_action_priority
            }
            Action::UseMove(move_) => move_.priority(),
        }
    }

    pub fn is_valid(&self, battle: &Battle, side: Side) -> bool {
        if battle.is_over() {
            return false;
        }
        // Mid-round only the side still to act may go
        if battle.turn().is_some_and(|turn| turn != side) {
            return false;
        }

        let trainer = battle.trainer(side);
        let current_standing = trainer
            .current_pokemon()
            .is_ok_and(|pokemon| !pokemon.has_fainted());

        match self {
            Action::Flee => current_standing,
            Action::SwitchPokemon { index } => trainer.can_switch_pokemon(*index),
            Action::UseItem(item) => current_standing && trainer.has_item(item),
            Action::UseMove(move_) => {
                current_standing
                    && trainer
                        .current_pokemon()
                        .is_ok_and(|pokemon| pokemon.remaining_move_uses(move_) > 0)
            }
        }
    }

    /// Apply the action and narrate what happened. Only call on a valid action.
    pub fn apply<C: Chance + ?Sized>(
        &self,
        battle: &mut Battle,
        side: Side,
        chance: &mut C,
    ) -> BattleResult<ActionSummary> {
        match self {
            Action::Flee => Ok(apply_flee(battle)),
            Action::SwitchPokemon { index } => apply_switch(battle, side, *index),
            Action::UseItem(item) => apply_item(item, battle, side, chance),
            Action::UseMove(move_) => apply_move(move_, battle, side, chance),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Flee => write!(f, "Flee()"),
            Action::SwitchPokemon { index } => write!(f, "SwitchPokemon({})", index),
            Action::UseItem(item) => write!(f, "{}", item),
            Action::UseMove(move_) => write!(f, "{}", move_),
        }
    }
}

fn apply_flee(battle: &mut Battle) -> ActionSummary {
    let messages = current_rules().messages;
    if battle.is_trainer_battle() {
        ActionSummary::with_message(messages.flee_invalid)
    } else {
        battle.attempt_end_early();
        ActionSummary::with_message(messages.flee_success)
    }
}

fn apply_switch(battle: &mut Battle, side: Side, index: usize) -> BattleResult<ActionSummary> {
    let trainer = battle.trainer_mut(side);
    let mut summary = ActionSummary::new();

    let outgoing = trainer.current_pokemon()?;
    if !outgoing.has_fainted() {
        summary.add_message(format!("{}, return!", outgoing.name()));
    }

    trainer.switch_pokemon(index);
    let incoming = trainer.current_pokemon()?;
    summary.add_message(format!("{} switched to {}.", trainer.name(), incoming.name()));
    Ok(summary)
}

fn apply_item<C: Chance + ?Sized>(
    item: &Item,
    battle: &mut Battle,
    side: Side,
    chance: &mut C,
) -> BattleResult<ActionSummary> {
    // The item is spent whatever happens next
    battle.trainer_mut(side).use_item(item);

    match item.kind() {
        ItemKind::Pokeball { catch_chance } => throw_pokeball(*catch_chance, battle, side, chance),
        ItemKind::Food { health_restored } => {
            let pokemon = battle.trainer_mut(side).current_pokemon_mut()?;
            pokemon.modify_health(*health_restored as i64);
            Ok(ActionSummary::with_message(format!(
                "{} ate {}.",
                pokemon.name(),
                item.name()
            )))
        }
    }
}

fn throw_pokeball<C: Chance + ?Sized>(
    catch_chance: f64,
    battle: &mut Battle,
    side: Side,
    chance: &mut C,
) -> BattleResult<ActionSummary> {
    let messages = current_rules().messages;
    if battle.is_trainer_battle() {
        return Ok(ActionSummary::with_message(messages.pokeball_invalid_battle_type));
    }

    let wild_pokemon = battle.trainer(side.opponent()).current_pokemon()?.clone();
    if !chance.succeeds(catch_chance) {
        return Ok(ActionSummary::with_message(Messages::render(
            &messages.pokeball_unsuccessful_catch,
            wild_pokemon.name(),
        )));
    }

    let trainer = battle.trainer_mut(side);
    if !trainer.can_add_pokemon(&wild_pokemon) {
        return Ok(ActionSummary::with_message(Messages::render(
            &messages.pokeball_full_team,
            wild_pokemon.name(),
        )));
    }

    let name = wild_pokemon.name().to_string();
    tracing::debug!(trainer = %trainer.name(), pokemon = %name, "caught wild pokemon");
    trainer.add_pokemon(wild_pokemon);
    battle.attempt_end_early();
    Ok(ActionSummary::with_message(Messages::render(
        &messages.pokeball_successful_catch,
        &name,
    )))
}

fn apply_move<C: Chance + ?Sized>(
    move_: &Move,
    battle: &mut Battle,
    side: Side,
    chance: &mut C,
) -> BattleResult<ActionSummary> {
    let (trainer, enemy) = battle.trainers_mut(side);
    let pokemon = trainer.current_pokemon_mut()?;
    pokemon.reduce_move_count(move_);
    let mut summary = ActionSummary::with_message(format!("{} used {}.", pokemon.name(), move_.name()));

    // Effects on the user's side land before effects on the opponent
    if let MoveEffect::Buff {
        modification,
        rounds,
    } = move_.effect()
    {
        pokemon.add_stat_modifier(*modification, *rounds);
        summary.add_message(format!("{} was buffed for {} turns.", pokemon.name(), rounds));
    }

    let enemy_pokemon = enemy.current_pokemon_mut()?;
    match move_.effect() {
        MoveEffect::Buff { .. } => {}
        MoveEffect::Debuff {
            modification,
            rounds,
        } => {
            enemy_pokemon.add_stat_modifier(*modification, *rounds);
            summary.add_message(format!(
                "{} was debuffed for {} turns.",
                enemy_pokemon.name(),
                rounds
            ));
        }
        MoveEffect::Attack {
            base_damage,
            hit_chance,
        } => {
            summary.combine(attack(
                move_,
                *base_damage,
                *hit_chance,
                pokemon,
                enemy_pokemon,
                chance,
            ));
        }
    }
    Ok(summary)
}

fn attack<C: Chance + ?Sized>(
    move_: &Move,
    base_damage: u32,
    hit_chance: f64,
    attacker: &mut Pokemon,
    defender: &mut Pokemon,
    chance: &mut C,
) -> ActionSummary {
    let mut summary = ActionSummary::new();
    if !chance.succeeds(attacker.stats().hit_chance() * hit_chance) {
        summary.add_message(format!("{} missed!", attacker.name()));
        return summary;
    }

    let was_standing = !defender.has_fainted();
    let damage = calculate_damage(move_, base_damage, attacker, defender);
    defender.modify_health(-(damage as i64));

    if was_standing && defender.has_fainted() {
        summary.add_message(format!("{} has fainted.", defender.name()));
        let experience = defender.experience_on_death();
        attacker.gain_experience(experience);
        summary.add_message(format!("{} gained {} exp.", attacker.name(), experience));
    }
    summary
}

/// floor(base damage x type effectiveness x attack / (defense + 1)), using
/// effective stats on both sides.
pub fn calculate_damage(move_: &Move, base_damage: u32, attacker: &Pokemon, defender: &Pokemon) -> u32 {
    let effectiveness = move_.element_type().effectiveness(defender.element_type());
    let attack_stat = attacker.stats().attack() as f64;
    let defense_stat = defender.stats().defense() as f64;
    (base_damage as f64 * effectiveness * attack_stat / (defense_stat + 1.0)).floor() as u32
}
