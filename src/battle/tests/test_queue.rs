use crate::battle::actions::Action;
use crate::battle::chance::ScriptedChance;
use crate::battle::state::Side;
use crate::battle::tests::common::{
    assert_ok, berry, create_test_battle, quick_attack, tackle, TestPokemonBuilder,
};
use rstest::rstest;
use schema::ElementType;

fn battle() -> crate::battle::state::Battle {
    create_test_battle(
        TestPokemonBuilder::new("Pikachu", ElementType::Electric).build(),
        TestPokemonBuilder::new("Rattata", ElementType::Normal).build(),
    )
}

#[test]
fn test_second_action_from_same_side_is_ignored() {
    let mut battle = battle();
    assert!(battle.queue_action(Action::UseMove(tackle()), Side::Player));
    assert!(!battle.queue_action(Action::Flee, Side::Player));

    assert_eq!(battle.queued_actions(), [(Action::UseMove(tackle()), Side::Player)]);
    assert!(battle.trainer_has_action_queued(Side::Player));
    assert!(!battle.trainer_has_action_queued(Side::Enemy));
}

#[test]
fn test_side_that_acted_cannot_queue_mid_round() {
    let mut battle = battle();
    let mut chance = ScriptedChance::always(true);
    battle.queue_action(Action::UseMove(tackle()), Side::Player);
    battle.queue_action(Action::UseMove(tackle()), Side::Enemy);
    assert!(battle.is_action_queue_full());

    assert_ok(battle.enact_turn(&mut chance));
    assert_eq!(battle.turn(), Some(Side::Enemy));

    assert!(!battle.queue_action(Action::Flee, Side::Player));
    assert_eq!(battle.queued_actions().len(), 1);
}

#[rstest]
#[case(Action::UseMove(quick_attack()), "move not learned")]
#[case(Action::SwitchPokemon { index: 0 }, "switch to the pokemon already out")]
#[case(Action::SwitchPokemon { index: 4 }, "switch out of range")]
#[case(Action::UseItem(berry()), "item not in inventory")]
fn test_invalid_actions_are_dropped(#[case] action: Action, #[case] description: &str) {
    let mut battle = battle();
    assert!(!action.is_valid(&battle, Side::Player), "{}", description);
    assert!(!battle.queue_action(action, Side::Player), "{}", description);
    assert!(battle.is_action_queue_empty(), "{}", description);
}

#[test]
fn test_nothing_is_queued_once_the_battle_is_over() {
    let mut battle = battle();
    battle
        .trainer_mut(Side::Enemy)
        .current_pokemon_mut()
        .unwrap()
        .modify_health(-1000);

    assert!(battle.is_over());
    assert!(!battle.queue_action(Action::UseMove(tackle()), Side::Player));
    assert!(battle.is_action_queue_empty());
}

#[test]
fn test_priorities() {
    let rules = crate::rules::current_rules();
    assert_eq!(Action::Flee.priority(), rules.default_action_priority);
    assert_eq!(
        Action::SwitchPokemon { index: 1 }.priority(),
        rules.default_action_priority
    );
    assert_eq!(Action::UseItem(berry()).priority(), rules.default_action_priority);
    assert_eq!(
        Action::UseMove(tackle()).priority(),
        rules.speed_based_action_priority
    );
    assert_eq!(
        Action::UseMove(quick_attack()).priority(),
        rules.speed_based_action_priority - 1
    );
}
