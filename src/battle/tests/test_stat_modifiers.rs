use crate::battle::actions::Action;
use crate::battle::chance::ScriptedChance;
use crate::battle::state::{Battle, Side};
use crate::battle::tests::common::{
    assert_ok, create_test_battle, leer, swords_dance, tackle, TestPokemonBuilder,
};
use crate::moves::Move;
use crate::stats::StatModifier;
use pretty_assertions::assert_eq;
use schema::ElementType;

fn harden() -> Move {
    Move::buff(
        "Harden",
        ElementType::Normal,
        30,
        -1,
        StatModifier::new(0.0, 0, 0, 51),
        1,
    )
}

fn create_modifier_battle() -> Battle {
    create_test_battle(
        TestPokemonBuilder::new("Pikachu", ElementType::Electric)
            .with_moves(vec![tackle(), harden(), leer(), swords_dance()])
            .build(),
        TestPokemonBuilder::new("Eevee", ElementType::Normal)
            .with_moves(vec![tackle(), swords_dance()])
            .build(),
    )
}

/// Plays a whole round and returns every message in order.
fn play_round(battle: &mut Battle, player: Action, enemy: Action) -> Vec<String> {
    let mut chance = ScriptedChance::always(true);
    assert!(battle.queue_action(player, Side::Player));
    assert!(battle.queue_action(enemy, Side::Enemy));
    let mut messages = assert_ok(battle.enact_turn(&mut chance)).messages().to_vec();
    messages.extend_from_slice(assert_ok(battle.enact_turn(&mut chance)).messages());
    messages
}

fn health(battle: &Battle, side: Side) -> u32 {
    assert_ok(battle.trainer(side).current_pokemon()).health()
}

#[test]
fn test_defense_buff_lasts_one_round() {
    let mut battle = create_modifier_battle();

    let messages = play_round(
        &mut battle,
        Action::UseMove(harden()),
        Action::UseMove(tackle()),
    );
    assert_eq!(
        messages,
        [
            "Pikachu used Harden.",
            "Pikachu was buffed for 1 turns.",
            "Eevee used Tackle.",
        ]
    );
    // floor(40 * 50 / (100 + 1))
    assert_eq!(health(&battle, Side::Player), 81);
    assert!(assert_ok(battle.trainer(Side::Player).current_pokemon())
        .stat_modifiers()
        .is_empty());

    play_round(
        &mut battle,
        Action::UseMove(tackle()),
        Action::UseMove(tackle()),
    );
    assert_eq!(health(&battle, Side::Player), 41);
}

#[test]
fn test_debuff_lowers_defense_until_it_expires() {
    let mut battle = create_modifier_battle();

    let messages = play_round(
        &mut battle,
        Action::UseMove(leer()),
        Action::UseMove(swords_dance()),
    );
    assert_eq!(
        messages,
        [
            "Pikachu used Leer.",
            "Eevee was debuffed for 2 turns.",
            "Eevee used Swords Dance.",
            "Eevee was buffed for 1 turns.",
        ]
    );
    let eevee = assert_ok(battle.trainer(Side::Enemy).current_pokemon());
    assert_eq!(eevee.stats().defense(), 29);
    assert_eq!(eevee.stats().attack(), 50);

    // floor(40 * 50 / (29 + 1))
    play_round(
        &mut battle,
        Action::UseMove(tackle()),
        Action::UseMove(swords_dance()),
    );
    assert_eq!(health(&battle, Side::Enemy), 34);

    let eevee = assert_ok(battle.trainer(Side::Enemy).current_pokemon());
    assert_eq!(eevee.stats().defense(), 49);
    assert!(eevee.stat_modifiers().is_empty());
}

#[test]
fn test_buff_applies_within_the_round() {
    let mut battle = create_modifier_battle();
    let mut chance = ScriptedChance::always(true);

    battle.queue_action(Action::UseMove(swords_dance()), Side::Player);
    battle.queue_action(Action::UseMove(tackle()), Side::Enemy);
    assert_ok(battle.enact_turn(&mut chance));

    let pikachu = assert_ok(battle.trainer(Side::Player).current_pokemon());
    assert_eq!(pikachu.stats().attack(), 75);
    assert_eq!(pikachu.stat_modifiers().len(), 1);

    assert_ok(battle.enact_turn(&mut chance));
    let pikachu = assert_ok(battle.trainer(Side::Player).current_pokemon());
    assert_eq!(pikachu.stats().attack(), 50);
}
