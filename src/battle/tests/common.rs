use crate::battle::state::Battle;
use crate::errors::BattleResult;
use crate::items::Item;
use crate::moves::Move;
use crate::pokemon::Pokemon;
use crate::stats::{StatBlock, StatModifier};
use crate::trainer::Trainer;
use schema::ElementType;

/// A builder for creating test Pokemon with common defaults.
///
/// # Example
/// ```ignore
/// let pokemon = TestPokemonBuilder::new("Pikachu", ElementType::Electric)
///     .with_moves(vec![tackle()])
///     .with_stats(StatBlock::new(1.0, 100, 50, 50))
///     .build();
/// ```
pub struct TestPokemonBuilder {
    name: String,
    element_type: ElementType,
    level: u32,
    stats: StatBlock,
    moves: Vec<Move>,
    damage_taken: Option<u32>,
}

impl TestPokemonBuilder {
    /// Creates a new builder for a level 5 pokemon with sturdy, always-hitting stats.
    pub fn new(name: &str, element_type: ElementType) -> Self {
        Self {
            name: name.to_string(),
            element_type,
            level: 5,
            stats: StatBlock::new(1.0, 100, 50, 49),
            moves: vec![tackle()],
            damage_taken: None,
        }
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_stats(mut self, stats: StatBlock) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_moves(mut self, moves: Vec<Move>) -> Self {
        self.moves = moves;
        self
    }

    /// Knock off this much health after building.
    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage_taken = Some(damage);
        self
    }

    /// Builds a pokemon that has already fainted.
    pub fn fainted(self) -> Self {
        self.with_damage(u32::MAX)
    }

    pub fn build(self) -> Pokemon {
        let mut pokemon = Pokemon::new(self.name, self.stats, self.element_type, self.moves, self.level);
        if let Some(damage) = self.damage_taken {
            pokemon.modify_health(-(damage as i64));
        }
        pokemon
    }
}

/// A plain 40 power normal move at speed 0.
pub fn tackle() -> Move {
    Move::attack("Tackle", ElementType::Normal, 35, 0, 40, 1.0)
}

/// A fast move that resolves before `tackle`.
pub fn quick_attack() -> Move {
    Move::attack("Quick Attack", ElementType::Normal, 30, -1, 20, 1.0)
}

pub fn swords_dance() -> Move {
    Move::buff(
        "Swords Dance",
        ElementType::Normal,
        20,
        0,
        StatModifier::new(0.0, 0, 25, 0),
        1,
    )
}

pub fn leer() -> Move {
    Move::debuff(
        "Leer",
        ElementType::Normal,
        30,
        0,
        StatModifier::new(0.0, 0, 0, -20),
        2,
    )
}

pub fn pokeball(catch_chance: f64) -> Item {
    Item::pokeball("Pokeball", catch_chance)
}

pub fn berry() -> Item {
    Item::food("Oran Berry", 30)
}

pub fn create_test_trainer(name: &str, team: Vec<Pokemon>) -> Trainer {
    let mut trainer = Trainer::new(name);
    for pokemon in team {
        trainer.add_pokemon(pokemon);
    }
    trainer
}

/// Creates a standard 1v1 trainer battle.
pub fn create_test_battle(player_pokemon: Pokemon, enemy_pokemon: Pokemon) -> Battle {
    let player = create_test_trainer("Ash", vec![player_pokemon]);
    let enemy = create_test_trainer("Gary", vec![enemy_pokemon]);
    assert_ok(Battle::new(player, enemy, true))
}

/// Helper function to assert that a Result is Ok and return the value.
/// Provides clear error messages in tests when functions unexpectedly fail.
pub fn assert_ok<T>(result: BattleResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}
