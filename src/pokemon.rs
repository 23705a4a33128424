use crate::moves::Move;
use crate::rules::current_rules;
use crate::stats::{StatBlock, StatModifier};
use schema::ElementType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_POKEMON_ID: AtomicU64 = AtomicU64::new(1);

/// Roster identity of a pokemon. Clones share the id, so the same wild pokemon
/// can't be added to a roster twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PokemonId(u64);

impl PokemonId {
    fn next() -> Self {
        PokemonId(NEXT_POKEMON_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveInstance {
    pub move_: Move,
    pub uses: u32,
}

/// A stat change that wears off after a number of completed rounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedModifier {
    pub id: u64,
    pub rounds_remaining: u32,
    pub modifier: StatModifier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    id: PokemonId,
    name: String,
    stats: StatBlock,
    element_type: ElementType,
    level: u32,
    experience: u64,
    health: u32,
    moves: Vec<MoveInstance>,
    stat_modifiers: Vec<TimedModifier>,
    combined_modifier: StatModifier,
    next_modifier_id: u64,
}

impl Pokemon {
    /// Create a pokemon at full health.
    ///
    /// Moves beyond the slot limit, and repeats, are skipped.
    pub fn new(
        name: impl Into<String>,
        stats: StatBlock,
        element_type: ElementType,
        moves: Vec<Move>,
        level: u32,
    ) -> Self {
        let level = level.max(1);
        let mut pokemon = Pokemon {
            id: PokemonId::next(),
            name: name.into(),
            stats,
            element_type,
            level,
            experience: (level as u64).pow(3),
            health: stats.max_health(),
            moves: Vec::new(),
            stat_modifiers: Vec::new(),
            combined_modifier: StatModifier::default(),
            next_modifier_id: 0,
        };
        for move_ in moves {
            if pokemon.can_learn_move(&move_) {
                pokemon.learn_move(move_);
            }
        }
        pokemon
    }

    pub fn id(&self) -> PokemonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    /// Max health before stat modifiers are applied
    pub fn max_health(&self) -> u32 {
        self.stats.max_health()
    }

    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u64 {
        self.experience
    }

    /// Total experience needed to reach the next level
    pub fn next_level_experience_requirement(&self) -> u64 {
        (self.level as u64 + 1).pow(3)
    }

    pub fn stat_modifiers(&self) -> &[TimedModifier] {
        &self.stat_modifiers
    }

    pub fn combined_modifier(&self) -> StatModifier {
        self.combined_modifier
    }

    /// Base stats with every active modifier applied
    pub fn stats(&self) -> StatBlock {
        self.stats.apply_modifier(&self.combined_modifier)
    }

    pub fn has_fainted(&self) -> bool {
        self.health == 0
    }

    /// Shift health by `change`, clamped to `0..=effective max health`.
    /// A change of 0 just re-clamps after the max has moved.
    pub fn modify_health(&mut self, change: i64) {
        let max_health = self.stats().max_health() as i64;
        self.health = (self.health as i64 + change).clamp(0, max_health) as u32;
    }

    /// Add experience, levelling up as many times as the new total allows.
    pub fn gain_experience(&mut self, experience: u64) {
        self.experience += experience;
        while self.experience >= self.next_level_experience_requirement() {
            self.level_up();
        }
    }

    /// Grow the stats by one level. Current health rises by exactly as much as
    /// max health did, so damage taken is carried over.
    pub fn level_up(&mut self) {
        let old_max_health = self.max_health();
        self.stats = self.stats.level_up();
        let max_health_increment = self.max_health() as i64 - old_max_health as i64;
        self.modify_health(max_health_increment);
        self.level += 1;
        tracing::debug!(pokemon = %self.name, level = self.level, "level up");
    }

    /// Experience awarded to whoever knocks this pokemon out
    pub fn experience_on_death(&self) -> u64 {
        200 * self.level as u64 / 7
    }

    // === Moves ===

    /// Remaining uses of `move_`, or 0 if it isn't known
    pub fn remaining_move_uses(&self, move_: &Move) -> u32 {
        self.moves
            .iter()
            .find(|instance| &instance.move_ == move_)
            .map_or(0, |instance| instance.uses)
    }

    /// Known moves and their remaining uses, sorted by move name
    pub fn move_info(&self) -> Vec<(Move, u32)> {
        let mut info: Vec<(Move, u32)> = self
            .moves
            .iter()
            .map(|instance| (instance.move_.clone(), instance.uses))
            .collect();
        info.sort_by(|(a, _), (b, _)| a.name().cmp(b.name()));
        info
    }

    pub fn knows_move(&self, move_: &Move) -> bool {
        self.moves.iter().any(|instance| &instance.move_ == move_)
    }

    pub fn can_learn_move(&self, move_: &Move) -> bool {
        self.moves.len() < current_rules().maximum_move_slots && !self.knows_move(move_)
    }

    /// Learn `move_` with full uses. Callers check `can_learn_move` first.
    pub fn learn_move(&mut self, move_: Move) {
        let uses = move_.max_uses();
        self.moves.push(MoveInstance { move_, uses });
    }

    pub fn forget_move(&mut self, move_: &Move) {
        self.moves.retain(|instance| &instance.move_ != move_);
    }

    /// Any learned move at all. Moves are forgotten when their uses run out,
    /// so every known move has uses left.
    pub fn has_moves_left(&self) -> bool {
        !self.moves.is_empty()
    }

    /// Spend one use of `move_`, forgetting it once the last use is gone.
    pub fn reduce_move_count(&mut self, move_: &Move) {
        let Some(instance) = self
            .moves
            .iter_mut()
            .find(|instance| &instance.move_ == move_ && instance.uses > 0)
        else {
            return;
        };
        instance.uses -= 1;
        if instance.uses == 0 {
            self.forget_move(move_);
        }
    }

    // === Stat modifiers ===

    /// Apply `modifier` for `rounds` completed rounds. Every call is a separate
    /// entry, even when the values repeat.
    pub fn add_stat_modifier(&mut self, modifier: StatModifier, rounds: u32) {
        let id = self.next_modifier_id;
        self.next_modifier_id += 1;
        self.stat_modifiers.push(TimedModifier {
            id,
            rounds_remaining: rounds,
            modifier,
        });
        self.combined_modifier += modifier;
        self.modify_health(0);
    }

    /// Count every active modifier down by one round and drop the expired ones.
    pub fn post_round_actions(&mut self) {
        let mut expired = StatModifier::default();
        self.stat_modifiers.retain_mut(|timed| {
            timed.rounds_remaining = timed.rounds_remaining.saturating_sub(1);
            if timed.rounds_remaining == 0 {
                expired += timed.modifier;
                false
            } else {
                true
            }
        });
        if !expired.is_zero() {
            tracing::debug!(pokemon = %self.name, ?expired, "stat modifiers expired");
        }
        self.combined_modifier -= expired;
        self.modify_health(0);
    }

    /// Full heal, no modifiers, every move back to full uses.
    pub fn rest(&mut self) {
        self.stat_modifiers.clear();
        self.combined_modifier = StatModifier::default();
        self.health = self.max_health();
        for instance in &mut self.moves {
            instance.uses = instance.move_.max_uses();
        }
    }
}

impl fmt::Display for Pokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (lv{})", self.name, self.level)
    }
}
