use crate::rules::current_rules;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// The four stats of a creature. Every field is non-negative.
///
/// Values are never mutated in place: leveling and modifiers both hand back a
/// fresh `StatBlock`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatBlock {
    hit_chance: f64,
    max_health: u32,
    attack: u32,
    defense: u32,
}

/// A signed change to a `StatBlock`, as carried by buffs and debuffs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatModifier {
    pub hit_chance: f64,
    pub max_health: i32,
    pub attack: i32,
    pub defense: i32,
}

impl StatBlock {
    /// Negative inputs are clamped to zero.
    pub fn new(hit_chance: f64, max_health: u32, attack: u32, defense: u32) -> Self {
        Self {
            hit_chance: hit_chance.max(0.0),
            max_health,
            attack,
            defense,
        }
    }

    pub fn hit_chance(&self) -> f64 {
        self.hit_chance
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    pub fn defense(&self) -> u32 {
        self.defense
    }

    /// Grow the stats after a level-up using the growth factor currently in force.
    pub fn level_up(&self) -> StatBlock {
        self.grown_by(current_rules().level_up_stat_growth)
    }

    /// Hit chance resets to 1.0, everything else is scaled by `growth` and floored.
    pub fn grown_by(&self, growth: f64) -> StatBlock {
        let grow = |value: u32| (value as f64 * growth).floor().max(0.0) as u32;
        StatBlock {
            hit_chance: 1.0,
            max_health: grow(self.max_health),
            attack: grow(self.attack),
            defense: grow(self.defense),
        }
    }

    /// Add `modifier` field by field, clamping anything that would go negative to zero.
    pub fn apply_modifier(&self, modifier: &StatModifier) -> StatBlock {
        let shift = |value: u32, delta: i32| (value as i64 + delta as i64).max(0) as u32;
        StatBlock {
            hit_chance: (self.hit_chance + modifier.hit_chance).max(0.0),
            max_health: shift(self.max_health, modifier.max_health),
            attack: shift(self.attack, modifier.attack),
            defense: shift(self.defense, modifier.defense),
        }
    }
}

impl fmt::Display for StatBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StatBlock({}, {}, {}, {})",
            self.hit_chance, self.max_health, self.attack, self.defense
        )
    }
}

impl StatModifier {
    pub fn new(hit_chance: f64, max_health: i32, attack: i32, defense: i32) -> Self {
        Self {
            hit_chance,
            max_health,
            attack,
            defense,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == StatModifier::default()
    }
}

impl Add for StatModifier {
    type Output = StatModifier;

    fn add(self, rhs: StatModifier) -> StatModifier {
        StatModifier {
            hit_chance: self.hit_chance + rhs.hit_chance,
            max_health: self.max_health + rhs.max_health,
            attack: self.attack + rhs.attack,
            defense: self.defense + rhs.defense,
        }
    }
}

impl Neg for StatModifier {
    type Output = StatModifier;

    fn neg(self) -> StatModifier {
        StatModifier {
            hit_chance: -self.hit_chance,
            max_health: -self.max_health,
            attack: -self.attack,
            defense: -self.defense,
        }
    }
}

impl Sub for StatModifier {
    type Output = StatModifier;

    fn sub(self, rhs: StatModifier) -> StatModifier {
        self + (-rhs)
    }
}

impl AddAssign for StatModifier {
    fn add_assign(&mut self, rhs: StatModifier) {
        *self = *self + rhs;
    }
}

impl SubAssign for StatModifier {
    fn sub_assign(&mut self, rhs: StatModifier) {
        *self = *self - rhs;
    }
}
