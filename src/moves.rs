use crate::rules::current_rules;
use crate::stats::StatModifier;
use schema::ElementType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A learnable move. Two moves are the same move when every field matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Move {
    name: String,
    element_type: ElementType,
    max_uses: u32,
    /// Lower is faster
    speed: i32,
    effect: MoveEffect,
}

/// What a move does once it has been used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MoveEffect {
    /// Damages the opposing creature if it hits
    Attack { base_damage: u32, hit_chance: f64 },
    /// Timed stat change on the user's creature
    Buff { modification: StatModifier, rounds: u32 },
    /// Timed stat change on the opposing creature
    Debuff { modification: StatModifier, rounds: u32 },
}

impl Move {
    pub fn new(
        name: impl Into<String>,
        element_type: ElementType,
        max_uses: u32,
        speed: i32,
        effect: MoveEffect,
    ) -> Self {
        Self {
            name: name.into(),
            element_type,
            max_uses,
            speed,
            effect,
        }
    }

    pub fn attack(
        name: impl Into<String>,
        element_type: ElementType,
        max_uses: u32,
        speed: i32,
        base_damage: u32,
        hit_chance: f64,
    ) -> Self {
        Self::new(
            name,
            element_type,
            max_uses,
            speed,
            MoveEffect::Attack {
                base_damage,
                hit_chance,
            },
        )
    }

    pub fn buff(
        name: impl Into<String>,
        element_type: ElementType,
        max_uses: u32,
        speed: i32,
        modification: StatModifier,
        rounds: u32,
    ) -> Self {
        Self::new(
            name,
            element_type,
            max_uses,
            speed,
            MoveEffect::Buff {
                modification,
                rounds,
            },
        )
    }

    pub fn debuff(
        name: impl Into<String>,
        element_type: ElementType,
        max_uses: u32,
        speed: i32,
        modification: StatModifier,
        rounds: u32,
    ) -> Self {
        Self::new(
            name,
            element_type,
            max_uses,
            speed,
            MoveEffect::Debuff {
                modification,
                rounds,
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    pub fn max_uses(&self) -> u32 {
        self.max_uses
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn effect(&self) -> &MoveEffect {
        &self.effect
    }

    /// Moves resolve after flee, switch and items, ordered among themselves by speed.
    pub fn priority(&self) -> i32 {
        current_rules().speed_based_action_priority + self.speed
    }

    fn kind(&self) -> &'static str {
        match self.effect {
            MoveEffect::Attack { .. } => "Attack",
            MoveEffect::Buff { .. } => "Buff",
            MoveEffect::Debuff { .. } => "Debuff",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}('{}', '{}', {})",
            self.kind(),
            self.name,
            self.element_type,
            self.max_uses
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_is_speed_scaled() {
        let quick = Move::attack("Quick Attack", ElementType::Normal, 30, 1, 20, 1.0);
        let slow = Move::attack("Hyper Beam", ElementType::Normal, 5, 9, 150, 0.9);
        let base = current_rules().speed_based_action_priority;

        assert_eq!(quick.priority(), base + 1);
        assert_eq!(slow.priority(), base + 9);
        assert!(quick.priority() < slow.priority());
    }

    #[test]
    fn test_display() {
        let growl = Move::debuff(
            "Growl",
            ElementType::Normal,
            40,
            0,
            StatModifier::new(0.0, 0, -5, 0),
            2,
        );
        assert_eq!(growl.to_string(), "Debuff('Growl', 'Normal', 40)");
    }
}
