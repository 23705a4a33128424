use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of the yes/no rolls behind hit checks and catch attempts.
pub trait Chance {
    /// True with the given probability. Anything at or above 1.0 always succeeds.
    fn succeeds(&mut self, probability: f64) -> bool;
}

/// Rolls backed by a real random number generator
#[derive(Debug, Clone)]
pub struct RandomChance {
    rng: StdRng,
}

impl RandomChance {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible rolls for replays and demos
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomChance {
    fn default() -> Self {
        Self::new()
    }
}

impl Chance for RandomChance {
    fn succeeds(&mut self, probability: f64) -> bool {
        self.rng.random::<f64>() < probability
    }
}

/// Replays a fixed list of outcomes, ignoring the probability asked for.
///
/// Every requested probability is recorded so tests can check what was rolled.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChance {
    outcomes: VecDeque<bool>,
    fallback: Option<bool>,
    requests: Vec<f64>,
}

impl ScriptedChance {
    pub fn new(outcomes: Vec<bool>) -> Self {
        Self {
            outcomes: outcomes.into(),
            fallback: None,
            requests: Vec::new(),
        }
    }

    /// Every roll gives `outcome`
    pub fn always(outcome: bool) -> Self {
        Self {
            outcomes: VecDeque::new(),
            fallback: Some(outcome),
            requests: Vec::new(),
        }
    }

    pub fn requests(&self) -> &[f64] {
        &self.requests
    }
}

impl Chance for ScriptedChance {
    fn succeeds(&mut self, probability: f64) -> bool {
        self.requests.push(probability);
        match self.outcomes.pop_front().or(self.fallback) {
            Some(outcome) => outcome,
            None => panic!(
                "ScriptedChance exhausted! Tried to roll against probability {}. Need more outcomes.",
                probability
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_chance_extremes() {
        let mut chance = RandomChance::seeded(7);
        for _ in 0..100 {
            assert!(chance.succeeds(1.0));
            assert!(chance.succeeds(1.5));
            assert!(!chance.succeeds(0.0));
        }
    }

    #[test]
    fn test_seeded_chance_is_reproducible() {
        let mut a = RandomChance::seeded(42);
        let mut b = RandomChance::seeded(42);
        let rolls_a: Vec<bool> = (0..32).map(|_| a.succeeds(0.5)).collect();
        let rolls_b: Vec<bool> = (0..32).map(|_| b.succeeds(0.5)).collect();
        assert_eq!(rolls_a, rolls_b);
    }

    #[test]
    fn test_scripted_chance_replays_then_falls_back() {
        let mut chance = ScriptedChance::new(vec![false, true]);
        assert!(!chance.succeeds(0.9));
        assert!(chance.succeeds(0.1));
        assert_eq!(chance.requests(), [0.9, 0.1]);

        let mut always = ScriptedChance::always(true);
        assert!(always.succeeds(0.0));
    }

    #[test]
    #[should_panic(expected = "ScriptedChance exhausted")]
    fn test_scripted_chance_panics_when_exhausted() {
        let mut chance = ScriptedChance::new(vec![]);
        chance.succeeds(0.5);
    }
}
