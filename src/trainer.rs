use crate::errors::{BattleError, BattleResult};
use crate::items::Item;
use crate::pokemon::Pokemon;
use crate::rules::current_rules;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub item: Item,
    pub count: u32,
}

/// A trainer: an ordered roster of pokemon and a bag of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trainer {
    name: String,
    // Insertion order is kept so "the first pokeball" is well defined
    inventory: Vec<InventoryEntry>,
    roster: Vec<Pokemon>,
    current_pokemon_index: usize,
}

impl Trainer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inventory: Vec::new(),
            roster: Vec::new(),
            current_pokemon_index: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inventory(&self) -> &[InventoryEntry] {
        &self.inventory
    }

    pub fn all_pokemon(&self) -> &[Pokemon] {
        &self.roster
    }

    pub fn all_pokemon_mut(&mut self) -> &mut [Pokemon] {
        &mut self.roster
    }

    pub fn current_pokemon_index(&self) -> usize {
        self.current_pokemon_index
    }

    /// The pokemon currently out, or `NoActivePokemon` for an empty roster
    pub fn current_pokemon(&self) -> BattleResult<&Pokemon> {
        self.roster
            .get(self.current_pokemon_index)
            .ok_or_else(|| self.no_active_pokemon())
    }

    pub fn current_pokemon_mut(&mut self) -> BattleResult<&mut Pokemon> {
        let index = self.current_pokemon_index;
        if index >= self.roster.len() {
            return Err(self.no_active_pokemon());
        }
        Ok(&mut self.roster[index])
    }

    fn no_active_pokemon(&self) -> BattleError {
        BattleError::NoActivePokemon {
            trainer: self.name.clone(),
        }
    }

    pub fn rest_all_pokemon(&mut self) {
        for pokemon in &mut self.roster {
            pokemon.rest();
        }
    }

    /// Room on the roster and not already a member
    pub fn can_add_pokemon(&self, pokemon: &Pokemon) -> bool {
        self.roster.len() < current_rules().maximum_roster_size
            && !self.roster.iter().any(|member| member.id() == pokemon.id())
    }

    /// Append to the roster. Callers check `can_add_pokemon` first.
    pub fn add_pokemon(&mut self, pokemon: Pokemon) {
        self.roster.push(pokemon);
    }

    /// Vacuously true for an empty roster
    pub fn all_pokemon_fainted(&self) -> bool {
        self.roster.iter().all(Pokemon::has_fainted)
    }

    pub fn can_switch_pokemon(&self, index: usize) -> bool {
        match self.roster.get(index) {
            None => false,
            Some(_) if index == self.current_pokemon_index => false,
            Some(pokemon) => !pokemon.has_fainted(),
        }
    }

    /// Callers check `can_switch_pokemon` first.
    pub fn switch_pokemon(&mut self, index: usize) {
        self.current_pokemon_index = index;
    }

    // === Inventory ===

    pub fn add_item(&mut self, item: Item, uses: u32) {
        match self.inventory.iter_mut().find(|entry| entry.item == item) {
            Some(entry) => entry.count += uses,
            None => self.inventory.push(InventoryEntry { item, count: uses }),
        }
    }

    pub fn item_count(&self, item: &Item) -> u32 {
        self.inventory
            .iter()
            .find(|entry| &entry.item == item)
            .map_or(0, |entry| entry.count)
    }

    pub fn has_item(&self, item: &Item) -> bool {
        self.item_count(item) > 0
    }

    /// Spend one of `item`, dropping the entry when the last one is gone.
    pub fn use_item(&mut self, item: &Item) {
        if let Some(entry) = self
            .inventory
            .iter_mut()
            .find(|entry| &entry.item == item && entry.count > 0)
        {
            entry.count -= 1;
        }
        self.inventory.retain(|entry| entry.count > 0);
    }
}

impl fmt::Display for Trainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trainer('{}')", self.name)
    }
}
