use crate::errors::{DataError, DataResult};
use crate::items::Item;
use crate::moves::{Move, MoveEffect};
use crate::pokemon::Pokemon;
use crate::stats::StatBlock;
use crate::trainer::Trainer;
use schema::ElementType;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const TEAMS_RON: &str = include_str!("../data/teams.ron");

/// A predefined trainer configuration for demo battles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefabTeam {
    pub name: String,
    pub description: String,
    pub pokemon: Vec<PrefabPokemon>,
    #[serde(default)]
    pub inventory: Vec<PrefabItem>,
}

/// A predefined pokemon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefabPokemon {
    pub name: String,
    pub element_type: String,
    pub level: u32,
    pub stats: StatBlock,
    pub moves: Vec<PrefabMove>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefabMove {
    pub name: String,
    pub element_type: String,
    pub max_uses: u32,
    pub speed: i32,
    pub effect: MoveEffect,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefabItem {
    pub item: Item,
    pub count: u32,
}

fn parse_element_type(name: &str) -> DataResult<ElementType> {
    ElementType::from_str(name).map_err(|_| DataError::UnknownElementType(name.to_string()))
}

impl PrefabMove {
    pub fn build(&self) -> DataResult<Move> {
        Ok(Move::new(
            self.name.clone(),
            parse_element_type(&self.element_type)?,
            self.max_uses,
            self.speed,
            self.effect.clone(),
        ))
    }
}

impl PrefabPokemon {
    pub fn build(&self) -> DataResult<Pokemon> {
        let moves = self
            .moves
            .iter()
            .map(PrefabMove::build)
            .collect::<DataResult<Vec<_>>>()?;
        Ok(Pokemon::new(
            self.name.clone(),
            self.stats,
            parse_element_type(&self.element_type)?,
            moves,
            self.level,
        ))
    }
}

impl PrefabTeam {
    /// Build a fresh trainer. Each call creates new pokemon identities.
    pub fn build_trainer(&self) -> DataResult<Trainer> {
        let mut trainer = Trainer::new(self.name.clone());
        for prefab in &self.pokemon {
            let pokemon = prefab.build()?;
            if trainer.can_add_pokemon(&pokemon) {
                trainer.add_pokemon(pokemon);
            } else {
                tracing::warn!(team = %self.name, pokemon = %prefab.name, "roster full, skipping");
            }
        }
        for entry in &self.inventory {
            trainer.add_item(entry.item.clone(), entry.count);
        }
        Ok(trainer)
    }
}

/// Parse prefab teams from RON source
pub fn parse_prefab_teams(source: &str) -> DataResult<Vec<PrefabTeam>> {
    Ok(ron::from_str(source)?)
}

/// Get all bundled prefab teams
pub fn get_prefab_teams() -> DataResult<Vec<PrefabTeam>> {
    parse_prefab_teams(TEAMS_RON)
}

/// Build a trainer for every bundled prefab team
pub fn load_prefab_trainers() -> DataResult<Vec<Trainer>> {
    get_prefab_teams()?
        .iter()
        .map(PrefabTeam::build_trainer)
        .collect()
}

/// Build the bundled prefab trainer called `name` (case-insensitive)
pub fn prefab_trainer(name: &str) -> DataResult<Trainer> {
    get_prefab_teams()?
        .iter()
        .find(|team| team.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| DataError::TeamNotFound(name.to_string()))?
        .build_trainer()
}
