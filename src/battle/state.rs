use crate::battle::actions::Action;
use crate::battle::chance::Chance;
use crate::battle::summary::ActionSummary;
use crate::errors::{BattleError, BattleResult};
use crate::pokemon::Pokemon;
use crate::trainer::Trainer;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;

/// One of the two sides of a battle
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Enemy => write!(f, "enemy"),
        }
    }
}

/// A battle between a player and an enemy, stepped one action at a time.
///
/// Each round both sides queue one action. The first `enact_turn` of a round
/// resolves whichever queued action has the lower priority value (slot 0 wins
/// ties) and hands the turn to the other side; the second resolves the
/// remaining action and runs end-of-round bookkeeping on every pokemon.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Battle {
    player: Trainer,
    enemy: Trainer,
    is_trainer_battle: bool,
    /// `None` at round start, otherwise the side still to act this round
    turn: Option<Side>,
    action_queue: Vec<(Action, Side)>,
    /// Latched by `is_over`, so a revived roster can't reopen the battle
    over: Cell<bool>,
}

impl Battle {
    /// Both trainers must bring at least one pokemon.
    pub fn new(player: Trainer, enemy: Trainer, is_trainer_battle: bool) -> BattleResult<Self> {
        player.current_pokemon()?;
        enemy.current_pokemon()?;
        Ok(Self {
            player,
            enemy,
            is_trainer_battle,
            turn: None,
            action_queue: Vec::with_capacity(2),
            over: Cell::new(false),
        })
    }

    pub fn turn(&self) -> Option<Side> {
        self.turn
    }

    pub fn trainer(&self, side: Side) -> &Trainer {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    pub fn trainer_mut(&mut self, side: Side) -> &mut Trainer {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    /// Mutable access to `side`'s trainer and its opponent at the same time
    pub fn trainers_mut(&mut self, side: Side) -> (&mut Trainer, &mut Trainer) {
        match side {
            Side::Player => (&mut self.player, &mut self.enemy),
            Side::Enemy => (&mut self.enemy, &mut self.player),
        }
    }

    pub fn into_trainers(self) -> (Trainer, Trainer) {
        (self.player, self.enemy)
    }

    pub fn is_trainer_battle(&self) -> bool {
        self.is_trainer_battle
    }

    /// Ends wild battles immediately. Trainer battles can't be cut short.
    pub fn attempt_end_early(&mut self) {
        if !self.is_trainer_battle {
            self.over.set(true);
            tracing::info!("battle ended early");
        }
    }

    /// Over once someone ended it early or either roster has fully fainted.
    /// Stays over from the first time that is observed.
    pub fn is_over(&self) -> bool {
        if self.over.get() {
            return true;
        }
        let player_fainted = self.player.all_pokemon_fainted();
        let enemy_fainted = self.enemy.all_pokemon_fainted();
        if player_fainted || enemy_fainted {
            self.over.set(true);
            tracing::info!(player_fainted, enemy_fainted, "battle over");
        }
        self.over.get()
    }

    // === Action queue ===

    pub fn is_action_queue_full(&self) -> bool {
        self.action_queue.len() == 2
    }

    pub fn is_action_queue_empty(&self) -> bool {
        self.action_queue.is_empty()
    }

    pub fn trainer_has_action_queued(&self, side: Side) -> bool {
        self.action_queue.iter().any(|(_, queued)| *queued == side)
    }

    pub fn queued_actions(&self) -> &[(Action, Side)] {
        &self.action_queue
    }

    /// Ready when both sides queued at round start, or when the side still to
    /// act this round has queued.
    pub fn is_ready(&self) -> bool {
        match self.turn {
            None => self.is_action_queue_full(),
            Some(side) => self.trainer_has_action_queued(side),
        }
    }

    /// Queue `action` for `side`. Silently ignored (returns false) if that side
    /// already has an action queued, the queue is ready, or the action is invalid.
    pub fn queue_action(&mut self, action: Action, side: Side) -> bool {
        if self.trainer_has_action_queued(side) {
            tracing::debug!(%side, %action, "dropped: side already queued");
            return false;
        }
        if self.is_ready() {
            tracing::debug!(%side, %action, "dropped: queue is ready");
            return false;
        }
        if !action.is_valid(self, side) {
            tracing::debug!(%side, %action, "dropped: invalid action");
            return false;
        }
        self.action_queue.push((action, side));
        true
    }

    /// Resolve exactly one queued action and return its narration.
    ///
    /// An action that stopped being valid since it was queued is discarded and
    /// yields an empty summary.
    pub fn enact_turn<C: Chance + ?Sized>(&mut self, chance: &mut C) -> BattleResult<ActionSummary> {
        if !self.is_ready() {
            return Err(BattleError::QueueNotReady);
        }

        let summary = match self.turn {
            None => {
                let first = if self.action_queue[0].0.priority() <= self.action_queue[1].0.priority() {
                    0
                } else {
                    1
                };
                let (action, side) = self.action_queue.remove(first);
                let summary = self.resolve(&action, side, chance)?;
                self.turn = Some(side.opponent());
                summary
            }
            Some(turn) => {
                let position = self
                    .action_queue
                    .iter()
                    .position(|(_, side)| *side == turn)
                    .ok_or(BattleError::QueueNotReady)?;
                let (action, side) = self.action_queue.remove(position);
                let summary = self.resolve(&action, side, chance)?;
                self.turn = None;
                self.post_round_actions();
                summary
            }
        };

        self.is_over();
        Ok(summary)
    }

    fn resolve<C: Chance + ?Sized>(
        &mut self,
        action: &Action,
        side: Side,
        chance: &mut C,
    ) -> BattleResult<ActionSummary> {
        if !action.is_valid(self, side) {
            tracing::debug!(%side, %action, "discarded stale action");
            return Ok(ActionSummary::new());
        }
        tracing::debug!(%side, %action, "resolving action");
        action.apply(self, side, chance)
    }

    fn post_round_actions(&mut self) {
        for trainer in [&mut self.player, &mut self.enemy] {
            for pokemon in trainer.all_pokemon_mut() {
                pokemon.post_round_actions();
            }
        }
    }
}

/// Start a wild battle: the wild pokemon fights alone for a nameless trainer.
pub fn create_encounter(trainer: Trainer, wild_pokemon: Pokemon) -> BattleResult<Battle> {
    let mut enemy = Trainer::new("");
    enemy.add_pokemon(wild_pokemon);
    Battle::new(trainer, enemy, false)
}
