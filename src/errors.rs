use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while driving a battle.
///
/// Invalid or stale actions are not errors: the battle drops them without
/// touching any state. Only broken preconditions end up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    /// A trainer was asked for its current pokemon but has none
    #[error("trainer '{trainer}' has no pokemon available")]
    NoActivePokemon { trainer: String },
    /// `enact_turn` was called before the queue held the actions it needs
    #[error("action queue is not ready to resolve")]
    QueueNotReady,
}

/// Errors raised while loading rules or prefab data from disk
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed data: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("unknown element type '{0}'")]
    UnknownElementType(String),
    #[error("prefab team '{0}' not found")]
    TeamNotFound(String),
}

/// Type alias for Results using BattleError
pub type BattleResult<T> = Result<T, BattleError>;

/// Type alias for Results using DataError
pub type DataResult<T> = Result<T, DataError>;
