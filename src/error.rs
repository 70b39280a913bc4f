use thiserror::Error;

pub type AppResult<T> = Result<T, GameError>;

/// Failures of a single in-game command. All of them are recoverable: the session renders
/// them and keeps going.
#[derive(Debug, Error)]
pub enum GameError {
    /// No exit by that direction or name in the current room
    #[error("there is no exit '{exit}' in {room}")]
    NoExit { room: String, exit: String },

    /// Exit is locked; carries the exit's own locked text
    #[error("{0}")]
    LockedExit(String),

    #[error("there is no '{name}' in {room}")]
    NoObject { name: String, room: String },

    #[error("there is no item '{name}' in {room}")]
    NoItem { name: String, room: String },

    #[error("the {0} is already open")]
    ItemAlreadyOpen(String),

    #[error("the {0} cannot be opened")]
    ItemNotOpenable(String),

    /// Item is locked; carries the item's own locked text
    #[error("{0}")]
    LockedItem(String),

    #[error("you cannot take that")]
    ItemNotTakeable,

    /// Item refuses to be taken with its own text
    #[error("{0}")]
    ItemRefused(String),

    #[error("you cannot use that")]
    ItemNotUseable,

    #[error("you cannot use the {item} on the {target}")]
    CannotUseItem { item: String, target: String },

    #[error("invalid command: {0}")]
    InvalidCommand(String),

    #[error("unable to save game '{slot}': {source}")]
    SaveFailed {
        slot: String,
        #[source]
        source: SnapshotError,
    },

    #[error("unable to load game '{slot}': {source}")]
    LoadFailed {
        slot: String,
        #[source]
        source: SnapshotError,
    },
}

/// Failures reading, writing, decoding or validating a world snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("invalid slot name: {0:?}")]
    InvalidSlot(String),

    /// Structural problem in the world data (dangling room ids, duplicate room ids)
    #[error("world invalid: {0}")]
    WorldInvalid(String),
}
