use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Invalid tier: {0} (expected 1..=15)")]
    InvalidTier(i64),

    #[error("Unknown rule field: {0}")]
    UnknownRule(String),

    #[error("Unknown counter: {0}")]
    UnknownCounter(String),

    #[error("Roster is full ({max} combatants)")]
    RosterFull { max: usize },

    #[error("Cannot remove the last remaining combatant")]
    LastCombatant,

    #[error("Combatant index {index} out of range (roster has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
