use thiserror::Error;

use crate::{MAX_BOMB_RATIO, MAX_TOTAL_CARDS, MIN_BOMB_COUNT, MIN_TOTAL_CARDS};

/// Settings form field an error belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SettingsField {
    TotalCards,
    BombCount,
}

impl SettingsField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TotalCards => "totalCards",
            Self::BombCount => "bombCount",
        }
    }
}

/// Raised only by settings validation, never by the engine. Messages are
/// display-ready.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("total cards must be between {} and {}", MIN_TOTAL_CARDS, MAX_TOTAL_CARDS)]
    TotalCardsOutOfRange,
    #[error(
        "bomb count must be at least {} and less than the total card count",
        MIN_BOMB_COUNT
    )]
    BombCountOutOfRange,
    #[error("bomb cards must not exceed {}% of the deck", MAX_BOMB_RATIO * 100.0)]
    BombRatioExceeded,
}

impl ConfigError {
    pub const fn field(self) -> SettingsField {
        match self {
            Self::TotalCardsOutOfRange => SettingsField::TotalCards,
            Self::BombCountOutOfRange => SettingsField::BombCount,
            Self::BombRatioExceeded => SettingsField::BombCount,
        }
    }
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("malformed card id, expected role-ordinal such as safe-0 or bomb-2")]
pub struct CardIdParseError;

/// Failure while loading the externally persisted settings blob. Either way
/// the caller redirects to the configuration step; the engine never sees the
/// value.
#[derive(Error, Debug)]
pub enum SettingsBlobError {
    #[error("malformed settings blob: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}
