use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CardIdParseError;

/// Count type used for card totals, bomb counts, and ordinals.
pub type CardCount = u8;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardRole {
    Safe,
    Bomb,
}

impl CardRole {
    pub const fn is_bomb(self) -> bool {
        matches!(self, Self::Bomb)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Bomb => "bomb",
        }
    }
}

/// Card identity: role plus sequential ordinal, assigned at deal time.
/// Carries no information about the shuffled position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId {
    pub role: CardRole,
    pub ordinal: CardCount,
}

impl CardId {
    pub const fn new(role: CardRole, ordinal: CardCount) -> Self {
        Self { role, ordinal }
    }

    pub const fn safe(ordinal: CardCount) -> Self {
        Self::new(CardRole::Safe, ordinal)
    }

    pub const fn bomb(ordinal: CardCount) -> Self {
        Self::new(CardRole::Bomb, ordinal)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.role.as_str(), self.ordinal)
    }
}

impl FromStr for CardId {
    type Err = CardIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (role, ordinal) = s.split_once('-').ok_or(CardIdParseError)?;
        let role = match role {
            "safe" => CardRole::Safe,
            "bomb" => CardRole::Bomb,
            _ => return Err(CardIdParseError),
        };
        let ordinal = ordinal.parse().map_err(|_| CardIdParseError)?;
        Ok(Self::new(role, ordinal))
    }
}

/// A single card. The reveal flag flips false to true exactly once and never
/// resets except through a full game reset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    revealed: bool,
}

impl Card {
    pub(crate) const fn hidden(id: CardId) -> Self {
        Self {
            id,
            revealed: false,
        }
    }

    pub const fn id(&self) -> CardId {
        self.id
    }

    pub const fn is_bomb(&self) -> bool {
        self.id.role.is_bomb()
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
    }
}
