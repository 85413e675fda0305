use serde::{Deserialize, Serialize};

pub use card::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use session::*;

mod card;
mod engine;
mod error;
mod generator;
mod session;

pub const MIN_TOTAL_CARDS: CardCount = 6;
pub const MAX_TOTAL_CARDS: CardCount = 24;
pub const MIN_BOMB_COUNT: CardCount = 1;
/// Bombs may make up at most half the deck.
pub const MAX_BOMB_RATIO: f64 = 0.5;

/// Player-chosen deck composition. Field names serialize in camelCase to
/// match the settings blob exchanged with the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    pub total_cards: CardCount,
    pub bomb_count: CardCount,
}

impl GameSettings {
    pub const fn new_unchecked(total_cards: CardCount, bomb_count: CardCount) -> Self {
        Self {
            total_cards,
            bomb_count,
        }
    }

    /// Builds settings that have passed every limit check.
    pub fn new(total_cards: CardCount, bomb_count: CardCount) -> Result<Self, ConfigError> {
        let settings = Self::new_unchecked(total_cards, bomb_count);
        settings.validate()?;
        Ok(settings)
    }

    pub const fn safe_count(&self) -> CardCount {
        self.total_cards.saturating_sub(self.bomb_count)
    }

    pub fn bomb_ratio(&self) -> f64 {
        f64::from(self.bomb_count) / f64::from(self.total_cards)
    }

    /// Checks the limits in order and reports the first violated rule.
    ///
    /// Pure; the engine never calls this. Validation belongs to the boundary
    /// that accepts user input.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_cards < MIN_TOTAL_CARDS || self.total_cards > MAX_TOTAL_CARDS {
            return Err(ConfigError::TotalCardsOutOfRange);
        }
        if self.bomb_count < MIN_BOMB_COUNT || self.bomb_count >= self.total_cards {
            return Err(ConfigError::BombCountOutOfRange);
        }
        if self.bomb_ratio() > MAX_BOMB_RATIO {
            return Err(ConfigError::BombRatioExceeded);
        }
        Ok(())
    }

    /// Every violated rule, for form display keyed by [`ConfigError::field`].
    pub fn violations(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.total_cards < MIN_TOTAL_CARDS || self.total_cards > MAX_TOTAL_CARDS {
            errors.push(ConfigError::TotalCardsOutOfRange);
        }
        if self.bomb_count < MIN_BOMB_COUNT || self.bomb_count >= self.total_cards {
            errors.push(ConfigError::BombCountOutOfRange);
        }
        if self.bomb_ratio() > MAX_BOMB_RATIO {
            errors.push(ConfigError::BombRatioExceeded);
        }
        errors
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::new_unchecked(12, 3)
    }
}

/// Ordered card sequence for one game, fixed in composition at start and
/// permuted once by the shuffle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub(crate) fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id() == id)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.get(id).is_some()
    }

    pub fn bomb_count(&self) -> CardCount {
        self.count_by(Card::is_bomb)
    }

    pub fn safe_count(&self) -> CardCount {
        self.count_by(|card| !card.is_bomb())
    }

    pub fn revealed_count(&self) -> CardCount {
        self.count_by(Card::is_revealed)
    }

    /// Ids of every bomb card in deck order, revealed or not.
    pub fn bomb_ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards
            .iter()
            .filter(|card| card.is_bomb())
            .map(|card| card.id())
    }

    pub(crate) fn reveal(&mut self, id: CardId) {
        if let Some(card) = self.cards.iter_mut().find(|card| card.id() == id) {
            card.reveal();
        }
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
    }

    fn count_by(&self, predicate: impl Fn(&Card) -> bool) -> CardCount {
        self.cards
            .iter()
            .filter(|card| predicate(card))
            .count()
            .try_into()
            .expect("deck size fits in a card count")
    }
}

/// Outcome of a single card selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    NoChange,
    Safe,
    Bomb,
    Won,
}

impl SelectOutcome {
    /// Whether this outcome could have caused an update to the game.
    pub const fn has_update(self) -> bool {
        use SelectOutcome::*;
        match self {
            NoChange => false,
            Safe => true,
            Bomb => true,
            Won => true,
        }
    }

    pub const fn ends_game(self) -> bool {
        matches!(self, Self::Bomb | Self::Won)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_pass_validation() {
        let settings = GameSettings::default();

        assert_eq!(settings, GameSettings::new_unchecked(12, 3));
        assert_eq!(settings.validate(), Ok(()));
        assert_eq!(settings.safe_count(), 9);
    }

    #[test]
    fn settings_within_limits_are_accepted() {
        for (total, bombs) in [(6, 1), (6, 3), (10, 5), (24, 1), (24, 12)] {
            let settings = GameSettings::new(total, bombs).unwrap();
            assert_eq!(settings.total_cards, total);
            assert_eq!(settings.bomb_count, bombs);
        }
    }

    #[test]
    fn total_cards_below_minimum_is_rejected() {
        assert_eq!(
            GameSettings::new(5, 1),
            Err(ConfigError::TotalCardsOutOfRange)
        );
    }

    #[test]
    fn total_cards_above_maximum_is_rejected() {
        assert_eq!(
            GameSettings::new(25, 3),
            Err(ConfigError::TotalCardsOutOfRange)
        );
    }

    #[test]
    fn bomb_count_must_leave_a_safe_card() {
        assert_eq!(
            GameSettings::new(10, 10),
            Err(ConfigError::BombCountOutOfRange)
        );
        assert_eq!(
            GameSettings::new(10, 0),
            Err(ConfigError::BombCountOutOfRange)
        );
    }

    #[test]
    fn bomb_ratio_above_half_is_rejected() {
        assert_eq!(
            GameSettings::new(10, 6),
            Err(ConfigError::BombRatioExceeded)
        );
    }

    #[test]
    fn bomb_ratio_of_exactly_half_is_accepted() {
        assert!(GameSettings::new(12, 6).is_ok());
    }

    #[test]
    fn checks_are_applied_in_order() {
        // Violates both the total range and the ratio rule; the range rule
        // is reported first.
        assert_eq!(
            GameSettings::new(30, 29),
            Err(ConfigError::TotalCardsOutOfRange)
        );
    }

    #[test]
    fn select_outcomes_classify_updates_and_endings() {
        use SelectOutcome::*;

        assert!(!NoChange.has_update());
        assert!(Safe.has_update() && !Safe.ends_game());
        assert!(Bomb.ends_game());
        assert!(Won.ends_game());
    }

    #[test]
    fn violations_accumulate_every_failing_rule() {
        let errors = GameSettings::new_unchecked(5, 5).violations();

        assert_eq!(
            errors,
            vec![
                ConfigError::TotalCardsOutOfRange,
                ConfigError::BombCountOutOfRange,
                ConfigError::BombRatioExceeded,
            ]
        );
        assert_eq!(errors[0].field(), SettingsField::TotalCards);
        assert_eq!(errors[1].field(), SettingsField::BombCount);
        assert!(GameSettings::default().violations().is_empty());
    }
}
