use crate::*;
pub use random::*;

mod random;

/// Deck construction strategy, injected into [`GameEngine::start`] so the
/// permutation source is explicit and reproducible.
pub trait DeckGenerator {
    fn generate(self, settings: GameSettings) -> Deck;
}
