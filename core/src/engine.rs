use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Idle,
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Idle
    }
}

/// Selection order. Bounded by [`MAX_TOTAL_CARDS`], so it stays inline.
type SelectionList = SmallVec<[CardId; MAX_TOTAL_CARDS as usize]>;

/// Transition command, applied one at a time through [`GameEngine::dispatch`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    SetSettings(GameSettings),
    Start { seed: u64 },
    Select(CardId),
    Reset,
}

/// Derived end-of-game summary. `bomb_cards` lists every bomb in the deck,
/// revealed or not: full composition is exposed once the game ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub won: bool,
    pub selected_cards: Vec<CardId>,
    pub bomb_cards: Vec<CardId>,
    pub total_moves: u32,
}

/// Owns the authoritative game state and applies transitions.
///
/// Every transition is total: illegal selections are no-ops, never errors.
/// The engine performs no settings validation; callers validate at the input
/// boundary before handing settings over. One writer at a time; observers
/// read through the accessors or clone a snapshot between commands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEngine {
    settings: GameSettings,
    deck: Deck,
    selected: SelectionList,
    remaining_safe: CardCount,
    status: GameStatus,
    triggered_bomb: Option<CardId>,
}

impl GameEngine {
    pub fn new(settings: GameSettings) -> Self {
        Self {
            settings,
            deck: Deck::default(),
            selected: SelectionList::new(),
            remaining_safe: settings.safe_count(),
            status: GameStatus::Idle,
            triggered_bomb: None,
        }
    }

    pub const fn status(&self) -> GameStatus {
        self.status
    }

    pub const fn settings(&self) -> GameSettings {
        self.settings
    }

    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.get(id)
    }

    /// Ids of revealed cards in selection order.
    pub fn selected_cards(&self) -> &[CardId] {
        &self.selected
    }

    pub const fn remaining_safe_cards(&self) -> CardCount {
        self.remaining_safe
    }

    /// The bomb that ended a lost game.
    pub const fn triggered_bomb(&self) -> Option<CardId> {
        self.triggered_bomb
    }

    pub fn is_playing(&self) -> bool {
        self.status.is_playing()
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::SetSettings(settings) => self.set_settings(settings),
            Command::Start { seed } => self.start(RandomDeckGenerator::new(seed)),
            Command::Select(id) => {
                self.select_card(id);
            }
            Command::Reset => self.reset(),
        }
    }

    /// Installs settings and recomputes the safe-card preview. Legal in any
    /// state; the active deck, if any, is untouched until the next start.
    pub fn set_settings(&mut self, settings: GameSettings) {
        self.settings = settings;
        self.remaining_safe = settings.safe_count();
    }

    /// (Re)starts a game from the current settings with a freshly shuffled
    /// deck. Legal in any state.
    pub fn start(&mut self, generator: impl DeckGenerator) {
        self.deck = generator.generate(self.settings);
        self.selected.clear();
        self.remaining_safe = self.settings.safe_count();
        self.status = GameStatus::Playing;
        self.triggered_bomb = None;
        log::debug!(
            "game started, {} cards with {} bombs",
            self.deck.len(),
            self.settings.bomb_count
        );
    }

    /// Reveals one card. No-op outside `Playing`, for unknown ids, and for
    /// already revealed cards.
    pub fn select_card(&mut self, id: CardId) -> SelectOutcome {
        use SelectOutcome::*;

        if !self.status.is_playing() {
            log::debug!("select ignored, game is not in progress: {:?}", self.status);
            return NoChange;
        }

        let Some(card) = self.deck.get(id).copied() else {
            log::debug!("select ignored, no card with id {id}");
            return NoChange;
        };

        if card.is_revealed() {
            log::debug!("select ignored, card {id} is already revealed");
            return NoChange;
        }

        self.deck.reveal(id);
        self.selected.push(id);

        if card.is_bomb() {
            self.triggered_bomb = Some(id);
            self.status = GameStatus::Lost;
            log::debug!("bomb {id} revealed, lost after {} moves", self.selected.len());
            Bomb
        } else {
            self.remaining_safe = self.remaining_safe.saturating_sub(1);
            if self.remaining_safe == 0 {
                self.status = GameStatus::Won;
                log::debug!("all safe cards found, won in {} moves", self.selected.len());
                Won
            } else {
                log::debug!("card {id} revealed, {} safe cards left", self.remaining_safe);
                Safe
            }
        }
    }

    /// Back to the idle shape, keeping the last-installed settings so a new
    /// game can start without resupplying them.
    pub fn reset(&mut self) {
        self.deck.clear();
        self.selected.clear();
        self.remaining_safe = 0;
        self.status = GameStatus::Idle;
        self.triggered_bomb = None;
        log::debug!("game reset");
    }

    /// Derived result, present only once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        if !self.status.is_finished() {
            return None;
        }

        Some(GameResult {
            won: matches!(self.status, GameStatus::Won),
            selected_cards: self.selected.to_vec(),
            bomb_cards: self.deck.bomb_ids().collect(),
            total_moves: self.selected.len() as u32,
        })
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        let mut engine = Self::new(GameSettings::default());
        engine.remaining_safe = 0;
        engine
    }
}
