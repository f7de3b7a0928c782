// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::types::card::Card;
use crate::types::card::CardId;
use crate::types::card::SymbolId;
use crate::types::difficulty::Difficulty;

/// What a tap on a card did to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The tap was ignored: unknown card, card already matched or face up,
    /// or a mismatch is still awaiting its flip-back.
    NoChange,
    /// The card was flipped face up as the first of a pair.
    Revealed,
    /// The pair matched and was retired.
    Matched,
    /// The pair did not match; both cards stay up until [`Game::flip_back`].
    Mismatch,
    /// The pair matched and completed the board.
    Won,
}

impl SelectOutcome {
    /// Whether the tap changed any card state.
    pub const fn has_update(self) -> bool {
        use SelectOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            Matched => true,
            Mismatch => true,
            Won => true,
        }
    }
}

/// The match engine: a shuffled deck plus the selection state machine.
///
/// Per pair-resolution cycle the board is either idle (zero or one card
/// pending), or holding a mismatched pair face up until the caller resolves
/// it. Matches retire instantly. At most two unmatched cards are ever face
/// up at once.
#[derive(Clone, Debug)]
pub struct Game {
    difficulty: Difficulty,
    cards: Vec<Card>,
    pending_flip: Option<(CardId, CardId)>,
}

impl Game {
    /// Deal a fresh shuffled deck for the given difficulty.
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, &mut rand::rng())
    }

    /// Deal with a caller-supplied RNG, so tests can fix the layout.
    pub fn with_rng<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Self {
        let symbols: Vec<SymbolId> = (0..difficulty.symbol_count()).map(SymbolId::new).collect();
        let mut deck: Vec<SymbolId> = Vec::with_capacity(difficulty.card_count());
        deck.extend_from_slice(&symbols);
        deck.extend_from_slice(&symbols);
        deck.shuffle(rng);
        let cards = deck
            .into_iter()
            .enumerate()
            .map(|(i, symbol)| Card::face_down(CardId::new(i as u32), symbol))
            .collect();
        log::debug!("dealt {} cards at {difficulty}", difficulty.card_count());
        Self {
            difficulty,
            cards,
            pending_flip: None,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The board in deal order. Matched cards keep their position.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Apply one tap. Taps that cannot legally flip a card are ignored
    /// rather than rejected: a stale tap is normal input, not an error.
    pub fn select(&mut self, id: CardId) -> SelectOutcome {
        use SelectOutcome::*;

        if self.pending_flip.is_some() {
            log::debug!("selection locked, ignoring tap on {id}");
            return NoChange;
        }
        let Some(position) = self.cards.iter().position(|card| card.id == id) else {
            log::debug!("ignoring tap on unknown card {id}");
            return NoChange;
        };
        let card = self.cards[position];
        if card.matched || card.face_up || !card.revealed {
            return NoChange;
        }

        self.cards[position].face_up = true;

        let up: Vec<usize> = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.face_up && !card.matched)
            .map(|(i, _)| i)
            .collect();
        if up.len() < 2 {
            return Revealed;
        }

        let (first, second) = (up[0], up[1]);
        if self.cards[first].symbol == self.cards[second].symbol {
            self.cards[first].matched = true;
            self.cards[first].face_up = false;
            self.cards[second].matched = true;
            self.cards[second].face_up = false;
            log::debug!("matched pair {}", self.cards[first].symbol);
            if self.is_complete() { Won } else { Matched }
        } else {
            // Held face up so the player sees both faces; the caller decides
            // how long before flipping them back.
            self.pending_flip = Some((self.cards[first].id, self.cards[second].id));
            Mismatch
        }
    }

    /// Whether a mismatched pair is on display and the selection lock is
    /// engaged.
    pub fn awaiting_flip_back(&self) -> bool {
        self.pending_flip.is_some()
    }

    /// Turn a mismatched pair back face down and release the selection
    /// lock. Returns false if nothing was pending.
    pub fn flip_back(&mut self) -> bool {
        let Some((first, second)) = self.pending_flip.take() else {
            return false;
        };
        for card in &mut self.cards {
            if card.id == first || card.id == second {
                card.face_up = false;
            }
        }
        true
    }

    /// True once every card has been paired.
    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(|card| card.matched)
    }

    pub fn total_cards(&self) -> usize {
        self.cards.len()
    }

    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|card| card.matched).count()
    }

    /// Cards not yet paired but still part of the visible board.
    pub fn unmatched_visible_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|card| !card.matched && card.revealed)
            .count()
    }
}
