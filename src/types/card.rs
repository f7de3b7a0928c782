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

use std::fmt::Display;
use std::fmt::Formatter;

/// Identifies one card instance for the lifetime of a deck, independent of
/// its position on the board.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct CardId(u32);

impl CardId {
    pub(crate) const fn new(raw: u32) -> Self {
        Self(raw)
    }
}

impl Display for CardId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The face identity of a card. Two cards sharing a symbol form a pair.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SymbolId(u8);

impl SymbolId {
    pub(crate) const fn new(raw: u8) -> Self {
        Self(raw)
    }
}

impl Display for SymbolId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(b'A' + self.0))
    }
}

/// One card on the board.
///
/// Identity (`id`, `symbol`) is fixed at deck construction; only the
/// face-up/matched/revealed state changes afterwards, and only through the
/// engine.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Card {
    pub(crate) id: CardId,
    pub(crate) symbol: SymbolId,
    pub(crate) face_up: bool,
    pub(crate) matched: bool,
    pub(crate) revealed: bool,
}

impl Card {
    /// A freshly dealt card: face down, unmatched, part of the visible board.
    pub(crate) const fn face_down(id: CardId, symbol: SymbolId) -> Self {
        Self {
            id,
            symbol,
            face_up: false,
            matched: false,
            revealed: true,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn symbol(&self) -> SymbolId {
        self.symbol
    }

    /// Whether the card is flipped open awaiting its pair.
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Whether the card has been permanently paired.
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Whether the card is still part of the visible board.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}
