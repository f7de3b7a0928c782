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

use crate::types::difficulty::Difficulty;
use crate::types::timestamp::Timestamp;

pub type MatchId = i64;

/// Summary of one finished game, as written to the history store.
/// Append-only: never mutated after insert.
#[derive(Clone, PartialEq, Debug)]
pub struct MatchRecord {
    pub player_name: String,
    pub played_at: Timestamp,
    pub timer_enabled: bool,
    pub difficulty: Difficulty,
    pub total_cards: u32,
    pub matched_count: u32,
    pub unmatched_count: u32,
}

/// A history row read back from the store, keyed by its generated id.
#[derive(Clone, PartialEq, Debug)]
pub struct SavedMatch {
    pub id: MatchId,
    pub record: MatchRecord,
}
