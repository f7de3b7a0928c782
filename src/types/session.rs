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

use crate::game::Game;
use crate::types::difficulty::Difficulty;
use crate::types::record::MatchRecord;
use crate::types::timestamp::Timestamp;

const DEFAULT_PLAYER: &str = "Player";

/// Immutable configuration for one sitting at the table. Replaying builds
/// a fresh [`Game`] from the same session.
#[derive(Clone, Debug)]
pub struct GameSession {
    player_name: String,
    difficulty: Difficulty,
    timer_enabled: bool,
}

impl GameSession {
    /// An empty or whitespace player name becomes [`DEFAULT_PLAYER`].
    pub fn new(player_name: &str, difficulty: Difficulty, timer_enabled: bool) -> Self {
        let player_name = match player_name.trim() {
            "" => DEFAULT_PLAYER.to_string(),
            name => name.to_string(),
        };
        Self {
            player_name,
            difficulty,
            timer_enabled,
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn timer_enabled(&self) -> bool {
        self.timer_enabled
    }

    /// Snapshot a finished (or timed-out) game into its history record.
    pub fn finished_record(&self, game: &Game, played_at: Timestamp) -> MatchRecord {
        MatchRecord {
            player_name: self.player_name.clone(),
            played_at,
            timer_enabled: self.timer_enabled,
            difficulty: self.difficulty,
            total_cards: game.total_cards() as u32,
            matched_count: game.matched_count() as u32,
            unmatched_count: game.unmatched_visible_count() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_player_name_defaults() {
        let session = GameSession::new("   ", Difficulty::Easy, false);

        assert_eq!(session.player_name(), "Player");
    }

    #[test]
    fn given_player_name_is_trimmed_and_kept() {
        let session = GameSession::new(" alice ", Difficulty::Hard, true);

        assert_eq!(session.player_name(), "alice");
        assert_eq!(session.difficulty(), Difficulty::Hard);
        assert!(session.timer_enabled());
    }

    #[test]
    fn finished_record_snapshots_the_board() {
        let session = GameSession::new("bob", Difficulty::Easy, false);
        let game = Game::new(Difficulty::Easy);

        let record = session.finished_record(&game, Timestamp::now());

        assert_eq!(record.player_name, "bob");
        assert_eq!(record.difficulty, Difficulty::Easy);
        assert_eq!(record.total_cards, 6);
        assert_eq!(record.matched_count, 0);
        assert_eq!(record.unmatched_count, 6);
    }
}
