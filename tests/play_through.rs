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

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::tempdir;

use memora::db::HistoryStore;
use memora::error::Fallible;
use memora::game::Game;
use memora::game::SelectOutcome;
use memora::timer::Countdown;
use memora::types::difficulty::Difficulty;
use memora::types::session::GameSession;
use memora::types::timestamp::Timestamp;

#[test]
fn seeded_game_played_to_completion_lands_in_history() -> Fallible<()> {
    let mut game = Game::with_rng(Difficulty::Medium, &mut StdRng::seed_from_u64(1234));

    // Miss once first: flip two differing cards, then resolve the flip-back.
    let first = game.cards()[0];
    let other = game
        .cards()
        .iter()
        .find(|card| card.symbol() != first.symbol())
        .map(|card| card.id())
        .unwrap();
    assert_eq!(game.select(first.id()), SelectOutcome::Revealed);
    assert_eq!(game.select(other), SelectOutcome::Mismatch);
    assert!(game.flip_back());

    // Then clear the board by pairing symbol after symbol.
    while !game.is_complete() {
        let next = *game.cards().iter().find(|card| !card.is_matched()).unwrap();
        let partner = game
            .cards()
            .iter()
            .find(|card| card.symbol() == next.symbol() && card.id() != next.id())
            .map(|card| card.id())
            .unwrap();
        assert_eq!(game.select(next.id()), SelectOutcome::Revealed);
        let outcome = game.select(partner);
        assert!(matches!(
            outcome,
            SelectOutcome::Matched | SelectOutcome::Won
        ));
    }
    assert_eq!(game.matched_count(), 16);
    assert_eq!(game.unmatched_visible_count(), 0);

    let session = GameSession::new("alice", Difficulty::Medium, false);
    let record = session.finished_record(&game, Timestamp::now());
    let dir = tempdir()?;
    let mut store = HistoryStore::open(dir.path().join("history.sqlite3"))?;
    let id = store.insert_match(&record)?;

    let matches = store.list_matches()?;
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, id);
    assert_eq!(matches[0].record, record);
    Ok(())
}

#[test]
fn timed_out_game_records_partial_score() -> Fallible<()> {
    let mut game = Game::with_rng(Difficulty::Easy, &mut StdRng::seed_from_u64(99));
    let symbol = game.cards()[0].symbol();
    let pair: Vec<_> = game
        .cards()
        .iter()
        .filter(|card| card.symbol() == symbol)
        .map(|card| card.id())
        .collect();
    game.select(pair[0]);
    assert_eq!(game.select(pair[1]), SelectOutcome::Matched);

    // The countdown expires with two pairs still on the board.
    let start = Instant::now();
    let countdown = Countdown::new(Difficulty::Easy.time_limit(), start);
    assert!(countdown.expired(start + Difficulty::Easy.time_limit()));

    let session = GameSession::new("", Difficulty::Easy, true);
    let record = session.finished_record(&game, Timestamp::now());
    assert_eq!(record.player_name, "Player");
    assert!(record.timer_enabled);
    assert_eq!(record.matched_count, 2);
    assert_eq!(record.unmatched_count, 4);

    let dir = tempdir()?;
    let mut store = HistoryStore::open(dir.path().join("history.sqlite3"))?;
    store.insert_match(&record)?;
    assert_eq!(store.match_count()?, 1);
    Ok(())
}
