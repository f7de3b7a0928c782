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

use std::io;
use std::io::Write;
use std::path::Path;
use std::thread;
use std::time::Duration;
use std::time::Instant;

use crate::db::HistoryStore;
use crate::error::Fallible;
use crate::game::Game;
use crate::game::SelectOutcome;
use crate::timer::Countdown;
use crate::types::record::MatchRecord;
use crate::types::session::GameSession;
use crate::types::timestamp::Timestamp;

/// How long a mismatched pair stays on display before flipping back.
const FLIP_BACK_DELAY: Duration = Duration::from_millis(800);

enum RoundEnd {
    /// Every pair was found.
    Completed(Game),
    /// The countdown ran out first.
    Expired(Game),
    /// The player left mid-game; nothing is recorded.
    Quit,
}

pub fn play(database_path: &Path, session: &GameSession) -> Fallible<()> {
    println!(
        "Memory at {} difficulty: {} cards, find the pairs.",
        session.difficulty(),
        session.difficulty().card_count()
    );
    loop {
        let game = match play_round(session)? {
            RoundEnd::Quit => return Ok(()),
            RoundEnd::Completed(game) => {
                println!("Board complete!");
                game
            }
            RoundEnd::Expired(game) => {
                println!("Time is up!");
                game
            }
        };

        // The summary must reach the player even if the store is broken;
        // a persistence failure is reported after it, not instead of it.
        let record = session.finished_record(&game, Timestamp::now());
        print_summary(&record);
        save_record(database_path, &record);

        if !prompt_replay()? {
            return Ok(());
        }
    }
}

fn play_round(session: &GameSession) -> Fallible<RoundEnd> {
    let mut game = Game::new(session.difficulty());
    let countdown = session
        .timer_enabled()
        .then(|| Countdown::new(session.difficulty().time_limit(), Instant::now()));

    loop {
        render_board(&game);
        if let Some(countdown) = &countdown {
            let now = Instant::now();
            if countdown.expired(now) {
                return Ok(RoundEnd::Expired(game));
            }
            println!("Time left: {}s", countdown.remaining(now).as_secs());
        }

        print!("Card (1-{}, q to quit): ", game.total_cards());
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(RoundEnd::Quit);
        }
        let input = input.trim();
        if input.eq_ignore_ascii_case("q") {
            return Ok(RoundEnd::Quit);
        }
        let Some(id) = input
            .parse::<usize>()
            .ok()
            .and_then(|position| position.checked_sub(1))
            .and_then(|index| game.cards().get(index))
            .map(|card| card.id())
        else {
            println!("Pick a card between 1 and {}.", game.total_cards());
            continue;
        };

        match game.select(id) {
            SelectOutcome::NoChange => println!("Nothing happens."),
            SelectOutcome::Revealed => {}
            SelectOutcome::Matched => println!("A pair!"),
            SelectOutcome::Mismatch => {
                render_board(&game);
                println!("No match.");
                thread::sleep(FLIP_BACK_DELAY);
                game.flip_back();
            }
            SelectOutcome::Won => return Ok(RoundEnd::Completed(game)),
        }
    }
}

fn render_board(game: &Game) {
    println!();
    let columns = game.difficulty().board_columns();
    for (i, card) in game.cards().iter().enumerate() {
        let face = if card.is_matched() {
            format!("({})", card.symbol())
        } else if card.is_face_up() {
            format!("[{}]", card.symbol())
        } else if card.is_revealed() {
            "[.]".to_string()
        } else {
            "   ".to_string()
        };
        print!("{:>2}:{face}  ", i + 1);
        if (i + 1) % columns == 0 {
            println!();
        }
    }
    if game.total_cards() % columns != 0 {
        println!();
    }
}

fn print_summary(record: &MatchRecord) {
    println!();
    println!("Player: {}", record.player_name);
    println!("Date: {}", record.played_at.format_local());
    println!("Difficulty: {}", record.difficulty);
    println!("Matched cards: {}", record.matched_count);
    println!("Unmatched cards: {}", record.unmatched_count);
}

fn save_record(database_path: &Path, record: &MatchRecord) {
    match HistoryStore::open(database_path).and_then(|mut store| store.insert_match(record)) {
        Ok(id) => println!("Saved as game #{id}."),
        Err(error) => {
            log::error!("could not save the game: {error}");
            eprintln!("warning: could not save the game: {error}");
        }
    }
}

fn prompt_replay() -> Fallible<bool> {
    print!("Play again? [y/N] ");
    io::stdout().flush()?;
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(false);
    }
    Ok(input.trim().eq_ignore_ascii_case("y"))
}
