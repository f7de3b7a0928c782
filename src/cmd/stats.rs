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

use std::path::Path;

use serde::Serialize;

use crate::cmd::history::OutputFormat;
use crate::db::HistoryStore;
use crate::error::Fallible;
use crate::types::difficulty::Difficulty;

pub fn print_stats(database_path: &Path, format: OutputFormat) -> Fallible<()> {
    let store = HistoryStore::open(database_path)?;

    // Construct stats.
    let matches = store.list_matches()?;
    let by_difficulty = store.counts_by_difficulty()?;
    let tier_count = |difficulty: Difficulty| {
        by_difficulty
            .iter()
            .find(|(tier, _)| *tier == difficulty)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    };
    let stats = Stats {
        games_played: store.match_count()?,
        easy_games: tier_count(Difficulty::Easy),
        medium_games: tier_count(Difficulty::Medium),
        hard_games: tier_count(Difficulty::Hard),
        timed_games: matches.iter().filter(|m| m.record.timer_enabled).count(),
        completed_games: matches
            .iter()
            .filter(|m| m.record.matched_count == m.record.total_cards)
            .count(),
        cards_matched: matches.iter().map(|m| m.record.matched_count as u64).sum(),
        cards_missed: matches
            .iter()
            .map(|m| m.record.unmatched_count as u64)
            .sum(),
    };

    match format {
        OutputFormat::Text => {
            println!("Games played: {}", stats.games_played);
            println!(
                "By difficulty: {} easy, {} medium, {} hard",
                stats.easy_games, stats.medium_games, stats.hard_games
            );
            println!("Timed games: {}", stats.timed_games);
            println!("Completed boards: {}", stats.completed_games);
            println!("Cards matched: {}", stats.cards_matched);
            println!("Cards missed: {}", stats.cards_missed);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Stats {
    games_played: usize,
    easy_games: usize,
    medium_games: usize,
    hard_games: usize,
    timed_games: usize,
    completed_games: usize,
    cards_matched: u64,
    cards_missed: u64,
}
