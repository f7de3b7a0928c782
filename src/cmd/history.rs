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
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use crate::db::HistoryStore;
use crate::error::Fallible;
use crate::types::record::SavedMatch;

#[derive(ValueEnum, Clone, Copy)]
pub enum OutputFormat {
    /// Plain text output.
    Text,
    /// JSON output.
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

pub fn list_history(database_path: &Path, format: OutputFormat) -> Fallible<()> {
    let store = HistoryStore::open(database_path)?;
    let matches = store.list_matches()?;
    match format {
        OutputFormat::Text => {
            if matches.is_empty() {
                println!("No games saved yet.");
                return Ok(());
            }
            for saved in &matches {
                let record = &saved.record;
                println!(
                    "#{}  {}  {}  {}  timer:{}  {}/{} matched",
                    saved.id,
                    record.played_at.format_local(),
                    record.player_name,
                    record.difficulty,
                    if record.timer_enabled { "on" } else { "off" },
                    record.matched_count,
                    record.total_cards,
                );
            }
        }
        OutputFormat::Json => {
            let rows: Vec<HistoryRow> = matches.iter().map(HistoryRow::from).collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HistoryRow {
    id: i64,
    player_name: String,
    played_at: String,
    timer_enabled: bool,
    difficulty: String,
    total_cards: u32,
    matched_count: u32,
    unmatched_count: u32,
}

impl From<&SavedMatch> for HistoryRow {
    fn from(saved: &SavedMatch) -> Self {
        let record = &saved.record;
        Self {
            id: saved.id,
            player_name: record.player_name.clone(),
            played_at: record.played_at.format_local(),
            timer_enabled: record.timer_enabled,
            difficulty: record.difficulty.to_string(),
            total_cards: record.total_cards,
            matched_count: record.matched_count,
            unmatched_count: record.unmatched_count,
        }
    }
}
