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

use std::path::PathBuf;

use clap::Parser;

use crate::cmd;
use crate::cmd::history::OutputFormat;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::difficulty::Difficulty;
use crate::types::session::GameSession;

const DB_FILE: &str = "history.sqlite3";

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Play a game of memory.
    Play {
        /// Optional path to the directory holding the game history.
        directory: Option<String>,
        /// Player name recorded in the summary and the history.
        #[arg(long)]
        name: Option<String>,
        /// Difficulty tier: easy, medium, or hard.
        #[arg(long, default_value = "medium")]
        difficulty: String,
        /// Race the countdown for the chosen tier.
        #[arg(long)]
        timer: bool,
    },
    /// List finished games, newest first.
    History {
        /// Optional path to the directory holding the game history.
        directory: Option<String>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print aggregate statistics over the saved history.
    Stats {
        /// Optional path to the directory holding the game history.
        directory: Option<String>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Delete every saved game.
    Clear {
        /// Optional path to the directory holding the game history.
        directory: Option<String>,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Play {
            directory,
            name,
            difficulty,
            timer,
        } => {
            let database_path = resolve_database(directory)?;
            let difficulty = Difficulty::from_name(&difficulty);
            let session = GameSession::new(name.as_deref().unwrap_or(""), difficulty, timer);
            cmd::play::play(&database_path, &session)
        }
        Command::History { directory, format } => {
            cmd::history::list_history(&resolve_database(directory)?, format)
        }
        Command::Stats { directory, format } => {
            cmd::stats::print_stats(&resolve_database(directory)?, format)
        }
        Command::Clear { directory } => cmd::clear::clear_history(&resolve_database(directory)?),
    }
}

fn resolve_database(directory: Option<String>) -> Fallible<PathBuf> {
    let directory: PathBuf = match directory {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()?,
    };
    if !directory.exists() {
        return fail("directory does not exist.");
    }
    Ok(directory.join(DB_FILE))
}
