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
use std::str::FromStr;
use std::time::Duration;

use rusqlite::ToSql;
use rusqlite::types::FromSql;
use rusqlite::types::FromSqlError;
use rusqlite::types::FromSqlResult;
use rusqlite::types::ToSqlOutput;
use rusqlite::types::ValueRef;
use thiserror::Error;

/// The difficulty a session is played at. Each tier fixes the number of
/// distinct symbols in the deck, the board layout, and the countdown limit
/// for timed games.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Number of distinct symbols in a deck at this tier. Every symbol
    /// appears on exactly two cards.
    pub const fn symbol_count(self) -> u8 {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 8,
            Difficulty::Hard => 12,
        }
    }

    /// Total cards dealt at this tier.
    pub const fn card_count(self) -> usize {
        self.symbol_count() as usize * 2
    }

    /// Columns the board is laid out in.
    pub const fn board_columns(self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 4,
            Difficulty::Hard => 4,
        }
    }

    /// Countdown limit for timed games at this tier.
    pub const fn time_limit(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_secs(30),
            Difficulty::Medium => Duration::from_secs(60),
            Difficulty::Hard => Duration::from_secs(90),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Resolve a difficulty from user input. Anything unrecognized falls
    /// back to [`Difficulty::Medium`] rather than failing: a session must
    /// never start with an empty deck.
    pub fn from_name(name: &str) -> Self {
        match name.parse::<Difficulty>() {
            Ok(difficulty) => difficulty,
            Err(UnknownDifficulty(_)) => {
                log::warn!("unrecognized difficulty {name:?}, falling back to medium");
                Difficulty::Medium
            }
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Error)]
#[error("unrecognized difficulty: {0}")]
pub struct UnknownDifficulty(String);

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(UnknownDifficulty(s.to_string())),
        }
    }
}

impl ToSql for Difficulty {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.name()))
    }
}

impl FromSql for Difficulty {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let string: String = FromSql::column_result(value)?;
        string
            .parse::<Difficulty>()
            .map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}
