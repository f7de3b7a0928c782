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

use rusqlite::Connection;
use rusqlite::Row;
use rusqlite::Transaction;

use crate::error::Fallible;
use crate::types::difficulty::Difficulty;
use crate::types::record::MatchId;
use crate::types::record::MatchRecord;
use crate::types::record::SavedMatch;
use crate::types::timestamp::Timestamp;

/// Append-only store of finished games. The only delete path is
/// [`HistoryStore::clear`]; rows are never updated.
pub struct HistoryStore {
    conn: Connection,
}

impl HistoryStore {
    pub fn open(database_path: impl AsRef<Path>) -> Fallible<Self> {
        let mut conn = Connection::open(database_path)?;
        {
            let tx = conn.transaction()?;
            if !probe_schema_exists(&tx)? {
                tx.execute_batch(include_str!("schema.sql"))?;
                tx.commit()?;
            }
        }
        Ok(Self { conn })
    }

    /// Append one finished game and return its generated id.
    pub fn insert_match(&mut self, record: &MatchRecord) -> Fallible<MatchId> {
        let sql = "insert into matches (player_name, played_at, timer_enabled, difficulty, total_cards, matched_count, unmatched_count) values (?, ?, ?, ?, ?, ?, ?) returning match_id;";
        let tx = self.conn.transaction()?;
        let id: MatchId = tx.query_row(
            sql,
            (
                &record.player_name,
                &record.played_at,
                record.timer_enabled,
                &record.difficulty,
                record.total_cards,
                record.matched_count,
                record.unmatched_count,
            ),
            |row| row.get(0),
        )?;
        tx.commit()?;
        log::debug!("saved match #{id}");
        Ok(id)
    }

    pub fn match_by_id(&self, id: MatchId) -> Fallible<Option<SavedMatch>> {
        let sql = "select match_id, player_name, played_at, timer_enabled, difficulty, total_cards, matched_count, unmatched_count from matches where match_id = ?;";
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([id])?;
        match rows.next()? {
            Some(row) => Ok(Some(read_match(row)?)),
            None => Ok(None),
        }
    }

    /// Every saved game, newest first.
    pub fn list_matches(&self) -> Fallible<Vec<SavedMatch>> {
        let sql = "select match_id, player_name, played_at, timer_enabled, difficulty, total_cards, matched_count, unmatched_count from matches order by match_id desc;";
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([])?;
        let mut matches = Vec::new();
        while let Some(row) = rows.next()? {
            matches.push(read_match(row)?);
        }
        Ok(matches)
    }

    pub fn match_count(&self) -> Fallible<usize> {
        let count: i64 = self
            .conn
            .query_row("select count(*) from matches;", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Number of saved games per difficulty tier, for the stats view.
    pub fn counts_by_difficulty(&self) -> Fallible<Vec<(Difficulty, usize)>> {
        let sql = "select difficulty, count(*) from matches group by difficulty;";
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([])?;
        let mut counts = Vec::new();
        while let Some(row) = rows.next()? {
            let difficulty: Difficulty = row.get(0)?;
            let count: i64 = row.get(1)?;
            counts.push((difficulty, count as usize));
        }
        Ok(counts)
    }

    /// Delete every saved game. Returns how many rows were removed.
    pub fn clear(&self) -> Fallible<usize> {
        let removed = self.conn.execute("delete from matches;", [])?;
        log::debug!("cleared {removed} saved matches");
        Ok(removed)
    }
}

fn read_match(row: &Row) -> rusqlite::Result<SavedMatch> {
    let id: MatchId = row.get(0)?;
    let player_name: String = row.get(1)?;
    let played_at: Timestamp = row.get(2)?;
    let timer_enabled: bool = row.get(3)?;
    let difficulty: Difficulty = row.get(4)?;
    let total_cards: u32 = row.get(5)?;
    let matched_count: u32 = row.get(6)?;
    let unmatched_count: u32 = row.get(7)?;
    Ok(SavedMatch {
        id,
        record: MatchRecord {
            player_name,
            played_at,
            timer_enabled,
            difficulty,
            total_cards,
            matched_count,
            unmatched_count,
        },
    })
}

fn probe_schema_exists(tx: &Transaction) -> Fallible<bool> {
    let sql = "select count(*) from sqlite_master where type='table' AND name=?;";
    let count: i64 = tx.query_row(sql, ["matches"], |row| row.get(0))?;
    Ok(count > 0)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn record(player: &str, difficulty: Difficulty, matched: u32) -> MatchRecord {
        let total = difficulty.card_count() as u32;
        MatchRecord {
            player_name: player.to_string(),
            played_at: Timestamp::now(),
            timer_enabled: false,
            difficulty,
            total_cards: total,
            matched_count: matched,
            unmatched_count: total - matched,
        }
    }

    #[test]
    fn insert_and_read_back() -> Fallible<()> {
        let dir = tempdir()?;
        let mut store = HistoryStore::open(dir.path().join("history.sqlite3"))?;
        let record = record("alice", Difficulty::Easy, 6);

        let id = store.insert_match(&record)?;
        let saved = store.match_by_id(id)?.unwrap();

        assert_eq!(saved.id, id);
        assert_eq!(saved.record, record);
        Ok(())
    }

    #[test]
    fn missing_id_reads_as_none() -> Fallible<()> {
        let dir = tempdir()?;
        let store = HistoryStore::open(dir.path().join("history.sqlite3"))?;

        assert!(store.match_by_id(42)?.is_none());
        Ok(())
    }

    #[test]
    fn listing_is_newest_first() -> Fallible<()> {
        let dir = tempdir()?;
        let mut store = HistoryStore::open(dir.path().join("history.sqlite3"))?;
        let first = store.insert_match(&record("alice", Difficulty::Easy, 6))?;
        let second = store.insert_match(&record("bob", Difficulty::Hard, 10))?;

        let matches = store.list_matches()?;

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].id, second);
        assert_eq!(matches[1].id, first);
        Ok(())
    }

    #[test]
    fn counts_and_clear() -> Fallible<()> {
        let dir = tempdir()?;
        let mut store = HistoryStore::open(dir.path().join("history.sqlite3"))?;
        store.insert_match(&record("alice", Difficulty::Easy, 6))?;
        store.insert_match(&record("alice", Difficulty::Easy, 4))?;
        store.insert_match(&record("bob", Difficulty::Medium, 16))?;

        assert_eq!(store.match_count()?, 3);
        let by_difficulty = store.counts_by_difficulty()?;
        assert!(by_difficulty.contains(&(Difficulty::Easy, 2)));
        assert!(by_difficulty.contains(&(Difficulty::Medium, 1)));

        assert_eq!(store.clear()?, 3);
        assert_eq!(store.match_count()?, 0);
        assert!(store.list_matches()?.is_empty());
        Ok(())
    }

    #[test]
    fn reopening_keeps_existing_rows() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("history.sqlite3");
        let id = {
            let mut store = HistoryStore::open(&path)?;
            store.insert_match(&record("alice", Difficulty::Hard, 24))?
        };

        let store = HistoryStore::open(&path)?;

        assert_eq!(store.match_count()?, 1);
        assert_eq!(store.match_by_id(id)?.unwrap().record.player_name, "alice");
        Ok(())
    }
}
