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

use crate::db::HistoryStore;
use crate::error::Fallible;

pub fn clear_history(database_path: &Path) -> Fallible<()> {
    let store = HistoryStore::open(database_path)?;
    let removed = store.clear()?;
    match removed {
        0 => println!("History was already empty."),
        1 => println!("Deleted 1 saved game."),
        n => println!("Deleted {n} saved games."),
    }
    Ok(())
}
