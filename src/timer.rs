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

use std::time::Duration;
use std::time::Instant;

/// Countdown limit for a timed game.
///
/// Holds only the deadline; `remaining` and `expired` are pure reads over a
/// caller-supplied `now`, so tests pass synthetic instants instead of
/// sleeping. Restarting a game builds a new countdown and drops this one.
#[derive(Clone, Copy, Debug)]
pub struct Countdown {
    deadline: Instant,
}

impl Countdown {
    pub fn new(limit: Duration, now: Instant) -> Self {
        Self {
            deadline: now + limit,
        }
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    pub fn expired(&self, now: Instant) -> bool {
        self.remaining(now).is_zero()
    }
}
