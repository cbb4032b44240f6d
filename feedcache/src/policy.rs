// Copyright 2025 feedcache Project Authors
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

use chrono::{DateTime, Days, Utc};

/// Number of days a cached snapshot stays valid.
pub const FEED_CACHE_MAX_AGE_IN_DAYS: u64 = 7;

/// Freshness rule of cached feed snapshots.
#[derive(Debug)]
pub struct FeedCachePolicy;

impl FeedCachePolicy {
    /// Return `true` if a snapshot captured at `timestamp` is still valid at `now`.
    ///
    /// Valid iff `now < timestamp + 7 days`. A snapshot exactly 7 days old is expired, and so is one whose
    /// expiration cannot be represented.
    pub fn validate(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match timestamp.checked_add_days(Days::new(FEED_CACHE_MAX_AGE_IN_DAYS)) {
            Some(max_age) => now < max_age,
            None => false,
        }
    }
}
