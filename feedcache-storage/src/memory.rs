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

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::store::{
    CachedFeed, DeletionCompletion, FeedStore, InsertionCompletion, LocalFeedItem, RetrievalCompletion,
};

/// Feed store that keeps the snapshot in memory.
///
/// Completions are invoked synchronously on the calling thread, after the lock is released.
#[derive(Debug, Default)]
pub struct InMemoryFeedStore {
    snapshot: RwLock<Option<(Vec<LocalFeedItem>, DateTime<Utc>)>>,
}

impl InMemoryFeedStore {
    /// Create an empty in-memory feed store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeedStore for InMemoryFeedStore {
    fn delete_cached_feed(&self, completion: DeletionCompletion) {
        let old = self.snapshot.write().take();
        drop(old);
        completion(Ok(()))
    }

    fn insert(&self, feed: Vec<LocalFeedItem>, timestamp: DateTime<Utc>, completion: InsertionCompletion) {
        let old = self.snapshot.write().replace((feed, timestamp));
        drop(old);
        completion(Ok(()))
    }

    fn retrieve(&self, completion: RetrievalCompletion) {
        let cached = match self.snapshot.read().as_ref() {
            None => CachedFeed::Empty,
            Some((feed, timestamp)) => CachedFeed::Found {
                feed: feed.clone(),
                timestamp: *timestamp,
            },
        };
        completion(Ok(cached))
    }
}
