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

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::{
    error::Result,
    store::{CachedFeed, DeletionCompletion, FeedStore, InsertionCompletion, LocalFeedItem, RetrievalCompletion},
};

/// Message received by [`FeedStoreSpy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceivedMessage {
    /// `delete_cached_feed` was called.
    DeleteCachedFeed,
    /// `insert` was called with the given feed and timestamp.
    Insert(Vec<LocalFeedItem>, DateTime<Utc>),
    /// `retrieve` was called.
    Retrieve,
}

/// Feed store that records every call and holds the completions until the test completes them.
///
/// Pending completions are completed in FIFO order per operation kind. Completions are invoked without any lock
/// held, so they may call back into the spy.
#[derive(Default)]
pub struct FeedStoreSpy {
    messages: Mutex<Vec<ReceivedMessage>>,
    deletions: Mutex<VecDeque<DeletionCompletion>>,
    insertions: Mutex<VecDeque<InsertionCompletion>>,
    retrievals: Mutex<VecDeque<RetrievalCompletion>>,
}

impl std::fmt::Debug for FeedStoreSpy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedStoreSpy")
            .field("messages", &*self.messages.lock())
            .finish()
    }
}

impl FeedStoreSpy {
    /// Create a new spy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far, in call order.
    pub fn received_messages(&self) -> Vec<ReceivedMessage> {
        self.messages.lock().clone()
    }

    /// Complete the oldest pending deletion with `result`.
    pub fn complete_deletion(&self, result: Result<()>) {
        let completion = self.deletions.lock().pop_front().expect("no pending deletion");
        completion(result)
    }

    /// Complete the oldest pending insertion with `result`.
    pub fn complete_insertion(&self, result: Result<()>) {
        let completion = self.insertions.lock().pop_front().expect("no pending insertion");
        completion(result)
    }

    /// Complete the oldest pending retrieval with `result`.
    pub fn complete_retrieval(&self, result: Result<CachedFeed>) {
        let completion = self.retrievals.lock().pop_front().expect("no pending retrieval");
        completion(result)
    }

    /// Complete the oldest pending retrieval with an empty cache.
    pub fn complete_retrieval_with_empty_cache(&self) {
        self.complete_retrieval(Ok(CachedFeed::Empty))
    }

    /// Complete the oldest pending retrieval with the given snapshot.
    pub fn complete_retrieval_with(&self, feed: Vec<LocalFeedItem>, timestamp: DateTime<Utc>) {
        self.complete_retrieval(Ok(CachedFeed::Found { feed, timestamp }))
    }
}

impl FeedStore for FeedStoreSpy {
    fn delete_cached_feed(&self, completion: DeletionCompletion) {
        self.messages.lock().push(ReceivedMessage::DeleteCachedFeed);
        self.deletions.lock().push_back(completion);
    }

    fn insert(&self, feed: Vec<LocalFeedItem>, timestamp: DateTime<Utc>, completion: InsertionCompletion) {
        self.messages.lock().push(ReceivedMessage::Insert(feed, timestamp));
        self.insertions.lock().push_back(completion);
    }

    fn retrieve(&self, completion: RetrievalCompletion) {
        self.messages.lock().push(ReceivedMessage::Retrieve);
        self.retrievals.lock().push_back(completion);
    }
}
