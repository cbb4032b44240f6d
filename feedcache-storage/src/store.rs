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

use std::sync::Arc;

use chrono::{DateTime, Utc};
use url::Url;
use uuid::Uuid;

use crate::error::Result;

/// Store-side representation of a feed item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalFeedItem {
    /// Globally unique identifier of the item.
    pub id: Uuid,
    /// Optional description text.
    pub description: Option<String>,
    /// Optional location text.
    pub location: Option<String>,
    /// Location of the image of the item.
    pub url: Url,
}

impl LocalFeedItem {
    /// Create a new local feed item.
    pub fn new(id: Uuid, description: Option<String>, location: Option<String>, url: Url) -> Self {
        Self {
            id,
            description,
            location,
            url,
        }
    }
}

/// Content of a feed store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedFeed {
    /// No snapshot is stored.
    Empty,
    /// The stored snapshot.
    Found {
        /// Items of the snapshot, in insertion order.
        feed: Vec<LocalFeedItem>,
        /// Time the snapshot was captured.
        timestamp: DateTime<Utc>,
    },
}

/// Completion of [`FeedStore::delete_cached_feed`].
pub type DeletionCompletion = Box<dyn FnOnce(Result<()>) + Send + 'static>;

/// Completion of [`FeedStore::insert`].
pub type InsertionCompletion = Box<dyn FnOnce(Result<()>) + Send + 'static>;

/// Completion of [`FeedStore::retrieve`].
pub type RetrievalCompletion = Box<dyn FnOnce(Result<CachedFeed>) + Send + 'static>;

/// Storage for at most one feed snapshot.
///
/// Every operation returns immediately and invokes its completion exactly once. Completions of one store
/// instance are invoked in the order the operations were issued, on a context chosen by the implementation.
/// Each operation must be atomic from the caller's point of view: a retrieval racing with an insertion
/// observes either the old or the new snapshot, never a partial one.
pub trait FeedStore: Send + Sync + 'static {
    /// Remove the stored snapshot.
    ///
    /// Deleting an empty store succeeds.
    fn delete_cached_feed(&self, completion: DeletionCompletion);

    /// Store a snapshot, replacing any previous one.
    fn insert(&self, feed: Vec<LocalFeedItem>, timestamp: DateTime<Utc>, completion: InsertionCompletion);

    /// Read the stored snapshot.
    ///
    /// An empty store yields [`CachedFeed::Empty`], not an error.
    fn retrieve(&self, completion: RetrievalCompletion);
}

impl<T> FeedStore for Arc<T>
where
    T: FeedStore + ?Sized,
{
    fn delete_cached_feed(&self, completion: DeletionCompletion) {
        self.as_ref().delete_cached_feed(completion)
    }

    fn insert(&self, feed: Vec<LocalFeedItem>, timestamp: DateTime<Utc>, completion: InsertionCompletion) {
        self.as_ref().insert(feed, timestamp, completion)
    }

    fn retrieve(&self, completion: RetrievalCompletion) {
        self.as_ref().retrieve(completion)
    }
}
