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

use std::{
    ffi::OsString,
    fmt::Debug,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::{
    error::{Error, Result},
    store::{CachedFeed, DeletionCompletion, FeedStore, InsertionCompletion, LocalFeedItem, RetrievalCompletion},
};

#[derive(Debug, Serialize, Deserialize)]
struct Cache {
    feed: Vec<CodableFeedItem>,
    timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CodableFeedItem {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    url: Url,
}

impl From<LocalFeedItem> for CodableFeedItem {
    fn from(item: LocalFeedItem) -> Self {
        Self {
            id: item.id,
            description: item.description,
            location: item.location,
            url: item.url,
        }
    }
}

impl From<CodableFeedItem> for LocalFeedItem {
    fn from(item: CodableFeedItem) -> Self {
        LocalFeedItem::new(item.id, item.description, item.location, item.url)
    }
}

enum Operation {
    Delete(DeletionCompletion),
    Insert {
        feed: Vec<LocalFeedItem>,
        timestamp: DateTime<Utc>,
        completion: InsertionCompletion,
    },
    Retrieve(RetrievalCompletion),
}

impl Operation {
    fn fail(self, e: Error) {
        match self {
            Operation::Delete(completion) => completion(Err(e)),
            Operation::Insert { completion, .. } => completion(Err(e)),
            Operation::Retrieve(completion) => completion(Err(e)),
        }
    }
}

/// Builder for [`CodableFeedStore`].
#[derive(Debug)]
pub struct CodableFeedStoreBuilder {
    path: PathBuf,
    thread_name: String,
}

impl CodableFeedStoreBuilder {
    /// Create a builder for a store persisted at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            thread_name: "feedcache-store".to_string(),
        }
    }

    /// Set the name of the worker thread.
    ///
    /// Default: `feedcache-store`.
    pub fn with_thread_name(mut self, thread_name: &str) -> Self {
        self.thread_name = thread_name.to_string();
        self
    }

    /// Spawn the worker and build the store.
    pub fn build(self) -> Result<CodableFeedStore> {
        let (tx, rx) = flume::unbounded();
        let worker = Worker {
            rx,
            path: self.path.clone(),
        };
        std::thread::Builder::new()
            .name(self.thread_name)
            .spawn(move || worker.run())?;
        Ok(CodableFeedStore { tx, path: self.path })
    }
}

/// Feed store that persists the snapshot as a JSON file.
///
/// Operations are queued and executed one by one on a dedicated worker thread, which also invokes the
/// completions. Insertions write a sibling temporary file and rename it over the target, so a reader only ever
/// sees a complete snapshot.
///
/// Dropping the store lets the worker finish the queued operations and exit.
pub struct CodableFeedStore {
    tx: flume::Sender<Operation>,
    path: PathBuf,
}

impl Debug for CodableFeedStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodableFeedStore").field("path", &self.path).finish()
    }
}

impl CodableFeedStore {
    /// Open a store persisted at `path` with default options.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        CodableFeedStoreBuilder::new(path).build()
    }

    /// Path of the persisted snapshot.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn submit(&self, operation: Operation) {
        if let Err(flume::SendError(operation)) = self.tx.send(operation) {
            tracing::warn!("[codable feed store]: worker is gone, fail operation");
            operation.fail(Error::Closed);
        }
    }
}

impl FeedStore for CodableFeedStore {
    fn delete_cached_feed(&self, completion: DeletionCompletion) {
        self.submit(Operation::Delete(completion));
    }

    fn insert(&self, feed: Vec<LocalFeedItem>, timestamp: DateTime<Utc>, completion: InsertionCompletion) {
        self.submit(Operation::Insert {
            feed,
            timestamp,
            completion,
        });
    }

    fn retrieve(&self, completion: RetrievalCompletion) {
        self.submit(Operation::Retrieve(completion));
    }
}

struct Worker {
    rx: flume::Receiver<Operation>,
    path: PathBuf,
}

impl Worker {
    fn run(self) {
        while let Ok(operation) = self.rx.recv() {
            match operation {
                Operation::Delete(completion) => completion(self.delete()),
                Operation::Insert {
                    feed,
                    timestamp,
                    completion,
                } => completion(self.insert(feed, timestamp)),
                Operation::Retrieve(completion) => completion(self.retrieve()),
            }
        }
        tracing::debug!("[codable feed store]: worker exits, path: {:?}", self.path);
    }

    fn delete(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                tracing::warn!("[codable feed store]: delete {:?} failed: {e}", self.path);
                Err(e.into())
            }
        }
    }

    fn insert(&self, feed: Vec<LocalFeedItem>, timestamp: DateTime<Utc>) -> Result<()> {
        let cache = Cache {
            feed: feed.into_iter().map(CodableFeedItem::from).collect(),
            timestamp,
        };
        let res = serde_json::to_vec(&cache)
            .map_err(Error::from)
            .and_then(|data| self.write(&data));
        if let Err(e) = &res {
            tracing::warn!("[codable feed store]: insert into {:?} failed: {e}", self.path);
        }
        res
    }

    fn write(&self, data: &[u8]) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let tmp = self.tmp_path();
        let res = std::fs::write(&tmp, data).and_then(|_| std::fs::rename(&tmp, &self.path));
        if res.is_err() {
            if let Err(e) = std::fs::remove_file(&tmp) {
                if e.kind() != ErrorKind::NotFound {
                    tracing::warn!("[codable feed store]: remove {tmp:?} failed: {e}");
                }
            }
        }
        res.map_err(Error::from)
    }

    fn retrieve(&self) -> Result<CachedFeed> {
        let data = match std::fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(CachedFeed::Empty),
            Err(e) => return Err(e.into()),
        };
        let cache: Cache = serde_json::from_slice(&data)?;
        Ok(CachedFeed::Found {
            feed: cache.feed.into_iter().map(LocalFeedItem::from).collect(),
            timestamp: cache.timestamp,
        })
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}
