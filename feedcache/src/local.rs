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

use std::{fmt::Debug, sync::Arc};

use feedcache_common::{
    clock::Clock,
    error::{Error, Result},
    item::FeedItem,
    liveness::Liveness,
    loader::{FeedCache, FeedLoader, LoadCompletion, SaveCompletion},
};
use feedcache_storage::{CachedFeed, FeedStore, LocalFeedItem};

use crate::policy::FeedCachePolicy;

/// Completion of [`LocalFeedLoader::validate_cache`].
pub type ValidationCompletion = Box<dyn FnOnce(Result<()>) + Send + 'static>;

/// Builder for [`LocalFeedLoader`].
pub struct LocalFeedLoaderBuilder<S>
where
    S: FeedStore,
{
    store: Arc<S>,
    clock: Clock,
    name: String,
}

impl<S> LocalFeedLoaderBuilder<S>
where
    S: FeedStore,
{
    /// Create a builder for a loader backed by `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            clock: Clock::system(),
            name: "feedcache".to_string(),
        }
    }

    /// Set the time source used for freshness checks and snapshot timestamps.
    ///
    /// Default: the system clock.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Set the name of the loader, used in logs.
    ///
    /// Default: `feedcache`.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Build the loader.
    pub fn build(self) -> LocalFeedLoader<S> {
        LocalFeedLoader {
            store: self.store,
            clock: self.clock,
            name: Arc::from(self.name),
            liveness: Liveness::new(),
        }
    }
}

/// Cache coordinator between callers and a [`FeedStore`].
///
/// `load` serves the stored snapshot while it is fresh, and an empty feed when the store is empty or the
/// snapshot has expired. `save` replaces the snapshot by deleting the old one and inserting the new one only after
/// the deletion is confirmed.
///
/// The loader keeps no snapshot state of its own and adds no locking: concurrent operations are ordered only as
/// far as the store orders them.
///
/// Dropping the loader discards every completion still pending in the store. A `save` whose deletion completes
/// after the drop issues no insertion.
pub struct LocalFeedLoader<S>
where
    S: FeedStore,
{
    store: Arc<S>,
    clock: Clock,
    name: Arc<str>,
    liveness: Liveness,
}

impl<S> Debug for LocalFeedLoader<S>
where
    S: FeedStore,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalFeedLoader").field("name", &self.name).finish()
    }
}

impl<S> LocalFeedLoader<S>
where
    S: FeedStore,
{
    /// Create a loader with the given store and clock.
    pub fn new(store: Arc<S>, clock: Clock) -> Self {
        LocalFeedLoaderBuilder::new(store).with_clock(clock).build()
    }

    /// Delete the stored snapshot if it has expired or cannot be read.
    ///
    /// Completes with the deletion outcome, or with `Ok(())` when nothing needed to be deleted.
    pub fn validate_cache(&self, completion: ValidationCompletion) {
        let watch = self.liveness.watch();
        let store = self.store.clone();
        let clock = self.clock.clone();
        let name = self.name.clone();

        self.store.retrieve(Box::new(move |result| {
            if !watch.is_alive() {
                tracing::debug!("[local feed loader]: {name}: loader dropped, skip validation");
                return;
            }
            let evict = match &result {
                Err(e) => {
                    tracing::warn!("[local feed loader]: {name}: unreadable cache will be deleted: {e}");
                    true
                }
                Ok(CachedFeed::Found { timestamp, .. }) => !FeedCachePolicy::validate(*timestamp, clock.now()),
                Ok(CachedFeed::Empty) => false,
            };
            if !evict {
                watch.deliver(completion, Ok(()));
                return;
            }
            store.delete_cached_feed(Box::new(move |result| {
                if !watch.deliver(completion, result.map_err(Error::store)) {
                    tracing::debug!("[local feed loader]: {name}: loader dropped, discard validation result");
                }
            }));
        }));
    }
}

impl<S> FeedLoader for LocalFeedLoader<S>
where
    S: FeedStore,
{
    fn load(&self, completion: LoadCompletion) {
        let watch = self.liveness.watch();
        let clock = self.clock.clone();
        let name = self.name.clone();

        self.store.retrieve(Box::new(move |result| {
            let result = match result {
                Err(e) => Err(Error::store(e)),
                Ok(CachedFeed::Found { feed, timestamp }) if FeedCachePolicy::validate(timestamp, clock.now()) => {
                    Ok(feed.into_iter().map(to_model).collect())
                }
                Ok(CachedFeed::Found { .. }) | Ok(CachedFeed::Empty) => Ok(vec![]),
            };
            if !watch.deliver(completion, result) {
                tracing::debug!("[local feed loader]: {name}: loader dropped, discard load result");
            }
        }));
    }
}

impl<S> FeedCache for LocalFeedLoader<S>
where
    S: FeedStore,
{
    fn save(&self, feed: Vec<FeedItem>, completion: SaveCompletion) {
        let watch = self.liveness.watch();
        let store = self.store.clone();
        let clock = self.clock.clone();
        let name = self.name.clone();

        self.store.delete_cached_feed(Box::new(move |result| {
            if !watch.is_alive() {
                tracing::debug!("[local feed loader]: {name}: loader dropped, skip insertion");
                return;
            }
            if let Err(e) = result {
                watch.deliver(completion, Err(Error::store(e)));
                return;
            }
            let feed = feed.into_iter().map(to_local).collect();
            store.insert(
                feed,
                clock.now(),
                Box::new(move |result| {
                    if !watch.deliver(completion, result.map_err(Error::store)) {
                        tracing::debug!("[local feed loader]: {name}: loader dropped, discard save result");
                    }
                }),
            );
        }));
    }
}

fn to_local(item: FeedItem) -> LocalFeedItem {
    LocalFeedItem::new(item.id, item.description, item.location, item.image_url)
}

fn to_model(item: LocalFeedItem) -> FeedItem {
    FeedItem::new(item.id, item.description, item.location, item.url)
}
