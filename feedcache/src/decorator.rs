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

use feedcache_common::loader::{FeedCache, FeedLoader, LoadCompletion};

/// Loader that persists every successfully loaded feed into a [`FeedCache`].
///
/// The cache write is best-effort: its outcome never changes what the caller receives. The result is delivered
/// without waiting for the write, and a cache dropped before the write completes discards it.
pub struct FeedLoaderCacheDecorator<L, C>
where
    L: FeedLoader,
    C: FeedCache,
{
    decoratee: L,
    cache: Arc<C>,
}

impl<L, C> Debug for FeedLoaderCacheDecorator<L, C>
where
    L: FeedLoader + Debug,
    C: FeedCache + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedLoaderCacheDecorator")
            .field("decoratee", &self.decoratee)
            .field("cache", &self.cache)
            .finish()
    }
}

impl<L, C> FeedLoaderCacheDecorator<L, C>
where
    L: FeedLoader,
    C: FeedCache,
{
    /// Wrap `decoratee`, saving its successful results into `cache`.
    pub fn new(decoratee: L, cache: Arc<C>) -> Self {
        Self { decoratee, cache }
    }

    /// The wrapped loader.
    pub fn decoratee(&self) -> &L {
        &self.decoratee
    }
}

impl<L, C> FeedLoader for FeedLoaderCacheDecorator<L, C>
where
    L: FeedLoader,
    C: FeedCache,
{
    fn load(&self, completion: LoadCompletion) {
        let cache = self.cache.clone();
        self.decoratee.load(Box::new(move |result| {
            if let Ok(feed) = &result {
                cache.save(
                    feed.clone(),
                    Box::new(|result| {
                        if let Err(e) = result {
                            tracing::warn!("[feed loader cache decorator]: ignore cache write failure: {e}");
                        }
                    }),
                );
            }
            completion(result)
        }));
    }
}
