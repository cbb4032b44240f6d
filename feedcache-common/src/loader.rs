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

use crate::{error::Result, item::FeedItem};

/// Outcome of a feed load.
pub type LoadFeedResult = Result<Vec<FeedItem>>;

/// Outcome of a feed save.
pub type SaveFeedResult = Result<()>;

/// Completion invoked once with the outcome of [`FeedLoader::load`].
pub type LoadCompletion = Box<dyn FnOnce(LoadFeedResult) + Send + 'static>;

/// Completion invoked once with the outcome of [`FeedCache::save`].
pub type SaveCompletion = Box<dyn FnOnce(SaveFeedResult) + Send + 'static>;

/// Anything that can load a feed.
///
/// `load` returns immediately. The completion is invoked at most once, possibly on another thread.
pub trait FeedLoader: Send + Sync + 'static {
    /// Load the feed and deliver the outcome to `completion`.
    fn load(&self, completion: LoadCompletion);
}

/// Anything that can persist a feed.
pub trait FeedCache: Send + Sync + 'static {
    /// Save `feed` and deliver the outcome to `completion`.
    fn save(&self, feed: Vec<FeedItem>, completion: SaveCompletion);
}

impl<T> FeedLoader for Arc<T>
where
    T: FeedLoader + ?Sized,
{
    fn load(&self, completion: LoadCompletion) {
        self.as_ref().load(completion)
    }
}

impl<T> FeedCache for Arc<T>
where
    T: FeedCache + ?Sized,
{
    fn save(&self, feed: Vec<FeedItem>, completion: SaveCompletion) {
        self.as_ref().save(feed, completion)
    }
}
