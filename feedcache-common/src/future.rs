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

use std::future::Future;

use tokio::sync::oneshot;

use crate::{
    error::Error,
    item::FeedItem,
    loader::{FeedCache, FeedLoader, LoadFeedResult, SaveFeedResult},
};

/// Future adapter for [`FeedLoader`].
pub trait FeedLoaderExt: FeedLoader {
    /// Issue a load and return a future that resolves to its outcome.
    ///
    /// The load is issued when `load_feed` is called, not when the future is first polled.
    /// The future resolves to [`Error::Canceled`] if the completion is dropped without being invoked, which is
    /// the case when the loader is dropped before its collaborator completes.
    fn load_feed(&self) -> impl Future<Output = LoadFeedResult> + Send + 'static {
        let (tx, rx) = oneshot::channel();
        self.load(Box::new(move |result| {
            let _ = tx.send(result);
        }));
        async move { rx.await.unwrap_or(Err(Error::Canceled)) }
    }
}

impl<T> FeedLoaderExt for T where T: FeedLoader + ?Sized {}

/// Future adapter for [`FeedCache`].
pub trait FeedCacheExt: FeedCache {
    /// Issue a save and return a future that resolves to its outcome.
    ///
    /// Same issuing and cancellation rules as [`FeedLoaderExt::load_feed`].
    fn save_feed(&self, feed: Vec<FeedItem>) -> impl Future<Output = SaveFeedResult> + Send + 'static {
        let (tx, rx) = oneshot::channel();
        self.save(
            feed,
            Box::new(move |result| {
                let _ = tx.send(result);
            }),
        );
        async move { rx.await.unwrap_or(Err(Error::Canceled)) }
    }
}

impl<T> FeedCacheExt for T where T: FeedCache + ?Sized {}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use url::Url;
    use uuid::Uuid;

    use super::*;
    use crate::loader::{LoadCompletion, SaveCompletion};

    struct Immediate(Vec<FeedItem>);

    impl FeedLoader for Immediate {
        fn load(&self, completion: LoadCompletion) {
            completion(Ok(self.0.clone()))
        }
    }

    struct Forgetful;

    impl FeedLoader for Forgetful {
        fn load(&self, completion: LoadCompletion) {
            drop(completion);
        }
    }

    impl FeedCache for Forgetful {
        fn save(&self, _: Vec<FeedItem>, completion: SaveCompletion) {
            drop(completion);
        }
    }

    struct Threaded;

    impl FeedCache for Threaded {
        fn save(&self, _: Vec<FeedItem>, completion: SaveCompletion) {
            std::thread::spawn(move || completion(Err(Error::InvalidData)));
        }
    }

    fn item() -> FeedItem {
        FeedItem::new(
            Uuid::new_v4(),
            Some("a description".to_string()),
            None,
            Url::parse("https://any-url.com").unwrap(),
        )
    }

    #[test_log::test(tokio::test)]
    async fn test_load_feed_resolves_with_outcome() {
        let feed = vec![item(), item()];
        let loader = Arc::new(Immediate(feed.clone()));
        assert_eq!(loader.load_feed().await.unwrap(), feed);
    }

    #[test_log::test(tokio::test)]
    async fn test_dropped_completion_resolves_canceled() {
        assert!(matches!(Forgetful.load_feed().await, Err(Error::Canceled)));
        assert!(matches!(Forgetful.save_feed(vec![item()]).await, Err(Error::Canceled)));
    }

    #[test_log::test(tokio::test)]
    async fn test_save_feed_completed_on_another_thread() {
        assert!(matches!(Threaded.save_feed(vec![]).await, Err(Error::InvalidData)));
    }
}
