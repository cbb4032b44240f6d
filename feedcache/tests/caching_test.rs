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

use chrono::{TimeDelta, Utc};
use feedcache::{
    Clock, CodableFeedStore, Error, FeedCache, FeedCacheExt, FeedItem, FeedLoader, FeedLoaderCacheDecorator,
    FeedLoaderExt, InMemoryFeedStore, LoadFeedResult, LocalFeedItem, LocalFeedLoader, RemoteFeedLoader,
    SaveCompletion, StoreError, TransportError,
};
use feedcache_remote::test_utils::HttpClientSpy;
use feedcache_storage::test_utils::{FeedStoreSpy, ReceivedMessage};
use parking_lot::Mutex;
use url::Url;
use uuid::Uuid;

fn feed_url() -> Url {
    Url::parse("https://feed.example.com/v1/feed").unwrap()
}

fn item(description: &str) -> (FeedItem, String) {
    let id = Uuid::new_v4();
    let image = format!("https://img.example.com/{id}.png");
    let item = FeedItem::new(id, Some(description.to_string()), None, Url::parse(&image).unwrap());
    let json = format!(r#"{{"id":"{id}","description":"{description}","image":"{image}"}}"#);
    (item, json)
}

fn feed_json(items: &[String]) -> Vec<u8> {
    format!(r#"{{"items":[{}]}}"#, items.join(",")).into_bytes()
}

fn recorder() -> (Arc<Mutex<Vec<LoadFeedResult>>>, Box<dyn FnOnce(LoadFeedResult) + Send + 'static>) {
    let received = Arc::new(Mutex::new(vec![]));
    let r = received.clone();
    (received, Box::new(move |result| r.lock().push(result)))
}

/// Forwards saves and reports each outcome once the wrapped cache completes it.
struct NotifyingCache<C> {
    cache: C,
    saved: tokio::sync::mpsc::UnboundedSender<bool>,
}

impl<C> FeedCache for NotifyingCache<C>
where
    C: FeedCache,
{
    fn save(&self, feed: Vec<FeedItem>, completion: SaveCompletion) {
        let saved = self.saved.clone();
        self.cache.save(
            feed,
            Box::new(move |result| {
                let _ = saved.send(result.is_ok());
                completion(result)
            }),
        );
    }
}

type Sut = FeedLoaderCacheDecorator<RemoteFeedLoader<HttpClientSpy>, LocalFeedLoader<FeedStoreSpy>>;

fn make_sut() -> (Sut, Arc<HttpClientSpy>, Arc<FeedStoreSpy>) {
    let client = Arc::new(HttpClientSpy::new());
    let store = Arc::new(FeedStoreSpy::new());
    let remote = RemoteFeedLoader::new(feed_url(), client.clone());
    let local = Arc::new(LocalFeedLoader::new(store.clone(), Clock::system()));
    (FeedLoaderCacheDecorator::new(remote, local), client, store)
}

#[test_log::test]
fn test_decorator_saves_successful_remote_load() {
    let (sut, client, store) = make_sut();
    let (first, first_json) = item("first");
    let (second, second_json) = item("second");

    let (received, completion) = recorder();
    sut.load(completion);
    client.complete_with_status(200, feed_json(&[first_json, second_json]), 0);

    assert_eq!(client.requested_urls(), vec![feed_url()]);
    assert_eq!(received.lock().pop().unwrap().unwrap(), vec![first, second]);
    assert_eq!(store.received_messages(), vec![ReceivedMessage::DeleteCachedFeed]);
}

#[test_log::test]
fn test_decorator_delivers_remote_items_when_saving_fails() {
    let (sut, client, store) = make_sut();
    let (first, first_json) = item("first");

    let (received, completion) = recorder();
    sut.load(completion);
    client.complete_with_status(200, feed_json(&[first_json]), 0);
    store.complete_deletion(Err(StoreError::other(anyhow::anyhow!("disk full"))));

    let mut received = received.lock();
    assert_eq!(received.len(), 1);
    assert_eq!(received.pop().unwrap().unwrap(), vec![first]);
}

#[test_log::test]
fn test_decorator_does_not_save_on_remote_failure() {
    let (sut, client, store) = make_sut();

    let (received, completion) = recorder();
    sut.load(completion);
    client.complete_with_error(TransportError::other(anyhow::anyhow!("offline")), 0);

    assert!(matches!(received.lock().pop().unwrap(), Err(Error::Connectivity)));
    assert!(store.received_messages().is_empty());

    let (received, completion) = recorder();
    sut.load(completion);
    client.complete_with_status(500, feed_json(&[]), 1);

    assert!(matches!(received.lock().pop().unwrap(), Err(Error::InvalidData)));
    assert!(store.received_messages().is_empty());
}

#[test_log::test]
fn test_decorator_saves_empty_remote_feed() {
    let (sut, client, store) = make_sut();

    sut.load(Box::new(|_| {}));
    client.complete_with_status(200, feed_json(&[]), 0);
    store.complete_deletion(Ok(()));

    assert!(matches!(
        store.received_messages().as_slice(),
        [ReceivedMessage::DeleteCachedFeed, ReceivedMessage::Insert(feed, _)] if feed.is_empty()
    ));
}

#[test_log::test(tokio::test)]
async fn test_remote_load_populates_in_memory_cache() {
    let client = Arc::new(HttpClientSpy::new());
    let local = Arc::new(LocalFeedLoader::new(Arc::new(InMemoryFeedStore::new()), Clock::system()));
    let sut = FeedLoaderCacheDecorator::new(RemoteFeedLoader::new(feed_url(), client.clone()), local.clone());

    assert_eq!(local.load_feed().await.unwrap(), vec![]);

    let (first, first_json) = item("first");
    let remote = sut.load_feed();
    client.complete_with_status(200, feed_json(&[first_json]), 0);

    assert_eq!(remote.await.unwrap(), vec![first.clone()]);
    assert_eq!(local.load_feed().await.unwrap(), vec![first]);
}

#[test_log::test(tokio::test)]
async fn test_file_cache_survives_reopen_and_expires() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("feed.json");
    let (first, _) = item("first");
    let (second, _) = item("second");

    let saved_at = Utc::now();
    {
        let store = Arc::new(CodableFeedStore::open(&path).unwrap());
        let local = LocalFeedLoader::new(store, Clock::fixed(saved_at));
        local.save_feed(vec![first.clone(), second.clone()]).await.unwrap();
        assert_eq!(local.load_feed().await.unwrap(), vec![first.clone(), second.clone()]);
    }

    let store = Arc::new(CodableFeedStore::open(&path).unwrap());

    let fresh = LocalFeedLoader::new(store.clone(), Clock::fixed(saved_at + TimeDelta::days(6)));
    assert_eq!(fresh.load_feed().await.unwrap(), vec![first, second]);

    let stale = LocalFeedLoader::new(store.clone(), Clock::fixed(saved_at + TimeDelta::days(7)));
    assert_eq!(stale.load_feed().await.unwrap(), vec![]);

    let (tx, rx) = tokio::sync::oneshot::channel();
    stale.validate_cache(Box::new(move |result| {
        let _ = tx.send(result);
    }));
    rx.await.unwrap().unwrap();
    assert!(!path.exists());
    assert_eq!(fresh.load_feed().await.unwrap(), vec![]);
}

#[test_log::test(tokio::test)]
async fn test_file_cache_round_trips_local_representation() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(CodableFeedStore::open(dir.path().join("nested").join("feed.json")).unwrap());
    let now = Utc::now();

    let (model, _) = item("only");
    let local = LocalFeedLoader::new(store.clone(), Clock::fixed(now));
    local.save_feed(vec![model.clone()]).await.unwrap();

    let (tx, rx) = tokio::sync::oneshot::channel();
    feedcache::FeedStore::retrieve(
        store.as_ref(),
        Box::new(move |result| {
            let _ = tx.send(result);
        }),
    );
    let expected = LocalFeedItem::new(model.id, model.description, model.location, model.image_url);
    assert_eq!(
        rx.await.unwrap().unwrap(),
        feedcache::CachedFeed::Found {
            feed: vec![expected],
            timestamp: now,
        }
    );
}

#[test_log::test(tokio::test)]
async fn test_decorated_remote_load_persists_to_file_once_save_completes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("feed.json");
    let client = Arc::new(HttpClientSpy::new());
    let (first, first_json) = item("first");

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    {
        let store = Arc::new(CodableFeedStore::open(&path).unwrap());
        let local = Arc::new(LocalFeedLoader::new(store, Clock::system()));
        let cache = Arc::new(NotifyingCache { cache: local, saved: tx });
        let sut = FeedLoaderCacheDecorator::new(RemoteFeedLoader::new(feed_url(), client.clone()), cache);

        let remote = sut.load_feed();
        client.complete_with_status(200, feed_json(&[first_json]), 0);
        assert_eq!(remote.await.unwrap(), vec![first.clone()]);
        assert!(rx.recv().await.unwrap());
    }
    assert!(rx.recv().await.is_none());

    assert!(path.exists());
    let local = LocalFeedLoader::new(Arc::new(CodableFeedStore::open(&path).unwrap()), Clock::system());
    assert_eq!(local.load_feed().await.unwrap(), vec![first]);
}
