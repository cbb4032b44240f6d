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

use feedcache::{
    CodableFeedStoreBuilder, FeedCacheExt, FeedItem, FeedLoaderExt, LocalFeedLoaderBuilder, StoreError,
};
use tempfile::tempdir;
use url::Url;
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    demos::init_logger();

    let dir = tempdir()?;
    let path = dir.path().join("feed.json");

    let store = Arc::new(
        CodableFeedStoreBuilder::new(&path)
            .with_thread_name("demo-store")
            .build()?,
    );
    let local = LocalFeedLoaderBuilder::new(store).with_name("offline").build();

    assert!(local.load_feed().await?.is_empty());

    let feed = vec![
        FeedItem::new(
            Uuid::new_v4(),
            Some("Sunrise over the bay".to_string()),
            Some("Lisbon".to_string()),
            Url::parse("https://images.example.com/sunrise.jpg")?,
        ),
        FeedItem::new(
            Uuid::new_v4(),
            None,
            None,
            Url::parse("https://images.example.com/untitled.jpg")?,
        ),
    ];
    local.save_feed(feed.clone()).await?;
    assert_eq!(local.load_feed().await?, feed);

    let (tx, rx) = tokio::sync::oneshot::channel();
    local.validate_cache(Box::new(move |result| {
        let _ = tx.send(result);
    }));
    rx.await??;

    tracing::info!("cached {} items at {:?}", feed.len(), path);

    // Corrupt snapshots surface as store errors.
    std::fs::write(&path, b"not json")?;
    match local.load_feed().await {
        Err(e) => match e.downcast_store::<StoreError>() {
            Ok(StoreError::Codec(e)) => tracing::info!("unreadable snapshot: {e}"),
            other => anyhow::bail!("unexpected outcome: {other:?}"),
        },
        Ok(feed) => anyhow::bail!("unexpected feed: {feed:?}"),
    }

    Ok(())
}
