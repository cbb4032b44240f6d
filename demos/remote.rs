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

use std::{path::PathBuf, sync::Arc, time::Duration};

use clap::Parser;
use feedcache::{
    CodableFeedStore, FeedCacheExt, FeedLoaderExt, LocalFeedLoaderBuilder, RemoteFeedLoader, ReqwestHttpClientBuilder,
};
use url::Url;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
struct Args {
    /// Feed endpoint.
    #[arg(short, long)]
    url: Url,

    /// File that holds the cached feed snapshot.
    #[arg(short, long, default_value = "feed.json")]
    cache: PathBuf,

    /// Request timeout. (s)
    #[arg(long, default_value_t = 10)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    demos::init_logger();

    let args = Args::parse();

    let client = ReqwestHttpClientBuilder::new()
        .with_timeout(Duration::from_secs(args.timeout))
        .with_user_agent("feedcache-demo")
        .build()?;
    let store = Arc::new(CodableFeedStore::open(&args.cache)?);
    let local = LocalFeedLoaderBuilder::new(store).with_name("remote-demo").build();
    let remote = RemoteFeedLoader::new(args.url, Arc::new(client));

    // Dropping `local` discards a pending save, so the write is awaited here.
    let feed = match remote.load_feed().await {
        Ok(feed) => {
            tracing::info!("loaded {} items from {}", feed.len(), remote.url());
            if let Err(e) = local.save_feed(feed.clone()).await {
                tracing::warn!("failed to cache feed: {e}");
            }
            feed
        }
        Err(e) => {
            tracing::warn!("remote load failed, fall back to cache: {e}");
            local.load_feed().await?
        }
    };

    for item in feed {
        println!(
            "{} {} {}",
            item.id,
            item.description.as_deref().unwrap_or("-"),
            item.image_url
        );
    }

    Ok(())
}
