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
    error::Error,
    liveness::Liveness,
    loader::{FeedLoader, LoadCompletion},
};
use url::Url;

use crate::{client::HttpClient, mapper::FeedItemsMapper};

/// Loads a feed from a remote url through an [`HttpClient`].
///
/// Each `load` issues exactly one request. Concurrent loads are independent and are not coalesced.
///
/// Dropping the loader discards the completions of requests that are still in flight.
pub struct RemoteFeedLoader<C>
where
    C: HttpClient,
{
    url: Url,
    client: Arc<C>,
    liveness: Liveness,
}

impl<C> Debug for RemoteFeedLoader<C>
where
    C: HttpClient,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteFeedLoader").field("url", &self.url).finish()
    }
}

impl<C> RemoteFeedLoader<C>
where
    C: HttpClient,
{
    /// Create a remote feed loader for `url`.
    pub fn new(url: Url, client: Arc<C>) -> Self {
        Self {
            url,
            client,
            liveness: Liveness::new(),
        }
    }

    /// The feed url.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl<C> FeedLoader for RemoteFeedLoader<C>
where
    C: HttpClient,
{
    fn load(&self, completion: LoadCompletion) {
        let watch = self.liveness.watch();
        self.client.get(
            &self.url,
            Box::new(move |result| {
                if !watch.is_alive() {
                    tracing::debug!("[remote feed loader]: loader dropped, discard response");
                    return;
                }
                let result = match result {
                    Ok((data, response)) => FeedItemsMapper::map(&data, &response),
                    Err(e) => {
                        tracing::debug!("[remote feed loader]: transport error: {e}");
                        Err(Error::Connectivity)
                    }
                };
                if !watch.deliver(completion, result) {
                    tracing::debug!("[remote feed loader]: loader dropped, discard response");
                }
            }),
        );
    }
}
