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

use feedcache_common::{error::Error, item::FeedItem, loader::LoadFeedResult};
use serde::Deserialize;
use url::Url;
use uuid::Uuid;

use crate::client::HttpResponse;

const OK_200: u16 = 200;

#[derive(Debug, Deserialize)]
struct Root {
    items: Vec<RemoteFeedItem>,
}

#[derive(Debug, Deserialize)]
struct RemoteFeedItem {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

impl From<RemoteFeedItem> for FeedItem {
    fn from(item: RemoteFeedItem) -> Self {
        FeedItem::new(item.id, item.description, item.location, item.image)
    }
}

/// Maps a feed API response to feed items.
#[derive(Debug)]
pub struct FeedItemsMapper;

impl FeedItemsMapper {
    /// Map the body of a completed exchange.
    ///
    /// Anything but a 200 response with a decodable `{"items": [..]}` body is [`Error::InvalidData`].
    pub fn map(data: &[u8], response: &HttpResponse) -> LoadFeedResult {
        if response.status != OK_200 {
            tracing::debug!("[feed items mapper]: unexpected status {} from {}", response.status, response.url);
            return Err(Error::InvalidData);
        }
        let root: Root = serde_json::from_slice(data).map_err(|e| {
            tracing::debug!("[feed items mapper]: undecodable body from {}: {e}", response.url);
            Error::InvalidData
        })?;
        Ok(root.items.into_iter().map(FeedItem::from).collect())
    }
}
