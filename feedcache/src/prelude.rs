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

pub use crate::{
    common::{
        clock::Clock,
        error::{Error, Result},
        future::{FeedCacheExt, FeedLoaderExt},
        item::FeedItem,
        liveness::{Liveness, LivenessWatch},
        loader::{FeedCache, FeedLoader, LoadCompletion, LoadFeedResult, SaveCompletion, SaveFeedResult},
    },
    decorator::FeedLoaderCacheDecorator,
    local::{LocalFeedLoader, LocalFeedLoaderBuilder, ValidationCompletion},
    policy::{FeedCachePolicy, FEED_CACHE_MAX_AGE_IN_DAYS},
    remote::{
        FeedItemsMapper, HttpClient, HttpClientResult, HttpCompletion, HttpResponse, RemoteFeedLoader,
        ReqwestHttpClient, ReqwestHttpClientBuilder, TransportError,
    },
    storage::{
        CachedFeed, CodableFeedStore, CodableFeedStoreBuilder, DeletionCompletion, Error as StoreError, FeedStore,
        InMemoryFeedStore, InsertionCompletion, LocalFeedItem, RetrievalCompletion,
    },
};
