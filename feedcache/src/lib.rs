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

//! feedcache - cache-first feed loading for Rust.
//!
//! [`LocalFeedLoader`] coordinates a [`FeedStore`] snapshot with a 7-day freshness window,
//! [`RemoteFeedLoader`] fetches the feed over an [`HttpClient`], and [`FeedLoaderCacheDecorator`] persists every
//! successful remote load into the local cache.
//!
//! All loaders share the completion based [`FeedLoader`] contract; [`FeedLoaderExt`] and [`FeedCacheExt`] adapt
//! it to futures.

use feedcache_common as common;
use feedcache_remote as remote;
use feedcache_storage as storage;

mod decorator;
mod local;
mod policy;
mod prelude;

pub use prelude::*;
