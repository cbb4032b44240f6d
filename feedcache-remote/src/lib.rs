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

//! Remote feed loading for feedcache.

mod client;
mod loader;
mod mapper;
mod reqwest_client;

/// Test doubles for the transport contract.
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use client::{HttpClient, HttpClientResult, HttpCompletion, HttpResponse, TransportError};
pub use loader::RemoteFeedLoader;
pub use mapper::FeedItemsMapper;
pub use reqwest_client::{ReqwestHttpClient, ReqwestHttpClientBuilder};
