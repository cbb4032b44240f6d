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

use bytes::Bytes;
use url::Url;

/// Transport error.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The HTTP request could not be completed.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    /// Other error.
    #[error("other error: {0}")]
    Other(#[from] anyhow::Error),
}

impl TransportError {
    /// Create customized error.
    pub fn other(e: impl Into<anyhow::Error>) -> Self {
        Self::Other(e.into())
    }
}

/// Metadata of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// The requested url.
    pub url: Url,
    /// HTTP status code.
    pub status: u16,
}

impl HttpResponse {
    /// Create the metadata of a completed exchange.
    pub fn new(url: Url, status: u16) -> Self {
        Self { url, status }
    }
}

/// Outcome of [`HttpClient::get`].
///
/// Any status code, including non-2xx ones, is a successful exchange at this level.
pub type HttpClientResult = Result<(Bytes, HttpResponse), TransportError>;

/// Completion of [`HttpClient::get`].
pub type HttpCompletion = Box<dyn FnOnce(HttpClientResult) + Send + 'static>;

/// Transport used by the remote feed loader.
pub trait HttpClient: Send + Sync + 'static {
    /// Issue a GET request to `url` and invoke `completion` once with the outcome.
    fn get(&self, url: &Url, completion: HttpCompletion);
}

impl<T> HttpClient for Arc<T>
where
    T: HttpClient + ?Sized,
{
    fn get(&self, url: &Url, completion: HttpCompletion) {
        self.as_ref().get(url, completion)
    }
}
