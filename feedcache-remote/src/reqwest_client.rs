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

use std::time::Duration;

use bytes::Bytes;
use tokio::runtime::Handle;
use url::Url;

use crate::client::{HttpClient, HttpCompletion, HttpResponse, TransportError};

/// Builder for [`ReqwestHttpClient`].
#[derive(Debug, Default)]
pub struct ReqwestHttpClientBuilder {
    timeout: Option<Duration>,
    user_agent: Option<String>,
    runtime: Option<Handle>,
}

impl ReqwestHttpClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the total timeout of a request.
    ///
    /// Default: no timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Set the runtime on which requests are driven.
    ///
    /// Default: the runtime of the caller of `build`.
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Build the client.
    ///
    /// Fails if no runtime is given and `build` is not called within a tokio runtime.
    pub fn build(self) -> Result<ReqwestHttpClient, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder.build()?;
        let runtime = match self.runtime {
            Some(runtime) => runtime,
            None => Handle::try_current().map_err(TransportError::other)?,
        };
        Ok(ReqwestHttpClient { client, runtime })
    }
}

/// [`HttpClient`] backed by [`reqwest`].
///
/// Each request is spawned on the configured tokio runtime, and the completion is invoked on a worker of that
/// runtime.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    runtime: Handle,
}

impl ReqwestHttpClient {
    /// Create a client with default options on the current tokio runtime.
    pub fn new() -> Result<Self, TransportError> {
        ReqwestHttpClientBuilder::new().build()
    }

    async fn fetch(client: reqwest::Client, url: Url) -> Result<(Bytes, HttpResponse), TransportError> {
        let response = client.get(url.clone()).send().await?;
        let status = response.status().as_u16();
        let data = response.bytes().await?;
        Ok((data, HttpResponse::new(url, status)))
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &Url, completion: HttpCompletion) {
        let client = self.client.clone();
        let url = url.clone();
        self.runtime.spawn(async move {
            let result = Self::fetch(client, url).await;
            if let Err(e) = &result {
                tracing::warn!("[reqwest http client]: request failed: {e}");
            }
            completion(result)
        });
    }
}
