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

use bytes::Bytes;
use parking_lot::Mutex;
use url::Url;

use crate::client::{HttpClient, HttpCompletion, HttpResponse, TransportError};

/// HTTP client that records requests and holds their completions until the test completes them.
#[derive(Default)]
pub struct HttpClientSpy {
    messages: Mutex<Vec<(Url, Option<HttpCompletion>)>>,
}

impl std::fmt::Debug for HttpClientSpy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClientSpy")
            .field("requested_urls", &self.requested_urls())
            .finish()
    }
}

impl HttpClientSpy {
    /// Create a new spy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Urls requested so far, in call order.
    pub fn requested_urls(&self) -> Vec<Url> {
        self.messages.lock().iter().map(|(url, _)| url.clone()).collect()
    }

    /// Fail the request at `index` with `error`.
    pub fn complete_with_error(&self, error: TransportError, index: usize) {
        let completion = self.take(index);
        completion(Err(error))
    }

    /// Complete the request at `index` with `status` and body `data`.
    pub fn complete_with_status(&self, status: u16, data: impl Into<Bytes>, index: usize) {
        let (url, completion) = {
            let mut messages = self.messages.lock();
            let (url, completion) = &mut messages[index];
            (url.clone(), completion.take().expect("request already completed"))
        };
        completion(Ok((data.into(), HttpResponse::new(url, status))))
    }

    fn take(&self, index: usize) -> HttpCompletion {
        self.messages.lock()[index].1.take().expect("request already completed")
    }
}

impl HttpClient for HttpClientSpy {
    fn get(&self, url: &Url, completion: HttpCompletion) {
        self.messages.lock().push((url.clone(), Some(completion)));
    }
}
