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

/// Errors delivered by feed loaders and caches.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The transport could not complete the exchange.
    #[error("connectivity error")]
    Connectivity,
    /// A response was received but its status or payload is not a valid feed.
    #[error("invalid data")]
    InvalidData,
    /// Error raised by the feed store, propagated as is.
    #[error("feed store error: {0}")]
    Store(Box<dyn std::error::Error + Send + Sync + 'static>),
    /// The completion was dropped without being invoked.
    #[error("completion dropped before delivery")]
    Canceled,
}

impl Error {
    /// Wrap a feed store error.
    pub fn store<E>(e: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        Self::Store(e.into())
    }

    /// Downcast the wrapped feed store error to its concrete type.
    ///
    /// Only the `Store` variant can be downcasted. Otherwise the error itself is returned.
    pub fn downcast_store<T>(self) -> std::result::Result<T, Self>
    where
        T: std::error::Error + 'static,
    {
        match self {
            Self::Store(e) => e.downcast::<T>().map(|e| *e).map_err(Self::Store),
            e => Err(e),
        }
    }
}

/// Result type for feedcache.
pub type Result<T> = std::result::Result<T, Error>;
