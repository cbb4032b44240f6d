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

use std::sync::{Arc, Weak};

/// Owner side of a liveness token.
///
/// A component that hands completions to a collaborator keeps a [`Liveness`] and captures a
/// [`LivenessWatch`] in each completion. Dropping the [`Liveness`] invalidates every watch synchronously, so
/// completions fired afterwards can detect that the owner is gone and skip the caller's callback.
///
/// [`Liveness`] is not `Clone`.
#[derive(Debug, Default)]
pub struct Liveness {
    token: Arc<()>,
}

impl Liveness {
    /// Create a new liveness token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a non-owning watch of the token.
    pub fn watch(&self) -> LivenessWatch {
        LivenessWatch {
            token: Arc::downgrade(&self.token),
        }
    }
}

/// Non-owning observer of a [`Liveness`].
#[derive(Debug, Clone)]
pub struct LivenessWatch {
    token: Weak<()>,
}

impl LivenessWatch {
    /// Return `true` if the owning [`Liveness`] has not been dropped.
    pub fn is_alive(&self) -> bool {
        self.token.strong_count() > 0
    }

    /// Invoke `completion` with `value` only if the owner is still alive.
    ///
    /// The token is held until `completion` returns, so an owner dropped concurrently is only released after
    /// the delivery. Returns `false` if the value was discarded.
    pub fn deliver<T, F>(&self, completion: F, value: T) -> bool
    where
        F: FnOnce(T),
    {
        let Some(_token) = self.token.upgrade() else {
            return false;
        };
        completion(value);
        true
    }
}
