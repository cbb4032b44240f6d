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

//! Shared components for feedcache.

/// The injected time source.
pub mod clock;
/// Error type shared by all loaders.
pub mod error;
/// Future adapters over the completion based loader contracts.
pub mod future;
/// The canonical feed item.
pub mod item;
/// Loader and cache contracts.
pub mod loader;
/// Liveness token used to suppress completions after the owner is dropped.
pub mod liveness;
