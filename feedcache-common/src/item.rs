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

use url::Url;
use uuid::Uuid;

/// A single entry of a feed.
///
/// [`FeedItem`] is a plain value. Two items are equal if all of their fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedItem {
    /// Globally unique identifier of the item.
    pub id: Uuid,
    /// Optional description text.
    pub description: Option<String>,
    /// Optional location text.
    pub location: Option<String>,
    /// Location of the image of the item.
    pub image_url: Url,
}

impl FeedItem {
    /// Create a new feed item.
    pub fn new(id: Uuid, description: Option<String>, location: Option<String>, image_url: Url) -> Self {
        Self {
            id,
            description,
            location,
            image_url,
        }
    }
}
