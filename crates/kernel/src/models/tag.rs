//! Tag model and the tag universe.
//!
//! Tags classify video games (genres, platforms, play modes). The full set of
//! tags known to the catalog is the [`TagUniverse`]; catalog queries may only
//! reference identifiers drawn from it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A classification tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag identifier.
    pub id: i64,

    /// Human-readable name.
    pub name: String,
}

impl Tag {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Errors raised while assembling a tag universe.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TagUniverseError {
    #[error("duplicate tag id {0}")]
    DuplicateTag(i64),
}

/// The closed set of valid tags, ordered by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Tag>", try_from = "Vec<Tag>")]
pub struct TagUniverse {
    tags: BTreeMap<i64, Tag>,
}

impl TagUniverse {
    /// Build a universe, rejecting duplicate identifiers.
    pub fn new(tags: impl IntoIterator<Item = Tag>) -> Result<Self, TagUniverseError> {
        let mut map = BTreeMap::new();
        for tag in tags {
            let id = tag.id;
            if map.insert(id, tag).is_some() {
                return Err(TagUniverseError::DuplicateTag(id));
            }
        }
        Ok(Self { tags: map })
    }

    pub fn contains(&self, id: i64) -> bool {
        self.tags.contains_key(&id)
    }

    pub fn get(&self, id: i64) -> Option<&Tag> {
        self.tags.get(&id)
    }

    /// Tags in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.values()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl From<TagUniverse> for Vec<Tag> {
    fn from(universe: TagUniverse) -> Self {
        universe.tags.into_values().collect()
    }
}

impl TryFrom<Vec<Tag>> for TagUniverse {
    type Error = TagUniverseError;

    fn try_from(tags: Vec<Tag>) -> Result<Self, Self::Error> {
        Self::new(tags)
    }
}
