//! Attribute schema
//!
//! The fixed, ordered set of dimensions every item and every profile is
//! scored on. The schema is closed: adding a dimension is a code change,
//! not a configuration change.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::error::Error;

/// Number of dimensions in the schema
pub const DIMENSIONS: usize = 5;

/// Raw key→value attribute map, as stored in documents
pub type AttributeMap = HashMap<String, f32>;

/// A single schema dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Sweetness,
    Spiciness,
    Price,
    Distance,
    Rating,
}

impl Dimension {
    /// All dimensions in schema order
    pub const ALL: [Dimension; DIMENSIONS] = [
        Dimension::Sweetness,
        Dimension::Spiciness,
        Dimension::Price,
        Dimension::Distance,
        Dimension::Rating,
    ];

    /// Position of this dimension in schema order
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// JSON key for this dimension
    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Sweetness => "sweetness",
            Dimension::Spiciness => "spiciness",
            Dimension::Price => "price",
            Dimension::Distance => "distance",
            Dimension::Rating => "rating",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| Error::UnknownDimension(s.to_string()))
    }
}

/// Returned when a raw map lacks a schema key
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("missing dimension '{0}'")]
pub struct MissingDimension(pub Dimension);

/// One value per schema dimension, complete by construction
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "AttributeMap")]
pub struct AttributeVector {
    values: [f32; DIMENSIONS],
}

impl AttributeVector {
    #[inline]
    #[must_use]
    pub fn new(values: [f32; DIMENSIONS]) -> Self {
        Self { values }
    }

    /// Every dimension set to `value`
    #[inline]
    #[must_use]
    pub fn splat(value: f32) -> Self {
        Self { values: [value; DIMENSIONS] }
    }

    /// Build from a raw map; fails on the first schema key the map lacks.
    /// Keys outside the schema are ignored.
    pub fn from_map(map: &AttributeMap) -> Result<Self, MissingDimension> {
        let mut values = [0.0f32; DIMENSIONS];
        for dim in Dimension::ALL {
            values[dim.index()] = *map.get(dim.as_str()).ok_or(MissingDimension(dim))?;
        }
        Ok(Self { values })
    }

    /// Convert back into a raw map
    pub fn to_map(&self) -> AttributeMap {
        Dimension::ALL
            .into_iter()
            .map(|d| (d.as_str().to_string(), self[d]))
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Iterate `(dimension, value)` pairs in schema order
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f32)> + '_ {
        Dimension::ALL.into_iter().map(move |d| (d, self[d]))
    }

    /// Cosine similarity with another attribute vector
    #[inline]
    pub fn cosine_similarity(&self, other: &AttributeVector) -> f32 {
        crate::vector::similarity(&self.values, &other.values)
    }
}

impl Index<Dimension> for AttributeVector {
    type Output = f32;

    #[inline]
    fn index(&self, dim: Dimension) -> &f32 {
        &self.values[dim.index()]
    }
}

impl IndexMut<Dimension> for AttributeVector {
    #[inline]
    fn index_mut(&mut self, dim: Dimension) -> &mut f32 {
        &mut self.values[dim.index()]
    }
}

impl TryFrom<AttributeMap> for AttributeVector {
    type Error = MissingDimension;

    fn try_from(map: AttributeMap) -> Result<Self, Self::Error> {
        AttributeVector::from_map(&map)
    }
}

// Serialized as an object in schema order so written documents stay stable.
impl Serialize for AttributeVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(DIMENSIONS))?;
        for (dim, value) in self.iter() {
            map.serialize_entry(dim.as_str(), &value)?;
        }
        map.end()
    }
}
