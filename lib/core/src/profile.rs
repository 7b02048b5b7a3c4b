//! User preference profile

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema::{AttributeMap, AttributeVector, Dimension};

/// Value of every dimension in the default profile
pub const DEFAULT_PREFERENCE: f32 = 0.5;

/// Preference strength per schema dimension.
///
/// A profile is always complete: raw maps missing any dimension are
/// rejected with `Error::InvalidProfile`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile {
    weights: AttributeVector,
}

impl Profile {
    #[must_use]
    pub fn new(weights: AttributeVector) -> Self {
        Self { weights }
    }

    #[inline]
    #[must_use]
    pub fn weights(&self) -> &AttributeVector {
        &self.weights
    }

    #[inline]
    pub fn get(&self, dim: Dimension) -> f32 {
        self.weights[dim]
    }

    /// Validate a raw key→value map
    pub fn from_map(map: &AttributeMap) -> Result<Self> {
        AttributeVector::from_map(map)
            .map(Self::new)
            .map_err(|missing| Error::InvalidProfile(missing.0.to_string()))
    }

    pub fn to_map(&self) -> AttributeMap {
        self.weights.to_map()
    }

    /// Whether every weight is a finite number
    pub fn is_finite(&self) -> bool {
        self.weights.as_slice().iter().all(|w| w.is_finite())
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new(AttributeVector::splat(DEFAULT_PREFERENCE))
    }
}

impl From<AttributeVector> for Profile {
    fn from(weights: AttributeVector) -> Self {
        Self::new(weights)
    }
}
