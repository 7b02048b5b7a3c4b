//! Per-dimension match explanation
//!
//! Breaks a single item's match down by dimension so a caller can say in
//! which respects an item agrees with the profile.

use ordered_float::OrderedFloat;
use palate_core::{vector, Dimension, Item, Profile, Result};
use serde::Serialize;
use std::cmp::Reverse;

/// Agreement between the item and the profile on one dimension
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionMatch {
    pub dimension: Dimension,
    pub similarity: f32,
}

/// An item with its overall score and per-dimension breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplainedItem {
    pub name: String,
    pub description: String,
    pub score: f32,
    pub dimensions: Vec<DimensionMatch>,
}

/// Per-dimension similarity between `item` and `profile`, best first.
///
/// Each dimension is compared as a one-element vector, so the value is
/// 1.0 when both share a sign, -1.0 when they differ, and 0.0 when either
/// is zero. Ties keep schema order.
pub fn explain(item: &Item, profile: &Profile) -> Result<Vec<DimensionMatch>> {
    let attributes = item.attribute_vector()?;

    let mut matches: Vec<DimensionMatch> = Dimension::ALL
        .into_iter()
        .map(|dimension| DimensionMatch {
            dimension,
            similarity: vector::similarity(&[attributes[dimension]], &[profile.get(dimension)]),
        })
        .collect();

    matches.sort_by_key(|m| Reverse(OrderedFloat(m.similarity)));
    Ok(matches)
}

/// Overall score plus breakdown for one item
pub fn explain_item(item: &Item, profile: &Profile) -> Result<ExplainedItem> {
    let attributes = item.attribute_vector()?;
    Ok(ExplainedItem {
        name: item.name.clone(),
        description: item.description.clone(),
        score: profile.weights().cosine_similarity(&attributes),
        dimensions: explain(item, profile)?,
    })
}
