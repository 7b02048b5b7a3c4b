//! Catalog items

use ahash::AHashMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{Error, Result};
use crate::schema::{AttributeMap, AttributeVector};

/// A rankable item. Its attributes are kept as stored; completeness is
/// checked when a vector is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Empty when the stored entry had no name; such items are never ranked
    /// or looked up
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(
        default,
        deserialize_with = "lenient_attributes",
        skip_serializing_if = "Option::is_none"
    )]
    pub attributes: Option<AttributeMap>,
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>, attributes: AttributeVector) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            attributes: Some(attributes.to_map()),
        }
    }

    /// An item with no attribute data at all
    pub fn without_attributes(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            attributes: None,
        }
    }

    /// The item's attributes in schema order.
    ///
    /// Fails with `MissingAttributes` when there is no attribute data and
    /// `IncompleteAttributes` when some schema key is absent.
    pub fn attribute_vector(&self) -> Result<AttributeVector> {
        match &self.attributes {
            None => Err(Error::MissingAttributes(self.name.clone())),
            Some(map) if map.is_empty() => Err(Error::MissingAttributes(self.name.clone())),
            Some(map) => AttributeVector::from_map(map).map_err(|missing| Error::IncompleteAttributes {
                item: self.name.clone(),
                key: missing.0.to_string(),
            }),
        }
    }
}

// Anything that is not an object reads as "no attributes"; non-numeric
// entries and values outside the f32 range are dropped so the key counts
// as missing.
fn lenient_attributes<'de, D>(deserializer: D) -> std::result::Result<Option<AttributeMap>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Object(entries)) => Some(
            entries
                .into_iter()
                .filter_map(|(k, v)| {
                    let n = v.as_f64()? as f32;
                    n.is_finite().then_some((k, n))
                })
                .collect(),
        ),
        _ => None,
    })
}

/// Name → item lookup. Later duplicates overwrite earlier ones; unnamed
/// items are left out.
pub fn index_by_name(items: &[Item]) -> AHashMap<&str, &Item> {
    let mut lookup = AHashMap::with_capacity(items.len());
    for item in items {
        if item.name.is_empty() {
            warn!(description = %item.description, "skipping catalog item without a name");
            continue;
        }
        lookup.insert(item.name.as_str(), item);
    }
    lookup
}

/// Ordered item collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    #[inline]
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item by name, last occurrence wins
    pub fn get(&self, name: &str) -> Option<&Item> {
        if name.is_empty() {
            return None;
        }
        self.items.iter().rev().find(|item| item.name == name)
    }

    /// Description of the named item
    pub fn describe(&self, name: &str) -> Option<&str> {
        self.get(name).map(|item| item.description.as_str())
    }

    /// Names of items matching any comma-separated keyword.
    ///
    /// Keywords are trimmed of spaces and one pair of surrounding double
    /// quotes; an item matches when a keyword occurs in its name or
    /// description. With no usable keywords every item matches.
    pub fn filter_by_keywords(&self, query: &str) -> Vec<String> {
        let keywords = parse_keywords(query);
        self.items
            .iter()
            .filter(|item| !item.name.is_empty())
            .filter(|item| {
                keywords.is_empty()
                    || keywords
                        .iter()
                        .any(|kw| item.name.contains(kw.as_str()) || item.description.contains(kw.as_str()))
            })
            .map(|item| item.name.clone())
            .collect()
    }
}

impl From<Vec<Item>> for Catalog {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

fn parse_keywords(query: &str) -> Vec<String> {
    query
        .split(',')
        .map(|raw| {
            let kw = raw.trim_matches(' ');
            let kw = kw.strip_prefix('"').unwrap_or(kw);
            let kw = kw.strip_suffix('"').unwrap_or(kw);
            kw.to_string()
        })
        .filter(|kw| !kw.is_empty())
        .collect()
}
