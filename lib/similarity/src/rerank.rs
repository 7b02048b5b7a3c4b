//! Profile ranking
//!
//! Scores candidate items against a profile by cosine similarity and
//! returns them best first.

use ahash::AHashSet;
use ordered_float::OrderedFloat;
use palate_core::{AttributeMap, Item, Profile};
use std::cmp::Reverse;
use tracing::{debug, warn};

/// One ranked item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedResult<'a> {
    /// Cosine similarity to the profile, in [-1.0, 1.0]
    pub score: f32,
    /// The catalog item
    pub item: &'a Item,
}

impl RankedResult<'_> {
    pub fn name(&self) -> &str {
        &self.item.name
    }
}

/// Ranks catalog items against a profile
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker;

impl Ranker {
    pub fn new() -> Self {
        Self
    }

    /// Rank the catalog items named in `candidates`, best first.
    ///
    /// Candidates absent from the catalog are dropped. Items whose
    /// attributes are missing or incomplete stay in the ranking with a
    /// score of 0.0. Ties keep catalog order. Unnamed catalog items are
    /// never ranked.
    ///
    /// Every catalog entry carrying a candidate name is scored, so a
    /// catalog with duplicate names yields one result per entry and the
    /// output can then be longer than the candidate set.
    pub fn rank<'a, S: AsRef<str>>(
        &self,
        candidates: &[S],
        catalog: &'a [Item],
        profile: &Profile,
    ) -> Vec<RankedResult<'a>> {
        let wanted: AHashSet<&str> = candidates.iter().map(AsRef::as_ref).collect();

        let mut results: Vec<RankedResult<'a>> = catalog
            .iter()
            .filter(|item| {
                if item.name.is_empty() {
                    warn!(description = %item.description, "skipping catalog item without a name");
                    return false;
                }
                wanted.contains(item.name.as_str())
            })
            .map(|item| RankedResult {
                score: self.score(item, profile),
                item,
            })
            .collect();

        // sort_by_key is stable
        results.sort_by_key(|r| Reverse(OrderedFloat(r.score)));

        debug!(
            candidates = wanted.len(),
            ranked = results.len(),
            "ranked candidates"
        );
        results
    }

    /// Rank against a raw profile map.
    ///
    /// A map missing any schema key is an invalid profile: the whole call
    /// returns an empty ranking.
    pub fn rank_raw_profile<'a, S: AsRef<str>>(
        &self,
        candidates: &[S],
        catalog: &'a [Item],
        profile: &AttributeMap,
    ) -> Vec<RankedResult<'a>> {
        match Profile::from_map(profile) {
            Ok(profile) => self.rank(candidates, catalog, &profile),
            Err(e) => {
                warn!(error = %e, "user profile is invalid, nothing ranked");
                Vec::new()
            }
        }
    }

    /// Similarity of a single item to the profile
    pub fn score(&self, item: &Item, profile: &Profile) -> f32 {
        match item.attribute_vector() {
            Ok(attributes) => profile.weights().cosine_similarity(&attributes),
            Err(e) => {
                warn!(item = %item.name, error = %e, "giving default score 0");
                0.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palate_core::AttributeVector;
    use std::collections::HashMap;

    fn unit(i: usize) -> AttributeVector {
        let mut values = [0.0; 5];
        values[i] = 1.0;
        AttributeVector::new(values)
    }

    fn two_item_catalog() -> Vec<Item> {
        vec![
            Item::new("A", "sweet place", unit(0)),
            Item::new("B", "spicy place", unit(1)),
        ]
    }

    fn names(results: &[RankedResult<'_>]) -> Vec<String> {
        results.iter().map(|r| r.name().to_string()).collect()
    }

    #[test]
    fn test_rank_two_items() {
        let catalog = two_item_catalog();
        let profile = Profile::new(unit(0));

        let results = Ranker::new().rank(&["A", "B"], &catalog, &profile);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].score, 1.0);
        assert_eq!(results[0].name(), "A");
        assert_eq!(results[1].score, 0.0);
        assert_eq!(results[1].name(), "B");
    }

    #[test]
    fn test_sorted_descending() {
        let catalog = vec![
            Item::new("low", "", AttributeVector::new([0.0, 1.0, 0.0, 0.0, 0.0])),
            Item::new("mid", "", AttributeVector::new([0.5, 0.5, 0.0, 0.0, 0.0])),
            Item::new("high", "", AttributeVector::new([0.9, 0.1, 0.0, 0.0, 0.0])),
        ];
        let profile = Profile::new(unit(0));

        let results = Ranker::new().rank(&["low", "mid", "high"], &catalog, &profile);

        assert_eq!(names(&results), ["high", "mid", "low"]);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = vec![
            Item::new("first", "", unit(2)),
            Item::new("best", "", unit(0)),
            Item::new("second", "", unit(3)),
            Item::new("third", "", unit(4)),
        ];
        let profile = Profile::new(unit(0));

        let results = Ranker::new().rank(&["third", "second", "first", "best"], &catalog, &profile);

        assert_eq!(names(&results), ["best", "first", "second", "third"]);
    }

    #[test]
    fn test_unknown_candidates_dropped() {
        let catalog = two_item_catalog();
        let profile = Profile::default();

        let results = Ranker::new().rank(&["A", "ghost", "phantom"], &catalog, &profile);

        assert_eq!(names(&results), ["A"]);
    }

    #[test]
    fn test_only_candidates_ranked() {
        let catalog = two_item_catalog();
        let results = Ranker::new().rank(&["B"], &catalog, &Profile::default());
        assert_eq!(names(&results), ["B"]);

        let none: [&str; 0] = [];
        assert!(Ranker::new().rank(&none, &catalog, &Profile::default()).is_empty());
    }

    #[test]
    fn test_missing_attributes_scored_zero() {
        let mut catalog = two_item_catalog();
        catalog.insert(0, Item::without_attributes("bare", "no data"));
        let profile = Profile::new(AttributeVector::new([1.0, -1.0, 0.0, 0.0, 0.0]));

        let results = Ranker::new().rank(&["A", "B", "bare"], &catalog, &profile);

        assert_eq!(results.len(), 3);
        assert_eq!(names(&results), ["A", "bare", "B"]);
        assert_eq!(results[1].score, 0.0);
        assert!(results[2].score < 0.0);
    }

    #[test]
    fn test_incomplete_attributes_scored_zero() {
        let partial = Item {
            name: "partial".to_string(),
            description: String::new(),
            attributes: Some(HashMap::from([("sweetness".to_string(), 1.0)])),
        };
        let profile = Profile::new(unit(0));
        assert_eq!(Ranker::new().score(&partial, &profile), 0.0);
    }

    #[test]
    fn test_zero_attribute_item() {
        let catalog = vec![Item::new("zero", "", AttributeVector::splat(0.0))];
        let results = Ranker::new().rank(&["zero"], &catalog, &Profile::default());
        assert_eq!(results[0].score, 0.0);
    }

    #[test]
    fn test_invalid_raw_profile() {
        let catalog = two_item_catalog();
        let raw: AttributeMap = HashMap::from([
            ("sweetness".to_string(), 1.0),
            ("spiciness".to_string(), 0.0),
        ]);

        assert!(Ranker::new().rank_raw_profile(&["A", "B"], &catalog, &raw).is_empty());
    }

    #[test]
    fn test_valid_raw_profile() {
        let catalog = two_item_catalog();
        let raw = unit(1).to_map();

        let results = Ranker::new().rank_raw_profile(&["A", "B"], &catalog, &raw);

        assert_eq!(names(&results), ["B", "A"]);
    }

    #[test]
    fn test_duplicate_names_ranked_per_entry() {
        let mut catalog = two_item_catalog();
        catalog.push(Item::new("A", "second branch", unit(1)));
        let profile = Profile::new(unit(0));

        let results = Ranker::new().rank(&["A"], &catalog, &profile);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].item.description, "sweet place");
        assert_eq!(results[0].score, 1.0);
        assert_eq!(results[1].item.description, "second branch");
        assert_eq!(results[1].score, 0.0);
    }

    #[test]
    fn test_unnamed_item_never_ranked() {
        let mut catalog = two_item_catalog();
        catalog.push(Item::new("", "entry without a name", unit(0)));

        let results = Ranker::new().rank(&["A", ""], &catalog, &Profile::new(unit(0)));

        assert_eq!(names(&results), ["A"]);
    }

    #[test]
    fn test_result_borrows_catalog_items() {
        let catalog = two_item_catalog();
        let results = Ranker::new().rank(&["A"], &catalog, &Profile::default());
        assert!(std::ptr::eq(results[0].item, &catalog[0]));
    }
}
