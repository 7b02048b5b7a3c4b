//! Decay-weighted profile estimation
//!
//! Rebuilds the profile from the full interaction history: each record
//! contributes its item's attributes weighted by how recent it is, and the
//! profile is the weighted average over all accepted records.

use chrono::{Local, NaiveDate};
use palate_core::{
    decay_weight, index_by_name, AttributeVector, Dimension, HistoryRecord, Item, Profile, DIMENSIONS,
};
use tracing::{debug, info, warn};

use crate::config::EngineConfig;

/// Outcome of a recompute, with counts for reporting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub profile: Profile,
    /// Records that contributed to the average
    pub accepted: usize,
    /// Records skipped for any reason
    pub skipped: usize,
    /// Sum of decay weights of accepted records
    pub total_weight: f64,
}

impl Estimate {
    /// Whether the profile fell back to the default
    pub fn is_default(&self) -> bool {
        self.accepted == 0
    }
}

/// Recomputes a profile from history
#[derive(Debug, Clone, Default)]
pub struct ProfileEstimator {
    config: EngineConfig,
}

impl ProfileEstimator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Recompute the profile as of today (local calendar)
    pub fn recompute(&self, history: &[HistoryRecord], catalog: &[Item]) -> Profile {
        self.recompute_at(history, catalog, Local::now().date_naive())
    }

    /// Recompute the profile as seen from `reference_date`
    pub fn recompute_at(
        &self,
        history: &[HistoryRecord],
        catalog: &[Item],
        reference_date: NaiveDate,
    ) -> Profile {
        self.estimate_at(history, catalog, reference_date).profile
    }

    /// Recompute and report how many records were used.
    ///
    /// The result always replaces the previous profile; with no usable
    /// record it is the default profile.
    pub fn estimate_at(
        &self,
        history: &[HistoryRecord],
        catalog: &[Item],
        reference_date: NaiveDate,
    ) -> Estimate {
        let lookup = index_by_name(catalog);

        let mut weighted_sums = [0.0f64; DIMENSIONS];
        let mut total_weight = 0.0f64;
        let mut accepted = 0usize;

        for record in history {
            if !record.is_complete() {
                warn!(?record, "skipping invalid history record");
                continue;
            }

            let weight = decay_weight(&record.order_date, reference_date, self.config.decay_lambda);
            if weight <= 0.0 {
                continue;
            }

            let Some(item) = lookup.get(record.item_name.as_str()) else {
                warn!(item = %record.item_name, "item from history not found in catalog, skipping");
                continue;
            };

            let attributes = match item.attribute_vector() {
                Ok(attributes) => attributes,
                Err(e) => {
                    warn!(item = %record.item_name, error = %e, "invalid attributes for profile update, skipping");
                    continue;
                }
            };

            debug!(item = %record.item_name, date = %record.order_date, weight, "accepted history record");
            total_weight += weight;
            accepted += 1;
            for (dim, value) in attributes.iter() {
                weighted_sums[dim.index()] += f64::from(value) * weight;
            }
        }

        let skipped = history.len() - accepted;

        if total_weight <= 0.0 {
            info!(records = history.len(), "no valid history signal, using default profile");
            return Estimate {
                profile: Profile::default(),
                accepted: 0,
                skipped,
                total_weight: 0.0,
            };
        }

        let mut weights = AttributeVector::splat(0.0);
        for dim in Dimension::ALL {
            weights[dim] = (weighted_sums[dim.index()] / total_weight) as f32;
        }
        let profile = Profile::new(weights);

        if !profile.is_finite() {
            warn!("recomputed profile is not finite, using default profile");
            return Estimate {
                profile: Profile::default(),
                accepted: 0,
                skipped: history.len(),
                total_weight: 0.0,
            };
        }

        info!(accepted, skipped, total_weight, "user profile recalculated");
        Estimate {
            profile,
            accepted,
            skipped,
            total_weight,
        }
    }
}
