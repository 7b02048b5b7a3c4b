use chrono::{Local, NaiveDate};
use palate_core::{Catalog, Error, HistoryRecord, Profile, Result};
use palate_similarity::{explain_item, EngineConfig, Estimate, ExplainedItem, ProfileEstimator, RankedResult, Ranker};
use std::path::Path;
use tracing::info;

use crate::json_store::JsonStore;

/// Wires the document store to the ranker and the estimator.
///
/// The catalog is read once on open; the profile and the history are read
/// fresh for every operation.
pub struct StorageManager {
    store: JsonStore,
    catalog: Catalog,
    ranker: Ranker,
    estimator: ProfileEstimator,
}

impl StorageManager {
    pub fn open<P: AsRef<Path>>(data_dir: P, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let store = JsonStore::new(data_dir)?;
        let catalog = store.load_catalog()?;
        info!(items = catalog.len(), dir = %store.data_dir().display(), "catalog loaded");

        Ok(Self {
            store,
            catalog,
            ranker: Ranker::new(),
            estimator: ProfileEstimator::new(config),
        })
    }

    #[inline]
    #[must_use]
    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The stored profile (default if absent or malformed)
    pub fn profile(&self) -> Profile {
        self.store.load_profile()
    }

    /// Rank the named candidates against the stored profile
    pub fn rank<S: AsRef<str>>(&self, candidates: &[S]) -> Vec<RankedResult<'_>> {
        let profile = self.store.load_profile();
        self.ranker.rank(candidates, self.catalog.items(), &profile)
    }

    /// Rank the items matching a comma-separated keyword query
    pub fn rank_query(&self, query: &str) -> Vec<RankedResult<'_>> {
        let candidates = self.catalog.filter_by_keywords(query);
        info!(query, matches = candidates.len(), "filtered catalog");
        self.rank(candidates.as_slice())
    }

    /// Score breakdown of one item against the stored profile
    pub fn explain(&self, name: &str) -> Result<ExplainedItem> {
        let item = self
            .catalog
            .get(name)
            .ok_or_else(|| Error::ItemNotFound(name.to_string()))?;
        explain_item(item, &self.store.load_profile())
    }

    /// Append an interaction for `name` on `date`, then refresh the profile
    pub fn record_order(&self, name: &str, date: NaiveDate) -> Result<Estimate> {
        self.record_order_at(name, date, Local::now().date_naive())
    }

    /// Like [`record_order`](Self::record_order), refreshing as of `reference_date`
    pub fn record_order_at(
        &self,
        name: &str,
        date: NaiveDate,
        reference_date: NaiveDate,
    ) -> Result<Estimate> {
        if self.catalog.get(name).is_none() {
            return Err(Error::ItemNotFound(name.to_string()));
        }
        self.store.append_history(HistoryRecord::new(name, date))?;
        info!(item = name, %date, "order recorded in history");
        self.refresh_profile_at(reference_date)
    }

    /// Recompute the profile from the full history as of today and save it
    pub fn refresh_profile(&self) -> Result<Estimate> {
        self.refresh_profile_at(Local::now().date_naive())
    }

    pub fn refresh_profile_at(&self, reference_date: NaiveDate) -> Result<Estimate> {
        let history = self.store.load_history();
        let estimate = self
            .estimator
            .estimate_at(&history, self.catalog.items(), reference_date);
        self.store.save_profile(&estimate.profile)?;
        info!(path = %self.store.path(crate::Document::Profile).display(), "user profile saved");
        Ok(estimate)
    }
}
