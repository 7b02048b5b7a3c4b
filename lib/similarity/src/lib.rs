//! # Palate Similarity
//!
//! Ranking and learning on top of the Palate core types.
//!
//! ## Features
//!
//! - **Ranker**: cosine similarity of each candidate item to the profile,
//!   sorted best first with stable ties
//! - **ProfileEstimator**: rebuilds the profile as a decay-weighted average
//!   of the items in the interaction history
//! - **Explain**: per-dimension agreement for a single item
//!
//! ## Example
//!
//! ```rust
//! use palate_core::{AttributeVector, HistoryRecord, Item, Profile};
//! use palate_similarity::{EngineConfig, ProfileEstimator, Ranker};
//! use chrono::NaiveDate;
//!
//! let catalog = vec![
//!     Item::new("A", "", AttributeVector::new([1.0, 0.0, 0.0, 0.0, 0.0])),
//!     Item::new("B", "", AttributeVector::new([0.0, 1.0, 0.0, 0.0, 0.0])),
//! ];
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let history = vec![HistoryRecord::new("A", NaiveDate::from_ymd_opt(2024, 5, 22).unwrap())];
//! let profile = ProfileEstimator::new(EngineConfig::default()).recompute_at(&history, &catalog, today);
//!
//! let ranked = Ranker::new().rank(&["A", "B"], &catalog, &profile);
//! assert_eq!(ranked[0].item.name, "A");
//! assert_eq!(ranked[0].score, 1.0);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐
//! │   Profile   │────>│   Ranker    │────> ranked items
//! └─────────────┘     └─────────────┘
//!        ^
//!        │            ┌─────────────┐     ┌─────────────┐
//!        └────────────│  Estimator  │<────│   History   │
//!                     └─────────────┘     └─────────────┘
//! ```

pub mod config;
pub mod estimator;
pub mod explain;
pub mod rerank;

pub use config::EngineConfig;
pub use estimator::{Estimate, ProfileEstimator};
pub use explain::{explain, explain_item, DimensionMatch, ExplainedItem};
pub use rerank::{RankedResult, Ranker};
