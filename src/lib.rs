//! # Palate
//!
//! A preference-profile ranking engine.
//!
//! Palate keeps one user profile over a fixed set of attributes
//! (sweetness, spiciness, price, distance, rating), ranks candidate items
//! by cosine similarity to that profile, and relearns the profile from the
//! order history with exponential time decay.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! palate --data-dir ./data rank --query "spicy,noodles"
//! palate --data-dir ./data order "Sichuan Kitchen"
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use palate::prelude::*;
//!
//! let catalog = vec![
//!     Item::new("A", "", AttributeVector::new([1.0, 0.0, 0.0, 0.0, 0.0])),
//!     Item::new("B", "", AttributeVector::new([0.0, 1.0, 0.0, 0.0, 0.0])),
//! ];
//! let profile = Profile::new(AttributeVector::new([1.0, 0.0, 0.0, 0.0, 0.0]));
//!
//! let ranked = Ranker::new().rank(&["A", "B"], &catalog, &profile);
//! assert_eq!(ranked[0].score, 1.0);
//! assert_eq!(ranked[1].score, 0.0);
//! ```
//!
//! ## Crate Structure
//!
//! - `palate-core` - schema, items, profile, history, vector math
//! - `palate-similarity` - ranking, profile estimation, explanations
//! - `palate-storage` - JSON documents and the storage manager

// Re-export core types
pub use palate_core::{
    AttributeVector, Catalog, Dimension, HistoryRecord, Item, Profile,
    Error, Result,
};

// Re-export ranking and learning
pub use palate_similarity::{
    EngineConfig, Estimate, ExplainedItem, ProfileEstimator, RankedResult, Ranker,
};

// Re-export storage
pub use palate_storage::{JsonStore, StorageManager};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AttributeVector, Catalog, Dimension, HistoryRecord, Item, Profile,
        Error, Result,
        EngineConfig, Estimate, ExplainedItem, ProfileEstimator, RankedResult, Ranker,
        JsonStore, StorageManager,
    };
}

/// Similarity and decay primitives
pub mod math {
    pub use palate_core::decay::{decay_weight, decay_weight_days, DEFAULT_DECAY_LAMBDA};
    pub use palate_core::vector::similarity;
}
