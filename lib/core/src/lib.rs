//! # Palate Core
//!
//! Core types for the Palate preference engine.
//!
//! - [`Dimension`] / [`AttributeVector`] - the fixed attribute schema
//! - [`Item`] / [`Catalog`] - rankable items and their lookup
//! - [`Profile`] - per-user preference weights
//! - [`HistoryRecord`] - dated interactions the profile is learned from
//! - [`vector::similarity`] and [`decay::decay_weight`] - the math both
//!   ranking and learning share
//!
//! ## Example
//!
//! ```rust
//! use palate_core::{AttributeVector, Profile, vector};
//!
//! let item = AttributeVector::new([1.0, 0.0, 0.0, 0.0, 0.0]);
//! let profile = Profile::new(AttributeVector::new([1.0, 0.0, 0.0, 0.0, 0.0]));
//! assert_eq!(vector::similarity(profile.weights().as_slice(), item.as_slice()), 1.0);
//! ```

pub mod decay;
pub mod error;
pub mod history;
pub mod item;
pub mod profile;
pub mod schema;
pub mod vector;

pub use decay::{decay_weight, decay_weight_days, parse_date, DEFAULT_DECAY_LAMBDA};
pub use error::{Error, Result};
pub use history::HistoryRecord;
pub use item::{index_by_name, Catalog, Item};
pub use profile::{Profile, DEFAULT_PREFERENCE};
pub use schema::{AttributeMap, AttributeVector, Dimension, MissingDimension, DIMENSIONS};
