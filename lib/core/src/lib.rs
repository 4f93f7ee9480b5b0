//! # cardex Core
//!
//! Core library for the cardex similarity engine.
//!
//! This crate provides the fundamental data structures and algorithms:
//!
//! - [`CardRecord`] - Immutable catalog item with categorical and numeric attributes
//! - [`TraitDimension`] - The four similarity dimensions and their weight constants
//! - [`SimilarityGraph`] - Weighted undirected graph derived from shared traits
//!
//! ## Example
//!
//! ```rust
//! use cardex_core::{CardRecord, SimilarityGraph};
//! use chrono::NaiveDate;
//!
//! let records = vec![
//!     CardRecord::new(
//!         "base1-4",
//!         "Charizard",
//!         vec!["Fire".to_string()],
//!         vec!["Stage 2".to_string()],
//!         120,
//!         NaiveDate::from_ymd_opt(1999, 1, 9).unwrap(),
//!         300.0,
//!     ),
//!     CardRecord::new(
//!         "base1-15",
//!         "Venusaur",
//!         vec!["Grass".to_string()],
//!         vec!["Stage 2".to_string()],
//!         100,
//!         NaiveDate::from_ymd_opt(1999, 1, 9).unwrap(),
//!         120.0,
//!     ),
//! ];
//!
//! let graph = SimilarityGraph::build(records);
//! // Shared subtype (2) + shared release year (4)
//! assert_eq!(graph.weight_between("base1-4", "base1-15"), Some(6));
//! ```

pub mod card;
pub mod dimension;
pub mod error;
pub mod graph;

pub use card::CardRecord;
pub use dimension::TraitDimension;
pub use error::{Error, Result};
pub use graph::{SimilarityGraph, TraitValue, IMAGE_HOST};
