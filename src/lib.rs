//! # cardex
//!
//! An in-memory similarity graph over trading-card catalogs.
//!
//! cardex builds a weighted similarity graph from shared card traits and
//! answers two questions: "what is most similar to card X" and "is card X
//! over- or under-priced relative to its peers".
//!
//! ## Quick Start
//!
//! ```rust
//! use cardex::prelude::*;
//! use chrono::NaiveDate;
//!
//! // Records come from a catalog source, already validated (price present)
//! let records = vec![
//!     CardRecord::new("base1-4", "Charizard", vec!["Fire".to_string()],
//!         vec!["Stage 2".to_string()], 120,
//!         NaiveDate::from_ymd_opt(1999, 1, 9).unwrap(), 300.0),
//!     CardRecord::new("base2-3", "Charizard", vec!["Fire".to_string()],
//!         vec!["Stage 2".to_string()], 120,
//!         NaiveDate::from_ymd_opt(1999, 10, 10).unwrap(), 150.0),
//! ];
//!
//! let graph = SimilarityGraph::build(records);
//!
//! // Ranked similarity
//! let ranked = most_similar(&graph, "base1-4").unwrap();
//! assert_eq!(ranked[0].id, "base2-3");
//!
//! // Price analysis
//! let report = analyze_price(&graph, "base1-4").unwrap();
//! assert_eq!(report.verdict, Verdict::StronglyUndervalued);
//! ```
//!
//! ## Crate Structure
//!
//! cardex is composed of several crates:
//!
//! - `cardex-core` - Card records, trait dimensions, graph construction
//! - `cardex-analysis` - Similarity ranking, price analysis, render views
//! - `cardex-catalog` - Feed validation and record sources

// Re-export core types
pub use cardex_core::{
    CardRecord, Error, Result, SimilarityGraph, TraitDimension, TraitValue, IMAGE_HOST,
};

// Re-export analysis
pub use cardex_analysis::{
    analyze_price, most_similar, top_similar, PriceReport, RankedNeighbor, SimilarityView,
    Verdict, ViewEdge, ViewNode,
};

// Re-export catalog
pub use cardex_catalog::{CatalogError, JsonSnapshotSource, RecordSource, StaticSource};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        analyze_price, most_similar, top_similar, CardRecord, Error, JsonSnapshotSource,
        PriceReport, RankedNeighbor, RecordSource, Result, SimilarityGraph, SimilarityView,
        StaticSource, TraitDimension, Verdict,
    };
}
