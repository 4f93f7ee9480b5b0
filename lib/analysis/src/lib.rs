//! # cardex Analysis
//!
//! Similarity ranking and price-deviation analysis on top of a built
//! [`cardex_core::SimilarityGraph`].
//!
//! ## Features
//!
//! - **Ranking**: materialize a card's neighbors sorted by accumulated
//!   similarity weight, with deterministic tie order
//! - **Price analysis**: peer-weighted expected price and threshold-based
//!   over/undervaluation verdicts
//! - **Render views**: bounded node/edge sets for presentation collaborators
//!
//! ## Example
//!
//! ```rust
//! use cardex_core::{CardRecord, SimilarityGraph};
//! use cardex_analysis::{most_similar, analyze_price, Verdict};
//! use chrono::NaiveDate;
//!
//! let graph = SimilarityGraph::build(vec![
//!     CardRecord::new("base1-4", "Charizard", vec!["Fire".to_string()], vec![], 120,
//!         NaiveDate::from_ymd_opt(1999, 1, 9).unwrap(), 300.0),
//!     CardRecord::new("base1-46", "Charmander", vec!["Fire".to_string()], vec![], 50,
//!         NaiveDate::from_ymd_opt(1999, 1, 9).unwrap(), 8.0),
//! ]);
//!
//! let ranked = most_similar(&graph, "base1-4").unwrap();
//! assert_eq!(ranked[0].id, "base1-46");
//!
//! let report = analyze_price(&graph, "base1-4").unwrap();
//! assert_eq!(report.verdict, Verdict::StronglyUndervalued);
//! ```

pub mod price;
pub mod rank;
pub mod view;

pub use price::{analyze_price, PriceReport, Verdict, DEVIATION_THRESHOLD, PEER_SET_SIZE};
pub use rank::{most_similar, top_similar, RankedNeighbor};
pub use view::{SimilarityView, ViewEdge, ViewNode, DEFAULT_VIEW_LIMIT, VISIBILITY_THRESHOLD};
