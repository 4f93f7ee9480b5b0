//! # cardex Catalog
//!
//! The external-collaborator boundary of cardex: deserializing raw feed
//! records, excluding entries without a market price, and exposing the
//! [`RecordSource`] capability the core consumes.
//!
//! Fetching from the remote catalog service (network, pagination, auth) is
//! out of scope here; any fetcher only has to produce [`feed::RawCard`]
//! batches or implement [`RecordSource`] directly.

pub mod error;
pub mod feed;
pub mod source;

pub use error::{CatalogError, Result};
pub use feed::{load_records, FeedPage, RawCard, FEED_DATE_FORMAT};
pub use source::{JsonSnapshotSource, RecordSource, StaticSource};
