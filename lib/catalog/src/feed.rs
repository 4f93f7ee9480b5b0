//! Upstream feed record models
//!
//! Serde models mirroring the catalog service's JSON shape, plus the
//! validation step that turns raw feed entries into [`CardRecord`]s. Records
//! without a market price are dropped here, before the graph ever sees them.

use cardex_core::CardRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CatalogError, Result};

/// Date format used by the upstream feed (`2005/02/14`).
pub const FEED_DATE_FORMAT: &str = "%Y/%m/%d";

/// A single raw card entry as delivered by the catalog feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCard {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub subtypes: Vec<String>,
    pub hp: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    pub set: RawSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardmarket: Option<RawCardMarket>,
}

/// The card's set, carrying the release date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSet {
    #[serde(rename = "releaseDate")]
    pub release_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCardMarket {
    pub prices: RawPrices,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPrices {
    #[serde(rename = "averageSellPrice", default, skip_serializing_if = "Option::is_none")]
    pub average_sell_price: Option<f64>,
}

/// Envelope of a feed response page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPage {
    pub data: Vec<RawCard>,
}

impl RawCard {
    /// Average market sell price, if the feed carried one.
    #[inline]
    #[must_use]
    pub fn market_price(&self) -> Option<f64> {
        self.cardmarket
            .as_ref()
            .and_then(|cm| cm.prices.average_sell_price)
    }

    /// Validate this entry into a [`CardRecord`].
    ///
    /// Returns `Ok(None)` for entries without a market price (excluded by
    /// contract, not an error). An unparseable release date is a
    /// [`CatalogError::MalformedRecord`].
    pub fn validate(self) -> Result<Option<CardRecord>> {
        let Some(price) = self.market_price() else {
            return Ok(None);
        };

        let released =
            NaiveDate::parse_from_str(&self.set.release_date, FEED_DATE_FORMAT).map_err(|e| {
                CatalogError::MalformedRecord {
                    id: self.id.clone(),
                    reason: format!("bad release date {:?}: {}", self.set.release_date, e),
                }
            })?;

        let mut record = CardRecord::new(
            self.id, self.name, self.types, self.subtypes, self.hp, released, price,
        );
        if let Some(rarity) = self.rarity {
            record = record.with_rarity(rarity);
        }
        Ok(Some(record))
    }
}

/// Validate a batch of raw entries, dropping the price-less ones.
///
/// Later entries win on duplicate ids, matching upstream pagination where a
/// card can reappear across pages.
pub fn load_records(raw: Vec<RawCard>) -> Result<Vec<CardRecord>> {
    let total = raw.len();
    let mut records: Vec<CardRecord> = Vec::with_capacity(total);
    for entry in raw {
        if let Some(record) = entry.validate()? {
            records.retain(|r| r.id != record.id);
            records.push(record);
        }
    }
    debug!(
        admitted = records.len(),
        skipped = total - records.len(),
        "validated feed records"
    );
    Ok(records)
}
