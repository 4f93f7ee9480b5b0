use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One catalog item participating in the similarity graph.
///
/// Records are immutable once admitted: the graph never mutates them and
/// every record carries a known market price (price-less records are
/// excluded at the catalog boundary, before construction).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardRecord {
    /// Unique catalog id, `<setcode>-<number>` in the source feed
    pub id: String,
    /// Display name, matched case-insensitively by name search
    pub name: String,
    /// Type tags; a card with several tags joins several type groups
    pub types: Vec<String>,
    /// Subtype tags (basic, stage 2, mega evolution, ...)
    pub subtypes: Vec<String>,
    /// Hit points
    pub hp: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    /// Release date of the card's set
    pub released: NaiveDate,
    /// Average market sell price
    pub price: f64,
}

impl CardRecord {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        types: Vec<String>,
        subtypes: Vec<String>,
        hp: u32,
        released: NaiveDate,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            types,
            subtypes,
            hp,
            rarity: None,
            released,
            price,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = Some(rarity.into());
        self
    }

    /// Decile bucket of the hit-point value (`hp / 10`), the grouping key
    /// for the HP trait dimension.
    #[inline]
    #[must_use]
    pub fn hp_decile(&self) -> u32 {
        self.hp / 10
    }

    /// Calendar year of the release date, the grouping key for the
    /// release-year trait dimension.
    #[inline]
    #[must_use]
    pub fn release_year(&self) -> i32 {
        self.released.year()
    }
}
