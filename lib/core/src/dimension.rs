//! Trait dimensions and their edge-weight constants
//!
//! The four dimensions used to derive similarity edges, each with a fixed
//! weight contribution. These are design constants, not configuration: the
//! relative importance of the dimensions is part of the graph's contract and
//! downstream outputs depend on the exact values.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

/// One of the four attribute dimensions that contribute similarity weight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TraitDimension {
    /// Shared type tag, weight 1 per tag in common
    Type,
    /// Shared subtype tag, weight 2 per tag in common
    Subtype,
    /// Same hit-point decile (`hp / 10`), weight 3
    Hp,
    /// Same release year, weight 4
    RelYear,
}

impl TraitDimension {
    pub const ALL: [TraitDimension; 4] = [
        TraitDimension::Type,
        TraitDimension::Subtype,
        TraitDimension::Hp,
        TraitDimension::RelYear,
    ];

    /// Edge-weight contribution of one shared group in this dimension.
    #[inline]
    #[must_use]
    pub fn weight(self) -> u32 {
        match self {
            TraitDimension::Type => 1,
            TraitDimension::Subtype => 2,
            TraitDimension::Hp => 3,
            TraitDimension::RelYear => 4,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TraitDimension::Type => "type",
            TraitDimension::Subtype => "subtype",
            TraitDimension::Hp => "hp",
            TraitDimension::RelYear => "relyear",
        }
    }
}

impl FromStr for TraitDimension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "type" => Ok(TraitDimension::Type),
            "subtype" => Ok(TraitDimension::Subtype),
            "hp" => Ok(TraitDimension::Hp),
            "relyear" => Ok(TraitDimension::RelYear),
            other => Err(Error::InvalidTrait(other.to_string())),
        }
    }
}

impl std::fmt::Display for TraitDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
