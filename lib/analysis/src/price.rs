//! Price-deviation analysis
//!
//! Compares a card's market price against a peer-weighted expected price
//! computed from its most similar neighbors. Pure computation over the
//! already-built graph; presentation of the report is the caller's job.

use cardex_core::{Result, SimilarityGraph};
use serde::Serialize;

use crate::rank::top_similar;

/// Number of top-ranked neighbors used as the comparison basis.
pub const PEER_SET_SIZE: usize = 10;

/// Threshold (in percent difference) separating "slightly" from "very"
/// over/undervalued.
pub const DEVIATION_THRESHOLD: f64 = 40.0;

/// Decimal places kept in the reported expected price and percent difference.
const REPORT_PRECISION: u32 = 5;

/// Classification of a card's price relative to its peer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    VeryOvervalued,
    SlightlyOvervalued,
    SlightlyUndervalued,
    StronglyUndervalued,
    /// Degenerate case: no peers, zero total peer weight, or zero base
    /// price. No meaningful comparison is available.
    NoComparison,
}

impl Verdict {
    /// Classify a percent difference between expected and listed price.
    #[must_use]
    pub fn classify(percent_difference: f64) -> Self {
        if percent_difference > DEVIATION_THRESHOLD {
            Verdict::VeryOvervalued
        } else if percent_difference > 0.0 {
            Verdict::SlightlyOvervalued
        } else if percent_difference > -DEVIATION_THRESHOLD {
            Verdict::SlightlyUndervalued
        } else {
            Verdict::StronglyUndervalued
        }
    }

    /// Human-readable advice for this classification.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Verdict::VeryOvervalued => "very overvalued - do not buy.",
            Verdict::SlightlyOvervalued => "slightly overvalued.",
            Verdict::SlightlyUndervalued => "slightly undervalued.",
            Verdict::StronglyUndervalued => {
                "strongly undervalued - likely good investment."
            }
            Verdict::NoComparison => "no similar cards to compare against.",
        }
    }
}

/// Structured result of a price analysis.
///
/// `expected_price` and `percent_difference` are present only when a
/// meaningful comparison exists; both are rounded to five decimal places.
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    pub card_id: String,
    pub card_name: String,
    pub listed_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_difference: Option<f64>,
    /// Number of peers that contributed to the expected price
    pub peer_count: usize,
    pub verdict: Verdict,
}

impl PriceReport {
    fn no_comparison(card_id: String, card_name: String, listed_price: f64) -> Self {
        Self {
            card_id,
            card_name,
            listed_price,
            expected_price: None,
            percent_difference: None,
            peer_count: 0,
            verdict: Verdict::NoComparison,
        }
    }
}

fn round_to_precision(value: f64) -> f64 {
    let factor = 10f64.powi(REPORT_PRECISION as i32);
    (value * factor).round() / factor
}

/// Analyze whether `id` is over- or under-priced relative to its peers.
///
/// The peer set is the top [`PEER_SET_SIZE`] ranked neighbors (all of them
/// if fewer exist). Each peer contributes its price proportionally to its
/// share of the total peer weight; the weighted sum is the expected price.
/// Degenerate inputs (no peers, zero total weight, zero listed price) yield
/// a [`Verdict::NoComparison`] report instead of failing.
pub fn analyze_price(graph: &SimilarityGraph, id: &str) -> Result<PriceReport> {
    let card = graph.find_card(id)?;
    let peers = top_similar(graph, id, PEER_SET_SIZE)?;

    let total: u64 = peers.iter().map(|p| u64::from(p.weight)).sum();
    if peers.is_empty() || total == 0 || card.price == 0.0 {
        return Ok(PriceReport::no_comparison(
            card.id.clone(),
            card.name.clone(),
            card.price,
        ));
    }

    let mut expected = 0.0f64;
    for peer in &peers {
        let peer_card = graph.find_card(&peer.id)?;
        expected += (f64::from(peer.weight) / total as f64) * peer_card.price;
    }

    let percent_difference = (expected - card.price) / card.price * 100.0;

    Ok(PriceReport {
        card_id: card.id.clone(),
        card_name: card.name.clone(),
        listed_price: card.price,
        expected_price: Some(round_to_precision(expected)),
        percent_difference: Some(round_to_precision(percent_difference)),
        peer_count: peers.len(),
        verdict: Verdict::classify(percent_difference),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardex_core::CardRecord;
    use chrono::NaiveDate;

    fn card(id: &str, types: &[&str], hp: u32, year: i32, price: f64) -> CardRecord {
        CardRecord::new(
            id,
            id,
            types.iter().map(|s| s.to_string()).collect(),
            vec![],
            hp,
            NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
            price,
        )
    }

    #[test]
    fn test_verdict_thresholds() {
        assert_eq!(Verdict::classify(40.1), Verdict::VeryOvervalued);
        assert_eq!(Verdict::classify(40.0), Verdict::SlightlyOvervalued);
        assert_eq!(Verdict::classify(0.1), Verdict::SlightlyOvervalued);
        assert_eq!(Verdict::classify(0.0), Verdict::SlightlyUndervalued);
        assert_eq!(Verdict::classify(-39.9), Verdict::SlightlyUndervalued);
        assert_eq!(Verdict::classify(-40.0), Verdict::StronglyUndervalued);
        assert_eq!(Verdict::classify(-75.0), Verdict::StronglyUndervalued);
    }

    #[test]
    fn test_weighted_expected_price() {
        // b-1 shares hp decile with a-1 -> weight 3, price 10.0
        // c-1 shares type with a-1      -> weight 1, price 20.0
        // expected = (3/4)*10 + (1/4)*20 = 12.5; base 10.0 -> +25%
        let graph = SimilarityGraph::build(vec![
            card("a-1", &["Fire"], 50, 1999, 10.0),
            card("b-1", &["Water"], 55, 2003, 10.0),
            card("c-1", &["Fire"], 120, 2007, 20.0),
        ]);
        assert_eq!(graph.weight_between("a-1", "b-1"), Some(3));
        assert_eq!(graph.weight_between("a-1", "c-1"), Some(1));

        let report = analyze_price(&graph, "a-1").unwrap();
        assert_eq!(report.expected_price, Some(12.5));
        assert_eq!(report.percent_difference, Some(25.0));
        assert_eq!(report.peer_count, 2);
        assert_eq!(report.verdict, Verdict::SlightlyOvervalued);
    }

    #[test]
    fn test_no_peers_is_reported_not_fatal() {
        let graph = SimilarityGraph::build(vec![card("a-1", &["Fire"], 50, 1999, 10.0)]);

        let report = analyze_price(&graph, "a-1").unwrap();
        assert_eq!(report.verdict, Verdict::NoComparison);
        assert!(report.expected_price.is_none());
        assert!(report.percent_difference.is_none());
        assert_eq!(report.peer_count, 0);
    }

    #[test]
    fn test_zero_base_price_guarded() {
        let graph = SimilarityGraph::build(vec![
            card("a-1", &["Fire"], 50, 1999, 0.0),
            card("b-1", &["Fire"], 120, 2003, 5.0),
        ]);

        let report = analyze_price(&graph, "a-1").unwrap();
        assert_eq!(report.verdict, Verdict::NoComparison);
    }

    #[test]
    fn test_report_rounding() {
        // expected = (1/2)*3.333333 + (1/2)*6.666667 = 4.9999999...
        let graph = SimilarityGraph::build(vec![
            card("a-1", &["Fire"], 50, 1999, 3.0),
            card("b-1", &["Fire"], 120, 2003, 3.333333),
            card("c-1", &["Fire"], 150, 2007, 6.666667),
        ]);

        let report = analyze_price(&graph, "a-1").unwrap();
        let expected = report.expected_price.unwrap();
        assert!((expected * 1e5).fract().abs() < 1e-9);
    }

    #[test]
    fn test_unknown_card_fails() {
        let graph = SimilarityGraph::build(vec![card("a-1", &["Fire"], 50, 1999, 1.0)]);
        assert!(analyze_price(&graph, "zz-9").is_err());
    }
}
