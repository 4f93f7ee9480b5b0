//! Similarity ranking
//!
//! Materializes one vertex's adjacency weights into a ranked neighbor list.
//! No transitive closure, no path search: the accumulated edge weight is the
//! similarity score.

use cardex_core::{Result, SimilarityGraph};
use serde::Serialize;

/// One neighbor of the focal card with its accumulated similarity weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedNeighbor {
    pub id: String,
    pub weight: u32,
}

/// Rank all neighbors of `id` by accumulated weight, most similar first.
///
/// Ordering is fully deterministic: weight descending, id ascending among
/// equal weights. Fails with `CardNotFound` for an unknown id.
pub fn most_similar(graph: &SimilarityGraph, id: &str) -> Result<Vec<RankedNeighbor>> {
    let neighbors = graph.neighbors(id)?;
    let mut ranked: Vec<RankedNeighbor> = neighbors
        .iter()
        .map(|(nbr, &weight)| RankedNeighbor {
            id: nbr.clone(),
            weight,
        })
        .collect();

    ranked.sort_by(|a, b| b.weight.cmp(&a.weight).then_with(|| a.id.cmp(&b.id)));
    Ok(ranked)
}

/// Rank the neighbors of `id` and keep only the `limit` most similar.
pub fn top_similar(
    graph: &SimilarityGraph,
    id: &str,
    limit: usize,
) -> Result<Vec<RankedNeighbor>> {
    let mut ranked = most_similar(graph, id)?;
    ranked.truncate(limit);
    Ok(ranked)
}
