//! Render views for presentation collaborators
//!
//! Converts the top-N neighborhood of a focal card into a plain node/edge
//! set. This is the complete contract a rendering layer needs: it never has
//! to touch the graph's internal adjacency.

use cardex_core::{Result, SimilarityGraph};
use serde::Serialize;

use crate::rank::top_similar;

/// Default neighborhood size handed to renderers.
pub const DEFAULT_VIEW_LIMIT: usize = 20;

/// Minimum pairwise weight for a neighbor-to-neighbor edge to be visible.
pub const VISIBILITY_THRESHOLD: u32 = 5;

#[derive(Debug, Clone, Serialize)]
pub struct ViewNode {
    pub id: String,
    pub label: String,
    /// True for the focal card the view is centered on
    pub focal: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewEdge {
    pub from: String,
    pub to: String,
    pub weight: u32,
}

/// A renderable neighborhood: the focal card, its top-N neighbors, and the
/// edges worth drawing.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityView {
    pub nodes: Vec<ViewNode>,
    pub edges: Vec<ViewEdge>,
}

impl SimilarityView {
    /// Build the view for `focal_id` with up to `limit` neighbors.
    ///
    /// The focal card is connected to every neighbor in the view with the
    /// accumulated weight as the edge label. Neighbors are connected to each
    /// other only where their pairwise weight exceeds
    /// [`VISIBILITY_THRESHOLD`], keeping the rendered graph legible.
    pub fn build(graph: &SimilarityGraph, focal_id: &str, limit: usize) -> Result<Self> {
        let focal = graph.find_card(focal_id)?;
        let neighbors = top_similar(graph, focal_id, limit)?;

        let mut nodes = Vec::with_capacity(neighbors.len() + 1);
        nodes.push(ViewNode {
            id: focal.id.clone(),
            label: focal.name.clone(),
            focal: true,
        });

        let mut edges = Vec::new();
        for ranked in &neighbors {
            let card = graph.find_card(&ranked.id)?;
            nodes.push(ViewNode {
                id: card.id.clone(),
                label: card.name.clone(),
                focal: false,
            });
            edges.push(ViewEdge {
                from: focal.id.clone(),
                to: card.id.clone(),
                weight: ranked.weight,
            });
        }

        for i in 0..neighbors.len() {
            for j in (i + 1)..neighbors.len() {
                if let Some(weight) =
                    graph.weight_between(&neighbors[i].id, &neighbors[j].id)
                {
                    if weight > VISIBILITY_THRESHOLD {
                        edges.push(ViewEdge {
                            from: neighbors[i].id.clone(),
                            to: neighbors[j].id.clone(),
                            weight,
                        });
                    }
                }
            }
        }

        Ok(Self { nodes, edges })
    }

    /// Build the view with the default neighborhood size.
    pub fn with_default_limit(graph: &SimilarityGraph, focal_id: &str) -> Result<Self> {
        Self::build(graph, focal_id, DEFAULT_VIEW_LIMIT)
    }
}
