//! Similarity graph construction and queries
//!
//! The graph owns the card records as vertices and derives weighted,
//! undirected edges from shared trait dimensions. Construction runs in two
//! stages: an explicit grouping step (trait value -> set of ids) followed by
//! a pairwise combination step that accumulates each group's weight onto the
//! edges between its members. The graph is built once per record snapshot and
//! is read-only afterwards.

use std::collections::{HashMap, HashSet};

use crate::card::CardRecord;
use crate::dimension::TraitDimension;
use crate::error::{Error, Result};

/// Host serving card images, used by [`SimilarityGraph::image_ref`].
pub const IMAGE_HOST: &str = "https://images.pokemontcg.io";

/// A concrete trait value a card can hold, used as a grouping key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TraitValue {
    /// A type or subtype tag
    Tag(String),
    /// Hit-point decile bucket (`hp / 10`)
    Decile(u32),
    /// Release calendar year
    Year(i32),
}

/// An in-memory similarity graph over a static catalog snapshot.
///
/// Vertices are [`CardRecord`]s keyed by id; the adjacency maps each id to
/// its neighbors with the accumulated edge weight. The adjacency is
/// symmetric (weight(u, v) == weight(v, u)) and contains no self-edges.
#[derive(Debug, Clone)]
pub struct SimilarityGraph {
    cards: HashMap<String, CardRecord>,
    adjacency: HashMap<String, HashMap<String, u32>>,
}

impl SimilarityGraph {
    /// Build the graph from a collection of records.
    ///
    /// Records are expected to be pre-validated by the catalog boundary:
    /// unique ids, price present. For every trait dimension the records are
    /// grouped by trait value, then every unordered pair of distinct members
    /// of a group receives the dimension's weight once. A card holding
    /// several tags shares one group per tag, so two cards with two type
    /// tags in common accumulate the type weight twice.
    #[must_use]
    pub fn build(records: impl IntoIterator<Item = CardRecord>) -> Self {
        let cards: HashMap<String, CardRecord> = records
            .into_iter()
            .map(|card| (card.id.clone(), card))
            .collect();

        let mut adjacency: HashMap<String, HashMap<String, u32>> = cards
            .keys()
            .map(|id| (id.clone(), HashMap::new()))
            .collect();

        for dim in TraitDimension::ALL {
            let groups = Self::trait_groups(&cards, dim);
            for members in groups.values() {
                Self::connect_group(&mut adjacency, members, dim.weight());
            }
        }

        Self { cards, adjacency }
    }

    /// Grouping stage: map every trait value of the dimension to the set of
    /// card ids holding it.
    fn trait_groups(
        cards: &HashMap<String, CardRecord>,
        dim: TraitDimension,
    ) -> HashMap<TraitValue, HashSet<String>> {
        let mut groups: HashMap<TraitValue, HashSet<String>> = HashMap::new();
        for card in cards.values() {
            match dim {
                TraitDimension::Type => {
                    for tag in &card.types {
                        groups
                            .entry(TraitValue::Tag(tag.clone()))
                            .or_default()
                            .insert(card.id.clone());
                    }
                }
                TraitDimension::Subtype => {
                    for tag in &card.subtypes {
                        groups
                            .entry(TraitValue::Tag(tag.clone()))
                            .or_default()
                            .insert(card.id.clone());
                    }
                }
                TraitDimension::Hp => {
                    groups
                        .entry(TraitValue::Decile(card.hp_decile()))
                        .or_default()
                        .insert(card.id.clone());
                }
                TraitDimension::RelYear => {
                    groups
                        .entry(TraitValue::Year(card.release_year()))
                        .or_default()
                        .insert(card.id.clone());
                }
            }
        }
        groups
    }

    /// Combination stage: add `weight` to the edge of every unordered pair
    /// of distinct members. Each group contributes to an edge exactly once.
    fn connect_group(
        adjacency: &mut HashMap<String, HashMap<String, u32>>,
        members: &HashSet<String>,
        weight: u32,
    ) {
        let ids: Vec<&String> = members.iter().collect();
        for i in 0..ids.len() {
            for j in (i + 1)..ids.len() {
                Self::upsert_edge(adjacency, ids[i], ids[j], weight);
            }
        }
    }

    /// Add `delta` to the edge between `u` and `v`, creating it if absent.
    /// Updates both directions as one operation; callers guarantee `u != v`.
    fn upsert_edge(
        adjacency: &mut HashMap<String, HashMap<String, u32>>,
        u: &str,
        v: &str,
        delta: u32,
    ) {
        debug_assert_ne!(u, v, "self-edges are excluded by construction");
        *adjacency
            .entry(u.to_string())
            .or_default()
            .entry(v.to_string())
            .or_insert(0) += delta;
        *adjacency
            .entry(v.to_string())
            .or_default()
            .entry(u.to_string())
            .or_insert(0) += delta;
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.cards.contains_key(id)
    }

    /// Iterate over all card records in the graph.
    pub fn cards(&self) -> impl Iterator<Item = &CardRecord> {
        self.cards.values()
    }

    /// Look up a card record by id.
    pub fn find_card(&self, id: &str) -> Result<&CardRecord> {
        self.cards
            .get(id)
            .ok_or_else(|| Error::CardNotFound(id.to_string()))
    }

    /// All ids whose display name matches `name` case-insensitively, sorted
    /// for deterministic output. Empty if none match.
    #[must_use]
    pub fn search_by_name(&self, name: &str) -> Vec<String> {
        let mut ids: Vec<String> = self
            .cards
            .values()
            .filter(|card| card.name.eq_ignore_ascii_case(name))
            .map(|card| card.id.clone())
            .collect();
        ids.sort();
        ids
    }

    /// The neighbor map of `id` with accumulated edge weights.
    pub fn neighbors(&self, id: &str) -> Result<&HashMap<String, u32>> {
        self.adjacency
            .get(id)
            .ok_or_else(|| Error::CardNotFound(id.to_string()))
    }

    /// Number of neighbors of `id`.
    pub fn degree(&self, id: &str) -> Result<usize> {
        Ok(self.neighbors(id)?.len())
    }

    /// Accumulated edge weight between two ids, if an edge exists.
    #[must_use]
    pub fn weight_between(&self, a: &str, b: &str) -> Option<u32> {
        self.adjacency.get(a).and_then(|nbrs| nbrs.get(b)).copied()
    }

    /// Neighbors of `id` whose total edge weight equals exactly the given
    /// dimension's weight constant.
    ///
    /// This is a weight-equality filter, not a "shares this dimension"
    /// filter: a neighbor that shares the dimension alongside others
    /// accumulates a larger total and will not appear in any
    /// single-dimension query. Known precision limitation, kept as the
    /// documented contract.
    pub fn find_similar_by_trait(&self, id: &str, dimension: &str) -> Result<Vec<String>> {
        let dim: TraitDimension = dimension.parse()?;
        let neighbors = self.neighbors(id)?;
        let mut ids: Vec<String> = neighbors
            .iter()
            .filter(|(_, &weight)| weight == dim.weight())
            .map(|(nbr, _)| nbr.clone())
            .collect();
        ids.sort();
        Ok(ids)
    }

    /// Derive the image reference for a card id of the form
    /// `<setcode>-<number>`.
    pub fn image_ref(&self, id: &str) -> Result<String> {
        self.find_card(id)?;
        let mut parts = id.splitn(3, '-');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(set_code), Some(number), None) if !set_code.is_empty() && !number.is_empty() => {
                Ok(format!("{}/{}/{}.png", IMAGE_HOST, set_code, number))
            }
            _ => Err(Error::MalformedId(id.to_string())),
        }
    }
}
