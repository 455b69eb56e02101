//! Per-tick proximity graph between agents.
//!
//! Two agents are linked when their Euclidean distance is `<= range`.  The
//! graph is undirected and rebuilt from scratch each tick; it holds no
//! references to the positions it was built from.

use rstar::RTree;

use sc_core::{AgentId, Vec3};

use crate::entry::PointEntry;

/// An undirected in-range pair, stored with `a < b`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommLink {
    pub a: AgentId,
    pub b: AgentId,
}

/// Adjacency lists of all agents within communication range of each other.
///
/// `positions[i]` belongs to `AgentId(i)`.  Every adjacency list is sorted by
/// ascending `AgentId` and never contains the agent itself.
pub struct ProximityGraph {
    range:     f32,
    adjacency: Vec<Vec<AgentId>>,
}

impl ProximityGraph {
    /// Build the graph for `positions` with an inclusive `range`.
    ///
    /// A negative or NaN range yields a graph with no edges.
    pub fn build(positions: &[Vec3], range: f32) -> Self {
        let mut adjacency = vec![Vec::new(); positions.len()];
        if range.is_nan() || range < 0.0 || positions.len() < 2 {
            return Self { range, adjacency };
        }

        let entries: Vec<PointEntry<AgentId>> = positions
            .iter()
            .enumerate()
            .map(|(i, &p)| PointEntry::new(AgentId(i as u32), p))
            .collect();
        let tree = RTree::bulk_load(entries);
        let range_2 = range * range;

        for (i, p) in positions.iter().enumerate() {
            let me = AgentId(i as u32);
            let list = &mut adjacency[i];
            list.extend(
                tree.locate_within_distance(p.to_array(), range_2)
                    .map(|e| e.key)
                    .filter(|&other| other != me),
            );
            list.sort_unstable();
        }

        Self { range, adjacency }
    }

    pub fn range(&self) -> f32 {
        self.range
    }

    pub fn agent_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Agents within range of `agent`, ascending.  Empty for unknown ids.
    pub fn neighbors(&self, agent: AgentId) -> &[AgentId] {
        self.adjacency
            .get(agent.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    #[inline]
    pub fn has_neighbors(&self, agent: AgentId) -> bool {
        !self.neighbors(agent).is_empty()
    }

    pub fn in_range(&self, a: AgentId, b: AgentId) -> bool {
        self.neighbors(a).binary_search(&b).is_ok()
    }

    /// Every in-range pair exactly once, ordered by `(a, b)`.
    pub fn links(&self) -> impl Iterator<Item = CommLink> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(i, list)| {
            let a = AgentId(i as u32);
            list.iter()
                .copied()
                .filter(move |&b| a < b)
                .map(move |b| CommLink { a, b })
        })
    }

    pub fn link_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }
}
