//! Core graph structure — adjacency sets plus an insertion-ordered node list.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::types::{GraphError, GraphResult, NodeId};

/// An undirected graph over integer node identifiers.
///
/// Every edge is mirrored into both endpoints' neighbor sets, so the
/// adjacency map alone fully describes the graph. A node is in the graph iff
/// it has an adjacency entry; an entry with an empty neighbor set is a valid
/// isolated node. `node_order` records each id at its first appearance and
/// backs deterministic iteration.
#[derive(Debug, Clone)]
pub struct Graph {
    /// node id -> ids of its adjacent nodes.
    adjacency: HashMap<NodeId, HashSet<NodeId>>,
    /// All node ids, in order of first appearance. Always exactly the keys
    /// of `adjacency`, each once.
    node_order: Vec<NodeId>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
            node_order: Vec::new(),
        }
    }

    /// Build a graph from a sequence of edges, added in order.
    ///
    /// Every endpoint mentioned in `edges` becomes a node of the graph.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.node_order.len()
    }

    /// Number of edges. Each undirected edge counts once; so does a
    /// self-loop, which sits in only one neighbor set.
    pub fn edge_count(&self) -> usize {
        let mirrored: usize = self.adjacency.values().map(HashSet::len).sum();
        let loops = self
            .adjacency
            .iter()
            .filter(|&(n, neighbors)| neighbors.contains(n))
            .count();
        (mirrored + loops) / 2
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.node_order.is_empty()
    }

    /// Whether `n` is a node of the graph.
    pub fn contains(&self, n: NodeId) -> bool {
        self.adjacency.contains_key(&n)
    }

    /// Whether the edge `(u, v)` is in the graph.
    ///
    /// The one-sided check suffices: edges are always mirrored, so `v` is in
    /// `u`'s neighbor set iff `u` is in `v`'s.
    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.adjacency
            .get(&u)
            .is_some_and(|neighbors| neighbors.contains(&v))
    }

    /// Add the undirected edge `(u, v)`, creating either endpoint as needed.
    ///
    /// Adding an edge already in the graph is a no-op. A self-loop `(n, n)`
    /// is accepted and places `n` in its own neighbor set.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) {
        if self.has_edge(u, v) {
            return;
        }
        self.ensure_node(u).insert(v);
        self.ensure_node(v).insert(u);
    }

    /// Add the node `n` with no neighbors.
    ///
    /// Adding a node already in the graph is a no-op.
    pub fn add_node(&mut self, n: NodeId) {
        self.ensure_node(n);
    }

    /// Neighbors (adjacent nodes) of `n`, as an owned copy.
    ///
    /// The copy keeps callers from mutating the graph's internal sets.
    /// Returns [`GraphError::NodeNotFound`] if `n` is not in the graph.
    pub fn neighbors(&self, n: NodeId) -> GraphResult<HashSet<NodeId>> {
        self.adjacency
            .get(&n)
            .cloned()
            .ok_or(GraphError::NodeNotFound(n))
    }

    /// Iterate over all node ids in order of first appearance.
    ///
    /// Each call starts a fresh iteration with its own cursor; iterating
    /// never mutates the graph, and concurrent iterations are independent.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes {
            inner: self.node_order.iter(),
        }
    }

    /// Neighbor set of `n`, creating an empty entry (and recording `n` in
    /// the node order) if `n` is new.
    fn ensure_node(&mut self, n: NodeId) -> &mut HashSet<NodeId> {
        match self.adjacency.entry(n) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => {
                self.node_order.push(n);
                e.insert(HashSet::new())
            }
        }
    }

    pub(crate) fn node_order(&self) -> &[NodeId] {
        &self.node_order
    }

    pub(crate) fn neighbor_set(&self, n: NodeId) -> Option<&HashSet<NodeId>> {
        self.adjacency.get(&n)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

/// Equality is a function of the adjacency map alone; the node-order
/// bookkeeping is excluded, so two graphs built in different orders compare
/// equal when their edges agree.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl Eq for Graph {}

/// Iterator over a graph's node ids in insertion order.
pub struct Nodes<'a> {
    inner: std::slice::Iter<'a, NodeId>,
}

impl Iterator for Nodes<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Nodes<'_> {}

impl<'a> IntoIterator for &'a Graph {
    type Item = NodeId;
    type IntoIter = Nodes<'a>;

    fn into_iter(self) -> Nodes<'a> {
        self.nodes()
    }
}
