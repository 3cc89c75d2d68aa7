//! Graph traversal algorithms (BFS) and distance queries.

use std::collections::{HashSet, VecDeque};

use log::debug;

use crate::types::{Distance, GraphError, GraphResult, NodeId, UNREACHABLE};

use super::Graph;

impl Graph {
    /// Shortest-path distances (in edges) from `start` to every other node.
    ///
    /// Returns one `(node, distance)` pair per node in the graph other than
    /// `start`, with no duplicates and in unspecified order. Nodes with no
    /// path to `start` are reported as [`UNREACHABLE`]. `start` itself never
    /// appears in the result.
    ///
    /// Returns [`GraphError::NodeNotFound`] if `start` is not in the graph.
    pub fn bfs(&self, start: NodeId) -> GraphResult<Vec<(NodeId, Distance)>> {
        if !self.contains(start) {
            return Err(GraphError::NodeNotFound(start));
        }

        let mut pairs: Vec<(NodeId, Distance)> = Vec::new();
        let mut seen: HashSet<NodeId> = HashSet::new();
        let mut queue: VecDeque<(NodeId, Distance)> = VecDeque::new();

        seen.insert(start);
        queue.push_back((start, 0));

        // Level-order expansion: every node is first reached at its shortest
        // distance, so the depth recorded at discovery is final. Neighbor
        // set iteration order is arbitrary; nothing below depends on it.
        while let Some((current, depth)) = queue.pop_front() {
            if let Some(neighbors) = self.neighbor_set(current) {
                for &neighbor in neighbors {
                    if seen.contains(&neighbor) {
                        continue;
                    }
                    seen.insert(neighbor);
                    pairs.push((neighbor, depth + 1));
                    queue.push_back((neighbor, depth + 1));
                }
            }
        }

        // Everything never seen has no path to `start`. `seen` holds `start`
        // itself, which keeps it out of the result.
        let reachable = pairs.len();
        for &node in self.node_order() {
            if !seen.contains(&node) {
                pairs.push((node, UNREACHABLE));
            }
        }
        debug!(
            "bfs from {}: {} reachable, {} unreachable",
            start,
            reachable,
            pairs.len() - reachable
        );

        Ok(pairs)
    }

    /// Shortest path length in edges between `a` and `b`.
    ///
    /// Zero when `a == b`, [`UNREACHABLE`] when the two nodes are in
    /// different components. Undirected edges make this symmetric:
    /// `distance(a, b)` equals `distance(b, a)`.
    ///
    /// Returns [`GraphError::NodeNotFound`] if either node is absent.
    pub fn distance(&self, a: NodeId, b: NodeId) -> GraphResult<Distance> {
        if !self.contains(a) {
            return Err(GraphError::NodeNotFound(a));
        }
        if !self.contains(b) {
            return Err(GraphError::NodeNotFound(b));
        }
        if a == b {
            return Ok(0);
        }

        // `b` is in the graph and differs from `a`, so bfs(a) reports it
        // exactly once.
        let dist = self
            .bfs(a)?
            .into_iter()
            .find_map(|(node, dist)| (node == b).then_some(dist))
            .unwrap_or(UNREACHABLE);
        Ok(dist)
    }
}
