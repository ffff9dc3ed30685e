//! Prim minimum spanning tree construction.
//!
//! Grows a single tree outward from a caller-supplied start vertex, keeping
//! the frontier in a binary min-heap. Relaxation pushes a fresh entry instead
//! of decreasing a key in place; superseded entries are skipped once their
//! vertex is visited. Equal-weight frontier candidates resolve by ascending
//! label, and the output lists edges in vertex insertion order, so repeated
//! runs over an unmodified graph are byte-identical.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::{error::GraphError, graph::Graph, queue::MinPriorityQueue};

/// A single MST edge: the tree-side origin, the vertex the edge attached,
/// and the connecting weight.
#[derive(Clone, Debug, PartialEq)]
pub struct MstEdge {
    origin: String,
    destination: String,
    weight: f64,
}

impl MstEdge {
    /// Returns the tree-side endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn origin(&self) -> &str { &self.origin }

    /// Returns the endpoint the edge attached to the tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn destination(&self) -> &str { &self.destination }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }
}

/// The output of a minimum spanning tree computation.
///
/// Holds one edge per non-root vertex, ordered by the graph's vertex
/// insertion order rather than discovery order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MinimumSpanningTree {
    edges: Vec<MstEdge>,
    total_weight: f64,
}

impl MinimumSpanningTree {
    /// Returns the tree edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[MstEdge] { &self.edges }

    /// Returns the summed weight of the tree edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of edges in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the tree has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

pub(crate) fn prim(graph: &Graph, start: &str) -> Result<MinimumSpanningTree, GraphError> {
    if graph.is_empty() {
        return Ok(MinimumSpanningTree::default());
    }
    if !graph.contains(start) {
        return Err(GraphError::UnknownVertex {
            label: start.to_owned(),
        });
    }

    let mut key: HashMap<String, f64> = graph
        .labels()
        .map(|label| (label.to_owned(), f64::INFINITY))
        .collect();
    let mut parent: HashMap<String, String> = HashMap::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut queue = MinPriorityQueue::new();

    key.insert(start.to_owned(), 0.0);
    queue.enqueue(start.to_owned(), 0.0);

    while !queue.is_empty() {
        let entry = queue.dequeue()?;
        trace!(
            label = entry.label(),
            priority = entry.priority(),
            "dequeued frontier entry"
        );
        if !visited.insert(entry.label().to_owned()) {
            // Superseded by a cheaper entry dequeued earlier.
            continue;
        }

        let Some(neighbours) = graph.neighbours(entry.label()) else {
            continue;
        };
        for record in neighbours {
            let neighbour = record.label();
            if visited.contains(neighbour) {
                continue;
            }
            let best = key.get(neighbour).copied().unwrap_or(f64::INFINITY);
            if record.weight() < best {
                key.insert(neighbour.to_owned(), record.weight());
                parent.insert(neighbour.to_owned(), entry.label().to_owned());
                queue.enqueue(neighbour.to_owned(), record.weight());
            }
        }
    }

    if visited.len() != graph.len() {
        return Err(GraphError::Disconnected {
            start: start.to_owned(),
            visited: visited.len(),
            vertex_count: graph.len(),
        });
    }

    let mut edges = Vec::with_capacity(graph.len().saturating_sub(1));
    let mut total_weight = 0.0;
    for label in graph.labels() {
        if let Some(origin) = parent.get(label) {
            let weight = key.get(label).copied().unwrap_or(f64::INFINITY);
            total_weight += weight;
            edges.push(MstEdge {
                origin: origin.clone(),
                destination: label.to_owned(),
                weight,
            });
        }
    }
    Ok(MinimumSpanningTree {
        edges,
        total_weight,
    })
}

#[cfg(test)]
mod property;
