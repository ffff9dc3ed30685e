//! Weighted undirected graph with labelled vertices.
//!
//! One logical undirected edge is stored as two directed adjacency records,
//! so traversal never consults the reverse direction. Parallel edges between
//! the same pair coexist; the MST traversal uses the cheapest instance it
//! encounters. Vertices iterate in insertion order, which fixes the MST
//! output ordering.

use indexmap::IndexMap;
use tracing::{instrument, warn};

use crate::{
    error::{GraphError, Result},
    mst::{self, MinimumSpanningTree},
};

/// A single adjacency record: the neighbouring vertex and the edge weight.
#[derive(Clone, Debug, PartialEq)]
pub struct Adjacency {
    label: String,
    weight: f64,
}

impl Adjacency {
    /// Returns the neighbouring vertex label.
    #[must_use]
    #[rustfmt::skip]
    pub fn label(&self) -> &str { &self.label }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Vertex {
    adjacent: Vec<Adjacency>,
}

/// An interactively edited weighted undirected graph.
///
/// # Examples
/// ```
/// use spantree_core::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_vertex("A");
/// graph.add_vertex("B");
/// graph.add_vertex("C");
/// graph.add_edge("A", "B", 4.0)?;
/// graph.add_edge("B", "C", 2.0)?;
/// graph.add_edge("A", "C", 9.0)?;
///
/// let tree = graph.minimum_spanning_tree("A")?;
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.total_weight(), 6.0);
/// # Ok::<(), spantree_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    vertices: IndexMap<String, Vertex>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a vertex with an empty adjacency list.
    ///
    /// Re-adding an existing label replaces the entry and discards its
    /// adjacency records; neighbours keep their half of any previous edges
    /// until those are removed explicitly.
    pub fn add_vertex(&mut self, label: impl Into<String>) {
        self.vertices.insert(label.into(), Vertex::default());
    }

    /// Adds an undirected edge by appending a record to both endpoints.
    ///
    /// Parallel edges between the same pair are permitted and coexist.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when either endpoint is absent
    /// and [`GraphError::NonFiniteWeight`] when `weight` is NaN or infinite.
    /// The graph is untouched on failure.
    pub fn add_edge(&mut self, origin: &str, destination: &str, weight: f64) -> Result<()> {
        if let Some(missing) = self.missing_endpoint(origin, destination) {
            warn!(origin, destination, missing, "rejecting edge with unknown endpoint");
            return Err(GraphError::UnknownVertex {
                label: missing.to_owned(),
            });
        }
        if !weight.is_finite() {
            warn!(origin, destination, weight, "rejecting edge with non-finite weight");
            return Err(GraphError::NonFiniteWeight {
                origin: origin.to_owned(),
                destination: destination.to_owned(),
            });
        }
        self.push_adjacency(origin, destination, weight);
        self.push_adjacency(destination, origin, weight);
        Ok(())
    }

    /// Removes a vertex and scrubs every adjacency record that referenced it,
    /// so no dangling neighbour references survive.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `label` is absent.
    pub fn remove_vertex(&mut self, label: &str) -> Result<()> {
        if self.vertices.shift_remove(label).is_none() {
            warn!(label, "rejecting removal of unknown vertex");
            return Err(GraphError::UnknownVertex {
                label: label.to_owned(),
            });
        }
        for vertex in self.vertices.values_mut() {
            vertex.adjacent.retain(|record| record.label != label);
        }
        Ok(())
    }

    /// Removes every edge between `origin` and `destination`, from both
    /// adjacency lists. Parallel edges between the pair are all removed.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when either endpoint is absent.
    pub fn remove_edge(&mut self, origin: &str, destination: &str) -> Result<()> {
        if let Some(missing) = self.missing_endpoint(origin, destination) {
            warn!(origin, destination, missing, "rejecting edge removal with unknown endpoint");
            return Err(GraphError::UnknownVertex {
                label: missing.to_owned(),
            });
        }
        self.drop_adjacency(origin, destination);
        self.drop_adjacency(destination, origin);
        Ok(())
    }

    /// Computes the minimum spanning tree rooted at `start`.
    ///
    /// An empty graph yields an empty tree. Edges appear in vertex insertion
    /// order, so repeated calls on an unmodified graph return identical
    /// results.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `start` is absent from a
    /// non-empty graph and [`GraphError::Disconnected`] when `start` cannot
    /// reach every vertex.
    #[instrument(name = "graph.minimum_spanning_tree", skip(self), err)]
    pub fn minimum_spanning_tree(&self, start: &str) -> Result<MinimumSpanningTree> {
        mst::prim(self, start)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` when the graph holds no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` when `label` is present.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.vertices.contains_key(label)
    }

    /// Iterates vertex labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.vertices.keys().map(String::as_str)
    }

    /// Returns the adjacency records of `label`, or `None` when absent.
    #[must_use]
    pub fn neighbours(&self, label: &str) -> Option<&[Adjacency]> {
        self.vertices
            .get(label)
            .map(|vertex| vertex.adjacent.as_slice())
    }

    fn missing_endpoint<'a>(&self, origin: &'a str, destination: &'a str) -> Option<&'a str> {
        if !self.vertices.contains_key(origin) {
            return Some(origin);
        }
        if !self.vertices.contains_key(destination) {
            return Some(destination);
        }
        None
    }

    fn push_adjacency(&mut self, origin: &str, destination: &str, weight: f64) {
        if let Some(vertex) = self.vertices.get_mut(origin) {
            vertex.adjacent.push(Adjacency {
                label: destination.to_owned(),
                weight,
            });
        }
    }

    fn drop_adjacency(&mut self, origin: &str, destination: &str) {
        if let Some(vertex) = self.vertices.get_mut(origin) {
            vertex.adjacent.retain(|record| record.label != destination);
        }
    }
}
