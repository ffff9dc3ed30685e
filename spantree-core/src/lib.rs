//! Spantree core library.
//!
//! A weighted undirected graph with labelled vertices and a Prim
//! minimum-spanning-tree computation. The graph is a plain value owned by
//! its caller; mutations and the MST computation report failures as typed
//! [`GraphError`] values with stable machine-readable codes.

mod error;
mod graph;
mod mst;
mod queue;

pub use crate::{
    error::{GraphError, GraphErrorCode, Result},
    graph::{Adjacency, Graph},
    mst::{MinimumSpanningTree, MstEdge},
};
