use std::fmt::Debug;

use crate::kernel::{Scalar, WeightedPoint};

pub mod graph;

/// Combinatorial access to a (weighted) Delaunay triangulation.
///
/// Only what the cell computation needs: stable vertex handles, the edges around a
/// vertex in a fixed rotational order, and the site stored at each vertex. Any
/// triangulation exposing these works; the construction algorithm is not part of
/// this crate.
pub trait Triangulation: Sync {
    type Scalar: Scalar;
    type Vertex: Copy + Eq + Debug + Send + Sync;
    type Edge;

    /// All finite vertices.
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_;

    /// Edges incident to `v`, in the triangulation's rotational order.
    fn incident_edges(&self, v: Self::Vertex) -> impl Iterator<Item = Self::Edge> + '_;

    /// Whether `edge` connects to the vertex at infinity.
    fn is_infinite(&self, edge: &Self::Edge) -> bool;

    /// The vertex at the far end of a finite incident edge.
    fn neighbor(&self, edge: &Self::Edge) -> Self::Vertex;

    /// Whether the power cell of `v` is empty. Never true for unweighted sites.
    fn is_hidden(&self, _v: Self::Vertex) -> bool {
        false
    }

    fn point(&self, v: Self::Vertex) -> &WeightedPoint<Self::Scalar>;
}

pub use graph::{Halfedge, INFINITE_VERTEX, NeighborGraph};
