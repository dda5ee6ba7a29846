//! Symbolic cell boundary.
//!
//! A cell under construction is stored as a cyclic list of vertices, each named by
//! the two edges meeting there instead of by coordinates. An edge is either a side
//! of the bounding polygon or the radical axis between the cell's site and one of
//! its neighbors. Coordinates are only built when a predicate needs them, and once
//! more at the very end.

use crate::bounds::BoundingPolygon;
use crate::error::Result;
use crate::kernel::{Line, Point, dual_line};
use crate::triangulation::Triangulation;

/// One supporting line of a cell, named combinatorially.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeneralizedEdge<V> {
    /// Side `i` of the bounding polygon.
    Boundary(usize),
    /// Radical axis between the cell's site and this neighbor.
    Neighbor(V),
}

/// Intersection point of two generalized edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GeneralizedVertex<V> {
    pub first: GeneralizedEdge<V>,
    pub second: GeneralizedEdge<V>,
}

impl<V: Copy + Eq> GeneralizedVertex<V> {
    pub fn new(first: GeneralizedEdge<V>, second: GeneralizedEdge<V>) -> Self {
        Self { first, second }
    }

    pub fn has_edge(&self, edge: &GeneralizedEdge<V>) -> bool {
        self.first == *edge || self.second == *edge
    }
}

/// Cyclic sequence of generalized vertices; consecutive vertices share one edge.
pub type GeneralizedPolygon<V> = Vec<GeneralizedVertex<V>>;

/// The bounding polygon as a generalized polygon: vertex `i` is where side
/// `i - 1` meets side `i`, i.e. the corner `points[i]`.
pub fn seed_polygon<V: Copy + Eq>(sides: usize) -> GeneralizedPolygon<V> {
    (0..sides)
        .map(|i| {
            GeneralizedVertex::new(
                GeneralizedEdge::Boundary((i + sides - 1) % sides),
                GeneralizedEdge::Boundary(i),
            )
        })
        .collect()
}

/// The edge shared by two adjacent vertices, `None` if they share none.
pub fn common_edge<V: Copy + Eq>(
    f: &GeneralizedVertex<V>,
    g: &GeneralizedVertex<V>,
) -> Option<GeneralizedEdge<V>> {
    if g.has_edge(&f.first) {
        Some(f.first)
    } else if g.has_edge(&f.second) {
        Some(f.second)
    } else {
        None
    }
}

/// Turns generalized edges and vertices of the cell of one site into lines and points.
pub struct EdgeResolver<'a, Tr: Triangulation> {
    polygon: &'a BoundingPolygon<Tr::Scalar>,
    triangulation: &'a Tr,
}

impl<'a, Tr: Triangulation> EdgeResolver<'a, Tr> {
    pub fn new(polygon: &'a BoundingPolygon<Tr::Scalar>, triangulation: &'a Tr) -> Self {
        Self { polygon, triangulation }
    }

    pub fn polygon(&self) -> &'a BoundingPolygon<Tr::Scalar> {
        self.polygon
    }

    pub fn triangulation(&self) -> &'a Tr {
        self.triangulation
    }

    /// Supporting line of `edge` in the cell of `v`.
    pub fn edge_to_line(&self, v: Tr::Vertex, edge: &GeneralizedEdge<Tr::Vertex>) -> Line<Tr::Scalar> {
        match edge {
            GeneralizedEdge::Boundary(i) => self.polygon.supporting_line(*i),
            GeneralizedEdge::Neighbor(w) => {
                dual_line(self.triangulation.point(v), self.triangulation.point(*w))
            }
        }
    }

    /// Coordinates of `vertex` in the cell of `v`.
    ///
    /// Fails with `ParallelLines` if its two edges do not meet.
    pub fn vertex_to_point(
        &self,
        v: Tr::Vertex,
        vertex: &GeneralizedVertex<Tr::Vertex>,
    ) -> Result<Point<Tr::Scalar>> {
        let l1 = self.edge_to_line(v, &vertex.first);
        let l2 = self.edge_to_line(v, &vertex.second);
        l1.intersection(&l2)
    }

    /// The polygon corner where sides `i` and `j` meet, if they are consecutive.
    pub fn shared_corner(&self, i: usize, j: usize) -> Option<&'a Point<Tr::Scalar>> {
        let n = self.polygon.len();
        if (i + 1) % n == j % n {
            Some(self.polygon.point(j))
        } else if (j + 1) % n == i % n {
            Some(self.polygon.point(i))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{Rational, WeightedPoint, rational};
    use crate::triangulation::NeighborGraph;

    type Edge = GeneralizedEdge<usize>;

    fn p(x: i64, y: i64) -> Point<Rational> {
        Point::new(rational(x, 1), rational(y, 1))
    }

    #[test]
    fn test_seed_polygon_resolves_to_corners() {
        let square = BoundingPolygon::from_box(p(0, 0), p(2, 2)).unwrap();
        let graph = NeighborGraph::from_rotations(
            vec![WeightedPoint::unweighted(p(1, 1))],
            vec![vec![]],
            vec![false],
        )
        .unwrap();
        let resolver = EdgeResolver::new(&square, &graph);
        let seed = seed_polygon::<usize>(square.len());
        assert_eq!(seed[0], GeneralizedVertex::new(Edge::Boundary(3), Edge::Boundary(0)));
        for (i, vertex) in seed.iter().enumerate() {
            assert_eq!(resolver.vertex_to_point(0, vertex).unwrap(), square.points()[i]);
        }
        assert_eq!(resolver.shared_corner(3, 0), Some(&square.points()[0]));
        assert_eq!(resolver.shared_corner(1, 2), Some(&square.points()[2]));
        assert_eq!(resolver.shared_corner(0, 2), None);
    }

    #[test]
    fn test_neighbor_edge_is_bisector() {
        let square = BoundingPolygon::from_box(p(0, 0), p(4, 4)).unwrap();
        let graph = NeighborGraph::from_rotations(
            vec![WeightedPoint::unweighted(p(1, 2)), WeightedPoint::unweighted(p(3, 2))],
            vec![vec![1], vec![0]],
            vec![false, false],
        )
        .unwrap();
        let resolver = EdgeResolver::new(&square, &graph);
        let vertex = GeneralizedVertex::new(Edge::Neighbor(1), Edge::Boundary(0));
        assert_eq!(resolver.vertex_to_point(0, &vertex).unwrap(), p(2, 0));

        // The bisector is parallel to the right side.
        let parallel = GeneralizedVertex::new(Edge::Neighbor(1), Edge::Boundary(1));
        assert!(resolver.vertex_to_point(0, &parallel).is_err());
    }

    #[test]
    fn test_common_edge() {
        let f = GeneralizedVertex::new(Edge::Boundary(0), Edge::Boundary(1));
        let g = GeneralizedVertex::new(Edge::Boundary(1), Edge::Neighbor(4));
        let h = GeneralizedVertex::new(Edge::Neighbor(4), Edge::Boundary(2));
        assert_eq!(common_edge(&f, &g), Some(Edge::Boundary(1)));
        assert_eq!(common_edge(&g, &h), Some(Edge::Neighbor(4)));
        assert_eq!(common_edge(&f, &h), None);
    }
}
