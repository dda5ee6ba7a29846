use crate::bounds::polygon_area;
use crate::generalized::GeneralizedEdge;
use crate::kernel::{Point, Scalar};
use crate::quadrature::{Integrand, QuadratureRule, integrate_polygon};

/// The part of one site's Voronoi (or power) cell inside the bounding polygon.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell<T, V> {
    pub(crate) site: V,
    // Counter-clockwise vertices; empty for hidden sites and cells missing the polygon.
    pub(crate) vertices: Vec<Point<T>>,
    // edges[i] supports the segment from vertices[i] to vertices[i + 1].
    pub(crate) edges: Vec<GeneralizedEdge<V>>,
}

impl<T: Scalar, V: Copy + Eq> Cell<T, V> {
    pub fn new(site: V, vertices: Vec<Point<T>>, edges: Vec<GeneralizedEdge<V>>) -> Self {
        Self { site, vertices, edges }
    }

    pub fn empty(site: V) -> Self {
        Self::new(site, Vec::new(), Vec::new())
    }

    pub fn site(&self) -> V {
        self.site
    }

    pub fn vertices(&self) -> &[Point<T>] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Point<T>> {
        self.vertices
    }

    pub fn edges(&self) -> &[GeneralizedEdge<V>] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn area(&self) -> T {
        polygon_area(&self.vertices)
    }

    /// Center of mass, `None` when the cell has no area.
    pub fn centroid(&self) -> Option<Point<T>> {
        let n = self.vertices.len();
        if n < 3 {
            return None;
        }

        let mut cx = T::zero();
        let mut cy = T::zero();
        let mut twice_area = T::zero();
        for i in 0..n {
            let a = &self.vertices[i];
            let b = &self.vertices[(i + 1) % n];
            let cross = a.cross(b);
            cx = cx + (a.x.clone() + b.x.clone()) * cross.clone();
            cy = cy + (a.y.clone() + b.y.clone()) * cross.clone();
            twice_area = twice_area + cross;
        }

        if twice_area.is_zero() {
            return None;
        }
        let factor = (T::one() + T::one() + T::one()) * twice_area;
        Some(Point::new(cx / factor.clone(), cy / factor))
    }

    /// Neighbors whose radical axis contributes an edge, in boundary order.
    pub fn neighbors(&self) -> Vec<V> {
        let mut neighbors = Vec::new();
        for edge in &self.edges {
            if let GeneralizedEdge::Neighbor(w) = edge {
                if !neighbors.contains(w) {
                    neighbors.push(*w);
                }
            }
        }
        neighbors
    }

    /// Whether some edge of the cell lies on the bounding polygon.
    pub fn touches_boundary(&self) -> bool {
        self.edges
            .iter()
            .any(|edge| matches!(edge, GeneralizedEdge::Boundary(_)))
    }

    /// Integral of `f` over the cell.
    pub fn integrate<R, F>(&self, rule: &QuadratureRule, f: F) -> R
    where
        R: Integrand<T>,
        F: Fn(&Point<T>) -> R,
    {
        integrate_polygon(&self.vertices, rule, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{Rational, rational};

    fn p(x: i64, y: i64) -> Point<Rational> {
        Point::new(rational(x, 1), rational(y, 1))
    }

    #[test]
    fn test_cell_metrics() {
        let cell: Cell<Rational, usize> = Cell::new(
            0,
            vec![p(0, 0), p(2, 0), p(2, 4), p(0, 4)],
            vec![
                GeneralizedEdge::Boundary(0),
                GeneralizedEdge::Neighbor(3),
                GeneralizedEdge::Boundary(2),
                GeneralizedEdge::Boundary(3),
            ],
        );
        assert_eq!(cell.area(), rational(8, 1));
        assert_eq!(cell.centroid(), Some(p(1, 2)));
        assert_eq!(cell.neighbors(), vec![3]);
        assert!(cell.touches_boundary());
    }

    #[test]
    fn test_empty_cell() {
        let cell: Cell<f64, usize> = Cell::empty(7);
        assert!(cell.is_empty());
        assert_eq!(cell.site(), 7);
        assert_eq!(cell.area(), 0.0);
        assert_eq!(cell.centroid(), None);
        assert!(cell.neighbors().is_empty());
    }
}
