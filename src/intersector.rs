use std::cmp::Ordering;

use crate::bounds::BoundingPolygon;
use crate::error::{GeometryError, Result};
use crate::generalized::{EdgeResolver, GeneralizedEdge, GeneralizedVertex, common_edge};
use crate::kernel::{Point, compare_power_distance, dual_line, power_center};
use crate::triangulation::Triangulation;

/// How the side of a generalized vertex is decided.
///
/// Both strategies compute the same point, so with an exact scalar they give
/// identical cells. `Specialized` avoids the generic line-line construction where
/// the kind of the two edges gives a cheaper or better conditioned one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SideTest {
    /// Dispatch on the kinds of the two edges.
    #[default]
    Specialized,
    /// Always intersect the two supporting lines.
    Fallback,
}

/// Clips a generalized polygon by the halfplane where a site beats one neighbor.
pub struct CellClipper<'a, Tr: Triangulation> {
    resolver: EdgeResolver<'a, Tr>,
    side_test: SideTest,
}

impl<'a, Tr: Triangulation> CellClipper<'a, Tr> {
    pub fn new(polygon: &'a BoundingPolygon<Tr::Scalar>, triangulation: &'a Tr) -> Self {
        Self {
            resolver: EdgeResolver::new(polygon, triangulation),
            side_test: SideTest::default(),
        }
    }

    pub fn with_side_test(mut self, side_test: SideTest) -> Self {
        self.side_test = side_test;
        self
    }

    pub fn side_test(&self) -> SideTest {
        self.side_test
    }

    pub fn resolver(&self) -> &EdgeResolver<'a, Tr> {
        &self.resolver
    }

    /// Location of `vertex` in the cell of `v`, built the cheapest way its edge kinds allow.
    fn witness(&self, v: Tr::Vertex, vertex: &GeneralizedVertex<Tr::Vertex>) -> Result<Point<Tr::Scalar>> {
        use GeneralizedEdge::{Boundary, Neighbor};

        if self.side_test == SideTest::Fallback {
            return self.resolver.vertex_to_point(v, vertex);
        }
        let tri = self.resolver.triangulation();
        match (&vertex.first, &vertex.second) {
            (Boundary(i), Boundary(j)) => match self.resolver.shared_corner(*i, *j) {
                Some(corner) => Ok(corner.clone()),
                None => self.resolver.vertex_to_point(v, vertex),
            },
            (Neighbor(u1), Neighbor(u2)) => {
                power_center(tri.point(v), tri.point(*u2), tri.point(*u1))
            }
            (Boundary(i), Neighbor(u)) | (Neighbor(u), Boundary(i)) => {
                let side = self.resolver.polygon().supporting_line(*i);
                side.intersection(&dual_line(tri.point(v), tri.point(*u)))
            }
        }
    }

    /// Whether `vertex` is at least as close (in power) to `v` as to `w`. Ties count as inside.
    pub fn inside(
        &self,
        v: Tr::Vertex,
        w: Tr::Vertex,
        vertex: &GeneralizedVertex<Tr::Vertex>,
    ) -> Result<bool> {
        let tri = self.resolver.triangulation();
        let x = self.witness(v, vertex)?;
        Ok(compare_power_distance(tri.point(v), tri.point(w), &x) != Ordering::Greater)
    }

    /// One Sutherland–Hodgman pass over `polygon` for the halfplane of `v` against `w`.
    ///
    /// A crossing of edge `(s, e)` becomes the vertex `(bisector of v and w, edge shared by s and e)`.
    /// `result` is cleared first.
    pub fn clip(
        &self,
        polygon: &[GeneralizedVertex<Tr::Vertex>],
        v: Tr::Vertex,
        w: Tr::Vertex,
        result: &mut Vec<GeneralizedVertex<Tr::Vertex>>,
    ) -> Result<()> {
        result.clear();
        let Some(last) = polygon.last() else {
            return Ok(());
        };

        let bisector = GeneralizedEdge::Neighbor(w);
        let crossing = |s: &GeneralizedVertex<Tr::Vertex>, e: &GeneralizedVertex<Tr::Vertex>, index: usize| {
            match common_edge(s, e) {
                Some(edge) => Ok(GeneralizedVertex::new(bisector, edge)),
                None => {
                    log::error!("no common edge between {:?} and {:?} in cell of {:?}", s, e, v);
                    Err(GeometryError::MissingCommonEdge { index })
                }
            }
        };

        let mut s = last;
        let mut s_inside = self.inside(v, w, s)?;
        for (index, e) in polygon.iter().enumerate() {
            let e_inside = self.inside(v, w, e)?;
            if e_inside {
                if !s_inside {
                    result.push(crossing(s, e, index)?);
                }
                result.push(*e);
            } else if s_inside {
                result.push(crossing(s, e, index)?);
            }
            s = e;
            s_inside = e_inside;
        }
        Ok(())
    }
}
