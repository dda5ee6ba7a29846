//! Intersection of one Voronoi (power) cell with the bounding polygon.

use crate::bounds::BoundingPolygon;
use crate::cell::Cell;
use crate::error::{GeometryError, Result};
use crate::generalized::{GeneralizedPolygon, common_edge, seed_polygon};
use crate::intersector::{CellClipper, SideTest};
use crate::triangulation::Triangulation;

/// Ping-pong buffers for the generalized polygon, reused between cells.
#[derive(Clone, Debug)]
pub struct ClipScratch<V> {
    current: GeneralizedPolygon<V>,
    next: GeneralizedPolygon<V>,
}

impl<V> Default for ClipScratch<V> {
    fn default() -> Self {
        Self {
            current: Vec::new(),
            next: Vec::new(),
        }
    }
}

/// Computes the cell of `v` clipped to the clipper's bounding polygon.
///
/// Starts from the polygon itself and clips it once per finite incident edge of `v`,
/// then resolves the surviving generalized vertices to points. Hidden vertices get
/// an empty cell.
pub fn compute_cell<Tr: Triangulation>(
    clipper: &CellClipper<'_, Tr>,
    v: Tr::Vertex,
    scratch: &mut ClipScratch<Tr::Vertex>,
) -> Result<Cell<Tr::Scalar, Tr::Vertex>> {
    let resolver = clipper.resolver();
    let tri = resolver.triangulation();
    if tri.is_hidden(v) {
        log::trace!("vertex {:?} is hidden", v);
        return Ok(Cell::empty(v));
    }

    scratch.current = seed_polygon(resolver.polygon().len());
    for edge in tri.incident_edges(v) {
        if tri.is_infinite(&edge) {
            continue;
        }
        if scratch.current.is_empty() {
            break;
        }
        let w = tri.neighbor(&edge);
        clipper.clip(&scratch.current, v, w, &mut scratch.next)?;
        log::trace!("clipped cell of {:?} by {:?}: {} vertices", v, w, scratch.next.len());
        std::mem::swap(&mut scratch.current, &mut scratch.next);
    }

    let polygon = &scratch.current;
    let n = polygon.len();
    let mut vertices = Vec::with_capacity(n);
    let mut edges = Vec::with_capacity(n);
    for (k, vertex) in polygon.iter().enumerate() {
        vertices.push(resolver.vertex_to_point(v, vertex)?);
        let next = &polygon[(k + 1) % n];
        let edge = common_edge(vertex, next).ok_or(GeometryError::MissingCommonEdge { index: k })?;
        edges.push(edge);
    }
    Ok(Cell::new(v, vertices, edges))
}

/// The part of the Voronoi (power) cell of `v` inside `polygon`.
///
/// `polygon` must be convex and counter-clockwise. The result lists the cell's
/// vertices counter-clockwise, starting where the clipping left off; it is empty
/// when the cell misses the polygon or `v` is hidden.
pub fn voronoi_polygon_intersection<Tr: Triangulation>(
    polygon: &BoundingPolygon<Tr::Scalar>,
    triangulation: &Tr,
    v: Tr::Vertex,
) -> Result<Cell<Tr::Scalar, Tr::Vertex>> {
    voronoi_polygon_intersection_with(polygon, triangulation, v, SideTest::default())
}

/// As [`voronoi_polygon_intersection`], choosing how vertex sides are decided.
pub fn voronoi_polygon_intersection_with<Tr: Triangulation>(
    polygon: &BoundingPolygon<Tr::Scalar>,
    triangulation: &Tr,
    v: Tr::Vertex,
    side_test: SideTest,
) -> Result<Cell<Tr::Scalar, Tr::Vertex>> {
    let clipper = CellClipper::new(polygon, triangulation).with_side_test(side_test);
    compute_cell(&clipper, v, &mut ClipScratch::default())
}
