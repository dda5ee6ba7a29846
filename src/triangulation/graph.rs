use std::cmp::Ordering;

use rayon::prelude::*;

use crate::bounds::BoundingPolygon;
use crate::error::{GeometryError, Result};
use crate::kernel::{Line, Point, Scalar, WeightedPoint, dual_line};
use crate::triangulation::Triangulation;

/// Handle of the vertex at infinity. Edges to it are infinite.
pub const INFINITE_VERTEX: usize = usize::MAX;

/// Edge ID of window side `edge`. Negative to avoid conflicts with site indices.
fn window_side(edge: usize) -> i64 {
    -1 - edge as i64
}

/// First pair of sites with equal position and weight, as `(lower, higher)` index.
///
/// Sites with an incomparable coordinate or weight (NaN) are skipped.
fn find_duplicate<T: Scalar>(points: &[WeightedPoint<T>]) -> Option<(usize, usize)> {
    let comparable = |t: &T| t.partial_cmp(t).is_some();
    let mut order: Vec<usize> = (0..points.len())
        .filter(|&i| {
            let s = &points[i];
            comparable(&s.point.x) && comparable(&s.point.y) && comparable(&s.weight)
        })
        .collect();
    let key = |i: usize| (&points[i].point.x, &points[i].point.y, &points[i].weight);
    order.sort_by(|&a, &b| key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal));
    order
        .windows(2)
        .find(|pair| points[pair[0]] == points[pair[1]])
        .map(|pair| (pair[0].min(pair[1]), pair[0].max(pair[1])))
}

fn check_distinct<T: Scalar>(points: &[WeightedPoint<T>]) -> Result<()> {
    match find_duplicate(points) {
        Some((first, second)) => Err(GeometryError::DuplicateSite { first, second }),
        None => Ok(()),
    }
}

/// Directed edge `source → target` of a [`NeighborGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Halfedge {
    pub source: usize,
    pub target: usize,
}

/// A triangulation stored as per-vertex rotational neighbor lists.
///
/// Either wraps the combinatorics of an external triangulation
/// ([`NeighborGraph::from_rotations`]) or derives them by brute force for small
/// inputs ([`NeighborGraph::regular`], [`NeighborGraph::delaunay`]).
#[derive(Clone, Debug)]
pub struct NeighborGraph<T> {
    points: Vec<WeightedPoint<T>>,
    rotations: Vec<Vec<usize>>,
    hidden: Vec<bool>,
}

impl<T: Scalar> NeighborGraph<T> {
    /// Wraps externally computed combinatorics.
    ///
    /// `rotations[v]` lists the neighbors of `v` in counter-clockwise order, with
    /// [`INFINITE_VERTEX`] standing for infinite edges. Sites must be pairwise
    /// distinct in position or weight.
    pub fn from_rotations(
        points: Vec<WeightedPoint<T>>,
        rotations: Vec<Vec<usize>>,
        hidden: Vec<bool>,
    ) -> Result<Self> {
        let n = points.len();
        for len in [rotations.len(), hidden.len()] {
            if len != n {
                return Err(GeometryError::SizeMismatch { expected: n, found: len });
            }
        }
        for (vertex, rotation) in rotations.iter().enumerate() {
            for &neighbor in rotation {
                if neighbor != INFINITE_VERTEX && (neighbor >= n || neighbor == vertex) {
                    return Err(GeometryError::InvalidNeighbor { vertex, neighbor });
                }
            }
        }
        check_distinct(&points)?;
        Ok(Self { points, rotations, hidden })
    }

    /// Regular-triangulation combinatorics of weighted sites, restricted to `window`.
    ///
    /// Every site's power cell is clipped explicitly to `window` by all other
    /// sites, tagging each edge with the site that produced it. The surviving tags
    /// in counter-clockwise order form the rotation, window sides become infinite
    /// edges and sites whose restricted cell is empty are hidden. Quadratic in the
    /// number of sites. Cells computed from the graph are exact for any bounding
    /// polygon inside `window`. Fails on sites equal in both position and weight.
    pub fn regular(points: Vec<WeightedPoint<T>>, window: &BoundingPolygon<T>) -> Result<Self> {
        check_distinct(&points)?;
        let restricted: Vec<(Vec<usize>, bool)> = (0..points.len())
            .into_par_iter()
            .map_init(WindowScratch::default, |scratch, i| {
                let mut cell = WindowCell::new(window);
                for (j, other) in points.iter().enumerate() {
                    if j == i {
                        continue;
                    }
                    // Non-positive side: power w.r.t. i is at most power w.r.t. j.
                    let line = dual_line(other, &points[i]);
                    if cell.clip(&line, j as i64, scratch)? && cell.is_empty() {
                        break;
                    }
                }
                Ok((cell.rotation(), cell.is_empty()))
            })
            .collect::<Result<_>>()?;

        let (rotations, hidden) = restricted.into_iter().unzip();
        log::debug!("built neighbor graph for {} sites", points.len());
        Ok(Self { points, rotations, hidden })
    }

    /// Delaunay combinatorics of unweighted sites, restricted to `window`.
    pub fn delaunay(points: Vec<Point<T>>, window: &BoundingPolygon<T>) -> Result<Self> {
        Self::regular(points.into_iter().map(WeightedPoint::unweighted).collect(), window)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[WeightedPoint<T>] {
        &self.points
    }

    /// Neighbors of `v` in counter-clockwise order.
    pub fn rotation(&self, v: usize) -> &[usize] {
        &self.rotations[v]
    }
}

impl<T: Scalar> Triangulation for NeighborGraph<T> {
    type Scalar = T;
    type Vertex = usize;
    type Edge = Halfedge;

    fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.points.len()
    }

    fn incident_edges(&self, v: usize) -> impl Iterator<Item = Halfedge> + '_ {
        self.rotations[v]
            .iter()
            .map(move |&target| Halfedge { source: v, target })
    }

    fn is_infinite(&self, edge: &Halfedge) -> bool {
        edge.target == INFINITE_VERTEX
    }

    fn neighbor(&self, edge: &Halfedge) -> usize {
        edge.target
    }

    fn is_hidden(&self, v: usize) -> bool {
        self.hidden[v]
    }

    fn point(&self, v: usize) -> &WeightedPoint<T> {
        &self.points[v]
    }
}

/// Scratch buffers reused between clips.
struct WindowScratch<T> {
    vertices: Vec<Point<T>>,
    neighbors: Vec<i64>,
    dists: Vec<T>,
}

impl<T> Default for WindowScratch<T> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            neighbors: Vec::new(),
            dists: Vec::new(),
        }
    }
}

/// The window polygon being cut down to one site's power cell.
struct WindowCell<T> {
    vertices: Vec<Point<T>>,
    // edge_neighbors[i] is the ID of the edge starting at vertices[i]
    edge_neighbors: Vec<i64>,
}

impl<T: Scalar> WindowCell<T> {
    fn new(window: &BoundingPolygon<T>) -> Self {
        Self {
            vertices: window.points().to_vec(),
            edge_neighbors: (0..window.len()).map(window_side).collect(),
        }
    }

    fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Keeps the non-positive side of `line`. Returns whether the cell changed.
    fn clip(&mut self, line: &Line<T>, neighbor_id: i64, scratch: &mut WindowScratch<T>) -> Result<bool> {
        let num_verts = self.vertices.len();
        if num_verts == 0 {
            return Ok(false);
        }

        scratch.dists.clear();
        let mut all_inside = true;
        let mut all_outside = true;
        for v in &self.vertices {
            let d = line.eval(v);
            if d.is_positive() {
                all_inside = false;
            } else {
                all_outside = false;
            }
            scratch.dists.push(d);
        }

        if all_inside {
            return Ok(false);
        }
        if all_outside {
            self.vertices.clear();
            self.edge_neighbors.clear();
            return Ok(true);
        }

        scratch.vertices.clear();
        scratch.neighbors.clear();

        for i in 0..num_verts {
            let j = (i + 1) % num_verts;
            let d_i = &scratch.dists[i];
            let d_j = &scratch.dists[j];
            let neighbor = self.edge_neighbors[i];

            if !d_i.is_positive() {
                scratch.vertices.push(self.vertices[i].clone());
                if !d_j.is_positive() {
                    scratch.neighbors.push(neighbor);
                } else if d_i.is_zero() {
                    // Leaves exactly at V_i: the clipping edge starts here.
                    scratch.neighbors.push(neighbor_id);
                } else {
                    scratch.neighbors.push(neighbor);
                    scratch.vertices.push(self.crossing(i, j, d_i, d_j)?);
                    scratch.neighbors.push(neighbor_id);
                }
            } else if !d_j.is_positive() && !d_j.is_zero() {
                // Entering strictly before V_j; the edge from I to V_j inherits neighbor.
                scratch.vertices.push(self.crossing(i, j, d_i, d_j)?);
                scratch.neighbors.push(neighbor);
            }
        }

        std::mem::swap(&mut self.vertices, &mut scratch.vertices);
        std::mem::swap(&mut self.edge_neighbors, &mut scratch.neighbors);
        if self.vertices.len() < 3 {
            self.vertices.clear();
            self.edge_neighbors.clear();
        }
        Ok(true)
    }

    fn crossing(&self, i: usize, j: usize, d_i: &T, d_j: &T) -> Result<Point<T>> {
        let denom = d_i.clone() - d_j.clone();
        if denom.is_zero() {
            return Err(GeometryError::NoIntersection);
        }
        let t = d_i.clone() / denom;
        let vi = &self.vertices[i];
        Ok(vi.add(&self.vertices[j].sub(vi).scale(&t)))
    }

    /// Neighbor sites in counter-clockwise order, one infinite edge per run of window sides.
    fn rotation(&self) -> Vec<usize> {
        let mut rotation: Vec<usize> = Vec::with_capacity(self.edge_neighbors.len());
        for &id in &self.edge_neighbors {
            let next = if id >= 0 { id as usize } else { INFINITE_VERTEX };
            if rotation.last() != Some(&next) {
                rotation.push(next);
            }
        }
        if rotation.len() > 1 && rotation.first() == rotation.last() {
            rotation.pop();
        }
        rotation
    }
}
