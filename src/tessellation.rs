use rayon::prelude::*;

use crate::bounds::BoundingPolygon;
use crate::cell::Cell;
use crate::error::Result;
use crate::intersection::{ClipScratch, compute_cell};
use crate::intersector::{CellClipper, SideTest};
use crate::kernel::Point;
use crate::quadrature::{Integrand, QuadratureRule};
use crate::triangulation::Triangulation;

/// The Voronoi (power) diagram of a triangulation restricted to a bounding polygon.
///
/// Cells are computed independently and in parallel, one per vertex of the
/// triangulation, in the order of [`Triangulation::vertices`].
pub struct Tessellation<'a, Tr: Triangulation> {
    pub polygon: &'a BoundingPolygon<Tr::Scalar>,
    pub triangulation: &'a Tr,
    pub side_test: SideTest,
    pub cells: Vec<Cell<Tr::Scalar, Tr::Vertex>>,
}

impl<'a, Tr: Triangulation> Tessellation<'a, Tr> {
    pub fn new(polygon: &'a BoundingPolygon<Tr::Scalar>, triangulation: &'a Tr) -> Self {
        Self {
            polygon,
            triangulation,
            side_test: SideTest::default(),
            cells: Vec::new(),
        }
    }

    pub fn with_side_test(mut self, side_test: SideTest) -> Self {
        self.side_test = side_test;
        self
    }

    /// Computes and stores every cell. On error the stored cells are left untouched.
    pub fn calculate(&mut self) -> Result<()> {
        self.cells = self.map(|cell| cell)?;
        Ok(())
    }

    /// Computes every cell in parallel and maps it through `f` without storing it.
    pub fn map<R, F>(&self, f: F) -> Result<Vec<R>>
    where
        R: Send,
        F: Fn(Cell<Tr::Scalar, Tr::Vertex>) -> R + Sync + Send,
    {
        let sites: Vec<Tr::Vertex> = self.triangulation.vertices().collect();
        log::debug!("computing {} cells ({:?})", sites.len(), self.side_test);

        let clipper = CellClipper::new(self.polygon, self.triangulation).with_side_test(self.side_test);
        let results = sites
            .into_par_iter()
            .map_init(ClipScratch::default, |scratch, v| {
                compute_cell(&clipper, v, scratch).map(&f)
            })
            .collect::<Result<Vec<_>>>()?;

        log::debug!("computed {} cells", results.len());
        Ok(results)
    }

    pub fn cells(&self) -> &[Cell<Tr::Scalar, Tr::Vertex>] {
        &self.cells
    }

    pub fn get_cell(&self, index: usize) -> Option<&Cell<Tr::Scalar, Tr::Vertex>> {
        self.cells.get(index)
    }

    pub fn count_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn areas(&self) -> Vec<Tr::Scalar> {
        self.cells.par_iter().map(|cell| cell.area()).collect()
    }

    pub fn centroids(&self) -> Vec<Option<Point<Tr::Scalar>>> {
        self.cells.par_iter().map(|cell| cell.centroid()).collect()
    }

    /// Integral of `f` over every cell, computed without storing the cells.
    pub fn integrate<R, F>(&self, rule: &QuadratureRule, f: F) -> Result<Vec<R>>
    where
        R: Integrand<Tr::Scalar> + Send,
        F: Fn(&Point<Tr::Scalar>) -> R + Sync + Send,
    {
        self.map(|cell| cell.integrate(rule, &f))
    }
}
