use js_sys::{Array, Float64Array};
use rand::prelude::*;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;

use crate::bounds::BoundingPolygon;
use crate::cell::Cell;
use crate::error::{GeometryError, Result as GeometryResult};
use crate::generalized::GeneralizedEdge;
use crate::kernel::{Point, WeightedPoint};
use crate::tessellation::Tessellation;
use crate::triangulation::NeighborGraph;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

#[wasm_bindgen(typescript_custom_section)]
const TS_CONSTANTS_BOUNDARY: &'static str = r#"
export const BOUNDARY_ID_START = -1;
"#;

fn to_js_error(e: impl ToString) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Edge ID as seen from JavaScript: neighbor index, or `-1 - side` for polygon sides.
///
/// `None` when the index does not fit an `i32`.
fn edge_id(edge: &GeneralizedEdge<usize>) -> Option<i32> {
    match edge {
        GeneralizedEdge::Boundary(i) => i32::try_from(*i).ok().map(|i| -1 - i),
        GeneralizedEdge::Neighbor(w) => i32::try_from(*w).ok(),
    }
}

/// Splits a flat `[x0, y0, x1, y1, ...]` list into points.
fn parse_points(flat: &[f64]) -> GeometryResult<Vec<Point<f64>>> {
    if flat.len() % 2 != 0 {
        return Err(GeometryError::OddCoordinates { len: flat.len() });
    }
    Ok(flat.chunks_exact(2).map(|c| Point::new(c[0], c[1])).collect())
}

/// Power diagram of weighted sites clipped to a convex polygon, in `f64`.
#[wasm_bindgen]
pub struct PowerDiagram2D {
    polygon: BoundingPolygon<f64>,
    sites: Vec<WeightedPoint<f64>>,
    cells: Vec<Cell<f64, usize>>,
}

#[wasm_bindgen]
impl PowerDiagram2D {
    /// `polygon` is a flat `[x0, y0, x1, y1, ...]` list of counter-clockwise corners.
    #[wasm_bindgen(constructor)]
    pub fn new(polygon: &[f64]) -> Result<PowerDiagram2D, JsValue> {
        let points = parse_points(polygon).map_err(to_js_error)?;
        Ok(PowerDiagram2D {
            polygon: BoundingPolygon::new(points).map_err(to_js_error)?,
            sites: Vec::new(),
            cells: Vec::new(),
        })
    }

    /// Replaces the sites. `weights` may be empty for an unweighted (Voronoi) diagram.
    pub fn set_sites(&mut self, sites: &[f64], weights: &[f64]) -> Result<(), JsValue> {
        let points = parse_points(sites).map_err(to_js_error)?;
        if !weights.is_empty() && weights.len() != points.len() {
            return Err(to_js_error(GeometryError::SizeMismatch {
                expected: points.len(),
                found: weights.len(),
            }));
        }
        self.sites = points
            .into_iter()
            .enumerate()
            .map(|(i, p)| WeightedPoint::new(p, weights.get(i).copied().unwrap_or(0.0)))
            .collect();
        self.cells.clear();
        Ok(())
    }

    /// Replaces the sites by `count` unweighted points drawn uniformly inside the polygon.
    pub fn random_sites(&mut self, count: usize) {
        let mut rng = StdRng::seed_from_u64(get_seed());
        let (min, max) = self.extent();
        let mut sites = Vec::with_capacity(count);
        let max_attempts = count * 1000;
        let mut attempts = 0;
        while sites.len() < count && attempts < max_attempts {
            attempts += 1;
            let p = Point::new(
                min[0] + rng.r#gen::<f64>() * (max[0] - min[0]),
                min[1] + rng.r#gen::<f64>() * (max[1] - min[1]),
            );
            if self.polygon.contains(&p) {
                sites.push(WeightedPoint::unweighted(p));
            }
        }
        self.sites = sites;
        self.cells.clear();
    }

    pub fn calculate(&mut self) -> Result<(), JsValue> {
        let graph = NeighborGraph::regular(self.sites.clone(), &self.polygon).map_err(to_js_error)?;
        let mut tessellation = Tessellation::new(&self.polygon, &graph);
        tessellation.calculate().map_err(to_js_error)?;
        self.cells = tessellation.cells;
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn count_sites(&self) -> usize {
        self.sites.len()
    }

    #[wasm_bindgen(getter)]
    pub fn count_cells(&self) -> usize {
        self.cells.len()
    }

    /// Flat `[x0, y0, x1, y1, ...]` vertices of cell `index`; empty if out of range.
    pub fn cell_vertices(&self, index: usize) -> Vec<f64> {
        self.cells
            .get(index)
            .map(|cell| cell.vertices().iter().flat_map(|p| p.to_array()).collect())
            .unwrap_or_default()
    }

    /// Edge IDs of cell `index`, aligned with its vertices; empty if out of range.
    pub fn cell_edges(&self, index: usize) -> Result<Vec<i32>, JsValue> {
        let Some(cell) = self.cells.get(index) else {
            return Ok(Vec::new());
        };
        cell.edges()
            .iter()
            .map(|edge| edge_id(edge).ok_or_else(|| to_js_error(format!("edge {:?} exceeds i32", edge))))
            .collect()
    }

    pub fn cell_area(&self, index: usize) -> f64 {
        self.cells.get(index).map_or(0.0, |cell| cell.area())
    }

    pub fn cell_centroid(&self, index: usize) -> Option<Vec<f64>> {
        let centroid = self.cells.get(index)?.centroid()?;
        Some(centroid.to_array().to_vec())
    }

    /// All cells as an array of flat vertex arrays.
    #[wasm_bindgen(getter)]
    pub fn cells(&self) -> Array {
        self.cells
            .iter()
            .map(|cell| {
                let flat: Vec<f64> = cell.vertices().iter().flat_map(|p| p.to_array()).collect();
                Float64Array::from(&flat[..])
            })
            .collect()
    }
}

impl PowerDiagram2D {
    fn extent(&self) -> ([f64; 2], [f64; 2]) {
        let mut min = [f64::INFINITY; 2];
        let mut max = [f64::NEG_INFINITY; 2];
        for p in self.polygon.points() {
            min = [min[0].min(p.x), min[1].min(p.y)];
            max = [max[0].max(p.x), max[1].max(p.y)];
        }
        (min, max)
    }
}

fn get_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * 4294967296.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        123456789
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_diagram_cells_cover_polygon() {
        let mut diagram = PowerDiagram2D::new(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]).unwrap();
        diagram.set_sites(&[0.25, 0.5, 0.75, 0.5], &[]).unwrap();
        diagram.calculate().unwrap();
        assert_eq!(diagram.count_cells(), 2);
        assert!((diagram.cell_area(0) - 0.5).abs() < 1e-12);
        assert_eq!(diagram.cell_vertices(0), vec![0.0, 0.0, 0.5, 0.0, 0.5, 1.0, 0.0, 1.0]);
        assert_eq!(diagram.cell_edges(0).unwrap(), vec![-1, 1, -3, -4]);
        assert!(diagram.cell_edges(5).unwrap().is_empty());
        assert!(diagram.cell_vertices(5).is_empty());
    }

    #[test]
    fn test_flat_coordinates() {
        let points = parse_points(&[0.0, 1.0, 2.0, 3.0]).unwrap();
        assert_eq!(points, vec![Point::new(0.0, 1.0), Point::new(2.0, 3.0)]);
        assert_eq!(
            parse_points(&[0.0, 1.0, 2.0]),
            Err(GeometryError::OddCoordinates { len: 3 })
        );
    }

    #[test]
    fn test_edge_ids() {
        assert_eq!(edge_id(&GeneralizedEdge::Boundary(0)), Some(-1));
        assert_eq!(edge_id(&GeneralizedEdge::Boundary(2)), Some(-3));
        assert_eq!(edge_id(&GeneralizedEdge::Neighbor(7)), Some(7));
        assert_eq!(edge_id(&GeneralizedEdge::Neighbor(usize::MAX)), None);
        assert_eq!(edge_id(&GeneralizedEdge::Boundary(i32::MAX as usize + 1)), None);
    }

    #[test]
    fn test_random_sites_inside_polygon() {
        let mut diagram = PowerDiagram2D::new(&[0.0, 0.0, 2.0, 0.0, 1.0, 2.0]).unwrap();
        diagram.random_sites(50);
        assert_eq!(diagram.count_sites(), 50);
        diagram.calculate().unwrap();
        let total: f64 = (0..diagram.count_cells()).map(|i| diagram.cell_area(i)).sum();
        assert!((total - 2.0).abs() < 1e-9);
    }
}
