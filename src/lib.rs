//! # voroclip
//!
//! `voroclip` computes the intersection of Voronoi and power (Laguerre) cells with a
//! convex bounding polygon, in Rust as well as compiled to WebAssembly (WASM).
//!
//! Each cell starts as the bounding polygon and is clipped once per neighbor of its
//! site. The polygon being clipped is kept symbolic: every vertex is named by the two
//! lines meeting there, a polygon side or the radical axis with a neighbor. Points
//! are only constructed to decide on which side of a bisector a vertex falls. With an
//! exact field such as [`Rational`] the cells therefore tile the polygon exactly,
//! even for cocircular sites.
//!
//! ## Features
//!
//! - **Generic kernel**: works over any [`Scalar`] field, exact rationals or `f64`.
//! - **Bring your own triangulation**: anything implementing [`Triangulation`]; a
//!   brute-force [`NeighborGraph`] is included for small inputs.
//! - **Parallel**: [`Tessellation`] computes all cells with `rayon`.
//! - **Quadrature**: integrate functions over cells with [`QuadratureRule`].
//!
//! ## Main Interface
//!
//! The primary entry points are [`voronoi_polygon_intersection`] for a single cell
//! and the [`Tessellation`] struct for all of them.

pub mod bounds;
pub mod cell;
pub mod clip;
pub mod error;
pub mod generalized;
pub mod intersection;
pub mod intersector;
pub mod kernel;
pub mod quadrature;
pub mod tessellation;
pub mod triangulation;
pub mod wasm;

pub use bounds::BoundingPolygon;
pub use cell::Cell;
pub use clip::{clip_polygon, clip_polygon_halfplane};
pub use error::{GeometryError, Result};
pub use generalized::{GeneralizedEdge, GeneralizedPolygon, GeneralizedVertex};
pub use intersection::{voronoi_polygon_intersection, voronoi_polygon_intersection_with};
pub use intersector::{CellClipper, SideTest};
pub use kernel::{Line, Point, Rational, Scalar, WeightedPoint, rational};
pub use quadrature::QuadratureRule;
pub use tessellation::Tessellation;
pub use triangulation::{INFINITE_VERTEX, NeighborGraph, Triangulation};
