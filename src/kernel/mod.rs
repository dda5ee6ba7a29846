//! Exact planar kernel.
//!
//! Every construction is rational in its inputs: bisectors, radical axes,
//! line intersections and power centers only ever add, multiply and divide.
//! Instantiated with [`num_rational::BigRational`] the kernel is exact and all
//! predicates agree with each other on ties. Instantiated with `f64` it is fast
//! but ties are decided by rounding.

use num_bigint::BigInt;
use num_traits::{FromPrimitive, Num, Signed};
use std::fmt::Debug;

mod line;
mod point;
mod predicates;

pub use line::{Line, OrientedSide, segment_line_intersection};
pub use point::{Point, WeightedPoint};
pub use predicates::{
    centroid, compare_power_distance, dual_line, midpoint, power, power_center, signed_area,
};

/// Number field the kernel computes over.
pub trait Scalar: Clone + PartialOrd + Num + Signed + FromPrimitive + Debug + Send + Sync {}
impl<T> Scalar for T where T: Clone + PartialOrd + Num + Signed + FromPrimitive + Debug + Send + Sync {}

/// Exact rational scalar used by the reference configurations.
pub type Rational = num_rational::BigRational;

/// Builds the rational `numer / denom`.
///
/// Panics if `denom` is zero.
pub fn rational(numer: i64, denom: i64) -> Rational {
    Rational::new(BigInt::from(numer), BigInt::from(denom))
}
