//! Area-weighted integration over triangles and polygons.
//!
//! Polygons are integrated as a triangle fan from their first vertex, so the rules
//! are only meaningful for polygons star-shaped with respect to that vertex (convex
//! cells always are). Each triangle contributes its signed area.

use std::ops::{Add, Mul};

use num_traits::Zero;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::kernel::{Point, Scalar, centroid, midpoint, signed_area};

/// Values that can be integrated: summed and scaled by the field.
pub trait Integrand<T>: Zero + Add<Output = Self> + Mul<T, Output = Self> {}
impl<T, R> Integrand<T> for R where R: Zero + Add<Output = R> + Mul<T, Output = R> {}

/// Integration rule applied to every triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuadratureRule {
    /// Mean of the three vertices. Exact for affine functions.
    Vertices,
    /// Mean of the three edge midpoints. Exact for quadratics.
    Midedge,
    /// Value at the centroid. Exact for affine functions.
    Centroid,
    /// Six point rule of order 3.
    AlbrechtCollatz,
    /// Mean over `samples` uniform random points per triangle, drawn from `seed`.
    MonteCarlo { samples: usize, seed: u64 },
}

fn from_ratio<T: Scalar>(numer: u32, denom: u32) -> T {
    let n = T::from_u32(numer).unwrap_or_else(T::zero);
    let d = T::from_u32(denom).unwrap_or_else(T::one);
    n / d
}

/// Integral of `f` over the triangle `abc`.
pub fn integrate_triangle<T, R, F>(a: &Point<T>, b: &Point<T>, c: &Point<T>, rule: &QuadratureRule, f: &F) -> R
where
    T: Scalar,
    R: Integrand<T>,
    F: Fn(&Point<T>) -> R,
{
    match *rule {
        QuadratureRule::MonteCarlo { samples, seed } => {
            let mut rng = StdRng::seed_from_u64(seed);
            monte_carlo(a, b, c, samples, &mut rng, f)
        }
        _ => deterministic(a, b, c, rule, f),
    }
}

/// Integral of `f` over the polygon `points`; zero below three vertices.
pub fn integrate_polygon<T, R, F>(points: &[Point<T>], rule: &QuadratureRule, f: F) -> R
where
    T: Scalar,
    R: Integrand<T>,
    F: Fn(&Point<T>) -> R,
{
    if points.len() <= 2 {
        return R::zero();
    }
    let fan = (1..points.len() - 1).map(|i| (&points[0], &points[i], &points[i + 1]));
    match *rule {
        QuadratureRule::MonteCarlo { samples, seed } => {
            let mut rng = StdRng::seed_from_u64(seed);
            fan.fold(R::zero(), |acc, (a, b, c)| acc + monte_carlo(a, b, c, samples, &mut rng, &f))
        }
        _ => fan.fold(R::zero(), |acc, (a, b, c)| acc + deterministic(a, b, c, rule, &f)),
    }
}

fn deterministic<T, R, F>(a: &Point<T>, b: &Point<T>, c: &Point<T>, rule: &QuadratureRule, f: &F) -> R
where
    T: Scalar,
    R: Integrand<T>,
    F: Fn(&Point<T>) -> R,
{
    let area = signed_area(a, b, c);
    let third = from_ratio::<T>(1, 3);
    match rule {
        QuadratureRule::Vertices => (f(a) + f(b) + f(c)) * (area * third),
        QuadratureRule::Midedge => {
            let r = f(&midpoint(a, b)) + f(&midpoint(a, c)) + f(&midpoint(b, c));
            r * (area * third)
        }
        QuadratureRule::Centroid => f(&centroid(a, b, c)) * area,
        QuadratureRule::AlbrechtCollatz => {
            let half = from_ratio::<T>(1, 2);
            let sixth = from_ratio::<T>(1, 6);
            let two_thirds = from_ratio::<T>(2, 3);
            let u = b.sub(a);
            let v = c.sub(a);
            let at = |su: &T, sv: &T| f(&a.add(&u.scale(su)).add(&v.scale(sv)));

            let edges = at(&half, &half) + at(&half, &T::zero()) + at(&T::zero(), &half);
            let inner = at(&sixth, &two_thirds) + at(&two_thirds, &sixth) + at(&sixth, &sixth);
            (edges * from_ratio::<T>(1, 30) + inner * from_ratio::<T>(9, 30)) * area
        }
        QuadratureRule::MonteCarlo { samples, seed } => {
            let mut rng = StdRng::seed_from_u64(*seed);
            monte_carlo(a, b, c, *samples, &mut rng, f)
        }
    }
}

fn monte_carlo<T, R, F>(a: &Point<T>, b: &Point<T>, c: &Point<T>, samples: usize, rng: &mut StdRng, f: &F) -> R
where
    T: Scalar,
    R: Integrand<T>,
    F: Fn(&Point<T>) -> R,
{
    if samples == 0 {
        return R::zero();
    }
    let mut sum = R::zero();
    for _ in 0..samples {
        sum = sum + f(&random_in_triangle(a, b, c, rng));
    }
    let count = T::from_usize(samples).unwrap_or_else(T::one);
    sum * (signed_area(a, b, c) / count)
}

/// Uniform sample of the triangle `abc`.
fn random_in_triangle<T: Scalar>(a: &Point<T>, b: &Point<T>, c: &Point<T>, rng: &mut StdRng) -> Point<T> {
    let r1 = rng.r#gen::<f64>().sqrt();
    let r2 = rng.r#gen::<f64>();
    let wa = T::from_f64(1.0 - r1).unwrap_or_else(T::zero);
    let wb = T::from_f64(r1 * (1.0 - r2)).unwrap_or_else(T::zero);
    let wc = T::from_f64(r1 * r2).unwrap_or_else(T::zero);
    a.scale(&wa).add(&b.scale(&wb)).add(&c.scale(&wc))
}
