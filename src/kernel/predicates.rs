use std::cmp::Ordering;

use super::{Line, Point, Scalar, WeightedPoint};
use crate::error::{GeometryError, Result};

/// Power of `x` with respect to `site`: `|x - p|² - w`.
pub fn power<T: Scalar>(site: &WeightedPoint<T>, x: &Point<T>) -> T {
    x.squared_distance(&site.point) - site.weight.clone()
}

/// Compares the power of `x` with respect to `p` against its power with respect to `q`.
///
/// `Less` means `x` lies strictly inside the cell of `p` relative to `q`,
/// `Equal` means it lies on their radical axis. Incomparable powers (a NaN
/// coordinate with `f64`) also give `Equal`, so clipping keeps such a vertex.
pub fn compare_power_distance<T: Scalar>(
    p: &WeightedPoint<T>,
    q: &WeightedPoint<T>,
    x: &Point<T>,
) -> Ordering {
    let pp = power(p, x);
    let pq = power(q, x);
    pp.partial_cmp(&pq).unwrap_or(Ordering::Equal)
}

/// Radical axis of `p` and `q` (their bisector when both weights are zero).
///
/// The line evaluates to `power(q, x) - power(p, x)`, so its positive side
/// is where `p` is strictly closer.
pub fn dual_line<T: Scalar>(p: &WeightedPoint<T>, q: &WeightedPoint<T>) -> Line<T> {
    let two = T::one() + T::one();
    let a = two.clone() * (p.point.x.clone() - q.point.x.clone());
    let b = two * (p.point.y.clone() - q.point.y.clone());
    let c = q.point.squared_norm() - p.point.squared_norm() - q.weight.clone() + p.weight.clone();
    Line::new(a, b, c)
}

/// Weighted circumcenter of three sites: the point with equal power to all of them.
///
/// Computed relative to `p` to keep the magnitudes small for `f64`.
pub fn power_center<T: Scalar>(
    p: &WeightedPoint<T>,
    q: &WeightedPoint<T>,
    r: &WeightedPoint<T>,
) -> Result<Point<T>> {
    let qp = q.point.sub(&p.point);
    let rp = r.point.sub(&p.point);
    let two = T::one() + T::one();
    let det = two * qp.cross(&rp);
    if det.is_zero() {
        return Err(GeometryError::CollinearSites);
    }
    let bq = qp.squared_norm() - q.weight.clone() + p.weight.clone();
    let br = rp.squared_norm() - r.weight.clone() + p.weight.clone();
    let x = (bq.clone() * rp.y.clone() - br.clone() * qp.y.clone()) / det.clone();
    let y = (qp.x.clone() * br - rp.x.clone() * bq) / det;
    Ok(p.point.add(&Point::new(x, y)))
}

/// Signed area of the triangle `abc`, positive when counter-clockwise.
pub fn signed_area<T: Scalar>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> T {
    let two = T::one() + T::one();
    b.sub(a).cross(&c.sub(a)) / two
}

pub fn midpoint<T: Scalar>(a: &Point<T>, b: &Point<T>) -> Point<T> {
    let two = T::one() + T::one();
    Point::new(
        (a.x.clone() + b.x.clone()) / two.clone(),
        (a.y.clone() + b.y.clone()) / two,
    )
}

pub fn centroid<T: Scalar>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> Point<T> {
    let three = T::one() + T::one() + T::one();
    Point::new(
        (a.x.clone() + b.x.clone() + c.x.clone()) / three.clone(),
        (a.y.clone() + b.y.clone() + c.y.clone()) / three,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{OrientedSide, Rational, rational};

    fn site(x: i64, y: i64, w: i64) -> WeightedPoint<Rational> {
        WeightedPoint::new(Point::new(rational(x, 1), rational(y, 1)), rational(w, 1))
    }

    #[test]
    fn test_bisector_sides() {
        let p = site(0, 0, 0);
        let q = site(2, 0, 0);
        let l = dual_line(&p, &q);
        assert_eq!(l.oriented_side(&p.point), OrientedSide::Positive);
        assert_eq!(l.oriented_side(&q.point), OrientedSide::Negative);
        let on = Point::new(rational(1, 1), rational(7, 1));
        assert_eq!(l.oriented_side(&on), OrientedSide::OnBoundary);
        assert_eq!(compare_power_distance(&p, &q, &on), Ordering::Equal);
    }

    #[test]
    fn test_nan_power_compares_equal() {
        let p = WeightedPoint::unweighted(Point::new(0.0, 0.0));
        let q = WeightedPoint::unweighted(Point::new(2.0, 0.0));
        assert_eq!(compare_power_distance(&p, &q, &Point::new(f64::NAN, 0.0)), Ordering::Equal);
        assert_eq!(compare_power_distance(&p, &q, &Point::new(0.5, 0.0)), Ordering::Less);
    }

    #[test]
    fn test_radical_axis_shifts_with_weight() {
        // power_p(x) = x², power_q(x) = (x-2)² + 4, equal at x = 2.
        let p = site(0, 0, 0);
        let q = site(2, 0, -4);
        let l = dual_line(&p, &q);
        let x = Point::new(rational(2, 1), rational(-3, 1));
        assert_eq!(l.oriented_side(&x), OrientedSide::OnBoundary);
        let inside = Point::new(rational(1, 1), rational(0, 1));
        assert_eq!(compare_power_distance(&p, &q, &inside), Ordering::Less);
        assert_eq!(l.oriented_side(&inside), OrientedSide::Positive);
    }

    #[test]
    fn test_power_center() {
        let c = power_center(&site(0, 0, 0), &site(2, 0, 0), &site(0, 2, 0)).unwrap();
        assert_eq!(c, Point::new(rational(1, 1), rational(1, 1)));

        let collinear = power_center(&site(0, 0, 0), &site(1, 1, 0), &site(2, 2, 0));
        assert_eq!(collinear, Err(GeometryError::CollinearSites));
    }

    #[test]
    fn test_power_center_matches_radical_axes() {
        let p = site(0, 0, 1);
        let q = site(5, 1, 3);
        let r = site(1, 4, -2);
        let c = power_center(&p, &q, &r).unwrap();
        let expected = dual_line(&p, &q).intersection(&dual_line(&p, &r)).unwrap();
        assert_eq!(c, expected);
        assert_eq!(power(&p, &c), power(&q, &c));
        assert_eq!(power(&p, &c), power(&r, &c));
    }

    #[test]
    fn test_signed_area() {
        let a = Point::new(rational(0, 1), rational(0, 1));
        let b = Point::new(rational(1, 1), rational(0, 1));
        let c = Point::new(rational(0, 1), rational(1, 1));
        assert_eq!(signed_area(&a, &b, &c), rational(1, 2));
        assert_eq!(signed_area(&a, &c, &b), rational(-1, 2));
    }
}
