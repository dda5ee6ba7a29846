use super::{Point, Scalar};
use crate::error::{GeometryError, Result};

/// Position of a point relative to an oriented line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrientedSide {
    Negative,
    OnBoundary,
    Positive,
}

/// Oriented line `a·x + b·y + c = 0`. The positive side is where the
/// left-hand side evaluates above zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line<T> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T: Scalar> Line<T> {
    pub fn new(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }

    /// Line through `p` and `q`, oriented so that points to the left of
    /// `p → q` are on the positive side.
    pub fn through(p: &Point<T>, q: &Point<T>) -> Self {
        let a = p.y.clone() - q.y.clone();
        let b = q.x.clone() - p.x.clone();
        let c = -(p.x.clone() * a.clone()) - p.y.clone() * b.clone();
        Self { a, b, c }
    }

    /// Evaluates `a·x + b·y + c` at `p`.
    pub fn eval(&self, p: &Point<T>) -> T {
        self.a.clone() * p.x.clone() + self.b.clone() * p.y.clone() + self.c.clone()
    }

    pub fn oriented_side(&self, p: &Point<T>) -> OrientedSide {
        let v = self.eval(p);
        if v.is_positive() {
            OrientedSide::Positive
        } else if v.is_negative() {
            OrientedSide::Negative
        } else {
            OrientedSide::OnBoundary
        }
    }

    /// Same line with the opposite orientation.
    pub fn opposite(&self) -> Self {
        Self::new(-self.a.clone(), -self.b.clone(), -self.c.clone())
    }

    pub fn is_degenerate(&self) -> bool {
        self.a.is_zero() && self.b.is_zero()
    }

    /// The unique common point of two lines.
    pub fn intersection(&self, other: &Line<T>) -> Result<Point<T>> {
        let det = self.a.clone() * other.b.clone() - other.a.clone() * self.b.clone();
        if det.is_zero() {
            return Err(GeometryError::ParallelLines);
        }
        let x = (self.b.clone() * other.c.clone() - other.b.clone() * self.c.clone()) / det.clone();
        let y = (other.a.clone() * self.c.clone() - self.a.clone() * other.c.clone()) / det;
        Ok(Point::new(x, y))
    }
}

/// Point where the closed segment `[a, b]` meets `line`.
///
/// Fails when the segment is parallel to the line or lies strictly on one side.
pub fn segment_line_intersection<T: Scalar>(
    a: &Point<T>,
    b: &Point<T>,
    line: &Line<T>,
) -> Result<Point<T>> {
    let da = line.eval(a);
    let db = line.eval(b);
    let denom = da.clone() - db;
    if denom.is_zero() {
        return Err(GeometryError::NoIntersection);
    }
    let t = da / denom;
    if t.is_negative() || t > T::one() {
        return Err(GeometryError::NoIntersection);
    }
    Ok(a.add(&b.sub(a).scale(&t)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{Rational, rational};

    fn p(x: i64, y: i64) -> Point<Rational> {
        Point::new(rational(x, 1), rational(y, 1))
    }

    #[test]
    fn test_line_orientation() {
        let l = Line::through(&p(0, 0), &p(1, 0));
        assert_eq!(l.oriented_side(&p(0, 1)), OrientedSide::Positive);
        assert_eq!(l.oriented_side(&p(0, -1)), OrientedSide::Negative);
        assert_eq!(l.oriented_side(&p(5, 0)), OrientedSide::OnBoundary);
        assert_eq!(l.opposite().oriented_side(&p(0, 1)), OrientedSide::Negative);
    }

    #[test]
    fn test_line_intersection() {
        let l = Line::through(&p(0, 0), &p(2, 2));
        let m = Line::through(&p(0, 2), &p(2, 0));
        assert_eq!(l.intersection(&m), Ok(p(1, 1)));

        let parallel = Line::through(&p(0, 1), &p(2, 3));
        assert_eq!(l.intersection(&parallel), Err(GeometryError::ParallelLines));
    }

    #[test]
    fn test_segment_intersection() {
        let l = Line::new(rational(1, 1), rational(0, 1), rational(-1, 2));
        let x = segment_line_intersection(&p(0, 0), &p(1, 1), &l).unwrap();
        assert_eq!(x, Point::new(rational(1, 2), rational(1, 2)));

        let miss = segment_line_intersection(&p(1, 0), &p(2, 3), &l);
        assert_eq!(miss, Err(GeometryError::NoIntersection));
    }
}
