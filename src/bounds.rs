use crate::error::{GeometryError, Result};
use crate::kernel::{Line, Point, Scalar};

/// The fixed region every cell is clipped to.
///
/// An ordered, cyclic sequence of vertices. Edge `i` runs from `points[i]` to
/// `points[i + 1 mod n]`. The clipping algorithms expect a simple,
/// counter-clockwise polygon; single entry/exit per clip is only guaranteed
/// when it is convex.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundingPolygon<T> {
    points: Vec<Point<T>>,
}

impl<T: Scalar> BoundingPolygon<T> {
    /// Validates `points` as a polygon.
    ///
    /// Vertices that repeat their predecessor or lie on the line through their two
    /// neighbors are dropped, so consecutive sides always have distinct supporting lines.
    pub fn new(points: Vec<Point<T>>) -> Result<Self> {
        let input_len = points.len();
        let points = drop_redundant_vertices(points);
        if points.len() < 3 {
            return Err(GeometryError::DegeneratePolygon { len: points.len() });
        }
        if points.len() < input_len {
            log::warn!(
                "dropped {} repeated or collinear bounding polygon vertices",
                input_len - points.len()
            );
        }
        let polygon = Self { points };
        if !polygon.area().is_positive() {
            log::warn!("bounding polygon is not counter-clockwise");
        } else if !polygon.is_convex() {
            log::warn!("bounding polygon is not convex, clipped cells may be wrong");
        }
        Ok(polygon)
    }

    /// Counter-clockwise axis-aligned rectangle.
    pub fn from_box(min: Point<T>, max: Point<T>) -> Result<Self> {
        Self::new(vec![
            Point::new(min.x.clone(), min.y.clone()),
            Point::new(max.x.clone(), min.y.clone()),
            Point::new(max.x, max.y.clone()),
            Point::new(min.x, max.y),
        ])
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    pub fn point(&self, i: usize) -> &Point<T> {
        &self.points[i % self.points.len()]
    }

    /// Endpoints of edge `i`.
    pub fn edge(&self, i: usize) -> (&Point<T>, &Point<T>) {
        (self.point(i), self.point(i + 1))
    }

    /// Supporting line of edge `i`; the interior of a counter-clockwise polygon is on its positive side.
    pub fn supporting_line(&self, i: usize) -> Line<T> {
        let (p, q) = self.edge(i);
        Line::through(p, q)
    }

    /// Signed shoelace area, positive for counter-clockwise polygons.
    pub fn area(&self) -> T {
        polygon_area(&self.points)
    }

    pub fn is_convex(&self) -> bool {
        let n = self.points.len();
        (0..n).all(|i| {
            let a = self.point(i);
            let b = self.point(i + 1);
            let c = self.point(i + 2);
            !b.sub(a).cross(&c.sub(b)).is_negative()
        })
    }

    /// Whether `p` is inside or on the boundary. Only meaningful for convex polygons.
    pub fn contains(&self, p: &Point<T>) -> bool {
        (0..self.points.len()).all(|i| !self.supporting_line(i).eval(p).is_negative())
    }
}

impl BoundingPolygon<f64> {
    /// Regular polygon with `sides` vertices on the circle of `radius` around `center`.
    pub fn regular(center: [f64; 2], radius: f64, sides: usize) -> Result<Self> {
        let angle_step = std::f64::consts::TAU / sides as f64;
        let points = (0..sides)
            .map(|i| {
                let angle = i as f64 * angle_step;
                Point::new(center[0] + radius * angle.cos(), center[1] + radius * angle.sin())
            })
            .collect();
        Self::new(points)
    }
}

/// Removes vertices where the boundary does not turn, until none are left.
fn drop_redundant_vertices<T: Scalar>(mut points: Vec<Point<T>>) -> Vec<Point<T>> {
    loop {
        let n = points.len();
        if n < 3 {
            return points;
        }
        let redundant = (0..n).find(|&i| {
            let prev = &points[(i + n - 1) % n];
            let cur = &points[i];
            let next = &points[(i + 1) % n];
            cur.sub(prev).cross(&next.sub(cur)).is_zero()
        });
        match redundant {
            Some(i) => {
                points.remove(i);
            }
            None => return points,
        }
    }
}

/// Signed shoelace area of a closed vertex sequence.
pub fn polygon_area<T: Scalar>(points: &[Point<T>]) -> T {
    let n = points.len();
    if n < 3 {
        return T::zero();
    }
    let two = T::one() + T::one();
    let twice = (0..n).fold(T::zero(), |acc, i| acc + points[i].cross(&points[(i + 1) % n]));
    twice / two
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{Rational, rational};

    fn unit_square() -> BoundingPolygon<Rational> {
        BoundingPolygon::from_box(
            Point::new(rational(0, 1), rational(0, 1)),
            Point::new(rational(1, 1), rational(1, 1)),
        )
        .unwrap()
    }

    #[test]
    fn test_box_polygon() {
        let square = unit_square();
        assert_eq!(square.len(), 4);
        assert_eq!(square.area(), rational(1, 1));
        assert!(square.is_convex());
        let (a, b) = square.edge(3);
        assert_eq!(a, &Point::new(rational(0, 1), rational(1, 1)));
        assert_eq!(b, &Point::new(rational(0, 1), rational(0, 1)));
    }

    #[test]
    fn test_contains() {
        let square = unit_square();
        assert!(square.contains(&Point::new(rational(1, 2), rational(1, 3))));
        assert!(square.contains(&Point::new(rational(1, 1), rational(1, 2))));
        assert!(!square.contains(&Point::new(rational(3, 2), rational(1, 2))));
    }

    #[test]
    fn test_degenerate_polygon() {
        let two = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        assert_eq!(
            BoundingPolygon::new(two),
            Err(GeometryError::DegeneratePolygon { len: 2 })
        );
    }

    #[test]
    fn test_collinear_vertices_are_dropped() {
        let p = |x, y| Point::new(rational(x, 1), rational(y, 1));
        let polygon = BoundingPolygon::new(vec![p(0, 0), p(1, 0), p(2, 0), p(2, 2), p(0, 2)]).unwrap();
        assert_eq!(polygon.points(), &[p(0, 0), p(2, 0), p(2, 2), p(0, 2)]);
        assert_eq!(polygon.area(), rational(4, 1));
        assert!(polygon.is_convex());

        // A vertex in the middle of a side and a repeated last vertex.
        let polygon = BoundingPolygon::new(vec![p(0, 1), p(0, 0), p(2, 0), p(2, 2), p(0, 2), p(0, 2)]).unwrap();
        assert_eq!(polygon.points(), &[p(0, 0), p(2, 0), p(2, 2), p(0, 2)]);
    }

    #[test]
    fn test_flat_polygon_is_degenerate() {
        let flat = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)];
        assert_eq!(
            BoundingPolygon::new(flat),
            Err(GeometryError::DegeneratePolygon { len: 2 })
        );
    }

    #[test]
    fn test_regular_polygon() {
        let hexagon = BoundingPolygon::regular([0.0, 0.0], 1.0, 6).unwrap();
        let expected = 1.5 * 3.0f64.sqrt();
        assert!((hexagon.area() - expected).abs() < 1e-12);
        assert!(hexagon.is_convex());
    }
}
