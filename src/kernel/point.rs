use super::Scalar;

/// A point in the plane.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero())
    }

    pub fn add(&self, other: &Point<T>) -> Point<T> {
        Point::new(self.x.clone() + other.x.clone(), self.y.clone() + other.y.clone())
    }

    pub fn sub(&self, other: &Point<T>) -> Point<T> {
        Point::new(self.x.clone() - other.x.clone(), self.y.clone() - other.y.clone())
    }

    pub fn scale(&self, s: &T) -> Point<T> {
        Point::new(self.x.clone() * s.clone(), self.y.clone() * s.clone())
    }

    pub fn dot(&self, other: &Point<T>) -> T {
        self.x.clone() * other.x.clone() + self.y.clone() * other.y.clone()
    }

    /// z-component of the cross product of `self` and `other` seen as vectors.
    pub fn cross(&self, other: &Point<T>) -> T {
        self.x.clone() * other.y.clone() - self.y.clone() * other.x.clone()
    }

    pub fn squared_norm(&self) -> T {
        self.dot(self)
    }

    pub fn squared_distance(&self, other: &Point<T>) -> T {
        self.sub(other).squared_norm()
    }
}

impl Point<f64> {
    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<[f64; 2]> for Point<f64> {
    fn from(p: [f64; 2]) -> Self {
        Point::new(p[0], p[1])
    }
}

/// A site of a power diagram: a point carrying a weight.
///
/// The power of a location `x` with respect to the site is `|x - point|² - weight`.
/// Weight zero gives the ordinary Voronoi distance.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WeightedPoint<T> {
    pub point: Point<T>,
    pub weight: T,
}

impl<T: Scalar> WeightedPoint<T> {
    pub fn new(point: Point<T>, weight: T) -> Self {
        Self { point, weight }
    }

    pub fn unweighted(point: Point<T>) -> Self {
        Self::new(point, T::zero())
    }
}

impl<T: Scalar> From<Point<T>> for WeightedPoint<T> {
    fn from(point: Point<T>) -> Self {
        WeightedPoint::unweighted(point)
    }
}
