use thiserror::Error;

/// Failures of the geometric constructions.
///
/// Every variant is a precondition or invariant violation: the computation is a
/// pure function of its inputs, so the same inputs always fail the same way.
/// An empty cell is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Two lines expected to meet are parallel or coincident.
    #[error("lines are parallel or coincident")]
    ParallelLines,

    /// A segment expected to cross a line does not.
    #[error("segment does not intersect the line")]
    NoIntersection,

    /// Three sites expected to span a triangle are collinear.
    #[error("sites are collinear, the power center is undefined")]
    CollinearSites,

    /// Two consecutive generalized vertices share no edge.
    #[error("adjacent generalized vertices at position {index} share no edge")]
    MissingCommonEdge { index: usize },

    /// A bounding polygon needs at least three vertices.
    #[error("bounding polygon needs at least 3 vertices, got {len}")]
    DegeneratePolygon { len: usize },

    /// A neighbor list refers to a vertex that does not exist.
    #[error("vertex {vertex} lists unknown neighbor {neighbor}")]
    InvalidNeighbor { vertex: usize, neighbor: usize },

    /// Parallel input arrays differ in length.
    #[error("expected {expected} entries, found {found}")]
    SizeMismatch { expected: usize, found: usize },

    /// Two sites share both position and weight, so their cells coincide.
    #[error("sites {first} and {second} have the same position and weight")]
    DuplicateSite { first: usize, second: usize },

    /// A flat coordinate array has an odd number of entries.
    #[error("expected an even number of coordinates, got {len}")]
    OddCoordinates { len: usize },
}

pub type Result<T> = std::result::Result<T, GeometryError>;
