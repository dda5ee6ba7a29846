use crate::error::Result;
use crate::kernel::{Line, OrientedSide, Point, Scalar, segment_line_intersection};

/// A point counts as inside when it is on the negative side of `line` or on the line itself.
pub fn inside<T: Scalar>(line: &Line<T>, p: &Point<T>) -> bool {
    line.oriented_side(p) != OrientedSide::Positive
}

/// Intersects the polygon `polygon` with the closed negative halfplane of `line`.
///
/// One Sutherland–Hodgman pass: every edge `(s, e)` is visited with `s` starting
/// at the last vertex. A vertex on the line counts as inside, so an edge lying on
/// the line is kept as is. The result is written to `result`, which is cleared first.
pub fn clip_polygon_halfplane<T: Scalar>(
    polygon: &[Point<T>],
    line: &Line<T>,
    result: &mut Vec<Point<T>>,
) -> Result<()> {
    result.clear();
    let Some(last) = polygon.last() else {
        return Ok(());
    };

    let mut s = last;
    let mut s_inside = inside(line, s);
    for e in polygon {
        let e_inside = inside(line, e);
        if e_inside {
            if !s_inside {
                result.push(segment_line_intersection(s, e, line)?);
            }
            result.push(e.clone());
        } else if s_inside {
            result.push(segment_line_intersection(s, e, line)?);
        }
        s = e;
        s_inside = e_inside;
    }
    Ok(())
}

/// Convenience wrapper around [`clip_polygon_halfplane`] returning a new vector.
pub fn clip_polygon<T: Scalar>(polygon: &[Point<T>], line: &Line<T>) -> Result<Vec<Point<T>>> {
    let mut result = Vec::with_capacity(polygon.len() + 1);
    clip_polygon_halfplane(polygon, line, &mut result)?;
    Ok(result)
}
