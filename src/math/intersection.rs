//! Segment and point tests against convex polygons
//!
//! Tile outlines are always convex (hexagons and axis-aligned boxes), so a
//! segment can be clipped against the polygon one edge half-plane at a time
//! (Cyrus-Beck). Contact that never enters the interior, such as touching a
//! vertex or running along an edge, does not count as an intersection.

use crate::io::configuration::GEOMETRY_EPSILON;
use crate::math::point::{Point, Segment};

/// Twice the signed area of a polygon (positive for counter-clockwise in math axes)
pub fn doubled_signed_area(polygon: &[Point]) -> f64 {
    polygon
        .iter()
        .zip(polygon.iter().cycle().skip(1))
        .map(|(a, b)| a.cross(*b))
        .sum()
}

/// Parametric interval of `segment` that lies strictly inside `polygon`
///
/// Returns `Some((t_enter, t_exit))` with `0 <= t_enter < t_exit <= 1` when the
/// segment passes through the interior over a positive length, otherwise `None`.
/// Degenerate polygons (fewer than 3 points or zero area) are never intersected.
pub fn clip_segment(segment: &Segment, polygon: &[Point]) -> Option<(f64, f64)> {
    if polygon.len() < 3 {
        return None;
    }

    let area = doubled_signed_area(polygon);
    if area.abs() <= GEOMETRY_EPSILON {
        return None;
    }
    let winding = area.signum();

    let direction = segment.direction();
    let direction_length = segment.length();

    let mut t_enter = 0.0_f64;
    let mut t_exit = 1.0_f64;

    for (a, b) in polygon.iter().zip(polygon.iter().cycle().skip(1)) {
        let edge = *b - *a;
        let edge_length = edge.length();
        if edge_length <= GEOMETRY_EPSILON {
            continue;
        }

        let inward = Point::new(-edge.y, edge.x) * (winding / edge_length);
        let distance = inward.dot(segment.start - *a);
        let rate = inward.dot(direction);

        // Parallel to this edge: either always inside its half-plane or never
        if rate.abs() <= GEOMETRY_EPSILON * direction_length.max(1.0) {
            if distance <= GEOMETRY_EPSILON {
                return None;
            }
            continue;
        }

        let t = -distance / rate;
        if rate > 0.0 {
            t_enter = t_enter.max(t);
        } else {
            t_exit = t_exit.min(t);
        }

        if t_enter >= t_exit {
            return None;
        }
    }

    let t_enter = num_traits::clamp(t_enter, 0.0, 1.0);
    let t_exit = num_traits::clamp(t_exit, 0.0, 1.0);

    ((t_exit - t_enter) * direction_length > GEOMETRY_EPSILON).then_some((t_enter, t_exit))
}

/// Test whether a segment passes through the interior of a convex polygon
pub fn segment_crosses_polygon(segment: &Segment, polygon: &[Point]) -> bool {
    clip_segment(segment, polygon).is_some()
}

/// Test whether a point lies inside or on the boundary of a convex polygon
///
/// A degenerate polygon (all points coincident) contains only points within
/// `GEOMETRY_EPSILON` of that location.
pub fn polygon_contains(polygon: &[Point], point: Point) -> bool {
    let Some(first) = polygon.first() else {
        return false;
    };

    let area = doubled_signed_area(polygon);
    if area.abs() <= GEOMETRY_EPSILON {
        return polygon
            .iter()
            .all(|vertex| vertex.distance(*first) <= GEOMETRY_EPSILON)
            && point.distance(*first) <= GEOMETRY_EPSILON;
    }
    let winding = area.signum();

    polygon
        .iter()
        .zip(polygon.iter().cycle().skip(1))
        .all(|(a, b)| {
            let edge = *b - *a;
            let edge_length = edge.length();
            if edge_length <= GEOMETRY_EPSILON {
                return true;
            }
            let inward = Point::new(-edge.y, edge.x) * (winding / edge_length);
            inward.dot(point - *a) >= -GEOMETRY_EPSILON
        })
}
