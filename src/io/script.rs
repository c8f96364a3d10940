//! Activation events in text form, as replayed by the command line

use std::fmt;
use std::str::FromStr;

use crate::math::point::Point;
use crate::spatial::coordinate::GridCoordinate;

/// One activation event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activation {
    /// Activation outside every tile
    Outside,
    /// Activation of the tile at a grid coordinate
    Coordinate(GridCoordinate),
    /// Activation at a screen point, hit-tested against the tiles
    Point(Point),
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outside => f.write_str("none"),
            Self::Coordinate(coordinate) => write!(f, "{coordinate}"),
            Self::Point(point) => write!(f, "@{},{}", point.x, point.y),
        }
    }
}

impl FromStr for Activation {
    type Err = String;

    /// Parses `none`, `ROW,COLUMN` or `@X,Y`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("none") || s.eq_ignore_ascii_case("outside") {
            return Ok(Self::Outside);
        }
        if let Some(point) = s.strip_prefix('@') {
            return parse_point(point).map(Self::Point);
        }
        s.parse::<GridCoordinate>()
            .map(Self::Coordinate)
            .map_err(|e| e.to_string())
    }
}

/// Parse `X,Y` into a point
///
/// # Errors
///
/// Returns a message if the text is not two comma-separated finite numbers.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let error = || format!("expected 'x,y', found '{s}'");
    let (x, y) = s.split_once(',').ok_or_else(error)?;
    let x: f64 = x.trim().parse().ok().ok_or_else(error)?;
    let y: f64 = y.trim().parse().ok().ok_or_else(error)?;

    let point = Point::new(x, y);
    if point.is_finite() {
        Ok(point)
    } else {
        Err(error())
    }
}

/// Parse `WIDTHxHEIGHT` into a viewport size
///
/// # Errors
///
/// Returns a message if the text is not two positive finite numbers separated by `x`.
pub fn parse_viewport(s: &str) -> Result<(f64, f64), String> {
    let error = || format!("expected 'WIDTHxHEIGHT', found '{s}'");
    let (width, height) = s
        .split_once(['x', 'X'])
        .ok_or_else(error)?;
    let width: f64 = width.trim().parse().ok().ok_or_else(error)?;
    let height: f64 = height.trim().parse().ok().ok_or_else(error)?;

    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok((width, height))
    } else {
        Err(error())
    }
}
