//! Screen-space points and vectors
//!
//! Positions are plain `f64` pairs in the renderer's coordinate system, where
//! x grows to the right and y grows downwards.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D point (or vector) in screen space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal component
    pub x: f64,
    /// Vertical component (grows downwards)
    pub y: f64,
}

impl Point {
    /// The origin `(0, 0)`
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a point from its components
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self` in direction `degrees`
    ///
    /// Angles are measured clockwise on screen because y grows downwards.
    pub fn polar_offset(self, radius: f64, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::new(radius.mul_add(cos, self.x), radius.mul_add(sin, self.y))
    }

    /// Dot product, treating both points as vectors
    pub fn dot(self, other: Self) -> f64 {
        self.x.mul_add(other.x, self.y * other.y)
    }

    /// Z component of the 3D cross product
    pub fn cross(self, other: Self) -> f64 {
        self.x.mul_add(other.y, -(self.y * other.x))
    }

    /// Euclidean length of the vector
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Distance between two points
    pub fn distance(self, other: Self) -> f64 {
        (other - self).length()
    }

    /// Both components are finite
    pub const fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Straight segment between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start of the segment
    pub start: Point,
    /// End of the segment
    pub end: Point,
}

impl Segment {
    /// Create a segment from `start` to `end`
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Direction vector from start to end (not normalized)
    pub fn direction(&self) -> Point {
        self.end - self.start
    }

    /// Length of the segment
    pub fn length(&self) -> f64 {
        self.direction().length()
    }
}
