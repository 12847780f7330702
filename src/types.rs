//! Core value types: points, sizes and angles.
//!
//! Everything here is a plain `Copy` value over `f64`. No operation mutates
//! its receiver; "mutating" helpers return a new value. Point arithmetic
//! routes through [`glam::DVec2`].

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::{DVec2, dvec2};
use thiserror::Error;

/// Error type for invalid numeric values
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Value is NaN
    #[error("value is NaN")]
    NaN,
    /// Value is infinite
    #[error("value is infinite")]
    Infinite,
    /// Value is negative when non-negative required
    #[error("value is negative")]
    Negative,
}

/// Validate a single scalar (rejects NaN/infinite).
#[inline]
fn checked(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// A location in the 2D plane.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a Point (const-friendly, unchecked).
    /// Use `try_new` for user-provided values.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// Create a Point with validation (rejects NaN/infinite coordinates)
    #[inline]
    pub fn try_new(x: f64, y: f64) -> Result<Point, NumericError> {
        Ok(Point {
            x: checked(x)?,
            y: checked(y)?,
        })
    }

    /// Arithmetic mean of the two points, coordinate-wise.
    pub fn midpoint(self, other: Point) -> Point {
        DVec2::from(self).midpoint(other.into()).into()
    }

    /// Euclidean distance to `other`. Always >= 0; 0 iff the points are equal.
    pub fn distance(self, other: Point) -> f64 {
        DVec2::from(self).distance(other.into())
    }

    /// Linear interpolation along the segment from `self` to `end`:
    /// `self + ratio * (end - self)`, coordinate-wise.
    ///
    /// `ratio` is NOT clamped: 0 gives `self`, 1 gives `end`, and values
    /// outside `[0, 1]` extrapolate past the segment.
    pub fn lerp(self, end: Point, ratio: f64) -> Point {
        DVec2::from(self).lerp(end.into(), ratio).into()
    }

    /// Check if both coordinates are finite (not NaN or infinite)
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Point {
        Point { x: v.x, y: v.y }
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> DVec2 {
        dvec2(p.x, p.y)
    }
}

/// Translate a point by a displacement vector.
impl Add<DVec2> for Point {
    type Output = Point;
    fn add(self, rhs: DVec2) -> Point {
        (DVec2::from(self) + rhs).into()
    }
}

/// Translate a point by the opposite of a displacement vector.
impl Sub<DVec2> for Point {
    type Output = Point;
    fn sub(self, rhs: DVec2) -> Point {
        (DVec2::from(self) - rhs).into()
    }
}

/// The displacement from `rhs` to `self`; Point - Point = delta.
impl Sub for Point {
    type Output = DVec2;
    fn sub(self, rhs: Point) -> DVec2 {
        DVec2::from(self) - DVec2::from(rhs)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A 2D extent. Non-negative in normal use, but the library does not
/// enforce non-negativity; callers own the meaning of negative extents.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a Size (const-friendly, unchecked).
    /// Use `try_new` or `try_non_negative` for user-provided values.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Size {
        Size { width, height }
    }

    /// Create a Size with validation (rejects NaN/infinite dimensions)
    #[inline]
    pub fn try_new(width: f64, height: f64) -> Result<Size, NumericError> {
        Ok(Size {
            width: checked(width)?,
            height: checked(height)?,
        })
    }

    /// Create a non-negative Size with validation
    #[inline]
    pub fn try_non_negative(width: f64, height: f64) -> Result<Size, NumericError> {
        let size = Size::try_new(width, height)?;
        if size.width < 0.0 || size.height < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(size)
        }
    }

    /// The extent spanned by two corner points. Always non-negative,
    /// regardless of point ordering.
    pub fn from_points(a: Point, b: Point) -> Size {
        Size {
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    /// Scale both dimensions by `scale`. A negative scale yields a
    /// negative-dimensioned size, uncorrected.
    pub fn scaled(self, scale: f64) -> Size {
        Size {
            width: self.width * scale,
            height: self.height * scale,
        }
    }

    /// Check if both dimensions are finite (not NaN or infinite)
    #[inline]
    pub fn is_finite(self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

impl Mul<f64> for Size {
    type Output = Size;
    fn mul(self, rhs: f64) -> Size {
        self.scaled(rhs)
    }
}

impl Div<f64> for Size {
    type Output = Size;
    fn div(self, rhs: f64) -> Size {
        Size {
            width: self.width / rhs,
            height: self.height / rhs,
        }
    }
}

impl Neg for Size {
    type Output = Size;
    fn neg(self) -> Size {
        Size {
            width: -self.width,
            height: -self.height,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Angle in radians. No wraparound normalization is performed; values
/// may exceed ±2π.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(pub f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    #[inline]
    pub const fn from_radians(radians: f64) -> Angle {
        Angle(radians)
    }

    /// The direction of the segment from `start` to `end`, in radians,
    /// in the range `(-π, π]`.
    ///
    /// When `start == end` the direction is degenerate; this follows the
    /// `atan2(0, 0) == 0` convention and returns `Angle::ZERO`.
    pub fn from_points(start: Point, end: Point) -> Angle {
        Angle((DVec2::from(end) - DVec2::from(start)).to_angle())
    }

    /// The raw radian value.
    #[inline]
    pub fn radians(self) -> f64 {
        self.0
    }

    /// Convert to degrees. Pure unit conversion, no normalization
    /// to `[0, 360)`.
    #[inline]
    pub fn to_degrees(self) -> f64 {
        self.0.to_degrees()
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}rad", self.0)
    }
}
