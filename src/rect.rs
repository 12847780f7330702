//! Axis-aligned rectangles and the anchor-relative resize algorithm.

use std::fmt;

use crate::anchor::{AxisFix, RectChangeFlag, ResizeAnchor};
use crate::types::{Point, Size};

/// An axis-aligned rectangle: an origin corner plus an extent.
///
/// `origin` is the minimum-coordinate corner (top-left under the usual
/// y-down convention).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    #[inline]
    pub const fn new(origin: Point, size: Size) -> Rect {
        Rect { origin, size }
    }

    /// Normalize two arbitrary corner points into a canonical rectangle.
    ///
    /// The origin is the coordinate-wise minimum and the size the absolute
    /// span, so the result has non-negative width and height regardless of
    /// the order the corners are given in.
    pub fn from_points(a: Point, b: Point) -> Rect {
        Rect {
            origin: Point::new(a.x.min(b.x), a.y.min(b.y)),
            size: Size::from_points(a, b),
        }
    }

    /// The rectangle's center point.
    pub fn center(self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    #[inline]
    pub fn min_x(self) -> f64 {
        self.origin.x
    }

    #[inline]
    pub fn min_y(self) -> f64 {
        self.origin.y
    }

    #[inline]
    pub fn max_x(self) -> f64 {
        self.origin.x + self.size.width
    }

    #[inline]
    pub fn max_y(self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Produce a rectangle of `new_size` positioned so that the point or
    /// edge named by `anchor` stays where it was in `self`.
    ///
    /// Edge anchors hold their perpendicular coordinate fixed and recenter
    /// the rectangle along the orthogonal axis; corner anchors hold the
    /// corner fixed on both axes; `Center` recenters both axes.
    ///
    /// Resizing to the current size is the identity for every anchor.
    pub fn resize(self, new_size: Size, anchor: ResizeAnchor) -> Rect {
        let (fx, fy) = anchor.axis_policy();
        Rect {
            origin: Point::new(
                resolve_axis(self.origin.x, self.size.width, new_size.width, fx),
                resolve_axis(self.origin.y, self.size.height, new_size.height, fy),
            ),
            size: new_size,
        }
    }

    /// Scale the rectangle about its center, which does not move.
    pub fn scaled(self, scale: f64) -> Rect {
        self.resize(self.size.scaled(scale), ResizeAnchor::Center)
    }

    /// A copy of the rectangle with exactly one scalar field replaced.
    pub fn with_field(self, flag: RectChangeFlag, value: f64) -> Rect {
        let mut rect = self;
        match flag {
            RectChangeFlag::X => rect.origin.x = value,
            RectChangeFlag::Y => rect.origin.y = value,
            RectChangeFlag::Width => rect.size.width = value,
            RectChangeFlag::Height => rect.size.height = value,
        }
        rect
    }

    /// Whether `self` lies entirely outside `other`, sharing no area.
    ///
    /// Comparisons are strict, so rectangles that merely touch along an
    /// edge or at a corner (zero-area overlap) are NOT outside each other.
    /// The relation is symmetric.
    pub fn is_outside(self, other: Rect) -> bool {
        self.max_x() < other.min_x()
            || self.min_x() > other.max_x()
            || self.max_y() < other.min_y()
            || self.min_y() > other.max_y()
    }
}

/// Resolve one axis of a resize: given the old span (`min`, `old_len`) and
/// the new length, return the new minimum coordinate.
///
/// The delta is computed as `old_len - new_len` before anything is added to
/// `min`, so an unchanged length yields `min` exactly, not a rounded
/// round-trip through `min + old_len`.
fn resolve_axis(min: f64, old_len: f64, new_len: f64, fix: AxisFix) -> f64 {
    match fix {
        AxisFix::Min => min,
        AxisFix::Center => min + (old_len - new_len) / 2.0,
        AxisFix::Max => min + (old_len - new_len),
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.origin, self.size)
    }
}
