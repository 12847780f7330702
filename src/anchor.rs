//! The nine canonical anchor points of a rectangle, and rectangle field
//! selectors.
//!
//! Anchor names follow the usual top-left-origin convention: `Top` is the
//! edge at the smaller `y`, `Left` the edge at the smaller `x`. Ordinal
//! values are stable, with `Center` at 0.

/// Which point (or edge) of a rectangle stays fixed during a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResizeAnchor {
    #[default]
    Center,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Which reference point of a rectangle an element aligns to.
///
/// Declared for alignment collaborators; no function in this crate
/// consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlignmentAnchor {
    #[default]
    Center,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Selects the single scalar field of a [`Rect`](crate::Rect) that a
/// field mutation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RectChangeFlag {
    X,
    Y,
    Width,
    Height,
}

/// Per-axis resize policy: which coordinate of the axis span is held fixed.
///
/// `Min` keeps the origin-side edge, `Max` keeps the far edge, `Center`
/// keeps the span's midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AxisFix {
    Min,
    Center,
    Max,
}

static ALL_RESIZE_ANCHORS: &[ResizeAnchor] = &[
    ResizeAnchor::Center,
    ResizeAnchor::Top,
    ResizeAnchor::Bottom,
    ResizeAnchor::Left,
    ResizeAnchor::Right,
    ResizeAnchor::TopLeft,
    ResizeAnchor::TopRight,
    ResizeAnchor::BottomLeft,
    ResizeAnchor::BottomRight,
];

impl ResizeAnchor {
    /// Return all anchors in ordinal order, suitable for iterating.
    pub fn all() -> &'static [ResizeAnchor] {
        ALL_RESIZE_ANCHORS
    }

    /// The anchor opposite this one; `TopRight` to `BottomLeft`, e.g.
    ///
    /// Useful when dragging a resize handle: you anchor the point opposite
    /// the handle being dragged.
    pub fn opposite(self) -> ResizeAnchor {
        match self {
            ResizeAnchor::Center => ResizeAnchor::Center,
            ResizeAnchor::Top => ResizeAnchor::Bottom,
            ResizeAnchor::Bottom => ResizeAnchor::Top,
            ResizeAnchor::Left => ResizeAnchor::Right,
            ResizeAnchor::Right => ResizeAnchor::Left,
            ResizeAnchor::TopLeft => ResizeAnchor::BottomRight,
            ResizeAnchor::TopRight => ResizeAnchor::BottomLeft,
            ResizeAnchor::BottomLeft => ResizeAnchor::TopRight,
            ResizeAnchor::BottomRight => ResizeAnchor::TopLeft,
        }
    }

    /// The `(x, y)` axis policies for this anchor.
    ///
    /// Edge anchors fix their perpendicular axis and recenter the other;
    /// corner anchors fix both axes; `Center` recenters both. This table is
    /// the whole resize algorithm; `Rect::resize` just resolves each axis.
    pub(crate) fn axis_policy(self) -> (AxisFix, AxisFix) {
        match self {
            ResizeAnchor::Center => (AxisFix::Center, AxisFix::Center),
            ResizeAnchor::Top => (AxisFix::Center, AxisFix::Min),
            ResizeAnchor::Bottom => (AxisFix::Center, AxisFix::Max),
            ResizeAnchor::Left => (AxisFix::Min, AxisFix::Center),
            ResizeAnchor::Right => (AxisFix::Max, AxisFix::Center),
            ResizeAnchor::TopLeft => (AxisFix::Min, AxisFix::Min),
            ResizeAnchor::TopRight => (AxisFix::Max, AxisFix::Min),
            ResizeAnchor::BottomLeft => (AxisFix::Min, AxisFix::Max),
            ResizeAnchor::BottomRight => (AxisFix::Max, AxisFix::Max),
        }
    }
}

static ALL_ALIGNMENT_ANCHORS: &[AlignmentAnchor] = &[
    AlignmentAnchor::Center,
    AlignmentAnchor::Top,
    AlignmentAnchor::Bottom,
    AlignmentAnchor::Left,
    AlignmentAnchor::Right,
    AlignmentAnchor::TopLeft,
    AlignmentAnchor::TopRight,
    AlignmentAnchor::BottomLeft,
    AlignmentAnchor::BottomRight,
];

impl AlignmentAnchor {
    /// Return all anchors in ordinal order, suitable for iterating.
    pub fn all() -> &'static [AlignmentAnchor] {
        ALL_ALIGNMENT_ANCHORS
    }
}
