//! rectkit: anchor-aware 2D rectangle geometry.
//!
//! A small library of deterministic, pure operations over immutable value
//! types: [`Point`], [`Size`], [`Rect`] and [`Angle`]. The centerpiece is
//! [`Rect::resize`], which resizes a rectangle while holding one of nine
//! canonical anchor points (center, four edges, four corners) fixed.
//!
//! This module is organized into submodules:
//! - `types`: Point, Size and Angle value types with their operations
//! - `anchor`: the nine-anchor enumerations and per-axis resize policies
//! - `rect`: Rect construction, resize, field mutation and the outside test
//! - `log`: feature-gated debug macros (unused by the geometry itself)
//!
//! Every function is a synchronous computation over `Copy` inputs with no
//! shared state, so calls are safe from any number of threads.
//!
//! ```
//! use rectkit::{Point, Rect, ResizeAnchor, Size};
//!
//! let r = Rect::new(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
//! let grown = r.resize(Size::new(20.0, 20.0), ResizeAnchor::Center);
//! assert_eq!(grown.origin, Point::new(-5.0, -5.0));
//! assert_eq!(grown.center(), r.center());
//! ```

pub mod anchor;
pub mod log;
pub mod rect;
pub mod types;

pub use anchor::{AlignmentAnchor, RectChangeFlag, ResizeAnchor};
pub use rect::Rect;
pub use types::{Angle, NumericError, Point, Size};
