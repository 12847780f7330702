//! Property-based checks for the geometric laws the crate promises.

use proptest::prelude::*;
use rectkit::{Point, Rect, ResizeAnchor, Size};

const COORD: std::ops::RangeInclusive<f64> = -1.0e6..=1.0e6;
const EXTENT: std::ops::RangeInclusive<f64> = 0.0..=1.0e6;

fn approx_eq(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= 1.0e-6 * scale
}

proptest! {
    /// Distance is symmetric and zero on coincident points.
    #[test]
    fn distance_symmetric(ax in COORD, ay in COORD, bx in COORD, by in COORD) {
        let a = Point::new(ax, ay);
        let b = Point::new(bx, by);
        prop_assert_eq!(a.distance(b), b.distance(a));
        prop_assert!(a.distance(b) >= 0.0);
        prop_assert_eq!(a.distance(a), 0.0);
    }

    /// The midpoint is the half-way interpolation, up to rounding.
    #[test]
    fn midpoint_is_half_lerp(ax in COORD, ay in COORD, bx in COORD, by in COORD) {
        let a = Point::new(ax, ay);
        let b = Point::new(bx, by);
        let mid = a.midpoint(b);
        let half = a.lerp(b, 0.5);
        prop_assert!(approx_eq(mid.x, half.x), "{} vs {}", mid, half);
        prop_assert!(approx_eq(mid.y, half.y), "{} vs {}", mid, half);
    }

    /// Interpolation hits both endpoints, up to rounding.
    #[test]
    fn lerp_endpoints(ax in COORD, ay in COORD, bx in COORD, by in COORD) {
        let a = Point::new(ax, ay);
        let b = Point::new(bx, by);
        prop_assert_eq!(a.lerp(b, 0.0), a);
        let at_one = a.lerp(b, 1.0);
        prop_assert!(approx_eq(at_one.x, b.x), "{} vs {}", at_one, b);
        prop_assert!(approx_eq(at_one.y, b.y), "{} vs {}", at_one, b);
    }

    /// Rect construction from two corners ignores their order and always
    /// yields non-negative extents.
    #[test]
    fn from_points_order_independent(ax in COORD, ay in COORD, bx in COORD, by in COORD) {
        let a = Point::new(ax, ay);
        let b = Point::new(bx, by);
        let r = Rect::from_points(a, b);
        prop_assert_eq!(r, Rect::from_points(b, a));
        prop_assert!(r.size.width >= 0.0);
        prop_assert!(r.size.height >= 0.0);
    }

    /// Resizing to the current size moves nothing, whatever the anchor.
    #[test]
    fn resize_identity_for_every_anchor(
        x in COORD, y in COORD, w in EXTENT, h in EXTENT,
    ) {
        let r = Rect::new(Point::new(x, y), Size::new(w, h));
        for &anchor in ResizeAnchor::all() {
            prop_assert_eq!(r.resize(r.size, anchor), r);
        }
    }

    /// Resizing holds the anchored coordinates exactly.
    #[test]
    fn resize_pins_the_anchored_edges(
        x in COORD, y in COORD, w in EXTENT, h in EXTENT,
        nw in EXTENT, nh in EXTENT,
    ) {
        let r = Rect::new(Point::new(x, y), Size::new(w, h));
        let new_size = Size::new(nw, nh);

        let tl = r.resize(new_size, ResizeAnchor::TopLeft);
        prop_assert_eq!(tl.origin, r.origin);

        let br = r.resize(new_size, ResizeAnchor::BottomRight);
        prop_assert!(approx_eq(br.max_x(), r.max_x()));
        prop_assert!(approx_eq(br.max_y(), r.max_y()));

        let top = r.resize(new_size, ResizeAnchor::Top);
        prop_assert_eq!(top.min_y(), r.min_y());
        prop_assert!(approx_eq(top.center().x, r.center().x));
    }

    /// The outside relation is symmetric and excludes any overlap.
    #[test]
    fn is_outside_symmetric(
        ax in COORD, ay in COORD, aw in EXTENT, ah in EXTENT,
        bx in COORD, by in COORD, bw in EXTENT, bh in EXTENT,
    ) {
        let a = Rect::new(Point::new(ax, ay), Size::new(aw, ah));
        let b = Rect::new(Point::new(bx, by), Size::new(bw, bh));
        prop_assert_eq!(a.is_outside(b), b.is_outside(a));
        // a rect is never outside itself
        prop_assert!(!a.is_outside(a));
    }

    /// Angles from points always land in (-π, π].
    #[test]
    fn angle_stays_in_principal_range(
        ax in COORD, ay in COORD, bx in COORD, by in COORD,
    ) {
        let angle = rectkit::Angle::from_points(Point::new(ax, ay), Point::new(bx, by));
        prop_assert!(angle.radians() > -std::f64::consts::PI);
        prop_assert!(angle.radians() <= std::f64::consts::PI);
    }
}
