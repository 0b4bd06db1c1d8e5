//! Geometry on a wraparound (toroidal) surface.
//!
//! Both axes wrap independently: leaving the right edge re-enters on the left,
//! leaving the bottom re-enters at the top. Everything here is pure and
//! stateless.
//!
//! # Example
//!
//! ```
//! use linkfield::torus::{wrapped_distance, Surface};
//! use linkfield::DVec2;
//!
//! let surface = Surface::new(100.0, 100.0).unwrap();
//! let d = wrapped_distance(DVec2::new(99.0, 50.0), DVec2::new(1.0, 50.0), surface);
//! assert_eq!(d, 2.0);
//! ```

use crate::error::SurfaceError;
use glam::DVec2;

/// Size of the wraparound domain.
///
/// Coordinates live in `[0, width) x [0, height)`. Both sides are always
/// strictly positive and finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    width: f64,
    height: f64,
}

impl Surface {
    /// Create a surface, rejecting non-finite or non-positive sizes.
    pub fn new(width: f64, height: f64) -> Result<Self, SurfaceError> {
        if !width.is_finite() || !height.is_finite() {
            return Err(SurfaceError::NonFinite { width, height });
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(SurfaceError::NonPositive { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Width and height as a vector.
    #[inline]
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Whether `point` lies inside the half-open domain.
    pub fn contains(&self, point: DVec2) -> bool {
        (0.0..self.width).contains(&point.x) && (0.0..self.height).contains(&point.y)
    }

    /// Wrap an arbitrary point back into the domain.
    pub fn wrap(&self, point: DVec2) -> DVec2 {
        DVec2::new(
            wrap_coordinate(point.x, self.width),
            wrap_coordinate(point.y, self.height),
        )
    }
}

/// Mathematical modulo of `value` into `[0, span)`.
///
/// Works for displacements larger than one span in either direction.
#[inline]
pub fn wrap_coordinate(value: f64, span: f64) -> f64 {
    let wrapped = value.rem_euclid(span);
    // rem_euclid rounds tiny negative inputs up to exactly `span`
    if wrapped >= span {
        0.0
    } else {
        wrapped
    }
}

/// Shorter of the direct and wraparound distance along one axis.
///
/// For `a, b` in `[0, span)` the result is in `[0, span / 2]`.
#[inline]
pub fn wrapped_axis_distance(a: f64, b: f64, span: f64) -> f64 {
    let direct = (a - b).abs();
    direct.min(span - direct)
}

/// Euclidean distance on the torus, wrapping each axis independently.
///
/// This is the metric used for nearest-neighbor ranking.
#[inline]
pub fn wrapped_distance(p: DVec2, q: DVec2, surface: Surface) -> f64 {
    DVec2::new(
        wrapped_axis_distance(p.x, q.x, surface.width),
        wrapped_axis_distance(p.y, q.y, surface.height),
    )
    .length()
}

/// Whether the raw segment between `a` and `b` is longer than half the span.
///
/// Compares raw coordinates, not the wrapped distance. When true, a line drawn
/// directly between the two points would cut across the surface instead of
/// taking the shortcut over the edge, so it must be split.
#[inline]
pub fn spans_axis(a: f64, b: f64, span: f64) -> bool {
    (a - b).abs() > span / 2.0
}

/// A straight line between two points in surface coordinates.
///
/// Endpoints of a split segment may lie outside the domain; the renderer clips.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: DVec2,
    pub end: DVec2,
}

impl Segment {
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }
}

/// Drawable pieces of one link between two wrapped points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WrappedSegment {
    /// Neither axis spans; the raw endpoints are drawn as-is.
    Direct(Segment),
    /// The link crosses an edge. The first piece is anchored at `p1` and leaves
    /// the domain, the second is anchored at `p2` and enters from the opposite
    /// edge.
    Split(Segment, Segment),
}

impl WrappedSegment {
    pub fn is_split(&self) -> bool {
        matches!(self, WrappedSegment::Split(..))
    }

    /// Iterate over the one or two pieces.
    pub fn segments(&self) -> impl Iterator<Item = Segment> {
        let (first, second) = match *self {
            WrappedSegment::Direct(segment) => (segment, None),
            WrappedSegment::Split(first, second) => (first, Some(second)),
        };
        std::iter::once(first).chain(second)
    }
}

/// Split the link between `p1` and `p2` into non-wrapping pieces.
///
/// On every spanning axis, `p2` is shifted by one span toward `p1`'s side to form
/// the piece anchored at `p1`, and `p1` is shifted the opposite way to form the
/// piece anchored at `p2`. Non-spanning axes are left untouched.
pub fn split_wrapped_segment(p1: DVec2, p2: DVec2, surface: Surface) -> WrappedSegment {
    let spans_width = spans_axis(p1.x, p2.x, surface.width);
    let spans_height = spans_axis(p1.y, p2.y, surface.height);

    if !spans_width && !spans_height {
        return WrappedSegment::Direct(Segment::new(p1, p2));
    }

    let overlap = DVec2::new(
        if spans_width { surface.width } else { 0.0 },
        if spans_height { surface.height } else { 0.0 },
    );
    // Shift toward whichever point has the smaller raw coordinate.
    let direction = DVec2::new(
        if p1.x < p2.x { -1.0 } else { 1.0 },
        if p1.y < p2.y { -1.0 } else { 1.0 },
    );
    let shift = overlap * direction;

    WrappedSegment::Split(Segment::new(p1, p2 + shift), Segment::new(p1 - shift, p2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(size: f64) -> Surface {
        Surface::new(size, size).unwrap()
    }

    #[test]
    fn test_surface_rejects_bad_sizes() {
        assert!(matches!(
            Surface::new(0.0, 10.0),
            Err(SurfaceError::NonPositive { .. })
        ));
        assert!(matches!(
            Surface::new(10.0, -1.0),
            Err(SurfaceError::NonPositive { .. })
        ));
        assert!(matches!(
            Surface::new(f64::NAN, 10.0),
            Err(SurfaceError::NonFinite { .. })
        ));
        assert!(matches!(
            Surface::new(10.0, f64::INFINITY),
            Err(SurfaceError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_wrap_coordinate() {
        assert_eq!(wrap_coordinate(5.0, 10.0), 5.0);
        assert_eq!(wrap_coordinate(12.0, 10.0), 2.0);
        assert_eq!(wrap_coordinate(-3.0, 10.0), 7.0);
        // More than one span of displacement
        assert_eq!(wrap_coordinate(-23.0, 10.0), 7.0);
        assert_eq!(wrap_coordinate(35.0, 10.0), 5.0);
    }

    #[test]
    fn test_wrap_coordinate_never_returns_span() {
        // 100 - 1e-15 rounds to 100.0 in f64
        let wrapped = wrap_coordinate(-1e-15, 100.0);
        assert!(wrapped < 100.0);
        assert!(wrapped >= 0.0);
    }

    #[test]
    fn test_surface_wrap() {
        let surface = Surface::new(100.0, 50.0).unwrap();
        assert_eq!(surface.wrap(DVec2::new(30.0, 20.0)), DVec2::new(30.0, 20.0));
        assert_eq!(surface.wrap(DVec2::new(-2.0, 51.0)), DVec2::new(98.0, 1.0));
        assert_eq!(surface.wrap(DVec2::new(250.0, -120.0)), DVec2::new(50.0, 30.0));
        assert!(surface.contains(surface.wrap(DVec2::new(-1e-15, -1e-15))));
    }

    #[test]
    fn test_wrapped_axis_distance() {
        assert_eq!(wrapped_axis_distance(10.0, 20.0, 100.0), 10.0);
        assert_eq!(wrapped_axis_distance(99.0, 1.0, 100.0), 2.0);
        assert_eq!(wrapped_axis_distance(1.0, 99.0, 100.0), 2.0);
        assert_eq!(wrapped_axis_distance(0.0, 50.0, 100.0), 50.0);
    }

    #[test]
    fn test_wrapped_axis_distance_bound() {
        let span = 37.5;
        let mut a = 0.0;
        while a < span {
            let mut b = 0.0;
            while b < span {
                assert!(wrapped_axis_distance(a, b, span) <= span / 2.0);
                b += 1.3;
            }
            a += 0.7;
        }
    }

    #[test]
    fn test_wrapped_distance_uses_both_axes() {
        let surface = square(100.0);
        let d = wrapped_distance(DVec2::new(98.0, 1.0), DVec2::new(1.0, 97.0), surface);
        // dx = 3, dy = 4 across both edges
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_wrapped_distance_symmetric() {
        let surface = Surface::new(120.0, 80.0).unwrap();
        let points = [
            DVec2::new(0.0, 0.0),
            DVec2::new(119.0, 79.5),
            DVec2::new(60.0, 40.0),
            DVec2::new(3.25, 70.0),
        ];
        for p in points {
            for q in points {
                assert_eq!(
                    wrapped_distance(p, q, surface),
                    wrapped_distance(q, p, surface)
                );
            }
        }
    }

    #[test]
    fn test_edge_scenario() {
        let surface = square(100.0);
        let p = DVec2::new(99.0, 50.0);
        let q = DVec2::new(1.0, 50.0);
        assert!(spans_axis(p.x, q.x, surface.width()));
        assert!(!spans_axis(p.y, q.y, surface.height()));
        assert_eq!(wrapped_axis_distance(p.x, q.x, surface.width()), 2.0);
        assert_eq!(wrapped_distance(p, q, surface), 2.0);
    }

    #[test]
    fn test_split_direct() {
        let surface = square(100.0);
        let p1 = DVec2::new(10.0, 10.0);
        let p2 = DVec2::new(30.0, 40.0);
        let split = split_wrapped_segment(p1, p2, surface);
        assert_eq!(split, WrappedSegment::Direct(Segment::new(p1, p2)));
        assert_eq!(split.segments().count(), 1);
    }

    #[test]
    fn test_split_across_width() {
        let surface = square(100.0);
        let p1 = DVec2::new(99.0, 50.0);
        let p2 = DVec2::new(1.0, 50.0);
        match split_wrapped_segment(p1, p2, surface) {
            WrappedSegment::Split(first, second) => {
                assert_eq!(first, Segment::new(p1, DVec2::new(101.0, 50.0)));
                assert_eq!(second, Segment::new(DVec2::new(-1.0, 50.0), p2));
            }
            other => panic!("expected split, got {:?}", other),
        }
    }

    #[test]
    fn test_split_left_point_first() {
        let surface = square(100.0);
        let p1 = DVec2::new(2.0, 50.0);
        let p2 = DVec2::new(97.0, 52.0);
        match split_wrapped_segment(p1, p2, surface) {
            WrappedSegment::Split(first, second) => {
                assert_eq!(first, Segment::new(p1, DVec2::new(-3.0, 52.0)));
                assert_eq!(second, Segment::new(DVec2::new(102.0, 50.0), p2));
            }
            other => panic!("expected split, got {:?}", other),
        }
    }

    #[test]
    fn test_split_across_both_axes() {
        let surface = Surface::new(200.0, 100.0).unwrap();
        let p1 = DVec2::new(195.0, 2.0);
        let p2 = DVec2::new(5.0, 96.0);
        match split_wrapped_segment(p1, p2, surface) {
            WrappedSegment::Split(first, second) => {
                assert_eq!(first.end, DVec2::new(205.0, -4.0));
                assert_eq!(second.start, DVec2::new(-5.0, 102.0));
            }
            other => panic!("expected split, got {:?}", other),
        }
    }
}
