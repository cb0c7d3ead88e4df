// Copyright 2025 the Flow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small geometry helpers on top of Kurbo.
//!
//! Kurbo already provides point/vector arithmetic (`Point + Vec2`, `Point - Point`)
//! and [`Rect::center`]. The helpers here pin down the exact containment and
//! intersection semantics the hit tester and the box-select gesture rely on.
//!
//! Float inputs are assumed to be finite (no NaNs); degenerate rects are the
//! caller's concern.

use kurbo::{Point, Rect, Vec2};

/// Rect spanning two arbitrary corner points, normalized so `x0 <= x1` and `y0 <= y1`.
///
/// ```
/// use flow_patch::geometry::bounding_rect;
/// use kurbo::{Point, Rect};
///
/// let r = bounding_rect(Point::new(10.0, 40.0), Point::new(0.0, 5.0));
/// assert_eq!(r, Rect::new(0.0, 5.0, 10.0, 40.0));
/// ```
pub fn bounding_rect(a: Point, b: Point) -> Rect {
    Rect::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
}

/// Whether `p` lies inside `rect`.
///
/// Half-open: the min edges are inside, the max edges are not. Adjacent port rects
/// therefore never both claim a point on their shared edge.
pub fn rect_contains(rect: Rect, p: Point) -> bool {
    rect.x0 <= p.x && p.x < rect.x1 && rect.y0 <= p.y && p.y < rect.y1
}

/// Whether two rects share any area or edge.
pub fn rects_intersect(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Translate a point by an offset.
#[inline]
pub fn translate(p: Point, offset: Vec2) -> Point {
    p + offset
}

/// Offset that moves `from` onto `to`.
#[inline]
pub fn delta(from: Point, to: Point) -> Vec2 {
    to - from
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}
