// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Annulus-wedge geometry.
//!
//! Curved stands are drawn as wedges: the region between two concentric radii, swept
//! clockwise from a start angle to an end angle. Ovals are circles stretched per axis
//! (`scale`), which is plenty for a seating diagram and keeps every wedge expressible as two
//! elliptical arcs and two straight edges.
//!
//! Angles are degrees measured clockwise from the positive x axis (0 is right, 90 is down),
//! matching the y-down scene coordinate system.

extern crate alloc;

use alloc::string::String;
use core::fmt::Write;

use kurbo::{Arc, BezPath, Point, SvgArc, Vec2};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Normalizes an angle into `[0, 360)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle % 360.0;
    let a = if a < 0.0 { a + 360.0 } else { a };
    // Tiny negative inputs round up to exactly 360.
    if a >= 360.0 { 0.0 } else { a }
}

/// Clockwise angular distance from `start` to `end`, in `[0, 360)`.
///
/// Wedges crossing the 0 seam (`350 -> 10`) get their real span (20), never a negative one.
/// A zero result marks a degenerate wedge; layouts never build those.
pub fn angular_span(start: f64, end: f64) -> f64 {
    normalize_angle(end - start)
}

/// Midpoint angle of a wedge, taking the 0 seam into account.
///
/// For `350 -> 10` this is `0`, not `180`.
pub fn wrap_aware_midpoint(start: f64, end: f64) -> f64 {
    if end >= start {
        (start + end) / 2.0
    } else {
        normalize_angle((start + end + 360.0) / 2.0)
    }
}

/// Returns `true` if `angle` lies on the clockwise sweep from `start` to `end` (inclusive).
pub fn angle_in_wedge(angle: f64, start: f64, end: f64) -> bool {
    angular_span(start, angle) <= angular_span(start, end)
}

/// Polar to scene coordinates: `center + radius * (cos(a) * scale.x, sin(a) * scale.y)`.
pub fn polar_point(center: Point, scale: Vec2, radius: f64, angle: f64) -> Point {
    let a = angle.to_radians();
    Point::new(
        center.x + radius * a.cos() * scale.x,
        center.y + radius * a.sin() * scale.y,
    )
}

/// Where a wedge label goes: the polar point at `(mid_angle, mid_radius)`.
pub fn label_anchor(
    mid_angle: f64,
    mid_radius: f64,
    center: Point,
    scale_x: f64,
    scale_y: f64,
) -> Point {
    polar_point(center, Vec2::new(scale_x, scale_y), mid_radius, mid_angle)
}

/// Inverse of [`polar_point`] for the angle: the direction of `point` seen from `center`, in
/// unscaled degrees `[0, 360)`.
pub fn angle_of(center: Point, scale: Vec2, point: Point) -> f64 {
    let dx = (point.x - center.x) / scale.x;
    let dy = (point.y - center.y) / scale.y;
    normalize_angle(dy.atan2(dx).to_degrees())
}

/// Inverse of [`polar_point`] for the radius, in unscaled units.
pub fn radius_of(center: Point, scale: Vec2, point: Point) -> f64 {
    let dx = (point.x - center.x) / scale.x;
    let dy = (point.y - center.y) / scale.y;
    dx.hypot(dy)
}

/// The closed boundary of one wedge.
///
/// Walk order is outer-start, (outer arc, clockwise) outer-end, (edge) inner-end,
/// (inner arc, counter-clockwise) inner-start, close.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WedgeBoundary {
    /// Outer arc start corner.
    pub outer_start: Point,
    /// Outer arc end corner.
    pub outer_end: Point,
    /// Inner arc end corner.
    pub inner_end: Point,
    /// Inner arc start corner.
    pub inner_start: Point,
    /// Ellipse radii of the outer arc.
    pub outer_radii: Vec2,
    /// Ellipse radii of the inner arc.
    pub inner_radii: Vec2,
    /// Clockwise span in degrees.
    pub span: f64,
    /// SVG large-arc flag, `span > 180`; shared by both arcs.
    pub large_arc: bool,
}

impl WedgeBoundary {
    /// Corners in walk order.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.outer_start,
            self.outer_end,
            self.inner_end,
            self.inner_start,
        ]
    }

    /// SVG path data (`M A L A Z`).
    pub fn to_svg_path(&self) -> String {
        let large = u8::from(self.large_arc);
        let mut d = String::new();
        // Writing into a `String` can't fail.
        let _ = write!(
            d,
            "M {:.2} {:.2} A {:.2} {:.2} 0 {large} 1 {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {large} 0 {:.2} {:.2} Z",
            self.outer_start.x,
            self.outer_start.y,
            self.outer_radii.x,
            self.outer_radii.y,
            self.outer_end.x,
            self.outer_end.y,
            self.inner_end.x,
            self.inner_end.y,
            self.inner_radii.x,
            self.inner_radii.y,
            self.inner_start.x,
            self.inner_start.y,
        );
        d
    }

    /// Converts the boundary to a `BezPath`, approximating arcs within `tolerance`.
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.outer_start);
        append_arc(
            &mut path,
            self.outer_start,
            self.outer_end,
            self.outer_radii,
            self.large_arc,
            true,
            tolerance,
        );
        path.line_to(self.inner_end);
        append_arc(
            &mut path,
            self.inner_end,
            self.inner_start,
            self.inner_radii,
            self.large_arc,
            false,
            tolerance,
        );
        path.close_path();
        path
    }
}

fn append_arc(
    path: &mut BezPath,
    from: Point,
    to: Point,
    radii: Vec2,
    large_arc: bool,
    sweep: bool,
    tolerance: f64,
) {
    let svg_arc = SvgArc {
        from,
        to,
        radii,
        x_rotation: 0.0,
        large_arc,
        sweep,
    };
    match Arc::from_svg_arc(&svg_arc) {
        Some(arc) => path.extend(arc.append_iter(tolerance)),
        // Zero radius (a wedge reaching the center) degenerates to a straight edge.
        None => path.line_to(to),
    }
}

/// Computes the boundary of the wedge between `inner_radius` and `outer_radius`, swept
/// clockwise from `start_angle` to `end_angle`, with both radii stretched by
/// `(scale_x, scale_y)`.
///
/// Zero and full-circle spans are not special-cased.
pub fn describe_wedge_boundary(
    center: Point,
    scale_x: f64,
    scale_y: f64,
    inner_radius: f64,
    outer_radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> WedgeBoundary {
    let scale = Vec2::new(scale_x, scale_y);
    let span = angular_span(start_angle, end_angle);
    WedgeBoundary {
        outer_start: polar_point(center, scale, outer_radius, start_angle),
        outer_end: polar_point(center, scale, outer_radius, end_angle),
        inner_end: polar_point(center, scale, inner_radius, end_angle),
        inner_start: polar_point(center, scale, inner_radius, start_angle),
        outer_radii: Vec2::new(outer_radius * scale_x, outer_radius * scale_y),
        inner_radii: Vec2::new(inner_radius * scale_x, inner_radius * scale_y),
        span,
        large_arc: span > 180.0,
    }
}
