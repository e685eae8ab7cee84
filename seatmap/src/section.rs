// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seating sections.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;

use kurbo::{BezPath, Point, Rect, RoundedRect, Shape, Vec2};

use crate::geometry::{
    WedgeBoundary, angle_in_wedge, angle_of, angular_span, describe_wedge_boundary, label_anchor,
    radius_of, wrap_aware_midpoint,
};

/// Which side of the playing surface a section belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stand {
    /// Top of the diagram.
    North,
    /// Right of the diagram.
    East,
    /// Bottom of the diagram.
    South,
    /// Left of the diagram.
    West,
    /// Corner blocks joining two stands.
    Corner,
}

/// An annulus sector: the region between two radii swept clockwise from `start_angle` to
/// `end_angle` (degrees), stretched per axis by `scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wedge {
    /// Center of the bowl.
    pub center: Point,
    /// Per-axis stretch applied to both radii.
    pub scale: Vec2,
    /// Inner radius (unscaled).
    pub inner_radius: f64,
    /// Outer radius (unscaled).
    pub outer_radius: f64,
    /// Start angle in degrees.
    pub start_angle: f64,
    /// End angle in degrees.
    pub end_angle: f64,
}

impl Wedge {
    /// Creates a circular wedge.
    pub fn new(
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Self {
            center,
            scale: Vec2::new(1.0, 1.0),
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
        }
    }

    /// Stretches the wedge into an oval.
    pub fn with_scale(mut self, scale_x: f64, scale_y: f64) -> Self {
        self.scale = Vec2::new(scale_x, scale_y);
        self
    }

    /// Clockwise span in degrees.
    pub fn span(&self) -> f64 {
        angular_span(self.start_angle, self.end_angle)
    }

    /// Seam-aware middle angle.
    pub fn mid_angle(&self) -> f64 {
        wrap_aware_midpoint(self.start_angle, self.end_angle)
    }

    /// Middle radius.
    pub fn mid_radius(&self) -> f64 {
        (self.inner_radius + self.outer_radius) / 2.0
    }

    /// Boundary description.
    pub fn boundary(&self) -> WedgeBoundary {
        describe_wedge_boundary(
            self.center,
            self.scale.x,
            self.scale.y,
            self.inner_radius,
            self.outer_radius,
            self.start_angle,
            self.end_angle,
        )
    }

    /// Label position: mid angle, mid radius.
    pub fn label_anchor(&self) -> Point {
        label_anchor(
            self.mid_angle(),
            self.mid_radius(),
            self.center,
            self.scale.x,
            self.scale.y,
        )
    }

    /// Returns `true` if `point` falls inside the wedge.
    pub fn contains(&self, point: Point) -> bool {
        let r = radius_of(self.center, self.scale, point);
        if r < self.inner_radius || r > self.outer_radius {
            return false;
        }
        angle_in_wedge(
            angle_of(self.center, self.scale, point),
            self.start_angle,
            self.end_angle,
        )
    }
}

/// A straight-stand block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectBlock {
    /// Block geometry.
    pub rect: Rect,
    /// Corner radius.
    pub corner_radius: f64,
}

/// Section geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SectionShape {
    /// Curved block.
    Wedge(Wedge),
    /// Straight block.
    Rect(RectBlock),
}

impl SectionShape {
    /// Where the label goes: mid-angle/mid-radius for wedges, center for rects.
    pub fn label_anchor(&self) -> Point {
        match self {
            Self::Wedge(w) => w.label_anchor(),
            Self::Rect(r) => r.rect.center(),
        }
    }

    /// Hit test.
    pub fn contains(&self, point: Point) -> bool {
        match self {
            Self::Wedge(w) => w.contains(point),
            Self::Rect(r) => RoundedRect::from_rect(r.rect, r.corner_radius).contains(point),
        }
    }

    /// Outline as a path.
    pub fn to_path(&self, tolerance: f64) -> BezPath {
        match self {
            Self::Wedge(w) => w.boundary().to_bez_path(tolerance),
            Self::Rect(r) => RoundedRect::from_rect(r.rect, r.corner_radius).to_path(tolerance),
        }
    }

    /// Bounding box in scene coordinates.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Wedge(w) => w.boundary().to_bez_path(0.1).bounding_box(),
            Self::Rect(r) => r.rect,
        }
    }
}

/// One bookable seating block.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    /// Stable id, unique within a venue. Joins against ticket listings.
    pub id: Arc<str>,
    /// Short display label.
    pub label: String,
    /// Stand grouping.
    pub stand: Stand,
    /// Geometry.
    pub shape: SectionShape,
    /// Precomputed label position.
    pub label_anchor: Point,
}

impl Section {
    /// Creates a curved section.
    pub fn wedge(
        id: impl Into<Arc<str>>,
        label: impl Into<String>,
        stand: Stand,
        wedge: Wedge,
    ) -> Self {
        Self::with_shape(id, label, stand, SectionShape::Wedge(wedge))
    }

    /// Creates a straight section.
    pub fn rect(
        id: impl Into<Arc<str>>,
        label: impl Into<String>,
        stand: Stand,
        rect: Rect,
        corner_radius: f64,
    ) -> Self {
        Self::with_shape(
            id,
            label,
            stand,
            SectionShape::Rect(RectBlock {
                rect,
                corner_radius,
            }),
        )
    }

    fn with_shape(
        id: impl Into<Arc<str>>,
        label: impl Into<String>,
        stand: Stand,
        shape: SectionShape,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            stand,
            label_anchor: shape.label_anchor(),
            shape,
        }
    }

    /// Returns the wedge geometry, if this is a curved section.
    pub fn as_wedge(&self) -> Option<&Wedge> {
        match &self.shape {
            SectionShape::Wedge(w) => Some(w),
            SectionShape::Rect(_) => None,
        }
    }

    /// Hit test.
    pub fn contains(&self, point: Point) -> bool {
        self.shape.contains(point)
    }
}
