// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark types and the mark builder.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::{Brush, Color};

/// Stable identity of a mark across renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates a mark id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// The primitive kind of a mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// Axis-aligned (optionally rounded) rectangle.
    Rect,
    /// Arbitrary filled/stroked path.
    Path,
    /// Single line of unshaped text.
    Text,
}

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor point.
    Start,
    /// Text is centered on the anchor point.
    Middle,
    /// Text ends at the anchor point.
    End,
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The anchor `y` is the vertical middle of the text.
    Middle,
    /// The anchor `y` is the alphabetic baseline.
    Alphabetic,
    /// The anchor `y` is the hanging baseline (top).
    Hanging,
    /// The anchor `y` is the ideographic baseline.
    Ideographic,
}

/// Resolved rectangle primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct RectPayload {
    /// Rectangle geometry in scene coordinates.
    pub rect: Rect,
    /// Corner radius (0 for square corners).
    pub corner_radius: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Outline paint.
    pub stroke: Brush,
    /// Outline width; 0 disables the outline.
    pub stroke_width: f64,
}

/// Resolved path primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct PathPayload {
    /// Path geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Outline paint.
    pub stroke: Brush,
    /// Outline width; 0 disables the outline.
    pub stroke_width: f64,
}

/// Resolved text primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPayload {
    /// Anchor position.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Rotation in degrees around `pos`.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// The drawable content of a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A rectangle.
    Rect(RectPayload),
    /// A path.
    Path(PathPayload),
    /// A text run.
    Text(TextPayload),
}

impl MarkPayload {
    /// Returns the primitive kind.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Rect(_) => MarkKind::Rect,
            Self::Path(_) => MarkKind::Path,
            Self::Text(_) => MarkKind::Text,
        }
    }

    /// Returns scene-space bounds.
    ///
    /// Text has no bounds here: shaping happens downstream of this crate.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Path(p) => Some(p.path.bounding_box()),
            Self::Text(_) => None,
        }
    }
}

/// A stable-identity drawable primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable id.
    pub id: MarkId,
    /// Paint order; renderers sort by `(z_index, id)`.
    pub z_index: i32,
    /// Optional caller key (a section id for interactive marks).
    pub key: Option<Arc<str>>,
    /// Drawable content.
    pub payload: MarkPayload,
}

impl Mark {
    /// Starts building a mark with the given id.
    pub fn builder(id: MarkId) -> MarkBuilder {
        MarkBuilder::new(id)
    }

    /// Returns the primitive kind.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }

    /// Returns scene-space bounds, if known.
    pub fn bounds(&self) -> Option<Rect> {
        self.payload.bounds()
    }

    /// Returns `true` if this mark takes part in pointer interaction.
    pub fn is_interactive(&self) -> bool {
        self.key.is_some()
    }
}

#[derive(Clone, Debug)]
enum Geometry {
    Rect { rect: Rect, corner_radius: f64 },
    Path(BezPath),
    Text { pos: Point, text: String },
}

/// Builder for [`Mark`].
///
/// The geometry setter (`rect`, `rounded_rect`, `path`, `text`) picks the mark kind; the
/// last one called wins. Style setters that don't apply to the chosen kind are ignored.
#[derive(Clone, Debug)]
pub struct MarkBuilder {
    id: MarkId,
    z_index: i32,
    key: Option<Arc<str>>,
    geometry: Geometry,
    fill: Brush,
    stroke: Brush,
    stroke_width: f64,
    font_size: f64,
    angle: f64,
    anchor: TextAnchor,
    baseline: TextBaseline,
}

impl MarkBuilder {
    fn new(id: MarkId) -> Self {
        Self {
            id,
            z_index: 0,
            key: None,
            geometry: Geometry::Rect {
                rect: Rect::ZERO,
                corner_radius: 0.0,
            },
            fill: Brush::Solid(Color::TRANSPARENT),
            stroke: Brush::Solid(Color::TRANSPARENT),
            stroke_width: 0.0,
            font_size: 12.0,
            angle: 0.0,
            anchor: TextAnchor::Middle,
            baseline: TextBaseline::Middle,
        }
    }

    /// Makes this a rectangle mark.
    pub fn rect(self, rect: Rect) -> Self {
        self.rounded_rect(rect, 0.0)
    }

    /// Makes this a rectangle mark with rounded corners.
    pub fn rounded_rect(mut self, rect: Rect, corner_radius: f64) -> Self {
        self.geometry = Geometry::Rect {
            rect,
            corner_radius,
        };
        self
    }

    /// Makes this a path mark.
    pub fn path(mut self, path: BezPath) -> Self {
        self.geometry = Geometry::Path(path);
        self
    }

    /// Makes this a text mark.
    pub fn text(mut self, pos: Point, text: impl Into<String>) -> Self {
        self.geometry = Geometry::Text {
            pos,
            text: text.into(),
        };
        self
    }

    /// Sets the paint order.
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Tags the mark with a caller key.
    pub fn key(mut self, key: impl Into<Arc<str>>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Sets the fill paint.
    pub fn fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline paint and width.
    pub fn stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the font size (text marks).
    pub fn font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the rotation in degrees (text marks).
    pub fn angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the horizontal anchor (text marks).
    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the vertical baseline (text marks).
    pub fn baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Finishes the mark.
    pub fn build(self) -> Mark {
        let payload = match self.geometry {
            Geometry::Rect {
                rect,
                corner_radius,
            } => MarkPayload::Rect(RectPayload {
                rect,
                corner_radius,
                fill: self.fill,
                stroke: self.stroke,
                stroke_width: self.stroke_width,
            }),
            Geometry::Path(path) => MarkPayload::Path(PathPayload {
                path,
                fill: self.fill,
                stroke: self.stroke,
                stroke_width: self.stroke_width,
            }),
            Geometry::Text { pos, text } => MarkPayload::Text(TextPayload {
                pos,
                text,
                font_size: self.font_size,
                angle: self.angle,
                anchor: self.anchor,
                baseline: self.baseline,
                fill: self.fill,
            }),
        };
        Mark {
            id: self.id,
            z_index: self.z_index,
            key: self.key,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn builder_defaults_to_an_empty_transparent_rect() {
        let mark = Mark::builder(MarkId::from_raw(7)).build();
        assert_eq!(mark.kind(), MarkKind::Rect);
        assert_eq!(mark.bounds(), Some(Rect::ZERO));
        assert!(!mark.is_interactive());
    }

    #[test]
    fn last_geometry_setter_wins() {
        let mark = Mark::builder(MarkId::from_raw(1))
            .rect(Rect::new(0.0, 0.0, 10.0, 10.0))
            .text(Point::new(5.0, 5.0), "Block 101")
            .fill(css::BLACK)
            .font_size(9.0)
            .build();
        let MarkPayload::Text(t) = &mark.payload else {
            panic!("expected text payload");
        };
        assert_eq!(t.text, "Block 101");
        assert_eq!(t.font_size, 9.0);
        assert_eq!(t.fill, css::BLACK.into());
        assert_eq!(mark.bounds(), None);
    }

    #[test]
    fn keyed_marks_are_interactive() {
        let mark = Mark::builder(MarkId::from_raw(2))
            .rounded_rect(Rect::new(0.0, 0.0, 4.0, 2.0), 1.0)
            .key("N1")
            .build();
        assert!(mark.is_interactive());
        assert_eq!(mark.key.as_deref(), Some("N1"));
        let MarkPayload::Rect(r) = &mark.payload else {
            panic!("expected rect payload");
        };
        assert_eq!(r.corner_radius, 1.0);
    }
}
