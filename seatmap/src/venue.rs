// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Venue layouts and the decorative field overlay.
//!
//! A [`VenueLayout`] is the shared contract every venue module produces: a canvas size, an
//! ordered list of [`Section`]s, and a [`FieldOverlay`]. Renderer, inventory binder and
//! interaction controller only ever see this type, never the module that built it.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use kurbo::{Circle, Line, Point, Rect, Shape, Size};
use seatmap_core::{Mark, MarkId, TextAnchor, TextBaseline};

use crate::geometry::angular_span;
use crate::section::{Section, SectionShape, Stand, Wedge};
use crate::style::DiagramStyle;
use crate::z_order;

const EPSILON: f64 = 1e-9;

/// A pitch or court marking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldMarking {
    /// A straight line.
    Line(Line),
    /// An outlined rectangle.
    Rect(Rect),
    /// An outlined circle.
    Circle(Circle),
    /// A small filled dot.
    Spot(Point),
}

/// A stand name drawn next to the playing surface.
#[derive(Clone, Debug, PartialEq)]
pub struct StandCaption {
    /// Stand the caption names.
    pub stand: Stand,
    /// Caption text.
    pub text: String,
    /// Anchor (text is centered on it).
    pub pos: Point,
    /// Rotation in degrees.
    pub angle: f64,
}

/// Decorative playing-surface description. Never interactive.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldOverlay {
    /// The playing surface.
    pub surface: Rect,
    /// Surface corner radius.
    pub corner_radius: f64,
    /// Markings drawn on the surface.
    pub markings: Vec<FieldMarking>,
    /// Stand captions.
    pub captions: Vec<StandCaption>,
}

impl FieldOverlay {
    /// A plain surface with no markings or captions.
    pub fn new(surface: Rect) -> Self {
        Self {
            surface,
            corner_radius: 0.0,
            markings: Vec::new(),
            captions: Vec::new(),
        }
    }

    /// A football pitch (length along x) with halfway line, centre circle and spot, penalty
    /// and goal areas, and penalty spots, proportioned from a 105 x 68 pitch.
    pub fn football(surface: Rect) -> Self {
        let sx = surface.width() / 105.0;
        let sy = surface.height() / 68.0;
        let c = surface.center();
        let mut markings = alloc::vec![
            FieldMarking::Rect(surface),
            FieldMarking::Line(Line::new((c.x, surface.y0), (c.x, surface.y1))),
            FieldMarking::Circle(Circle::new(c, 9.15 * sx.min(sy))),
            FieldMarking::Spot(c),
        ];
        for (goal_x, dir) in [(surface.x0, 1.0), (surface.x1, -1.0)] {
            let box_x = goal_x + dir * 16.5 * sx;
            let six_x = goal_x + dir * 5.5 * sx;
            markings.push(FieldMarking::Rect(Rect::new(
                goal_x.min(box_x),
                c.y - 20.15 * sy,
                goal_x.max(box_x),
                c.y + 20.15 * sy,
            )));
            markings.push(FieldMarking::Rect(Rect::new(
                goal_x.min(six_x),
                c.y - 9.15 * sy,
                goal_x.max(six_x),
                c.y + 9.15 * sy,
            )));
            markings.push(FieldMarking::Spot(Point::new(goal_x + dir * 11.0 * sx, c.y)));
        }
        Self {
            markings,
            ..Self::new(surface)
        }
    }

    /// An indoor court (length along x) with halfway line, centre circle, keys and hoops,
    /// proportioned from a 28 x 15 court.
    pub fn court(surface: Rect) -> Self {
        let sx = surface.width() / 28.0;
        let sy = surface.height() / 15.0;
        let c = surface.center();
        let mut markings = alloc::vec![
            FieldMarking::Rect(surface),
            FieldMarking::Line(Line::new((c.x, surface.y0), (c.x, surface.y1))),
            FieldMarking::Circle(Circle::new(c, 1.8 * sx.min(sy))),
        ];
        for (base_x, dir) in [(surface.x0, 1.0), (surface.x1, -1.0)] {
            let key_x = base_x + dir * 5.8 * sx;
            markings.push(FieldMarking::Rect(Rect::new(
                base_x.min(key_x),
                c.y - 2.45 * sy,
                base_x.max(key_x),
                c.y + 2.45 * sy,
            )));
            markings.push(FieldMarking::Spot(Point::new(base_x + dir * 1.575 * sx, c.y)));
        }
        Self {
            corner_radius: 4.0,
            markings,
            ..Self::new(surface)
        }
    }

    /// Adds the four stand captions, centred on the edges of `frame`. Side captions are
    /// rotated to read along their stand.
    pub fn with_stand_captions(mut self, frame: Rect, names: [&str; 4]) -> Self {
        let c = frame.center();
        let [north, east, south, west] = names;
        self.captions = alloc::vec![
            StandCaption {
                stand: Stand::North,
                text: north.into(),
                pos: Point::new(c.x, frame.y0),
                angle: 0.0,
            },
            StandCaption {
                stand: Stand::East,
                text: east.into(),
                pos: Point::new(frame.x1, c.y),
                angle: 90.0,
            },
            StandCaption {
                stand: Stand::South,
                text: south.into(),
                pos: Point::new(c.x, frame.y1),
                angle: 0.0,
            },
            StandCaption {
                stand: Stand::West,
                text: west.into(),
                pos: Point::new(frame.x0, c.y),
                angle: -90.0,
            },
        ];
        self
    }

    /// Generates the overlay marks. None of them carries a key, so none takes pointer input.
    ///
    /// Mark ids are `id_base + n` in a stable order.
    pub fn marks(&self, id_base: u64, style: &DiagramStyle) -> Vec<Mark> {
        let mut next = id_base;
        let mut id = || {
            let id = MarkId::from_raw(next);
            next += 1;
            id
        };
        let stroke = &style.markings;
        let mut out = Vec::with_capacity(1 + self.markings.len() + self.captions.len());

        out.push(
            Mark::builder(id())
                .rounded_rect(self.surface, self.corner_radius)
                .z_index(z_order::FIELD_SURFACE)
                .fill(style.surface_fill)
                .build(),
        );

        for marking in &self.markings {
            let builder = Mark::builder(id()).z_index(z_order::FIELD_MARKINGS);
            let mark = match *marking {
                FieldMarking::Line(line) => builder
                    .path(line.to_path(style.tolerance))
                    .stroke(stroke.brush.clone(), stroke.stroke_width),
                FieldMarking::Rect(rect) => builder
                    .rect(rect)
                    .stroke(stroke.brush.clone(), stroke.stroke_width),
                FieldMarking::Circle(circle) => builder
                    .path(circle.to_path(style.tolerance))
                    .stroke(stroke.brush.clone(), stroke.stroke_width),
                FieldMarking::Spot(p) => builder
                    .path(Circle::new(p, stroke.stroke_width * 1.5).to_path(style.tolerance))
                    .fill(stroke.brush.clone()),
            };
            out.push(mark.build());
        }

        for caption in &self.captions {
            out.push(
                Mark::builder(id())
                    .text(caption.pos, caption.text.clone())
                    .z_index(z_order::STAND_CAPTIONS)
                    .font_size(style.caption_font_size)
                    .angle(caption.angle)
                    .anchor(TextAnchor::Middle)
                    .baseline(TextBaseline::Middle)
                    .fill(style.caption_fill)
                    .build(),
            );
        }

        out
    }
}

/// Construction defects in a venue layout.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// Two sections share an id.
    #[error("section id `{0}` is used more than once")]
    DuplicateSectionId(String),
    /// A wedge starts and ends at the same angle.
    #[error("section `{0}` has a zero angular span")]
    ZeroSpan(String),
    /// A wedge's inner radius is not below its outer radius.
    #[error("section `{id}` has inner radius {inner} not below outer radius {outer}")]
    InvertedRadii {
        /// Section id.
        id: String,
        /// Inner radius.
        inner: f64,
        /// Outer radius.
        outer: f64,
    },
    /// A rect section has no area.
    #[error("section `{0}` has an empty rectangle")]
    EmptyRect(String),
    /// Two wedges in the same tier of a stand cover the same angles.
    #[error("sections `{0}` and `{1}` overlap")]
    Overlap(String, String),
    /// Adjacent tiers of a stand leave a gap or overlap in radius.
    #[error("{stand:?} stand: tier ending at radius {outer} is followed by one starting at {inner}")]
    TierSeam {
        /// Stand whose tiers don't meet.
        stand: Stand,
        /// Outer radius of the lower band.
        outer: f64,
        /// Inner radius of the next band.
        inner: f64,
    },
}

/// An immutable venue description.
#[derive(Clone, Debug)]
pub struct VenueLayout {
    key: String,
    name: String,
    canvas_size: Size,
    sections: Vec<Section>,
    index: HashMap<Arc<str>, usize>,
    field: FieldOverlay,
}

impl VenueLayout {
    /// Starts building a layout.
    pub fn builder(
        key: impl Into<String>,
        name: impl Into<String>,
        canvas_size: Size,
    ) -> VenueLayoutBuilder {
        VenueLayoutBuilder {
            key: key.into(),
            name: name.into(),
            canvas_size,
            sections: Vec::new(),
            field: FieldOverlay::new(Rect::ZERO),
        }
    }

    /// Registry key of the venue.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size of the coordinate space all sections are drawn in.
    pub fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    /// The canvas as a rect at the origin.
    pub fn view_box(&self) -> Rect {
        self.canvas_size.to_rect()
    }

    /// Sections in paint order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Decorative overlay.
    pub fn field(&self) -> &FieldOverlay {
        &self.field
    }

    /// Looks up a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.index.get(id).map(|&i| &self.sections[i])
    }

    /// Position of a section in paint order.
    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Topmost section under `point`, if any. The overlay is never hit.
    pub fn section_at(&self, point: Point) -> Option<&Section> {
        self.sections.iter().rev().find(|s| s.contains(point))
    }

    /// Checks the layout invariants: unique ids, positive wedge spans, ordered radii,
    /// non-empty rects, no overlapping wedges within a tier, and tiers that meet exactly.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.index.len() != self.sections.len() {
            let mut seen: HashSet<&str> = HashSet::new();
            for s in &self.sections {
                if !seen.insert(&*s.id) {
                    return Err(LayoutError::DuplicateSectionId(s.id.as_ref().into()));
                }
            }
        }

        for s in &self.sections {
            match &s.shape {
                SectionShape::Wedge(w) => {
                    if w.span() <= EPSILON {
                        return Err(LayoutError::ZeroSpan(s.id.as_ref().into()));
                    }
                    if w.inner_radius >= w.outer_radius {
                        return Err(LayoutError::InvertedRadii {
                            id: s.id.as_ref().into(),
                            inner: w.inner_radius,
                            outer: w.outer_radius,
                        });
                    }
                }
                SectionShape::Rect(r) => {
                    if r.rect.width() <= 0.0 || r.rect.height() <= 0.0 {
                        return Err(LayoutError::EmptyRect(s.id.as_ref().into()));
                    }
                }
            }
        }

        let wedges: Vec<(&Section, &Wedge)> = self
            .sections
            .iter()
            .filter_map(|s| s.as_wedge().map(|w| (s, w)))
            .collect();

        for (i, (a, wa)) in wedges.iter().enumerate() {
            for (b, wb) in &wedges[i + 1..] {
                if a.stand == b.stand && same_band(wa, wb) && wedges_overlap(wa, wb) {
                    return Err(LayoutError::Overlap(
                        a.id.as_ref().into(),
                        b.id.as_ref().into(),
                    ));
                }
            }
        }

        let mut bands: HashMap<Stand, Vec<(f64, f64)>> = HashMap::new();
        for (s, w) in &wedges {
            let list = bands.entry(s.stand).or_default();
            let known = list.iter().any(|&(inner, outer)| {
                (inner - w.inner_radius).abs() <= EPSILON
                    && (outer - w.outer_radius).abs() <= EPSILON
            });
            if !known {
                list.push((w.inner_radius, w.outer_radius));
            }
        }
        for (stand, mut list) in bands {
            list.sort_by(|a, b| a.0.total_cmp(&b.0));
            for pair in list.windows(2) {
                let (_, outer) = pair[0];
                let (inner, _) = pair[1];
                if (outer - inner).abs() > EPSILON {
                    return Err(LayoutError::TierSeam {
                        stand,
                        outer,
                        inner,
                    });
                }
            }
        }

        Ok(())
    }
}

fn same_band(a: &Wedge, b: &Wedge) -> bool {
    a.center == b.center
        && (a.inner_radius - b.inner_radius).abs() <= EPSILON
        && (a.outer_radius - b.outer_radius).abs() <= EPSILON
}

fn wedges_overlap(a: &Wedge, b: &Wedge) -> bool {
    // Strictly inside: shared edges are how neighbouring blocks meet.
    let strictly_inside = |angle: f64, w: &Wedge| {
        let offset = angular_span(w.start_angle, angle);
        offset > EPSILON && offset < w.span() - EPSILON
    };
    strictly_inside(a.mid_angle(), b)
        || strictly_inside(b.mid_angle(), a)
        || strictly_inside(a.start_angle, b)
        || strictly_inside(b.start_angle, a)
}

/// Builder for [`VenueLayout`].
#[derive(Clone, Debug)]
pub struct VenueLayoutBuilder {
    key: String,
    name: String,
    canvas_size: Size,
    sections: Vec<Section>,
    field: FieldOverlay,
}

impl VenueLayoutBuilder {
    /// Appends one section.
    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Appends sections.
    pub fn sections(mut self, sections: impl IntoIterator<Item = Section>) -> Self {
        self.sections.extend(sections);
        self
    }

    /// Sets the field overlay.
    pub fn field(mut self, field: FieldOverlay) -> Self {
        self.field = field;
        self
    }

    /// Finishes the layout. Duplicate ids resolve to the first section and are reported by
    /// [`VenueLayout::validate`].
    pub fn build(self) -> VenueLayout {
        let mut index = HashMap::with_capacity(self.sections.len());
        for (i, s) in self.sections.iter().enumerate() {
            index.entry(s.id.clone()).or_insert(i);
        }
        VenueLayout {
            key: self.key,
            name: self.name,
            canvas_size: self.canvas_size,
            sections: self.sections,
            index,
            field: self.field,
        }
    }
}
