// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Section mark generation.
//!
//! Rendering is a pure function of layout, interaction state, aggregates and style. Mark ids
//! depend only on a section's position in the layout, so two renders of the same layout diff
//! down to the sections whose look actually changed.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;
use seatmap_core::{Mark, MarkId, TextAnchor, TextBaseline};
use smallvec::SmallVec;

use crate::interaction::InteractionState;
use crate::inventory::SectionAggregates;
use crate::section::{Section, SectionShape};
use crate::style::{DiagramStyle, StrokeStyle};
use crate::venue::VenueLayout;
use crate::z_order;

/// First mark id used for the field overlay.
pub const FIELD_ID_BASE: u64 = 0x1_0000;
/// First mark id used for sections. Each section takes two ids: boundary, then label.
pub const SECTION_ID_BASE: u64 = 0x10_0000;

/// Mark id of the boundary of the section at `index`.
pub fn boundary_id(index: usize) -> MarkId {
    MarkId::from_raw(SECTION_ID_BASE + 2 * index as u64)
}

/// Mark id of the label of the section at `index`.
pub fn label_id(index: usize) -> MarkId {
    MarkId::from_raw(SECTION_ID_BASE + 2 * index as u64 + 1)
}

/// Interaction status of one section, lowest to highest emphasis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionStatus {
    /// No tickets.
    Unavailable,
    /// Tickets, not hovered or selected.
    Available,
    /// Under the pointer.
    Hovered,
    /// Selected.
    Selected,
}

/// Resolved look of one section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionVisual {
    /// Status the look was resolved from.
    pub status: SectionStatus,
    /// Fill colour before opacity.
    pub fill: Color,
    /// Fill opacity.
    pub opacity: f32,
    /// Outline.
    pub outline: StrokeStyle,
    /// Whether the label is drawn.
    pub show_label: bool,
    /// Label colour.
    pub label_fill: Color,
    /// Whether the boundary takes pointer input.
    pub interactive: bool,
}

/// Status of `section_id`. Unavailable sections stay unavailable whatever the pointer does.
pub fn section_status(
    section_id: &str,
    state: &InteractionState,
    aggregates: &SectionAggregates,
) -> SectionStatus {
    if !aggregates.is_available(section_id) {
        SectionStatus::Unavailable
    } else if state.is_selected(section_id) {
        SectionStatus::Selected
    } else if state.is_hovered(section_id) {
        SectionStatus::Hovered
    } else {
        SectionStatus::Available
    }
}

/// Resolves the look of one section.
pub fn resolve_visual(
    section: &Section,
    state: &InteractionState,
    aggregates: &SectionAggregates,
    style: &DiagramStyle,
) -> SectionVisual {
    let status = section_status(&section.id, state, aggregates);
    let opacity = match status {
        SectionStatus::Unavailable => style.opacity.unavailable,
        SectionStatus::Available => style.opacity.base,
        SectionStatus::Hovered => style.opacity.hovered,
        SectionStatus::Selected => style.opacity.selected,
    };
    let fill = match (status, style.price_ramp) {
        (SectionStatus::Unavailable, _) => style.unavailable_fill,
        (_, Some(ramp)) => {
            ramp.color_at(aggregates.relative_price(&section.id).unwrap_or(0.0))
        }
        (_, None) => style.section_fill,
    };
    let outline = if status == SectionStatus::Selected {
        style.selected_outline.clone()
    } else {
        style.outline.clone()
    };
    let show_label = match &section.shape {
        SectionShape::Wedge(_) => true,
        SectionShape::Rect(r) => {
            r.rect.width() >= style.min_label_size.width
                && r.rect.height() >= style.min_label_size.height
        }
    };
    let label_fill = if opacity >= style.contrast_threshold {
        style.light_text
    } else {
        style.dark_text
    };
    SectionVisual {
        status,
        fill,
        opacity,
        outline,
        show_label,
        label_fill,
        interactive: status != SectionStatus::Unavailable,
    }
}

/// Boundary and (optionally) label marks for one section.
///
/// Interactive boundaries carry the section id as their key; labels never do.
pub fn section_marks(
    index: usize,
    section: &Section,
    visual: &SectionVisual,
    style: &DiagramStyle,
) -> SmallVec<[Mark; 2]> {
    let z = if visual.status == SectionStatus::Selected {
        z_order::SECTION_SELECTED
    } else {
        z_order::SECTION_FILL
    };
    let builder = Mark::builder(boundary_id(index));
    let builder = match &section.shape {
        SectionShape::Wedge(w) => builder.path(w.boundary().to_bez_path(style.tolerance)),
        SectionShape::Rect(r) => builder.rounded_rect(r.rect, r.corner_radius),
    };
    let mut builder = builder
        .z_index(z)
        .fill(visual.fill.multiply_alpha(visual.opacity))
        .stroke(visual.outline.brush.clone(), visual.outline.stroke_width);
    if visual.interactive {
        builder = builder.key(section.id.clone());
    }

    let mut out = SmallVec::new();
    out.push(builder.build());
    if visual.show_label {
        out.push(
            Mark::builder(label_id(index))
                .text(section.label_anchor, section.label.clone())
                .z_index(z_order::SECTION_LABELS)
                .font_size(style.label_font_size)
                .anchor(TextAnchor::Middle)
                .baseline(TextBaseline::Middle)
                .fill(visual.label_fill)
                .build(),
        );
    }
    out
}

/// Marks for every section of `layout`, in layout order.
pub fn render_sections(
    layout: &VenueLayout,
    state: &InteractionState,
    aggregates: &SectionAggregates,
    style: &DiagramStyle,
) -> Vec<Mark> {
    let mut out = Vec::with_capacity(layout.sections().len() * 2);
    for (i, section) in layout.sections().iter().enumerate() {
        let visual = resolve_visual(section, state, aggregates, style);
        out.extend(section_marks(i, section, &visual, style));
    }
    out
}

/// The whole diagram: field overlay beneath, sections on top.
pub fn render_diagram(
    layout: &VenueLayout,
    state: &InteractionState,
    aggregates: &SectionAggregates,
    style: &DiagramStyle,
) -> Vec<Mark> {
    let mut out = layout.field().marks(FIELD_ID_BASE, style);
    out.extend(render_sections(layout, state, aggregates, style));
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::{Point, Rect, Size};
    use peniko::Brush;
    use seatmap_core::{MarkKind, MarkPayload};

    use super::*;
    use crate::inventory::Listing;
    use crate::section::{Stand, Wedge};
    use crate::venue::FieldOverlay;

    fn layout() -> VenueLayout {
        let bowl = |id: &str, start: f64, end: f64| {
            Section::wedge(
                id,
                id,
                Stand::East,
                Wedge::new(Point::new(200.0, 200.0), 100.0, 150.0, start, end),
            )
        };
        VenueLayout::builder("t", "T", Size::new(400.0, 400.0))
            .section(bowl("A", 330.0, 0.0))
            .section(bowl("B", 0.0, 30.0))
            .section(bowl("C", 30.0, 60.0))
            .section(Section::rect(
                "K",
                "K",
                Stand::Corner,
                Rect::new(0.0, 0.0, 30.0, 30.0),
                4.0,
            ))
            .field(FieldOverlay::football(Rect::new(150.0, 170.0, 250.0, 230.0)))
            .build()
    }

    fn aggregates(layout: &VenueLayout) -> SectionAggregates {
        SectionAggregates::from_listings(
            layout,
            &[
                Listing::new("A", "A", 20.0, 2),
                Listing::new("B", "B", 80.0, 1),
                Listing::new("K", "K", 50.0, 1),
            ],
        )
    }

    fn state(hovered: Option<&str>, selected: Option<&str>) -> InteractionState {
        InteractionState {
            hovered: hovered.map(Into::into),
            selected: selected.map(Into::into),
        }
    }

    #[test]
    fn opacity_follows_status() {
        let layout = layout();
        let aggs = aggregates(&layout);
        let style = DiagramStyle::default();
        let st = state(Some("B"), Some("A"));
        let visual = |id: &str| {
            let Some(section) = layout.section(id) else {
                panic!("missing {id}");
            };
            resolve_visual(section, &st, &aggs, &style)
        };
        let (a, b, c, k) = (visual("A"), visual("B"), visual("C"), visual("K"));
        assert_eq!(a.status, SectionStatus::Selected);
        assert_eq!(b.status, SectionStatus::Hovered);
        assert_eq!(c.status, SectionStatus::Unavailable);
        assert_eq!(k.status, SectionStatus::Available);
        assert!(c.opacity < k.opacity && k.opacity < b.opacity && b.opacity < a.opacity);
        assert_eq!(a.outline, style.selected_outline);
        assert_eq!(b.outline, style.outline);
    }

    #[test]
    fn hovering_an_unavailable_section_changes_nothing() {
        let layout = layout();
        let aggs = aggregates(&layout);
        let style = DiagramStyle::default();
        let before = render_sections(&layout, &state(None, None), &aggs, &style);
        let after = render_sections(&layout, &state(Some("C"), None), &aggs, &style);
        assert_eq!(before, after);
    }

    #[test]
    fn only_available_boundaries_are_keyed() {
        let layout = layout();
        let aggs = aggregates(&layout);
        let style = DiagramStyle::default();
        let marks = render_sections(&layout, &InteractionState::default(), &aggs, &style);
        let keys: Vec<Option<&str>> = marks
            .iter()
            .filter(|m| m.kind() != MarkKind::Text)
            .map(|m| m.key.as_deref())
            .collect();
        assert_eq!(keys, [Some("A"), Some("B"), None, Some("K")]);
        assert!(
            marks
                .iter()
                .filter(|m| m.kind() == MarkKind::Text)
                .all(|m| m.key.is_none())
        );
    }

    #[test]
    fn small_rects_have_no_label() {
        let layout = layout();
        let aggs = aggregates(&layout);
        let style = DiagramStyle::default();
        let marks = render_sections(&layout, &InteractionState::default(), &aggs, &style);
        // Three wedges with labels, one small rect without.
        assert_eq!(marks.len(), 3 * 2 + 1);
        assert!(marks.iter().all(|m| m.id != label_id(3)));
        assert!(marks.iter().any(|m| m.id == boundary_id(3)));
    }

    #[test]
    fn label_contrast_follows_opacity() {
        let layout = layout();
        let aggs = aggregates(&layout);
        let style = DiagramStyle::default();
        let marks = render_sections(&layout, &state(None, Some("A")), &aggs, &style);
        let label_fill = |index: usize| {
            marks
                .iter()
                .find(|m| m.id == label_id(index))
                .and_then(|m| match &m.payload {
                    MarkPayload::Text(t) => Some(t.fill.clone()),
                    _ => None,
                })
        };
        assert_eq!(label_fill(0), Some(Brush::from(style.light_text)));
        assert_eq!(label_fill(1), Some(Brush::from(style.dark_text)));
    }

    #[test]
    fn selected_section_is_raised_with_a_heavier_outline() {
        let layout = layout();
        let aggs = aggregates(&layout);
        let style = DiagramStyle::default();
        let marks = render_sections(&layout, &state(None, Some("B")), &aggs, &style);
        let Some(b) = marks.iter().find(|m| m.id == boundary_id(1)) else {
            panic!("missing boundary");
        };
        assert_eq!(b.z_index, z_order::SECTION_SELECTED);
        let MarkPayload::Path(p) = &b.payload else {
            panic!("wedge boundary should be a path");
        };
        assert_eq!(p.stroke_width, style.selected_outline.stroke_width);
    }

    #[test]
    fn price_ramp_tints_by_relative_price() {
        let layout = layout();
        let aggs = aggregates(&layout);
        let cheap = Color::from_rgba8(0, 200, 0, 255);
        let expensive = Color::from_rgba8(200, 0, 0, 255);
        let style = DiagramStyle::default().with_price_ramp(cheap, expensive);
        let st = InteractionState::default();
        let Some(a) = layout.section("A") else {
            panic!("missing A");
        };
        let Some(b) = layout.section("B") else {
            panic!("missing B");
        };
        assert_eq!(resolve_visual(a, &st, &aggs, &style).fill, cheap);
        assert_eq!(resolve_visual(b, &st, &aggs, &style).fill, expensive);
    }

    #[test]
    fn overlay_sits_beneath_sections() {
        let layout = layout();
        let aggs = aggregates(&layout);
        let style = DiagramStyle::default();
        let marks = render_diagram(&layout, &InteractionState::default(), &aggs, &style);
        let overlay_max = marks
            .iter()
            .filter(|m| m.id.0 < SECTION_ID_BASE)
            .map(|m| m.z_index)
            .max();
        let sections_min = marks
            .iter()
            .filter(|m| m.id.0 >= SECTION_ID_BASE)
            .map(|m| m.z_index)
            .min();
        assert!(overlay_max < sections_min);
        assert!(
            marks
                .iter()
                .filter(|m| m.id.0 < SECTION_ID_BASE)
                .all(|m| !m.is_interactive())
        );
    }
}
