// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagram styling.

use kurbo::Size;
use peniko::color::palette::css;
use peniko::{Brush, Color};

/// Outline paint and width.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Section fill opacity per interaction status.
///
/// Expected ordering: `unavailable < base < hovered < selected`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpacityLevels {
    /// No tickets.
    pub unavailable: f32,
    /// Tickets available, not hovered or selected.
    pub base: f32,
    /// Under the pointer (or highlighted from the ticket list).
    pub hovered: f32,
    /// Selected.
    pub selected: f32,
}

impl Default for OpacityLevels {
    fn default() -> Self {
        Self {
            unavailable: 0.15,
            base: 0.55,
            hovered: 0.8,
            selected: 1.0,
        }
    }
}

/// Two-colour ramp used to tint available sections by price.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceRamp {
    /// Colour of the cheapest section.
    pub cheap: Color,
    /// Colour of the most expensive section.
    pub expensive: Color,
}

impl PriceRamp {
    /// Interpolates the ramp at `t` (clamped to `[0, 1]`).
    pub fn color_at(&self, t: f64) -> Color {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "t is clamped to [0, 1] and only drives colour"
        )]
        let t = t.clamp(0.0, 1.0) as f32;
        let a = self.cheap.components;
        let b = self.expensive.components;
        Color::new([
            a[0] + (b[0] - a[0]) * t,
            a[1] + (b[1] - a[1]) * t,
            a[2] + (b[2] - a[2]) * t,
            a[3] + (b[3] - a[3]) * t,
        ])
    }
}

/// Style inputs for the diagram renderer and field overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct DiagramStyle {
    /// Fill of available sections when no price ramp is set.
    pub section_fill: Color,
    /// Fill of sections without tickets.
    pub unavailable_fill: Color,
    /// Optional price tint for available sections.
    pub price_ramp: Option<PriceRamp>,
    /// Fill opacity per status.
    pub opacity: OpacityLevels,
    /// Outline of unselected sections.
    pub outline: StrokeStyle,
    /// Outline of the selected section.
    pub selected_outline: StrokeStyle,
    /// Section label font size.
    pub label_font_size: f64,
    /// Label colour on heavily filled sections.
    pub light_text: Color,
    /// Label colour otherwise.
    pub dark_text: Color,
    /// Opacity at or above which labels switch to `light_text`.
    pub contrast_threshold: f32,
    /// Rect sections smaller than this (in either dimension) draw no label.
    pub min_label_size: Size,
    /// Playing surface fill.
    pub surface_fill: Color,
    /// Pitch/court marking stroke.
    pub markings: StrokeStyle,
    /// Stand caption colour.
    pub caption_fill: Color,
    /// Stand caption font size.
    pub caption_font_size: f64,
    /// Curve flattening tolerance for `BezPath` conversion.
    pub tolerance: f64,
}

impl Default for DiagramStyle {
    fn default() -> Self {
        Self {
            section_fill: Color::from_rgba8(0x1f, 0x5f, 0xbf, 0xff),
            unavailable_fill: css::GRAY,
            price_ramp: None,
            opacity: OpacityLevels::default(),
            outline: StrokeStyle::solid(css::WHITE, 1.0),
            selected_outline: StrokeStyle::solid(css::BLACK, 2.5),
            label_font_size: 9.0,
            light_text: css::WHITE,
            dark_text: Color::from_rgba8(0x22, 0x22, 0x22, 0xff),
            contrast_threshold: 0.7,
            min_label_size: Size::new(44.0, 24.0),
            surface_fill: Color::from_rgba8(0x3a, 0x8a, 0x45, 0xff),
            markings: StrokeStyle::solid(css::WHITE.with_alpha(0.8), 1.5),
            caption_fill: Color::from_rgba8(0x55, 0x55, 0x55, 0xff),
            caption_font_size: 13.0,
            tolerance: 0.1,
        }
    }
}

impl DiagramStyle {
    /// Sets the fill of available sections.
    pub fn with_section_fill(mut self, fill: Color) -> Self {
        self.section_fill = fill;
        self
    }

    /// Tints available sections by price.
    pub fn with_price_ramp(mut self, cheap: Color, expensive: Color) -> Self {
        self.price_ramp = Some(PriceRamp { cheap, expensive });
        self
    }

    /// Sets the per-status opacities.
    pub fn with_opacity(mut self, opacity: OpacityLevels) -> Self {
        self.opacity = opacity;
        self
    }

    /// Sets the selected section outline.
    pub fn with_selected_outline(mut self, outline: StrokeStyle) -> Self {
        self.selected_outline = outline;
        self
    }

    /// Sets the section label font size.
    pub fn with_label_font_size(mut self, font_size: f64) -> Self {
        self.label_font_size = font_size;
        self
    }

    /// Sets the minimum rect size that still gets a label.
    pub fn with_min_label_size(mut self, size: Size) -> Self {
        self.min_label_size = size;
        self
    }

    /// Sets the curve flattening tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}
