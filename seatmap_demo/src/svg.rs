// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG output for mark diffs.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::Arc;

use kurbo::Rect;
use peniko::Brush;
use seatmap_core::{MarkDiff, MarkId, MarkPayload, TextAnchor, TextBaseline};

#[derive(Debug)]
struct Retained {
    z_index: i32,
    key: Option<Arc<str>>,
    payload: MarkPayload,
}

/// Mirror of a `Scene` driven only by its diffs, the way a host renderer would be.
#[derive(Debug)]
pub(crate) struct SvgScene {
    marks: HashMap<MarkId, Retained>,
    view_box: Rect,
}

impl SvgScene {
    pub(crate) fn new(view_box: Rect) -> Self {
        Self {
            marks: HashMap::new(),
            view_box,
        }
    }

    pub(crate) fn apply_diffs(&mut self, diffs: &[MarkDiff]) {
        for diff in diffs {
            match diff {
                MarkDiff::Enter {
                    id,
                    z_index,
                    key,
                    new,
                    ..
                } => {
                    self.marks.insert(
                        *id,
                        Retained {
                            z_index: *z_index,
                            key: key.clone(),
                            payload: (**new).clone(),
                        },
                    );
                }
                MarkDiff::Update {
                    id,
                    new_z_index,
                    key,
                    new,
                    ..
                } => {
                    self.marks.insert(
                        *id,
                        Retained {
                            z_index: *new_z_index,
                            key: key.clone(),
                            payload: (**new).clone(),
                        },
                    );
                }
                MarkDiff::Exit { id, .. } => {
                    self.marks.remove(id);
                }
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.marks.len()
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let vb = self.view_box;
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMidYMid meet">"#,
            vb.x0,
            vb.y0,
            vb.width(),
            vb.height(),
            vb.width(),
            vb.height()
        );

        let mut ordered: Vec<(&MarkId, &Retained)> = self.marks.iter().collect();
        ordered.sort_by_key(|(id, m)| (m.z_index, id.0));

        for (_, mark) in ordered {
            match &mark.payload {
                MarkPayload::Rect(r) => {
                    let _ = write!(
                        out,
                        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                        r.rect.x0,
                        r.rect.y0,
                        r.rect.width(),
                        r.rect.height(),
                    );
                    if r.corner_radius > 0.0 {
                        let _ = write!(out, r#" rx="{}""#, r.corner_radius);
                    }
                    write_paint_attr(&mut out, "fill", &r.fill);
                    write_stroke(&mut out, &r.stroke, r.stroke_width);
                }
                MarkPayload::Path(p) => {
                    let _ = write!(out, r#"<path d="{}""#, p.path.to_svg());
                    write_paint_attr(&mut out, "fill", &p.fill);
                    write_stroke(&mut out, &p.stroke, p.stroke_width);
                }
                MarkPayload::Text(t) => {
                    let baseline = match t.baseline {
                        TextBaseline::Middle => "middle",
                        TextBaseline::Alphabetic => "alphabetic",
                        TextBaseline::Hanging => "hanging",
                        TextBaseline::Ideographic => "ideographic",
                    };
                    let _ = write!(
                        out,
                        r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                        t.pos.x, t.pos.y, t.font_size, baseline
                    );
                    if t.angle != 0.0 {
                        let _ = write!(
                            out,
                            r#" transform="rotate({} {} {})""#,
                            t.angle, t.pos.x, t.pos.y
                        );
                    }
                    out.push_str(match t.anchor {
                        TextAnchor::Start => r#" text-anchor="start""#,
                        TextAnchor::Middle => r#" text-anchor="middle""#,
                        TextAnchor::End => r#" text-anchor="end""#,
                    });
                    write_paint_attr(&mut out, "fill", &t.fill);
                    write_interaction(&mut out, mark.key.as_deref());
                    out.push('>');
                    out.push_str(&escape_xml(&t.text));
                    out.push_str("</text>\n");
                    continue;
                }
            }
            write_interaction(&mut out, mark.key.as_deref());
            out.push_str("/>\n");
        }

        out.push_str("</svg>\n");
        out
    }
}

/// Keyed marks carry their section id; everything else lets pointer events through.
fn write_interaction(out: &mut String, key: Option<&str>) {
    match key {
        Some(key) => {
            let _ = write!(out, r#" data-section="{}""#, escape_xml(key));
        }
        None => out.push_str(r#" pointer-events="none""#),
    }
}

fn write_stroke(out: &mut String, stroke: &Brush, width: f64) {
    if width > 0.0 {
        write_paint_attr(out, "stroke", stroke);
        let _ = write!(out, r#" stroke-width="{width}""#);
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = (rgba.a != 255).then(|| f64::from(rgba.a) / 255.0);
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    if opacity == Some(0.0) {
        let _ = write!(out, r#" {name}="none""#);
        return;
    }
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o:.3}""#);
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use peniko::color::palette::css;
    use seatmap_core::{Mark, Scene};

    use super::*;

    #[test]
    fn svg_follows_the_scene_through_diffs() {
        let mut scene = Scene::new();
        let mut svg = SvgScene::new(Rect::new(0.0, 0.0, 100.0, 50.0));
        let block = |fill| {
            Mark::builder(MarkId::from_raw(1))
                .rounded_rect(Rect::new(10.0, 10.0, 30.0, 20.0), 3.0)
                .fill(fill)
                .key("N1")
                .build()
        };
        let caption = Mark::builder(MarkId::from_raw(2))
            .text(Point::new(50.0, 45.0), "Town <End>")
            .fill(css::BLACK)
            .build();

        svg.apply_diffs(&scene.tick([block(css::RED), caption.clone()]));
        svg.apply_diffs(&scene.tick([block(css::BLUE), caption]));
        assert_eq!(svg.len(), 2);

        let out = svg.to_svg_string();
        assert!(out.starts_with("<svg"));
        assert!(out.contains(r#"rx="3""#));
        assert!(out.contains(r##"fill="#0000ff""##));
        assert!(!out.contains(r##"fill="#ff0000""##));
        assert!(out.contains(r#"data-section="N1""#));
        assert!(out.contains(r#"pointer-events="none">Town &lt;End&gt;</text>"#));

        svg.apply_diffs(&scene.clear());
        assert_eq!(svg.len(), 0);
    }
}
