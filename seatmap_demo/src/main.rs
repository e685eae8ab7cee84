// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seating diagram demos for `seatmap`.
//!
//! Renders every shipped venue with a sample inventory, drives a hover and a selection
//! through the diagram, and writes the SVG frames to `seatmap_demo.html`.
//! Set `RUST_LOG=seatmap=debug` to see fallback resolution and dropped listings.

mod html;
mod svg;

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Size;
use peniko::color::palette::css;
use seatmap::{
    DiagramStyle, GenericLayoutSpec, GenericVenue, Listing, SeatingDiagram, VenueLayout,
    VenueModule, VenueRegistry,
};

fn main() {
    env_logger::init();

    let registry = VenueRegistry::builtin();
    let mut sections: Vec<html::HtmlSection> = registry
        .venue_keys()
        .map(|key| venue_demo(&registry, key, DiagramStyle::default()))
        .collect();
    sections.push(price_ramp_demo(&registry));
    sections.push(fallback_demo(&registry));
    sections.push(custom_generic_demo());

    let html = html::render_report("Seatmap venues", &sections);
    match std::fs::write("seatmap_demo.html", html) {
        Ok(()) => println!("wrote seatmap_demo.html"),
        Err(err) => {
            log::error!("writing seatmap_demo.html: {err}");
            std::process::exit(1);
        }
    }
}

/// Deterministic sample inventory: roughly two of every three sections have tickets.
///
/// One listing names a section that doesn't exist so the report can show it being dropped.
fn sample_listings(layout: &VenueLayout) -> Vec<Listing> {
    let mut listings = Vec::new();
    for (i, section) in (0_u32..).zip(layout.sections()) {
        if i % 3 == 2 {
            continue;
        }
        let base = 35.0 + f64::from(i * 37 % 90);
        listings.push(Listing::new(&*section.id, &section.label, base, 1 + i % 4));
        if i % 5 == 0 {
            listings.push(Listing::new(&*section.id, &section.label, base + 12.5, 2));
        }
    }
    listings.push(Listing::new("ZZ9", "Hospitality Deck", 250.0, 2));
    listings
}

#[derive(Debug)]
struct Frames {
    svg: svg::SvgScene,
    section: html::HtmlSection,
}

impl Frames {
    fn new(title: String, diagram: &SeatingDiagram) -> Self {
        Self {
            svg: svg::SvgScene::new(diagram.layout().view_box()),
            section: html::HtmlSection::new(title),
        }
    }

    /// Pulls the diffs since the last frame and snapshots the result.
    fn capture(&mut self, diagram: &mut SeatingDiagram, caption: &str) {
        let diffs = diagram.update();
        self.svg.apply_diffs(&diffs);
        self.section.svg(
            format!("{caption} ({} diffs, {} marks)", diffs.len(), self.svg.len()),
            self.svg.to_svg_string(),
        );
    }
}

fn venue_demo(registry: &VenueRegistry, venue: &str, style: DiagramStyle) -> html::HtmlSection {
    let selections: Rc<RefCell<Vec<Option<String>>>> = Rc::default();
    let recorder = selections.clone();
    let mut diagram = SeatingDiagram::for_venue(registry, venue)
        .with_style(style)
        .with_on_section_select(move |id| recorder.borrow_mut().push(id.map(String::from)));

    let listings = sample_listings(diagram.layout());
    diagram.set_inventory(&listings);

    let layout = diagram.layout().clone();
    let mut frames = Frames::new(format!("{} ({})", layout.name(), layout.key()), &diagram);
    frames.section.note(format!(
        "{} sections, {} with tickets",
        layout.sections().len(),
        diagram.aggregates().len()
    ));
    if let Some((low, high)) = diagram.aggregates().price_range() {
        frames.section.note(format!("prices from {low:.2} to {high:.2}"));
    }
    frames.section.note(format!(
        "dropped listings for unknown sections: {:?}",
        diagram.aggregates().unmatched_keys()
    ));

    frames.capture(&mut diagram, "inventory");

    let mut available = layout
        .sections()
        .iter()
        .filter(|s| diagram.aggregates().is_available(&s.id));
    let hover = available.next().map(|s| s.label_anchor);
    let pick = available.nth(3).map(|s| s.label_anchor);

    if let Some(point) = hover {
        diagram.pointer_move(point);
        frames.capture(&mut diagram, "hover");
    }
    if let Some(point) = pick {
        diagram.pointer_leave();
        diagram.click_at(point);
        if let Some(agg) = diagram.selected_aggregate() {
            frames.section.note(format!(
                "selected {}: {} tickets from {:.2}",
                agg.display_name, agg.ticket_count, agg.min_price
            ));
        }
        let selected = diagram.state().selected.as_deref();
        frames.section.note(format!(
            "ticket list filtered to the selection: {} of {} listings",
            listings.iter().filter(|l| l.matches(selected)).count(),
            listings.len()
        ));
        frames.capture(&mut diagram, "selected");
    }

    // Sell out the selected section; the selection is dropped and reported.
    let sold_out = diagram.state().selected.clone();
    let remaining: Vec<Listing> = listings
        .iter()
        .filter(|l| sold_out.as_deref() != Some(l.section_key.as_str()))
        .cloned()
        .collect();
    diagram.set_inventory(&remaining);
    frames.capture(&mut diagram, "after sell-out");

    frames
        .section
        .note(format!("selection callback saw {:?}", selections.borrow()));
    frames.section
}

fn price_ramp_demo(registry: &VenueRegistry) -> html::HtmlSection {
    let style = DiagramStyle::default().with_price_ramp(css::SEA_GREEN, css::CRIMSON);
    let mut section = venue_demo(registry, "riverside", style);
    section.title = format!("{} with price colouring", section.title);
    section
}

fn fallback_demo(registry: &VenueRegistry) -> html::HtmlSection {
    let mut diagram = SeatingDiagram::for_venue(registry, "Unknown Park");
    let listings = sample_listings(diagram.layout());
    diagram.set_inventory(&listings);
    let mut frames = Frames::new("Unknown venue \"Unknown Park\"".to_string(), &diagram);
    frames
        .section
        .note(format!("resolved to `{}`", diagram.layout().key()));
    frames.capture(&mut diagram, "fallback");
    frames.section
}

fn custom_generic_demo() -> html::HtmlSection {
    let module = GenericVenue::new(
        GenericLayoutSpec::default()
            .with_canvas_size(Size::new(1200.0, 800.0))
            .with_pitch_size(Size::new(640.0, 360.0))
            .with_blocks_per_side(9),
    );
    let registry = VenueRegistry::new(module.layout());
    let mut diagram = SeatingDiagram::for_venue(&registry, "generic");
    let listings = sample_listings(diagram.layout());
    diagram.set_inventory(&listings);
    let mut frames = Frames::new("Generic stadium, 9 blocks per side".to_string(), &diagram);
    frames
        .section
        .note(format!("{} sections", diagram.layout().sections().len()));
    diagram.highlight(Some("S5"));
    frames.capture(&mut diagram, "highlighted from ticket list");
    frames.section
}
