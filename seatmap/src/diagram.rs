// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A mounted seating diagram.
//!
//! [`SeatingDiagram`] ties one layout to its inventory snapshot, interaction state, style and
//! retained [`Scene`]. Hosts feed it inventory and pointer events and pull mark diffs with
//! [`SeatingDiagram::update`].

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::Point;
use seatmap_core::{Mark, MarkDiff, Scene};

use crate::interaction::{InteractionController, InteractionState};
use crate::inventory::{Listing, SectionAggregate, SectionAggregates, SectionSummary};
use crate::render::render_diagram;
use crate::style::DiagramStyle;
use crate::venue::VenueLayout;
use crate::venues::VenueRegistry;

/// One diagram instance.
#[derive(Debug)]
pub struct SeatingDiagram {
    layout: Arc<VenueLayout>,
    aggregates: SectionAggregates,
    controller: InteractionController,
    style: DiagramStyle,
    scene: Scene,
}

impl SeatingDiagram {
    /// A diagram for `layout` with no inventory (every section unavailable).
    pub fn new(layout: Arc<VenueLayout>) -> Self {
        Self {
            layout,
            aggregates: SectionAggregates::new(),
            controller: InteractionController::new(),
            style: DiagramStyle::default(),
            scene: Scene::new(),
        }
    }

    /// A diagram for `venue` as resolved by `registry`.
    pub fn for_venue(registry: &VenueRegistry, venue: &str) -> Self {
        Self::new(registry.resolve(venue))
    }

    /// Sets the style.
    pub fn with_style(mut self, style: DiagramStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the selection callback.
    pub fn with_on_section_select(
        mut self,
        callback: impl FnMut(Option<&str>) + 'static,
    ) -> Self {
        self.controller.set_on_section_select(callback);
        self
    }

    /// Active layout.
    pub fn layout(&self) -> &Arc<VenueLayout> {
        &self.layout
    }

    /// Current aggregates.
    pub fn aggregates(&self) -> &SectionAggregates {
        &self.aggregates
    }

    /// Current interaction state.
    pub fn state(&self) -> &InteractionState {
        self.controller.state()
    }

    /// Style.
    pub fn style(&self) -> &DiagramStyle {
        &self.style
    }

    /// Retained marks from the last [`update`](Self::update).
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Replaces the inventory with a new listing snapshot.
    ///
    /// A selection whose section sold out is cleared (and reported through the callback).
    pub fn set_inventory<'a>(&mut self, listings: impl IntoIterator<Item = &'a Listing>) {
        self.aggregates = SectionAggregates::from_listings(&self.layout, listings);
        self.controller.reconcile(&self.aggregates);
    }

    /// Replaces the inventory with pre-aggregated summaries.
    pub fn set_summaries<'a>(&mut self, summaries: impl IntoIterator<Item = &'a SectionSummary>) {
        self.aggregates = SectionAggregates::from_summaries(&self.layout, summaries);
        self.controller.reconcile(&self.aggregates);
    }

    /// Pointer entered a section.
    pub fn pointer_enter(&mut self, id: &str) -> bool {
        self.controller.pointer_enter(id)
    }

    /// Pointer left the hovered section.
    pub fn pointer_leave(&mut self) -> bool {
        self.controller.pointer_leave()
    }

    /// Pointer moved to `point` in layout coordinates.
    pub fn pointer_move(&mut self, point: Point) -> bool {
        self.controller.pointer_move(point, &self.layout)
    }

    /// Highlight from the ticket list; `None` clears it.
    pub fn highlight(&mut self, id: Option<&str>) -> bool {
        self.controller.highlight(id)
    }

    /// Click on a section.
    pub fn click(&mut self, id: &str) -> bool {
        self.controller.click(id, &self.aggregates)
    }

    /// Click at `point` in layout coordinates.
    pub fn click_at(&mut self, point: Point) -> bool {
        self.controller.click_at(point, &self.layout, &self.aggregates)
    }

    /// Controlled selection from outside. Sections without tickets are refused.
    pub fn select(&mut self, id: Option<&str>) -> bool {
        self.controller.set_selected(id, &self.aggregates)
    }

    /// Aggregate of the hovered section, if it has tickets.
    pub fn hovered_aggregate(&self) -> Option<&SectionAggregate> {
        self.controller
            .hovered()
            .and_then(|id| self.aggregates.get(id))
    }

    /// Aggregate of the selected section.
    pub fn selected_aggregate(&self) -> Option<&SectionAggregate> {
        self.controller
            .selected()
            .and_then(|id| self.aggregates.get(id))
    }

    /// Renders the current state.
    pub fn marks(&self) -> Vec<Mark> {
        render_diagram(
            &self.layout,
            self.controller.state(),
            &self.aggregates,
            &self.style,
        )
    }

    /// Renders and returns what changed since the previous call.
    pub fn update(&mut self) -> Vec<MarkDiff> {
        let marks = self.marks();
        self.scene.tick(marks)
    }
}
