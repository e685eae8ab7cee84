// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Venue seating diagrams built on `seatmap_core`.
//!
//! This crate turns a declarative description of a venue's seating blocks into drawable
//! marks and binds them to live ticket inventory:
//! - **Geometry**: annulus wedges (curved stands) and their arc boundaries.
//! - **Venues**: [`VenueLayout`]s produced by [`VenueModule`]s and looked up through a
//!   [`VenueRegistry`] that falls back to a generic layout for unknown venues.
//! - **Inventory**: ticket listings reduced to per-section [`SectionAggregate`]s.
//! - **Interaction**: hover and selection state with a selection callback.
//! - **Rendering**: a pure function from all of the above to `seatmap_core::Mark`s.
//!
//! [`SeatingDiagram`] wires these together for a host UI.
//!
//! Text shaping is out of scope; text marks store unshaped strings.

#![no_std]

extern crate alloc;

mod diagram;
#[cfg(not(feature = "std"))]
mod float;
mod geometry;
mod interaction;
mod inventory;
mod render;
mod section;
mod style;
mod venue;
#[cfg(test)]
mod venue_tests;
mod venues;
mod z_order;

pub use diagram::SeatingDiagram;
pub use geometry::{
    WedgeBoundary, angle_in_wedge, angle_of, angular_span, describe_wedge_boundary,
    label_anchor, normalize_angle, polar_point, radius_of, wrap_aware_midpoint,
};
pub use interaction::{InteractionController, InteractionState, SelectionCallback};
pub use inventory::{Listing, SectionAggregate, SectionAggregates, SectionSummary};
pub use render::{
    FIELD_ID_BASE, SECTION_ID_BASE, SectionStatus, SectionVisual, boundary_id, label_id,
    render_diagram, render_sections, resolve_visual, section_marks, section_status,
};
pub use section::{RectBlock, Section, SectionShape, Stand, Wedge};
pub use style::{DiagramStyle, OpacityLevels, PriceRamp, StrokeStyle};
pub use venue::{
    FieldMarking, FieldOverlay, LayoutError, StandCaption, VenueLayout, VenueLayoutBuilder,
};
pub use venues::{
    EastfieldArena, GenericLayoutSpec, GenericVenue, KingswayGround, MAX_BLOCKS_PER_SIDE,
    RiversideBowl, VenueModule, VenueRegistry, normalize_venue_key,
};
pub use z_order::*;
