// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for diagram marks.
//!
//! Renderers should sort by `(z_index, MarkId)` for a deterministic tie-break.

/// Playing surface fill.
pub const FIELD_SURFACE: i32 = -100;
/// Pitch/court markings.
pub const FIELD_MARKINGS: i32 = -50;

/// Section fills.
pub const SECTION_FILL: i32 = 0;
/// The selected section, raised so its outline is not covered by neighbours.
pub const SECTION_SELECTED: i32 = 10;

/// Section labels.
pub const SECTION_LABELS: i32 = 40;
/// Stand captions.
pub const STAND_CAPTIONS: i32 = 80;
