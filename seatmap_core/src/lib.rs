// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable primitives for seating diagrams.
//!
//! This crate is the small, renderer-agnostic bottom layer of the seating-diagram engine:
//! - [`Mark`]s are stable-identity drawable primitives (rects, paths, text).
//! - A [`Scene`] keeps the last set of marks and turns each new set into
//!   [`MarkDiff`]s (enter/update/exit), so a hover change re-renders one section
//!   instead of the whole venue.
//!
//! Marks may carry a `key`. Section marks use it to report which seating block they draw;
//! decorative marks (the playing surface, captions) leave it unset and are never the target
//! of pointer interaction.

#![no_std]

extern crate alloc;

mod mark;
mod scene;

pub use mark::{
    Mark, MarkBuilder, MarkId, MarkKind, MarkPayload, PathPayload, RectPayload, TextAnchor,
    TextBaseline, TextPayload,
};
pub use scene::{MarkDiff, Scene};
