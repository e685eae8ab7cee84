// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shipped venue modules and the venue registry.
//!
//! Each venue is an independent [`VenueModule`]. The [`VenueRegistry`] maps normalized venue
//! identifiers (and aliases) to the layouts those modules produce, and falls back to the
//! generic layout for anything it does not know.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Rect, Vec2};

use crate::geometry::{angular_span, normalize_angle};
use crate::section::{Section, Stand, Wedge};
use crate::venue::VenueLayout;

mod eastfield_arena;
mod generic;
mod kingsway_ground;
mod riverside_bowl;

pub use eastfield_arena::EastfieldArena;
pub use generic::{GenericLayoutSpec, GenericVenue, MAX_BLOCKS_PER_SIDE};
pub use kingsway_ground::KingswayGround;
pub use riverside_bowl::RiversideBowl;

/// A venue description that can produce its layout.
pub trait VenueModule {
    /// Primary registry key, already normalized.
    fn key(&self) -> &'static str;

    /// Additional identifiers that resolve to this venue.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Builds the layout.
    fn layout(&self) -> VenueLayout;
}

/// Read-only lookup from venue identifier to layout.
///
/// Resolution never fails: unknown identifiers get the fallback layout.
#[derive(Clone, Debug)]
pub struct VenueRegistry {
    layouts: HashMap<String, Arc<VenueLayout>>,
    keys: Vec<String>,
    fallback: Arc<VenueLayout>,
}

impl VenueRegistry {
    /// Creates a registry holding only `fallback`, registered under its own key.
    pub fn new(fallback: VenueLayout) -> Self {
        let fallback = Arc::new(fallback);
        let key = normalize_venue_key(fallback.key());
        let mut layouts = HashMap::new();
        layouts.insert(key.clone(), fallback.clone());
        Self {
            layouts,
            keys: alloc::vec![key],
            fallback,
        }
    }

    /// The shipped venues, with the default generic layout as fallback.
    pub fn builtin() -> Self {
        Self::new(GenericVenue::default().layout())
            .with_module(&RiversideBowl)
            .with_module(&EastfieldArena)
            .with_module(&KingswayGround)
    }

    /// Registers a venue under its key and aliases. Later registrations win.
    pub fn with_module(mut self, module: &dyn VenueModule) -> Self {
        let layout = Arc::new(module.layout());
        let key = normalize_venue_key(module.key());
        if !self.keys.contains(&key) {
            self.keys.push(key.clone());
        }
        self.layouts.insert(key, layout.clone());
        for alias in module.aliases() {
            self.layouts
                .insert(normalize_venue_key(alias), layout.clone());
        }
        self
    }

    /// Exact lookup after normalization. No fallback.
    pub fn get(&self, venue: &str) -> Option<&Arc<VenueLayout>> {
        self.layouts.get(normalize_venue_key(venue).as_str())
    }

    /// Resolves a venue identifier, falling back to the generic layout.
    pub fn resolve(&self, venue: &str) -> Arc<VenueLayout> {
        match self.get(venue) {
            Some(layout) => layout.clone(),
            None => {
                log::debug!(
                    "no layout for venue `{venue}`, using `{}`",
                    self.fallback.key()
                );
                self.fallback.clone()
            }
        }
    }

    /// The fallback layout.
    pub fn fallback(&self) -> &Arc<VenueLayout> {
        &self.fallback
    }

    /// Primary keys in registration order.
    pub fn venue_keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

impl Default for VenueRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Trims, lowercases (ASCII) and maps spaces and underscores to `-`.
pub fn normalize_venue_key(venue: &str) -> String {
    venue
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '_' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// One radius band of a stand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct TierBand {
    pub(crate) inner: f64,
    pub(crate) outer: f64,
}

impl TierBand {
    pub(crate) const fn new(inner: f64, outer: f64) -> Self {
        Self { inner, outer }
    }
}

/// Shared center and stretch of a curved venue.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Bowl {
    pub(crate) center: Point,
    pub(crate) scale: Vec2,
}

impl Bowl {
    pub(crate) fn new(center: Point, scale_x: f64, scale_y: f64) -> Self {
        Self {
            center,
            scale: Vec2::new(scale_x, scale_y),
        }
    }

    pub(crate) fn wedge(&self, band: TierBand, start: f64, end: f64) -> Wedge {
        Wedge::new(self.center, band.inner, band.outer, start, end)
            .with_scale(self.scale.x, self.scale.y)
    }

    /// Maps an `(id, label, start, end)` table to sections in one band.
    pub(crate) fn run(
        &self,
        stand: Stand,
        band: TierBand,
        table: &[(&str, &str, f64, f64)],
    ) -> Vec<Section> {
        table
            .iter()
            .map(|&(id, label, start, end)| {
                Section::wedge(id, label, stand, self.wedge(band, start, end))
            })
            .collect()
    }
}

/// Splits the clockwise sweep `start -> end` into `count` equal `(start, end)` pieces.
///
/// The last piece ends exactly on `end` so neighbouring runs share their edge.
pub(crate) fn partition(start: f64, end: f64, count: usize) -> Vec<(f64, f64)> {
    let count = count.max(1);
    let step = angular_span(start, end) / count_f64(count);
    (0..count)
        .map(|i| {
            let a = normalize_angle(start + step * count_f64(i));
            let b = if i + 1 == count {
                normalize_angle(end)
            } else {
                normalize_angle(start + step * count_f64(i + 1))
            };
            (a, b)
        })
        .collect()
}

#[expect(clippy::cast_precision_loss, reason = "block counts are small")]
fn count_f64(n: usize) -> f64 {
    n as f64
}

/// Numbering direction of blocks along a straight stand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Right,
    Down,
    Left,
    Up,
}

/// Splits a straight stand into `count` equal blocks separated by `gutter`, returned in
/// numbering order.
pub(crate) fn split_band(
    band: Rect,
    count: usize,
    gutter: f64,
    direction: Direction,
) -> Vec<Rect> {
    let count = count.max(1);
    let along_x = matches!(direction, Direction::Left | Direction::Right);
    let length = if along_x { band.width() } else { band.height() };
    let block = (length - gutter * count_f64(count - 1)) / count_f64(count);
    (0..count)
        .map(|i| {
            let slot = match direction {
                Direction::Right | Direction::Down => i,
                Direction::Left | Direction::Up => count - 1 - i,
            };
            let offset = count_f64(slot) * (block + gutter);
            if along_x {
                Rect::new(band.x0 + offset, band.y0, band.x0 + offset + block, band.y1)
            } else {
                Rect::new(band.x0, band.y0 + offset, band.x1, band.y0 + offset + block)
            }
        })
        .collect()
}

/// Stands of a bowl and the angular range each covers, clockwise from the top.
pub(crate) const STAND_RANGES: [(Stand, f64, f64); 4] = [
    (Stand::North, 225.0, 315.0),
    (Stand::East, 315.0, 45.0),
    (Stand::South, 45.0, 135.0),
    (Stand::West, 135.0, 225.0),
];
