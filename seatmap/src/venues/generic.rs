// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generic fallback: straight blocks around a rectangular pitch.

extern crate alloc;

use alloc::format;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use super::{Direction, VenueModule, split_band};
use crate::section::{Section, Stand};
use crate::venue::{FieldOverlay, VenueLayout};

/// Upper bound on blocks per side; beyond this blocks become slivers.
pub const MAX_BLOCKS_PER_SIDE: usize = 40;

/// Distance between the outside of the stands and the stand captions.
const CAPTION_MARGIN: f64 = 22.0;

/// Parameters of the generic layout.
///
/// The default matches the usual fallback: five blocks per side plus four corner blocks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenericLayoutSpec {
    /// Coordinate space size.
    pub canvas_size: Size,
    /// Pitch size; the pitch is centered on the canvas.
    pub pitch_size: Size,
    /// Depth of each stand.
    pub stand_depth: f64,
    /// Space between the pitch and the stands.
    pub stand_gap: f64,
    /// Space between neighbouring blocks.
    pub gutter: f64,
    /// Blocks along each side, clamped to `1..=MAX_BLOCKS_PER_SIDE`.
    pub blocks_per_side: usize,
    /// Edge length of the square corner blocks.
    pub corner_size: f64,
    /// Corner radius of every block.
    pub corner_radius: f64,
}

impl Default for GenericLayoutSpec {
    fn default() -> Self {
        Self {
            canvas_size: Size::new(1000.0, 700.0),
            pitch_size: Size::new(500.0, 300.0),
            stand_depth: 80.0,
            stand_gap: 12.0,
            gutter: 4.0,
            blocks_per_side: 5,
            corner_size: 40.0,
            corner_radius: 6.0,
        }
    }
}

impl GenericLayoutSpec {
    /// Sets the canvas size.
    pub fn with_canvas_size(mut self, size: Size) -> Self {
        self.canvas_size = size;
        self
    }

    /// Sets the pitch size.
    pub fn with_pitch_size(mut self, size: Size) -> Self {
        self.pitch_size = size;
        self
    }

    /// Sets the number of blocks per side.
    pub fn with_blocks_per_side(mut self, count: usize) -> Self {
        self.blocks_per_side = count;
        self
    }

    /// Sets the stand depth.
    pub fn with_stand_depth(mut self, depth: f64) -> Self {
        self.stand_depth = depth;
        self
    }

    /// Sets the corner block size.
    pub fn with_corner_size(mut self, size: f64) -> Self {
        self.corner_size = size;
        self
    }

    /// The pitch rectangle.
    pub fn pitch(&self) -> Rect {
        let c = self.canvas_size.to_rect().center();
        Rect::from_center_size(c, self.pitch_size)
    }

    /// Builds the layout. Blocks are numbered clockwise: north left to right, east top to
    /// bottom, south right to left, west bottom to top. Corner blocks sit between stands.
    pub fn build(&self) -> VenueLayout {
        let n = self.blocks_per_side.clamp(1, MAX_BLOCKS_PER_SIDE);
        let pitch = self.pitch();
        let near = self.stand_gap;
        let far = self.stand_gap + self.stand_depth;

        let north = Rect::new(pitch.x0, pitch.y0 - far, pitch.x1, pitch.y0 - near);
        let east = Rect::new(pitch.x1 + near, pitch.y0, pitch.x1 + far, pitch.y1);
        let south = Rect::new(pitch.x0, pitch.y1 + near, pitch.x1, pitch.y1 + far);
        let west = Rect::new(pitch.x0 - far, pitch.y0, pitch.x0 - near, pitch.y1);

        let mid = (near + far) / 2.0;
        let corner = |dx: f64, dy: f64| {
            let c = Point::new(
                if dx < 0.0 { pitch.x0 - mid } else { pitch.x1 + mid },
                if dy < 0.0 { pitch.y0 - mid } else { pitch.y1 + mid },
            );
            Rect::from_center_size(c, Size::new(self.corner_size, self.corner_size))
        };

        let mut sections = Vec::with_capacity(4 * n + 4);
        sections.extend(self.side("N", Stand::North, north, n, Direction::Right));
        sections.push(self.corner_block("NE", corner(1.0, -1.0)));
        sections.extend(self.side("E", Stand::East, east, n, Direction::Down));
        sections.push(self.corner_block("SE", corner(1.0, 1.0)));
        sections.extend(self.side("S", Stand::South, south, n, Direction::Left));
        sections.push(self.corner_block("SW", corner(-1.0, 1.0)));
        sections.extend(self.side("W", Stand::West, west, n, Direction::Up));
        sections.push(self.corner_block("NW", corner(-1.0, -1.0)));

        let frame = pitch.inflate(far + CAPTION_MARGIN, far + CAPTION_MARGIN);
        let field = FieldOverlay::football(pitch).with_stand_captions(
            frame,
            ["North Stand", "East Stand", "South Stand", "West Stand"],
        );

        VenueLayout::builder("generic", "Stadium", self.canvas_size)
            .sections(sections)
            .field(field)
            .build()
    }

    fn side(
        &self,
        prefix: &str,
        stand: Stand,
        band: Rect,
        count: usize,
        direction: Direction,
    ) -> Vec<Section> {
        split_band(band, count, self.gutter, direction)
            .into_iter()
            .enumerate()
            .map(|(i, rect)| {
                let id = format!("{prefix}{}", i + 1);
                Section::rect(id.as_str(), id.as_str(), stand, rect, self.corner_radius)
            })
            .collect()
    }

    fn corner_block(&self, id: &str, rect: Rect) -> Section {
        Section::rect(id, id, Stand::Corner, rect, self.corner_radius)
    }
}

/// The generic fallback venue.
#[derive(Clone, Copy, Debug, Default)]
pub struct GenericVenue {
    spec: GenericLayoutSpec,
}

impl GenericVenue {
    /// A generic venue with custom parameters.
    pub fn new(spec: GenericLayoutSpec) -> Self {
        Self { spec }
    }
}

impl VenueModule for GenericVenue {
    fn key(&self) -> &'static str {
        "generic"
    }

    fn layout(&self) -> VenueLayout {
        self.spec.build()
    }
}
