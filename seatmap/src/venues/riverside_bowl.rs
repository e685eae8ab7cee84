// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Riverside Bowl: an oval two-tier bowl with hospitality boxes above the west stand.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use super::{Bowl, TierBand, VenueModule};
use crate::section::Stand;
use crate::venue::{FieldOverlay, VenueLayout};

const LOWER: TierBand = TierBand::new(230.0, 285.0);
const UPPER: TierBand = TierBand::new(285.0, 335.0);
const HOSPITALITY: TierBand = TierBand::new(335.0, 350.0);

type Row = (&'static str, &'static str, f64, f64);

const LOWER_NORTH: [Row; 6] = [
    ("101", "Block 101", 225.0, 240.0),
    ("102", "Block 102", 240.0, 255.0),
    ("103", "Block 103", 255.0, 270.0),
    ("104", "Block 104", 270.0, 285.0),
    ("105", "Block 105", 285.0, 300.0),
    ("106", "Block 106", 300.0, 315.0),
];

const LOWER_EAST: [Row; 6] = [
    ("107", "Block 107", 315.0, 330.0),
    ("108", "Block 108", 330.0, 345.0),
    ("109", "Block 109", 345.0, 0.0),
    ("110", "Block 110", 0.0, 15.0),
    ("111", "Block 111", 15.0, 30.0),
    ("112", "Block 112", 30.0, 45.0),
];

const LOWER_SOUTH: [Row; 6] = [
    ("113", "Block 113", 45.0, 60.0),
    ("114", "Block 114", 60.0, 75.0),
    ("115", "Block 115", 75.0, 90.0),
    ("116", "Block 116", 90.0, 105.0),
    ("117", "Block 117", 105.0, 120.0),
    ("118", "Block 118", 120.0, 135.0),
];

const LOWER_WEST: [Row; 6] = [
    ("119", "Block 119", 135.0, 150.0),
    ("120", "Block 120", 150.0, 165.0),
    ("121", "Block 121", 165.0, 180.0),
    ("122", "Block 122", 180.0, 195.0),
    ("123", "Block 123", 195.0, 210.0),
    ("124", "Block 124", 210.0, 225.0),
];

const UPPER_NORTH: [Row; 5] = [
    ("501", "Block 501", 225.0, 243.0),
    ("502", "Block 502", 243.0, 261.0),
    ("503", "Block 503", 261.0, 279.0),
    ("504", "Block 504", 279.0, 297.0),
    ("505", "Block 505", 297.0, 315.0),
];

const UPPER_EAST: [Row; 5] = [
    ("506", "Block 506", 315.0, 333.0),
    ("507", "Block 507", 333.0, 351.0),
    ("508", "Block 508", 351.0, 9.0),
    ("509", "Block 509", 9.0, 27.0),
    ("510", "Block 510", 27.0, 45.0),
];

const UPPER_SOUTH: [Row; 5] = [
    ("511", "Block 511", 45.0, 63.0),
    ("512", "Block 512", 63.0, 81.0),
    ("513", "Block 513", 81.0, 99.0),
    ("514", "Block 514", 99.0, 117.0),
    ("515", "Block 515", 117.0, 135.0),
];

const UPPER_WEST: [Row; 5] = [
    ("516", "Block 516", 135.0, 153.0),
    ("517", "Block 517", 153.0, 171.0),
    ("518", "Block 518", 171.0, 189.0),
    ("519", "Block 519", 189.0, 207.0),
    ("520", "Block 520", 207.0, 225.0),
];

const BOXES: [Row; 4] = [
    ("H1", "H1", 150.0, 165.0),
    ("H2", "H2", 165.0, 180.0),
    ("H3", "H3", 180.0, 195.0),
    ("H4", "H4", 195.0, 210.0),
];

/// Oval bowl, lower and upper tiers all round, four hospitality boxes on the west side.
#[derive(Clone, Copy, Debug, Default)]
pub struct RiversideBowl;

impl VenueModule for RiversideBowl {
    fn key(&self) -> &'static str {
        "riverside-bowl"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["riverside", "riverside-stadium"]
    }

    fn layout(&self) -> VenueLayout {
        let bowl = Bowl::new(Point::new(500.0, 350.0), 1.35, 0.9);
        let mut sections = Vec::with_capacity(48);
        for (stand, table) in [
            (Stand::North, &LOWER_NORTH[..]),
            (Stand::East, &LOWER_EAST[..]),
            (Stand::South, &LOWER_SOUTH[..]),
            (Stand::West, &LOWER_WEST[..]),
        ] {
            sections.extend(bowl.run(stand, LOWER, table));
        }
        for (stand, table) in [
            (Stand::North, &UPPER_NORTH[..]),
            (Stand::East, &UPPER_EAST[..]),
            (Stand::South, &UPPER_SOUTH[..]),
            (Stand::West, &UPPER_WEST[..]),
        ] {
            sections.extend(bowl.run(stand, UPPER, table));
        }
        sections.extend(bowl.run(Stand::West, HOSPITALITY, &BOXES));

        let pitch = Rect::new(290.0, 214.0, 710.0, 486.0);
        let field = FieldOverlay::football(pitch).with_stand_captions(
            Rect::new(240.0, 178.0, 760.0, 522.0),
            ["North Terrace", "River End", "South Stand", "Town End"],
        );

        VenueLayout::builder(self.key(), "Riverside Bowl", Size::new(1000.0, 700.0))
            .sections(sections)
            .field(field)
            .build()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::geometry::angular_span;

    #[test]
    fn tiers_cover_every_stand_without_gaps() {
        for tier in [
            [&LOWER_NORTH[..], &LOWER_EAST[..], &LOWER_SOUTH[..], &LOWER_WEST[..]],
            [&UPPER_NORTH[..], &UPPER_EAST[..], &UPPER_SOUTH[..], &UPPER_WEST[..]],
        ] {
            let rows: Vec<&Row> = tier.iter().flat_map(|t| t.iter()).collect();
            let total: f64 = rows.iter().map(|r| angular_span(r.2, r.3)).sum();
            assert!((total - 360.0).abs() < 1e-9);
            for pair in rows.windows(2) {
                assert_eq!(pair[0].3, pair[1].2, "{} and {}", pair[0].0, pair[1].0);
            }
            assert_eq!(rows[rows.len() - 1].3, rows[0].2);
        }
    }

    #[test]
    fn layout_validates() {
        let layout = RiversideBowl.layout();
        assert_eq!(layout.sections().len(), 24 + 20 + 4);
        assert_eq!(layout.validate(), Ok(()));
    }

    #[test]
    fn seam_block_label_sits_on_the_right() {
        let layout = RiversideBowl.layout();
        let Some(block) = layout.section("110") else {
            panic!("block 110 missing");
        };
        // 0..15 degrees: right of center, slightly below the horizontal.
        assert!(block.label_anchor.x > 500.0 + 230.0 * 1.35);
        assert!(block.label_anchor.y > 350.0);
        let Some(seam) = layout.section("109") else {
            panic!("block 109 missing");
        };
        assert!(seam.label_anchor.y < 350.0);
        assert!(seam.label_anchor.x > 800.0);
    }

    #[test]
    fn pitch_and_captions_sit_inside_the_lower_tier() {
        let layout = RiversideBowl.layout();
        let field = layout.field();
        let corner = Point::new(field.surface.x0, field.surface.y0);
        assert!(layout.section_at(corner).is_none());
        for caption in &field.captions {
            assert!(layout.section_at(caption.pos).is_none(), "{}", caption.text);
        }
    }
}
