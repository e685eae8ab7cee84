// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kingsway Ground: four straight two-tier stands joined by curved corners.

extern crate alloc;

use alloc::format;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use super::{Bowl, Direction, TierBand, VenueModule, partition, split_band};
use crate::section::{Section, Stand};
use crate::venue::{FieldOverlay, VenueLayout};

const CORNER_LOWER: TierBand = TierBand::new(0.0, 50.0);
const CORNER_UPPER: TierBand = TierBand::new(50.0, 105.0);

/// `(prefix, stand, lower band, upper band, blocks, numbering)`.
const STANDS: [(&str, Stand, Rect, Rect, usize, Direction); 4] = [
    (
        "N",
        Stand::North,
        Rect::new(250.0, 150.0, 750.0, 200.0),
        Rect::new(250.0, 95.0, 750.0, 150.0),
        5,
        Direction::Right,
    ),
    (
        "E",
        Stand::East,
        Rect::new(750.0, 200.0, 800.0, 520.0),
        Rect::new(800.0, 200.0, 855.0, 520.0),
        4,
        Direction::Down,
    ),
    (
        "S",
        Stand::South,
        Rect::new(250.0, 520.0, 750.0, 570.0),
        Rect::new(250.0, 570.0, 750.0, 625.0),
        5,
        Direction::Left,
    ),
    (
        "W",
        Stand::West,
        Rect::new(200.0, 200.0, 250.0, 520.0),
        Rect::new(145.0, 200.0, 200.0, 520.0),
        4,
        Direction::Up,
    ),
];

/// Corner pivots (where two stands meet) and the quarter each corner sweeps.
const CORNERS: [(Point, f64, f64); 4] = [
    (Point::new(750.0, 200.0), 270.0, 0.0),
    (Point::new(750.0, 520.0), 0.0, 90.0),
    (Point::new(250.0, 520.0), 90.0, 180.0),
    (Point::new(250.0, 200.0), 180.0, 270.0),
];

/// Rectangular ground: straight stands along each side, wedge-shaped corner blocks.
#[derive(Clone, Copy, Debug, Default)]
pub struct KingswayGround;

impl VenueModule for KingswayGround {
    fn key(&self) -> &'static str {
        "kingsway-ground"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["kingsway", "kingsway-park"]
    }

    fn layout(&self) -> VenueLayout {
        let mut sections: Vec<Section> = Vec::new();
        for (prefix, stand, lower, upper, blocks, direction) in STANDS {
            for (tier, band) in [("L", lower), ("U", upper)] {
                for (i, rect) in split_band(band, blocks, 0.0, direction)
                    .into_iter()
                    .enumerate()
                {
                    let id = format!("{prefix}{tier}{}", i + 1);
                    sections.push(Section::rect(id.as_str(), id.as_str(), stand, rect, 0.0));
                }
            }
        }

        let mut number = 1;
        for (pivot, start, end) in CORNERS {
            let bowl = Bowl::new(pivot, 1.0, 1.0);
            for band in [CORNER_LOWER, CORNER_UPPER] {
                for (a, b) in partition(start, end, 2) {
                    let id = format!("C{number}");
                    number += 1;
                    sections.push(Section::wedge(
                        id.as_str(),
                        id.as_str(),
                        Stand::Corner,
                        bowl.wedge(band, a, b),
                    ));
                }
            }
        }

        let pitch = Rect::new(260.0, 210.0, 740.0, 510.0);
        let field = FieldOverlay::football(pitch).with_stand_captions(
            Rect::new(120.0, 73.0, 880.0, 647.0),
            ["Kingsway Stand", "Canal End", "Main Stand", "Station End"],
        );

        VenueLayout::builder(self.key(), "Kingsway Ground", Size::new(1000.0, 720.0))
            .sections(sections)
            .field(field)
            .build()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::section::SectionShape;

    #[test]
    fn layout_validates() {
        let layout = KingswayGround.layout();
        assert_eq!(layout.sections().len(), 2 * (5 + 4 + 5 + 4) + 16);
        assert_eq!(layout.validate(), Ok(()));
    }

    #[test]
    fn only_corners_are_curved() {
        let layout = KingswayGround.layout();
        for s in layout.sections() {
            let curved = matches!(s.shape, SectionShape::Wedge(_));
            assert_eq!(curved, s.stand == Stand::Corner, "{}", s.id);
        }
    }

    #[test]
    fn corners_meet_the_straight_stands() {
        let layout = KingswayGround.layout();
        // Just inside the north-east corner, lower ring.
        let hit = layout.section_at(Point::new(765.0, 190.0));
        assert_eq!(hit.map(|s| &*s.id), Some("C2"));
        // Straight stands on either side of it.
        assert_eq!(
            layout.section_at(Point::new(745.0, 190.0)).map(|s| &*s.id),
            Some("NL5")
        );
        assert_eq!(
            layout.section_at(Point::new(760.0, 205.0)).map(|s| &*s.id),
            Some("EL1")
        );
        // Upper ring of the same corner.
        assert_eq!(
            layout.section_at(Point::new(800.0, 130.0)).map(|s| &*s.id),
            Some("C3")
        );
    }
}
