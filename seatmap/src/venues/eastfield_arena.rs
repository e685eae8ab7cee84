// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Eastfield Arena: a round two-tier indoor arena around a court.

extern crate alloc;

use alloc::format;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use super::{Bowl, STAND_RANGES, TierBand, VenueModule, partition};
use crate::section::{Section, Stand};
use crate::venue::{FieldOverlay, VenueLayout};

const LOWER: TierBand = TierBand::new(200.0, 255.0);
const UPPER: TierBand = TierBand::new(255.0, 330.0);

/// `(band, blocks per stand, first block number)`.
const TIERS: [(TierBand, usize, usize); 2] = [(LOWER, 8, 11), (UPPER, 6, 61)];

fn stand_code(stand: Stand) -> &'static str {
    match stand {
        Stand::North => "NB",
        Stand::East => "EB",
        Stand::South => "SB",
        Stand::West => "WB",
        Stand::Corner => "CB",
    }
}

/// Round arena: eight lower and six upper blocks per side, numbered per stand.
#[derive(Clone, Copy, Debug, Default)]
pub struct EastfieldArena;

impl VenueModule for EastfieldArena {
    fn key(&self) -> &'static str {
        "eastfield-arena"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["eastfield"]
    }

    fn layout(&self) -> VenueLayout {
        let bowl = Bowl::new(Point::new(400.0, 400.0), 1.0, 1.0);
        let mut sections: Vec<Section> = Vec::new();
        for (band, blocks, first) in TIERS {
            for (stand, start, end) in STAND_RANGES {
                let code = stand_code(stand);
                for (i, (a, b)) in partition(start, end, blocks).into_iter().enumerate() {
                    let number = first + i;
                    sections.push(Section::wedge(
                        format!("{code}{number}"),
                        format!("{code} {number}"),
                        stand,
                        bowl.wedge(band, a, b),
                    ));
                }
            }
        }

        let court = Rect::new(250.0, 315.0, 550.0, 485.0);
        let field = FieldOverlay::court(court).with_stand_captions(
            Rect::new(225.0, 257.0, 575.0, 543.0),
            ["North", "East", "South", "West"],
        );

        VenueLayout::builder(self.key(), "Eastfield Arena", Size::new(800.0, 800.0))
            .sections(sections)
            .field(field)
            .build()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn layout_validates() {
        let layout = EastfieldArena.layout();
        assert_eq!(layout.sections().len(), 4 * 8 + 4 * 6);
        assert_eq!(layout.validate(), Ok(()));
    }

    #[test]
    fn blocks_are_numbered_per_stand() {
        let layout = EastfieldArena.layout();
        for id in ["NB11", "NB18", "EB11", "SB18", "WB61", "WB66"] {
            assert!(layout.section(id).is_some(), "{id}");
        }
        assert!(layout.section("NB19").is_none());
        assert_eq!(
            layout.section("NB65").map(|s| s.label.as_str()),
            Some("NB 65")
        );
    }

    #[test]
    fn upper_tier_starts_where_lower_ends() {
        let layout = EastfieldArena.layout();
        let lower_outer = layout
            .sections()
            .iter()
            .filter_map(|s| s.as_wedge())
            .filter(|w| w.inner_radius == LOWER.inner)
            .map(|w| w.outer_radius)
            .fold(f64::MIN, f64::max);
        let upper_inner = layout
            .sections()
            .iter()
            .filter_map(|s| s.as_wedge())
            .filter(|w| w.outer_radius == UPPER.outer)
            .map(|w| w.inner_radius)
            .fold(f64::MAX, f64::min);
        assert_eq!(lower_outer, upper_inner);
    }

    #[test]
    fn hit_test_finds_the_east_seam_block() {
        let layout = EastfieldArena.layout();
        // Just above the horizontal on the right, lower tier.
        let hit = layout.section_at(Point::new(400.0 + 220.0, 399.0));
        assert_eq!(hit.map(|s| &*s.id), Some("EB14"));
        let hit = layout.section_at(Point::new(400.0 + 220.0, 401.0));
        assert_eq!(hit.map(|s| &*s.id), Some("EB15"));
        assert!(layout.section_at(Point::new(400.0, 400.0)).is_none());
    }
}
