// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Properties every shipped venue must hold.

extern crate std;

use alloc::sync::Arc;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};

use crate::{
    DiagramStyle, FIELD_ID_BASE, SectionShape, Stand, VenueLayout, VenueRegistry, angle_in_wedge,
    angle_of, normalize_angle,
};

fn shipped() -> Vec<Arc<VenueLayout>> {
    let registry = VenueRegistry::builtin();
    registry
        .venue_keys()
        .filter_map(|key| registry.get(key).cloned())
        .collect()
}

#[test]
fn every_venue_is_registered() {
    assert_eq!(shipped().len(), 4);
}

#[test]
fn every_venue_validates() {
    for layout in shipped() {
        assert_eq!(layout.validate(), Ok(()), "{}", layout.key());
    }
}

#[test]
fn section_ids_are_unique() {
    for layout in shipped() {
        let mut seen = HashSet::new();
        for s in layout.sections() {
            assert!(seen.insert(s.id.clone()), "{}: duplicate {}", layout.key(), s.id);
        }
    }
}

#[test]
fn wedge_spans_are_positive_and_at_most_a_full_turn() {
    for layout in shipped() {
        for s in layout.sections() {
            if let Some(w) = s.as_wedge() {
                let span = w.span();
                assert!(span > 0.0 && span <= 360.0, "{}: {}", layout.key(), s.id);
                assert_eq!(w.boundary().large_arc, span > 180.0);
            }
        }
    }
}

#[test]
fn wedge_midpoints_stay_inside_their_wedge() {
    for layout in shipped() {
        for s in layout.sections() {
            if let Some(w) = s.as_wedge() {
                assert!(
                    angle_in_wedge(w.mid_angle(), w.start_angle, w.end_angle),
                    "{}: {} mid {}",
                    layout.key(),
                    s.id,
                    w.mid_angle()
                );
            }
        }
    }
}

#[test]
fn adjacent_tiers_share_a_seam() {
    for layout in shipped() {
        let mut bands: HashMap<(Stand, u64, u64), Vec<(f64, f64)>> = HashMap::new();
        for s in layout.sections() {
            if let Some(w) = s.as_wedge() {
                let pivot = (s.stand, w.center.x.to_bits(), w.center.y.to_bits());
                let list = bands.entry(pivot).or_default();
                if !list.contains(&(w.inner_radius, w.outer_radius)) {
                    list.push((w.inner_radius, w.outer_radius));
                }
            }
        }
        for list in bands.values_mut() {
            list.sort_by(|a, b| a.0.total_cmp(&b.0));
            for pair in list.windows(2) {
                assert_eq!(pair[0].1, pair[1].0, "{}: {list:?}", layout.key());
            }
        }
    }
}

#[test]
fn wedge_corners_round_trip_through_atan2() {
    for layout in shipped() {
        for s in layout.sections() {
            let Some(w) = s.as_wedge() else {
                continue;
            };
            let b = w.boundary();
            let start = angle_of(w.center, w.scale, b.outer_start);
            let end = angle_of(w.center, w.scale, b.outer_end);
            let close = |a: f64, b: f64| {
                let d = normalize_angle(a - b);
                d < 1e-6 || 360.0 - d < 1e-6
            };
            assert!(close(start, w.start_angle), "{}: {}", layout.key(), s.id);
            assert!(close(end, w.end_angle), "{}: {}", layout.key(), s.id);
        }
    }
}

#[test]
fn label_anchors_hit_their_own_section() {
    for layout in shipped() {
        for s in layout.sections() {
            let hit = layout.section_at(s.label_anchor).map(|h| h.id.clone());
            assert_eq!(hit.as_deref(), Some(&*s.id), "{}", layout.key());
        }
    }
}

#[test]
fn sections_fit_on_the_canvas() {
    for layout in shipped() {
        let canvas = layout.view_box();
        for s in layout.sections() {
            let bbox = s.shape.bounding_box();
            assert_eq!(canvas.union(bbox), canvas, "{}: {}", layout.key(), s.id);
        }
    }
}

#[test]
fn overlay_never_takes_pointer_input() {
    let style = DiagramStyle::default();
    for layout in shipped() {
        let marks = layout.field().marks(FIELD_ID_BASE, &style);
        assert!(marks.iter().all(|m| !m.is_interactive()), "{}", layout.key());
        assert_eq!(layout.field().captions.len(), 4);
        assert!(layout.section_at(layout.field().surface.center()).is_none());
    }
}

#[test]
fn curved_venues_use_only_wedges_apart_from_generic() {
    for layout in shipped() {
        let rects = layout
            .sections()
            .iter()
            .filter(|s| matches!(s.shape, SectionShape::Rect(_)))
            .count();
        match layout.key() {
            "riverside-bowl" | "eastfield-arena" => assert_eq!(rects, 0),
            "generic" => assert_eq!(rects, layout.sections().len()),
            _ => assert!(rects > 0 && rects < layout.sections().len()),
        }
    }
}

#[test]
fn unknown_identifiers_resolve_to_generic() {
    let registry = VenueRegistry::builtin();
    for venue in ["", "   ", "Wembley", "riverside-bowl-2", "riverside bowl north"] {
        assert_eq!(registry.resolve(venue).key(), "generic", "{venue:?}");
    }
}
