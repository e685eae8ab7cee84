// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binding live ticket inventory to layout sections.
//!
//! Listings are grouped by section key and reduced to one [`SectionAggregate`] per section:
//! the minimum price, the summed ticket count and the display name of the first listing.
//! Aggregates are rebuilt from scratch for every inventory snapshot.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::venue::VenueLayout;

/// One ticket listing as supplied by the marketplace.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Listing {
    /// Matched against [`Section::id`](crate::Section::id).
    pub section_key: String,
    /// Source label for the section; may differ from the diagram's own label.
    pub display_name: String,
    /// Price per ticket.
    pub price: f64,
    /// Tickets in this listing.
    pub count: u32,
}

impl Listing {
    /// Creates a listing.
    pub fn new(
        section_key: impl Into<String>,
        display_name: impl Into<String>,
        price: f64,
        count: u32,
    ) -> Self {
        Self {
            section_key: section_key.into(),
            display_name: display_name.into(),
            price,
            count,
        }
    }

    /// Returns `true` if the listing belongs in a ticket list filtered by `selected`.
    ///
    /// No selection matches everything.
    pub fn matches(&self, selected: Option<&str>) -> bool {
        selected.is_none_or(|id| self.section_key == id)
    }
}

/// Pre-aggregated inventory for one section key.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionSummary {
    /// Matched against [`Section::id`](crate::Section::id).
    pub section_key: String,
    /// Source label.
    pub display_name: String,
    /// Cheapest ticket.
    pub min_price: f64,
    /// Tickets available.
    pub ticket_count: u32,
}

/// Derived availability of one section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionAggregate {
    /// The matched section id.
    pub section_id: Arc<str>,
    /// Display name of the first listing in the group.
    pub display_name: String,
    /// Cheapest ticket.
    pub min_price: f64,
    /// Total tickets.
    pub ticket_count: u32,
}

/// Per-section aggregates for one inventory snapshot.
///
/// Only sections with at least one valid listing have an entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionAggregates {
    by_section: HashMap<Arc<str>, SectionAggregate>,
    unmatched: Vec<String>,
    price_range: Option<(f64, f64)>,
}

impl SectionAggregates {
    /// An empty snapshot: every section is unavailable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups `listings` by section key against `layout`.
    pub fn from_listings<'a>(
        layout: &VenueLayout,
        listings: impl IntoIterator<Item = &'a Listing>,
    ) -> Self {
        Self::fold(
            layout,
            listings.into_iter().map(|l| Row {
                key: &l.section_key,
                display_name: &l.display_name,
                price: l.price,
                count: l.count,
            }),
        )
    }

    /// Merges pre-aggregated summaries against `layout`. Repeated keys combine with the same
    /// min/sum rule as listings.
    pub fn from_summaries<'a>(
        layout: &VenueLayout,
        summaries: impl IntoIterator<Item = &'a SectionSummary>,
    ) -> Self {
        Self::fold(
            layout,
            summaries.into_iter().map(|s| Row {
                key: &s.section_key,
                display_name: &s.display_name,
                price: s.min_price,
                count: s.ticket_count,
            }),
        )
    }

    fn fold<'a>(layout: &VenueLayout, rows: impl Iterator<Item = Row<'a>>) -> Self {
        let mut out = Self::default();
        for row in rows {
            if !row.price.is_finite() || row.price < 0.0 || row.count == 0 {
                log::trace!(
                    "skipping listing for `{}`: price {}, count {}",
                    row.key,
                    row.price,
                    row.count
                );
                continue;
            }
            let Some(section) = layout.section(row.key) else {
                if !out.unmatched.iter().any(|k| k == row.key) {
                    log::debug!(
                        "inventory key `{}` has no section in `{}`",
                        row.key,
                        layout.key()
                    );
                    out.unmatched.push(row.key.into());
                }
                continue;
            };
            out.by_section
                .entry(section.id.clone())
                .and_modify(|agg| {
                    agg.min_price = agg.min_price.min(row.price);
                    agg.ticket_count = agg.ticket_count.saturating_add(row.count);
                })
                .or_insert_with(|| SectionAggregate {
                    section_id: section.id.clone(),
                    display_name: row.display_name.into(),
                    min_price: row.price,
                    ticket_count: row.count,
                });
        }
        out.price_range = out.by_section.values().fold(None, |range, agg| {
            let p = agg.min_price;
            Some(match range {
                None => (p, p),
                Some((lo, hi)) => (lo.min(p), hi.max(p)),
            })
        });
        out
    }

    /// Aggregate for a section.
    pub fn get(&self, section_id: &str) -> Option<&SectionAggregate> {
        self.by_section.get(section_id)
    }

    /// Returns `true` if the section has tickets.
    pub fn is_available(&self, section_id: &str) -> bool {
        self.by_section.contains_key(section_id)
    }

    /// Cheapest and most expensive `min_price` across sections.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        self.price_range
    }

    /// Where a section's `min_price` sits in [`price_range`](Self::price_range), in
    /// `[0, 1]`. A single price level maps to `0`.
    pub fn relative_price(&self, section_id: &str) -> Option<f64> {
        let agg = self.get(section_id)?;
        let (lo, hi) = self.price_range?;
        if hi - lo <= f64::EPSILON {
            return Some(0.0);
        }
        Some((agg.min_price - lo) / (hi - lo))
    }

    /// Number of available sections.
    pub fn len(&self) -> usize {
        self.by_section.len()
    }

    /// Returns `true` if no section has tickets.
    pub fn is_empty(&self) -> bool {
        self.by_section.is_empty()
    }

    /// Aggregates in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &SectionAggregate> {
        self.by_section.values()
    }

    /// Inventory keys that matched no section, in first-seen order.
    pub fn unmatched_keys(&self) -> &[String] {
        &self.unmatched
    }
}

struct Row<'a> {
    key: &'a str,
    display_name: &'a str,
    price: f64,
    count: u32,
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::{Rect, Size};

    use super::*;
    use crate::section::{Section, Stand};

    fn layout() -> VenueLayout {
        let block = |id: &str, x: f64| {
            Section::rect(id, id, Stand::North, Rect::new(x, 0.0, x + 50.0, 40.0), 0.0)
        };
        VenueLayout::builder("t", "T", Size::new(200.0, 100.0))
            .section(block("A", 0.0))
            .section(block("B", 50.0))
            .section(block("C", 100.0))
            .build()
    }

    #[test]
    fn groups_by_key_with_min_price_and_summed_count() {
        let listings = [
            Listing::new("A", "Block A", 50.0, 2),
            Listing::new("A", "Block A (resale)", 30.0, 1),
            Listing::new("B", "Block B", 100.0, 1),
        ];
        let aggs = SectionAggregates::from_listings(&layout(), &listings);
        assert_eq!(aggs.len(), 2);
        let Some(a) = aggs.get("A") else {
            panic!("A missing");
        };
        assert_eq!(a.min_price, 30.0);
        assert_eq!(a.ticket_count, 3);
        assert_eq!(a.display_name, "Block A");
        let Some(b) = aggs.get("B") else {
            panic!("B missing");
        };
        assert_eq!(b.min_price, 100.0);
        assert_eq!(b.ticket_count, 1);
        assert!(!aggs.is_available("C"));
    }

    #[test]
    fn unmatched_keys_are_dropped_and_reported() {
        let listings = [
            Listing::new("Z", "Somewhere", 10.0, 4),
            Listing::new("a", "lowercase", 10.0, 4),
            Listing::new("Z", "Somewhere", 12.0, 1),
        ];
        let aggs = SectionAggregates::from_listings(&layout(), &listings);
        assert!(aggs.is_empty());
        assert_eq!(aggs.unmatched_keys(), ["Z", "a"]);
    }

    #[test]
    fn invalid_listings_never_make_a_section_available() {
        let listings = [
            Listing::new("A", "A", f64::NAN, 2),
            Listing::new("A", "A", -1.0, 2),
            Listing::new("B", "B", 20.0, 0),
            Listing::new("C", "C", 20.0, 1),
        ];
        let aggs = SectionAggregates::from_listings(&layout(), &listings);
        assert!(!aggs.is_available("A"));
        assert!(!aggs.is_available("B"));
        assert!(aggs.is_available("C"));
    }

    #[test]
    fn summaries_merge_like_listings() {
        let summaries = [
            SectionSummary {
                section_key: "A".into(),
                display_name: "Lower A".into(),
                min_price: 80.0,
                ticket_count: 6,
            },
            SectionSummary {
                section_key: "A".into(),
                display_name: "A".into(),
                min_price: 65.0,
                ticket_count: 2,
            },
            SectionSummary {
                section_key: "C".into(),
                display_name: "C".into(),
                min_price: 120.0,
                ticket_count: 1,
            },
        ];
        let aggs = SectionAggregates::from_summaries(&layout(), &summaries);
        let Some(a) = aggs.get("A") else {
            panic!("A missing");
        };
        assert_eq!((a.min_price, a.ticket_count), (65.0, 8));
        assert_eq!(a.display_name, "Lower A");
        assert_eq!(aggs.price_range(), Some((65.0, 120.0)));
        assert_eq!(aggs.relative_price("A"), Some(0.0));
        assert_eq!(aggs.relative_price("C"), Some(1.0));
        assert_eq!(aggs.relative_price("B"), None);
    }

    #[test]
    fn single_price_level_is_relative_zero() {
        let listings = [Listing::new("B", "B", 40.0, 1), Listing::new("C", "C", 40.0, 3)];
        let aggs = SectionAggregates::from_listings(&layout(), &listings);
        assert_eq!(aggs.relative_price("C"), Some(0.0));
    }

    #[test]
    fn empty_snapshot_has_no_price_range() {
        let aggs = SectionAggregates::from_listings(&layout(), &[Listing::new("A", "A", 5.0, 0)]);
        assert_eq!(aggs.price_range(), None);
        assert_eq!(aggs.relative_price("A"), None);
        assert_eq!(SectionAggregates::new().price_range(), None);
    }

    #[test]
    fn listing_filter_follows_selection() {
        let l = Listing::new("A", "A", 10.0, 1);
        assert!(l.matches(None));
        assert!(l.matches(Some("A")));
        assert!(!l.matches(Some("B")));
    }
}
