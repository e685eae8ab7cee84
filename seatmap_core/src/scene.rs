// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained mark set with enter/update/exit diffing.

extern crate alloc;

use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Rect;

use crate::mark::{Mark, MarkId, MarkKind, MarkPayload};

/// A change between two successive mark sets.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// A mark id appeared.
    Enter {
        /// Mark id.
        id: MarkId,
        /// Primitive kind.
        kind: MarkKind,
        /// Paint order.
        z_index: i32,
        /// Caller key, if any.
        key: Option<Arc<str>>,
        /// New content.
        new: Box<MarkPayload>,
        /// New bounds, if known.
        bounds: Option<Rect>,
    },
    /// A mark id was kept but its content, paint order or key changed.
    Update {
        /// Mark id.
        id: MarkId,
        /// Primitive kind (of the new content).
        kind: MarkKind,
        /// Previous paint order.
        old_z_index: i32,
        /// New paint order.
        new_z_index: i32,
        /// Caller key, if any.
        key: Option<Arc<str>>,
        /// Previous content.
        old: Box<MarkPayload>,
        /// New content.
        new: Box<MarkPayload>,
        /// Previous bounds, if known.
        old_bounds: Option<Rect>,
        /// New bounds, if known.
        new_bounds: Option<Rect>,
    },
    /// A mark id disappeared.
    Exit {
        /// Mark id.
        id: MarkId,
        /// Primitive kind.
        kind: MarkKind,
        /// Last paint order.
        z_index: i32,
        /// Last content.
        old: Box<MarkPayload>,
        /// Last bounds, if known.
        bounds: Option<Rect>,
    },
}

impl MarkDiff {
    /// Returns the id of the mark this diff refers to.
    pub fn id(&self) -> MarkId {
        match self {
            Self::Enter { id, .. } | Self::Update { id, .. } | Self::Exit { id, .. } => *id,
        }
    }
}

/// The retained set of marks from the last tick.
#[derive(Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, Mark>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of retained marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if no marks are retained.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Looks up a retained mark.
    pub fn get(&self, id: MarkId) -> Option<&Mark> {
        self.marks.get(&id)
    }

    /// Returns the retained marks in paint order (`z_index`, then id).
    pub fn sorted(&self) -> Vec<&Mark> {
        let mut out: Vec<&Mark> = self.marks.values().collect();
        out.sort_by_key(|m| (m.z_index, m.id));
        out
    }

    /// Replaces the retained set with `marks` and returns what changed.
    ///
    /// Ids missing from `marks` exit. If `marks` repeats an id, the last one wins.
    /// Diffs are ordered by mark id.
    pub fn tick(&mut self, marks: impl IntoIterator<Item = Mark>) -> Vec<MarkDiff> {
        let mut next: HashMap<MarkId, Mark> = HashMap::new();
        for mark in marks {
            next.insert(mark.id, mark);
        }

        let mut diffs = Vec::new();
        for (id, mark) in &next {
            match self.marks.get(id) {
                None => diffs.push(MarkDiff::Enter {
                    id: *id,
                    kind: mark.kind(),
                    z_index: mark.z_index,
                    key: mark.key.clone(),
                    new: Box::new(mark.payload.clone()),
                    bounds: mark.bounds(),
                }),
                Some(old)
                    if old.payload != mark.payload
                        || old.z_index != mark.z_index
                        || old.key != mark.key =>
                {
                    diffs.push(MarkDiff::Update {
                        id: *id,
                        kind: mark.kind(),
                        old_z_index: old.z_index,
                        new_z_index: mark.z_index,
                        key: mark.key.clone(),
                        old: Box::new(old.payload.clone()),
                        new: Box::new(mark.payload.clone()),
                        old_bounds: old.bounds(),
                        new_bounds: mark.bounds(),
                    });
                }
                Some(_) => {}
            }
        }
        for (id, old) in &self.marks {
            if !next.contains_key(id) {
                diffs.push(exit_diff(old));
            }
        }

        diffs.sort_by_key(MarkDiff::id);
        self.marks = next;
        diffs
    }

    /// Drops every retained mark, returning one exit diff per mark.
    pub fn clear(&mut self) -> Vec<MarkDiff> {
        let mut diffs: Vec<MarkDiff> = self.marks.values().map(exit_diff).collect();
        diffs.sort_by_key(MarkDiff::id);
        self.marks.clear();
        diffs
    }
}

fn exit_diff(old: &Mark) -> MarkDiff {
    MarkDiff::Exit {
        id: old.id,
        kind: old.kind(),
        z_index: old.z_index,
        old: Box::new(old.payload.clone()),
        bounds: old.bounds(),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use peniko::color::palette::css;

    use super::*;

    fn block(id: u64, fill: peniko::Color) -> Mark {
        Mark::builder(MarkId::from_raw(id))
            .rect(Rect::new(0.0, 0.0, 10.0, 5.0))
            .fill(fill)
            .key("S1")
            .build()
    }

    #[test]
    fn first_tick_enters_everything() {
        let mut scene = Scene::new();
        let diffs = scene.tick(vec![block(2, css::RED), block(1, css::RED)]);
        assert_eq!(diffs.len(), 2);
        assert_eq!(diffs[0].id(), MarkId::from_raw(1));
        assert!(matches!(diffs[1], MarkDiff::Enter { .. }));
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn unchanged_marks_produce_no_diffs() {
        let mut scene = Scene::new();
        scene.tick(vec![block(1, css::RED)]);
        let diffs = scene.tick(vec![block(1, css::RED)]);
        assert!(diffs.is_empty(), "identical tick should be quiet");
    }

    #[test]
    fn changed_fill_is_an_update_and_missing_ids_exit() {
        let mut scene = Scene::new();
        scene.tick(vec![block(1, css::RED), block(2, css::RED)]);
        let diffs = scene.tick(vec![block(1, css::BLUE)]);
        let [
            MarkDiff::Update {
                id, old, new, key, ..
            },
            MarkDiff::Exit { id: gone, .. },
        ] = &diffs[..]
        else {
            panic!("expected an update then an exit, got {diffs:?}");
        };
        assert_eq!(*id, MarkId::from_raw(1));
        assert_eq!(*gone, MarkId::from_raw(2));
        assert_eq!(key.as_deref(), Some("S1"));
        let (MarkPayload::Rect(o), MarkPayload::Rect(n)) = (&**old, &**new) else {
            panic!("expected rect payloads");
        };
        assert_eq!(o.fill, css::RED.into());
        assert_eq!(n.fill, css::BLUE.into());
    }

    #[test]
    fn key_change_alone_is_an_update() {
        let mut scene = Scene::new();
        scene.tick(vec![block(1, css::RED)]);
        let mut inert = block(1, css::RED);
        inert.key = None;
        let diffs = scene.tick(vec![inert]);
        let [MarkDiff::Update { key, .. }] = &diffs[..] else {
            panic!("expected one update, got {diffs:?}");
        };
        assert_eq!(*key, None);
        let diffs = scene.tick(vec![block(1, css::RED)]);
        assert_eq!(diffs.len(), 1, "key restored");
    }

    #[test]
    fn sorted_orders_by_z_then_id() {
        let mut scene = Scene::new();
        let mut top = block(1, css::RED);
        top.z_index = 5;
        scene.tick(vec![top, block(3, css::RED), block(2, css::RED)]);
        let ids: Vec<u64> = scene.sorted().iter().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn clear_exits_everything() {
        let mut scene = Scene::new();
        scene.tick(vec![block(1, css::RED), block(2, css::RED)]);
        let diffs = scene.clear();
        assert_eq!(diffs.len(), 2);
        assert!(diffs.iter().all(|d| matches!(d, MarkDiff::Exit { .. })));
        assert!(scene.is_empty());
    }
}
