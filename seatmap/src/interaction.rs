// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover and selection state.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use kurbo::Point;

use crate::inventory::SectionAggregates;
use crate::venue::VenueLayout;

/// Transient interaction state of one diagram.
///
/// Hover is ephemeral and cleared on pointer leave. Selection is sticky until the same
/// section is clicked again or it is cleared from outside.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionState {
    /// Section under the pointer, or highlighted from the ticket list.
    pub hovered: Option<String>,
    /// Selected section.
    pub selected: Option<String>,
}

impl InteractionState {
    /// Returns `true` if `id` is hovered.
    pub fn is_hovered(&self, id: &str) -> bool {
        self.hovered.as_deref() == Some(id)
    }

    /// Returns `true` if `id` is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }
}

/// Receives the selection after every selection change (`None` when cleared).
pub type SelectionCallback = Box<dyn FnMut(Option<&str>)>;

/// Owns [`InteractionState`] and reports selection changes.
#[derive(Default)]
pub struct InteractionController {
    state: InteractionState,
    on_section_select: Option<SelectionCallback>,
}

impl fmt::Debug for InteractionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionController")
            .field("state", &self.state)
            .field("on_section_select", &self.on_section_select.is_some())
            .finish()
    }
}

impl InteractionController {
    /// A controller with nothing hovered or selected and no callback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selection callback.
    pub fn with_on_section_select(
        mut self,
        callback: impl FnMut(Option<&str>) + 'static,
    ) -> Self {
        self.on_section_select = Some(Box::new(callback));
        self
    }

    /// Replaces the selection callback.
    pub fn set_on_section_select(&mut self, callback: impl FnMut(Option<&str>) + 'static) {
        self.on_section_select = Some(Box::new(callback));
    }

    /// Current state.
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Hovered section.
    pub fn hovered(&self) -> Option<&str> {
        self.state.hovered.as_deref()
    }

    /// Selected section.
    pub fn selected(&self) -> Option<&str> {
        self.state.selected.as_deref()
    }

    /// Pointer entered a section. Returns `true` if the hover changed.
    pub fn pointer_enter(&mut self, id: &str) -> bool {
        if self.state.is_hovered(id) {
            return false;
        }
        log::trace!("hover -> {id}");
        self.state.hovered = Some(id.into());
        true
    }

    /// Highlight requested from outside (a ticket-list row); `None` clears it.
    pub fn highlight(&mut self, id: Option<&str>) -> bool {
        match id {
            Some(id) => self.pointer_enter(id),
            None => self.pointer_leave(),
        }
    }

    /// Pointer left the hovered section. Returns `true` if the hover changed.
    pub fn pointer_leave(&mut self) -> bool {
        if self.state.hovered.take().is_some() {
            log::trace!("hover cleared");
            true
        } else {
            false
        }
    }

    /// Click on a section: selects it, or clears the selection if it was already selected.
    ///
    /// The pointer is over the clicked section, so hover moves there too. Unavailable
    /// sections don't change the selection. Returns `true` if the selection changed.
    pub fn click(&mut self, id: &str, aggregates: &SectionAggregates) -> bool {
        self.pointer_enter(id);
        if !aggregates.is_available(id) {
            log::trace!("click on unavailable section {id} ignored");
            return false;
        }
        if self.state.is_selected(id) {
            self.apply_selection(None)
        } else {
            self.apply_selection(Some(id))
        }
    }

    /// Pointer moved to `point`: enters the section under it or leaves when there is none.
    pub fn pointer_move(&mut self, point: Point, layout: &VenueLayout) -> bool {
        match layout.section_at(point) {
            Some(section) => self.pointer_enter(&section.id),
            None => self.pointer_leave(),
        }
    }

    /// Click at `point`. Clicks outside every section do nothing.
    pub fn click_at(
        &mut self,
        point: Point,
        layout: &VenueLayout,
        aggregates: &SectionAggregates,
    ) -> bool {
        match layout.section_at(point) {
            Some(section) => self.click(&section.id, aggregates),
            None => false,
        }
    }

    /// Controlled override from outside. Notifies only if the selection actually changed.
    ///
    /// Like a click, an id without tickets in `aggregates` is refused. `None` always clears.
    pub fn set_selected(&mut self, id: Option<&str>, aggregates: &SectionAggregates) -> bool {
        if self.state.selected.as_deref() == id {
            return false;
        }
        if let Some(id) = id.filter(|id| !aggregates.is_available(id)) {
            log::debug!("controlled selection of unavailable section {id} refused");
            return false;
        }
        self.apply_selection(id)
    }

    /// Drops a selection whose section has no tickets in `aggregates`.
    pub fn reconcile(&mut self, aggregates: &SectionAggregates) -> bool {
        match self.state.selected.as_deref() {
            Some(id) if !aggregates.is_available(id) => {
                log::debug!("selected section {id} is no longer available");
                self.apply_selection(None)
            }
            _ => false,
        }
    }

    fn apply_selection(&mut self, id: Option<&str>) -> bool {
        log::trace!("selection -> {id:?}");
        self.state.selected = id.map(String::from);
        if let Some(callback) = self.on_section_select.as_mut() {
            callback(self.state.selected.as_deref());
        }
        true
    }
}
