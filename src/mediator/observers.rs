//! The observers and listeners the mediator installs on its collaborators.
//!
//! Three pieces, mirroring the three registrations `attach()` performs:
//!
//! - [`StripSyncObserver`]: the page→tab direction. Interprets the pager's
//!   scroll-state/progress/selection stream and drives the strip's low-level
//!   operations. The decision rules live in three pure functions so the
//!   state-machine table is testable without collaborators.
//! - [`PagerNavigationListener`]: the tab→page direction. Navigates the
//!   pager to a selected tab's index, animated.
//! - [`RefreshObserver`]: the adapter→strip direction. Repopulates the strip
//!   on any adapter change when auto-refresh is enabled.
//!
//! `StripSyncObserver` and `RefreshObserver` hold their collaborators
//! weakly: the pager's and adapter's observer registries must not extend the
//! strip's lifetime, so each callback checks liveness and bails out once a
//! collaborator is gone.

use crate::mediator::mediator::{repopulate, TabConfigurer};
use crate::pager::{AdapterEvent, AdapterObserver, PageChangeObserver, PagedContainer, PagerAdapter, ScrollState};
use crate::strip::TabStrip;
use std::cell::Cell;
use std::rc::{Rc, Weak};

/// Whether a progress event may move the selected-tab label.
///
/// Suppressed only while settling for a reason other than a released drag: a
/// programmatic jump sets the target label directly from the selection event,
/// so live label tracking during its settle animation would fight it.
pub(crate) fn updates_label(previous: ScrollState, current: ScrollState) -> bool {
    !(current == ScrollState::Settling && previous != ScrollState::Dragging)
}

/// Whether a progress event may move the indicator.
///
/// Suppressed while settling from idle: that settle comes from a programmatic
/// navigation whose selection event animates the indicator itself, and the
/// interpolation ticks must not double-drive it.
pub(crate) fn updates_indicator(previous: ScrollState, current: ScrollState) -> bool {
    !(current == ScrollState::Settling && previous == ScrollState::Idle)
}

/// Whether a selection event animates the indicator.
///
/// Animated only when the pager is not being dragged or settling from a
/// drag; in those cases the progress events already carry the indicator.
pub(crate) fn animates_indicator_on_selection(
    previous: ScrollState,
    current: ScrollState,
) -> bool {
    current == ScrollState::Idle
        || (current == ScrollState::Settling && previous == ScrollState::Idle)
}

/// Page observer keeping the strip in lock-step with the pager.
pub(crate) struct StripSyncObserver {
    strip: Weak<TabStrip>,
    previous_state: Cell<ScrollState>,
    current_state: Cell<ScrollState>,
}

impl StripSyncObserver {
    pub(crate) fn new(strip: &Rc<TabStrip>) -> Self {
        Self {
            strip: Rc::downgrade(strip),
            previous_state: Cell::new(ScrollState::Idle),
            current_state: Cell::new(ScrollState::Idle),
        }
    }
}

impl PageChangeObserver for StripSyncObserver {
    fn on_scroll_state_changed(&self, state: ScrollState) {
        self.previous_state.set(self.current_state.get());
        self.current_state.set(state);
    }

    fn on_page_scrolled(&self, position: usize, offset: f32, _offset_px: i32) {
        let Some(strip) = self.strip.upgrade() else {
            return;
        };
        if position >= strip.tab_count() {
            tracing::debug!(position, "progress beyond strip range ignored");
            return;
        }

        let previous = self.previous_state.get();
        let current = self.current_state.get();
        let update_label = updates_label(previous, current);
        let update_indicator = updates_indicator(previous, current);
        if let Err(err) = strip.set_scroll_position(position, offset, update_label, update_indicator)
        {
            panic!("tab strip rejected scroll sync at {position}: {err}");
        }
    }

    fn on_page_selected(&self, position: usize) {
        let Some(strip) = self.strip.upgrade() else {
            return;
        };
        if strip.selected_index() == Some(position) || position >= strip.tab_count() {
            return;
        }

        let animate = animates_indicator_on_selection(
            self.previous_state.get(),
            self.current_state.get(),
        );
        if let Err(err) = strip.select_tab(position, animate) {
            panic!("tab strip rejected selection sync at {position}: {err}");
        }
    }
}

/// Tab-selection listener navigating the pager to the selected tab.
pub(crate) struct PagerNavigationListener {
    pager: Rc<PagedContainer>,
}

impl PagerNavigationListener {
    pub(crate) fn new(pager: Rc<PagedContainer>) -> Self {
        Self { pager }
    }
}

impl crate::strip::TabSelectedListener for PagerNavigationListener {
    fn on_tab_selected(&self, position: usize) {
        self.pager.set_current_item(position, true);
    }
}

/// Adapter observer repopulating the strip on any data change.
pub(crate) struct RefreshObserver {
    strip: Weak<TabStrip>,
    pager: Weak<PagedContainer>,
    adapter: Weak<dyn PagerAdapter>,
    configurer: Rc<dyn TabConfigurer>,
}

impl RefreshObserver {
    pub(crate) fn new(
        strip: &Rc<TabStrip>,
        pager: &Rc<PagedContainer>,
        adapter: &Rc<dyn PagerAdapter>,
        configurer: Rc<dyn TabConfigurer>,
    ) -> Self {
        Self {
            strip: Rc::downgrade(strip),
            pager: Rc::downgrade(pager),
            adapter: Rc::downgrade(adapter),
            configurer,
        }
    }
}

impl AdapterObserver for RefreshObserver {
    fn on_pages_changed(&self, event: &AdapterEvent) {
        let (Some(strip), Some(pager), Some(adapter)) = (
            self.strip.upgrade(),
            self.pager.upgrade(),
            self.adapter.upgrade(),
        ) else {
            return;
        };

        tracing::debug!(?event, "adapter changed, repopulating tabs");
        if let Err(err) = repopulate(&strip, &pager, adapter.as_ref(), self.configurer.as_ref()) {
            panic!("tab repopulation failed after adapter change: {err}");
        }
    }
}
