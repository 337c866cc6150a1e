//! The tab strip collaborator: ordered tabs, selection and indicator state.
//!
//! [`TabStrip`] is a headless model of a horizontal strip of selectable tabs.
//! It owns the three pieces of state the mediator synchronizes against the
//! pager: the ordered tab list, the selected tab (at most one, or none while
//! the strip is empty) and the fractional indicator position.
//!
//! The strip is shared as `Rc<TabStrip>` between its owner and the mediator.
//! All methods take `&self`; interior mutability keeps mutation and listener
//! dispatch strictly separated, so listeners may call back into the strip
//! re-entrantly.
//!
//! Two low-level operations, [`TabStrip::set_scroll_position`] and
//! [`TabStrip::select_tab`], form the narrow capability surface the mediator
//! drives during synchronization. Both validate their tab range and fail with
//! [`TabSyncError::TabOutOfRange`] instead of silently degrading.

use crate::domain::{Result, TabSyncError};
use crate::strip::tab::Tab;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// How the indicator last moved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndicatorMotion {
    /// The indicator was positioned directly, without animation. Drag
    /// interpolation and the attach-time re-sync move it this way.
    #[default]
    Jump,

    /// The indicator was animated towards a tab by a selection.
    Animated,
}

/// Fractional indicator position between two adjacent tabs.
///
/// `offset` interpolates between `anchor` and `anchor + 1`; an offset of zero
/// means the indicator rests exactly under `anchor`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IndicatorPosition {
    /// Index of the tab the indicator is anchored at.
    pub anchor: usize,
    /// Fraction of the way towards the next tab, in `[0, 1]`.
    pub offset: f32,
    /// How the indicator arrived at this position.
    pub motion: IndicatorMotion,
}

/// Opaque handle identifying a registered [`TabSelectedListener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabListenerId(u64);

/// Notifications about tab selection changes.
///
/// Dispatch happens after the strip's own state is updated, on a snapshot of
/// the listener registry, so implementations may query the strip or
/// (un)register listeners from inside a callback.
pub trait TabSelectedListener {
    /// A tab became the selected tab.
    fn on_tab_selected(&self, position: usize);

    /// The previously selected tab lost its selection.
    fn on_tab_unselected(&self, _position: usize) {}

    /// The already selected tab was selected again.
    fn on_tab_reselected(&self, _position: usize) {}
}

#[derive(Debug, Default)]
struct StripState {
    tabs: Vec<Tab>,
    selected: Option<usize>,
    indicator: IndicatorPosition,
}

/// A strip of selectable tabs with a fractional selection indicator.
///
/// # Example
///
/// ```
/// use tabsync::{Tab, TabStrip};
///
/// let strip = TabStrip::new();
/// strip.push_tab(Tab::with_label("Home"));
/// strip.push_tab(Tab::with_label("Categories"));
///
/// strip.select_tab(1, true)?;
/// assert_eq!(strip.selected_index(), Some(1));
/// # Ok::<(), tabsync::TabSyncError>(())
/// ```
pub struct TabStrip {
    state: RefCell<StripState>,
    listeners: RefCell<Vec<(TabListenerId, Rc<dyn TabSelectedListener>)>>,
    next_listener_id: Cell<u64>,
}

impl TabStrip {
    /// Creates an empty strip, shared between its owner and the mediator.
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(StripState::default()),
            listeners: RefCell::new(Vec::new()),
            next_listener_id: Cell::new(0),
        })
    }

    /// Number of tabs currently in the strip.
    #[must_use]
    pub fn tab_count(&self) -> usize {
        self.state.borrow().tabs.len()
    }

    /// Returns a copy of the tab at `position`, if it exists.
    #[must_use]
    pub fn tab_at(&self, position: usize) -> Option<Tab> {
        self.state.borrow().tabs.get(position).cloned()
    }

    /// Labels of all tabs, in order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.state
            .borrow()
            .tabs
            .iter()
            .map(|tab| tab.label().to_string())
            .collect()
    }

    /// Index of the selected tab, or `None` while the strip is empty or
    /// freshly cleared.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.state.borrow().selected
    }

    /// Current indicator position.
    #[must_use]
    pub fn indicator(&self) -> IndicatorPosition {
        self.state.borrow().indicator
    }

    /// Appends a tab without changing the selection or animating the
    /// indicator.
    pub fn push_tab(&self, tab: Tab) {
        self.state.borrow_mut().tabs.push(tab);
    }

    /// Removes all tabs and resets selection and indicator.
    ///
    /// No listener notifications are dispatched; repopulation re-selects
    /// explicitly afterwards.
    pub fn clear_tabs(&self) {
        let mut state = self.state.borrow_mut();
        state.tabs.clear();
        state.selected = None;
        state.indicator = IndicatorPosition::default();
    }

    /// Registers a selection listener and returns its removal handle.
    pub fn add_listener(&self, listener: Rc<dyn TabSelectedListener>) -> TabListenerId {
        let id = TabListenerId(self.next_listener_id.get());
        self.next_listener_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    /// Removes a previously registered selection listener.
    pub fn remove_listener(&self, id: TabListenerId) {
        self.listeners
            .borrow_mut()
            .retain(|(listener_id, _)| *listener_id != id);
    }

    /// Positions the indicator fractionally between `position` and
    /// `position + 1`.
    ///
    /// This is the low-level operation behind drag interpolation. When
    /// `update_indicator` is set the indicator jumps directly to
    /// `(position, offset)`; when `update_label` is set the selected tab
    /// follows the nearest index, `round(position + offset)`, without
    /// notifying listeners.
    ///
    /// # Errors
    ///
    /// [`TabSyncError::TabOutOfRange`] when `position` does not name an
    /// existing tab.
    pub fn set_scroll_position(
        &self,
        position: usize,
        offset: f32,
        update_label: bool,
        update_indicator: bool,
    ) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let count = state.tabs.len();
        if position >= count {
            return Err(TabSyncError::TabOutOfRange { position, count });
        }

        let offset = offset.clamp(0.0, 1.0);
        if update_indicator {
            state.indicator = IndicatorPosition {
                anchor: position,
                offset,
                motion: IndicatorMotion::Jump,
            };
        }
        if update_label {
            let nearest = ((position as f32 + offset).round() as usize).min(count - 1);
            state.selected = Some(nearest);
        }
        tracing::trace!(
            position,
            offset,
            update_label,
            update_indicator,
            "strip scroll position set"
        );
        Ok(())
    }

    /// Marks the tab at `position` as selected and notifies listeners.
    ///
    /// Selecting the already selected tab dispatches only
    /// [`TabSelectedListener::on_tab_reselected`]. Otherwise the previous
    /// selection (if any) receives `on_tab_unselected`, then the new one
    /// `on_tab_selected`. When `update_indicator` is set the indicator is
    /// animated to rest under the tab; when unset it is left untouched so a
    /// concurrent drag interpolation stays in charge of it.
    ///
    /// # Errors
    ///
    /// [`TabSyncError::TabOutOfRange`] when `position` does not name an
    /// existing tab.
    pub fn select_tab(&self, position: usize, update_indicator: bool) -> Result<()> {
        let previous = {
            let mut state = self.state.borrow_mut();
            let count = state.tabs.len();
            if position >= count {
                return Err(TabSyncError::TabOutOfRange { position, count });
            }

            let previous = state.selected;
            state.selected = Some(position);
            if update_indicator {
                state.indicator = IndicatorPosition {
                    anchor: position,
                    offset: 0.0,
                    motion: IndicatorMotion::Animated,
                };
            }
            previous
        };

        if previous == Some(position) {
            tracing::trace!(position, "tab reselected");
            for listener in self.snapshot_listeners() {
                listener.on_tab_reselected(position);
            }
            return Ok(());
        }

        tracing::trace!(?previous, position, update_indicator, "tab selected");
        let listeners = self.snapshot_listeners();
        if let Some(previous) = previous {
            for listener in &listeners {
                listener.on_tab_unselected(previous);
            }
        }
        for listener in &listeners {
            listener.on_tab_selected(position);
        }
        Ok(())
    }

    fn snapshot_listeners(&self) -> Vec<Rc<dyn TabSelectedListener>> {
        self.listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<(&'static str, usize)>>,
    }

    impl TabSelectedListener for Recorder {
        fn on_tab_selected(&self, position: usize) {
            self.events.borrow_mut().push(("selected", position));
        }

        fn on_tab_unselected(&self, position: usize) {
            self.events.borrow_mut().push(("unselected", position));
        }

        fn on_tab_reselected(&self, position: usize) {
            self.events.borrow_mut().push(("reselected", position));
        }
    }

    fn strip_with_tabs(labels: &[&str]) -> Rc<TabStrip> {
        let strip = TabStrip::new();
        for label in labels {
            strip.push_tab(Tab::with_label(*label));
        }
        strip
    }

    #[test]
    fn push_and_clear_reset_selection_and_indicator() {
        let strip = strip_with_tabs(&["a", "b"]);
        assert_eq!(strip.tab_count(), 2);
        assert_eq!(strip.selected_index(), None);

        strip.select_tab(1, true).unwrap();
        strip.clear_tabs();
        assert_eq!(strip.tab_count(), 0);
        assert_eq!(strip.selected_index(), None);
        assert_eq!(strip.indicator(), IndicatorPosition::default());
    }

    #[test]
    fn select_dispatches_unselected_then_selected() {
        let strip = strip_with_tabs(&["a", "b"]);
        let recorder = Rc::new(Recorder::default());
        strip.add_listener(recorder.clone());

        strip.select_tab(0, true).unwrap();
        strip.select_tab(1, true).unwrap();

        assert_eq!(
            *recorder.events.borrow(),
            vec![("selected", 0), ("unselected", 0), ("selected", 1)]
        );
    }

    #[test]
    fn reselect_dispatches_reselected_only() {
        let strip = strip_with_tabs(&["a", "b"]);
        let recorder = Rc::new(Recorder::default());
        strip.add_listener(recorder.clone());

        strip.select_tab(0, true).unwrap();
        strip.select_tab(0, true).unwrap();

        assert_eq!(
            *recorder.events.borrow(),
            vec![("selected", 0), ("reselected", 0)]
        );
    }

    #[test]
    fn select_out_of_range_fails_without_mutation() {
        let strip = strip_with_tabs(&["a"]);
        let err = strip.select_tab(3, true).unwrap_err();
        assert_eq!(
            err,
            TabSyncError::TabOutOfRange {
                position: 3,
                count: 1
            }
        );
        assert_eq!(strip.selected_index(), None);
    }

    #[test]
    fn scroll_position_rounds_label_to_nearest_tab() {
        let strip = strip_with_tabs(&["a", "b", "c"]);

        strip.set_scroll_position(0, 0.3, true, true).unwrap();
        assert_eq!(strip.selected_index(), Some(0));

        strip.set_scroll_position(0, 0.6, true, true).unwrap();
        assert_eq!(strip.selected_index(), Some(1));

        let indicator = strip.indicator();
        assert_eq!(indicator.anchor, 0);
        assert!((indicator.offset - 0.6).abs() < f32::EPSILON);
        assert_eq!(indicator.motion, IndicatorMotion::Jump);
    }

    #[test]
    fn scroll_position_respects_update_flags() {
        let strip = strip_with_tabs(&["a", "b"]);
        strip.select_tab(0, true).unwrap();
        let before = strip.indicator();

        strip.set_scroll_position(0, 0.9, false, false).unwrap();
        assert_eq!(strip.selected_index(), Some(0));
        assert_eq!(strip.indicator(), before);
    }

    #[test]
    fn scroll_position_out_of_range_fails() {
        let strip = strip_with_tabs(&["a", "b"]);
        let err = strip.set_scroll_position(2, 0.0, true, true).unwrap_err();
        assert_eq!(
            err,
            TabSyncError::TabOutOfRange {
                position: 2,
                count: 2
            }
        );
    }

    #[test]
    fn select_without_indicator_leaves_indicator_untouched() {
        let strip = strip_with_tabs(&["a", "b"]);
        strip.set_scroll_position(0, 0.4, false, true).unwrap();
        let before = strip.indicator();

        strip.select_tab(1, false).unwrap();
        assert_eq!(strip.selected_index(), Some(1));
        assert_eq!(strip.indicator(), before);
    }

    #[test]
    fn removed_listener_is_not_notified() {
        let strip = strip_with_tabs(&["a", "b"]);
        let recorder = Rc::new(Recorder::default());
        let id = strip.add_listener(recorder.clone());
        strip.remove_listener(id);

        strip.select_tab(0, true).unwrap();
        assert!(recorder.events.borrow().is_empty());
    }

    #[test]
    fn select_does_not_notify_before_validation() {
        let strip = strip_with_tabs(&["a"]);
        let recorder = Rc::new(Recorder::default());
        strip.add_listener(recorder.clone());

        let _ = strip.select_tab(9, true);
        assert!(recorder.events.borrow().is_empty());
    }
}
