//! The paged container collaborator: current page, scroll state and the
//! event grammar the mediator synchronizes against.
//!
//! [`PagedContainer`] is a headless model of a horizontally swipeable page
//! host. Its page count comes from an assigned [`PagerAdapter`]; its output
//! is the observer event stream the mediator's state machine interprets:
//!
//! - scroll-state changes ([`ScrollState`]),
//! - scroll progress `(from_index, fraction, pixels)`,
//! - page selection.
//!
//! The per-gesture ordering of that stream is fixed and is relied upon by
//! consumers: a state transition is always dispatched before the progress
//! events it governs. A drag emits `Dragging`, progress…, `Settling`,
//! selection (if the page changed), progress…, `Idle`; a smooth programmatic
//! jump emits `Settling`, selection, progress…, `Idle`.
//!
//! Every dispatch releases the container's borrows first, so observers may
//! re-enter (the tab→page→tab round trip terminates at the same-target
//! guards in [`PagedContainer::set_current_item`]).

use crate::pager::adapter::PagerAdapter;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Page width used to derive the pixel component of progress events.
const PAGE_WIDTH_PX: f32 = 360.0;

/// Why the pager is currently scrolling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollState {
    /// No scroll in progress.
    #[default]
    Idle,

    /// The user is actively dragging the pager.
    Dragging,

    /// The pager is animating towards a target page, either after a released
    /// drag or a smooth programmatic navigation.
    Settling,
}

/// Opaque handle identifying a registered [`PageChangeObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageObserverId(u64);

/// Page lifecycle notifications emitted by the container.
///
/// All methods default to no-ops so observers implement only what they need.
pub trait PageChangeObserver {
    /// Scroll progress: the pager sits `offset` (in `[0, 1]`) of the way
    /// between `position` and `position + 1`, `offset_px` pixels in.
    fn on_page_scrolled(&self, _position: usize, _offset: f32, _offset_px: i32) {}

    /// The current page changed to `position`.
    fn on_page_selected(&self, _position: usize) {}

    /// The scroll state changed. Always dispatched before the progress
    /// events governed by the new state.
    fn on_scroll_state_changed(&self, _state: ScrollState) {}
}

struct PagerState {
    adapter: Option<Rc<dyn PagerAdapter>>,
    current: usize,
    scroll_state: ScrollState,
    last_drag: Option<(usize, f32)>,
}

/// A swipeable container of pages driven by an external adapter.
///
/// # Example
///
/// ```
/// use tabsync::{PagedContainer, SectionAdapter};
///
/// let pager = PagedContainer::new();
/// pager.set_adapter(SectionAdapter::new(["Home", "Categories"]));
/// pager.set_current_item(1, false);
/// assert_eq!(pager.current_item(), 1);
/// ```
pub struct PagedContainer {
    state: RefCell<PagerState>,
    observers: RefCell<Vec<(PageObserverId, Rc<dyn PageChangeObserver>)>>,
    next_observer_id: Cell<u64>,
}

impl PagedContainer {
    /// Creates a container with no adapter, shared between its owner and the
    /// mediator.
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(PagerState {
                adapter: None,
                current: 0,
                scroll_state: ScrollState::Idle,
                last_drag: None,
            }),
            observers: RefCell::new(Vec::new()),
            next_observer_id: Cell::new(0),
        })
    }

    /// Assigns the adapter that drives the page count and resets the current
    /// page to 0.
    pub fn set_adapter(&self, adapter: Rc<dyn PagerAdapter>) {
        let mut state = self.state.borrow_mut();
        state.adapter = Some(adapter);
        state.current = 0;
        state.scroll_state = ScrollState::Idle;
        state.last_drag = None;
    }

    /// The assigned adapter, if any.
    #[must_use]
    pub fn adapter(&self) -> Option<Rc<dyn PagerAdapter>> {
        self.state.borrow().adapter.clone()
    }

    /// Index of the current page. 0 while no adapter is assigned.
    #[must_use]
    pub fn current_item(&self) -> usize {
        self.state.borrow().current
    }

    /// Current scroll state.
    #[must_use]
    pub fn scroll_state(&self) -> ScrollState {
        self.state.borrow().scroll_state
    }

    /// Page count reported by the adapter, or 0 without one.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.adapter().map_or(0, |adapter| adapter.page_count())
    }

    /// Registers a page observer and returns its removal handle.
    pub fn register_page_observer(&self, observer: Rc<dyn PageChangeObserver>) -> PageObserverId {
        let id = PageObserverId(self.next_observer_id.get());
        self.next_observer_id.set(id.0 + 1);
        self.observers.borrow_mut().push((id, observer));
        id
    }

    /// Removes a previously registered page observer.
    pub fn unregister_page_observer(&self, id: PageObserverId) {
        self.observers
            .borrow_mut()
            .retain(|(observer_id, _)| *observer_id != id);
    }

    /// Navigates to `item`, clamped to the page range.
    ///
    /// Two guards keep programmatic navigation re-entrancy safe: navigating
    /// to the current page while idle is a no-op, and a smooth scroll to the
    /// current page is always a no-op (this is what terminates the
    /// tab→page→tab selection round trip).
    ///
    /// An instant navigation updates the page and emits selection (when the
    /// page changed) plus a zero-offset progress event. A smooth navigation
    /// emits `Settling`, selection, interpolated progress events and `Idle`.
    pub fn set_current_item(&self, item: usize, smooth: bool) {
        let count = self.page_count();
        if count == 0 {
            tracing::warn!(item, "navigation ignored: pager has no pages");
            return;
        }
        let item = item.min(count - 1);
        let (current, scroll_state) = {
            let state = self.state.borrow();
            (state.current, state.scroll_state)
        };
        if item == current && scroll_state == ScrollState::Idle {
            return;
        }
        if item == current && smooth {
            return;
        }

        tracing::debug!(from = current, to = item, smooth, "pager navigation");
        if smooth {
            self.transition_state(ScrollState::Settling);
            self.state.borrow_mut().current = item;
            self.dispatch(|observer| observer.on_page_selected(item));
            if item > current {
                self.emit_scrolled(item - 1, 0.5);
            } else {
                self.emit_scrolled(item, 0.5);
            }
            self.emit_scrolled(item, 0.0);
            self.transition_state(ScrollState::Idle);
        } else {
            self.state.borrow_mut().current = item;
            if item != current {
                self.dispatch(|observer| observer.on_page_selected(item));
            }
            self.emit_scrolled(item, 0.0);
        }
    }

    /// Starts a user drag gesture.
    ///
    /// A drag may also catch a settling pager; beginning a drag during a
    /// drag is ignored.
    pub fn begin_drag(&self) {
        if self.scroll_state() == ScrollState::Dragging {
            tracing::warn!("begin_drag ignored: already dragging");
            return;
        }
        self.transition_state(ScrollState::Dragging);
    }

    /// Reports drag progress: the pager sits `offset` of the way between
    /// `position` and `position + 1`.
    ///
    /// Ignored outside of a drag or for positions beyond the page range.
    pub fn drag_to(&self, position: usize, offset: f32) {
        if self.scroll_state() != ScrollState::Dragging {
            tracing::warn!(position, offset, "drag_to ignored outside of a drag");
            return;
        }
        let count = self.page_count();
        if position >= count {
            tracing::warn!(position, count, "drag_to ignored: position out of range");
            return;
        }
        let offset = offset.clamp(0.0, 1.0);
        self.state.borrow_mut().last_drag = Some((position, offset));
        self.emit_scrolled(position, offset);
    }

    /// Ends a drag gesture and settles on the nearest page.
    ///
    /// A fraction of 0.5 or more advances to the next page; anything less
    /// settles back. Emits `Settling`, selection (when the page changed),
    /// interpolated progress events and `Idle`.
    pub fn release(&self) {
        if self.scroll_state() != ScrollState::Dragging {
            tracing::warn!("release ignored outside of a drag");
            return;
        }
        let (position, offset) = {
            let state = self.state.borrow();
            state.last_drag.unwrap_or((state.current, 0.0))
        };
        let count = self.page_count();
        let target = if offset >= 0.5 { position + 1 } else { position };
        let target = if count == 0 { 0 } else { target.min(count - 1) };

        self.transition_state(ScrollState::Settling);
        let previous = {
            let mut state = self.state.borrow_mut();
            let previous = state.current;
            state.current = target;
            state.last_drag = None;
            previous
        };
        if previous != target {
            self.dispatch(|observer| observer.on_page_selected(target));
        }
        if target > position {
            self.emit_scrolled(position, (offset + 1.0) / 2.0);
        } else if offset > 0.0 {
            self.emit_scrolled(position, offset / 2.0);
        }
        self.emit_scrolled(target, 0.0);
        self.transition_state(ScrollState::Idle);
    }

    fn transition_state(&self, state: ScrollState) {
        self.state.borrow_mut().scroll_state = state;
        tracing::trace!(?state, "pager scroll state");
        self.dispatch(|observer| observer.on_scroll_state_changed(state));
    }

    fn emit_scrolled(&self, position: usize, offset: f32) {
        let offset_px = (offset * PAGE_WIDTH_PX) as i32;
        self.dispatch(|observer| observer.on_page_scrolled(position, offset, offset_px));
    }

    fn dispatch(&self, f: impl Fn(&dyn PageChangeObserver)) {
        let snapshot: Vec<Rc<dyn PageChangeObserver>> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in snapshot {
            f(observer.as_ref());
        }
    }
}
