//! Adapter contract: page count and data-change notifications.
//!
//! The paged container does not own its pages; an adapter reports how many
//! pages exist and notifies observers when that set changes. The mediator
//! reads the count during population and, with auto-refresh enabled,
//! repopulates the strip on every change notification regardless of kind.
//!
//! [`SectionAdapter`] is the in-crate implementation backed by a list of
//! section titles, the shape the original home screen uses. Custom adapters
//! implement [`PagerAdapter`] and can embed [`AdapterSubscriptions`] for the
//! observer bookkeeping.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Opaque handle identifying a registered [`AdapterObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdapterObserverId(u64);

/// A change to the adapter's page set.
///
/// The mediator treats every variant the same way (full repopulation); the
/// distinction exists for observers that can react more precisely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterEvent {
    /// The page set changed wholesale.
    Changed,

    /// `count` pages were inserted starting at `start`.
    Inserted {
        /// Index of the first inserted page.
        start: usize,
        /// Number of inserted pages.
        count: usize,
    },

    /// `count` pages were removed starting at `start`.
    Removed {
        /// Index of the first removed page.
        start: usize,
        /// Number of removed pages.
        count: usize,
    },

    /// A page moved from `from` to `to`.
    Moved {
        /// Previous index of the page.
        from: usize,
        /// New index of the page.
        to: usize,
    },

    /// `count` pages changed in place starting at `start`.
    Updated {
        /// Index of the first updated page.
        start: usize,
        /// Number of updated pages.
        count: usize,
    },
}

/// Observer notified when an adapter's page set changes.
pub trait AdapterObserver {
    /// Called after the adapter mutated its page set.
    fn on_pages_changed(&self, event: &AdapterEvent);
}

/// Supplies the paged container with its page count and change stream.
pub trait PagerAdapter {
    /// Number of pages the adapter currently holds.
    fn page_count(&self) -> usize;

    /// Registers an observer for page-set changes and returns its removal
    /// handle.
    fn register_observer(&self, observer: Rc<dyn AdapterObserver>) -> AdapterObserverId;

    /// Removes a previously registered observer.
    fn unregister_observer(&self, id: AdapterObserverId);
}

/// Embeddable observer registry for [`PagerAdapter`] implementations.
///
/// Keeps the id bookkeeping and snapshot dispatch in one place so concrete
/// adapters only decide *when* to notify.
#[derive(Default)]
pub struct AdapterSubscriptions {
    observers: RefCell<Vec<(AdapterObserverId, Rc<dyn AdapterObserver>)>>,
    next_id: Cell<u64>,
}

impl AdapterSubscriptions {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer and returns its removal handle.
    pub fn register(&self, observer: Rc<dyn AdapterObserver>) -> AdapterObserverId {
        let id = AdapterObserverId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.observers.borrow_mut().push((id, observer));
        id
    }

    /// Removes a previously registered observer.
    pub fn unregister(&self, id: AdapterObserverId) {
        self.observers
            .borrow_mut()
            .retain(|(observer_id, _)| *observer_id != id);
    }

    /// Notifies all registered observers of `event`.
    ///
    /// Dispatch operates on a snapshot, so observers may (un)register or
    /// query the adapter from inside the callback.
    pub fn notify(&self, event: &AdapterEvent) {
        let snapshot: Vec<Rc<dyn AdapterObserver>> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        tracing::trace!(?event, observers = snapshot.len(), "adapter change dispatched");
        for observer in snapshot {
            observer.on_pages_changed(event);
        }
    }
}

/// Adapter over an ordered list of section titles, one page per section.
///
/// # Example
///
/// ```
/// use tabsync::SectionAdapter;
/// use tabsync::PagerAdapter;
///
/// let adapter = SectionAdapter::new(["Home", "Categories"]);
/// assert_eq!(adapter.page_count(), 2);
/// assert_eq!(adapter.section(1).as_deref(), Some("Categories"));
/// ```
pub struct SectionAdapter {
    sections: RefCell<Vec<String>>,
    subscriptions: AdapterSubscriptions,
}

impl SectionAdapter {
    /// Creates an adapter over the given section titles.
    #[must_use]
    pub fn new<I, S>(sections: I) -> Rc<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Rc::new(Self {
            sections: RefCell::new(sections.into_iter().map(Into::into).collect()),
            subscriptions: AdapterSubscriptions::new(),
        })
    }

    /// Title of the section at `position`, if it exists.
    #[must_use]
    pub fn section(&self, position: usize) -> Option<String> {
        self.sections.borrow().get(position).cloned()
    }

    /// Appends a section and notifies observers.
    pub fn push_section(&self, title: impl Into<String>) {
        let start = {
            let mut sections = self.sections.borrow_mut();
            sections.push(title.into());
            sections.len() - 1
        };
        self.subscriptions
            .notify(&AdapterEvent::Inserted { start, count: 1 });
    }

    /// Inserts a section at `position` (clamped to the end) and notifies
    /// observers.
    pub fn insert_section(&self, position: usize, title: impl Into<String>) {
        let start = {
            let mut sections = self.sections.borrow_mut();
            let start = position.min(sections.len());
            sections.insert(start, title.into());
            start
        };
        self.subscriptions
            .notify(&AdapterEvent::Inserted { start, count: 1 });
    }

    /// Removes the section at `position`, returning its title and notifying
    /// observers. Out-of-range positions return `None` without notification.
    pub fn remove_section(&self, position: usize) -> Option<String> {
        let removed = {
            let mut sections = self.sections.borrow_mut();
            if position >= sections.len() {
                return None;
            }
            sections.remove(position)
        };
        self.subscriptions.notify(&AdapterEvent::Removed {
            start: position,
            count: 1,
        });
        Some(removed)
    }

    /// Renames the section at `position` and notifies observers. Out-of-range
    /// positions are ignored.
    pub fn rename_section(&self, position: usize, title: impl Into<String>) {
        {
            let mut sections = self.sections.borrow_mut();
            let Some(section) = sections.get_mut(position) else {
                return;
            };
            *section = title.into();
        }
        self.subscriptions.notify(&AdapterEvent::Updated {
            start: position,
            count: 1,
        });
    }

    /// Moves a section from `from` to `to` and notifies observers.
    /// Out-of-range positions are ignored.
    pub fn move_section(&self, from: usize, to: usize) {
        {
            let mut sections = self.sections.borrow_mut();
            if from >= sections.len() || to >= sections.len() {
                return;
            }
            let section = sections.remove(from);
            sections.insert(to, section);
        }
        self.subscriptions.notify(&AdapterEvent::Moved { from, to });
    }

    /// Replaces all sections and notifies observers of a wholesale change.
    pub fn set_sections<I, S>(&self, sections: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.sections.borrow_mut() = sections.into_iter().map(Into::into).collect();
        self.subscriptions.notify(&AdapterEvent::Changed);
    }
}

impl PagerAdapter for SectionAdapter {
    fn page_count(&self) -> usize {
        self.sections.borrow().len()
    }

    fn register_observer(&self, observer: Rc<dyn AdapterObserver>) -> AdapterObserverId {
        self.subscriptions.register(observer)
    }

    fn unregister_observer(&self, id: AdapterObserverId) {
        self.subscriptions.unregister(id);
    }
}
