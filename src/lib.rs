//! Tabsync: bidirectional synchronization between a tab strip and a
//! swipeable paged container.
//!
//! Tabsync keeps a strip of selectable tabs and a horizontally swipeable
//! page host in lock-step: selecting a tab navigates the pager (animated),
//! swiping the pager updates the selected tab and its visual indicator,
//! including partial-drag indicator interpolation.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Mediator Layer (mediator/)                         │  ← Link lifecycle
//! │  - attach / detach / populate                       │  ← Scroll-state machine
//! │  - page→tab, tab→page, adapter→strip                │
//! └─────────────────────────────────────────────────────┘
//!          │                               │
//! ┌───────────────────┐          ┌───────────────────────┐
//! │ Strip Layer       │          │ Pager Layer           │
//! │ (strip/)          │          │ (pager/)              │
//! │ - Tabs, selection │          │ - Adapter contract    │
//! │ - Indicator       │          │ - Scroll states       │
//! │ - Listeners       │          │ - Gesture driver      │
//! └───────────────────┘          └───────────────────────┘
//!          │                               │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Error taxonomy (configuration / integration)     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`mediator`]: the [`TabPagerMediator`] link and the [`TabConfigurer`]
//!   callback contract
//! - [`strip`]: [`TabStrip`], [`Tab`] and selection listeners
//! - [`pager`]: [`PagedContainer`], [`PagerAdapter`], [`SectionAdapter`]
//!   and page-change observers
//! - [`domain`]: [`TabSyncError`] and the crate [`Result`] alias
//!
//! # Event flow
//!
//! All synchronization is single-threaded and event-driven. The pager emits
//! scroll-state changes, fractional scroll progress and page selection, in
//! that per-gesture order; the mediator's state machine decides per event
//! whether the selected-tab label and the indicator follow, so a released
//! drag keeps the label live while a programmatic jump animates the
//! indicator exactly once. The tab→page→tab round trip terminates at the
//! pager's same-target navigation guards.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use tabsync::{PagedContainer, SectionAdapter, Tab, TabPagerMediator, TabStrip};
//!
//! let strip = TabStrip::new();
//! let pager = PagedContainer::new();
//! let adapter = SectionAdapter::new(["Home", "Categories"]);
//! pager.set_adapter(adapter.clone());
//!
//! let mut mediator = TabPagerMediator::new(
//!     Rc::clone(&strip),
//!     Rc::clone(&pager),
//!     move |tab: &mut Tab, position: usize| {
//!         tab.set_label(adapter.section(position).unwrap_or_default());
//!     },
//! );
//! mediator.attach()?;
//! assert_eq!(strip.labels(), vec!["Home", "Categories"]);
//!
//! // Swiping the pager moves the selected tab.
//! pager.begin_drag();
//! pager.drag_to(0, 0.8);
//! pager.release();
//! assert_eq!(strip.selected_index(), Some(1));
//!
//! // Selecting a tab navigates the pager.
//! strip.select_tab(0, true)?;
//! assert_eq!(pager.current_item(), 0);
//!
//! mediator.detach();
//! # Ok::<(), tabsync::TabSyncError>(())
//! ```
//!
//! # Ownership
//!
//! The strip and pager are shared as `Rc` handles between their owner and
//! the mediator. The observer the mediator installs on the pager holds the
//! strip weakly, so the pager's callback registry never extends the strip's
//! lifetime; events arriving after the strip is gone are ignored.

pub mod domain;
pub mod mediator;
pub mod pager;
pub mod strip;

pub use domain::{Result, TabSyncError};
pub use mediator::{TabConfigurer, TabPagerMediator};
pub use pager::{
    AdapterEvent, AdapterObserver, AdapterObserverId, AdapterSubscriptions, PageChangeObserver,
    PageObserverId, PagedContainer, PagerAdapter, ScrollState, SectionAdapter,
};
pub use strip::{
    IndicatorMotion, IndicatorPosition, Tab, TabListenerId, TabSelectedListener, TabStrip,
};
