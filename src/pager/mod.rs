//! Paged container collaborator: adapter contract, scroll state and events.
//!
//! The pager side of the synchronization link. [`PagedContainer`] hosts the
//! current page and emits the scroll/selection event grammar;
//! [`PagerAdapter`] supplies the page count and change notifications, with
//! [`SectionAdapter`] as the titles-backed implementation.

pub mod adapter;
pub mod container;

pub use adapter::{
    AdapterEvent, AdapterObserver, AdapterObserverId, AdapterSubscriptions, PagerAdapter,
    SectionAdapter,
};
pub use container::{PageChangeObserver, PageObserverId, PagedContainer, ScrollState};
