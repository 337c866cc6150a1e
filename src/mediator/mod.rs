//! Mediator layer binding a tab strip to a paged container.
//!
//! [`TabPagerMediator`] coordinates the three synchronization directions:
//! page→tab (the scroll-state machine in `observers`), tab→page (animated
//! navigation) and adapter→strip (auto-refresh repopulation). See the crate
//! docs for the full event flow.

pub mod mediator;
pub(crate) mod observers;

pub use mediator::{TabConfigurer, TabPagerMediator};
