//! Error types for the tabsync crate.
//!
//! This module defines the centralized error type [`TabSyncError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.
//!
//! Two failure classes exist, both fatal:
//!
//! - **Configuration errors** ([`TabSyncError::AlreadyAttached`],
//!   [`TabSyncError::AdapterMissing`]): caller bugs in mediator setup,
//!   signaled by `attach()` before any mutation takes place.
//! - **Integration errors** ([`TabSyncError::TabOutOfRange`]): a low-level
//!   tab-strip operation was driven outside the strip's tab range. Signaled
//!   on first use with no fallback.
//!
//! There are no transient or retryable errors; every operation is local,
//! synchronous and side-effect-only against in-memory collaborators.

use thiserror::Error;

/// The main error type for tabsync operations.
///
/// Any of these errors should abort the owning screen's setup rather than
/// leave a silently broken tab strip behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabSyncError {
    /// `attach()` was called on a mediator that is already attached.
    ///
    /// A mediator links exactly one strip to exactly one pager and may hold
    /// that link at most once at a time. Call `detach()` before re-attaching.
    #[error("mediator is already attached")]
    AlreadyAttached,

    /// `attach()` was called before the paged container has an adapter.
    ///
    /// The mediator reads the page count from the pager's adapter during
    /// population; assign an adapter first.
    #[error("mediator attached before the paged container has an adapter")]
    AdapterMissing,

    /// A low-level strip operation targeted a tab index that does not exist.
    ///
    /// The mediator guards its own event paths, so this surfaces a
    /// development-time integration fault: a strip driven out of step with
    /// the pager it is linked to.
    #[error("tab position {position} out of range for strip with {count} tabs")]
    TabOutOfRange {
        /// The requested tab position.
        position: usize,
        /// The number of tabs in the strip at the time of the call.
        count: usize,
    },
}

/// A specialized `Result` type for tabsync operations.
///
/// Type alias for `std::result::Result<T, TabSyncError>` that simplifies
/// function signatures throughout the crate.
pub type Result<T> = std::result::Result<T, TabSyncError>;
