//! Core domain types shared across the crate.
//!
//! Currently holds the error taxonomy; see [`error`] for the failure classes
//! and how they map onto mediator setup and strip integration faults.

pub mod error;

pub use error::{Result, TabSyncError};
