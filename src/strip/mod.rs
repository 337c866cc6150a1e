//! Tab strip collaborator: tabs, selection state and the indicator.
//!
//! The strip side of the synchronization link. [`TabStrip`] holds the
//! ordered tabs, the selected index and the fractional indicator position;
//! [`Tab`] is the individual item the owner's configurer labels during
//! population.

pub mod strip;
pub mod tab;

pub use strip::{
    IndicatorMotion, IndicatorPosition, TabListenerId, TabSelectedListener, TabStrip,
};
pub use tab::Tab;
