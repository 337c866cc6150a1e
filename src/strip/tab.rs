//! The individual tab item held by a [`TabStrip`](crate::strip::TabStrip).

/// A single tab in a tab strip.
///
/// Tabs are created blank by the mediator during population and handed to the
/// owner's configurer callback, which sets the label (and any future styling)
/// for the page at the tab's position. The strip itself has no opinion on tab
/// content, only on selection and indicator mechanics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tab {
    label: String,
}

impl Tab {
    /// Creates a blank tab with an empty label.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tab with the given label.
    #[must_use]
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Returns the tab's display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Sets the tab's display label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }
}
