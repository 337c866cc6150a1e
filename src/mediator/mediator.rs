//! The mediator binding one tab strip to one paged container.
//!
//! [`TabPagerMediator`] owns the link lifecycle: `attach()` installs the
//! page-scroll observer, the tab-selection listener and (optionally) the
//! adapter data observer, populates the strip from the adapter and forces
//! the initial scroll position; `detach()` removes every registration so
//! neither collaborator keeps the other alive through the mediator.
//!
//! Population is driven by the owner-supplied [`TabConfigurer`], which
//! labels each freshly created tab for its page position. The mediator has
//! no opinion on tab content.

use crate::domain::{Result, TabSyncError};
use crate::mediator::observers::{PagerNavigationListener, RefreshObserver, StripSyncObserver};
use crate::pager::{AdapterObserverId, PageObserverId, PagedContainer, PagerAdapter};
use crate::strip::{Tab, TabListenerId, TabStrip};
use std::rc::Rc;

/// Configures a freshly created tab for the page at `position`.
///
/// Implemented for any `Fn(&mut Tab, usize)` closure, so the typical owner
/// writes:
///
/// ```
/// use tabsync::{Tab, TabConfigurer};
///
/// let titles = ["Home", "Categories"];
/// let configurer = move |tab: &mut Tab, position: usize| {
///     tab.set_label(titles[position]);
/// };
/// configurer.configure_tab(&mut Tab::new(), 0);
/// ```
pub trait TabConfigurer {
    /// Sets the label (and any styling) of `tab` for the page at `position`.
    fn configure_tab(&self, tab: &mut Tab, position: usize);
}

impl<F> TabConfigurer for F
where
    F: Fn(&mut Tab, usize),
{
    fn configure_tab(&self, tab: &mut Tab, position: usize) {
        self(tab, position);
    }
}

/// Registrations held while the mediator is attached.
struct Attachment {
    adapter: Rc<dyn PagerAdapter>,
    page_observer: PageObserverId,
    tab_listener: TabListenerId,
    adapter_observer: Option<AdapterObserverId>,
}

/// Rebuilds the strip's tabs from the adapter and re-syncs the selection.
///
/// Shared between the mediator's public population entry point and the
/// auto-refresh observer. Selection re-sync is passive: it does not force an
/// indicator animation, and it is skipped when the pager's current page is
/// beyond the (possibly shrunken) page range.
pub(crate) fn repopulate(
    strip: &TabStrip,
    pager: &PagedContainer,
    adapter: &dyn PagerAdapter,
    configurer: &dyn TabConfigurer,
) -> Result<()> {
    strip.clear_tabs();
    let count = adapter.page_count();
    for position in 0..count {
        let mut tab = Tab::new();
        configurer.configure_tab(&mut tab, position);
        strip.push_tab(tab);
    }
    tracing::debug!(count, "strip repopulated from adapter");

    if count > 0 {
        let current = pager.current_item();
        if current < count && strip.selected_index() != Some(current) {
            strip.select_tab(current, false)?;
        }
    }
    Ok(())
}

/// Keeps a [`TabStrip`] and a [`PagedContainer`] in lock-step.
///
/// Selecting a tab navigates the pager (animated); swiping the pager updates
/// the selected tab and interpolates the indicator through partial drags.
/// The link is established by [`attach`](TabPagerMediator::attach) and torn
/// down by [`detach`](TabPagerMediator::detach); dropping an attached
/// mediator without detaching leaves its registrations in the collaborators.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use tabsync::{PagedContainer, SectionAdapter, Tab, TabPagerMediator, TabStrip};
///
/// let strip = TabStrip::new();
/// let pager = PagedContainer::new();
/// let adapter = SectionAdapter::new(["Home", "Categories"]);
/// pager.set_adapter(adapter.clone());
///
/// let mut mediator = TabPagerMediator::new(
///     Rc::clone(&strip),
///     Rc::clone(&pager),
///     move |tab: &mut Tab, position: usize| {
///         tab.set_label(adapter.section(position).unwrap_or_default());
///     },
/// );
/// mediator.attach()?;
///
/// strip.select_tab(1, true)?;
/// assert_eq!(pager.current_item(), 1);
///
/// mediator.detach();
/// # Ok::<(), tabsync::TabSyncError>(())
/// ```
pub struct TabPagerMediator {
    strip: Rc<TabStrip>,
    pager: Rc<PagedContainer>,
    auto_refresh: bool,
    configurer: Rc<dyn TabConfigurer>,
    attachment: Option<Attachment>,
}

impl TabPagerMediator {
    /// Creates a mediator that refreshes the strip automatically when the
    /// pager's adapter reports data changes.
    ///
    /// No side effects until [`attach`](TabPagerMediator::attach).
    pub fn new(
        strip: Rc<TabStrip>,
        pager: Rc<PagedContainer>,
        configurer: impl TabConfigurer + 'static,
    ) -> Self {
        Self::with_auto_refresh(strip, pager, true, configurer)
    }

    /// Creates a mediator with explicit control over adapter auto-refresh.
    ///
    /// With `auto_refresh` disabled the owner is responsible for calling
    /// [`populate_tabs_from_adapter`](TabPagerMediator::populate_tabs_from_adapter)
    /// after changing the adapter's page set.
    pub fn with_auto_refresh(
        strip: Rc<TabStrip>,
        pager: Rc<PagedContainer>,
        auto_refresh: bool,
        configurer: impl TabConfigurer + 'static,
    ) -> Self {
        Self {
            strip,
            pager,
            auto_refresh,
            configurer: Rc::new(configurer),
            attachment: None,
        }
    }

    /// Whether the link is currently established.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// Establishes the link between the strip and the pager.
    ///
    /// Installs the page-scroll observer, the tab-selection listener and,
    /// with auto-refresh enabled, the adapter data observer; populates the
    /// strip from the adapter; forces the strip's scroll position to the
    /// pager's current page instantly, so the strip is visually correct even
    /// when it was just rebuilt.
    ///
    /// # Errors
    ///
    /// [`TabSyncError::AlreadyAttached`] when the mediator is attached, and
    /// [`TabSyncError::AdapterMissing`] when the pager has no adapter. Both
    /// are checked before any mutation takes place.
    pub fn attach(&mut self) -> Result<()> {
        if self.attachment.is_some() {
            return Err(TabSyncError::AlreadyAttached);
        }
        let adapter = self.pager.adapter().ok_or(TabSyncError::AdapterMissing)?;

        let page_observer = self
            .pager
            .register_page_observer(Rc::new(StripSyncObserver::new(&self.strip)));
        let tab_listener = self
            .strip
            .add_listener(Rc::new(PagerNavigationListener::new(Rc::clone(&self.pager))));
        let adapter_observer = if self.auto_refresh {
            Some(adapter.register_observer(Rc::new(RefreshObserver::new(
                &self.strip,
                &self.pager,
                &adapter,
                Rc::clone(&self.configurer),
            ))))
        } else {
            None
        };

        repopulate(
            &self.strip,
            &self.pager,
            adapter.as_ref(),
            self.configurer.as_ref(),
        )?;
        if self.strip.tab_count() > 0 {
            self.strip
                .set_scroll_position(self.pager.current_item(), 0.0, true, true)?;
        }

        self.attachment = Some(Attachment {
            adapter,
            page_observer,
            tab_listener,
            adapter_observer,
        });
        tracing::debug!(
            tabs = self.strip.tab_count(),
            current = self.pager.current_item(),
            auto_refresh = self.auto_refresh,
            "mediator attached"
        );
        Ok(())
    }

    /// Tears the link down, removing every registration `attach` installed.
    ///
    /// Detaching while not attached is a logged no-op.
    pub fn detach(&mut self) {
        let Some(attachment) = self.attachment.take() else {
            tracing::debug!("detach ignored: mediator is not attached");
            return;
        };
        if let Some(id) = attachment.adapter_observer {
            attachment.adapter.unregister_observer(id);
        }
        self.strip.remove_listener(attachment.tab_listener);
        self.pager.unregister_page_observer(attachment.page_observer);
        tracing::debug!("mediator detached");
    }

    /// Rebuilds the strip's tabs from the pager's adapter.
    ///
    /// Clears the strip, creates one configured tab per page and re-selects
    /// the pager's current page. Idempotent for an unchanged adapter. While
    /// detached this only clears the strip, since no adapter is recorded.
    ///
    /// # Errors
    ///
    /// Propagates [`TabSyncError::TabOutOfRange`] if the strip rejects the
    /// selection re-sync, which indicates an integration fault.
    pub fn populate_tabs_from_adapter(&self) -> Result<()> {
        match &self.attachment {
            Some(attachment) => repopulate(
                &self.strip,
                &self.pager,
                attachment.adapter.as_ref(),
                self.configurer.as_ref(),
            ),
            None => {
                self.strip.clear_tabs();
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pager::SectionAdapter;
    use crate::strip::IndicatorMotion;
    use std::cell::RefCell;

    struct Fixture {
        strip: Rc<TabStrip>,
        pager: Rc<PagedContainer>,
        adapter: Rc<SectionAdapter>,
        calls: Rc<RefCell<Vec<usize>>>,
    }

    fn fixture(sections: &[&str]) -> (Fixture, TabPagerMediator) {
        let strip = TabStrip::new();
        let pager = PagedContainer::new();
        let adapter = SectionAdapter::new(sections.iter().copied());
        pager.set_adapter(adapter.clone());

        let calls = Rc::new(RefCell::new(Vec::new()));
        let recorded_calls = Rc::clone(&calls);
        let titles = Rc::clone(&adapter);
        let mediator = TabPagerMediator::new(
            Rc::clone(&strip),
            Rc::clone(&pager),
            move |tab: &mut Tab, position: usize| {
                recorded_calls.borrow_mut().push(position);
                tab.set_label(titles.section(position).unwrap_or_default());
            },
        );

        (
            Fixture {
                strip,
                pager,
                adapter,
                calls,
            },
            mediator,
        )
    }

    #[test]
    fn attach_twice_fails_and_leaves_state_unchanged() {
        let (fx, mut mediator) = fixture(&["Home", "Categories"]);
        mediator.attach().unwrap();

        let labels = fx.strip.labels();
        let selected = fx.strip.selected_index();
        assert_eq!(mediator.attach(), Err(TabSyncError::AlreadyAttached));
        assert_eq!(fx.strip.labels(), labels);
        assert_eq!(fx.strip.selected_index(), selected);
        assert!(mediator.is_attached());
    }

    #[test]
    fn attach_without_adapter_fails_without_registrations() {
        let strip = TabStrip::new();
        let pager = PagedContainer::new();
        let mut mediator = TabPagerMediator::new(
            Rc::clone(&strip),
            Rc::clone(&pager),
            |_tab: &mut Tab, _position: usize| {},
        );

        assert_eq!(mediator.attach(), Err(TabSyncError::AdapterMissing));
        assert!(!mediator.is_attached());

        // A failed attach must not leave half-installed observers behind.
        pager.set_adapter(SectionAdapter::new(["a", "b"]));
        pager.set_current_item(1, false);
        assert_eq!(strip.tab_count(), 0);
        assert_eq!(strip.selected_index(), None);
    }

    #[test]
    fn populate_creates_one_configured_tab_per_page() {
        let (fx, mut mediator) = fixture(&["Home", "Categories", "Videos"]);
        mediator.attach().unwrap();

        assert_eq!(fx.strip.labels(), vec!["Home", "Categories", "Videos"]);
        assert_eq!(*fx.calls.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn populate_syncs_selection_to_current_page() {
        let (fx, mut mediator) = fixture(&["Home", "Categories"]);
        fx.pager.set_current_item(1, false);
        mediator.attach().unwrap();

        assert_eq!(fx.strip.selected_index(), Some(1));
        let indicator = fx.strip.indicator();
        assert_eq!(indicator.anchor, 1);
        assert_eq!(indicator.offset, 0.0);
        // Attach forces the scroll position instantly, never animated.
        assert_eq!(indicator.motion, IndicatorMotion::Jump);
    }

    #[test]
    fn populate_is_idempotent() {
        let (fx, mut mediator) = fixture(&["Home", "Categories"]);
        mediator.attach().unwrap();

        let labels = fx.strip.labels();
        let selected = fx.strip.selected_index();
        mediator.populate_tabs_from_adapter().unwrap();

        assert_eq!(fx.strip.labels(), labels);
        assert_eq!(fx.strip.selected_index(), selected);
        assert_eq!(*fx.calls.borrow(), vec![0, 1, 0, 1]);
    }

    #[test]
    fn tab_selection_navigates_pager_without_feedback_loop() {
        let (fx, mut mediator) = fixture(&["Home", "Categories"]);
        mediator.attach().unwrap();

        fx.strip.select_tab(1, true).unwrap();

        assert_eq!(fx.pager.current_item(), 1);
        assert_eq!(fx.strip.selected_index(), Some(1));
    }

    #[test]
    fn swipe_settles_strip_onto_new_page() {
        let (fx, mut mediator) = fixture(&["Home", "Categories"]);
        mediator.attach().unwrap();

        fx.pager.begin_drag();
        fx.pager.drag_to(0, 0.8);
        fx.pager.release();

        assert_eq!(fx.pager.current_item(), 1);
        assert_eq!(fx.strip.selected_index(), Some(1));
        assert_eq!(fx.strip.indicator().anchor, 1);
    }

    #[test]
    fn detach_removes_every_registration() {
        let (fx, mut mediator) = fixture(&["Home", "Categories"]);
        mediator.attach().unwrap();
        mediator.detach();
        assert!(!mediator.is_attached());

        // Adapter changes no longer repopulate.
        fx.adapter.push_section("Videos");
        assert_eq!(fx.strip.tab_count(), 2);

        // Pager events no longer reach the strip.
        let indicator = fx.strip.indicator();
        fx.pager.begin_drag();
        fx.pager.drag_to(0, 0.7);
        fx.pager.release();
        assert_eq!(fx.strip.indicator(), indicator);
        assert_eq!(fx.strip.selected_index(), Some(0));

        // Tab selection no longer navigates the pager.
        fx.pager.set_current_item(0, false);
        fx.strip.select_tab(1, true).unwrap();
        assert_eq!(fx.pager.current_item(), 0);
    }

    #[test]
    fn detach_while_not_attached_is_a_noop() {
        let (_fx, mut mediator) = fixture(&["Home"]);
        mediator.detach();
        assert!(!mediator.is_attached());
    }

    #[test]
    fn reattach_after_detach_relinks() {
        let (fx, mut mediator) = fixture(&["Home", "Categories"]);
        mediator.attach().unwrap();
        mediator.detach();
        mediator.attach().unwrap();

        fx.strip.select_tab(1, true).unwrap();
        assert_eq!(fx.pager.current_item(), 1);
    }

    #[test]
    fn attach_with_empty_adapter_leaves_strip_empty() {
        let (fx, mut mediator) = fixture(&[]);
        mediator.attach().unwrap();

        assert_eq!(fx.strip.tab_count(), 0);
        assert_eq!(fx.strip.selected_index(), None);
    }

    #[test]
    fn auto_refresh_repopulates_on_adapter_change() {
        let (fx, mut mediator) = fixture(&["Home", "Categories"]);
        mediator.attach().unwrap();

        fx.adapter.push_section("Videos");
        assert_eq!(fx.strip.labels(), vec!["Home", "Categories", "Videos"]);
        assert_eq!(fx.strip.selected_index(), Some(0));
    }

    #[test]
    fn disabled_auto_refresh_requires_manual_population() {
        let strip = TabStrip::new();
        let pager = PagedContainer::new();
        let adapter = SectionAdapter::new(["Home"]);
        pager.set_adapter(adapter.clone());
        let titles = Rc::clone(&adapter);
        let mut mediator = TabPagerMediator::with_auto_refresh(
            Rc::clone(&strip),
            Rc::clone(&pager),
            false,
            move |tab: &mut Tab, position: usize| {
                tab.set_label(titles.section(position).unwrap_or_default());
            },
        );
        mediator.attach().unwrap();

        adapter.push_section("Categories");
        assert_eq!(strip.tab_count(), 1);

        mediator.populate_tabs_from_adapter().unwrap();
        assert_eq!(strip.labels(), vec!["Home", "Categories"]);
    }

    #[test]
    fn populate_skips_selection_when_current_page_is_out_of_range() {
        let strip = TabStrip::new();
        let pager = PagedContainer::new();
        let adapter = SectionAdapter::new(["a", "b", "c"]);
        pager.set_adapter(adapter.clone());
        pager.set_current_item(2, false);
        let mut mediator = TabPagerMediator::with_auto_refresh(
            Rc::clone(&strip),
            Rc::clone(&pager),
            false,
            |_tab: &mut Tab, _position: usize| {},
        );
        mediator.attach().unwrap();

        // Shrink behind the mediator's back (auto-refresh disabled), leaving
        // the pager's current page beyond the new range.
        adapter.remove_section(2);
        adapter.remove_section(1);
        mediator.populate_tabs_from_adapter().unwrap();

        assert_eq!(strip.tab_count(), 1);
        assert_eq!(strip.selected_index(), None);
    }

    #[test]
    fn populate_while_detached_only_clears() {
        let (fx, mediator) = fixture(&["Home", "Categories"]);
        fx.strip.push_tab(Tab::with_label("stale"));

        mediator.populate_tabs_from_adapter().unwrap();
        assert_eq!(fx.strip.tab_count(), 0);
        assert!(fx.calls.borrow().is_empty());
    }
}
