//! Demo driver for the tabsync mediator.
//!
//! Wires a small home screen (a tab strip over a two-section pager) the
//! way an application would, then replays the interactions the mediator
//! synchronizes: a tab tap, a swipe gesture, an adapter change and a
//! programmatic jump. Run with `RUST_LOG=trace` to watch the event flow.

use std::rc::Rc;
use tabsync::{PagedContainer, SectionAdapter, Tab, TabPagerMediator, TabStrip};
use tracing_subscriber::EnvFilter;

fn main() -> tabsync::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let strip = TabStrip::new();
    let pager = PagedContainer::new();
    let adapter = SectionAdapter::new(["Home", "Categories"]);
    pager.set_adapter(adapter.clone());

    let titles = Rc::clone(&adapter);
    let mut mediator = TabPagerMediator::new(
        Rc::clone(&strip),
        Rc::clone(&pager),
        move |tab: &mut Tab, position: usize| {
            tab.set_label(titles.section(position).unwrap_or_default());
        },
    );
    mediator.attach()?;
    tracing::info!(tabs = ?strip.labels(), "mediator attached");

    // Tap the second tab: the strip drives the pager.
    strip.select_tab(1, true)?;
    tracing::info!(
        page = pager.current_item(),
        selected = ?strip.selected_index(),
        "after tapping 'Categories'"
    );

    // Swipe most of the way back: the pager drives the strip, interpolating
    // the indicator through the drag.
    pager.begin_drag();
    pager.drag_to(0, 0.9);
    pager.drag_to(0, 0.4);
    tracing::info!(indicator = ?strip.indicator(), "mid-drag");
    pager.release();
    tracing::info!(
        page = pager.current_item(),
        selected = ?strip.selected_index(),
        "after swiping back"
    );

    // Grow the adapter: auto-refresh rebuilds the strip.
    adapter.push_section("Videos");
    tracing::info!(tabs = ?strip.labels(), "after adapter change");

    // Jump programmatically to the new section.
    pager.set_current_item(2, true);
    tracing::info!(
        page = pager.current_item(),
        selected = ?strip.selected_index(),
        "after jumping to 'Videos'"
    );

    mediator.detach();
    tracing::info!("mediator detached");
    Ok(())
}
