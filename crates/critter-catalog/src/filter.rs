//! Language filter over rendered essays.
//!
//! The filter bar holds an explicit listener handle: initializing always
//! detaches the old handle before attaching a new one, so re-rendering the
//! list can never stack click handlers. Visibility is derived from the bar's
//! selection on demand (`Page::is_visible`); items carry no display state.

use critter_core::page::{ListenerHandle, Page};
use tracing::{debug, warn};

/// Bind the filter to the page's current items and show everything.
///
/// Returns the new listener handle, or `None` when the page has no controls.
pub fn init_essay_filter(page: &mut Page) -> Option<ListenerHandle> {
    let bar = page.filter.as_mut().filter(|bar| !bar.controls.is_empty())?;

    let (previous, handle) = bar.attach();
    if let Some(previous) = previous {
        debug!("filter: detached listener {}", previous.id());
    }
    bar.reset();

    debug!(
        "filter: attached listener {} over {} control(s)",
        handle.id(),
        bar.controls.len()
    );
    Some(handle)
}

/// Handle a click on filter control `index`.
///
/// Ignored (returns `false`) when no listener is attached or the index does
/// not name a control.
pub fn click_filter(page: &mut Page, index: usize) -> bool {
    let Some(bar) = page.filter.as_mut() else {
        return false;
    };
    if bar.listener().is_none() {
        debug!("filter: click on control {index} with no listener attached");
        return false;
    }
    if !bar.select(index) {
        warn!("filter: no control at index {index}");
        return false;
    }

    let showing = bar.showing().clone();
    debug!(
        "filter: showing {showing} ({} of {} item(s))",
        page.visible_items().len(),
        page.items().len()
    );
    true
}
