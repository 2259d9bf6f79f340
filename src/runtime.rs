//! Page runtime: the single-threaded event loop a page's script runs in.
//!
//! Events are handled strictly one at a time, each to completion, in the
//! order they were sent. Manifest fetches are awaited inside the handler that
//! issues them.

use critter_catalog::{click_filter, load_essay_date, load_essay_list};
use critter_core::{config::SiteConfig, page::Page, traits::ManifestSource};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::i18n::Translator;

/// Something that happens on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The document finished loading.
    Ready,
    /// The language toggle was clicked.
    ToggleLanguage,
    /// Filter control at this index was clicked.
    FilterClicked(usize),
}

/// One page plus everything its script needs.
pub struct PageRuntime {
    page: Page,
    translator: Translator,
    source: Box<dyn ManifestSource>,
    site: SiteConfig,
}

impl PageRuntime {
    pub fn new(
        page: Page,
        translator: Translator,
        source: Box<dyn ManifestSource>,
        site: SiteConfig,
    ) -> Self {
        Self {
            page,
            translator,
            source,
            site,
        }
    }

    #[cfg(test)]
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Handle one event to completion.
    pub async fn handle(&mut self, event: PageEvent) {
        debug!("page {}: {event:?}", self.page.location());
        match event {
            PageEvent::Ready => {
                let lang = self.translator.current();
                self.translator.apply_language(&mut self.page, lang).await;
                let list = load_essay_list(&mut self.page, self.source.as_ref(), &self.site).await;
                let date = load_essay_date(&mut self.page, self.source.as_ref(), &self.site).await;
                debug!("page ready: list {list:?}, date {date:?}");
            }
            PageEvent::ToggleLanguage => {
                self.translator.toggle_language(&mut self.page).await;
            }
            PageEvent::FilterClicked(index) => {
                click_filter(&mut self.page, index);
            }
        }
    }

    /// Handle events until every sender is dropped, then hand back the page.
    pub async fn run(mut self, mut rx: mpsc::Receiver<PageEvent>) -> Page {
        info!(
            "page runtime started | {} | source: {}",
            self.page.location(),
            self.source.name()
        );
        while let Some(event) = rx.recv().await {
            self.handle(event).await;
        }
        info!("page runtime stopped | {}", self.page.location());
        self.page
    }
}
