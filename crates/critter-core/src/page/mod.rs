//! In-memory page model.
//!
//! This is the markup contract the runtime consumes: elements tagged with a
//! translation key, an optional essay-list container, an optional essay date
//! slot, and an optional bar of language filter controls. Components read and
//! write it; nothing else holds display state.

mod filter;
mod html;

#[cfg(test)]
mod tests;

pub use filter::*;
pub use html::escape;

use std::collections::BTreeSet;

/// Attribute carrying an element's translation key.
pub const TRANSLATION_ATTR: &str = "data-i18n";

/// Identifier of the essay date slot on individual essay pages.
pub const ESSAY_DATE_ID: &str = "essay-date";

/// Text content, optionally tagged with a translation key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub key: Option<String>,
    pub value: String,
}

impl Text {
    /// Text with a translation key.
    pub fn keyed(key: &str, value: &str) -> Self {
        Self {
            key: Some(key.to_string()),
            value: value.to_string(),
        }
    }

    /// Text that is never translated.
    pub fn plain(value: &str) -> Self {
        Self {
            key: None,
            value: value.to_string(),
        }
    }
}

/// A static element of the page (heading, nav link, paragraph).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub text: Text,
}

/// One rendered essay in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EssayItem {
    /// Language tag used for filtering and as the item's content language.
    pub lang: String,
    pub title: String,
    pub href: String,
    pub meta: String,
    pub excerpt: String,
}

/// Contents of the essay-list container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListContent {
    /// Whatever the page shipped with before any render.
    Static(String),
    /// A single hint line (trusted markup).
    Hint(String),
    /// Rendered essays, in manifest order.
    Items(Vec<EssayItem>),
}

/// A page of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    location: String,
    /// Document-level `lang` attribute.
    pub lang_attr: String,
    /// Classes on the document root.
    pub classes: BTreeSet<String>,
    pub elements: Vec<Element>,
    pub essay_list: Option<ListContent>,
    pub essay_date: Option<String>,
    pub filter: Option<FilterBar>,
}

impl Page {
    /// An empty page at `location` (a URL path such as `/essays/a.html`).
    pub fn new(location: &str) -> Self {
        Self {
            location: location.to_string(),
            lang_attr: "en".to_string(),
            classes: BTreeSet::new(),
            elements: Vec::new(),
            essay_list: None,
            essay_date: None,
            filter: None,
        }
    }

    /// Add an element carrying translation `key`.
    pub fn with_element(mut self, tag: &str, key: &str, text: &str) -> Self {
        self.elements.push(Element {
            tag: tag.to_string(),
            text: Text::keyed(key, text),
        });
        self
    }

    /// Add an element that is never translated.
    pub fn with_plain_element(mut self, tag: &str, text: &str) -> Self {
        self.elements.push(Element {
            tag: tag.to_string(),
            text: Text::plain(text),
        });
        self
    }

    /// Add an (initially static) essay-list container.
    pub fn with_essay_list(mut self, initial: &str) -> Self {
        self.essay_list = Some(ListContent::Static(initial.to_string()));
        self
    }

    /// Add the essay date slot with its fallback text.
    pub fn with_essay_date(mut self, fallback: &str) -> Self {
        self.essay_date = Some(fallback.to_string());
        self
    }

    /// Add a filter bar. The first control marked active in `controls` is the
    /// default selection; otherwise everything is shown.
    pub fn with_filter(mut self, controls: Vec<FilterControl>) -> Self {
        let default = controls.iter().position(|c| c.active);
        let mut bar = FilterBar::new(controls);
        if let Some(index) = default {
            bar.select(index);
        }
        self.filter = Some(bar);
        self
    }

    /// URL path of the page.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Last path segment of the location (empty for directory URLs).
    pub fn file_name(&self) -> &str {
        self.location.rsplit('/').next().unwrap_or_default()
    }

    /// Resolve `relative` against the page's directory, the way a browser
    /// resolves a relative URL. The result is relative to the site root.
    pub fn resolve(&self, relative: &str) -> String {
        let path = self.location.trim_start_matches('/');
        match path.rsplit_once('/') {
            Some((dir, _)) if !dir.is_empty() => format!("{dir}/{relative}"),
            _ => relative.to_string(),
        }
    }

    /// Every piece of text that carries a translation key.
    pub fn translatable_mut(&mut self) -> impl Iterator<Item = &mut Text> + '_ {
        let controls = self
            .filter
            .iter_mut()
            .flat_map(|bar| bar.controls.iter_mut().map(|c| &mut c.label));
        self.elements
            .iter_mut()
            .map(|e| &mut e.text)
            .chain(controls)
            .filter(|t| t.key.is_some())
    }

    /// Current text of the first element tagged `key`.
    pub fn text_of(&self, key: &str) -> Option<&str> {
        let controls = self
            .filter
            .iter()
            .flat_map(|bar| bar.controls.iter().map(|c| &c.label));
        self.elements
            .iter()
            .map(|e| &e.text)
            .chain(controls)
            .find(|t| t.key.as_deref() == Some(key))
            .map(|t| t.value.as_str())
    }

    /// Rendered essays, or an empty slice when the list shows a hint.
    pub fn items(&self) -> &[EssayItem] {
        match &self.essay_list {
            Some(ListContent::Items(items)) => items,
            _ => &[],
        }
    }

    /// Whether `item` is currently shown by the filter.
    pub fn is_visible(&self, item: &EssayItem) -> bool {
        self.filter
            .as_ref()
            .map(|bar| bar.is_visible(&item.lang))
            .unwrap_or(true)
    }

    /// Rendered essays the filter currently shows.
    pub fn visible_items(&self) -> Vec<&EssayItem> {
        self.items()
            .iter()
            .filter(|item| self.is_visible(item))
            .collect()
    }
}
