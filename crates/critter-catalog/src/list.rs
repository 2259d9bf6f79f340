//! Essay list page: fetch the manifest and render one item per essay.

use critter_core::{
    config::SiteConfig,
    manifest::EssayEntry,
    page::{EssayItem, ListContent, Page},
    traits::ManifestSource,
};
use tracing::{info, warn};

use crate::{filter::init_essay_filter, meta::meta_line};

/// Shown when the manifest is missing, unreachable, or malformed.
pub const NO_MANIFEST_HINT: &str =
    "No essays found. Run <code>python3 build.py</code> to generate the manifest.";

/// Shown when the manifest lists no essays.
pub const NO_ESSAYS_HINT: &str = "No essays yet.";

/// What `load_essay_list` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOutcome {
    /// The page has no essay list.
    Skipped,
    /// The manifest could not be loaded; the hint is showing.
    Unavailable,
    /// The manifest was empty.
    Empty,
    /// This many essays were rendered.
    Rendered(usize),
}

/// Load the manifest for the essay list page and render it.
pub async fn load_essay_list(
    page: &mut Page,
    source: &dyn ManifestSource,
    site: &SiteConfig,
) -> ListOutcome {
    if page.essay_list.is_none() {
        return ListOutcome::Skipped;
    }

    let path = page.resolve(&site.list_manifest);
    match source.fetch_manifest(&path).await {
        Ok(entries) => render_essay_list(page, &entries, &site.essays_dir),
        Err(e) => {
            warn!("essay list: {} manifest {path} unavailable: {e}", source.name());
            page.essay_list = Some(ListContent::Hint(NO_MANIFEST_HINT.to_string()));
            ListOutcome::Unavailable
        }
    }
}

/// Replace the list with `entries`, in order, then rebind the filter.
pub fn render_essay_list(page: &mut Page, entries: &[EssayEntry], essays_dir: &str) -> ListOutcome {
    if entries.is_empty() {
        page.essay_list = Some(ListContent::Hint(NO_ESSAYS_HINT.to_string()));
        return ListOutcome::Empty;
    }

    let items = entries
        .iter()
        .map(|entry| render_item(entry, essays_dir))
        .collect();
    page.essay_list = Some(ListContent::Items(items));
    init_essay_filter(page);

    info!("essay list: rendered {} essay(s)", entries.len());
    ListOutcome::Rendered(entries.len())
}

/// Derive the list item for one manifest entry.
pub fn render_item(entry: &EssayEntry, essays_dir: &str) -> EssayItem {
    EssayItem {
        lang: entry.lang.clone(),
        title: entry.title.clone(),
        href: format!("{}/{}", essays_dir.trim_end_matches('/'), entry.file),
        meta: meta_line(entry),
        excerpt: entry.excerpt.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StaticSource;
    use critter_core::page::{FilterControl, FilterTarget, Text};

    fn essays_page() -> Page {
        Page::new("/essays.html")
            .with_essay_list("")
            .with_filter(vec![
                FilterControl::new(FilterTarget::All, Text::keyed("filter_all", "All")),
                FilterControl::new(FilterTarget::parse("en"), Text::plain("English")),
                FilterControl::new(FilterTarget::parse("zh"), Text::plain("中文")),
            ])
    }

    const ONE_ENTRY: &str = r#"[{"file": "a.html", "title": "T", "excerpt": "E",
        "published": "2024-01-01", "lang": "en"}]"#;

    #[tokio::test]
    async fn test_page_without_list_is_skipped() {
        let source = StaticSource::default();
        let mut page = Page::new("/index.html");
        let outcome = load_essay_list(&mut page, &source, &SiteConfig::default()).await;
        assert_eq!(outcome, ListOutcome::Skipped);
        assert!(source.requested().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_shows_hint() {
        let source = StaticSource::default();
        let mut page = essays_page();
        let outcome = load_essay_list(&mut page, &source, &SiteConfig::default()).await;
        assert_eq!(outcome, ListOutcome::Unavailable);
        assert_eq!(
            page.essay_list,
            Some(ListContent::Hint(NO_MANIFEST_HINT.to_string()))
        );
        assert_eq!(source.requested(), vec!["essays/manifest.json"]);
    }

    #[tokio::test]
    async fn test_malformed_manifest_shows_hint() {
        let source = StaticSource::default().with("essays/manifest.json", "not json");
        let mut page = essays_page();
        let outcome = load_essay_list(&mut page, &source, &SiteConfig::default()).await;
        assert_eq!(outcome, ListOutcome::Unavailable);
        assert_eq!(
            page.essay_list,
            Some(ListContent::Hint(NO_MANIFEST_HINT.to_string()))
        );
    }

    #[tokio::test]
    async fn test_empty_manifest_shows_no_essays_hint() {
        let source = StaticSource::default().with("essays/manifest.json", "[]");
        let mut page = essays_page();
        let outcome = load_essay_list(&mut page, &source, &SiteConfig::default()).await;
        assert_eq!(outcome, ListOutcome::Empty);
        assert_eq!(
            page.essay_list,
            Some(ListContent::Hint(NO_ESSAYS_HINT.to_string()))
        );
        assert!(page.items().is_empty());
    }

    #[tokio::test]
    async fn test_single_entry_renders_one_item() {
        let source = StaticSource::default().with("essays/manifest.json", ONE_ENTRY);
        let mut page = essays_page();
        let outcome = load_essay_list(&mut page, &source, &SiteConfig::default()).await;
        assert_eq!(outcome, ListOutcome::Rendered(1));

        let items = page.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].lang, "en");
        assert_eq!(items[0].href, "essays/a.html");
        assert_eq!(items[0].title, "T");
        assert_eq!(items[0].excerpt, "E");
        assert!(items[0].meta.contains("English"));
        assert_eq!(items[0].meta, "January 2024 · English");
    }

    #[tokio::test]
    async fn test_render_keeps_manifest_order_and_binds_filter() {
        let body = r#"[
            {"file": "c.html", "title": "C", "published": "2024-05-01", "lang": "zh"},
            {"file": "b.html", "title": "B", "published": "2024-04-01", "lang": "ja"},
            {"file": "a.html", "title": "A", "published": "2024-03-01", "lang": "en"}
        ]"#;
        let source = StaticSource::default().with("essays/manifest.json", body);
        let mut page = essays_page();
        load_essay_list(&mut page, &source, &SiteConfig::default()).await;

        let titles: Vec<&str> = page.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "B", "A"]);
        assert_eq!(page.items()[0].meta, "2024年5月 · 中文");
        assert_eq!(page.items()[1].meta, "2024年4月 · 日本語");
        assert!(page.filter.as_ref().unwrap().listener().is_some());
    }

    #[tokio::test]
    async fn test_rerender_resets_filter() {
        let body = r#"[
            {"file": "a.html", "title": "A", "lang": "en"},
            {"file": "b.html", "title": "B", "lang": "zh"}
        ]"#;
        let source = StaticSource::default().with("essays/manifest.json", body);
        let site = SiteConfig::default();
        let mut page = essays_page();

        load_essay_list(&mut page, &source, &site).await;
        crate::filter::click_filter(&mut page, 2);
        assert_eq!(page.visible_items().len(), 1);

        load_essay_list(&mut page, &source, &site).await;
        assert_eq!(page.visible_items().len(), 2);
        assert_eq!(
            page.filter.as_ref().unwrap().showing(),
            &FilterTarget::All
        );
    }

    #[test]
    fn test_render_item_custom_essays_dir() {
        let entry = critter_core::manifest::parse_manifest(ONE_ENTRY).unwrap().remove(0);
        let item = render_item(&entry, "writing/");
        assert_eq!(item.href, "writing/a.html");
    }

    #[test]
    fn test_list_html_contains_hint_markup() {
        let mut page = essays_page();
        render_essay_list(&mut page, &[], "essays");
        assert_eq!(
            page.essay_list_html().unwrap(),
            "<li class=\"essay-list-hint\">No essays yet.</li>"
        );
    }
}
