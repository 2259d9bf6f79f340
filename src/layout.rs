//! Markup of the site's pages, as shipped before any script runs.
//!
//! Every page shares the nav chrome; the essay list page adds the filter bar
//! and list container, and essay pages add the date slot.

use critter_core::{
    config::SiteConfig,
    page::{FilterControl, FilterTarget, Page, Text},
};

/// Build the page served at `location` (e.g. `/essays.html`).
pub fn page_for(location: &str, site: &SiteConfig) -> Page {
    let page = chrome(Page::new(location));
    let path = location.trim_start_matches('/');
    let essays_prefix = format!("{}/", site.essays_dir.trim_matches('/'));

    match path {
        "" | "index.html" => page
            .with_element("h1", "hero_title", "A Curious Critter")
            .with_element("p", "hero_bio", "I used to do things. Now I do other things.")
            .with_element("p", "home_essays_desc", "— Thoughts, in several languages.")
            .with_element(
                "p",
                "home_quotes_desc",
                "— Words worth keeping, and some reflections.",
            ),
        "essays.html" => page
            .with_element("h1", "essays_title", "Essays")
            .with_filter(filter_controls())
            .with_essay_list(""),
        "quotes.html" => page
            .with_element("h1", "quotes_title", "Quotes & Reflections")
            .with_element("span", "reflection_label", "Reflection"),
        _ if path.starts_with(&essays_prefix) && path.ends_with(".html") => page
            .with_element("a", "back_essays", "← Essays")
            .with_essay_date(&site.date_fallback),
        _ => page,
    }
}

fn chrome(page: Page) -> Page {
    page.with_element("a", "site_name", "A Curious Critter")
        .with_element("a", "nav_essays", "Essays")
        .with_element("a", "nav_quotes", "Quotes")
        .with_element("button", "lang_toggle", "中文")
}

fn filter_controls() -> Vec<FilterControl> {
    let mut all = FilterControl::new(FilterTarget::All, Text::keyed("filter_all", "All"));
    all.active = true;
    vec![
        all,
        FilterControl::new(FilterTarget::parse("en"), Text::plain("English")),
        FilterControl::new(FilterTarget::parse("zh"), Text::plain("中文")),
        FilterControl::new(FilterTarget::parse("ja"), Text::plain("日本語")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{lookup, KEYS};
    use critter_core::lang::Lang;

    #[test]
    fn test_home_page() {
        let page = page_for("/", &SiteConfig::default());
        assert_eq!(page.text_of("hero_title"), Some("A Curious Critter"));
        assert!(page.essay_list.is_none());
        assert!(page.essay_date.is_none());
        assert!(page.filter.is_none());
        let index = page_for("index.html", &SiteConfig::default());
        assert_eq!(index.elements, page.elements);
    }

    #[test]
    fn test_essays_page_has_list_and_filter() {
        let page = page_for("/essays.html", &SiteConfig::default());
        assert!(page.essay_list.is_some());
        let bar = page.filter.as_ref().unwrap();
        assert_eq!(bar.controls.len(), 4);
        assert_eq!(bar.showing(), &FilterTarget::All);
        assert!(bar.controls[0].active);
    }

    #[test]
    fn test_essay_page_uses_configured_fallback() {
        let site = SiteConfig {
            date_fallback: "Undated".to_string(),
            ..SiteConfig::default()
        };
        let page = page_for("/essays/on-moss.html", &site);
        assert_eq!(page.essay_date.as_deref(), Some("Undated"));
        assert_eq!(page.text_of("back_essays"), Some("← Essays"));
        assert!(page.essay_list.is_none());
    }

    #[test]
    fn test_unknown_page_is_chrome_only() {
        let page = page_for("/about.html", &SiteConfig::default());
        assert_eq!(page.elements.len(), 4);
        assert!(page.essay_date.is_none());
        assert!(page_for("/essays/notes.txt", &SiteConfig::default())
            .essay_date
            .is_none());
    }

    #[test]
    fn test_shipped_text_is_english_dictionary_text() {
        let site = SiteConfig::default();
        for location in ["/index.html", "/essays.html", "/quotes.html", "/essays/a.html"] {
            let mut page = page_for(location, &site);
            for text in page.translatable_mut() {
                let key = text.key.clone().unwrap();
                assert!(KEYS.contains(&key.as_str()), "unknown key '{key}'");
                assert_eq!(Some(text.value.as_str()), lookup(&key, Lang::En));
            }
        }
    }
}
