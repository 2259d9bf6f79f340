use super::*;

fn item(lang: &str, title: &str) -> EssayItem {
    EssayItem {
        lang: lang.to_string(),
        title: title.to_string(),
        href: format!("essays/{title}.html"),
        meta: String::new(),
        excerpt: String::new(),
    }
}

fn controls() -> Vec<FilterControl> {
    vec![
        FilterControl::new(FilterTarget::All, Text::keyed("filter_all", "All")),
        FilterControl::new(FilterTarget::parse("en"), Text::plain("English")),
        FilterControl::new(FilterTarget::parse("zh"), Text::plain("中文")),
    ]
}

#[test]
fn test_file_name_is_last_segment() {
    assert_eq!(Page::new("/essays/on-moss.html").file_name(), "on-moss.html");
    assert_eq!(Page::new("essays.html").file_name(), "essays.html");
    assert_eq!(Page::new("/essays/").file_name(), "");
}

#[test]
fn test_resolve_relative_to_page_directory() {
    assert_eq!(
        Page::new("/essays.html").resolve("essays/manifest.json"),
        "essays/manifest.json"
    );
    assert_eq!(
        Page::new("/essays/on-moss.html").resolve("manifest.json"),
        "essays/manifest.json"
    );
    assert_eq!(
        Page::new("/blog/essays/x.html").resolve("manifest.json"),
        "blog/essays/manifest.json"
    );
    assert_eq!(Page::new("index.html").resolve("manifest.json"), "manifest.json");
}

#[test]
fn test_translatable_skips_plain_text() {
    let mut page = Page::new("/index.html")
        .with_element("h1", "hero_title", "A Curious Critter")
        .with_plain_element("p", "untranslated")
        .with_filter(controls());
    let keys: Vec<String> = page
        .translatable_mut()
        .map(|t| t.key.clone().unwrap())
        .collect();
    assert_eq!(keys, vec!["hero_title", "filter_all"]);
}

#[test]
fn test_text_of_reads_filter_labels() {
    let page = Page::new("/essays.html").with_filter(controls());
    assert_eq!(page.text_of("filter_all"), Some("All"));
    assert_eq!(page.text_of("missing"), None);
}

#[test]
fn test_with_filter_honors_markup_default() {
    let mut marked = controls();
    marked[2].active = true;
    let page = Page::new("/essays.html").with_filter(marked);
    let bar = page.filter.as_ref().unwrap();
    assert_eq!(bar.showing(), &FilterTarget::parse("zh"));
    assert!(bar.listener().is_none());
}

#[test]
fn test_filter_select_marks_exactly_one_active() {
    let mut bar = FilterBar::new(controls());
    assert!(bar.select(1));
    assert!(bar.select(2));
    let active: Vec<bool> = bar.controls.iter().map(|c| c.active).collect();
    assert_eq!(active, vec![false, false, true]);
    assert!(!bar.select(9));
    assert_eq!(bar.showing(), &FilterTarget::parse("zh"));
}

#[test]
fn test_filter_reset_selects_all_control() {
    let mut bar = FilterBar::new(controls());
    bar.select(2);
    bar.reset();
    assert_eq!(bar.showing(), &FilterTarget::All);
    assert!(bar.controls[0].active);
    assert!(!bar.controls[2].active);
}

#[test]
fn test_attach_replaces_listener() {
    let mut bar = FilterBar::new(controls());
    let (prev, first) = bar.attach();
    assert!(prev.is_none());
    let (prev, second) = bar.attach();
    assert_eq!(prev, Some(first));
    assert_ne!(first, second);
    assert_eq!(bar.listener(), Some(second));
    assert_eq!(bar.detach(), Some(second));
    assert!(bar.listener().is_none());
}

#[test]
fn test_target_admits() {
    assert!(FilterTarget::All.admits("ja"));
    assert!(FilterTarget::parse("zh").admits("zh"));
    assert!(!FilterTarget::parse("zh").admits("en"));
    assert_eq!(FilterTarget::parse(" all "), FilterTarget::All);
}

#[test]
fn test_visible_items_follow_selection() {
    let mut page = Page::new("/essays.html")
        .with_essay_list("")
        .with_filter(controls());
    page.essay_list = Some(ListContent::Items(vec![
        item("en", "a"),
        item("zh", "b"),
        item("ja", "c"),
    ]));
    assert_eq!(page.visible_items().len(), 3);

    page.filter.as_mut().unwrap().select(2);
    let titles: Vec<&str> = page.visible_items().iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["b"]);
    // Hidden items are still part of the page.
    assert_eq!(page.items().len(), 3);
}

#[test]
fn test_items_empty_for_hint() {
    let mut page = Page::new("/essays.html").with_essay_list("");
    page.essay_list = Some(ListContent::Hint("No essays yet.".to_string()));
    assert!(page.items().is_empty());
}

#[test]
fn test_escape() {
    assert_eq!(
        escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );
    assert_eq!(escape("好奇小兽"), "好奇小兽");
}

#[test]
fn test_item_html_marks_hidden() {
    let html = item("zh", "b").to_html(false);
    assert!(html.contains("data-lang=\"zh\" lang=\"zh\""));
    assert!(html.contains("style=\"display: none\""));
    assert!(html.contains("<a href=\"essays/b.html\">b</a>"));
    assert!(!item("zh", "b").to_html(true).contains("display"));
}

#[test]
fn test_page_html_snapshot() {
    let mut page = Page::new("/essays/a.html")
        .with_element("a", "back_essays", "← Essays")
        .with_essay_date("Undated");
    page.classes.insert("lang-en".to_string());
    let html = page.to_html();
    assert!(html.contains("<html lang=\"en\" class=\"lang-en\">"));
    assert!(html.contains("<a data-i18n=\"back_essays\">← Essays</a>"));
    assert!(html.contains("<p id=\"essay-date\">Undated</p>"));
    assert!(!html.contains("essay-list"));
}
