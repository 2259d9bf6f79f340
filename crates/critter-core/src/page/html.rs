//! HTML snapshot of a page, matching the site's stylesheet hooks.

use std::fmt::Write;

use super::{EssayItem, FilterBar, ListContent, Page, Text, ESSAY_DATE_ID, TRANSLATION_ATTR};

/// Escape text for HTML content and double-quoted attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn key_attr(text: &Text) -> String {
    match &text.key {
        Some(key) => format!(" {TRANSLATION_ATTR}=\"{}\"", escape(key)),
        None => String::new(),
    }
}

impl EssayItem {
    /// Markup for one list item. Hidden items stay in the document.
    pub fn to_html(&self, visible: bool) -> String {
        let lang = escape(&self.lang);
        let style = if visible {
            ""
        } else {
            " style=\"display: none\""
        };
        format!(
            "<li class=\"essay-item\" data-lang=\"{lang}\" lang=\"{lang}\"{style}>\
             <div class=\"essay-title\"><a href=\"{}\">{}</a></div>\
             <div class=\"essay-meta\">{}</div>\
             <div class=\"essay-excerpt\">{}</div></li>",
            escape(&self.href),
            escape(&self.title),
            escape(&self.meta),
            escape(&self.excerpt),
        )
    }
}

impl FilterBar {
    /// Markup for the filter controls.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<div class=\"lang-filter\">");
        for control in &self.controls {
            let class = if control.active { " class=\"active\"" } else { "" };
            let _ = write!(
                out,
                "<button data-filter=\"{}\"{class}{}>{}</button>",
                escape(control.target.as_str()),
                key_attr(&control.label),
                escape(&control.label.value),
            );
        }
        out.push_str("</div>");
        out
    }
}

impl Page {
    /// Inner markup of the essay-list container, if the page has one.
    pub fn essay_list_html(&self) -> Option<String> {
        let content = self.essay_list.as_ref()?;
        Some(match content {
            ListContent::Static(markup) => markup.clone(),
            ListContent::Hint(hint) => format!("<li class=\"essay-list-hint\">{hint}</li>"),
            ListContent::Items(items) => items
                .iter()
                .map(|item| item.to_html(self.is_visible(item)))
                .collect::<Vec<_>>()
                .join("\n"),
        })
    }

    /// Full document snapshot.
    pub fn to_html(&self) -> String {
        let classes = self.classes.iter().cloned().collect::<Vec<_>>().join(" ");
        let mut out = format!(
            "<!DOCTYPE html>\n<html lang=\"{}\" class=\"{}\">\n<body>\n",
            escape(&self.lang_attr),
            escape(&classes)
        );

        for element in &self.elements {
            let tag = &element.tag;
            let _ = writeln!(
                out,
                "<{tag}{}>{}</{tag}>",
                key_attr(&element.text),
                escape(&element.text.value)
            );
        }

        if let Some(ref date) = self.essay_date {
            let _ = writeln!(out, "<p id=\"{ESSAY_DATE_ID}\">{}</p>", escape(date));
        }

        if let Some(ref bar) = self.filter {
            out.push_str(&bar.to_html());
            out.push('\n');
        }

        if let Some(list) = self.essay_list_html() {
            let _ = writeln!(out, "<ul class=\"essay-list\">\n{list}\n</ul>");
        }

        out.push_str("</body>\n</html>\n");
        out
    }
}
