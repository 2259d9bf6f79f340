//! Language labels and the meta line under each essay title.

use critter_core::manifest::EssayEntry;

use crate::dates::format_date;

/// Human-readable name of an essay language, or the raw code when unknown.
pub fn language_label(code: &str) -> &str {
    match code {
        "en" => "English",
        "zh" => "中文",
        "ja" => "日本語",
        other => other,
    }
}

/// `<date> · <language>` for an entry, dated in the entry's own language.
pub fn meta_line(entry: &EssayEntry) -> String {
    format!(
        "{} · {}",
        format_date(&entry.published, &entry.lang),
        language_label(&entry.lang)
    )
}
