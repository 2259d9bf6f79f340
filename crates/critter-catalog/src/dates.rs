//! Per-language publication dates ("March 2024", "2024年3月").

use chrono::{Datelike, NaiveDate};
use tracing::debug;

/// Locale a date is displayed in, chosen from the essay's language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayLocale {
    EnUs,
    ZhCn,
    JaJp,
}

impl DisplayLocale {
    /// `zh` and `ja` get their own locale; everything else reads as US English.
    pub fn for_lang(lang: &str) -> Self {
        match lang {
            "zh" => Self::ZhCn,
            "ja" => Self::JaJp,
            _ => Self::EnUs,
        }
    }

    /// BCP 47 tag of the locale.
    pub fn tag(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::ZhCn => "zh-CN",
            Self::JaJp => "ja-JP",
        }
    }

    /// Long month and numeric year.
    pub fn month_year(self, date: NaiveDate) -> String {
        match self {
            Self::EnUs => date.format("%B %Y").to_string(),
            Self::ZhCn | Self::JaJp => format!("{}年{}月", date.year(), date.month()),
        }
    }
}

/// Format a `YYYY-MM-DD` date for an essay written in `lang`.
///
/// An empty date formats as an empty string. Input that is not a calendar
/// date is returned unchanged.
pub fn format_date(date: &str, lang: &str) -> String {
    if date.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => DisplayLocale::for_lang(lang).month_year(parsed),
        Err(e) => {
            debug!("unparseable essay date '{date}': {e}");
            date.to_string()
        }
    }
}
