//! Internationalization: the site dictionary and the page translator.
//!
//! `lookup(key, lang)` reads the static dictionary; `Translator` applies it to
//! a page and owns the session's current language.
//! Supported languages: English (default), Simplified Chinese.

mod labels;
mod translator;


pub use translator::Translator;

use critter_core::lang::Lang;

/// Every key the site markup uses.
pub const KEYS: &[&str] = &[
    "site_name",
    "nav_essays",
    "nav_quotes",
    "lang_toggle",
    "hero_title",
    "hero_bio",
    "home_essays_desc",
    "home_quotes_desc",
    "essays_title",
    "quotes_title",
    "filter_all",
    "reflection_label",
    "back_essays",
];

/// Return the display string for `key` in `lang`, if the dictionary has one.
pub fn lookup(key: &str, lang: Lang) -> Option<&'static str> {
    labels::lookup(key, lang)
}
