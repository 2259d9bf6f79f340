//! # critter-catalog
//!
//! Essay catalog: manifest sources, the list and detail renderers, date and
//! label formatting, and the language filter over rendered essays.

pub mod dates;
pub mod detail;
pub mod filter;
pub mod list;
pub mod meta;
pub mod source;

#[cfg(test)]
mod testing;

pub use dates::format_date;
pub use detail::{load_essay_date, DateOutcome};
pub use filter::{click_filter, init_essay_filter};
pub use list::{load_essay_list, render_essay_list, ListOutcome, NO_ESSAYS_HINT, NO_MANIFEST_HINT};
pub use meta::{language_label, meta_line};
pub use source::{source_for, FileSource, HttpSource};
