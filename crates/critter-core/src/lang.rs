//! Interface languages the site can be toggled between.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A language the page chrome can be displayed in.
///
/// Essays themselves may be written in other languages (e.g. `ja`); those
/// are plain codes on the manifest entries and never become toggle targets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Zh,
}

impl Lang {
    /// Every interface language, in toggle order.
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Zh];

    /// Short code as stored in preferences and used in the dictionary.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// Parse a short code. Only the exact interface codes are accepted.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "en" => Some(Self::En),
            "zh" => Some(Self::Zh),
            _ => None,
        }
    }

    /// The other interface language.
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::En,
        }
    }

    /// Value for the document-level `lang` attribute.
    pub fn html_lang(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh-Hans",
        }
    }

    /// Class flag on the document root, used by the stylesheet.
    pub fn class_flag(self) -> &'static str {
        match self {
            Self::En => "lang-en",
            Self::Zh => "lang-zh",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("unsupported language '{s}' (expected en or zh)"))
    }
}
