use crate::lang::Lang;

/// The session's active interface language.
///
/// Created once at startup from the persisted preference and threaded through
/// every component that needs to know which language is showing. Only the
/// translator mutates it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageContext {
    current: Lang,
}

impl LanguageContext {
    /// Start a session in `initial`.
    pub fn new(initial: Lang) -> Self {
        Self { current: initial }
    }

    /// The language currently applied.
    pub fn current(&self) -> Lang {
        self.current
    }

    /// Record that `lang` is now applied.
    pub fn set(&mut self, lang: Lang) {
        self.current = lang;
    }

    /// The language a toggle would switch to.
    pub fn next(&self) -> Lang {
        self.current.toggled()
    }
}
