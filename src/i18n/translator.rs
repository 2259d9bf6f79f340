use critter_core::{context::LanguageContext, lang::Lang, page::Page};
use critter_memory::Store;
use tracing::{debug, info};

use super::lookup;

/// Applies the dictionary to pages and owns the session's current language.
pub struct Translator {
    store: Store,
    context: LanguageContext,
}

impl Translator {
    /// Create a translator starting in `context`'s language.
    pub fn new(store: Store, context: LanguageContext) -> Self {
        Self { store, context }
    }

    /// Create a translator starting in the persisted language.
    pub async fn from_store(store: Store) -> Self {
        let initial = store.preferred_language().await;
        debug!("translator: starting in {initial}");
        Self::new(store, LanguageContext::new(initial))
    }

    /// Language currently applied.
    pub fn current(&self) -> Lang {
        self.context.current()
    }

    /// Switch the session to `lang`, persist it, and translate `page`.
    pub async fn apply_language(&mut self, page: &mut Page, lang: Lang) {
        self.context.set(lang);
        self.store.set_preferred_language(lang).await;
        let replaced = translate_page(page, lang);
        info!(
            "language applied: {lang} ({replaced} element(s) on {})",
            page.location()
        );
    }

    /// Flip between English and Chinese. Returns the new language.
    pub async fn toggle_language(&mut self, page: &mut Page) -> Lang {
        let next = self.context.next();
        self.apply_language(page, next).await;
        next
    }
}

/// Set the document-level language markers and replace the text of every
/// tagged element the dictionary covers. Returns how many were replaced.
pub fn translate_page(page: &mut Page, lang: Lang) -> usize {
    page.lang_attr = lang.html_lang().to_string();
    for other in Lang::ALL {
        page.classes.remove(other.class_flag());
    }
    page.classes.insert(lang.class_flag().to_string());

    let mut replaced = 0;
    for text in page.translatable_mut() {
        let Some(key) = text.key.as_deref() else {
            continue;
        };
        match lookup(key, lang) {
            Some(value) => {
                text.value = value.to_string();
                replaced += 1;
            }
            None => debug!("no {lang} translation for '{key}', keeping text"),
        }
    }
    replaced
}
