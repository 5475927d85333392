use crate::i18n::locales::{DEFAULT_LANG, is_supported, load_translations};
use serde_json::Value;
use std::cell::RefCell;

/// `localStorage` key holding the chosen UI language.
pub const LOCALE_STORAGE_KEY: &str = "copa.locale";

pub(super) struct I18nBundle {
    pub lang: String,
    pub translations: Value,
    pub fallback: Value,
}

fn empty() -> Value {
    Value::Object(serde_json::Map::new())
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    if !is_supported(lang) {
        return None;
    }
    Some(I18nBundle {
        lang: lang.to_string(),
        translations: load_translations(lang)?,
        fallback: load_translations(DEFAULT_LANG).unwrap_or_else(empty),
    })
}

fn default_bundle() -> I18nBundle {
    build_bundle(DEFAULT_LANG).unwrap_or_else(|| I18nBundle {
        lang: DEFAULT_LANG.to_string(),
        translations: empty(),
        fallback: empty(),
    })
}

fn saved_lang() -> Option<String> {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        use copa_core::storage::KeyValueStorage;
        crate::storage::WebStorage
            .get(LOCALE_STORAGE_KEY)
            .unwrap_or_else(|err| {
                log::debug!("saved language unreadable: {err}");
                None
            })
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        None
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new(
        saved_lang()
            .and_then(|lang| build_bundle(&lang))
            .unwrap_or_else(default_bundle),
    );
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Switch the UI language.
///
/// Unknown codes are ignored. The choice is written to `<html lang>` and
/// persisted for the next visit.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        log::warn!("unsupported language {lang}");
        return;
    };
    CURRENT.with(|cell| cell.replace(bundle));
    #[cfg(target_arch = "wasm32")]
    {
        use copa_core::storage::KeyValueStorage;
        crate::dom::set_document_lang(lang);
        if let Err(err) = crate::storage::WebStorage.set(LOCALE_STORAGE_KEY, lang) {
            log::warn!("language choice not saved: {err}");
        }
    }
}

/// Code of the active language.
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}
