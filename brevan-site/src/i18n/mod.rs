//! Client-side translation layer.
//!
//! Text nodes carry a translation key; switching locale replaces each node's
//! text with the dictionary entry for that key. A key that is missing or
//! maps to an empty string leaves the node untouched, and a locale without a
//! table of its own reads from the French one.

mod store;

use std::collections::HashMap;

use brevan_model::Locale;
use tracing::{debug, warn};

use crate::error::{Result, SiteError};
use crate::nav_letters::NavLabels;

pub use store::{FileLocaleStore, LocalePreferenceStore, MemoryLocaleStore};

const EMBEDDED_DICTIONARY: &str = include_str!("../../assets/translations.json");

type Table = HashMap<String, String>;

#[derive(Debug, Clone)]
pub struct Dictionary {
    tables: HashMap<String, Table>,
}

impl Dictionary {
    /// The dictionary shipped with the site.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_DICTIONARY)
    }

    /// Parse `{ "<locale>": { "<key>": "<text>" } }`. The default locale's
    /// table is required.
    pub fn from_json(json: &str) -> Result<Self> {
        let tables: HashMap<String, Table> =
            serde_json::from_str(json).map_err(SiteError::Dictionary)?;
        let default = Locale::default().code();
        if !tables.contains_key(default) {
            return Err(SiteError::MissingDefaultTable(default));
        }
        debug!(locales = tables.len(), "translation dictionary loaded");
        Ok(Self { tables })
    }

    pub fn has_table(&self, code: &str) -> bool {
        self.tables.contains_key(code)
    }

    fn table(&self, code: &str) -> Option<&Table> {
        self.tables
            .get(code)
            .or_else(|| self.tables.get(Locale::default().code()))
    }

    /// Number of entries that `code` resolves to.
    pub fn len(&self, code: &str) -> usize {
        self.table(code).map_or(0, HashMap::len)
    }

    /// Non-empty entry for `key` in `code`'s table.
    pub fn lookup(&self, code: &str, key: &str) -> Option<&str> {
        self.table(code)?
            .get(key)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }
}

/// A text node bound to a translation key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18nSlot {
    pub key: String,
    pub text: String,
}

impl I18nSlot {
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
        }
    }
}

/// Everything on a page that reacts to a locale switch.
#[derive(Debug, Clone, Default)]
pub struct PageText {
    pub slots: Vec<I18nSlot>,
    pub labels: NavLabels,
}

#[derive(Debug, Clone)]
pub struct Translator {
    dictionary: Dictionary,
    locale: Locale,
}

impl Translator {
    pub fn new(dictionary: Dictionary, locale: Locale) -> Self {
        Self { dictionary, locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn translate(&self, key: &str) -> Option<&str> {
        self.dictionary.lookup(self.locale.code(), key)
    }

    /// Translated text for `key`, or `current` unchanged.
    pub fn text_for<'a>(&'a self, key: &str, current: &'a str) -> &'a str {
        self.translate(key).unwrap_or(current)
    }

    /// Rewrite every slot; returns how many changed.
    pub fn apply(&self, slots: &mut [I18nSlot]) -> usize {
        let mut changed = 0;
        for slot in slots {
            if let Some(text) = self.translate(&slot.key)
                && slot.text != text
            {
                slot.text = text.to_string();
                changed += 1;
            }
        }
        changed
    }

    /// Translate keyed labels, then re-wrap all of them.
    pub fn relabel(&self, labels: &mut NavLabels) {
        for label in labels.iter_mut() {
            let Some(text) = label.key().and_then(|key| self.translate(key))
            else {
                continue;
            };
            let text = text.to_string();
            label.set_text(&text);
        }
        labels.rewrap_all();
    }

    pub fn apply_page(&self, page: &mut PageText) -> usize {
        let changed = self.apply(&mut page.slots);
        self.relabel(&mut page.labels);
        changed
    }
}

/// What the page chrome needs after a locale switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleChange {
    pub locale: Locale,
    /// Value for the document's `lang` attribute.
    pub html_lang: &'static str,
    pub flag_src: &'static str,
}

impl From<Locale> for LocaleChange {
    fn from(locale: Locale) -> Self {
        Self {
            locale,
            html_lang: locale.code(),
            flag_src: locale.flag_src(),
        }
    }
}

/// One button of the always-visible selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorButton {
    pub locale: Locale,
    pub active: bool,
}

/// Drives locale selection and its persistence.
#[derive(Debug)]
pub struct LanguageSwitcher<S> {
    translator: Translator,
    store: S,
}

impl<S: LocalePreferenceStore> LanguageSwitcher<S> {
    /// Restore the stored locale. An unreadable or unknown preference
    /// falls back to French.
    pub fn new(dictionary: Dictionary, store: S) -> Self {
        let stored = store.load().unwrap_or_else(|error| {
            warn!(%error, "ignoring unreadable locale preference");
            None
        });
        let locale = Locale::from_code_or_default(stored.as_deref());
        debug!(%locale, "initial locale");
        Self {
            translator: Translator::new(dictionary, locale),
            store,
        }
    }

    pub fn locale(&self) -> Locale {
        self.translator.locale()
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Initial paint: translate the page with the restored locale.
    pub fn init(&self, page: &mut PageText) -> LocaleChange {
        self.translator.apply_page(page);
        self.locale().into()
    }

    /// Switch locale, persist it and retranslate the page. A failed save is
    /// logged; the switch still happens.
    pub fn select(&mut self, locale: Locale, page: &mut PageText) -> LocaleChange {
        self.translator.set_locale(locale);
        if let Err(error) = self.store.save(locale.code()) {
            warn!(%error, %locale, "locale preference not saved");
        }
        let changed = self.translator.apply_page(page);
        debug!(%locale, changed, "locale switched");
        locale.into()
    }

    pub fn selector_buttons(&self) -> Vec<SelectorButton> {
        Locale::ALL
            .into_iter()
            .map(|locale| SelectorButton {
                locale,
                active: locale == self.locale(),
            })
            .collect()
    }
}

/// Dropdown variant of the selector used on older pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageMenu {
    open: bool,
}

impl LanguageMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// `aria-expanded` on the current-flag button.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    /// `aria-hidden` on the menu list.
    pub fn aria_hidden(&self) -> &'static str {
        if self.open { "false" } else { "true" }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A document click; `inside_selector` is whether it landed within the
    /// selector container.
    pub fn click(&mut self, inside_selector: bool) {
        if !inside_selector {
            self.open = false;
        }
    }

    pub fn escape(&mut self) {
        self.open = false;
    }

    /// Picking an entry closes the menu.
    pub fn choose<S: LocalePreferenceStore>(
        &mut self,
        switcher: &mut LanguageSwitcher<S>,
        locale: Locale,
        page: &mut PageText,
    ) -> LocaleChange {
        self.open = false;
        switcher.select(locale, page)
    }
}
