// Page language: which strings to show, which direction to lay out in, and
// the single persisted preference.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// `localStorage` key holding the chosen language code.
pub const LANG_STORAGE_KEY: &str = "lang";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    En,
    He,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LangError {
    #[error("unknown language code {0:?}")]
    Unknown(String),
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::He => "he",
        }
    }

    /// Value for the root `dir` attribute.
    pub fn dir(self) -> &'static str {
        match self {
            Lang::En => "ltr",
            Lang::He => "rtl",
        }
    }

    pub fn toggled(self) -> Lang {
        match self {
            Lang::En => Lang::He,
            Lang::He => Lang::En,
        }
    }

    /// Language currently shown, from the root `data-lang` attribute.
    /// Missing or unrecognised values mean the authored default.
    pub fn from_root_attr(attr: Option<&str>) -> Lang {
        attr.and_then(|a| a.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for Lang {
    type Err = LangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Lang::En),
            "he" => Ok(Lang::He),
            other => Err(LangError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Per-language text for one element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocalizedText {
    pub en: Option<String>,
    pub he: Option<String>,
}

impl LocalizedText {
    /// Text for `lang`; empty strings count as missing.
    pub fn get(&self, lang: Lang) -> Option<&str> {
        let text = match lang {
            Lang::En => self.en.as_deref(),
            Lang::He => self.he.as_deref(),
        };
        text.filter(|t| !t.is_empty())
    }
}

/// Everything that changes on the page when a language is applied.
#[derive(Debug, PartialEq)]
pub struct LanguageUpdate<'a, K> {
    pub lang: &'static str,
    pub dir: &'static str,
    pub data_lang: &'static str,
    /// Elements whose text content is replaced, with the new text.
    pub texts: Vec<(&'a K, &'a str)>,
}

/// Compute the page update for `lang`. Entries without text for that
/// language are left out and keep whatever they show.
pub fn apply_language<K>(lang: Lang, entries: &[(K, LocalizedText)]) -> LanguageUpdate<'_, K> {
    let texts = entries
        .iter()
        .filter_map(|(key, text)| text.get(lang).map(|t| (key, t)))
        .collect();
    LanguageUpdate {
        lang: lang.code(),
        dir: lang.dir(),
        data_lang: lang.code(),
        texts,
    }
}

/// String key/value persistence.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// The persisted language choice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LangPreference {
    stored: Option<String>,
}

impl LangPreference {
    pub fn load(store: &impl PreferenceStore) -> Self {
        Self {
            stored: store.get(LANG_STORAGE_KEY),
        }
    }

    pub fn save(&mut self, store: &mut impl PreferenceStore, lang: Lang) {
        store.set(LANG_STORAGE_KEY, lang.code());
        self.stored = Some(lang.code().to_string());
    }

    pub fn stored(&self) -> Option<&str> {
        self.stored.as_deref()
    }

    /// Language to apply at page init, if any. The page is authored in
    /// English, so only a recognised non-English choice needs applying.
    pub fn restore_target(&self) -> Option<Lang> {
        let raw = self.stored.as_deref()?;
        match raw.parse::<Lang>() {
            Ok(Lang::En) => None,
            Ok(lang) => Some(lang),
            Err(e) => {
                log::warn!("[lang] ignoring stored preference: {}", e);
                None
            }
        }
    }
}
