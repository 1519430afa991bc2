//! Translation lookup injected into rendering.
//!
//! The library never reaches for global locale state. Callers pass a [`Translator`] to
//! [`crate::Render::render`]; the English source text of a template is the lookup key and the
//! returned text must keep the same `{name}` placeholders.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use thiserror::Error;

use crate::template::placeholders_in;

/// Maps a template's English source text to a localized template.
pub trait Translator: Send + Sync {
    fn translate<'a>(&'a self, key: &'a str) -> Cow<'a, str>;
}

/// Identity translator: every key renders as its English source text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Untranslated;

impl Translator for Untranslated {
    fn translate<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(key)
    }
}

/// Any `Fn(&str) -> Option<String>` is a translator; `None` falls back to the key.
impl<F> Translator for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn translate<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        match self(key) {
            Some(text) => Cow::Owned(text),
            None => Cow::Borrowed(key),
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O failure reading catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "serde")]
    #[error("Malformed TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    #[cfg(feature = "serde")]
    #[error("Malformed JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported catalog format for {path:?} (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Placeholder mismatch for {key:?}: expected {expected:?}, found {found:?}")]
    PlaceholderMismatch {
        key: String,
        expected: Vec<String>,
        found: Vec<String>,
    },
}

/// An in-memory set of localized templates for one locale.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locale: String,
    messages: HashMap<String, String>,
}

#[cfg(feature = "serde")]
#[derive(Debug, serde::Deserialize)]
struct CatalogFile {
    locale: String,
    #[serde(default)]
    messages: BTreeMap<String, String>,
}

impl Catalog {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            messages: HashMap::new(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Add a localized template for `key`.
    ///
    /// The localized text must use exactly the placeholders of the source key, otherwise a
    /// rendered message could silently lose one of the error's fields.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        localized: impl Into<String>,
    ) -> Result<(), CatalogError> {
        let key = key.into();
        let localized = localized.into();
        check_placeholders(&key, &localized)?;
        self.messages.insert(key, localized);
        Ok(())
    }

    /// Builder-style [`Catalog::insert`].
    pub fn with(
        mut self,
        key: impl Into<String>,
        localized: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        self.insert(key, localized)?;
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    #[cfg(feature = "serde")]
    pub fn from_toml_str(input: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(input)?;
        Self::from_file(file)
    }

    #[cfg(feature = "serde")]
    pub fn from_json_str(input: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(input)?;
        Self::from_file(file)
    }

    /// Load a catalog from a `.toml` or `.json` file.
    #[cfg(feature = "serde")]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let is_ext = |ext: &str| {
            path.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(ext))
        };
        let parse: fn(&str) -> Result<Self, CatalogError> = if is_ext("toml") {
            Self::from_toml_str
        } else if is_ext("json") {
            Self::from_json_str
        } else {
            return Err(CatalogError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        };
        let input = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = parse(&input)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            path = %path.display(),
            locale = %catalog.locale,
            entries = catalog.len(),
            "loaded message catalog"
        );
        Ok(catalog)
    }

    #[cfg(feature = "serde")]
    fn from_file(file: CatalogFile) -> Result<Self, CatalogError> {
        let mut catalog = Self::new(file.locale);
        for (key, localized) in file.messages {
            catalog.insert(key, localized)?;
        }
        Ok(catalog)
    }
}

impl Translator for Catalog {
    fn translate<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        match self.messages.get(key) {
            Some(text) => Cow::Borrowed(text.as_str()),
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(locale = %self.locale, "no translation, using source text");
                Cow::Borrowed(key)
            }
        }
    }
}

fn check_placeholders(key: &str, localized: &str) -> Result<(), CatalogError> {
    let mut expected = placeholders_in(key);
    let mut found = placeholders_in(localized);
    expected.sort_unstable();
    found.sort_unstable();
    if expected == found {
        return Ok(());
    }
    #[cfg(feature = "tracing")]
    tracing::warn!(?expected, ?found, "rejecting translation with mismatched placeholders");
    Err(CatalogError::PlaceholderMismatch {
        key: key.to_string(),
        expected: expected.into_iter().map(str::to_string).collect(),
        found: found.into_iter().map(str::to_string).collect(),
    })
}
