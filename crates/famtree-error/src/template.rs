//! Message templates with named placeholders.
//!
//! A template's English source text doubles as its translation key. Placeholders are written
//! `{name}`; `{{` and `}}` produce literal braces. Substitution runs after the translator has
//! returned the localized text, so a catalog entry must use the same placeholder names as its
//! source (see [`crate::translate::Catalog`]).

use std::fmt::Write as _;

use crate::translate::{Translator, Untranslated};

/// A fixed English message template and the placeholder names it uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    text: &'static str,
    placeholders: &'static [&'static str],
}

impl Template {
    pub const fn new(text: &'static str, placeholders: &'static [&'static str]) -> Self {
        Self { text, placeholders }
    }

    /// The English source text, also used as the translation key.
    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Placeholder names declared for this template.
    pub fn placeholders(&self) -> &'static [&'static str] {
        self.placeholders
    }

    /// Look the template up through `translator` and substitute `args` into the result.
    pub fn format(&self, translator: &dyn Translator, args: &[(&str, &str)]) -> String {
        let localized = translator.translate(self.text);
        substitute(&localized, args)
    }
}

/// Placeholder names appearing in `text`, deduplicated, in order of first appearance.
pub fn placeholders_in(text: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    scan(text, |piece| {
        if let Piece::Placeholder(name) = piece {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    });
    names
}

/// Replace each `{name}` in `text` with the matching value from `args`.
///
/// Placeholders without a matching argument are kept verbatim. Substituted values are not
/// scanned again.
pub fn substitute(text: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(text.len());
    scan(text, |piece| match piece {
        Piece::Literal(s) => out.push_str(s),
        Piece::Placeholder(name) => match args.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                let _ = write!(out, "{{{name}}}");
            }
        },
    });
    out
}

#[derive(Debug, PartialEq, Eq)]
enum Piece<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn scan<'a>(text: &'a str, mut sink: impl FnMut(Piece<'a>)) {
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'{' if bytes.get(i + 1) == Some(&b'{') => {
                sink(Piece::Literal(&text[start..i + 1]));
                i += 2;
                start = i;
            }
            b'}' if bytes.get(i + 1) == Some(&b'}') => {
                sink(Piece::Literal(&text[start..i + 1]));
                i += 2;
                start = i;
            }
            b'{' => {
                let name_start = i + 1;
                let mut end = name_start;
                while end < bytes.len() && is_name_byte(bytes[end]) {
                    end += 1;
                }
                if end > name_start && bytes.get(end) == Some(&b'}') {
                    if start < i {
                        sink(Piece::Literal(&text[start..i]));
                    }
                    sink(Piece::Placeholder(&text[name_start..end]));
                    i = end + 1;
                    start = i;
                } else {
                    i += 1;
                }
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        sink(Piece::Literal(&text[start..]));
    }
}

/// How-to page for backing up a Family Tree, linked from the version-skew messages.
pub const BACKUP_HOWTO_URL: &str =
    "http://www.gramps-project.org/wiki/index.php?title=How_to_make_a_backup";
/// Manual section on exporting a Family Tree.
pub const EXPORT_MANUAL_URL: &str = "http://www.gramps-project.org/wiki/index.php?title=Gramps_4.0_Wiki_Manual_-_Manage_Family_Trees#Export_into_Gramps_formats";

/// Produce the user-facing text of an error through a translator.
pub trait Render {
    fn render(&self, translator: &dyn Translator) -> String;

    /// Render with the built-in English text.
    fn render_default(&self) -> String {
        self.render(&Untranslated)
    }
}

/// Kinds whose text is a fixed [`Template`] filled from their fields.
pub trait Templated {
    const TEMPLATE: Template;

    /// Field values keyed by placeholder name.
    fn args(&self) -> Vec<(&'static str, String)>;
}

pub(crate) fn render_templated<T: Templated>(value: &T, translator: &dyn Translator) -> String {
    let args = value.args();
    let borrowed: Vec<(&str, &str)> = args.iter().map(|(k, v)| (*k, v.as_str())).collect();
    T::TEMPLATE.format(translator, &borrowed)
}

/// Implements [`Render`], `Display` and `std::error::Error` for [`Templated`] kinds.
macro_rules! templated_error {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::template::Render for $ty {
                fn render(&self, translator: &dyn $crate::translate::Translator) -> String {
                    $crate::template::render_templated(self, translator)
                }
            }

            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&$crate::template::Render::render_default(self))
                }
            }

            impl std::error::Error for $ty {}
        )+
    };
}
pub(crate) use templated_error;
