//! Localization of user-facing messages.
//!
//! Messages are looked up in a binary gettext catalog chosen from the process locale. Only the
//! two-letter language subtag of the locale is used, so `fr_FR`, `fr_CA`, and `fr-BE` all share
//! `messages_fr.mo`. A missing or unreadable catalog is a normal condition: the [`Translator`]
//! then returns every message unchanged.

use camino::{Utf8Path, Utf8PathBuf};
use core::fmt::{Display, Formatter};
use gettext::Catalog;
use std::fs::File;
use std::io;

/// Directory searched for translation catalogs, relative to the working directory
pub const DEFAULT_CATALOG_DIR: &str = "res";

/// Where the active translations came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// The locale did not yield a usable language subtag
    NoLocale,

    /// No catalog exists for the locale's language
    Missing(Utf8PathBuf),

    /// A catalog exists but could not be read or parsed
    Invalid { path: Utf8PathBuf, reason: String },

    /// Translations were loaded from this catalog
    Loaded(Utf8PathBuf),
}

impl CatalogOrigin {
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

impl Display for CatalogOrigin {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NoLocale => write!(f, "no language could be determined from the locale"),
            Self::Missing(path) => write!(f, "no message catalog at '{path}'"),
            Self::Invalid { path, reason } => write!(f, "unable to load message catalog '{path}': {reason}"),
            Self::Loaded(path) => write!(f, "message catalog '{path}'"),
        }
    }
}

/// Maps source-language messages to their localized text
pub struct Translator {
    catalog: Catalog,
    origin: CatalogOrigin,
}

impl core::fmt::Debug for Translator {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Translator").field("origin", &self.origin).finish_non_exhaustive()
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::identity()
    }
}

impl Translator {
    /// A translator that returns every message unchanged
    #[must_use]
    pub fn identity() -> Self {
        Self::fallback(CatalogOrigin::NoLocale)
    }

    fn fallback(origin: CatalogOrigin) -> Self {
        Self {
            catalog: Catalog::empty(),
            origin,
        }
    }

    /// Build a translator for `locale`, looking for its catalog in `catalog_dir`.
    ///
    /// Never fails: when no catalog can be loaded, the identity translator is returned and
    /// [`Self::origin`] records why.
    #[must_use]
    pub fn from_locale(locale: Option<&str>, catalog_dir: &Utf8Path) -> Self {
        let Some(lang) = locale.and_then(language_subtag) else {
            return Self::fallback(CatalogOrigin::NoLocale);
        };

        let path = catalog_path(catalog_dir, &lang);
        match load_catalog(&path) {
            Ok(catalog) => Self {
                catalog,
                origin: CatalogOrigin::Loaded(path),
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::fallback(CatalogOrigin::Missing(path)),
            Err(e) => Self::fallback(CatalogOrigin::Invalid {
                path,
                reason: e.to_string(),
            }),
        }
    }

    #[must_use]
    pub const fn origin(&self) -> &CatalogOrigin {
        &self.origin
    }

    /// Translate a message
    #[must_use]
    pub fn tr<'a>(&'a self, text: &'a str) -> &'a str {
        self.catalog.gettext(text)
    }

    /// Translate a message whose wording depends on a count
    #[must_use]
    pub fn tr_n<'a>(&'a self, singular: &'a str, plural: &'a str, n: u64) -> &'a str {
        self.catalog.ngettext(singular, plural, n)
    }

    /// Translate a message template, then substitute its `{name}` placeholders
    #[must_use]
    pub fn format(&self, text: &str, args: &[(&str, &dyn Display)]) -> String {
        fill(self.tr(text), args)
    }

    /// Like [`Self::format`], choosing the singular or plural template from `n`
    #[must_use]
    pub fn format_n(&self, singular: &str, plural: &str, n: u64, args: &[(&str, &dyn Display)]) -> String {
        fill(self.tr_n(singular, plural, n), args)
    }
}

/// Detect the process locale and load the matching catalog from [`DEFAULT_CATALOG_DIR`].
#[must_use]
pub fn initialize_localization() -> Translator {
    let locale = sys_locale::get_locale();
    Translator::from_locale(locale.as_deref(), Utf8Path::new(DEFAULT_CATALOG_DIR))
}

/// The language part of a locale tag: its first two characters, lowercased.
///
/// Regional variants and encodings are intentionally ignored. Tags that do not start with two
/// ASCII letters (`C`, `C.UTF-8`, the empty string) have no language.
#[must_use]
pub fn language_subtag(locale: &str) -> Option<String> {
    let lang: String = locale.chars().take(2).collect();

    if lang.len() != 2 || !lang.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    Some(lang.to_ascii_lowercase())
}

/// Path of the catalog for `lang` inside `catalog_dir`
#[must_use]
pub fn catalog_path(catalog_dir: &Utf8Path, lang: &str) -> Utf8PathBuf {
    catalog_dir.join(format!("messages_{lang}.mo"))
}

fn load_catalog(path: &Utf8Path) -> io::Result<Catalog> {
    let file = File::open(path)?;
    Catalog::parse(file).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
}

fn fill(template: &str, args: &[(&str, &dyn Display)]) -> String {
    let mut result = template.to_string();
    for (name, value) in args {
        let placeholder = format!("{{{name}}}");
        result = result.replace(&placeholder, &value.to_string());
    }
    result
}
