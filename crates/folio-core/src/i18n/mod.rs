//! Translations
//!
//! Two embedded bundles (`en`, `pt`), parsed on first use. Lookups fall back
//! to English, then to the key itself.

mod selector;

use std::fmt;

use once_cell::sync::OnceCell;
use serde_json::Value;
use tracing::{debug, warn};

pub use selector::{LanguageSelector, SelectorKey};

static EN_SOURCE: &str = include_str!("../../locales/en.json");
static PT_SOURCE: &str = include_str!("../../locales/pt.json");

static EN_BUNDLE: OnceCell<Value> = OnceCell::new();
static PT_BUNDLE: OnceCell<Value> = OnceCell::new();

/// Environment variables consulted for the system language, in priority order
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Supported interface languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Pt,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Pt];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Pt => "pt",
        }
    }

    /// Name of the language in itself
    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Pt => "Português",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Locale::En => "🇺🇸",
            Locale::Pt => "🇧🇷",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|l| *l == self).unwrap_or(0)
    }

    /// Parse a language tag, ignoring region, encoding and modifier (`pt_BR.UTF-8` → `pt`)
    pub fn parse(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .split(['-', '_', '.', '@'])
            .next()?
            .to_ascii_lowercase();
        Self::ALL.into_iter().find(|l| l.code() == primary)
    }

    fn source(self) -> &'static str {
        match self {
            Locale::En => EN_SOURCE,
            Locale::Pt => PT_SOURCE,
        }
    }

    fn cell(self) -> &'static OnceCell<Value> {
        match self {
            Locale::En => &EN_BUNDLE,
            Locale::Pt => &PT_BUNDLE,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Pick the initial locale: explicit choice, stored preference, then system tags
///
/// Unsupported or malformed candidates are skipped; English is the fallback.
pub fn detect<S: AsRef<str>>(explicit: Option<&str>, stored: Option<&str>, system: &[S]) -> Locale {
    explicit
        .into_iter()
        .chain(stored)
        .chain(system.iter().map(|s| s.as_ref()))
        .find_map(Locale::parse)
        .unwrap_or_default()
}

/// Language tags from the process environment, highest priority first
pub fn system_locale_tags() -> Vec<String> {
    LOCALE_ENV_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .filter(|v| !v.is_empty() && v != "C" && v != "POSIX")
        .collect()
}

fn bundle(locale: Locale) -> &'static Value {
    locale.cell().get_or_init(|| {
        debug!(locale = %locale, "Parsing translation bundle");
        serde_json::from_str(locale.source()).unwrap_or_else(|e| {
            warn!(locale = %locale, error = %e, "Translation bundle is invalid");
            Value::Null
        })
    })
}

fn lookup<'a>(bundle: &'a Value, key: &str) -> Option<&'a str> {
    key.split('.')
        .try_fold(bundle, |node, part| node.get(part))?
        .as_str()
}

/// Current-language string lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switch language; returns whether it changed
    pub fn set_locale(&mut self, locale: Locale) -> bool {
        let changed = self.locale != locale;
        self.locale = locale;
        changed
    }

    /// Translate a dotted key
    pub fn t(&self, key: &str) -> String {
        lookup(bundle(self.locale), key)
            .or_else(|| lookup(bundle(Locale::En), key))
            .map(str::to_string)
            .unwrap_or_else(|| {
                debug!(key, locale = %self.locale, "Missing translation");
                key.to_string()
            })
    }

    /// Translate and substitute `{{name}}` placeholders
    pub fn t_with(&self, key: &str, vars: &[(&str, &str)]) -> String {
        vars.iter().fold(self.t(key), |text, (name, value)| {
            text.replace(&format!("{{{{{name}}}}}"), value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_region() {
        assert_eq!(Locale::parse("pt-BR"), Some(Locale::Pt));
        assert_eq!(Locale::parse("pt_BR.UTF-8"), Some(Locale::Pt));
        assert_eq!(Locale::parse("EN"), Some(Locale::En));
        assert_eq!(Locale::parse("de-DE"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn test_detection_order() {
        let system = ["pt_BR.UTF-8"];
        assert_eq!(detect(Some("en"), Some("pt"), &system), Locale::En);
        assert_eq!(detect(None, Some("pt"), &["en_US"]), Locale::Pt);
        assert_eq!(detect(Some("fr"), None, &system), Locale::Pt);
        assert_eq!(detect::<&str>(None, None, &[]), Locale::En);
    }

    #[test]
    fn test_lookup_and_fallback() {
        let pt = Translator::new(Locale::Pt);
        assert_eq!(pt.t("nav.about"), "Sobre");
        assert_eq!(
            pt.t("contact.form.notConfigured"),
            "Email delivery is not configured"
        );
        assert_eq!(pt.t("nav.missing"), "nav.missing");
        // Non-leaf keys are not strings
        assert_eq!(pt.t("nav"), "nav");
    }

    #[test]
    fn test_interpolation() {
        let en = Translator::new(Locale::En);
        assert_eq!(en.t_with("hero.greeting", &[("owner", "Ana")]), "Hi, I'm Ana");
        assert_eq!(
            en.t_with("footer.rights", &[("year", "2026"), ("owner", "Ana")]),
            "© 2026 Ana. All rights reserved."
        );
    }

    #[test]
    fn test_set_locale_reports_change() {
        let mut translator = Translator::default();
        assert!(!translator.set_locale(Locale::En));
        assert!(translator.set_locale(Locale::Pt));
        assert_eq!(translator.locale(), Locale::Pt);
    }

    #[test]
    fn test_bundles_share_keys() {
        fn keys(value: &Value, prefix: String, out: &mut Vec<String>) {
            if let Value::Object(map) = value {
                for (k, v) in map {
                    keys(v, format!("{prefix}{k}."), out);
                }
            } else {
                out.push(prefix.trim_end_matches('.').to_string());
            }
        }
        let mut pt = Vec::new();
        keys(bundle(Locale::Pt), String::new(), &mut pt);
        let en = Translator::new(Locale::En);
        for key in pt {
            assert_ne!(en.t(&key), key, "{key} missing from en");
        }
    }
}
