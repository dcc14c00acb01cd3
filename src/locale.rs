//! Explicit locale context for the password strength indicator.
//!
//! The active language and its catalog travel together in a
//! [`LocaleContext`] that callers pass to whatever needs localized text.
//! The evaluator and the particle field never depend on it.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::catalog::LocaleCatalog;
use crate::types::{ColorClass, PasswordEvaluation, PasswordStrength};

/// Catalog key of the caption shown before the strength label.
pub const CAPTION_KEY: &str = "auth_password_strength";
const DEFAULT_CAPTION: &str = "Password strength:";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown locale: {0}")]
pub struct UnknownLocale(pub String);

/// Languages the pages are translated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    Ru,
    En,
    Ua,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Ru, Locale::En, Locale::Ua];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
            Self::Ua => "ua",
        }
    }

    /// Resolves the language last stored by the user, falling back to
    /// Russian when nothing usable was stored.
    pub fn resolve(stored: Option<&str>) -> Self {
        stored.and_then(|code| code.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.code() == s.trim())
            .ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Text and colour the page writes into the strength indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthIndicator {
    pub text: String,
    pub color: ColorClass,
}

#[derive(Debug, Clone, Default)]
pub struct LocaleContext {
    locale: Locale,
    catalog: LocaleCatalog,
}

impl LocaleContext {
    pub fn new(locale: Locale, catalog: LocaleCatalog) -> Self {
        Self { locale, catalog }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn catalog(&self) -> &LocaleCatalog {
        &self.catalog
    }

    /// Switches language. The catalog is kept.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.catalog.get(self.locale.code(), key)
    }

    pub fn text_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.text(key).unwrap_or(fallback)
    }

    pub fn strength_label(&self, strength: PasswordStrength) -> &str {
        self.text_or(strength.catalog_key(), strength.default_label())
    }

    /// Indicator for an evaluation, e.g. `"Password strength: Medium"` in
    /// goldenrod.
    pub fn strength_indicator(&self, evaluation: &PasswordEvaluation) -> StrengthIndicator {
        StrengthIndicator {
            text: self.caption_with(evaluation.strength),
            color: evaluation.color,
        }
    }

    /// Indicator shown before anything is typed and after the form resets:
    /// the very-weak label in neutral grey.
    pub fn idle_indicator(&self) -> StrengthIndicator {
        StrengthIndicator {
            text: self.caption_with(PasswordStrength::VeryWeak),
            color: ColorClass::Neutral,
        }
    }

    fn caption_with(&self, strength: PasswordStrength) -> String {
        format!(
            "{} {}",
            self.text_or(CAPTION_KEY, DEFAULT_CAPTION),
            self.strength_label(strength)
        )
    }
}
