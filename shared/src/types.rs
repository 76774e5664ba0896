//! Common types for the shared crate
//!
//! Utility types used across the dashboard client.

use serde::{Deserialize, Serialize};

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Dashboard display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ar,
    #[default]
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
        }
    }

    /// Text direction for the locale (`rtl` for Arabic)
    pub fn direction(&self) -> &'static str {
        match self {
            Locale::Ar => "rtl",
            Locale::En => "ltr",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bilingual text pair carried by every content entity
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bilingual {
    pub ar: String,
    pub en: String,
}

impl Bilingual {
    pub fn new(ar: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ar: ar.into(),
            en: en.into(),
        }
    }

    /// Text for the given locale
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::Ar => &self.ar,
            Locale::En => &self.en,
        }
    }

    /// True when either side is blank after trimming
    pub fn has_blank_side(&self) -> bool {
        self.ar.trim().is_empty() || self.en.trim().is_empty()
    }

    /// Shortest side length after trimming, used for minimum-length checks
    pub fn min_len(&self) -> usize {
        self.ar.trim().chars().count().min(self.en.trim().chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_direction() {
        assert_eq!(Locale::Ar.direction(), "rtl");
        assert_eq!(Locale::En.direction(), "ltr");
    }

    #[test]
    fn bilingual_blank_side() {
        assert!(Bilingual::new("", "News").has_blank_side());
        assert!(Bilingual::new("خبر", "   ").has_blank_side());
        assert!(!Bilingual::new("خبر", "News").has_blank_side());
    }

    #[test]
    fn bilingual_min_len_counts_chars() {
        // Arabic side is 4 characters, not 8 bytes
        let text = Bilingual::new("اتحاد", "Federation");
        assert_eq!(text.min_len(), 5);
    }
}
