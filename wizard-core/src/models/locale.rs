use std::fmt;

use serde::{Deserialize, Serialize};

/// Display language of the wizard.
///
/// The locale only decides which text a label resolves to. It never reaches
/// into stored form values or transition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Fr, Locale::En];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
        }
    }

    /// Parses a language tag, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fr" => Some(Self::Fr),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// The other locale, used by the dashboard language button.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Fr => Self::En,
            Self::En => Self::Fr,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_mixed_case_tags() {
        assert_eq!(Locale::parse("FR"), Some(Locale::Fr));
        assert_eq!(Locale::parse(" en "), Some(Locale::En));
    }

    #[test]
    fn parse_rejects_unknown_tags() {
        assert_eq!(Locale::parse("de"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn toggled_flips_between_the_two_locales() {
        assert_eq!(Locale::Fr.toggled(), Locale::En);
        assert_eq!(Locale::En.toggled().toggled(), Locale::En);
    }

    #[test]
    fn default_is_french() {
        assert_eq!(Locale::default(), Locale::Fr);
    }
}
