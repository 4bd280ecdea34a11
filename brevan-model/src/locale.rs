//! Supported site locales.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Locale {
    #[default]
    Fr,
    En,
    Es,
    De,
}

impl Locale {
    pub const ALL: [Self; 4] = [Self::Fr, Self::En, Self::Es, Self::De];

    pub const fn code(self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::En => "en",
            Locale::Es => "es",
            Locale::De => "de",
        }
    }

    /// Flag shown on the language selector button.
    pub const fn flag_src(self) -> &'static str {
        match self {
            Locale::Fr => "assets/images/flags/fr.png",
            Locale::En => "assets/images/flags/en.png",
            Locale::Es => "assets/images/flags/es.png",
            Locale::De => "assets/images/flags/de.png",
        }
    }

    /// Parse a stored or attribute-provided code, falling back to the
    /// default locale when it is missing or unknown.
    pub fn from_code_or_default(code: Option<&str>) -> Self {
        code.and_then(|c| c.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for Locale {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fr" => Ok(Locale::Fr),
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            "de" => Ok(Locale::De),
            other => Err(ModelError::UnknownLocale(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!(" de ".parse::<Locale>().unwrap(), Locale::De);
        assert!("it".parse::<Locale>().is_err());
    }

    #[test]
    fn unknown_or_missing_codes_fall_back_to_french() {
        assert_eq!(Locale::from_code_or_default(None), Locale::Fr);
        assert_eq!(Locale::from_code_or_default(Some("pt")), Locale::Fr);
        assert_eq!(Locale::from_code_or_default(Some("es")), Locale::Es);
    }
}
