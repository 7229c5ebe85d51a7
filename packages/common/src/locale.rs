use crate::{CommonError, CommonResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Two-letter tag for the languages a document can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Castilian Spanish
    #[default]
    Es,
    /// Basque
    Eu,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Es, Locale::Eu];

    pub fn code(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::Eu => "eu",
        }
    }

    /// The other supported locale (translation target)
    pub fn other(self) -> Locale {
        match self {
            Locale::Es => Locale::Eu,
            Locale::Eu => Locale::Es,
        }
    }

    /// Language name as written in provider instructions
    pub fn language_name(self) -> &'static str {
        match self {
            Locale::Es => "CASTELLANO",
            Locale::Eu => "EUSKERA",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = CommonError;

    fn from_str(s: &str) -> CommonResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Locale::Es),
            "eu" => Ok(Locale::Eu),
            other => Err(CommonError::UnknownLocale(other.to_string())),
        }
    }
}
