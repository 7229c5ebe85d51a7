use crate::{CommonError, CommonResult, Locale};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Educational stage the learning situation is designed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EducationalStage {
    Infantil,
    Primaria,
    #[serde(rename = "ESO")]
    Eso,
    Bachillerato,
    #[serde(rename = "Formación Profesional")]
    FormacionProfesional,
}

impl EducationalStage {
    pub const ALL: [EducationalStage; 5] = [
        EducationalStage::Infantil,
        EducationalStage::Primaria,
        EducationalStage::Eso,
        EducationalStage::Bachillerato,
        EducationalStage::FormacionProfesional,
    ];

    /// Canonical stage name, as used in provider instructions
    pub fn name(self) -> &'static str {
        match self {
            EducationalStage::Infantil => "Infantil",
            EducationalStage::Primaria => "Primaria",
            EducationalStage::Eso => "ESO",
            EducationalStage::Bachillerato => "Bachillerato",
            EducationalStage::FormacionProfesional => "Formación Profesional",
        }
    }

    /// Human readable label in the given locale
    pub fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Es, EducationalStage::Infantil) => "Educación Infantil",
            (Locale::Es, EducationalStage::Primaria) => "Educación Primaria",
            (Locale::Es, EducationalStage::Eso) => "E.S.O.",
            (Locale::Es, EducationalStage::Bachillerato) => "Bachillerato",
            (Locale::Es, EducationalStage::FormacionProfesional) => "Formación Profesional",
            (Locale::Eu, EducationalStage::Infantil) => "Haur Hezkuntza",
            (Locale::Eu, EducationalStage::Primaria) => "Lehen Hezkuntza",
            (Locale::Eu, EducationalStage::Eso) => "D.B.H.",
            (Locale::Eu, EducationalStage::Bachillerato) => "Batxilergoa",
            (Locale::Eu, EducationalStage::FormacionProfesional) => "Lanbide Heziketa",
        }
    }
}

impl fmt::Display for EducationalStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EducationalStage {
    type Err = CommonError;

    fn from_str(s: &str) -> CommonResult<Self> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "infantil" => Ok(EducationalStage::Infantil),
            "primaria" => Ok(EducationalStage::Primaria),
            "eso" => Ok(EducationalStage::Eso),
            "bachillerato" => Ok(EducationalStage::Bachillerato),
            "fp" | "formación profesional" | "formacion profesional" => {
                Ok(EducationalStage::FormacionProfesional)
            }
            _ => Err(CommonError::UnknownStage(s.to_string())),
        }
    }
}

/// How the first draft of a document is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Provider generates the whole document from a topic
    Auto,
    /// Teacher starts from the empty template
    Manual,
    /// Provider extracts the document from an uploaded file
    Upload,
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GenerationMode::Auto => "auto",
            GenerationMode::Manual => "manual",
            GenerationMode::Upload => "upload",
        })
    }
}

impl FromStr for GenerationMode {
    type Err = CommonError;

    fn from_str(s: &str) -> CommonResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(GenerationMode::Auto),
            "manual" => Ok(GenerationMode::Manual),
            "upload" => Ok(GenerationMode::Upload),
            other => Err(CommonError::UnknownMode(other.to_string())),
        }
    }
}
