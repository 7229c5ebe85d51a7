//! Download file names

use ikasnova_common::Locale;

/// Used when the document has no situation number
pub const FALLBACK_NUMBER: &str = "00";

/// `Ikasnova_SdA_<situationNumber|00>_<locale>.<extension>`
///
/// Characters that cannot appear in a file name are replaced with `_`.
pub fn export_file_name(situation_number: &str, locale: Locale, extension: &str) -> String {
    let trimmed = situation_number.trim();
    let number = if trimmed.is_empty() {
        FALLBACK_NUMBER.to_string()
    } else {
        trimmed
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
                c if c.is_control() || c.is_whitespace() => '_',
                c => c,
            })
            .collect()
    };
    format!("Ikasnova_SdA_{}_{}.{}", number, locale.code(), extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_situation_number() {
        assert_eq!(
            export_file_name("7", Locale::Eu, "md"),
            "Ikasnova_SdA_7_eu.md"
        );
    }

    #[test]
    fn test_falls_back_to_00() {
        assert_eq!(
            export_file_name("  ", Locale::Es, "txt"),
            "Ikasnova_SdA_00_es.txt"
        );
    }

    #[test]
    fn test_replaces_path_separators() {
        assert_eq!(
            export_file_name("3/4 B", Locale::Es, "md"),
            "Ikasnova_SdA_3_4_B_es.md"
        );
    }
}
