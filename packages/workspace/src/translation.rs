//! Post-pass over translated documents.
//!
//! Providers sometimes spell out or localize plain numbers ("3" becoming
//! "hiru"). Values that were purely numeric in the source are put back
//! verbatim at the same position.

use ikasnova_model::{ActivityField, LearningSituation, ListField, TextField};
use tracing::debug;

/// Digits, optionally joined by `.` `,` `/` or `-`
pub fn is_numeric_value(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed.chars().any(|c| c.is_ascii_digit())
        && trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '/' | '-'))
}

fn restore(original: &str, translated: &mut String) -> bool {
    if is_numeric_value(original) && translated.as_str() != original {
        *translated = original.to_string();
        true
    } else {
        false
    }
}

/// Restore numeric values of `original` that the translation altered
pub fn restore_numeric_values(
    original: &LearningSituation,
    mut translated: LearningSituation,
) -> LearningSituation {
    let mut restored = 0usize;

    for field in TextField::ALL {
        if restore(original.text(field), translated.text_mut(field)) {
            debug!(field = %field, "restored numeric value");
            restored += 1;
        }
    }

    for field in ListField::ALL {
        let source = original.list(field);
        for (item, target) in source.iter().zip(translated.list_mut(field).iter_mut()) {
            if restore(item, target) {
                restored += 1;
            }
        }
    }

    for (source, target) in original.activities.iter().zip(translated.activities.iter_mut()) {
        for field in ActivityField::ALL {
            if restore(source.field(field), target.field_mut(field)) {
                restored += 1;
            }
        }
    }

    if restored > 0 {
        debug!(restored, "numeric values restored after translation");
    }
    translated
}
