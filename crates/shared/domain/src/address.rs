//! Address domain entity and address-line normalization.

use serde::{Deserialize, Serialize};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};
use uuid::Uuid;

use crate::constants::{ADDRESS_LINE_MAX_LEN, ADDRESS_SUBSTITUTIONS};

/// Address owned by exactly one user.
///
/// `user_id` is overwritten with the owner's identifier on every user write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default = "Uuid::nil")]
    pub user_id: Uuid,
    pub address_line: String,
    pub city: String,
    pub locality: String,
    pub administrative_area_level_1: String,
    pub country: String,
    pub postal_code: i32,
}

/// Normalize an address line before storage.
///
/// Diacritics are stripped (decompose, drop combining marks, recompose), the
/// Spanish abbreviations in [`ADDRESS_SUBSTITUTIONS`] are applied, and the
/// result is cut to [`ADDRESS_LINE_MAX_LEN`] characters. The cut ignores word
/// boundaries.
pub fn format_address_line(line: &str) -> String {
    let stripped: String = line
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect();

    let replaced = substitute(&stripped);
    if replaced.chars().count() > ADDRESS_LINE_MAX_LEN {
        replaced.chars().take(ADDRESS_LINE_MAX_LEN).collect()
    } else {
        replaced
    }
}

fn substitute(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    'scan: while let Some(c) = rest.chars().next() {
        for (from, to) in ADDRESS_SUBSTITUTIONS {
            if let Some(tail) = rest.strip_prefix(from) {
                out.push_str(to);
                rest = tail;
                continue 'scan;
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}
