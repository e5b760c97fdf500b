//! DNIS (dialed number) utilities.
//!
//! ## Summary
//! Validates and normalizes dialed numbers to E.164: a `+` followed by a
//! leading digit 1-9 and at most 14 further digits. Hyphens and spaces are
//! tolerated on input and removed.

fn strip_separators(did: &str) -> String {
    did.chars().filter(|c| !matches!(c, '-' | ' ')).collect()
}

/// True if `did` is a well-formed E.164 number (separators ignored).
#[must_use]
pub fn is_valid_did(did: &str) -> bool {
    let cleaned = strip_separators(did);
    let Some(digits) = cleaned.strip_prefix('+') else {
        return false;
    };
    digits.len() >= 2
        && digits.len() <= 15
        && digits.starts_with(|c: char| ('1'..='9').contains(&c))
        && digits.chars().all(|c| c.is_ascii_digit())
}

/// Normalizes a dialed number to E.164.
///
/// Already-valid numbers pass through with separators removed. Otherwise the
/// national dialing prefix (if present) is stripped and the country code is
/// prepended; the country code may be given with or without its `+`.
///
/// Examples:
/// - `"+1 317-555-1234"` -> `"+13175551234"`
/// - `"090-1234-5678"` with country code `"81"`, prefix `"0"` -> `"+819012345678"`
#[must_use]
pub fn normalize_e164(did: &str, country_code: &str, strip_national_prefix: &str) -> String {
    let cleaned = strip_separators(did);
    if is_valid_did(&cleaned) {
        return cleaned;
    }

    let code = if country_code.starts_with('+') {
        country_code.to_string()
    } else {
        format!("+{country_code}")
    };

    let national = cleaned
        .strip_prefix(strip_national_prefix)
        .unwrap_or(&cleaned);

    format!("{code}{national}")
}
