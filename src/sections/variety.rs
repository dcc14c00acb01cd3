//! Character variety section - digits, lowercase, uppercase, symbols.

use super::SectionScore;

/// Awards one point per character class present. Classes are ASCII:
/// anything outside `[A-Za-z0-9]` counts as a symbol, including
/// non-Latin letters and whitespace.
pub fn character_variety_section(password: &str) -> SectionScore {
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_symbol = password.chars().any(|c| !c.is_ascii_alphanumeric());

    [has_digit, has_lower, has_upper, has_symbol]
        .iter()
        .filter(|&&present| present)
        .count() as SectionScore
}
