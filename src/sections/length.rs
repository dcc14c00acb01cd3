//! Length section - minimum and extended length criteria.

use super::SectionScore;

const MIN_LENGTH: usize = 8;
const EXTENDED_LENGTH: usize = 12;

/// Awards one point for reaching the minimum length and one more for the
/// extended length. Length counts characters (Unicode scalar values), not
/// bytes. A browser's `String.length` counts UTF-16 code units instead, so
/// characters outside the Basic Multilingual Plane such as emoji count
/// once here but twice on the page.
pub fn length_section(password: &str) -> SectionScore {
    let len = password.chars().count();
    u8::from(len >= MIN_LENGTH) + u8::from(len >= EXTENDED_LENGTH)
}
