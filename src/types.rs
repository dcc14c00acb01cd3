//! Evaluation result types shared by the evaluator and the locale layer.

use std::fmt;

/// Highest score the rubric can award.
pub const MAX_SCORE: u8 = 6;

/// Additive rubric score, always in `0..=MAX_SCORE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PasswordScore(u8);

impl PasswordScore {
    /// Creates a score, saturating at [`MAX_SCORE`].
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_SCORE))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_SCORE)
    }
}

/// Strength label derived from a [`PasswordScore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Medium,
    Good,
    Excellent,
}

impl PasswordStrength {
    /// Maps a score onto its label. Ranges are non-overlapping:
    /// 0–2 very weak, 3 weak, 4 medium, 5 good, 6 excellent.
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            0..=2 => Self::VeryWeak,
            3 => Self::Weak,
            4 => Self::Medium,
            5 => Self::Good,
            _ => Self::Excellent,
        }
    }

    pub fn color(&self) -> ColorClass {
        match self {
            Self::VeryWeak => ColorClass::Red,
            Self::Weak => ColorClass::Orange,
            Self::Medium => ColorClass::Goldenrod,
            Self::Good => ColorClass::Green,
            Self::Excellent => ColorClass::DarkGreen,
        }
    }

    /// Catalog key of the localized label, e.g. `password_strength.veryWeak`.
    pub fn catalog_key(&self) -> &'static str {
        match self {
            Self::VeryWeak => "password_strength.veryWeak",
            Self::Weak => "password_strength.weak",
            Self::Medium => "password_strength.medium",
            Self::Good => "password_strength.good",
            Self::Excellent => "password_strength.excellent",
        }
    }

    /// English label used when a catalog has no entry for this strength.
    pub fn default_label(&self) -> &'static str {
        match self {
            Self::VeryWeak => "Very weak",
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_label())
    }
}

/// Indicator colour. `Neutral` is the idle colour shown before any input
/// and is never produced by an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorClass {
    Red,
    Orange,
    Goldenrod,
    Green,
    DarkGreen,
    Neutral,
}

impl ColorClass {
    /// CSS colour value for the indicator.
    pub fn css(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Goldenrod => "goldenrod",
            Self::Green => "green",
            Self::DarkGreen => "darkgreen",
            Self::Neutral => "#888",
        }
    }
}

/// Result of evaluating one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub score: PasswordScore,
    pub strength: PasswordStrength,
    pub color: ColorClass,
}

impl PasswordEvaluation {
    pub fn from_score(score: PasswordScore) -> Self {
        let strength = PasswordStrength::from_score(score);
        Self {
            score,
            strength,
            color: strength.color(),
        }
    }
}
