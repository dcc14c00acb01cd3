//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::sections::{SectionScore, character_variety_section, length_section};
use crate::types::{PasswordEvaluation, PasswordScore};

/// Evaluates password strength against the six-point rubric.
///
/// The result depends on the input only. Callers re-run it on every change
/// of the password field; there is no debouncing or caching here.
///
/// # Arguments
/// * `password` - The password to evaluate, may be empty
///
/// # Returns
/// A `PasswordEvaluation` with score, strength label and indicator colour.
pub fn evaluate(password: &str) -> PasswordEvaluation {
    // Orchestrator: every section adds its points
    let sections: [(&str, fn(&str) -> SectionScore); 2] = [
        ("length", length_section),
        ("variety", character_variety_section),
    ];

    let mut total: SectionScore = 0;
    for (section_name, section_fn) in sections {
        let points = section_fn(password);

        #[cfg(feature = "tracing")]
        tracing::trace!("section {} awarded {} point(s)", section_name, points);
        #[cfg(not(feature = "tracing"))]
        let _ = section_name;

        total += points;
    }

    PasswordEvaluation::from_score(PasswordScore::new(total))
}

/// Evaluates a password kept behind a [`SecretString`].
///
/// Same result as [`evaluate`]; the secret is exposed only for the
/// duration of the call.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    evaluate(password.expose_secret())
}
