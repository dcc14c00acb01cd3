//! Falling-star particle field drawn behind the auth, check and profile pages.
//!
//! The field is driven by two named operations, [`Field::tick`] and
//! [`render`], so it can be tested against a recording surface. The
//! `animation` module runs them once per frame.

mod config;
mod field;
mod surface;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::{COUNT_ENV, FieldConfig, RADIUS_MAX_ENV, SPEED_MAX_ENV, SPEED_MIN_ENV};
pub use field::{Field, Particle};
pub use surface::{Rgb, Surface, render};
