//! Core of the auth, trader-ID check and profile pages
//!
//! This library provides the two pieces of those pages that carry real
//! logic: the password strength rubric behind the registration form and
//! the falling-star particle field drawn behind every page.
//!
//! # Features
//!
//! - `async` (default): Enables the frame loop in [`animation`]
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `AUTH_UI_CATALOG_PATH`: Custom path to the locale catalog
//!   (default: `./assets/locales.txt`)
//! - `STARFIELD_COUNT`, `STARFIELD_RADIUS_MAX`, `STARFIELD_SPEED_MIN`,
//!   `STARFIELD_SPEED_MAX`: Overrides read by [`FieldConfig::from_env`]
//!
//! # Example
//!
//! ```rust,no_run
//! use auth_ui_core::{evaluate, Locale, LocaleCatalog, LocaleContext};
//!
//! let catalog = LocaleCatalog::load().expect("Failed to load catalog");
//! let ctx = LocaleContext::new(Locale::resolve(Some("en")), catalog);
//!
//! // Re-run on every keystroke
//! let evaluation = evaluate("MyP@ssw0rd!");
//! let indicator = ctx.strength_indicator(&evaluation);
//!
//! println!("{} ({})", indicator.text, indicator.color.css());
//! ```

// Internal modules
mod catalog;
mod error;
mod evaluator;
mod locale;
mod sections;
mod types;

pub mod particles;

#[cfg(feature = "async")]
pub mod animation;

// Public API
pub use catalog::{CATALOG_PATH_ENV, CatalogError, LocaleCatalog, get_catalog_path};
pub use error::FieldError;
pub use evaluator::{evaluate, evaluate_password_strength};
pub use locale::{CAPTION_KEY, Locale, LocaleContext, StrengthIndicator, UnknownLocale};
pub use particles::{Field, FieldConfig, Particle, Rgb, Surface, render};
pub use types::{ColorClass, MAX_SCORE, PasswordEvaluation, PasswordScore, PasswordStrength};

#[cfg(feature = "async")]
pub use animation::{AnimationHandle, AnimationReport, FrameScheduler, IntervalScheduler, LoopExit, start};
