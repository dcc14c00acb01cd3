//! Particle field configuration.

use std::str::FromStr;

use crate::error::FieldError;

pub const COUNT_ENV: &str = "STARFIELD_COUNT";
pub const RADIUS_MAX_ENV: &str = "STARFIELD_RADIUS_MAX";
pub const SPEED_MIN_ENV: &str = "STARFIELD_SPEED_MIN";
pub const SPEED_MAX_ENV: &str = "STARFIELD_SPEED_MAX";

/// Sampling ranges and size of a particle field.
///
/// Radii are drawn from `[0, radius_max)` and fall speeds from
/// `[speed_min, speed_max)`, in pixels per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    pub radius_max: f64,
    pub speed_min: f64,
    pub speed_max: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 250,
            radius_max: 1.5,
            speed_min: 0.1,
            speed_max: 0.6,
        }
    }
}

impl FieldConfig {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_radius_max(mut self, radius_max: f64) -> Self {
        self.radius_max = radius_max;
        self
    }

    /// Sets the fall speed floor and ceiling. The check and profile pages
    /// use `with_fall_speed(0.0, 0.5)`.
    pub fn with_fall_speed(mut self, min: f64, max: f64) -> Self {
        self.speed_min = min;
        self.speed_max = max;
        self
    }

    /// Builds a configuration from the defaults, overridden by any of
    /// `STARFIELD_COUNT`, `STARFIELD_RADIUS_MAX`, `STARFIELD_SPEED_MIN` and
    /// `STARFIELD_SPEED_MAX` that are set.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if a variable does not parse or the
    /// resulting configuration fails [`FieldConfig::validate`].
    pub fn from_env() -> Result<Self, FieldError> {
        let defaults = Self::default();
        let config = Self {
            count: env_override(COUNT_ENV, defaults.count)?,
            radius_max: env_override(RADIUS_MAX_ENV, defaults.radius_max)?,
            speed_min: env_override(SPEED_MIN_ENV, defaults.speed_min)?,
            speed_max: env_override(SPEED_MAX_ENV, defaults.speed_max)?,
        };
        config.validate()?;

        #[cfg(feature = "tracing")]
        {
            if config != defaults {
                tracing::info!("Particle field configured from environment: {:?}", config);
            }
        }

        Ok(config)
    }

    /// Checks that every range is finite, non-negative and ordered.
    pub fn validate(&self) -> Result<(), FieldError> {
        if !self.radius_max.is_finite() || self.radius_max < 0.0 {
            return Err(FieldError::invalid(format!(
                "radius ceiling must be a non-negative number, got {}",
                self.radius_max
            )));
        }
        if !self.speed_min.is_finite() || !self.speed_max.is_finite() {
            return Err(FieldError::invalid("fall speed bounds must be finite"));
        }
        if self.speed_min < 0.0 {
            return Err(FieldError::invalid(format!(
                "fall speed floor must be non-negative, got {}",
                self.speed_min
            )));
        }
        if self.speed_min > self.speed_max {
            return Err(FieldError::invalid(format!(
                "fall speed floor {} exceeds ceiling {}",
                self.speed_min, self.speed_max
            )));
        }
        Ok(())
    }
}

fn env_override<T: FromStr>(key: &str, default: T) -> Result<T, FieldError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| FieldError::invalid(format!("{} has unparseable value '{}'", key, raw))),
        Err(_) => Ok(default),
    }
}
