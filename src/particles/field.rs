//! Particle field - creation, resize and the per-tick fall/wrap rule.

use rand::Rng;

use crate::error::FieldError;
use crate::particles::FieldConfig;

/// A falling point of light. Radius and fall speed are fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    x: f64,
    y: f64,
    radius: f64,
    fall_speed: f64,
}

impl Particle {
    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn fall_speed(&self) -> f64 {
        self.fall_speed
    }
}

/// A fixed set of particles falling within `width` x `height` pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    width: u32,
    height: u32,
    particles: Vec<Particle>,
}

impl Field {
    /// Creates `count` particles scattered uniformly over the surface, with
    /// radius and fall speed drawn from the ranges in `config`.
    ///
    /// Zero particles is a valid, empty field.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if either dimension is zero or the
    /// configured ranges are invalid.
    pub fn create<R: Rng + ?Sized>(
        width: u32,
        height: u32,
        count: usize,
        config: &FieldConfig,
        rng: &mut R,
    ) -> Result<Self, FieldError> {
        check_dimensions(width, height)?;
        config.validate()?;

        let (w, h) = (f64::from(width), f64::from(height));
        let particles = (0..count)
            .map(|_| Particle {
                x: uniform(rng, 0.0, w),
                y: uniform(rng, 0.0, h),
                radius: uniform(rng, 0.0, config.radius_max),
                fall_speed: uniform(rng, config.speed_min, config.speed_max),
            })
            .collect();

        Ok(Self {
            width,
            height,
            particles,
        })
    }

    /// Same as [`Field::create`] with `config.count` particles.
    pub fn from_config<R: Rng + ?Sized>(
        width: u32,
        height: u32,
        config: &FieldConfig,
        rng: &mut R,
    ) -> Result<Self, FieldError> {
        Self::create(width, height, config.count, config, rng)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Updates the stored dimensions. Particle positions are left alone and
    /// may sit outside the new bounds until they next wrap.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), FieldError> {
        check_dimensions(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Moves every particle down by its fall speed. A particle that ends up
    /// below the bottom edge restarts at the top with a fresh `x`.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (w, h) = (f64::from(self.width), f64::from(self.height));
        for particle in &mut self.particles {
            particle.y += particle.fall_speed;
            if particle.y > h {
                particle.y = 0.0;
                particle.x = uniform(rng, 0.0, w);
            }
        }
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<(), FieldError> {
    if width == 0 || height == 0 {
        return Err(FieldError::invalid(format!(
            "surface dimensions must be positive, got {}x{}",
            width, height
        )));
    }
    Ok(())
}

/// Samples `[min, max)`, or returns `min` when the range is empty.
fn uniform<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    if max > min { rng.gen_range(min..max) } else { min }
}
