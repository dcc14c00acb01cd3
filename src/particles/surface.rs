//! Drawing surface boundary and the render step.

use crate::error::FieldError;
use crate::particles::Field;

/// Opaque RGB fill colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

/// A host-supplied surface the field is drawn onto.
///
/// Both primitives fail with [`FieldError::SurfaceUnavailable`] once the
/// host has torn the surface down.
pub trait Surface {
    fn clear(&mut self) -> Result<(), FieldError>;

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb) -> Result<(), FieldError>;
}

/// Clears the surface and draws every particle as a white disc.
pub fn render<S: Surface + ?Sized>(field: &Field, surface: &mut S) -> Result<(), FieldError> {
    surface.clear()?;
    for particle in field.particles() {
        surface.fill_circle(particle.x(), particle.y(), particle.radius(), Rgb::WHITE)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::FieldConfig;
    use crate::particles::test_utils::{DrawCall, RecordingSurface};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_render_clears_then_draws_each_particle() {
        let mut rng = StdRng::seed_from_u64(1);
        let field = Field::create(200, 100, 5, &FieldConfig::default(), &mut rng).unwrap();
        let mut surface = RecordingSurface::new();

        render(&field, &mut surface).unwrap();

        let calls = surface.calls();
        assert_eq!(calls.len(), 6);
        assert_eq!(calls[0], DrawCall::Clear);
        for (call, particle) in calls[1..].iter().zip(field.particles()) {
            assert_eq!(
                *call,
                DrawCall::Circle {
                    x: particle.x(),
                    y: particle.y(),
                    radius: particle.radius(),
                    color: Rgb::WHITE,
                }
            );
        }
    }

    #[test]
    fn test_render_empty_field_only_clears() {
        let mut rng = StdRng::seed_from_u64(1);
        let field = Field::create(10, 10, 0, &FieldConfig::default(), &mut rng).unwrap();
        let mut surface = RecordingSurface::new();

        render(&field, &mut surface).unwrap();

        assert_eq!(surface.calls(), vec![DrawCall::Clear]);
    }

    #[test]
    fn test_render_torn_down_surface() {
        let mut rng = StdRng::seed_from_u64(1);
        let field = Field::create(10, 10, 3, &FieldConfig::default(), &mut rng).unwrap();
        let mut surface = RecordingSurface::new();
        surface.tear_down();

        assert_eq!(render(&field, &mut surface), Err(FieldError::SurfaceUnavailable));
        assert!(surface.calls().is_empty());
    }
}
