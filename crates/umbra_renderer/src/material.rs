//! Materials for the shading tracer.

use crate::{ShadeRec, World};
use umbra_math::{Color, INV_PI};

/// Trait for materials that turn a hit into a color.
pub trait Material: Send + Sync {
    /// Compute the color leaving the surface at the hit.
    fn shade(&self, sr: &ShadeRec, world: &World) -> Color;
}

/// A constant color, unaffected by lights.
#[derive(Debug, Clone, Copy)]
pub struct Flat {
    color: Color,
}

impl Flat {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Material for Flat {
    fn shade(&self, _sr: &ShadeRec, _world: &World) -> Color {
        self.color
    }
}

/// Lambertian diffuse surface with an ambient term.
///
/// `L = ka * cd * La + sum(kd * cd / pi * Li * max(0, n . wi))`.
/// No shadows and no interreflection.
#[derive(Debug, Clone, Copy)]
pub struct Matte {
    ka: f32,
    kd: f32,
    cd: Color,
}

impl Matte {
    pub fn new(ka: f32, kd: f32, cd: Color) -> Self {
        Self { ka, kd, cd }
    }
}

impl Material for Matte {
    fn shade(&self, sr: &ShadeRec, world: &World) -> Color {
        let mut l = self.ka * self.cd * world.ambient().radiance(sr);

        for light in world.lights() {
            let wi = light.direction(sr);
            let n_dot_wi = sr.normal.dot(wi);

            if n_dot_wi > 0.0 {
                l += self.kd * self.cd * INV_PI * light.radiance(sr) * n_dot_wi as f32;
            }
        }

        l
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ambient, DirectionalLight};
    use umbra_math::{Vector3, WHITE};

    fn record() -> ShadeRec<'static> {
        ShadeRec {
            hit: true,
            normal: Vector3::Y,
            ..Default::default()
        }
    }

    #[test]
    fn test_flat_ignores_lights() {
        let mut world = World::new();
        world.add_light(Box::new(DirectionalLight::new(Vector3::Y, 10.0, WHITE)));
        let flat = Flat::new(Color::new(0.2, 0.4, 0.6));
        assert_eq!(flat.shade(&record(), &world), Color::new(0.2, 0.4, 0.6));
    }

    #[test]
    fn test_matte_ambient_only() {
        let mut world = World::new();
        world.set_ambient(Box::new(Ambient::new(0.5, WHITE)));
        let matte = Matte::new(0.4, 0.6, Color::new(1.0, 0.5, 0.0));

        let color = matte.shade(&record(), &world);
        assert!((color - Color::new(0.2, 0.1, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_matte_head_on_light() {
        let mut world = World::new();
        world.set_ambient(Box::new(Ambient::new(0.0, WHITE)));
        world.add_light(Box::new(DirectionalLight::new(Vector3::Y, 2.0, WHITE)));
        let matte = Matte::new(0.25, 0.5, WHITE);

        let color = matte.shade(&record(), &world);
        let expected = 0.5 * INV_PI * 2.0;
        assert!((color.x - expected).abs() < 1e-6);
        assert!((color.y - expected).abs() < 1e-6);
    }

    #[test]
    fn test_matte_ignores_lights_behind_surface() {
        let mut world = World::new();
        world.set_ambient(Box::new(Ambient::new(0.0, WHITE)));
        world.add_light(Box::new(DirectionalLight::new(Vector3::NEG_Y, 2.0, WHITE)));
        let matte = Matte::new(0.25, 0.5, WHITE);

        assert_eq!(matte.shade(&record(), &world), Color::ZERO);
    }
}
