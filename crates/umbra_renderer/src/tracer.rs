//! Tracers turn a ray into a color.

use crate::World;
use umbra_math::{Color, Ray};

/// Trait for ray tracers.
pub trait Tracer: Send + Sync {
    /// Color seen along the ray. Misses return the world's background.
    fn trace_ray(&self, world: &World, ray: &Ray) -> Color;
}

/// Flat colors from the bare-bones nearest-hit scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultipleObjects;

impl Tracer for MultipleObjects {
    fn trace_ray(&self, world: &World, ray: &Ray) -> Color {
        let sr = world.hit_bare_bones_objects(ray);

        if sr.hit {
            sr.color
        } else {
            world.background
        }
    }
}

/// Material shading from the full nearest-hit scan.
///
/// Primitives without a material fall back to their flat color.
#[derive(Debug, Clone, Copy, Default)]
pub struct RayCast;

impl Tracer for RayCast {
    fn trace_ray(&self, world: &World, ray: &Ray) -> Color {
        let sr = world.hit_objects(ray);

        if !sr.hit {
            return world.background;
        }

        match sr.material {
            Some(material) => material.shade(&sr, world),
            None => sr.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ambient, Matte, Plane, Sphere};
    use std::sync::Arc;
    use umbra_math::{Point3, Vector3, RED, WHITE};

    fn down_z(x: f64, y: f64) -> Ray {
        Ray::new(Point3::new(x, y, 100.0), Vector3::NEG_Z)
    }

    #[test]
    fn test_multiple_objects_flat_color() {
        let mut world = World::new();
        world.background = Color::new(0.1, 0.1, 0.1);
        world.add_object(Box::new(Sphere::new(Point3::ZERO, 10.0).with_color(RED)));

        assert_eq!(MultipleObjects.trace_ray(&world, &down_z(0.0, 0.0)), RED);
        assert_eq!(
            MultipleObjects.trace_ray(&world, &down_z(50.0, 0.0)),
            Color::new(0.1, 0.1, 0.1)
        );
    }

    #[test]
    fn test_ray_cast_uses_material() {
        let mut world = World::new();
        world.set_ambient(Box::new(Ambient::new(1.0, WHITE)));
        let matte = Arc::new(Matte::new(0.5, 0.0, WHITE));
        world.add_object(Box::new(
            Sphere::new(Point3::ZERO, 10.0)
                .with_color(RED)
                .with_material(matte),
        ));

        let color = RayCast.trace_ray(&world, &down_z(0.0, 0.0));
        assert!((color - Color::splat(0.5)).length() < 1e-6);
    }

    #[test]
    fn test_ray_cast_falls_back_to_flat_color() {
        let mut world = World::new();
        world.add_object(Box::new(
            Plane::new(Point3::ZERO, Vector3::Z).with_color(Color::new(0.0, 0.3, 0.0)),
        ));

        assert_eq!(
            RayCast.trace_ray(&world, &down_z(3.0, 4.0)),
            Color::new(0.0, 0.3, 0.0)
        );
    }

    #[test]
    fn test_ray_cast_miss_returns_background() {
        let mut world = World::new();
        world.background = Color::new(0.2, 0.3, 0.4);
        assert_eq!(RayCast.trace_ray(&world, &down_z(0.0, 0.0)), world.background);
    }
}
