//! Sphere primitive.

use std::sync::Arc;

use crate::{
    geometric_object::{GeometricObject, Hit},
    Material,
};
use umbra_math::{Color, Point3, Ray, WHITE};

/// A sphere primitive.
#[derive(Clone)]
pub struct Sphere {
    center: Point3,
    radius: f64,
    color: Color,
    material: Option<Arc<dyn Material>>,
}

impl Sphere {
    /// Hits closer than this are treated as self-intersections.
    pub const EPSILON: f64 = 0.001;

    /// Create a new sphere.
    pub fn new(center: Point3, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            color: WHITE,
            material: None,
        }
    }

    /// Set the flat color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the material.
    pub fn with_material(mut self, material: Arc<dyn Material>) -> Self {
        self.material = Some(material);
        self
    }

    pub fn set_center(&mut self, center: Point3) {
        self.center = center;
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.max(0.0);
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_material(&mut self, material: Arc<dyn Material>) {
        self.material = Some(material);
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    fn hit_at(&self, ray: &Ray, t: f64) -> Hit {
        let local_hit_point = ray.at(t);
        Hit {
            t,
            normal: (local_hit_point - self.center).normalize(),
            local_hit_point,
        }
    }
}

impl GeometricObject for Sphere {
    fn hit(&self, ray: &Ray) -> Option<Hit> {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Smaller root first, then the far side (ray starts inside)
        let near = (h - sqrtd) / a;
        if near > Self::EPSILON {
            return Some(self.hit_at(ray, near));
        }

        let far = (h + sqrtd) / a;
        if far > Self::EPSILON {
            return Some(self.hit_at(ray, far));
        }

        None
    }

    fn color(&self) -> Color {
        self.color
    }

    fn material(&self) -> Option<&dyn Material> {
        self.material.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use umbra_math::Vector3;

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(Point3::ZERO, Vector3::new(0.0, 0.0, -1.0));

        let hit = sphere.hit(&ray).expect("ray should hit the sphere");
        assert!((hit.t - 0.5).abs() < 1e-9);
        assert!((hit.normal - Vector3::Z).length() < 1e-9);
        assert!((hit.local_hit_point - Point3::new(0.0, 0.0, -0.5)).length() < 1e-9);
    }

    #[test]
    fn test_sphere_hit_matches_closed_form() {
        let sphere = Sphere::new(Point3::new(1.0, 2.0, 0.0), 3.0);
        let ray = Ray::new(Point3::new(1.0, 2.0, 100.0), Vector3::new(0.0, 0.0, -2.0));

        let hit = sphere.hit(&ray).unwrap();
        // Front of the sphere is at z = 3, which is 97 units or 48.5 direction lengths away
        assert!((hit.t - 48.5).abs() < 1e-6);
        assert!((hit.normal - Vector3::Z).length() < 1e-6);
        assert!((hit.local_hit_point - Point3::new(1.0, 2.0, 3.0)).length() < 1e-6);
        assert!((hit.normal.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5);

        // Ray pointing away from sphere
        let ray = Ray::new(Point3::ZERO, Vector3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&ray).is_none());

        // Ray passing beside the sphere
        let ray = Ray::new(Point3::new(2.0, 0.0, 5.0), Vector3::new(0.0, 0.0, -1.0));
        assert!(sphere.hit(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_ray() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, 10.0), 1.0);
        let ray = Ray::new(Point3::ZERO, Vector3::new(0.0, 0.0, -1.0));
        assert!(sphere.hit(&ray).is_none());
    }

    #[test]
    fn test_ray_from_inside_uses_far_root() {
        let sphere = Sphere::new(Point3::ZERO, 2.0);
        let ray = Ray::new(Point3::ZERO, Vector3::X);

        let hit = sphere.hit(&ray).unwrap();
        assert!((hit.t - 2.0).abs() < 1e-9);
        // Normal is the outward normal, not flipped toward the ray
        assert!((hit.normal - Vector3::X).length() < 1e-9);
    }

    #[test]
    fn test_ray_starting_on_surface_skips_self_hit() {
        let sphere = Sphere::new(Point3::ZERO, 1.0);
        let ray = Ray::new(Point3::new(0.0, 0.0, 1.0), Vector3::new(0.0, 0.0, -1.0));

        let hit = sphere.hit(&ray).unwrap();
        assert!((hit.t - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_direction_never_hits() {
        let sphere = Sphere::new(Point3::ZERO, 1.0);
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vector3::ZERO);
        assert!(sphere.hit(&ray).is_none());
    }

    #[test]
    fn test_negative_radius_clamped() {
        let mut sphere = Sphere::new(Point3::ZERO, -1.0);
        assert_eq!(sphere.radius(), 0.0);
        sphere.set_radius(4.0);
        sphere.set_center(Point3::new(1.0, 0.0, 0.0));
        assert_eq!(sphere.radius(), 4.0);
        assert_eq!(sphere.center(), Point3::new(1.0, 0.0, 0.0));
    }
}
