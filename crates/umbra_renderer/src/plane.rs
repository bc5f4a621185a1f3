//! Infinite plane primitive.

use std::sync::Arc;

use crate::{
    geometric_object::{GeometricObject, Hit},
    Material,
};
use umbra_math::{Color, Point3, Ray, Vector3, WHITE};

/// An infinite plane through `point` with unit `normal`.
#[derive(Clone)]
pub struct Plane {
    point: Point3,
    normal: Vector3,
    color: Color,
    material: Option<Arc<dyn Material>>,
}

impl Plane {
    /// Hits closer than this are treated as self-intersections.
    pub const EPSILON: f64 = 0.001;

    /// Create a new plane. The normal is normalized on the way in.
    pub fn new(point: Point3, normal: Vector3) -> Self {
        Self {
            point,
            normal: Self::unit_normal(normal),
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

    pub fn set_point(&mut self, point: Point3) {
        self.point = point;
    }

    pub fn set_normal(&mut self, normal: Vector3) {
        self.normal = Self::unit_normal(normal);
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_material(&mut self, material: Arc<dyn Material>) {
        self.material = Some(material);
    }

    pub fn point(&self) -> Point3 {
        self.point
    }

    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    fn unit_normal(normal: Vector3) -> Vector3 {
        if normal.length_squared() == 0.0 {
            // A zero normal yields NaN for every t, so the plane is never hit
            log::warn!("Plane created with a zero normal; it will never be hit");
        }
        normal.normalize()
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::new(Point3::ZERO, Vector3::Y)
    }
}

impl GeometricObject for Plane {
    fn hit(&self, ray: &Ray) -> Option<Hit> {
        let t = (self.point - ray.origin()).dot(self.normal) / ray.direction().dot(self.normal);

        // Parallel rays divide by zero: NaN and -inf fail the epsilon test,
        // +inf fails the finiteness test.
        if t > Self::EPSILON && t.is_finite() {
            Some(Hit {
                t,
                normal: self.normal,
                local_hit_point: ray.at(t),
            })
        } else {
            None
        }
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

    fn ground() -> Plane {
        Plane::new(Point3::ZERO, Vector3::Y)
    }

    #[test]
    fn test_plane_hit() {
        let plane = ground();
        let ray = Ray::new(Point3::new(3.0, 10.0, -2.0), Vector3::new(0.0, -1.0, 0.0));

        let hit = plane.hit(&ray).expect("ray should hit the plane");
        assert!((hit.t - 10.0).abs() < 1e-9);
        assert_eq!(hit.normal, Vector3::Y);
        assert!((hit.local_hit_point - Point3::new(3.0, 0.0, -2.0)).length() < 1e-9);
    }

    #[test]
    fn test_plane_hit_unnormalized_direction() {
        let plane = ground();
        let ray = Ray::new(Point3::new(0.0, 10.0, 0.0), Vector3::new(1.0, -4.0, 0.0));

        let hit = plane.hit(&ray).unwrap();
        // t counts direction lengths, not world units
        assert!((hit.t - 2.5).abs() < 1e-9);
        assert!((hit.local_hit_point - Point3::new(2.5, 0.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn test_parallel_ray_never_hits() {
        let plane = ground();
        let direction = Vector3::new(0.0, 0.0, -1.0);

        // Above, below and exactly on the plane
        for y in [-50.0, -1e-12, 0.0, 1e-12, 1.0, 100.0] {
            let ray = Ray::new(Point3::new(7.0, y, 100.0), direction);
            assert!(plane.hit(&ray).is_none(), "parallel ray at y={} hit", y);
        }

        let oblique = Ray::new(Point3::new(0.0, -3.0, 0.0), Vector3::new(1.0, 0.0, 1.0));
        assert!(plane.hit(&oblique).is_none());
    }

    #[test]
    fn test_plane_behind_ray() {
        let plane = ground();
        let ray = Ray::new(Point3::new(0.0, 10.0, 0.0), Vector3::Y);
        assert!(plane.hit(&ray).is_none());
    }

    #[test]
    fn test_plane_epsilon() {
        let plane = ground();
        let down = Vector3::new(0.0, -1.0, 0.0);

        let on_surface = Ray::new(Point3::new(0.0, 0.0005, 0.0), down);
        assert!(plane.hit(&on_surface).is_none());

        let just_above = Ray::new(Point3::new(0.0, 0.002, 0.0), down);
        assert!(plane.hit(&just_above).is_some());
    }

    #[test]
    fn test_normal_is_normalized() {
        let plane = Plane::new(Point3::ZERO, Vector3::new(0.0, 3.0, 4.0));
        assert!((plane.normal().length() - 1.0).abs() < 1e-12);
        assert!((plane.normal() - Vector3::new(0.0, 0.6, 0.8)).length() < 1e-12);
    }

    #[test]
    fn test_zero_normal_never_hits() {
        let plane = Plane::new(Point3::ZERO, Vector3::ZERO);
        let ray = Ray::new(Point3::new(0.0, 1.0, 0.0), Vector3::new(0.0, -1.0, 0.0));
        assert!(plane.hit(&ray).is_none());
    }

    #[test]
    fn test_plane_properties() {
        let mut plane = Plane::default().with_color(Color::new(0.0, 0.3, 0.0));
        assert_eq!(plane.normal(), Vector3::Y);
        assert_eq!(plane.color(), Color::new(0.0, 0.3, 0.0));
        assert!(plane.material().is_none());

        plane.set_point(Point3::new(0.0, 5.0, 0.0));
        plane.set_normal(Vector3::new(0.0, -2.0, 0.0));
        plane.set_material(Arc::new(crate::Flat::new(WHITE)));
        assert_eq!(plane.point(), Point3::new(0.0, 5.0, 0.0));
        assert_eq!(plane.normal(), Vector3::NEG_Y);
        assert!(plane.material().is_some());
    }
}
