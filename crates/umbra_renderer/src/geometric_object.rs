//! GeometricObject trait for ray-primitive intersection.

use crate::Material;
use umbra_math::{Color, Point3, Ray, Vector3};

/// A single ray-primitive intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Ray parameter, in units of the ray's direction
    pub t: f64,
    /// Unit surface normal
    pub normal: Vector3,
    /// `origin + t * direction`
    pub local_hit_point: Point3,
}

/// Trait for primitives that can be hit by rays.
pub trait GeometricObject: Send + Sync {
    /// Intersect the ray with this primitive.
    ///
    /// Returns the nearest hit whose `t` is above the primitive's own
    /// epsilon, or `None`. Must not assume the direction is normalized.
    fn hit(&self, ray: &Ray) -> Option<Hit>;

    /// Flat color used by the bare-bones tracer.
    fn color(&self) -> Color;

    /// Material used by the shading tracer.
    fn material(&self) -> Option<&dyn Material>;
}
