//! Shading record produced by the world's nearest-hit scan.

use crate::Material;
use umbra_math::{Color, Point3, Vector3, BLACK};

/// Result of resolving a ray against the whole world.
///
/// Built fresh for every ray and returned by value, so a record never
/// carries state from a previous ray. Fields other than `hit` are only
/// meaningful when `hit` is true.
#[derive(Clone)]
pub struct ShadeRec<'a> {
    /// Whether the ray hit any primitive
    pub hit: bool,
    /// Ray parameter of the nearest hit
    pub t: f64,
    /// World-space point of the nearest hit
    pub hit_point: Point3,
    /// Object-space hit point, used for texturing
    pub local_hit_point: Point3,
    /// Unit surface normal at the hit
    pub normal: Vector3,
    /// Flat color of the nearest primitive
    pub color: Color,
    /// Material of the nearest primitive, if it has one
    pub material: Option<&'a dyn Material>,
}

impl<'a> Default for ShadeRec<'a> {
    fn default() -> Self {
        Self {
            hit: false,
            t: 0.0,
            hit_point: Point3::ZERO,
            local_hit_point: Point3::ZERO,
            normal: Vector3::ZERO,
            color: BLACK,
            material: None,
        }
    }
}
