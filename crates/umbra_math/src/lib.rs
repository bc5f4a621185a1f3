// Re-export glam for convenience
pub use glam::*;

// Umbra math types
mod ray;
pub use ray::Ray;

/// A point in world space. Geometry is carried in double precision.
pub type Point3 = DVec3;

/// A direction or offset in world space.
pub type Vector3 = DVec3;

/// A 2D sample offset inside a pixel, in `[0, 1) x [0, 1)`.
pub type Point2 = DVec2;

/// Linear RGB color. Channels are unbounded until tone mapping.
pub type Color = Vec3;

pub const BLACK: Color = Vec3::ZERO;
pub const WHITE: Color = Vec3::ONE;
pub const RED: Color = Vec3::new(1.0, 0.0, 0.0);

/// Starting value for nearest-hit scans.
pub const HUGE_VALUE: f64 = 1.0e10;

pub const INV_PI: f32 = std::f32::consts::FRAC_1_PI;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dvec3_operations() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Point3::new(5.0, 7.0, 9.0));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_color_constants() {
        assert_eq!(RED.max_element(), 1.0);
        assert_eq!(WHITE.min_element(), 1.0);
        assert_eq!(BLACK.max_element(), 0.0);
    }
}
