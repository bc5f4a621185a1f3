//! Light sources for the shading tracer.

use crate::ShadeRec;
use umbra_math::{Color, Point3, Vector3, WHITE};

/// Trait for lights that illuminate a shading point.
pub trait Light: Send + Sync {
    /// Unit direction from the shading point toward the light.
    fn direction(&self, sr: &ShadeRec) -> Vector3;

    /// Incident radiance at the shading point.
    fn radiance(&self, sr: &ShadeRec) -> Color;
}

/// Uniform ambient light. Has no direction.
#[derive(Debug, Clone, Copy)]
pub struct Ambient {
    ls: f32,
    color: Color,
}

impl Ambient {
    pub fn new(ls: f32, color: Color) -> Self {
        Self { ls, color }
    }
}

impl Default for Ambient {
    fn default() -> Self {
        Self::new(1.0, WHITE)
    }
}

impl Light for Ambient {
    fn direction(&self, _sr: &ShadeRec) -> Vector3 {
        Vector3::ZERO
    }

    fn radiance(&self, _sr: &ShadeRec) -> Color {
        self.ls * self.color
    }
}

/// A point light with no distance falloff.
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    location: Point3,
    ls: f32,
    color: Color,
}

impl PointLight {
    pub fn new(location: Point3, ls: f32, color: Color) -> Self {
        Self { location, ls, color }
    }
}

impl Light for PointLight {
    fn direction(&self, sr: &ShadeRec) -> Vector3 {
        (self.location - sr.hit_point).normalize_or_zero()
    }

    fn radiance(&self, _sr: &ShadeRec) -> Color {
        self.ls * self.color
    }
}

/// A light infinitely far away along a fixed direction.
#[derive(Debug, Clone, Copy)]
pub struct DirectionalLight {
    direction: Vector3,
    ls: f32,
    color: Color,
}

impl DirectionalLight {
    /// `direction` points toward the light and is normalized here.
    pub fn new(direction: Vector3, ls: f32, color: Color) -> Self {
        Self {
            direction: direction.normalize_or_zero(),
            ls,
            color,
        }
    }
}

impl Light for DirectionalLight {
    fn direction(&self, _sr: &ShadeRec) -> Vector3 {
        self.direction
    }

    fn radiance(&self, _sr: &ShadeRec) -> Color {
        self.ls * self.color
    }
}
