//! Scene description types for Umbra.
//!
//! A description is plain data: view plane settings, the tracer to use,
//! lights and primitives. It maps one-to-one onto the renderer's `World`
//! but stays renderer-agnostic so it can be loaded from JSON, generated
//! in code, or inspected by tools.

use serde::{Deserialize, Serialize};
use umbra_math::{Color, Point3, Vector3, BLACK, WHITE};

use crate::loader::{SceneError, SceneResult};

/// Sampling pattern used to place sub-pixel samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplerKind {
    /// Centers of a k x k grid. Deterministic.
    #[default]
    Regular,
    /// One random sample per grid cell.
    Jittered,
    /// Uniform random samples with no stratification.
    PureRandom,
    /// Hammersley low-discrepancy points. Deterministic.
    Hammersley,
}

/// How a ray's nearest hit is turned into a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TracerKind {
    /// Flat object colors from the bare-bones hit scan.
    #[default]
    MultipleObjects,
    /// Material shading from the full hit scan.
    RayCast,
}

/// View plane configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewPlaneSettings {
    /// Horizontal resolution in pixels
    pub hres: u32,
    /// Vertical resolution in pixels
    pub vres: u32,
    /// World units per pixel
    pub pixel_size: f64,
    /// Display gamma (1.0 disables correction)
    pub gamma: f32,
    /// Flag out-of-gamut pixels in red instead of rescaling them
    pub show_out_of_gamut: bool,
    /// Samples per pixel
    pub samples: u32,
    /// Sampling pattern
    pub sampler: SamplerKind,
    /// Seed for the random sampling patterns
    pub seed: u64,
}

impl Default for ViewPlaneSettings {
    fn default() -> Self {
        Self {
            hres: 200,
            vres: 200,
            pixel_size: 1.0,
            gamma: 1.0,
            show_out_of_gamut: false,
            samples: 1,
            sampler: SamplerKind::Regular,
            seed: 0,
        }
    }
}

/// The ambient light every scene has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientDescription {
    pub radiance: f32,
    pub color: Color,
}

impl Default for AmbientDescription {
    fn default() -> Self {
        Self {
            radiance: 1.0,
            color: WHITE,
        }
    }
}

/// Surface shading model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialDescription {
    /// Constant color, unaffected by lights.
    Flat { color: Color },
    /// Lambertian diffuse with an ambient term.
    Matte {
        #[serde(default = "default_ka")]
        ka: f32,
        #[serde(default = "default_kd")]
        kd: f32,
        color: Color,
    },
}

/// A light source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LightDescription {
    Point {
        location: Point3,
        #[serde(default = "default_radiance")]
        radiance: f32,
        #[serde(default = "default_color")]
        color: Color,
    },
    /// `direction` points from the surface toward the light.
    Directional {
        direction: Vector3,
        #[serde(default = "default_radiance")]
        radiance: f32,
        #[serde(default = "default_color")]
        color: Color,
    },
}

/// A geometric primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectDescription {
    Plane {
        point: Point3,
        normal: Vector3,
        #[serde(default = "default_color")]
        color: Color,
        #[serde(default)]
        material: Option<MaterialDescription>,
    },
    Sphere {
        center: Point3,
        radius: f64,
        #[serde(default = "default_color")]
        color: Color,
        #[serde(default)]
        material: Option<MaterialDescription>,
    },
}

fn default_ka() -> f32 {
    0.25
}

fn default_kd() -> f32 {
    0.65
}

fn default_radiance() -> f32 {
    1.0
}

fn default_color() -> Color {
    WHITE
}

/// Everything needed to build a renderable world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    /// Scene name (file stem or built-in name)
    pub name: String,
    pub view_plane: ViewPlaneSettings,
    /// Color returned for rays that hit nothing
    pub background: Color,
    pub tracer: TracerKind,
    pub ambient: AmbientDescription,
    pub lights: Vec<LightDescription>,
    pub objects: Vec<ObjectDescription>,
}

impl Default for SceneDescription {
    fn default() -> Self {
        Self {
            name: String::new(),
            view_plane: ViewPlaneSettings::default(),
            background: BLACK,
            tracer: TracerKind::default(),
            ambient: AmbientDescription::default(),
            lights: Vec::new(),
            objects: Vec::new(),
        }
    }
}

impl SceneDescription {
    /// Create an empty scene with default view plane settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a primitive.
    pub fn with_object(mut self, object: ObjectDescription) -> Self {
        self.objects.push(object);
        self
    }

    /// Add a light.
    pub fn with_light(mut self, light: LightDescription) -> Self {
        self.lights.push(light);
        self
    }

    /// Check every value the renderer relies on.
    ///
    /// Rendering itself never fails on geometry, so anything that would
    /// produce a meaningless image is rejected here instead.
    pub fn validate(&self) -> SceneResult<()> {
        let vp = &self.view_plane;
        if vp.hres == 0 || vp.vres == 0 {
            return Err(invalid(format!(
                "resolution must be positive, got {}x{}",
                vp.hres, vp.vres
            )));
        }
        if !(vp.pixel_size > 0.0 && vp.pixel_size.is_finite()) {
            return Err(invalid(format!("pixel size must be positive, got {}", vp.pixel_size)));
        }
        if !(vp.gamma > 0.0 && vp.gamma.is_finite()) {
            return Err(invalid(format!("gamma must be positive, got {}", vp.gamma)));
        }
        if vp.samples == 0 {
            return Err(invalid("at least one sample per pixel is required"));
        }

        for (index, object) in self.objects.iter().enumerate() {
            match object {
                ObjectDescription::Plane { normal, material, .. } => {
                    if normal.length_squared() == 0.0 || !normal.is_finite() {
                        return Err(invalid(format!("object {}: plane normal is degenerate", index)));
                    }
                    validate_material(index, material.as_ref())?;
                }
                ObjectDescription::Sphere { radius, material, .. } => {
                    if !(*radius > 0.0 && radius.is_finite()) {
                        return Err(invalid(format!(
                            "object {}: sphere radius must be positive, got {}",
                            index, radius
                        )));
                    }
                    validate_material(index, material.as_ref())?;
                }
            }
        }

        for (index, light) in self.lights.iter().enumerate() {
            if let LightDescription::Directional { direction, .. } = light {
                if direction.length_squared() == 0.0 {
                    return Err(invalid(format!("light {}: direction is degenerate", index)));
                }
            }
        }

        Ok(())
    }
}

fn validate_material(index: usize, material: Option<&MaterialDescription>) -> SceneResult<()> {
    if let Some(MaterialDescription::Matte { ka, kd, .. }) = material {
        if *ka < 0.0 || *kd < 0.0 {
            return Err(invalid(format!(
                "object {}: matte coefficients must be non-negative",
                index
            )));
        }
    }
    Ok(())
}

fn invalid(message: impl Into<String>) -> SceneError {
    SceneError::Invalid(message.into())
}
