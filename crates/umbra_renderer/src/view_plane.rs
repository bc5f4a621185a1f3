//! View plane configuration.

use crate::{color, create_sampler, RegularSampler, RenderError, RenderResult, Sampler};
use umbra_core::{SamplerKind, ViewPlaneSettings};
use umbra_math::Color;

/// Resolution, pixel size, display mapping and sampler of the image.
pub struct ViewPlane {
    /// Horizontal resolution in pixels
    pub hres: u32,
    /// Vertical resolution in pixels
    pub vres: u32,
    /// World units per pixel
    pub pixel_size: f64,
    /// Flag out-of-gamut pixels in red instead of rescaling them
    pub show_out_of_gamut: bool,
    gamma: f32,
    inv_gamma: f32,
    sampler: Option<Box<dyn Sampler>>,
}

impl ViewPlane {
    /// A 200x200 view plane with unit pixels, no gamma and no sampler.
    pub fn new() -> Self {
        Self {
            hres: 200,
            vres: 200,
            pixel_size: 1.0,
            show_out_of_gamut: false,
            gamma: 1.0,
            inv_gamma: 1.0,
            sampler: None,
        }
    }

    /// Build a view plane from scene settings, including its sampler.
    pub fn from_settings(settings: &ViewPlaneSettings) -> Self {
        let mut vp = Self::new();
        vp.set_hres(settings.hres);
        vp.set_vres(settings.vres);
        vp.set_pixel_size(settings.pixel_size);
        vp.set_gamma(settings.gamma);
        vp.set_gamut_display(settings.show_out_of_gamut);
        vp.set_sampler(create_sampler(
            settings.sampler,
            settings.samples,
            settings.seed,
        ));
        vp
    }

    pub fn set_hres(&mut self, hres: u32) {
        self.hres = hres;
    }

    pub fn set_vres(&mut self, vres: u32) {
        self.vres = vres;
    }

    pub fn set_pixel_size(&mut self, size: f64) {
        self.pixel_size = size;
    }

    pub fn set_gamma(&mut self, gamma: f32) {
        self.gamma = gamma;
        self.inv_gamma = 1.0 / gamma;
    }

    pub fn set_gamut_display(&mut self, show: bool) {
        self.show_out_of_gamut = show;
    }

    pub fn set_sampler(&mut self, sampler: Box<dyn Sampler>) {
        self.sampler = Some(sampler);
    }

    /// Regular sampling for a single sample, jittered otherwise.
    pub fn set_samples(&mut self, samples: u32, seed: u64) {
        if samples > 1 {
            self.set_sampler(create_sampler(SamplerKind::Jittered, samples, seed));
        } else {
            self.set_sampler(Box::new(RegularSampler::new(1)));
        }
    }

    pub fn gamma(&self) -> f32 {
        self.gamma
    }

    pub fn inv_gamma(&self) -> f32 {
        self.inv_gamma
    }

    pub fn sampler(&self) -> Option<&dyn Sampler> {
        self.sampler.as_deref()
    }

    /// Samples per pixel, or zero without a sampler.
    pub fn num_samples(&self) -> usize {
        self.sampler.as_ref().map_or(0, |s| s.bundle_size())
    }

    /// Clamp a raw pixel color into gamut and apply gamma.
    pub fn map_color(&self, raw: Color) -> Color {
        color::tone_map(raw, self.show_out_of_gamut, self.inv_gamma)
    }

    /// Check the values the render loop depends on.
    pub fn validate(&self) -> RenderResult<()> {
        if self.hres == 0 || self.vres == 0 {
            return Err(RenderError::InvalidViewPlane(format!(
                "resolution must be positive, got {}x{}",
                self.hres, self.vres
            )));
        }
        if !(self.pixel_size > 0.0 && self.pixel_size.is_finite()) {
            return Err(RenderError::InvalidViewPlane(format!(
                "pixel size must be positive, got {}",
                self.pixel_size
            )));
        }
        if !(self.gamma > 0.0 && self.gamma.is_finite()) {
            return Err(RenderError::InvalidViewPlane(format!(
                "gamma must be positive, got {}",
                self.gamma
            )));
        }
        if let Some(sampler) = &self.sampler {
            if sampler.bundle_size() == 0 {
                return Err(RenderError::InvalidViewPlane(
                    "sampler must take at least one sample per pixel".to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl Default for ViewPlane {
    fn default() -> Self {
        Self::new()
    }
}
