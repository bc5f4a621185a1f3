//! Umbra Core - scene descriptions for the Umbra ray tracer.
//!
//! This crate provides:
//!
//! - **Description types**: `SceneDescription`, `ViewPlaneSettings`,
//!   `ObjectDescription`, `MaterialDescription`, `LightDescription`
//! - **Loading**: JSON scene files with validation
//! - **Built-in scenes**: ready-made descriptions for regression renders
//!
//! The renderer turns a description into a `World`; nothing here knows
//! about rays or intersections.
//!
//! # Example
//!
//! ```ignore
//! use umbra_core::load_scene;
//!
//! let scene = load_scene("scenes/two_spheres.json")?;
//! println!("Loaded {} objects, {} lights",
//!     scene.objects.len(),
//!     scene.lights.len());
//! ```

pub mod builtin;
pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, SceneError, SceneResult};
pub use scene::{
    AmbientDescription, LightDescription, MaterialDescription, ObjectDescription, SamplerKind,
    SceneDescription, TracerKind, ViewPlaneSettings,
};
