//! Loading scene descriptions from JSON.
//!
//! Scene files are JSON documents matching `SceneDescription`. Every field
//! has a default, so a minimal file only lists its objects:
//!
//! ```json
//! {
//!   "view_plane": { "hres": 64, "vres": 64, "samples": 4, "sampler": "jittered" },
//!   "objects": [
//!     { "type": "sphere", "center": [0, 0, 0], "radius": 20, "color": [1, 0, 0] }
//!   ]
//! }
//! ```

use std::path::Path;

use thiserror::Error;

use crate::scene::SceneDescription;

/// Errors that can occur while loading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Invalid(String),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Load and validate a scene description file.
///
/// An unnamed scene takes the file stem as its name.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    log::debug!("Loading scene from {}", path.display());

    let source = std::fs::read_to_string(path)?;
    let mut scene = load_scene_from_str(&source)?;

    if scene.name.is_empty() {
        scene.name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unnamed")
            .to_string();
    }

    Ok(scene)
}

/// Parse and validate a scene description from a JSON string.
pub fn load_scene_from_str(source: &str) -> SceneResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(source)?;
    scene.validate()?;

    log::debug!(
        "Parsed scene '{}': {}x{}, {} objects, {} lights",
        scene.name,
        scene.view_plane.hres,
        scene.view_plane.vres,
        scene.objects.len(),
        scene.lights.len()
    );

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{
        LightDescription, MaterialDescription, ObjectDescription, SamplerKind, TracerKind,
    };
    use umbra_math::{Color, Point3, WHITE};

    #[test]
    fn test_minimal_scene() {
        let scene = load_scene_from_str("{}").unwrap();
        assert_eq!(scene.view_plane.hres, 200);
        assert!(scene.objects.is_empty());
        assert_eq!(scene.tracer, TracerKind::MultipleObjects);
    }

    #[test]
    fn test_full_scene() {
        let json = r#"{
            "name": "full",
            "view_plane": {
                "hres": 32, "vres": 16, "pixel_size": 0.5, "gamma": 2.2,
                "show_out_of_gamut": true, "samples": 4, "sampler": "hammersley"
            },
            "background": [0.1, 0.2, 0.3],
            "tracer": "ray_cast",
            "lights": [
                { "type": "point", "location": [0, 100, 100], "radiance": 2.0 },
                { "type": "directional", "direction": [0, 1, 0] }
            ],
            "objects": [
                { "type": "plane", "point": [0, 0, 0], "normal": [0, 1, 0] },
                {
                    "type": "sphere", "center": [0, 10, 0], "radius": 5,
                    "color": [1, 0, 0],
                    "material": { "type": "matte", "kd": 0.8, "color": [1, 0, 0] }
                }
            ]
        }"#;

        let scene = load_scene_from_str(json).unwrap();
        assert_eq!(scene.name, "full");
        assert_eq!(scene.view_plane.hres, 32);
        assert_eq!(scene.view_plane.vres, 16);
        assert_eq!(scene.view_plane.sampler, SamplerKind::Hammersley);
        assert!(scene.view_plane.show_out_of_gamut);
        assert_eq!(scene.background, Color::new(0.1, 0.2, 0.3));
        assert_eq!(scene.tracer, TracerKind::RayCast);
        assert_eq!(scene.lights.len(), 2);
        assert_eq!(scene.objects.len(), 2);

        match &scene.lights[0] {
            LightDescription::Point { radiance, color, .. } => {
                assert_eq!(*radiance, 2.0);
                assert_eq!(*color, WHITE);
            }
            other => panic!("expected point light, got {:?}", other),
        }

        match &scene.objects[0] {
            ObjectDescription::Plane { color, material, .. } => {
                assert_eq!(*color, WHITE);
                assert!(material.is_none());
            }
            other => panic!("expected plane, got {:?}", other),
        }

        match &scene.objects[1] {
            ObjectDescription::Sphere {
                center,
                material: Some(MaterialDescription::Matte { ka, kd, .. }),
                ..
            } => {
                assert_eq!(*center, Point3::new(0.0, 10.0, 0.0));
                assert_eq!(*ka, 0.25);
                assert_eq!(*kd, 0.8);
            }
            other => panic!("expected matte sphere, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json() {
        let result = load_scene_from_str("{ \"objects\": [ }");
        assert!(matches!(result, Err(SceneError::Parse(_))));
    }

    #[test]
    fn test_unknown_object_type() {
        let result = load_scene_from_str(r#"{ "objects": [ { "type": "torus" } ] }"#);
        assert!(matches!(result, Err(SceneError::Parse(_))));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let result = load_scene_from_str(r#"{ "view_plane": { "hres": 0 } }"#);
        assert!(matches!(result, Err(SceneError::Invalid(_))));
    }

    #[test]
    fn test_load_scene_uses_file_stem() {
        let path = std::env::temp_dir().join("umbra_loader_test_scene.json");
        std::fs::write(&path, r#"{ "view_plane": { "hres": 8, "vres": 8 } }"#).unwrap();

        let scene = load_scene(&path).unwrap();
        assert_eq!(scene.name, "umbra_loader_test_scene");
        assert_eq!(scene.view_plane.hres, 8);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file() {
        let result = load_scene("/nonexistent/umbra/scene.json");
        assert!(matches!(result, Err(SceneError::Io(_))));
    }

    #[test]
    fn test_bundled_scenes_load() {
        let _ = env_logger::builder().is_test(true).try_init();
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../scenes");

        let two = load_scene(dir.join("two_spheres.json")).unwrap();
        assert_eq!(two.objects.len(), 3);
        assert_eq!(two.view_plane.samples, 4);

        let lit = load_scene(dir.join("lit_spheres.json")).unwrap();
        assert_eq!(lit.tracer, TracerKind::RayCast);
        assert_eq!(lit.lights.len(), 2);
        assert!(lit
            .objects
            .iter()
            .all(|object| matches!(object, ObjectDescription::Sphere { material: Some(_), .. }
                | ObjectDescription::Plane { material: Some(_), .. })));
    }
}
