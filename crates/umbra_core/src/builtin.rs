//! Built-in scenes.
//!
//! These are the reference scenes used for regression renders and for
//! trying the renderer without writing a scene file.

use umbra_math::{Color, Point3, Vector3, BLACK, RED, WHITE};

use crate::scene::{
    LightDescription, MaterialDescription, ObjectDescription, SamplerKind, SceneDescription,
    TracerKind, ViewPlaneSettings,
};

/// Names accepted by [`by_name`].
pub const NAMES: &[&str] = &[
    "single_sphere",
    "ground_plane",
    "tilted_plane",
    "multiple_objects",
    "shaded_spheres",
];

/// Look up a built-in scene by name.
pub fn by_name(name: &str) -> Option<SceneDescription> {
    match name {
        "single_sphere" => Some(single_sphere()),
        "ground_plane" => Some(ground_plane()),
        "tilted_plane" => Some(tilted_plane()),
        "multiple_objects" => Some(multiple_objects()),
        "shaded_spheres" => Some(shaded_spheres()),
        _ => None,
    }
}

/// A red sphere of radius 85 at the origin on a 200x200 view plane.
pub fn single_sphere() -> SceneDescription {
    SceneDescription::new("single_sphere").with_object(ObjectDescription::Sphere {
        center: Point3::ZERO,
        radius: 85.0,
        color: RED,
        material: None,
    })
}

/// A white ground plane through the origin seen edge-on.
///
/// Every orthographic ray runs parallel to the plane, so the image is
/// entirely background. Used as the golden regression case for the
/// parallel-ray policy.
pub fn ground_plane() -> SceneDescription {
    SceneDescription::new("ground_plane").with_object(ObjectDescription::Plane {
        point: Point3::ZERO,
        normal: Vector3::Y,
        color: WHITE,
        material: None,
    })
}

/// A white plane through the view origin tilted 45 degrees toward the
/// viewer. Rays above the horizon hit it, rays below start behind it.
pub fn tilted_plane() -> SceneDescription {
    SceneDescription::new("tilted_plane").with_object(ObjectDescription::Plane {
        point: Point3::new(0.0, 0.0, 100.0),
        normal: Vector3::new(0.0, 1.0, 1.0),
        color: WHITE,
        material: None,
    })
}

/// Two overlapping spheres in front of a tilted green plane.
pub fn multiple_objects() -> SceneDescription {
    SceneDescription {
        name: "multiple_objects".to_string(),
        view_plane: ViewPlaneSettings {
            hres: 300,
            vres: 300,
            ..Default::default()
        },
        background: BLACK,
        ..Default::default()
    }
    .with_object(ObjectDescription::Sphere {
        center: Point3::new(0.0, -25.0, 0.0),
        radius: 80.0,
        color: RED,
        material: None,
    })
    .with_object(ObjectDescription::Sphere {
        center: Point3::new(0.0, 30.0, 0.0),
        radius: 60.0,
        color: Color::new(1.0, 1.0, 0.0),
        material: None,
    })
    .with_object(ObjectDescription::Plane {
        point: Point3::ZERO,
        normal: Vector3::new(0.0, 1.0, 1.0),
        color: Color::new(0.0, 0.3, 0.0),
        material: None,
    })
}

/// Matte spheres on a matte plane, lit by a point and a directional light.
pub fn shaded_spheres() -> SceneDescription {
    let matte = |color: Color| {
        Some(MaterialDescription::Matte {
            ka: 0.25,
            kd: 0.65,
            color,
        })
    };

    SceneDescription {
        name: "shaded_spheres".to_string(),
        view_plane: ViewPlaneSettings {
            hres: 400,
            vres: 400,
            pixel_size: 0.5,
            samples: 16,
            sampler: SamplerKind::Jittered,
            seed: 7,
            ..Default::default()
        },
        background: Color::new(0.05, 0.05, 0.1),
        tracer: TracerKind::RayCast,
        ..Default::default()
    }
    .with_light(LightDescription::Point {
        location: Point3::new(100.0, 50.0, 150.0),
        radiance: 3.0,
        color: WHITE,
    })
    .with_light(LightDescription::Directional {
        direction: Vector3::new(-1.0, 1.0, 1.0),
        radiance: 0.5,
        color: Color::new(1.0, 0.9, 0.8),
    })
    .with_object(ObjectDescription::Sphere {
        center: Point3::new(-35.0, 10.0, 0.0),
        radius: 40.0,
        color: Color::new(1.0, 1.0, 0.0),
        material: matte(Color::new(1.0, 1.0, 0.0)),
    })
    .with_object(ObjectDescription::Sphere {
        center: Point3::new(40.0, -10.0, 20.0),
        radius: 30.0,
        color: Color::new(0.2, 0.4, 1.0),
        material: matte(Color::new(0.2, 0.4, 1.0)),
    })
    .with_object(ObjectDescription::Plane {
        point: Point3::new(0.0, -40.0, 0.0),
        normal: Vector3::new(0.0, 1.0, 0.3),
        color: Color::splat(0.6),
        material: matte(Color::splat(0.6)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_resolves() {
        for name in NAMES {
            let scene = by_name(name).unwrap_or_else(|| panic!("missing scene {}", name));
            assert_eq!(scene.name, *name);
        }
        assert!(by_name("no_such_scene").is_none());
    }

    #[test]
    fn test_builtin_scenes_are_valid() {
        for name in NAMES {
            let scene = by_name(name).unwrap();
            assert!(scene.validate().is_ok(), "scene {} failed validation", name);
        }
    }

    #[test]
    fn test_single_sphere_matches_reference_build() {
        let scene = single_sphere();
        assert_eq!(scene.view_plane.hres, 200);
        assert_eq!(scene.view_plane.vres, 200);
        assert_eq!(scene.view_plane.pixel_size, 1.0);
        assert_eq!(scene.view_plane.gamma, 1.0);
        assert_eq!(scene.background, BLACK);
        assert_eq!(scene.objects.len(), 1);
    }

    #[test]
    fn test_builtin_scenes_survive_json() {
        let scene = shaded_spheres();
        let json = serde_json::to_string(&scene).unwrap();
        let parsed = crate::load_scene_from_str(&json).unwrap();
        assert_eq!(parsed, scene);
    }
}
