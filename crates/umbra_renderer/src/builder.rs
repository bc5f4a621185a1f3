//! Building a world from a scene description.

use std::sync::Arc;

use umbra_core::{
    LightDescription, MaterialDescription, ObjectDescription, SceneDescription, TracerKind,
};

use crate::{
    Ambient, DirectionalLight, Flat, Light, Material, Matte, MultipleObjects, Plane, PointLight,
    RayCast, Sphere, ViewPlane, World,
};

impl World {
    /// Build a world from a description.
    ///
    /// The description is assumed valid (see `SceneDescription::validate`).
    pub fn build(scene: &SceneDescription) -> Self {
        let mut world = World::new();
        world.vp = ViewPlane::from_settings(&scene.view_plane);
        world.background = scene.background;

        match scene.tracer {
            TracerKind::MultipleObjects => world.set_tracer(Box::new(MultipleObjects)),
            TracerKind::RayCast => world.set_tracer(Box::new(RayCast)),
        }

        world.set_ambient(Box::new(Ambient::new(
            scene.ambient.radiance,
            scene.ambient.color,
        )));

        for light in &scene.lights {
            world.add_light(build_light(light));
        }

        for object in &scene.objects {
            match object {
                ObjectDescription::Plane {
                    point,
                    normal,
                    color,
                    material,
                } => {
                    let mut plane = Plane::new(*point, *normal).with_color(*color);
                    if let Some(material) = material {
                        plane.set_material(build_material(material));
                    }
                    world.add_object(Box::new(plane));
                }
                ObjectDescription::Sphere {
                    center,
                    radius,
                    color,
                    material,
                } => {
                    let mut sphere = Sphere::new(*center, *radius).with_color(*color);
                    if let Some(material) = material {
                        sphere.set_material(build_material(material));
                    }
                    world.add_object(Box::new(sphere));
                }
            }
        }

        log::debug!(
            "Built world '{}': {} objects, {} lights, {} spp",
            scene.name,
            world.objects().len(),
            world.lights().len(),
            world.vp.num_samples()
        );

        world
    }
}

fn build_light(light: &LightDescription) -> Box<dyn Light> {
    match light {
        LightDescription::Point {
            location,
            radiance,
            color,
        } => Box::new(PointLight::new(*location, *radiance, *color)),
        LightDescription::Directional {
            direction,
            radiance,
            color,
        } => Box::new(DirectionalLight::new(*direction, *radiance, *color)),
    }
}

fn build_material(material: &MaterialDescription) -> Arc<dyn Material> {
    match material {
        MaterialDescription::Flat { color } => Arc::new(Flat::new(*color)),
        MaterialDescription::Matte { ka, kd, color } => Arc::new(Matte::new(*ka, *kd, *color)),
    }
}
