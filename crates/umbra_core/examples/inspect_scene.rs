//! Example: Load and inspect a scene file.
//!
//! Run with: cargo run --example inspect_scene -- scenes/two_spheres.json

use std::env;

use umbra_core::{load_scene, ObjectDescription};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <path-to-scene-json>");
        println!("\nExamples:");
        println!("  cargo run --example inspect_scene -- scenes/two_spheres.json");
        println!("  cargo run --example inspect_scene -- scenes/lit_spheres.json");
        return;
    }

    let path = &args[1];
    println!("Loading scene file: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            let vp = &scene.view_plane;
            println!("\n=== Scene: {} ===", scene.name);
            println!(
                "View plane: {}x{}, pixel size {}, gamma {}",
                vp.hres, vp.vres, vp.pixel_size, vp.gamma
            );
            println!("Sampling: {} x {:?} (seed {})", vp.samples, vp.sampler, vp.seed);
            println!("Tracer: {:?}", scene.tracer);
            println!("Lights: {}", scene.lights.len());

            println!("\n--- Objects ---");
            for (i, object) in scene.objects.iter().enumerate() {
                match object {
                    ObjectDescription::Sphere { center, radius, material, .. } => println!(
                        "  [{}] Sphere at ({:.2}, {:.2}, {:.2}) r={:.2} shaded={}",
                        i,
                        center.x,
                        center.y,
                        center.z,
                        radius,
                        material.is_some()
                    ),
                    ObjectDescription::Plane { point, normal, material, .. } => println!(
                        "  [{}] Plane through ({:.2}, {:.2}, {:.2}) n=({:.2}, {:.2}, {:.2}) shaded={}",
                        i,
                        point.x,
                        point.y,
                        point.z,
                        normal.x,
                        normal.y,
                        normal.z,
                        material.is_some()
                    ),
                }
            }
        }
        Err(e) => {
            eprintln!("Error loading scene file: {}", e);
        }
    }
}
