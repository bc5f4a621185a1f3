//! Simple ray casting example.
//!
//! Builds a world by hand, renders it with 16 jittered samples per pixel
//! and saves the result as PNG. Pass `--flat` to skip shading.

use std::sync::Arc;

use umbra_renderer::{
    create_sampler, Color, Matte, MultipleObjects, PixelBuffer, Plane, Point3, PointLight,
    RayCast, SamplerKind, Sphere, Vector3, World,
};

fn main() {
    println!("Umbra Ray Caster - Simple Example");
    println!("=================================");

    let start = std::time::Instant::now();
    let world = build_world();
    println!("World built in {:?}", start.elapsed());

    println!(
        "Rendering {}x{} @ {} spp...",
        world.vp.hres,
        world.vp.vres,
        world.vp.num_samples()
    );

    let mut pixels = PixelBuffer::new(world.vp.hres, world.vp.vres);
    let start = std::time::Instant::now();
    world
        .render_scene_parallel(&mut pixels, 32)
        .expect("Render failed");
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.png";
    pixels.save(filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_world() -> World {
    let mut world = World::new();
    world.vp.set_hres(400);
    world.vp.set_vres(300);
    world.vp.set_pixel_size(0.5);
    world.vp.set_gamma(2.2);
    world.vp.set_sampler(create_sampler(SamplerKind::Jittered, 16, 1));
    world.background = Color::new(0.1, 0.1, 0.15);

    let flat = std::env::args().any(|arg| arg == "--flat");
    if flat {
        world.set_tracer(Box::new(MultipleObjects));
    } else {
        world.set_tracer(Box::new(RayCast));
    }

    world.add_light(Box::new(PointLight::new(
        Point3::new(80.0, 80.0, 120.0),
        3.0,
        Color::ONE,
    )));

    let red = Color::new(0.9, 0.2, 0.2);
    world.add_object(Box::new(
        Sphere::new(Point3::new(-20.0, 0.0, 0.0), 35.0)
            .with_color(red)
            .with_material(Arc::new(Matte::new(0.25, 0.65, red))),
    ));

    let grey = Color::splat(0.7);
    world.add_object(Box::new(
        Plane::new(Point3::new(0.0, -35.0, 0.0), Vector3::new(0.0, 1.0, 0.2))
            .with_color(grey)
            .with_material(Arc::new(Matte::new(0.25, 0.65, grey))),
    ));

    world
}
