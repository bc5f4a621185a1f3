//! Umbra Renderer - orthographic ray casting.
//!
//! Casts one ray per sub-pixel sample along the view axis, resolves the
//! nearest primitive hit, and maps the averaged sample colors to 8-bit
//! display values.
//!
//! The pipeline, leaves first:
//!
//! - [`GeometricObject`] primitives ([`Plane`], [`Sphere`]) answer a single
//!   intersection query.
//! - [`World`] owns the primitives and lights, resolves nearest hits and
//!   runs the render loop.
//! - A [`Tracer`] turns a ray into a color through the world.
//! - A [`Sampler`] places sub-pixel samples.
//! - A [`DisplaySink`] receives the final pixels.

mod bucket;
mod builder;
mod camera;
mod color;
mod error;
mod geometric_object;
mod image_buffer;
mod light;
mod material;
mod plane;
mod sampler;
mod shade_rec;
mod sink;
mod sphere;
mod tracer;
mod view_plane;
mod world;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use color::{clamp_to_color, max_to_one, to_display, tone_map};
pub use error::{RenderError, RenderResult};
pub use geometric_object::{GeometricObject, Hit};
pub use image_buffer::ImageBuffer;
pub use light::{Ambient, DirectionalLight, Light, PointLight};
pub use material::{Flat, Material, Matte};
pub use plane::Plane;
pub use sampler::{
    create_sampler, Bundles, HammersleySampler, JitteredSampler, PureRandomSampler,
    RegularSampler, SampleSets, Sampler, NUM_SETS,
};
pub use shade_rec::ShadeRec;
pub use sink::{DisplaySink, PixelBuffer};
pub use sphere::Sphere;
pub use tracer::{MultipleObjects, RayCast, Tracer};
pub use view_plane::ViewPlane;
pub use world::{World, ZW};

/// Re-export math types from umbra_math
pub use umbra_math::{Color, Point2, Point3, Ray, Vector3, BLACK, RED, WHITE};

/// Re-export the scene settings the renderer consumes
pub use umbra_core::{SamplerKind, TracerKind};
