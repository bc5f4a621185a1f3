//! The world: scene contents, nearest-hit resolution and the render loop.

use std::time::Instant;

use rayon::prelude::*;

use crate::{
    bucket::{generate_buckets, render_bucket},
    color::to_display,
    Ambient, Camera, DisplaySink, GeometricObject, Hit, ImageBuffer, Light, RenderError,
    RenderResult, Sampler, ShadeRec, Tracer, ViewPlane,
};
use umbra_math::{Color, Point2, Point3, Ray, Vector3, BLACK, HUGE_VALUE};

/// Distance of the orthographic view plane along +z.
pub const ZW: f64 = 100.0;

/// Everything that is rendered, and how.
///
/// The world exclusively owns its primitives, lights, camera and tracer.
/// Build it completely before rendering; rendering only borrows it.
pub struct World {
    pub vp: ViewPlane,
    /// Color returned for rays that hit nothing
    pub background: Color,
    tracer: Option<Box<dyn Tracer>>,
    camera: Option<Box<dyn Camera>>,
    ambient: Box<dyn Light>,
    objects: Vec<Box<dyn GeometricObject>>,
    lights: Vec<Box<dyn Light>>,
}

impl World {
    /// An empty world with a black background, default ambient light, and
    /// no tracer, camera or sampler.
    pub fn new() -> Self {
        Self {
            vp: ViewPlane::new(),
            background: BLACK,
            tracer: None,
            camera: None,
            ambient: Box::new(Ambient::default()),
            objects: Vec::new(),
            lights: Vec::new(),
        }
    }

    /// Add a primitive. Order matters only for exact ties in `t`.
    pub fn add_object(&mut self, object: Box<dyn GeometricObject>) {
        self.objects.push(object);
    }

    pub fn add_light(&mut self, light: Box<dyn Light>) {
        self.lights.push(light);
    }

    pub fn set_tracer(&mut self, tracer: Box<dyn Tracer>) {
        self.tracer = Some(tracer);
    }

    pub fn set_camera(&mut self, camera: Box<dyn Camera>) {
        self.camera = Some(camera);
    }

    pub fn set_ambient(&mut self, ambient: Box<dyn Light>) {
        self.ambient = ambient;
    }

    pub fn objects(&self) -> &[Box<dyn GeometricObject>] {
        &self.objects
    }

    pub fn lights(&self) -> &[Box<dyn Light>] {
        &self.lights
    }

    pub fn ambient(&self) -> &dyn Light {
        self.ambient.as_ref()
    }

    pub fn tracer(&self) -> Option<&dyn Tracer> {
        self.tracer.as_deref()
    }

    /// Nearest hit with the primitive's flat color.
    ///
    /// Strict `<` keeps the first primitive at an exactly tied `t`.
    pub fn hit_bare_bones_objects(&self, ray: &Ray) -> ShadeRec<'_> {
        let mut sr = ShadeRec::default();
        let mut t_min = HUGE_VALUE;

        for object in &self.objects {
            if let Some(hit) = object.hit(ray) {
                if hit.t < t_min {
                    sr.hit = true;
                    t_min = hit.t;
                    sr.t = hit.t;
                    sr.color = object.color();
                }
            }
        }

        sr
    }

    /// Nearest hit with full shading information.
    ///
    /// The best candidate is latched in locals and committed to the record
    /// only after the whole list has been scanned.
    pub fn hit_objects(&self, ray: &Ray) -> ShadeRec<'_> {
        let mut t_min = HUGE_VALUE;
        let mut nearest: Option<(Hit, &dyn GeometricObject)> = None;

        for object in &self.objects {
            if let Some(hit) = object.hit(ray) {
                if hit.t < t_min {
                    t_min = hit.t;
                    nearest = Some((hit, object.as_ref()));
                }
            }
        }

        let mut sr = ShadeRec::default();
        if let Some((hit, object)) = nearest {
            sr.hit = true;
            sr.t = hit.t;
            sr.hit_point = ray.at(hit.t);
            sr.normal = hit.normal;
            sr.local_hit_point = hit.local_hit_point;
            sr.color = object.color();
            sr.material = object.material();
        }

        sr
    }

    /// Render the scene into the display sink.
    ///
    /// With a camera the render is delegated to it. Otherwise the built-in
    /// orthographic loop runs on the calling thread, displaying each pixel
    /// as soon as it is traced.
    pub fn render_scene(&self, sink: &mut dyn DisplaySink) -> RenderResult<()> {
        if let Some(camera) = &self.camera {
            return camera.render_scene(self, sink);
        }

        let start = Instant::now();
        self.trace_pixels(|row, column, color| self.display_pixel(row, column, color, sink))?;
        log::info!("Rendered {}x{} in {:?}", self.vp.hres, self.vp.vres, start.elapsed());

        Ok(())
    }

    /// Render the scene into the display sink using a rayon worker pool.
    ///
    /// Produces exactly the same pixels as [`World::render_scene`]. Buckets
    /// are traced in parallel; the sink is written on the calling thread.
    pub fn render_scene_parallel(
        &self,
        sink: &mut dyn DisplaySink,
        bucket_size: u32,
    ) -> RenderResult<()> {
        if let Some(camera) = &self.camera {
            return camera.render_scene(self, sink);
        }

        let image = self.render_image_parallel(bucket_size)?;
        self.display_image(&image, sink);
        Ok(())
    }

    /// Trace every pixel sequentially, returning averaged linear colors.
    pub fn render_image(&self) -> RenderResult<ImageBuffer> {
        let start = Instant::now();
        let mut image = ImageBuffer::new(self.vp.hres, self.vp.vres);
        self.trace_pixels(|row, column, color| image.set(column, row, color))?;
        log::info!("Traced {}x{} in {:?}", self.vp.hres, self.vp.vres, start.elapsed());
        Ok(image)
    }

    /// Trace every pixel in parallel buckets, returning averaged linear colors.
    pub fn render_image_parallel(&self, bucket_size: u32) -> RenderResult<ImageBuffer> {
        let (tracer, sampler) = self.orthographic()?;
        let start = Instant::now();

        let buckets = generate_buckets(self.vp.hres, self.vp.vres, bucket_size);
        log::info!(
            "Rendering {}x{} @ {} spp in {} buckets",
            self.vp.hres,
            self.vp.vres,
            sampler.bundle_size(),
            buckets.len()
        );

        let results: Vec<_> = buckets
            .par_iter()
            .map(|bucket| render_bucket(bucket, self, tracer, sampler))
            .collect();

        let mut image = ImageBuffer::new(self.vp.hres, self.vp.vres);
        for result in results {
            let bucket = result.bucket;
            for (i, color) in result.pixels.into_iter().enumerate() {
                let i = i as u32;
                image.set(bucket.x + i % bucket.width, bucket.y + i / bucket.width, color);
            }
        }

        log::info!("Rendered {}x{} in {:?}", self.vp.hres, self.vp.vres, start.elapsed());
        Ok(image)
    }

    /// Tone-map a raw pixel color and write it to the sink, flipping the row
    /// into screen coordinates.
    pub fn display_pixel(&self, row: u32, column: u32, raw: Color, sink: &mut dyn DisplaySink) {
        self.display_flipped(row, column, raw, self.vp.vres, sink);
    }

    /// Display a whole traced image, one sink call per pixel in scan order.
    ///
    /// Rows are flipped against the image's own height, so an image of any
    /// size lands in its own screen rows.
    pub fn display_image(&self, image: &ImageBuffer, sink: &mut dyn DisplaySink) {
        for row in 0..image.height {
            for column in 0..image.width {
                self.display_flipped(row, column, image.get(column, row), image.height, sink);
            }
        }
    }

    fn display_flipped(
        &self,
        row: u32,
        column: u32,
        raw: Color,
        height: u32,
        sink: &mut dyn DisplaySink,
    ) {
        let [r, g, b] = to_display(self.vp.map_color(raw));
        sink.render(column, height - row - 1, r, g, b);
    }

    /// Average the traced colors of one pixel's samples.
    pub(crate) fn render_pixel(
        &self,
        tracer: &dyn Tracer,
        samples: &[Point2],
        row: u32,
        column: u32,
    ) -> Color {
        let s = self.vp.pixel_size;
        let hres = self.vp.hres as f64;
        let vres = self.vp.vres as f64;
        // Starts at zero, not the background: misses already trace to it
        let mut pixel_color = BLACK;

        for sp in samples {
            let origin = Point3::new(
                s * (column as f64 - 0.5 * hres + sp.x),
                s * (row as f64 - 0.5 * vres + sp.y),
                ZW,
            );
            let ray = Ray::new(origin, Vector3::NEG_Z);
            pixel_color += tracer.trace_ray(self, &ray);
        }

        pixel_color / samples.len() as f32
    }

    /// Required collaborators of the orthographic loop.
    fn orthographic(&self) -> RenderResult<(&dyn Tracer, &dyn Sampler)> {
        let tracer = self.tracer().ok_or(RenderError::MissingTracer)?;
        let sampler = self.vp.sampler().ok_or(RenderError::MissingSampler)?;
        self.vp.validate()?;
        Ok((tracer, sampler))
    }

    /// Row-major orthographic loop, handing each averaged pixel to `emit`.
    fn trace_pixels<F>(&self, mut emit: F) -> RenderResult<()>
    where
        F: FnMut(u32, u32, Color),
    {
        let (tracer, sampler) = self.orthographic()?;
        let (hres, vres) = (self.vp.hres, self.vp.vres);
        log::info!(
            "Rendering {}x{} @ {} spp",
            hres,
            vres,
            sampler.bundle_size()
        );

        let pixels = (0..vres).flat_map(|row| (0..hres).map(move |column| (row, column)));
        for ((row, column), samples) in pixels.zip(sampler.bundles()) {
            emit(row, column, self.render_pixel(tracer, samples, row, column));
        }

        Ok(())
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
