//! Camera hook.

use crate::{DisplaySink, RenderResult, World};

/// A projection that renders the world its own way.
///
/// When a world has a camera, `World::render_scene` hands the whole render
/// over to it; the built-in orthographic loop runs only without one.
pub trait Camera: Send + Sync {
    fn render_scene(&self, world: &World, sink: &mut dyn DisplaySink) -> RenderResult<()>;
}
