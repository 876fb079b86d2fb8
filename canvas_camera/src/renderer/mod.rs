/// Renderer module - capabilities the camera consumes from a rendering backend

pub mod element_query;
pub mod path_sampler;
pub mod transform_sink;
pub mod view_transform;

#[cfg(test)]
pub(crate) mod mock_renderer;

pub use element_query::ElementQuery;
pub use path_sampler::{PathSampler, PolylinePath};
pub use transform_sink::{NullSink, TransformSink};
pub use view_transform::{ClipRect, ViewTransform};
