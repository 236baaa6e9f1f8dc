//! WebGPU rendering module
//!
//! Every frame is rebuilt from scratch: `scene` turns the current state into
//! pixel-space triangles and `pipeline` uploads and draws them.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
