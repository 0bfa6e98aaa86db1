pub mod canvas;
pub mod rasterizer;

pub use canvas::*;
pub use rasterizer::*;
