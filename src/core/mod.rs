pub mod clock;
pub mod controller;
pub mod gpu_context;
pub mod input_adapter;
pub mod surface_renderer;
pub mod timer;

pub use clock::*;
pub use controller::*;
pub use gpu_context::*;
pub use input_adapter::*;
pub use surface_renderer::*;
pub use timer::*;
