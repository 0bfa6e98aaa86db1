pub mod animation;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod geometry;
pub mod headless;
pub mod math;
pub mod render;
pub mod scene;

pub use animation::{AnimationContext, ControlFlags, Direction, Spin, VerticalMotion};
pub use config::CarouselConfig;
pub use geometry::{sample_circle, Mesh, RingSpec};
pub use scene::{Carousel, Catalog, DecorativeSolid, RingLevel, RingNode, SceneSnapshot, SolidKind};
