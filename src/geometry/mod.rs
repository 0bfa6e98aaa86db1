mod mesh;
pub mod primitives;
mod ring;
mod sampler;

pub use mesh::Mesh;
pub use ring::{extrude_annulus, RingSpec};
pub use sampler::{open_loop, sample_circle, signed_area, Contour};
