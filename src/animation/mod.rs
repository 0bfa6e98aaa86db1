mod context;
mod motion;
mod rotation;

pub use context::{AnimationContext, ControlFlags};
pub use motion::{Direction, VerticalMotion};
pub use rotation::{advance_spins, Spin};
