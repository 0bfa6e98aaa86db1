mod carousel;
mod catalog;
mod placer;
mod snapshot;

pub use carousel::{Carousel, Column, DecorativeSolid, DrawItem, Material, RingLevel, RingNode};
pub use catalog::{Catalog, CatalogEntry, SolidKind, SolidSize};
pub use placer::{populate_ring, slot_angle, slot_position, SLOT_COUNT, SLOT_SPACING_DEGREES};
pub use snapshot::{RingSnapshot, SceneSnapshot, SolidSnapshot};
