use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

use super::carousel::{DecorativeSolid, RingNode};
use super::catalog::{Catalog, CatalogEntry};

pub const SLOT_COUNT: usize = 8;
pub const SLOT_SPACING_DEGREES: f32 = 360.0 / SLOT_COUNT as f32;

/// Angle of slot `i`, radians, measured from +X towards +Z
pub fn slot_angle(slot: usize) -> f32 {
    (slot as f32 * SLOT_SPACING_DEGREES).to_radians()
}

/// (x, z) of slot `i` on a circle of `radius`
pub fn slot_position(radius: f32, slot: usize) -> Vec2 {
    let (sin, cos) = slot_angle(slot).sin_cos();
    Vec2::new(radius * cos, radius * sin)
}

/// Place one solid of every catalog kind on `ring`, in a fresh random order.
///
/// Slots sit on the band midpoint so each solid stays clear of both edges
/// and of its neighbours.
pub fn populate_ring<R: Rng + ?Sized>(
    catalog: &Catalog,
    ring: &RingNode,
    rng: &mut R,
) -> Vec<DecorativeSolid> {
    debug_assert_eq!(catalog.len(), SLOT_COUNT);

    let mut order: Vec<&CatalogEntry> = catalog.entries().iter().collect();
    order.shuffle(rng);

    let radius = ring.spec.band_midpoint();
    order
        .into_iter()
        .enumerate()
        .map(|(slot, entry)| entry.instantiate(slot_position(radius, slot), slot, ring, rng))
        .collect()
}
