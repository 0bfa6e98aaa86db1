use std::sync::Arc;

use glam::{Vec2, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::animation::Spin;
use crate::geometry::{primitives, Mesh};
use crate::math::hsv_to_rgb;

use super::carousel::{DecorativeSolid, Material, RingNode};

/// The closed set of decorative solid kinds placed on every ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolidKind {
    Dodecahedron,
    Icosahedron,
    Torus,
    TorusKnot,
    Cuboid,
    Cylinder,
    Cone,
    Hyperboloid,
}

impl SolidKind {
    pub const ALL: [SolidKind; 8] = [
        SolidKind::Dodecahedron,
        SolidKind::Icosahedron,
        SolidKind::Torus,
        SolidKind::TorusKnot,
        SolidKind::Cuboid,
        SolidKind::Cylinder,
        SolidKind::Cone,
        SolidKind::Hyperboloid,
    ];

    /// Fixed dimensions; every kind fits within 0.8 of its vertical axis
    pub const fn size(self) -> SolidSize {
        match self {
            SolidKind::Dodecahedron => SolidSize::Dodecahedron { radius: 0.6 },
            SolidKind::Icosahedron => SolidSize::Icosahedron { radius: 0.6 },
            SolidKind::Torus => SolidSize::Torus {
                radius: 0.45,
                tube: 0.18,
            },
            SolidKind::TorusKnot => SolidSize::TorusKnot {
                radius: 0.4,
                tube: 0.12,
                p: 2,
                q: 3,
            },
            SolidKind::Cuboid => SolidSize::Cuboid {
                size: Vec3::splat(0.8),
            },
            SolidKind::Cylinder => SolidSize::Cylinder {
                radius: 0.4,
                height: 1.0,
            },
            SolidKind::Cone => SolidSize::Cone {
                radius: 0.45,
                height: 1.1,
            },
            SolidKind::Hyperboloid => SolidSize::Hyperboloid {
                waist: 0.25,
                c: 0.35,
                height: 1.0,
            },
        }
    }

    pub fn mesh(self) -> Mesh {
        self.size().mesh()
    }
}

/// Dimensions handed to a kind's construction function
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolidSize {
    Dodecahedron { radius: f32 },
    Icosahedron { radius: f32 },
    Torus { radius: f32, tube: f32 },
    TorusKnot { radius: f32, tube: f32, p: u32, q: u32 },
    Cuboid { size: Vec3 },
    Cylinder { radius: f32, height: f32 },
    Cone { radius: f32, height: f32 },
    Hyperboloid { waist: f32, c: f32, height: f32 },
}

impl SolidSize {
    pub fn mesh(&self) -> Mesh {
        match *self {
            SolidSize::Dodecahedron { radius } => primitives::dodecahedron(radius),
            SolidSize::Icosahedron { radius } => primitives::icosahedron(radius),
            SolidSize::Torus { radius, tube } => primitives::torus(radius, tube, 12, 32),
            SolidSize::TorusKnot { radius, tube, p, q } => {
                primitives::torus_knot(radius, tube, p, q, 96, 8)
            }
            SolidSize::Cuboid { size } => primitives::cuboid(size),
            SolidSize::Cylinder { radius, height } => primitives::cylinder(radius, height, 24),
            SolidSize::Cone { radius, height } => primitives::cone(radius, height, 24),
            SolidSize::Hyperboloid { waist, c, height } => {
                primitives::hyperboloid(waist, c, height, 12, 24)
            }
        }
    }
}

/// One catalog kind with its shared geometry and material
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub kind: SolidKind,
    pub size: SolidSize,
    pub mesh: Arc<Mesh>,
    pub material: Material,
    /// Distance from the local origin down to the mesh's lowest point
    pub half_height: f32,
    /// Bounding radius around the vertical axis
    pub footprint: f32,
}

impl CatalogEntry {
    fn new(kind: SolidKind, index: usize) -> Self {
        let mesh = kind.mesh();
        let bounds = mesh.bounds();
        Self {
            kind,
            size: kind.size(),
            half_height: -bounds.min.y,
            footprint: bounds.horizontal_radius(),
            material: Material {
                color: hsv_to_rgb(index as f32 / SolidKind::ALL.len() as f32, 0.7, 0.95),
            },
            mesh: Arc::new(mesh),
        }
    }

    /// Construct this kind at slot position `at` (x, z) on `ring`.
    ///
    /// The solid rests on the ring's top face and gets its own spin rate.
    pub fn instantiate<R: Rng + ?Sized>(
        &self,
        at: Vec2,
        slot: usize,
        ring: &RingNode,
        rng: &mut R,
    ) -> DecorativeSolid {
        DecorativeSolid {
            kind: self.kind,
            mesh: Arc::clone(&self.mesh),
            material: self.material,
            ring: ring.level,
            slot,
            local_position: Vec3::new(at.x, ring.spec.top() + self.half_height, at.y),
            spin: Spin::sample(rng),
        }
    }
}

/// Fixed catalog, one entry per kind, geometry built once and shared
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        let entries = SolidKind::ALL
            .iter()
            .enumerate()
            .map(|(index, kind)| CatalogEntry::new(*kind, index))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_footprint(&self) -> f32 {
        self.entries.iter().map(|e| e.footprint).fold(0.0, f32::max)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
