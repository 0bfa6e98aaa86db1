use std::sync::Arc;

use glam::{Mat4, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::animation::{Spin, VerticalMotion};
use crate::config::{CarouselConfig, LevelConfig};
use crate::geometry::{primitives, Mesh, RingSpec};

use super::catalog::{Catalog, SolidKind};
use super::placer::populate_ring;

const COLUMN_COLOR: [f32; 3] = [0.85, 0.1, 0.1];
const COLUMN_SEGMENTS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
}

/// The three carousel levels, innermost first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RingLevel {
    Inner,
    Middle,
    Outer,
}

impl RingLevel {
    pub const ALL: [RingLevel; 3] = [RingLevel::Inner, RingLevel::Middle, RingLevel::Outer];

    pub const fn index(self) -> usize {
        match self {
            RingLevel::Inner => 0,
            RingLevel::Middle => 1,
            RingLevel::Outer => 2,
        }
    }

    fn material(self) -> Material {
        let color = match self {
            RingLevel::Inner => [0.93, 0.76, 0.25],
            RingLevel::Middle => [0.35, 0.72, 0.48],
            RingLevel::Outer => [0.55, 0.42, 0.82],
        };
        Material { color }
    }
}

/// One ring of the carousel and the solids it carries
#[derive(Debug, Clone)]
pub struct RingNode {
    pub level: RingLevel,
    pub spec: RingSpec,
    pub mesh: Arc<Mesh>,
    pub material: Material,
    /// Height of the ring's bottom face when elevation is zero
    pub rest_height: f32,
    pub motion: VerticalMotion,
    /// Indices into [`Carousel::decorations`]
    pub decorations: Vec<usize>,
}

impl RingNode {
    pub fn new(level: RingLevel, config: &LevelConfig) -> Self {
        Self {
            level,
            spec: config.spec,
            mesh: Arc::new(config.spec.build()),
            material: level.material(),
            rest_height: config.rest_height,
            motion: VerticalMotion::at_rest(),
            decorations: Vec::new(),
        }
    }

    /// Height of the bottom face above the carousel origin
    pub fn height(&self) -> f32 {
        self.rest_height + self.motion.elevation() as f32
    }
}

/// A catalog solid placed in one ring slot
#[derive(Debug, Clone)]
pub struct DecorativeSolid {
    pub kind: SolidKind,
    pub mesh: Arc<Mesh>,
    pub material: Material,
    pub ring: RingLevel,
    pub slot: usize,
    /// Position in the parent ring's frame
    pub local_position: Vec3,
    pub spin: Spin,
}

/// Static column through the middle of the inner ring
#[derive(Debug, Clone)]
pub struct Column {
    pub mesh: Arc<Mesh>,
    pub material: Material,
    pub height: f32,
}

impl Column {
    pub fn new(radius: f32, height: f32) -> Self {
        Self {
            mesh: Arc::new(primitives::cylinder(radius, height, COLUMN_SEGMENTS)),
            material: Material {
                color: COLUMN_COLOR,
            },
            height,
        }
    }
}

/// A mesh with its world transform, ready for the renderer
#[derive(Debug, Clone, Copy)]
pub struct DrawItem<'a> {
    pub mesh: &'a Mesh,
    pub transform: Mat4,
    pub color: [f32; 3],
}

/// The scene graph: three rings on a shared vertical axis, the column, and
/// every decorative solid in one flat collection.
#[derive(Debug, Clone)]
pub struct Carousel {
    pub origin: Vec3,
    pub column: Column,
    /// Inner, middle, outer
    pub rings: Vec<RingNode>,
    pub decorations: Vec<DecorativeSolid>,
}

impl Carousel {
    pub fn build<R: Rng + ?Sized>(
        config: &CarouselConfig,
        catalog: &Catalog,
        rng: &mut R,
    ) -> anyhow::Result<Self> {
        config.validate()?;

        let mut carousel = Self {
            origin: Vec3::from_array(config.origin),
            column: Column::new(config.column_radius, config.column_height),
            rings: Vec::with_capacity(RingLevel::ALL.len()),
            decorations: Vec::new(),
        };

        for (level, level_config) in RingLevel::ALL.into_iter().zip(&config.levels) {
            let mut ring = RingNode::new(level, level_config);
            let solids = populate_ring(catalog, &ring, rng);
            log::debug!(
                "{:?} ring: {} triangles, {} solids",
                level,
                ring.mesh.triangle_count(),
                solids.len()
            );

            for solid in solids {
                ring.decorations.push(carousel.decorations.len());
                carousel.decorations.push(solid);
            }
            carousel.rings.push(ring);
        }

        log::info!(
            "Built carousel: {} rings, {} decorative solids",
            carousel.rings.len(),
            carousel.decorations.len()
        );
        Ok(carousel)
    }

    pub fn ring(&self, level: RingLevel) -> &RingNode {
        &self.rings[level.index()]
    }

    pub fn solids_on(&self, level: RingLevel) -> impl Iterator<Item = &DecorativeSolid> {
        self.ring(level)
            .decorations
            .iter()
            .map(|&index| &self.decorations[index])
    }

    pub fn ring_transform(&self, level: RingLevel) -> Mat4 {
        let ring = self.ring(level);
        Mat4::from_translation(self.origin + Vec3::Y * ring.height())
    }

    pub fn decoration_transform(&self, solid: &DecorativeSolid) -> Mat4 {
        self.ring_transform(solid.ring)
            * Mat4::from_translation(solid.local_position)
            * Mat4::from_rotation_y(solid.spin.angle())
    }

    pub fn world_position(&self, solid: &DecorativeSolid) -> Vec3 {
        self.decoration_transform(solid).transform_point3(Vec3::ZERO)
    }

    pub fn column_transform(&self) -> Mat4 {
        Mat4::from_translation(self.origin + Vec3::Y * (self.column.height * 0.5))
    }

    /// Everything to draw this frame, column first
    pub fn draw_list(&self) -> Vec<DrawItem<'_>> {
        let mut items = Vec::with_capacity(1 + self.rings.len() + self.decorations.len());
        items.push(DrawItem {
            mesh: &self.column.mesh,
            transform: self.column_transform(),
            color: self.column.material.color,
        });
        items.extend(self.rings.iter().map(|ring| DrawItem {
            mesh: &ring.mesh,
            transform: self.ring_transform(ring.level),
            color: ring.material.color,
        }));
        items.extend(self.decorations.iter().map(|solid| DrawItem {
            mesh: &solid.mesh,
            transform: self.decoration_transform(solid),
            color: solid.material.color,
        }));
        items
    }
}
