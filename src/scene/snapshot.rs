use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::animation::Direction;

use super::carousel::{Carousel, RingLevel};
use super::catalog::SolidKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingSnapshot {
    pub level: RingLevel,
    pub elevation: f64,
    pub direction: Direction,
    pub world_height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidSnapshot {
    pub kind: SolidKind,
    pub ring: RingLevel,
    pub slot: usize,
    pub position: [f32; 3],
    pub spin_angle: f32,
    pub angular_velocity: f32,
}

/// Serializable state of the scene after some number of ticks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    /// RFC 3339, UTC
    pub taken_at: String,
    pub ticks: u64,
    pub rings: Vec<RingSnapshot>,
    pub decorations: Vec<SolidSnapshot>,
}

impl SceneSnapshot {
    pub fn capture(carousel: &Carousel, ticks: u64) -> Self {
        let rings = carousel
            .rings
            .iter()
            .map(|ring| RingSnapshot {
                level: ring.level,
                elevation: ring.motion.elevation(),
                direction: ring.motion.direction(),
                world_height: carousel.origin.y + ring.height(),
            })
            .collect();

        let decorations = carousel
            .decorations
            .iter()
            .map(|solid| SolidSnapshot {
                kind: solid.kind,
                ring: solid.ring,
                slot: solid.slot,
                position: carousel.world_position(solid).to_array(),
                spin_angle: solid.spin.angle(),
                angular_velocity: solid.spin.angular_velocity(),
            })
            .collect();

        Self {
            taken_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            ticks,
            rings,
            decorations,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
