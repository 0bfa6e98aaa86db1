use std::path::Path;
use std::time::Duration;

use anyhow::{ensure, Context};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::geometry::RingSpec;

// === Scene ===

pub const CAROUSEL_ORIGIN: Vec3 = Vec3::ZERO;
pub const RING_DEPTH: f32 = 2.0;
pub const RING_STEP_DEGREES: f32 = 5.0;

pub const INNER_RING: RingSpec = RingSpec::new(4.5, 1.5, RING_DEPTH, RING_STEP_DEGREES);
pub const MIDDLE_RING: RingSpec = RingSpec::new(7.5, 4.5, RING_DEPTH, RING_STEP_DEGREES);
pub const OUTER_RING: RingSpec = RingSpec::new(10.5, 7.5, RING_DEPTH, RING_STEP_DEGREES);

/// Rest height of each ring's bottom face: inner on top, outer at the base
pub const INNER_REST_HEIGHT: f32 = 2.0 * RING_DEPTH;
pub const MIDDLE_REST_HEIGHT: f32 = RING_DEPTH;
pub const OUTER_REST_HEIGHT: f32 = 0.0;

pub const COLUMN_RADIUS: f32 = 1.0;
pub const COLUMN_HEIGHT: f32 = 10.0;

pub const SKY_COLOR: u32 = 0x6eddff;

// === Animation ===

pub const UPPER_LIMIT: f64 = 2.5;
pub const LOWER_LIMIT: f64 = 0.5;
pub const RAISE_STEP: f64 = 0.1;
pub const FALL_STEP: f64 = 0.05;
pub const REST_ELEVATION: f64 = 0.0;

/// Upper bound (exclusive) of the per-solid spin, radians per tick
pub const MAX_ANGULAR_VELOCITY: f32 = 0.1;

pub const TARGET_FPS: u32 = 60;
/// 1/60 s
pub const FRAME_BUDGET: Duration = Duration::from_nanos(1_000_000_000 / TARGET_FPS as u64);
pub const FPS_UPDATE_INTERVAL: Duration = Duration::from_secs(1);

// === Window ===

pub const INITIAL_WINDOW_WIDTH: u32 = 960;
pub const INITIAL_WINDOW_HEIGHT: u32 = 720;

/// Elevation window shared by every ring's vertical motion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationBounds {
    pub upper_limit: f64,
    pub lower_limit: f64,
}

impl Default for ElevationBounds {
    fn default() -> Self {
        Self {
            upper_limit: UPPER_LIMIT,
            lower_limit: LOWER_LIMIT,
        }
    }
}

/// Per-tick displacement magnitudes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionSteps {
    /// Applied up or down while the ring's control is engaged
    pub raise: f64,
    /// Applied downwards while idle, clamped at rest
    pub fall: f64,
}

impl Default for MotionSteps {
    fn default() -> Self {
        Self {
            raise: RAISE_STEP,
            fall: FALL_STEP,
        }
    }
}

/// One carousel level: its shape and where it rests on the vertical axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub spec: RingSpec,
    pub rest_height: f32,
}

/// Everything needed to build and animate the carousel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    pub origin: [f32; 3],
    /// Inner, middle, outer
    pub levels: [LevelConfig; 3],
    pub column_radius: f32,
    pub column_height: f32,
    pub bounds: ElevationBounds,
    pub steps: MotionSteps,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            origin: CAROUSEL_ORIGIN.to_array(),
            levels: [
                LevelConfig {
                    spec: INNER_RING,
                    rest_height: INNER_REST_HEIGHT,
                },
                LevelConfig {
                    spec: MIDDLE_RING,
                    rest_height: MIDDLE_REST_HEIGHT,
                },
                LevelConfig {
                    spec: OUTER_RING,
                    rest_height: OUTER_REST_HEIGHT,
                },
            ],
            column_radius: COLUMN_RADIUS,
            column_height: COLUMN_HEIGHT,
            bounds: ElevationBounds::default(),
            steps: MotionSteps::default(),
        }
    }
}

impl CarouselConfig {
    /// Read a JSON configuration and validate it
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        for level in &self.levels {
            level.spec.validate()?;
        }
        ensure!(
            self.column_radius > 0.0 && self.column_radius < self.levels[0].spec.hole_radius,
            "central column radius {} must fit inside the inner hole",
            self.column_radius
        );
        ensure!(
            self.bounds.lower_limit >= REST_ELEVATION
                && self.bounds.lower_limit < self.bounds.upper_limit,
            "elevation bounds {:?} must satisfy rest <= lower < upper",
            self.bounds
        );
        ensure!(
            self.steps.raise > 0.0 && self.steps.fall > 0.0,
            "motion steps must be positive"
        );
        Ok(())
    }
}
