use std::f32::consts::FRAC_PI_2;

use anyhow::ensure;
use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::mesh::Mesh;
use super::sampler::{open_loop, sample_circle, signed_area};

/// Dimensions of one washer-shaped carousel level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingSpec {
    pub outer_radius: f32,
    pub hole_radius: f32,
    /// Signed extrusion along +Y; negative values extrude downwards
    pub depth: f32,
    pub step_degrees: f32,
}

impl RingSpec {
    pub const fn new(outer_radius: f32, hole_radius: f32, depth: f32, step_degrees: f32) -> Self {
        Self {
            outer_radius,
            hole_radius,
            depth,
            step_degrees,
        }
    }

    /// Check the geometric contract the builder relies on
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.hole_radius > 0.0,
            "hole radius must be positive, got {}",
            self.hole_radius
        );
        ensure!(
            self.outer_radius > self.hole_radius,
            "outer radius {} must exceed hole radius {}",
            self.outer_radius,
            self.hole_radius
        );
        ensure!(self.depth != 0.0, "extrusion depth must be non-zero");
        ensure!(
            self.step_degrees > 0.0 && self.step_degrees <= 120.0,
            "angular step {} must lie in (0, 120] degrees",
            self.step_degrees
        );
        Ok(())
    }

    /// Radius halfway across the solid part of the ring
    pub fn band_midpoint(&self) -> f32 {
        (self.outer_radius + self.hole_radius) * 0.5
    }

    /// Height of the top face in the ring's local frame
    pub fn top(&self) -> f32 {
        self.depth.max(0.0)
    }

    pub fn build(&self) -> Mesh {
        debug_assert!(self.validate().is_ok(), "invalid ring spec {self:?}");
        extrude_annulus(
            &sample_circle(self.outer_radius, self.step_degrees),
            &sample_circle(self.hole_radius, self.step_degrees),
            self.depth,
        )
    }
}

/// Extrude the region between `outer` and `hole` by `depth` in one straight
/// segment, then stand it up so the extrusion runs along +Y.
///
/// Both contours live in the XY plane and may be closed or open, in either
/// orientation. The hole must lie inside the outer contour and both must be
/// star-shaped around the origin.
pub fn extrude_annulus(outer: &[Vec2], hole: &[Vec2], depth: f32) -> Mesh {
    let outer = counter_clockwise(open_loop(outer));
    let hole = counter_clockwise(open_loop(hole));

    let (z0, z1) = if depth >= 0.0 { (0.0, depth) } else { (depth, 0.0) };

    let mut mesh = Mesh::empty();
    mesh.append(&cap(&outer, &hole, z1, true));
    mesh.append(&cap(&outer, &hole, z0, false));
    mesh.append(&wall(&outer, z0, z1, true));
    mesh.append(&wall(&hole, z0, z1, false));
    mesh.compute_normals();

    // (x, y, z) -> (x, z, -y): the extrusion axis becomes the scene's up axis
    mesh.transformed(Mat4::from_rotation_x(-FRAC_PI_2))
}

fn counter_clockwise(points: &[Vec2]) -> Vec<Vec2> {
    if signed_area(points) < 0.0 {
        points.iter().rev().copied().collect()
    } else {
        points.to_vec()
    }
}

/// Flat annular face bridging the two loops by matching their angular
/// progress, so contours with different sample counts still tile cleanly.
fn cap(outer: &[Vec2], hole: &[Vec2], z: f32, facing_up: bool) -> Mesh {
    let n = outer.len();
    let m = hole.len();

    let mut positions: Vec<Vec3> = outer.iter().map(|p| p.extend(z)).collect();
    positions.extend(hole.iter().map(|p| p.extend(z)));

    let o = |i: usize| (i % n) as u32;
    let h = |j: usize| (n + j % m) as u32;

    let mut triangles = Vec::with_capacity(n + m);
    let (mut i, mut j) = (0, 0);
    while i < n || j < m {
        let advance_outer = j >= m || (i < n && (i + 1) * m <= (j + 1) * n);
        let tri = if advance_outer {
            i += 1;
            [o(i - 1), o(i), h(j)]
        } else {
            j += 1;
            [o(i), h(j), h(j - 1)]
        };
        triangles.push(if facing_up { tri } else { [tri[0], tri[2], tri[1]] });
    }

    Mesh::new(positions, triangles)
}

/// Side wall of one loop; outer walls face away from the centre, hole walls
/// face into the hole.
fn wall(points: &[Vec2], z0: f32, z1: f32, facing_out: bool) -> Mesh {
    let n = points.len();
    let mut positions: Vec<Vec3> = points.iter().map(|p| p.extend(z0)).collect();
    positions.extend(points.iter().map(|p| p.extend(z1)));

    let triangles = (0..n)
        .flat_map(|i| {
            let a0 = i as u32;
            let b0 = ((i + 1) % n) as u32;
            let a1 = a0 + n as u32;
            let b1 = b0 + n as u32;
            if facing_out {
                [[a0, b0, b1], [a0, b1, a1]]
            } else {
                [[a0, b1, b0], [a0, a1, b1]]
            }
        })
        .collect();

    Mesh::new(positions, triangles)
}
