use glam::{Mat3, Mat4, Vec3};

use crate::math::AABB;

/// Indexed triangle mesh with per-vertex normals
///
/// Triangles are wound counter-clockwise when seen from outside, so the
/// face normal `(b - a) x (c - a)` points away from the solid.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub triangles: Vec<[u32; 3]>,
}

impl Mesh {
    pub fn empty() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Build a mesh and derive its normals from the triangle winding
    pub fn new(positions: Vec<Vec3>, triangles: Vec<[u32; 3]>) -> Self {
        let mut mesh = Self {
            normals: vec![Vec3::ZERO; positions.len()],
            positions,
            triangles,
        };
        mesh.compute_normals();
        mesh
    }

    /// Faceted mesh: every triangle gets its own three vertices
    pub fn from_facets(facets: impl IntoIterator<Item = [Vec3; 3]>) -> Self {
        let mut positions = Vec::new();
        let mut triangles = Vec::new();
        for [a, b, c] in facets {
            let base = positions.len() as u32;
            positions.extend([a, b, c]);
            triangles.push([base, base + 1, base + 2]);
        }
        Self::new(positions, triangles)
    }

    /// Area-weighted vertex normals
    pub fn compute_normals(&mut self) {
        let mut normals = vec![Vec3::ZERO; self.positions.len()];
        for tri in &self.triangles {
            // Unnormalised cross product carries twice the triangle area
            let n = self.face_normal_raw(*tri);
            for &i in tri {
                normals[i as usize] += n;
            }
        }
        self.normals = normals
            .into_iter()
            .map(|n| n.try_normalize().unwrap_or(Vec3::Y))
            .collect();
    }

    fn face_normal_raw(&self, [a, b, c]: [u32; 3]) -> Vec3 {
        let a = self.positions[a as usize];
        let b = self.positions[b as usize];
        let c = self.positions[c as usize];
        (b - a).cross(c - a)
    }

    pub fn face_normal(&self, tri: [u32; 3]) -> Vec3 {
        self.face_normal_raw(tri).normalize_or_zero()
    }

    /// Append another mesh, re-basing its indices
    pub fn append(&mut self, other: &Mesh) {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|[a, b, c]| [a + base, b + base, c + base]),
        );
    }

    /// Copy of the mesh with every vertex moved by `transform`
    pub fn transformed(&self, transform: Mat4) -> Mesh {
        let normal_matrix = Mat3::from_mat4(transform).inverse().transpose();
        Mesh {
            positions: self
                .positions
                .iter()
                .map(|p| transform.transform_point3(*p))
                .collect(),
            normals: self
                .normals
                .iter()
                .map(|n| (normal_matrix * *n).normalize_or_zero())
                .collect(),
            triangles: self.triangles.clone(),
        }
    }

    pub fn bounds(&self) -> AABB {
        AABB::from_points(&self.positions).unwrap_or(AABB::new(Vec3::ZERO, Vec3::ZERO))
    }

    /// Enclosed volume; positive when the surface is closed and faces outward
    pub fn signed_volume(&self) -> f32 {
        self.triangles
            .iter()
            .map(|&[a, b, c]| {
                let a = self.positions[a as usize];
                let b = self.positions[b as usize];
                let c = self.positions[c as usize];
                a.dot(b.cross(c))
            })
            .sum::<f32>()
            / 6.0
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::empty()
    }
}
