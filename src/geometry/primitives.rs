//! Closed meshes for the decorative solids, all centred on their local origin.

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use super::mesh::Mesh;

const GOLDEN_RATIO: f32 = 1.618_034;

#[rustfmt::skip]
const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
    [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
    [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
    [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
];

#[rustfmt::skip]
fn icosahedron_vertices() -> [Vec3; 12] {
    let t = GOLDEN_RATIO;
    [
        Vec3::new(-1.0, t, 0.0), Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0), Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t), Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t), Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0), Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0), Vec3::new(-t, 0.0, 1.0),
    ]
}

pub fn icosahedron(radius: f32) -> Mesh {
    let vertices = icosahedron_vertices().map(|v| v.normalize() * radius);
    Mesh::from_facets(
        ICOSAHEDRON_FACES.map(|[a, b, c]| [vertices[a], vertices[b], vertices[c]]),
    )
}

/// Dual of the icosahedron: one pentagon per icosahedron vertex, built from
/// the centroids of the five faces around it.
pub fn dodecahedron(radius: f32) -> Mesh {
    let ico = icosahedron_vertices();
    let centroids: Vec<Vec3> = ICOSAHEDRON_FACES
        .iter()
        .map(|[a, b, c]| ((ico[*a] + ico[*b] + ico[*c]) / 3.0).normalize() * radius)
        .collect();

    let facets = ico.iter().enumerate().flat_map(|(vertex, axis)| {
        let axis = axis.normalize();
        let u = axis.any_orthonormal_vector();
        let w = axis.cross(u);

        let mut ring: Vec<Vec3> = ICOSAHEDRON_FACES
            .iter()
            .zip(&centroids)
            .filter(|(face, _)| face.contains(&vertex))
            .map(|(_, centroid)| *centroid)
            .collect();
        // Counter-clockwise around the outward axis
        ring.sort_by(|p, q| {
            let angle = |d: &Vec3| d.dot(w).atan2(d.dot(u));
            angle(p).total_cmp(&angle(q))
        });

        (1..ring.len() - 1)
            .map(|k| [ring[0], ring[k], ring[k + 1]])
            .collect::<Vec<_>>()
    });

    Mesh::from_facets(facets)
}

pub fn cuboid(size: Vec3) -> Mesh {
    let h = size * 0.5;
    // (outward axis, two in-plane axes ordered so that u x v = axis)
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];

    let mut positions = Vec::with_capacity(24);
    let mut triangles = Vec::with_capacity(12);
    for (axis, u, v) in faces {
        let centre = axis * h;
        let (u, v) = (u * h, v * h);
        let base = positions.len() as u32;
        positions.extend([centre - u - v, centre + u - v, centre + u + v, centre - u + v]);
        triangles.extend([[base, base + 1, base + 2], [base, base + 2, base + 3]]);
    }
    Mesh::new(positions, triangles)
}

/// Surface of revolution about +Y.
///
/// `profile` holds (radius, height) pairs running from the bottom axis point
/// outwards, up the side and back to the top axis point. Each profile segment
/// gets its own vertex rings so creases stay sharp.
pub fn revolve(profile: &[Vec2], segments: usize) -> Mesh {
    let around = |p: Vec2, k: usize| {
        let theta = TAU * (k % segments) as f32 / segments as f32;
        Vec3::new(p.x * theta.sin(), p.y, p.x * theta.cos())
    };

    let mut mesh = Mesh::empty();
    for pair in profile.windows(2) {
        let (p0, p1) = (pair[0], pair[1]);
        let mut positions = Vec::with_capacity(segments * 2);
        positions.extend((0..segments).map(|k| around(p0, k)));
        positions.extend((0..segments).map(|k| around(p1, k)));

        let s = segments as u32;
        let triangles = (0..s)
            .flat_map(|k| {
                let (a, b) = (k, (k + 1) % s);
                let (c, d) = (b + s, a + s);
                let mut tris = Vec::with_capacity(2);
                if p0.x > f32::EPSILON {
                    tris.push([a, b, c]);
                }
                if p1.x > f32::EPSILON {
                    tris.push([a, c, d]);
                }
                tris
            })
            .collect();
        mesh.append(&Mesh::new(positions, triangles));
    }
    mesh
}

pub fn cylinder(radius: f32, height: f32, segments: usize) -> Mesh {
    let h = height * 0.5;
    revolve(
        &[
            Vec2::new(0.0, -h),
            Vec2::new(radius, -h),
            Vec2::new(radius, h),
            Vec2::new(0.0, h),
        ],
        segments,
    )
}

pub fn cone(radius: f32, height: f32, segments: usize) -> Mesh {
    let h = height * 0.5;
    revolve(
        &[Vec2::new(0.0, -h), Vec2::new(radius, -h), Vec2::new(0.0, h)],
        segments,
    )
}

/// Capped hyperboloid of one sheet: r(y) = waist * sqrt(1 + (y / c)^2)
pub fn hyperboloid(waist: f32, c: f32, height: f32, stacks: usize, segments: usize) -> Mesh {
    let h = height * 0.5;
    let radius = |y: f32| waist * (1.0 + (y / c).powi(2)).sqrt();

    let mut profile = vec![Vec2::new(0.0, -h)];
    profile.extend((0..=stacks).map(|i| {
        let y = -h + height * i as f32 / stacks as f32;
        Vec2::new(radius(y), y)
    }));
    profile.push(Vec2::new(0.0, h));
    revolve(&profile, segments)
}

/// Evaluate `surface` on a fully periodic (u, v) grid.
///
/// Winding follows `du x dv`, so the caller picks the parameter order that
/// makes that cross product point outwards.
fn periodic_grid(u_segments: usize, v_segments: usize, surface: impl Fn(f32, f32) -> Vec3) -> Mesh {
    let positions = (0..u_segments)
        .flat_map(|i| {
            let u = i as f32 / u_segments as f32;
            (0..v_segments).map(move |j| (u, j as f32 / v_segments as f32))
        })
        .map(|(u, v)| surface(u, v))
        .collect();

    let index = |i: usize, j: usize| ((i % u_segments) * v_segments + j % v_segments) as u32;
    let triangles = (0..u_segments)
        .flat_map(|i| (0..v_segments).map(move |j| (i, j)))
        .flat_map(|(i, j)| {
            let (a, b) = (index(i, j), index(i + 1, j));
            let (c, d) = (index(i + 1, j + 1), index(i, j + 1));
            [[a, b, c], [a, c, d]]
        })
        .collect();

    Mesh::new(positions, triangles)
}

/// Torus standing upright in the XY plane
pub fn torus(radius: f32, tube: f32, radial_segments: usize, tubular_segments: usize) -> Mesh {
    periodic_grid(tubular_segments, radial_segments, |u, v| {
        let (u, v) = (u * TAU, v * TAU);
        let r = radius + tube * v.cos();
        Vec3::new(r * u.cos(), r * u.sin(), tube * v.sin())
    })
}

/// (p, q) torus knot wrapped in a circular tube
pub fn torus_knot(
    radius: f32,
    tube: f32,
    p: u32,
    q: u32,
    tubular_segments: usize,
    radial_segments: usize,
) -> Mesh {
    let (p, q) = (p as f32, q as f32);
    let curve = move |u: f32| {
        let quotient = q / p * u;
        let cs = quotient.cos();
        Vec3::new(
            radius * (2.0 + cs) * 0.5 * u.cos(),
            radius * (2.0 + cs) * 0.5 * u.sin(),
            radius * quotient.sin() * 0.5,
        )
    };

    // The tube angle goes first so that d(tube) x d(curve) faces outwards
    periodic_grid(radial_segments, tubular_segments, move |v, u| {
        let u = u * p * TAU;
        let here = curve(u);
        let ahead = curve(u + 0.01);
        let tangent = ahead - here;
        let binormal = tangent.cross(ahead + here).normalize();
        let normal = binormal.cross(tangent).normalize();

        let angle = v * TAU;
        here + (normal * angle.cos() + binormal * angle.sin()) * tube
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_closed_outward(mesh: &Mesh) {
        assert!(mesh.triangle_count() > 0);
        assert!(mesh.signed_volume() > 0.0, "volume {}", mesh.signed_volume());
        let centre = mesh.bounds().center();
        assert!(centre.length() < 0.1, "not centred: {centre:?}");
    }

    #[test]
    fn icosahedron_is_inscribed() {
        let mesh = icosahedron(2.0);
        assert_eq!(mesh.triangle_count(), 20);
        assert!(mesh.positions.iter().all(|p| (p.length() - 2.0).abs() < 1e-5));
        assert_closed_outward(&mesh);
    }

    #[test]
    fn dodecahedron_has_twelve_pentagons() {
        let mesh = dodecahedron(1.0);
        assert_eq!(mesh.triangle_count(), 12 * 3);
        assert_closed_outward(&mesh);
    }

    #[test]
    fn cuboid_volume() {
        let mesh = cuboid(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(mesh.triangle_count(), 12);
        assert!((mesh.signed_volume() - 6.0).abs() < 1e-5);
        assert_eq!(mesh.bounds().half_extents(), Vec3::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn cylinder_and_cone_volumes_approach_analytic() {
        let cyl = cylinder(1.0, 2.0, 64);
        let expected = std::f32::consts::PI * 2.0;
        assert!((cyl.signed_volume() - expected).abs() / expected < 0.01);

        let cone = cone(1.0, 3.0, 64);
        let expected = std::f32::consts::PI;
        assert!((cone.signed_volume() - expected).abs() / expected < 0.01);
    }

    #[test]
    fn cone_has_no_degenerate_triangles() {
        let mesh = cone(1.0, 1.0, 16);
        assert_eq!(mesh.triangle_count(), 32);
        for tri in &mesh.triangles {
            assert!(mesh.face_normal(*tri).length() > 0.5);
        }
    }

    #[test]
    fn hyperboloid_pinches_at_the_waist() {
        let mesh = hyperboloid(0.25, 0.35, 1.0, 12, 24);
        assert_closed_outward(&mesh);
        let waist = mesh
            .positions
            .iter()
            .filter(|p| p.y.abs() < 1e-4)
            .map(|p| Vec2::new(p.x, p.z).length())
            .fold(f32::MAX, f32::min);
        assert!((waist - 0.25).abs() < 1e-4);
        assert!(mesh.bounds().half_extents().x > 0.4);
    }

    #[test]
    fn torus_volume() {
        let mesh = torus(1.0, 0.25, 24, 48);
        assert_closed_outward(&mesh);
        let expected = 2.0 * std::f32::consts::PI.powi(2) * 1.0 * 0.25 * 0.25;
        assert!((mesh.signed_volume() - expected).abs() / expected < 0.03);
    }

    #[test]
    fn torus_knot_faces_outward() {
        let mesh = torus_knot(0.4, 0.12, 2, 3, 96, 8);
        assert_eq!(mesh.triangle_count(), 2 * 96 * 8);
        assert!(mesh.signed_volume() > 0.0);
    }
}
