use carousel::config::CarouselConfig;
use carousel::geometry::{extrude_annulus, sample_circle, RingSpec};
use glam::Vec3;

#[cfg(test)]
mod geometry_tests {
    use super::*;

    #[test]
    fn test_circle_sampling_closes_the_seam() {
        let points = sample_circle(2.0, 5.0);
        assert_eq!(points.len(), 73);
        assert_eq!(points.first(), points.last());
        assert!(points.iter().all(|p| (p.length() - 2.0).abs() < 1e-5));
    }

    #[test]
    fn test_uneven_step_still_ends_on_the_seam() {
        let points = sample_circle(1.0, 7.0);
        assert_eq!(points.first(), points.last());

        let gaps: Vec<f32> = points.windows(2).map(|w| w[0].distance(w[1])).collect();
        let longest = gaps.iter().copied().fold(0.0, f32::max);
        assert!(longest <= 2.0 * (3.5f32).to_radians().sin() + 1e-5);
    }

    #[test]
    fn test_all_configured_rings_are_valid() {
        for level in CarouselConfig::default().levels {
            level.spec.validate().unwrap();
        }
    }

    #[test]
    fn test_degenerate_specs_are_rejected() {
        assert!(RingSpec::new(1.0, 2.0, 1.0, 5.0).validate().is_err());
        assert!(RingSpec::new(2.0, 2.0, 1.0, 5.0).validate().is_err());
        assert!(RingSpec::new(2.0, 0.0, 1.0, 5.0).validate().is_err());
        assert!(RingSpec::new(2.0, 1.0, 0.0, 5.0).validate().is_err());
    }

    #[test]
    fn test_ring_stands_on_the_vertical_axis() {
        let spec = RingSpec::new(4.5, 1.5, 2.0, 5.0);
        let bounds = spec.build().bounds();

        assert!((bounds.min.y - 0.0).abs() < 1e-5);
        assert!((bounds.max.y - 2.0).abs() < 1e-5);
        assert!((bounds.max.x - 4.5).abs() < 1e-4);
        assert!((bounds.max.z - 4.5).abs() < 1e-4);
    }

    #[test]
    fn test_ring_leaves_the_hole_empty() {
        let mesh = RingSpec::new(4.5, 1.5, 2.0, 5.0).build();
        for p in &mesh.positions {
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!(r > 1.5 - 1e-4 && r < 4.5 + 1e-4, "vertex at radius {r}");
        }
    }

    #[test]
    fn test_ring_is_closed_and_faces_outward() {
        let spec = RingSpec::new(7.5, 4.5, 2.0, 5.0);
        let mesh = spec.build();

        // Polygonal annulus area times depth
        let polygon_area = |r: f32| 0.5 * 72.0 * r * r * (5.0f32).to_radians().sin();
        let expected = (polygon_area(7.5) - polygon_area(4.5)) * 2.0;
        assert!((mesh.signed_volume() - expected).abs() / expected < 1e-3);
    }

    #[test]
    fn test_downward_extrusion_hangs_below_the_origin() {
        let outer = sample_circle(3.0, 10.0);
        let hole = sample_circle(1.0, 10.0);
        let mesh = extrude_annulus(&outer, &hole, -1.0);
        let bounds = mesh.bounds();

        assert!((bounds.max.y - 0.0).abs() < 1e-5);
        assert!((bounds.min.y + 1.0).abs() < 1e-5);
        assert!(mesh.signed_volume() > 0.0);
    }

    #[test]
    fn test_top_face_normals_point_up() {
        let mesh = RingSpec::new(4.5, 1.5, 2.0, 5.0).build();
        let up_facing = mesh
            .triangles
            .iter()
            .filter(|&&tri| mesh.face_normal(tri).dot(Vec3::Y) > 0.99)
            .count();
        let down_facing = mesh
            .triangles
            .iter()
            .filter(|&&tri| mesh.face_normal(tri).dot(Vec3::Y) < -0.99)
            .count();

        assert!(up_facing > 0);
        assert_eq!(up_facing, down_facing);
    }
}
