use glam::Vec2;

/// Closed 2D boundary: the last point repeats the first
pub type Contour = Vec<Vec2>;

/// Sample a circle of `radius` every `step_degrees`, from 0° up to and
/// including 360°.
///
/// The seam point is duplicated so the contour closes on itself: a 5° step
/// yields 73 points. A step that does not divide 360 evenly still ends on
/// the exact seam point.
pub fn sample_circle(radius: f32, step_degrees: f32) -> Contour {
    debug_assert!(step_degrees > 0.0, "angular step must be positive");

    let segments = ((360.0 / step_degrees) - 1e-4).ceil().max(1.0) as usize;
    let mut points: Contour = (0..segments)
        .map(|i| {
            let angle = (i as f32 * step_degrees).to_radians();
            Vec2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();
    points.push(points[0]);
    points
}

/// Drop the duplicated seam point, if present
pub fn open_loop(contour: &[Vec2]) -> &[Vec2] {
    match contour {
        [first, .., last] if first.distance_squared(*last) < 1e-10 => {
            &contour[..contour.len() - 1]
        }
        _ => contour,
    }
}

/// Shoelace area, positive for counter-clockwise loops
pub fn signed_area(points: &[Vec2]) -> f32 {
    let points = open_loop(points);
    let n = points.len();
    (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum::<f32>()
        * 0.5
}
