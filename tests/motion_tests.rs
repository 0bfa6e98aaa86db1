use carousel::config::{ElevationBounds, MotionSteps};
use carousel::{Direction, Spin, VerticalMotion};

#[cfg(test)]
mod motion_tests {
    use super::*;

    fn run(motion: &mut VerticalMotion, engaged: bool, ticks: usize) -> Vec<f64> {
        let bounds = ElevationBounds::default();
        let steps = MotionSteps::default();
        (0..ticks)
            .map(|_| {
                motion.step(engaged, &bounds, &steps);
                motion.elevation()
            })
            .collect()
    }

    #[test]
    fn test_engaged_ring_peaks_and_turns_down_within_26_ticks() {
        let mut motion = VerticalMotion::at_rest();
        let trace = run(&mut motion, true, 26);

        let peak = trace.iter().copied().fold(0.0, f64::max);
        assert!(peak >= 2.5, "peak {peak}");
        assert_eq!(motion.direction(), Direction::Down);
    }

    #[test]
    fn test_idle_ring_falls_from_one_to_rest_in_20_ticks() {
        let mut motion = VerticalMotion::new(1.0, Direction::Up);
        let trace = run(&mut motion, false, 20);

        assert!(trace.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(motion.elevation(), 0.0);
    }

    #[test]
    fn test_elevation_never_goes_negative() {
        let mut motion = VerticalMotion::at_rest();
        let mut trace = run(&mut motion, true, 300);
        trace.extend(run(&mut motion, false, 100));
        trace.extend(run(&mut motion, true, 300));

        assert!(trace.iter().all(|&e| e >= 0.0));
    }

    #[test]
    fn test_held_key_keeps_the_ring_oscillating() {
        let mut motion = VerticalMotion::at_rest();
        let trace = run(&mut motion, true, 200);

        // Count direction changes in the trace
        let turns = trace
            .windows(3)
            .filter(|w| (w[1] - w[0]) * (w[2] - w[1]) < 0.0)
            .count();
        assert!(turns >= 4, "only {turns} turns");

        let tail = &trace[50..];
        assert!(tail.iter().all(|&e| ((0.4 - 1e-9)..=(2.6 + 1e-9)).contains(&e)));
    }

    #[test]
    fn test_release_mid_air_settles_then_resumes_from_rest() {
        let mut motion = VerticalMotion::at_rest();
        run(&mut motion, true, 10);
        run(&mut motion, false, 40);
        assert_eq!(motion.elevation(), 0.0);

        run(&mut motion, true, 1);
        assert!(motion.elevation() > 0.0);
    }

    #[test]
    fn test_spin_accumulates_linearly() {
        let mut spin = Spin::with_velocity(0.05);
        for _ in 0..5 {
            spin.advance();
        }
        assert!((spin.angle() - 0.25).abs() < 1e-6);
        assert_eq!(spin.angular_velocity(), 0.05);
    }
}
