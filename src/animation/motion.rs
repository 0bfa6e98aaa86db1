use serde::{Deserialize, Serialize};

use crate::config::{ElevationBounds, MotionSteps, REST_ELEVATION};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Vertical offset of one ring from its rest height.
///
/// While its control is engaged the ring bounces between the elevation
/// bounds; when released it settles back to rest. The bound check runs
/// before the move, so the ring can overshoot `upper_limit` by one raise
/// step before turning around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalMotion {
    elevation: f64,
    direction: Direction,
}

impl VerticalMotion {
    pub fn new(elevation: f64, direction: Direction) -> Self {
        Self {
            elevation: elevation.max(REST_ELEVATION),
            direction,
        }
    }

    pub fn at_rest() -> Self {
        Self::new(REST_ELEVATION, Direction::Up)
    }

    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Advance one tick with the control state sampled for this tick
    pub fn step(&mut self, engaged: bool, bounds: &ElevationBounds, steps: &MotionSteps) {
        if engaged {
            self.oscillate(bounds, steps.raise);
        } else {
            self.fall(steps.fall);
        }
    }

    fn oscillate(&mut self, bounds: &ElevationBounds, step: f64) {
        let turn = match self.direction {
            Direction::Up => self.elevation > bounds.upper_limit,
            Direction::Down => self.elevation < bounds.lower_limit,
        };
        if turn {
            self.direction = self.direction.flipped();
        }

        self.elevation = match self.direction {
            Direction::Up => self.elevation + step,
            Direction::Down => (self.elevation - step).max(REST_ELEVATION),
        };
    }

    fn fall(&mut self, step: f64) {
        self.elevation = (self.elevation - step).max(REST_ELEVATION);
    }
}

impl Default for VerticalMotion {
    fn default() -> Self {
        Self::at_rest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> ElevationBounds {
        ElevationBounds {
            upper_limit: 2.5,
            lower_limit: 0.5,
        }
    }

    fn steps() -> MotionSteps {
        MotionSteps {
            raise: 0.1,
            fall: 0.05,
        }
    }

    #[test]
    fn engaged_ring_turns_at_the_ceiling() {
        let mut motion = VerticalMotion::at_rest();
        let mut peak: f64 = 0.0;
        for _ in 0..26 {
            motion.step(true, &bounds(), &steps());
            peak = peak.max(motion.elevation());
        }
        assert!(peak >= 2.5);
        assert_eq!(motion.direction(), Direction::Down);
    }

    #[test]
    fn overshoot_is_at_most_one_step() {
        let mut motion = VerticalMotion::at_rest();
        for _ in 0..500 {
            motion.step(true, &bounds(), &steps());
            assert!(motion.elevation() <= 2.5 + 0.1 + 1e-9);
            assert!(motion.elevation() >= 0.0);
        }
    }

    #[test]
    fn engaged_ring_turns_at_the_floor() {
        let mut motion = VerticalMotion::new(0.55, Direction::Down);
        motion.step(true, &bounds(), &steps());
        assert_eq!(motion.direction(), Direction::Down);
        // Dips one step below the lower limit before the turn is seen
        assert!((motion.elevation() - 0.45).abs() < 1e-9);
        motion.step(true, &bounds(), &steps());
        assert_eq!(motion.direction(), Direction::Up);
        assert!((motion.elevation() - 0.55).abs() < 1e-9);
    }

    #[test]
    fn idle_ring_settles_to_rest() {
        let mut motion = VerticalMotion::new(1.0, Direction::Up);
        for _ in 0..20 {
            motion.step(false, &bounds(), &steps());
            assert!(motion.elevation() >= 0.0);
        }
        assert_eq!(motion.elevation(), 0.0);
    }

    #[test]
    fn idle_ring_at_rest_stays_put() {
        let mut motion = VerticalMotion::at_rest();
        motion.step(false, &bounds(), &steps());
        assert_eq!(motion.elevation(), 0.0);
        assert_eq!(motion.direction(), Direction::Up);
    }

    #[test]
    fn release_keeps_direction_for_the_next_press() {
        let mut motion = VerticalMotion::new(2.0, Direction::Down);
        motion.step(false, &bounds(), &steps());
        assert_eq!(motion.direction(), Direction::Down);
        motion.step(true, &bounds(), &steps());
        assert!((motion.elevation() - 1.85).abs() < 1e-9);
    }
}
