use rand::distributions::Open01;
use rand::Rng;

use crate::config::MAX_ANGULAR_VELOCITY;
use crate::scene::DecorativeSolid;

/// Constant-rate spin about the vertical axis.
///
/// The rate is drawn once when the solid is built and never changes; only
/// the accumulated angle moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    angular_velocity: f32,
    angle: f32,
}

impl Spin {
    /// Draw a rate uniformly from (0, MAX_ANGULAR_VELOCITY) radians per tick
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let unit: f32 = rng.sample(Open01);
        Self::with_velocity(unit * MAX_ANGULAR_VELOCITY)
    }

    pub const fn with_velocity(angular_velocity: f32) -> Self {
        Self {
            angular_velocity,
            angle: 0.0,
        }
    }

    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    /// Total rotation applied so far, radians
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn advance(&mut self) {
        self.angle += self.angular_velocity;
    }
}

/// One rotation tick for every decorative solid in the scene
pub fn advance_spins(solids: &mut [DecorativeSolid]) {
    for solid in solids {
        solid.spin.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn sampled_rate_lies_in_open_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let spin = Spin::sample(&mut rng);
            assert!(spin.angular_velocity() > 0.0);
            assert!(spin.angular_velocity() <= MAX_ANGULAR_VELOCITY);
            assert_eq!(spin.angle(), 0.0);
        }
    }

    #[test]
    fn five_ticks_accumulate_five_steps() {
        let mut spin = Spin::with_velocity(0.03);
        for _ in 0..5 {
            spin.advance();
        }
        assert_eq!(spin.angular_velocity(), 0.03);
        assert!((spin.angle() - 0.15).abs() < 1e-6);
    }

    #[test]
    fn independent_draws_differ() {
        let mut rng = StdRng::seed_from_u64(99);
        let a = Spin::sample(&mut rng);
        let b = Spin::sample(&mut rng);
        assert_ne!(a.angular_velocity(), b.angular_velocity());
    }
}
