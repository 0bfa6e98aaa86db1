use std::time::Duration;

use crate::config::{CarouselConfig, ElevationBounds, MotionSteps, FRAME_BUDGET};
use crate::core::{Button, Controller, FrameScheduler};
use crate::scene::{Carousel, RingLevel};

use super::rotation::advance_spins;

/// One engage flag per ring, written by the input side between ticks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlFlags([bool; 3]);

impl ControlFlags {
    pub fn engaged(&self, level: RingLevel) -> bool {
        self.0[level.index()]
    }

    pub fn set(&mut self, level: RingLevel, engaged: bool) {
        self.0[level.index()] = engaged;
    }

    pub fn with_engaged(levels: &[RingLevel]) -> Self {
        let mut flags = Self::default();
        for &level in levels {
            flags.set(level, true);
        }
        flags
    }

    /// Keys 1, 2 and 3 held down engage the inner, middle and outer ring
    pub fn from_controller(controller: &dyn Controller) -> Self {
        Self([
            controller.is_down(Button::Key1),
            controller.is_down(Button::Key2),
            controller.is_down(Button::Key3),
        ])
    }
}

/// Everything the per-frame animation needs, owned by the composition root
pub struct AnimationContext {
    carousel: Carousel,
    flags: ControlFlags,
    scheduler: FrameScheduler,
    bounds: ElevationBounds,
    steps: MotionSteps,
    ticks: u64,
}

impl AnimationContext {
    pub fn new(carousel: Carousel, config: &CarouselConfig) -> Self {
        Self::with_scheduler(carousel, config, FrameScheduler::new(FRAME_BUDGET))
    }

    pub fn with_scheduler(
        carousel: Carousel,
        config: &CarouselConfig,
        scheduler: FrameScheduler,
    ) -> Self {
        Self {
            carousel,
            flags: ControlFlags::default(),
            scheduler,
            bounds: config.bounds,
            steps: config.steps,
            ticks: 0,
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn flags_mut(&mut self) -> &mut ControlFlags {
        &mut self.flags
    }

    pub fn set_flags(&mut self, flags: ControlFlags) {
        self.flags = flags;
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    /// Accepted ticks so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run one animation tick unconditionally: spin every solid, then move
    /// every ring with the flags as they stand now.
    pub fn tick(&mut self) {
        let flags = self.flags;

        advance_spins(&mut self.carousel.decorations);
        for ring in &mut self.carousel.rings {
            ring.motion
                .step(flags.engaged(ring.level), &self.bounds, &self.steps);
        }

        self.ticks += 1;
    }

    /// Offer a host timestamp. If the scheduler accepts it, tick once and
    /// hand the updated scene to `draw`. Returns whether a tick ran.
    pub fn frame<F>(&mut self, now: Duration, draw: F) -> bool
    where
        F: FnOnce(&Carousel),
    {
        if !self.scheduler.try_accept(now) {
            return false;
        }

        self.tick();
        draw(&self.carousel);
        true
    }
}
