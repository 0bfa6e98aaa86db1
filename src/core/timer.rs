use std::time::Duration;

/// Throttled frame gate - accepts a host timestamp only when at least one
/// budget has passed since the last accepted one.
///
/// There is no accumulator: late frames are not caught up, and early ones
/// never move the gate. They only bump the `rejected` diagnostic counter.
#[derive(Debug, Clone, Copy)]
pub struct FrameScheduler {
    budget: Duration,
    last_accepted: Duration,
    accepted: u64,
    rejected: u64,
}

impl FrameScheduler {
    /// Create a scheduler whose clock starts at zero
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            last_accepted: Duration::ZERO,
            accepted: 0,
            rejected: 0,
        }
    }

    /// Create a scheduler for a target rate in Hz
    pub fn with_fps(fps: u32) -> Self {
        Self::new(Duration::from_nanos(1_000_000_000 / u64::from(fps.max(1))))
    }

    /// Offer a monotonic host timestamp, returns true if a tick should run.
    ///
    /// A rejected timestamp changes nothing the gate reads; it is only tallied
    /// in [`rejected`](Self::rejected).
    pub fn try_accept(&mut self, now: Duration) -> bool {
        if now.saturating_sub(self.last_accepted) < self.budget {
            self.rejected += 1;
            log::trace!("frame at {:?} rejected", now);
            return false;
        }

        self.last_accepted = now;
        self.accepted += 1;
        log::trace!("frame at {:?} accepted", now);
        true
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn last_accepted(&self) -> Duration {
        self.last_accepted
    }

    /// Number of accepted timestamps so far
    pub fn accepted(&self) -> u64 {
        self.accepted
    }

    /// Number of rejected timestamps so far, diagnostic only
    pub fn rejected(&self) -> u64 {
        self.rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUDGET: Duration = Duration::from_nanos(16_666_666);

    #[test]
    fn ten_ms_callbacks_accept_every_second_one() {
        let mut scheduler = FrameScheduler::new(BUDGET);

        let accepted: Vec<bool> = (1..=10)
            .map(|i| scheduler.try_accept(Duration::from_millis(10 * i)))
            .collect();

        assert_eq!(
            accepted,
            vec![false, true, false, true, false, true, false, true, false, true]
        );
        assert_eq!(scheduler.accepted(), 5);
        assert_eq!(scheduler.rejected(), 5);
    }

    #[test]
    fn rejected_frames_leave_state_untouched() {
        let mut scheduler = FrameScheduler::new(BUDGET);
        assert!(scheduler.try_accept(Duration::from_millis(20)));

        assert!(!scheduler.try_accept(Duration::from_millis(25)));
        assert!(!scheduler.try_accept(Duration::from_millis(30)));
        assert_eq!(scheduler.last_accepted(), Duration::from_millis(20));
        assert_eq!(scheduler.accepted(), 1);
        assert_eq!(scheduler.rejected(), 2);

        // Measured from the accepted frame, not the rejected ones
        assert!(scheduler.try_accept(Duration::from_millis(37)));
    }

    #[test]
    fn long_gap_runs_only_one_tick() {
        let mut scheduler = FrameScheduler::new(BUDGET);
        assert!(scheduler.try_accept(Duration::from_millis(500)));
        assert!(!scheduler.try_accept(Duration::from_millis(501)));
        assert_eq!(scheduler.accepted(), 1);
    }

    #[test]
    fn backwards_timestamp_is_rejected() {
        let mut scheduler = FrameScheduler::new(BUDGET);
        assert!(scheduler.try_accept(Duration::from_millis(100)));
        assert!(!scheduler.try_accept(Duration::from_millis(50)));
    }

    #[test]
    fn with_fps_matches_budget() {
        let scheduler = FrameScheduler::with_fps(60);
        assert_eq!(scheduler.budget(), BUDGET);
    }
}
