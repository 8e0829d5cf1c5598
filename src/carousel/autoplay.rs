//! Autoplay timer
//!
//! An explicit recurring-task handle owned by the carousel instance. The
//! deadline is recreated deterministically whenever its dependencies
//! (suspension, slide count) change and dropped on teardown, so at most
//! one timer exists per mounted instance and no stale ticks survive.

use std::time::{Duration, Instant};

use tracing::debug;

/// Default autoplay period in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 4500;

/// Minimum autoplay period. Requested intervals are floored here to
/// prevent overly rapid cycling.
pub const MIN_INTERVAL_MS: u64 = 1800;

/// Recurring autoplay deadline.
///
/// All methods take `now` explicitly so the protocol is testable without
/// sleeping.
#[derive(Debug)]
pub struct AutoplayTimer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl AutoplayTimer {
    /// Create a timer with the requested period, floored to
    /// [`MIN_INTERVAL_MS`]. The timer starts unarmed.
    pub fn new(requested_ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(requested_ms.max(MIN_INTERVAL_MS)),
            deadline: None,
        }
    }

    /// Effective autoplay period.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a deadline is currently pending.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Reconcile the deadline with the carousel's dependencies.
    ///
    /// Arms a fresh full interval when autoplay becomes active and
    /// cancels the pending deadline when it becomes inactive. A timer
    /// that is already in the right state is left untouched, so ticks
    /// do not drift while running.
    pub fn sync(&mut self, active: bool, now: Instant) {
        match (active, self.deadline) {
            (true, None) => {
                self.deadline = Some(now + self.interval);
                debug!(interval_ms = self.interval.as_millis() as u64, "autoplay armed");
            }
            (false, Some(_)) => {
                self.deadline = None;
                debug!("autoplay cancelled");
            }
            _ => {}
        }
    }

    /// Time remaining until the pending deadline, if any. Used as the
    /// event poll timeout.
    pub fn timeout_until(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Consume a due tick and re-arm for the next full interval.
    ///
    /// Returns true when the deadline had passed; the caller translates
    /// a tick into one forward advance.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requested_interval_is_floored_to_minimum() {
        let timer = AutoplayTimer::new(100);
        assert_eq!(timer.interval(), Duration::from_millis(MIN_INTERVAL_MS));
    }

    #[test]
    fn requested_interval_above_minimum_is_kept() {
        let timer = AutoplayTimer::new(4500);
        assert_eq!(timer.interval(), Duration::from_millis(4500));
    }

    #[test]
    fn starts_unarmed() {
        let timer = AutoplayTimer::new(DEFAULT_INTERVAL_MS);
        assert!(!timer.is_armed());
        assert_eq!(timer.timeout_until(Instant::now()), None);
    }

    #[test]
    fn sync_arms_when_active() {
        let mut timer = AutoplayTimer::new(2000);
        let now = Instant::now();
        timer.sync(true, now);
        assert!(timer.is_armed());
        assert_eq!(timer.timeout_until(now), Some(Duration::from_millis(2000)));
    }

    #[test]
    fn sync_cancels_when_inactive() {
        let mut timer = AutoplayTimer::new(2000);
        let now = Instant::now();
        timer.sync(true, now);
        timer.sync(false, now);
        assert!(!timer.is_armed());
    }

    #[test]
    fn sync_does_not_reset_a_running_deadline() {
        let mut timer = AutoplayTimer::new(2000);
        let now = Instant::now();
        timer.sync(true, now);
        let later = now + Duration::from_millis(500);
        timer.sync(true, later);
        // Deadline unchanged: 1500ms left, not a fresh 2000ms
        assert_eq!(
            timer.timeout_until(later),
            Some(Duration::from_millis(1500))
        );
    }

    #[test]
    fn resume_rearms_with_fresh_full_interval() {
        let mut timer = AutoplayTimer::new(2000);
        let now = Instant::now();
        timer.sync(true, now);

        // Pause 1200ms in, then resume 3000ms in
        let pause_at = now + Duration::from_millis(1200);
        timer.sync(false, pause_at);
        let resume_at = now + Duration::from_millis(3000);
        timer.sync(true, resume_at);

        // No partial-tick carry-over: full interval from the resume point
        assert_eq!(
            timer.timeout_until(resume_at),
            Some(Duration::from_millis(2000))
        );
    }

    #[test]
    fn fire_before_deadline_is_false() {
        let mut timer = AutoplayTimer::new(2000);
        let now = Instant::now();
        timer.sync(true, now);
        assert!(!timer.fire(now + Duration::from_millis(1999)));
    }

    #[test]
    fn fire_at_deadline_ticks_and_rearms() {
        let mut timer = AutoplayTimer::new(2000);
        let now = Instant::now();
        timer.sync(true, now);

        let tick = now + Duration::from_millis(2000);
        assert!(timer.fire(tick));
        assert!(timer.is_armed());
        assert_eq!(timer.timeout_until(tick), Some(Duration::from_millis(2000)));
    }

    #[test]
    fn unarmed_timer_never_fires() {
        let mut timer = AutoplayTimer::new(2000);
        assert!(!timer.fire(Instant::now() + Duration::from_secs(60)));
    }

    #[test]
    fn three_ticks_cycle_a_three_slide_deck() {
        use crate::carousel::state::CarouselState;

        let mut state = CarouselState::new(3);
        let mut timer = AutoplayTimer::new(2000);
        let start = Instant::now();
        timer.sync(state.autoplay_active(), start);

        let mut seen = vec![state.index];
        for i in 1..=3 {
            let now = start + Duration::from_millis(2000 * i);
            if timer.fire(now) {
                state.advance(1);
            }
            seen.push(state.index);
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
    }
}
