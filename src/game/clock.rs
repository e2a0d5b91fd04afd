//! Fixed-step tick counter and the deadline timers derived from it.
//!
//! All deadline arithmetic in the simulation goes through [`TickClock`]; no
//! component reads wall-clock time, so replaying the same tick sequence
//! reproduces the same expirations on every participant.

use serde::{Deserialize, Serialize};

/// One fixed simulation step.
pub type Tick = u64;

/// The shared tick counter. Advanced exactly once per step by the game loop,
/// read-only to every system.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TickClock {
    tick: Tick,
    tick_rate: u32,
}

impl TickClock {
    pub fn new(tick_rate: u32) -> Self {
        Self { tick: 0, tick_rate }
    }

    /// Current tick.
    #[inline]
    pub fn now(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    /// Advance by one step. Only the game loop calls this.
    pub fn advance(&mut self) {
        self.tick += 1;
    }

    /// Timer expiring `ticks` steps from now.
    pub fn timer_after(&self, ticks: Tick) -> TickTimer {
        TickTimer {
            deadline: Some(self.tick + ticks),
        }
    }

    /// Timer expiring `secs` seconds from now, rounded up to a whole tick.
    pub fn timer_from_secs(&self, secs: f32) -> TickTimer {
        let ticks = (secs.max(0.0) * self.tick_rate as f32).ceil() as Tick;
        self.timer_after(ticks)
    }
}

/// A deadline value: either not running, or running until a target tick.
///
/// Timers are plain values copied by assignment. Each entity owns its own
/// instance; re-assigning one implicitly cancels whatever deadline it held.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TickTimer {
    deadline: Option<Tick>,
}

impl TickTimer {
    /// A timer that is not running.
    pub const NONE: TickTimer = TickTimer { deadline: None };

    /// True if a deadline has been set, expired or not.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// True if a deadline is set and the clock has reached it.
    pub fn expired(&self, clock: &TickClock) -> bool {
        matches!(self.deadline, Some(deadline) if clock.now() >= deadline)
    }

    /// True if no deadline is set, or the set deadline has been reached.
    pub fn expired_or_not_running(&self, clock: &TickClock) -> bool {
        match self.deadline {
            None => true,
            Some(deadline) => clock.now() >= deadline,
        }
    }

    /// Ticks left until expiry; `None` when not running, zero once expired.
    pub fn remaining(&self, clock: &TickClock) -> Option<Tick> {
        self.deadline
            .map(|deadline| deadline.saturating_sub(clock.now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock_at(tick: Tick) -> TickClock {
        let mut clock = TickClock::new(30);
        for _ in 0..tick {
            clock.advance();
        }
        clock
    }

    #[test]
    fn test_clock_starts_at_zero_and_advances() {
        let mut clock = TickClock::new(30);
        assert_eq!(clock.now(), 0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.now(), 2);
    }

    #[test]
    fn test_timer_not_running_by_default() {
        let clock = clock_at(10);
        let timer = TickTimer::default();
        assert!(!timer.is_running());
        assert!(!timer.expired(&clock));
        assert!(timer.expired_or_not_running(&clock));
    }

    #[test]
    fn test_timer_after_expires_at_deadline() {
        let mut clock = clock_at(0);
        let timer = clock.timer_after(3);
        assert!(timer.is_running());
        assert!(!timer.expired(&clock));

        clock.advance();
        clock.advance();
        assert!(!timer.expired(&clock), "one tick early");

        clock.advance();
        assert!(timer.expired(&clock), "exactly at deadline");
        assert!(timer.expired_or_not_running(&clock));

        clock.advance();
        assert!(timer.expired(&clock), "stays expired afterwards");
    }

    #[test]
    fn test_timer_from_secs_rounds_up() {
        let clock = clock_at(0);
        // 0.05 s at 30 Hz is 1.5 ticks, so the deadline lands on tick 2
        let timer = clock.timer_from_secs(0.05);
        assert_eq!(timer.remaining(&clock), Some(2));

        let exact = clock.timer_from_secs(1.0);
        assert_eq!(exact.remaining(&clock), Some(30));
    }

    #[test]
    fn test_timer_from_secs_negative_is_immediate() {
        let clock = clock_at(5);
        let timer = clock.timer_from_secs(-1.0);
        assert!(timer.expired(&clock));
    }

    #[test]
    fn test_reassignment_overwrites_deadline() {
        let mut clock = clock_at(0);
        let mut timer = clock.timer_after(2);
        assert_eq!(timer.remaining(&clock), Some(2));
        timer = clock.timer_after(10);
        clock.advance();
        clock.advance();
        assert!(!timer.expired(&clock), "old deadline must not apply");

        timer = TickTimer::NONE;
        assert!(!timer.is_running());
    }

    #[test]
    fn test_remaining_counts_down() {
        let mut clock = clock_at(0);
        let timer = clock.timer_after(4);
        assert_eq!(timer.remaining(&clock), Some(4));
        clock.advance();
        assert_eq!(timer.remaining(&clock), Some(3));
        for _ in 0..10 {
            clock.advance();
        }
        assert_eq!(timer.remaining(&clock), Some(0));
    }

    #[test]
    fn test_timers_are_copied_not_shared() {
        let clock = clock_at(0);
        let a = clock.timer_after(5);
        let mut b = a;
        b = TickTimer::NONE;
        assert!(a.is_running());
        assert!(!b.is_running());
    }
}
