//! Animation driver: a pausable, resumable 1-D transition over wall time
//!
//! Plays the role of the platform animator: it is created already
//! running (idle at a position), can be retargeted, paused mid-flight
//! with its fractional progress captured, and resumed over the remaining
//! duration with a fresh timing curve. All methods take `now` explicitly
//! so the math is deterministic under test.

use std::time::{Duration, Instant};

/// Timing curve applied to normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Cubic ease-in-out: slow start, fast middle, slow finish.
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in [0, 1] onto the curve.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

/// Internal run state. There is deliberately no "not started" variant:
/// an `Animator` exists only in a started condition, so position updates
/// and pauses are always valid operations.
#[derive(Debug, Clone, Copy)]
enum DriverPhase {
    /// Running but idle: holding a position, no transition in flight.
    Idle { position: f32 },
    /// A timed transition is in flight.
    Animating {
        from: f32,
        to: f32,
        started: Instant,
        duration: Duration,
        curve: Easing,
    },
    /// Frozen mid-transition with progress captured.
    Paused {
        position: f32,
        to: f32,
        progress: f32,
    },
}

/// One animation driver, owned by a single panel attachment.
#[derive(Debug, Clone)]
pub struct Animator {
    duration: Duration,
    curve: Easing,
    phase: DriverPhase,
}

impl Animator {
    /// Create a driver in the running-but-idle condition at `position`.
    pub fn start(duration: Duration, curve: Easing, position: f32) -> Self {
        Self {
            duration,
            curve,
            phase: DriverPhase::Idle { position },
        }
    }

    /// Move directly to `y`, cancelling any in-flight or paused
    /// transition. Used for continuous interactive tracking.
    pub fn set_position(&mut self, y: f32) {
        self.phase = DriverPhase::Idle { position: y };
    }

    /// Begin a timed transition from the current position to `target`.
    pub fn animate_to(&mut self, target: f32, now: Instant) {
        let from = self.position(now);
        if from == target {
            self.phase = DriverPhase::Idle { position: target };
            return;
        }
        self.phase = DriverPhase::Animating {
            from,
            to: target,
            started: now,
            duration: self.duration,
            curve: self.curve,
        };
    }

    /// Freeze an in-flight transition, capturing its fractional
    /// progress. Pausing an idle or already-paused driver is a no-op.
    pub fn pause(&mut self, now: Instant) {
        if let DriverPhase::Animating {
            started, duration, ..
        } = self.phase
        {
            let progress = if duration.is_zero() {
                1.0
            } else {
                (now.duration_since(started).as_secs_f32() / duration.as_secs_f32()).min(1.0)
            };
            self.phase = DriverPhase::Paused {
                position: self.position(now),
                to: self.target(),
                progress,
            };
        }
    }

    /// Continue a paused transition to completion over its remaining
    /// duration, with `curve` applied to the remainder and no additional
    /// delay. Resuming a non-paused driver is a no-op.
    pub fn resume(&mut self, curve: Easing, now: Instant) {
        if let DriverPhase::Paused {
            position,
            to,
            progress,
        } = self.phase
        {
            if progress >= 1.0 || position == to {
                self.phase = DriverPhase::Idle { position: to };
                return;
            }
            let remaining = self.duration.mul_f32(1.0 - progress);
            self.phase = DriverPhase::Animating {
                from: position,
                to,
                started: now,
                duration: remaining,
                curve,
            };
        }
    }

    /// Sample the driven position at `now`.
    pub fn position(&self, now: Instant) -> f32 {
        match self.phase {
            DriverPhase::Idle { position } => position,
            DriverPhase::Paused { position, .. } => position,
            DriverPhase::Animating {
                from,
                to,
                started,
                duration,
                curve,
            } => {
                let elapsed = now.duration_since(started);
                if duration.is_zero() || elapsed >= duration {
                    return to;
                }
                let t = elapsed.as_secs_f32() / duration.as_secs_f32();
                from + (to - from) * curve.apply(t)
            }
        }
    }

    /// The position the driver is holding or heading toward.
    pub fn target(&self) -> f32 {
        match self.phase {
            DriverPhase::Idle { position } => position,
            DriverPhase::Animating { to, .. } => to,
            DriverPhase::Paused { to, .. } => to,
        }
    }

    /// Collapse a completed transition into the idle condition.
    /// Returns true while a transition is still in flight (caller should
    /// keep scheduling redraws).
    pub fn tick(&mut self, now: Instant) -> bool {
        if let DriverPhase::Animating {
            to,
            started,
            duration,
            ..
        } = self.phase
        {
            if now.duration_since(started) >= duration {
                self.phase = DriverPhase::Idle { position: to };
                return false;
            }
            return true;
        }
        false
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.phase, DriverPhase::Paused { .. })
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, DriverPhase::Animating { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUR: Duration = Duration::from_millis(500);

    fn driver(position: f32) -> Animator {
        Animator::start(DUR, Easing::Linear, position)
    }

    // ====================================================================
    // Easing
    // ====================================================================

    #[test]
    fn test_easing_endpoints_are_exact() {
        for curve in [Easing::Linear, Easing::EaseInOut] {
            assert_eq!(curve.apply(0.0), 0.0);
            assert_eq!(curve.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_easing_ease_in_out_midpoint() {
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_easing_clamps_out_of_range() {
        assert_eq!(Easing::EaseInOut.apply(-1.0), 0.0);
        assert_eq!(Easing::EaseInOut.apply(2.0), 1.0);
    }

    #[test]
    fn test_easing_ease_in_out_is_slow_at_edges() {
        assert!(Easing::EaseInOut.apply(0.1) < 0.1);
        assert!(Easing::EaseInOut.apply(0.9) > 0.9);
    }

    // ====================================================================
    // Driver
    // ====================================================================

    #[test]
    fn test_starts_idle_at_position() {
        let d = driver(400.0);
        let now = Instant::now();
        assert!(!d.is_animating());
        assert!(!d.is_paused());
        assert_eq!(d.position(now), 400.0);
        assert_eq!(d.target(), 400.0);
    }

    #[test]
    fn test_animate_to_interpolates_linearly() {
        let mut d = driver(0.0);
        let t0 = Instant::now();
        d.animate_to(100.0, t0);
        assert!(d.is_animating());
        assert_eq!(d.position(t0), 0.0);
        assert!((d.position(t0 + DUR / 2) - 50.0).abs() < 1e-3);
        assert_eq!(d.position(t0 + DUR), 100.0);
        assert_eq!(d.position(t0 + DUR * 2), 100.0);
    }

    #[test]
    fn test_animate_to_current_position_is_idle() {
        let mut d = driver(400.0);
        d.animate_to(400.0, Instant::now());
        assert!(!d.is_animating());
    }

    #[test]
    fn test_set_position_cancels_in_flight_animation() {
        let mut d = driver(0.0);
        let t0 = Instant::now();
        d.animate_to(100.0, t0);
        d.set_position(37.0);
        assert!(!d.is_animating());
        assert_eq!(d.position(t0 + DUR), 37.0);
    }

    #[test]
    fn test_pause_captures_progress_and_freezes() {
        let mut d = driver(0.0);
        let t0 = Instant::now();
        d.animate_to(100.0, t0);
        d.pause(t0 + DUR / 2);
        assert!(d.is_paused());
        let frozen = d.position(t0 + DUR / 2);
        // Position no longer advances while paused
        assert_eq!(d.position(t0 + DUR * 3), frozen);
        assert_eq!(d.target(), 100.0);
    }

    #[test]
    fn test_pause_at_zero_progress_holds_start_position() {
        // Non-interactive arming: retarget then pause immediately
        let mut d = driver(400.0);
        let t0 = Instant::now();
        d.animate_to(40.0, t0);
        d.pause(t0);
        assert!(d.is_paused());
        assert_eq!(d.position(t0 + DUR), 400.0);
    }

    #[test]
    fn test_pause_when_idle_is_noop() {
        let mut d = driver(400.0);
        d.pause(Instant::now());
        assert!(!d.is_paused());
    }

    #[test]
    fn test_resume_completes_over_remaining_duration() {
        let mut d = driver(0.0);
        let t0 = Instant::now();
        d.animate_to(100.0, t0);
        d.pause(t0 + DUR / 2);
        let frozen = d.position(t0 + DUR / 2);

        let t1 = t0 + DUR * 4;
        d.resume(Easing::Linear, t1);
        assert!(d.is_animating());
        // Continues from the frozen position with zero delay
        assert_eq!(d.position(t1), frozen);
        // Remaining duration is half the original
        assert_eq!(d.position(t1 + DUR / 2), 100.0);
    }

    #[test]
    fn test_resume_applies_new_curve() {
        let mut d = driver(0.0);
        let t0 = Instant::now();
        d.animate_to(100.0, t0);
        d.pause(t0);
        d.resume(Easing::EaseInOut, t0);
        // Quarter of the way in, ease-in-out lags linear
        let quarter = d.position(t0 + DUR / 4);
        assert!(quarter < 25.0, "expected ease-in lag, got {}", quarter);
        assert_eq!(d.position(t0 + DUR), 100.0);
    }

    #[test]
    fn test_resume_when_not_paused_is_noop() {
        let mut d = driver(50.0);
        let t0 = Instant::now();
        d.resume(Easing::EaseInOut, t0);
        assert!(!d.is_animating());
        assert_eq!(d.position(t0), 50.0);
    }

    #[test]
    fn test_tick_collapses_completed_animation() {
        let mut d = driver(0.0);
        let t0 = Instant::now();
        d.animate_to(100.0, t0);
        assert!(d.tick(t0 + DUR / 2));
        assert!(!d.tick(t0 + DUR));
        assert!(!d.is_animating());
        assert_eq!(d.position(t0 + DUR), 100.0);
    }

    #[test]
    fn test_abandoned_pause_holds_indefinitely() {
        // A gesture abandoned after arming leaves the driver paused;
        // that is acceptable and must not self-resume.
        let mut d = driver(400.0);
        let t0 = Instant::now();
        d.animate_to(40.0, t0);
        d.pause(t0);
        assert!(!d.tick(t0 + DUR * 100));
        assert!(d.is_paused());
        assert_eq!(d.position(t0 + DUR * 100), 400.0);
    }
}
