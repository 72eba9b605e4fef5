//! Confirmation screen animation state

use std::time::{Duration, Instant};

/// Animation phase of the bouncing check mark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BouncePhase {
    /// Moving up toward the peak
    Rising,
    /// Falling back to rest
    Falling,
}

/// Bounce animation for the confirmation check mark
#[derive(Debug)]
pub struct ConfirmationState {
    /// When the confirmation screen appeared
    pub start_time: Instant,
    /// Current animation phase
    pub phase: BouncePhase,
    /// Current lift above the resting row, in rows
    pub lift: f32,
}

impl ConfirmationState {
    /// Duration of one full bounce (rise + fall)
    const BOUNCE_PERIOD: Duration = Duration::from_millis(1000);
    /// Peak lift in rows
    const MAX_LIFT: f32 = 2.0;

    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start_time: Instant) -> Self {
        Self {
            start_time,
            phase: BouncePhase::Rising,
            lift: 0.0,
        }
    }

    /// Update animation state based on elapsed time
    pub fn update(&mut self) {
        self.update_at(Instant::now());
    }

    pub fn update_at(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.start_time);
        let period = Self::BOUNCE_PERIOD.as_secs_f32();
        // Position within the current bounce (0.0 to 1.0)
        let cycle = (elapsed.as_secs_f32() % period) / period;

        if cycle < 0.5 {
            self.phase = BouncePhase::Rising;
            // Decelerate into the peak
            self.lift = simple_easing::cubic_out(cycle * 2.0) * Self::MAX_LIFT;
        } else {
            self.phase = BouncePhase::Falling;
            // Accelerate back down
            self.lift = (1.0 - simple_easing::cubic_in((cycle - 0.5) * 2.0)) * Self::MAX_LIFT;
        }
    }

    /// Lift rounded to whole terminal rows
    pub fn lift_rows(&self) -> u16 {
        self.lift.round().clamp(0.0, Self::MAX_LIFT) as u16
    }
}

impl Default for ConfirmationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_rest_rising() {
        let state = ConfirmationState::new();
        assert_eq!(state.phase, BouncePhase::Rising);
        assert_eq!(state.lift, 0.0);
        assert_eq!(state.lift_rows(), 0);
    }

    #[test]
    fn test_update_immediately_stays_near_rest() {
        let start = Instant::now();
        let mut state = ConfirmationState::starting_at(start);
        state.update_at(start);
        assert_eq!(state.phase, BouncePhase::Rising);
        assert_eq!(state.lift_rows(), 0);
    }

    #[test]
    fn test_peak_at_half_period() {
        let start = Instant::now();
        let mut state = ConfirmationState::starting_at(start);
        state.update_at(start + Duration::from_millis(490));
        assert_eq!(state.phase, BouncePhase::Rising);
        assert_eq!(state.lift_rows(), 2);
    }

    #[test]
    fn test_falls_in_second_half() {
        let start = Instant::now();
        let mut state = ConfirmationState::starting_at(start);
        state.update_at(start + Duration::from_millis(950));
        assert_eq!(state.phase, BouncePhase::Falling);
        assert!(state.lift < 1.0);
    }

    #[test]
    fn test_bounce_repeats() {
        let start = Instant::now();
        let mut first = ConfirmationState::starting_at(start);
        let mut later = ConfirmationState::starting_at(start);
        first.update_at(start + Duration::from_millis(250));
        later.update_at(start + Duration::from_millis(2250));
        assert!((first.lift - later.lift).abs() < 0.01);
    }

    #[test]
    fn test_update_before_start_is_rest() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut state = ConfirmationState::starting_at(start);
        state.update_at(Instant::now());
        assert_eq!(state.lift_rows(), 0);
    }
}
