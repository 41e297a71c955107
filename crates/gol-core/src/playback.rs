use crate::error::{LifeError, LifeResult};

/// Shortest allowed time between generations, in seconds.
pub const MIN_INTERVAL: f64 = 0.05;
/// Longest allowed time between generations, in seconds.
pub const MAX_INTERVAL: f64 = 2.0;
/// Amount one speed command changes the interval by, in seconds.
pub const SPEED_STEP: f64 = 0.05;
/// Interval a new controller starts with, in seconds.
pub const DEFAULT_INTERVAL: f64 = 0.2;

/// Whether generations are currently being produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaybackMode {
    /// No generations fire; ticks are ignored.
    #[default]
    Paused,
    /// A generation fires whenever the accumulated time reaches the interval.
    Running,
}

/// Timing state machine deciding when the next generation fires.
///
/// Elapsed time accumulates only while running. When it reaches the update
/// interval the controller reports a firing and drops the accumulator back to
/// exactly zero; any overshoot is discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackController {
    mode: PlaybackMode,
    elapsed: f64,
    update_interval: f64,
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self {
            mode: PlaybackMode::Paused,
            elapsed: 0.0,
            update_interval: DEFAULT_INTERVAL,
        }
    }
}

impl PlaybackController {
    /// Create a paused controller with the given interval.
    ///
    /// The interval must lie within bounds and on whole hundredths, so every
    /// speed step moves it by exactly [`SPEED_STEP`].
    pub fn new(update_interval: f64) -> LifeResult<Self> {
        check_interval(update_interval)?;
        Ok(Self {
            update_interval,
            ..Self::default()
        })
    }

    /// Current mode.
    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    /// Whether generations are being produced.
    pub fn is_running(&self) -> bool {
        self.mode == PlaybackMode::Running
    }

    /// Seconds accumulated since the last generation.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Seconds between generations.
    pub fn update_interval(&self) -> f64 {
        self.update_interval
    }

    /// Switch between paused and running. Nothing else changes.
    pub fn toggle_run(&mut self) {
        self.mode = match self.mode {
            PlaybackMode::Paused => PlaybackMode::Running,
            PlaybackMode::Running => PlaybackMode::Paused,
        };
    }

    /// Account for `elapsed_seconds` of wall time.
    ///
    /// Returns `true` when a generation is due. Ticks while paused, and
    /// negative or non-finite durations, accumulate nothing.
    pub fn tick(&mut self, elapsed_seconds: f64) -> bool {
        if !self.is_running() {
            return false;
        }
        if elapsed_seconds.is_finite() && elapsed_seconds > 0.0 {
            self.elapsed += elapsed_seconds;
        }
        if self.elapsed >= self.update_interval {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }

    /// Lengthen the interval by one step, up to [`MAX_INTERVAL`].
    pub fn increase_speed(&mut self) {
        self.set_interval(self.update_interval + SPEED_STEP);
    }

    /// Shorten the interval by one step, down to [`MIN_INTERVAL`].
    pub fn decrease_speed(&mut self) {
        self.set_interval(self.update_interval - SPEED_STEP);
    }

    // Intervals start on hundredths; rounding only strips float error.
    fn set_interval(&mut self, seconds: f64) {
        let rounded = (seconds * 100.0).round() / 100.0;
        self.update_interval = rounded.clamp(MIN_INTERVAL, MAX_INTERVAL);
    }

    /// Pause and clear the accumulator. The interval is kept.
    pub fn reset(&mut self) {
        self.mode = PlaybackMode::Paused;
        self.elapsed = 0.0;
    }
}

/// Reject intervals outside the bounds or off the 0.01s grid.
pub fn check_interval(seconds: f64) -> LifeResult<()> {
    if !(MIN_INTERVAL..=MAX_INTERVAL).contains(&seconds) {
        return Err(LifeError::InvalidInterval {
            value: seconds,
            min: MIN_INTERVAL,
            max: MAX_INTERVAL,
        });
    }
    let hundredths = seconds * 100.0;
    if (hundredths - hundredths.round()).abs() > 1e-6 {
        return Err(LifeError::UnalignedInterval(seconds));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn running() -> PlaybackController {
        let mut playback = PlaybackController::default();
        playback.toggle_run();
        playback
    }

    #[test]
    fn starts_paused_with_default_interval() {
        let playback = PlaybackController::default();
        assert_eq!(playback.mode(), PlaybackMode::Paused);
        assert_eq!(playback.elapsed(), 0.0);
        assert!((playback.update_interval() - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn toggle_run_flips_mode_only() {
        let mut playback = PlaybackController::default();
        playback.toggle_run();
        assert!(playback.is_running());
        assert_eq!(playback.elapsed(), 0.0);
        playback.toggle_run();
        assert!(!playback.is_running());
    }

    #[test]
    fn paused_ticks_accumulate_nothing() {
        let mut playback = PlaybackController::default();
        assert!(!playback.tick(5.0));
        assert_eq!(playback.elapsed(), 0.0);
    }

    #[test]
    fn two_half_ticks_fire_once() {
        let mut playback = running();
        assert!(!playback.tick(0.1));
        assert!((playback.elapsed() - 0.1).abs() < 1e-12);
        assert!(playback.tick(0.1));
        assert_eq!(playback.elapsed(), 0.0);
    }

    #[test]
    fn overshoot_is_discarded() {
        let mut playback = running();
        assert!(playback.tick(0.35));
        assert_eq!(playback.elapsed(), 0.0);
        assert!(!playback.tick(0.15));
    }

    #[test]
    fn large_tick_fires_only_once() {
        let mut playback = running();
        assert!(playback.tick(10.0));
        assert!(!playback.tick(0.0));
    }

    #[test]
    fn bad_durations_are_ignored() {
        let mut playback = running();
        assert!(!playback.tick(-1.0));
        assert!(!playback.tick(f64::NAN));
        assert!(!playback.tick(f64::INFINITY));
        assert_eq!(playback.elapsed(), 0.0);
    }

    #[test]
    fn speed_steps_stay_on_hundredths() {
        let mut playback = PlaybackController::default();
        playback.decrease_speed();
        assert_eq!(format!("{}", playback.update_interval()), "0.15");
        playback.increase_speed();
        playback.increase_speed();
        assert_eq!(format!("{}", playback.update_interval()), "0.25");
    }

    #[test]
    fn speed_saturates_at_bounds() {
        let mut playback = PlaybackController::default();
        for _ in 0..100 {
            playback.increase_speed();
        }
        assert_eq!(playback.update_interval(), MAX_INTERVAL);
        for _ in 0..100 {
            playback.decrease_speed();
        }
        assert_eq!(playback.update_interval(), MIN_INTERVAL);
    }

    #[test]
    fn speed_can_change_while_running() {
        let mut playback = running();
        playback.decrease_speed();
        assert!(playback.is_running());
        assert!((playback.update_interval() - 0.15).abs() < 1e-12);
    }

    #[test]
    fn reset_keeps_interval() {
        let mut playback = running();
        playback.increase_speed();
        playback.tick(0.1);
        playback.reset();
        assert!(!playback.is_running());
        assert_eq!(playback.elapsed(), 0.0);
        assert!((playback.update_interval() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn new_rejects_out_of_range_interval() {
        assert!(PlaybackController::new(0.01).is_err());
        assert!(PlaybackController::new(2.5).is_err());
        assert!(PlaybackController::new(f64::NAN).is_err());
        assert!(PlaybackController::new(MIN_INTERVAL).is_ok());
        assert!(PlaybackController::new(MAX_INTERVAL).is_ok());
    }

    #[test]
    fn new_rejects_intervals_off_hundredths() {
        assert!(matches!(
            PlaybackController::new(0.123),
            Err(LifeError::UnalignedInterval(_))
        ));
        assert!(PlaybackController::new(0.35).is_ok());
        assert!(PlaybackController::new(1.07).is_ok());
    }

    #[test]
    fn every_step_is_exactly_one_speed_step() {
        let mut playback = PlaybackController::new(0.37).unwrap();
        playback.increase_speed();
        assert!((playback.update_interval() - 0.42).abs() < 1e-12);
        playback.decrease_speed();
        playback.decrease_speed();
        assert!((playback.update_interval() - 0.32).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn interval_never_leaves_bounds(steps in proptest::collection::vec(any::<bool>(), 0..120)) {
            let mut playback = PlaybackController::default();
            for faster in steps {
                if faster {
                    playback.decrease_speed();
                } else {
                    playback.increase_speed();
                }
                prop_assert!(playback.update_interval() >= MIN_INTERVAL);
                prop_assert!(playback.update_interval() <= MAX_INTERVAL);
            }
        }

        #[test]
        fn elapsed_stays_below_interval(ticks in proptest::collection::vec(0.0f64..0.5, 1..50)) {
            let mut playback = running();
            for dt in ticks {
                playback.tick(dt);
                prop_assert!(playback.elapsed() < playback.update_interval());
            }
        }
    }
}
