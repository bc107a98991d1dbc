//=========================================================================
// Simulation Clock
//=========================================================================
//
// Shared handle to simulation time and the global time-scale.
//
// Every clone observes the same state. The pause menu writes the scale,
// the orchestrator advances time, and controllers read timestamps.
//
//   scale 0.0 → scaled time stops, fixed ticks stop
//   scale 1.0 → normal speed
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;

use log::{debug, warn};

//=== Constants ===========================================================

/// Default physics step in seconds (50 Hz).
pub const DEFAULT_FIXED_DELTA: f32 = 0.02;

//=== ClockState ==========================================================

#[derive(Debug)]
struct ClockState {
    /// f32 bits
    time_scale: AtomicU32,
    /// f64 bits
    scaled_time: AtomicU64,
    /// f64 bits
    unscaled_time: AtomicU64,
    fixed_delta: f32,
}

//=== SimulationClock =====================================================

/// Cloneable time-scale and timestamp source.
///
/// ```
/// use sidescroll_engine::core::clock::SimulationClock;
///
/// let clock = SimulationClock::new();
/// let pause_view = clock.clone();
///
/// pause_view.set_time_scale(0.0);
/// assert_eq!(clock.advance(0.5), 0.0);
/// assert_eq!(clock.time(), 0.0);
/// assert_eq!(clock.unscaled_time(), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct SimulationClock {
    state: Arc<ClockState>,
}

impl SimulationClock {
    /// Scale 1, time 0, fixed step [`DEFAULT_FIXED_DELTA`].
    pub fn new() -> Self {
        Self::with_fixed_delta(DEFAULT_FIXED_DELTA)
    }

    /// # Panics
    ///
    /// Panics if `fixed_delta <= 0.0`.
    pub fn with_fixed_delta(fixed_delta: f32) -> Self {
        assert!(fixed_delta > 0.0, "Fixed delta must be positive, got {}", fixed_delta);
        Self {
            state: Arc::new(ClockState {
                time_scale: AtomicU32::new(1.0f32.to_bits()),
                scaled_time: AtomicU64::new(0.0f64.to_bits()),
                unscaled_time: AtomicU64::new(0.0f64.to_bits()),
                fixed_delta,
            }),
        }
    }

    //--- Time Scale -------------------------------------------------------

    pub fn time_scale(&self) -> f32 {
        f32::from_bits(self.state.time_scale.load(Ordering::Acquire))
    }

    /// Sets the global time-scale. Negative or non-finite values clamp to 0.
    pub fn set_time_scale(&self, scale: f32) {
        let scale = if scale.is_finite() && scale >= 0.0 {
            scale
        } else {
            warn!(target: "clock", "Rejected time scale {}, using 0", scale);
            0.0
        };
        let previous = self.state.time_scale.swap(scale.to_bits(), Ordering::AcqRel);
        if f32::from_bits(previous) != scale {
            debug!(target: "clock", "Time scale {} → {}", f32::from_bits(previous), scale);
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.time_scale() == 0.0
    }

    //--- Timestamps -------------------------------------------------------

    /// Scaled seconds since start. Frozen while the scale is 0.
    pub fn time(&self) -> f64 {
        f64::from_bits(self.state.scaled_time.load(Ordering::Acquire))
    }

    /// Wall seconds since start, ignoring the scale.
    pub fn unscaled_time(&self) -> f64 {
        f64::from_bits(self.state.unscaled_time.load(Ordering::Acquire))
    }

    pub fn fixed_delta(&self) -> f32 {
        self.state.fixed_delta
    }

    //--- Advancing --------------------------------------------------------

    /// Advances by one frame of `dt` wall seconds and returns the scaled delta.
    ///
    /// Only the logic thread advances the clock; other clones read.
    pub fn advance(&self, dt: f32) -> f32 {
        let dt = dt.max(0.0);
        let scaled = dt * self.time_scale();

        add_f64(&self.state.unscaled_time, dt as f64);
        add_f64(&self.state.scaled_time, scaled as f64);

        scaled
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}

fn add_f64(cell: &AtomicU64, delta: f64) {
    let current = f64::from_bits(cell.load(Ordering::Acquire));
    cell.store((current + delta).to_bits(), Ordering::Release);
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running_at_zero() {
        let clock = SimulationClock::new();
        assert_eq!(clock.time_scale(), 1.0);
        assert_eq!(clock.time(), 0.0);
        assert_eq!(clock.fixed_delta(), DEFAULT_FIXED_DELTA);
        assert!(!clock.is_stopped());
    }

    #[test]
    fn clones_share_scale() {
        let clock = SimulationClock::new();
        let other = clock.clone();

        other.set_time_scale(0.0);
        assert!(clock.is_stopped());

        clock.set_time_scale(1.0);
        assert_eq!(other.time_scale(), 1.0);
    }

    #[test]
    fn advance_applies_scale() {
        let clock = SimulationClock::new();
        clock.set_time_scale(0.5);

        let scaled = clock.advance(0.2);

        assert!((scaled - 0.1).abs() < 1e-6);
        assert!((clock.time() - 0.1).abs() < 1e-6);
        assert!((clock.unscaled_time() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn invalid_scale_clamps_to_zero() {
        let clock = SimulationClock::new();
        clock.set_time_scale(-2.0);
        assert_eq!(clock.time_scale(), 0.0);

        clock.set_time_scale(f32::NAN);
        assert_eq!(clock.time_scale(), 0.0);
    }

    #[test]
    fn negative_dt_is_ignored() {
        let clock = SimulationClock::new();
        assert_eq!(clock.advance(-1.0), 0.0);
        assert_eq!(clock.unscaled_time(), 0.0);
    }

    #[test]
    #[should_panic(expected = "Fixed delta must be positive")]
    fn zero_fixed_delta_panics() {
        SimulationClock::with_fixed_delta(0.0);
    }
}
