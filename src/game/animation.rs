//=========================================================================
// Animation Parameters
//=========================================================================
//
// The locomotion controller drives a single blend-tree scalar. It writes
// named float parameters; whatever renders the character reads them.
//
//   "Blend"        value the blend tree samples this tick
//   "SmoothBlend"  the smoothed locomotion value behind it
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::trace;

//=== Parameter Names =====================================================

pub const BLEND: &str = "Blend";
pub const SMOOTH_BLEND: &str = "SmoothBlend";

//=== AnimationSink =======================================================

/// Receiver of named float animation parameters.
pub trait AnimationSink {
    fn set_float(&mut self, name: &str, value: f32);
}

//=== AnimatorParameters ==================================================

/// In-memory parameter table. Counts writes so callers can tell a
/// republished value from an untouched one.
#[derive(Debug, Clone, Default)]
pub struct AnimatorParameters {
    values: HashMap<String, f32>,
    writes: usize,
}

impl AnimatorParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<f32> {
        self.values.get(name).copied()
    }

    /// Total `set_float` calls received.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl AnimationSink for AnimatorParameters {
    fn set_float(&mut self, name: &str, value: f32) {
        trace!(target: "locomotion", "Animator {} = {}", name, value);
        self.writes += 1;
        self.values.insert(name.to_string(), value);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let mut params = AnimatorParameters::new();
        assert_eq!(params.get(BLEND), None);

        params.set_float(BLEND, 0.2);
        params.set_float(BLEND, 0.6);

        assert_eq!(params.get(BLEND), Some(0.6));
        assert_eq!(params.get(SMOOTH_BLEND), None);
        assert_eq!(params.writes(), 2);
    }
}
