//=========================================================================
// Input Buffer
//=========================================================================
//
// Per-redraw staging area for input on the platform thread.
//
//   discrete:   key / button transitions, order preserved
//   continuous: latest cursor position only
//
// Drained once per RedrawRequested and sent as one PlatformEvent.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    continuous: HashSet<InputEvent>,
}

impl InputBuffer {
    pub(crate) fn new() -> Self {
        Self {
            discrete: Vec::with_capacity(32),
            continuous: HashSet::with_capacity(4),
        }
    }

    /// Appends a transition, dropping an immediate duplicate.
    pub(crate) fn push_discrete(&mut self, event: InputEvent) {
        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    /// Stores a continuous sample; a newer sample of the same kind replaces it.
    pub(crate) fn push_continuous(&mut self, event: InputEvent) {
        self.continuous.replace(event);
    }

    /// Takes everything buffered, or `None` when nothing arrived.
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }
        let discrete = std::mem::replace(&mut self.discrete, Vec::with_capacity(32));
        let continuous = self.continuous.drain().collect();
        Some((discrete, continuous))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.continuous.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
