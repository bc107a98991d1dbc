//=========================================================================
// Event Collector
//=========================================================================
//
// Logic-thread side of the platform channel.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → batches + focus flag → TickControl
//
// Polling is bounded per frame so a flood of input cannot starve the
// simulation; leftovers are picked up next frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::event::InputEvent;

//=== Constants ===========================================================

const MAX_EVENTS_PER_FRAME: usize = 100;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    input_batches: Vec<Vec<InputEvent>>,
    focus_lost: bool,
}

impl EventCollector {
    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            input_batches: Vec::with_capacity(4),
            focus_lost: false,
        }
    }

    /// Drains pending platform events for one frame without blocking.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.input_batches.clear();
        self.focus_lost = false;

        let mut drained = 0;
        while drained < MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::WindowClosed) => return TickControl::Exit,
                Ok(event) => {
                    self.handle_event(event);
                    drained += 1;
                }
                Err(TryRecvError::Disconnected) => {
                    debug!(target: "platform", "Platform channel disconnected");
                    return TickControl::Exit;
                }
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= MAX_EVENTS_PER_FRAME {
            warn!(target: "platform", "Event queue backlog: drained {} events this frame", drained);
        }

        TickControl::Continue
    }

    pub(crate) fn batches(&self) -> &[Vec<InputEvent>] {
        &self.input_batches
    }

    /// `true` if the window lost focus since the previous frame.
    pub(crate) fn focus_lost(&self) -> bool {
        self.focus_lost
    }

    fn handle_event(&mut self, event: PlatformEvent) {
        match event {
            PlatformEvent::Inputs { discrete, continuous } => {
                if !discrete.is_empty() {
                    self.input_batches.push(discrete);
                }
                if !continuous.is_empty() {
                    self.input_batches.push(continuous);
                }
            }
            PlatformEvent::FocusLost => self.focus_lost = true,
            PlatformEvent::WindowClosed => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
