//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// The messages and errors shared by the platform and logic threads.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from the platform thread to the logic thread.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Input buffered since the previous redraw.
    Inputs {
        discrete: Vec<InputEvent>,
        continuous: Vec<InputEvent>,
    },

    /// The window lost keyboard focus; held keys will not report release.
    FocusLost,

    /// Window close requested.
    WindowClosed,
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
#[derive(Debug)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    EventLoopCreation(String),

    /// Event loop execution error.
    EventLoopExecution(String),

    /// The OS refused to create the window.
    WindowCreation(String),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
            Self::WindowCreation(e) => write!(f, "Window creation failed: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_failure() {
        let error = PlatformError::WindowCreation("no display".into());
        assert_eq!(error.to_string(), "Window creation failed: no display");

        let error = PlatformError::EventLoopCreation("busy".into());
        assert!(error.to_string().starts_with("Event loop creation failed"));
    }
}
