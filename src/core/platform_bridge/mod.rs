//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the windowing backend and the logic thread.
//
// Components:
// - `interface`: messages and errors crossing the thread boundary
// - `event_collector`: logic-thread draining of those messages
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::PlatformEvent;
pub use interface::PlatformError;
