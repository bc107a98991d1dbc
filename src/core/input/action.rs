//=========================================================================
// Action Trait & Input Context
//=========================================================================
//
// Game-defined action identifiers and the binding contexts they live in.
//
// Actions: opaque to the engine, interpreted by gameplay code
//          (the platformer uses `ControlAction`).
// Contexts: separate binding tables for gameplay and menus.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Action Trait ========================================================

/// Marker trait for game-defined action enums.
///
/// The engine maps keys and buttons to these values and answers
/// "pressed this frame" / "held" queries about them.
///
/// # Example
///
/// ```
/// use sidescroll_engine::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum MenuAction { Confirm, Back }
///
/// impl Action for MenuAction {}
/// ```
pub trait Action: 'static + Send + Copy + Eq + Hash + Debug {}

//=== InputContext ========================================================

/// Which binding table is active.
///
/// ```
/// # use sidescroll_engine::prelude::*;
/// const GAMEPLAY: InputContext = InputContext::Primary;
/// const PAUSE_MENU: InputContext = InputContext::custom(0);
/// assert_ne!(GAMEPLAY, PAUSE_MENU);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputContext {
    /// Default context for gameplay.
    #[default]
    Primary,

    /// User-defined context (menus, dialogue, cutscenes).
    Custom(u32),
}

impl InputContext {
    #[inline]
    pub const fn custom(id: u32) -> Self {
        Self::Custom(id)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn primary_is_default() {
        assert_eq!(InputContext::default(), InputContext::Primary);
    }

    #[test]
    fn primary_differs_from_custom_zero() {
        assert_ne!(InputContext::Primary, InputContext::custom(0));
    }

    #[test]
    fn contexts_hash_uniquely() {
        let contexts: HashSet<_> = (0..16).map(InputContext::custom).collect();
        assert_eq!(contexts.len(), 16);
    }
}
