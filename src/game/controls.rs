//=========================================================================
// Controls
//=========================================================================
//
// The platformer's actions, their default bindings, and the narrow input
// view the controllers read.
//
//   Pause      Escape
//   Jump       Space
//   Run        ShiftLeft (held)
//   MoveLeft   ArrowLeft / A   ─┐
//   MoveRight  ArrowRight / D  ─┴─ "Horizontal" axis
//   Attack     Mouse Left / F
//   Restart    R   (honoured while paused)
//   Quit       Q   (honoured while paused)
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::{Action, AxisId, AxisSettings, InputSystem, KeyCode, MouseButton};

//=== ControlAction =======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlAction {
    Pause,
    Jump,
    Run,
    MoveLeft,
    MoveRight,
    Attack,
    Restart,
    Quit,
}

impl Action for ControlAction {}

/// Installs the default key/mouse bindings and the horizontal axis.
pub fn install_default_bindings(input: &mut InputSystem<ControlAction>) {
    use ControlAction::*;

    input.bind_key(KeyCode::Escape, Pause);
    input.bind_key(KeyCode::Space, Jump);
    input.bind_key(KeyCode::ShiftLeft, Run);
    input.bind_key(KeyCode::ArrowLeft, MoveLeft);
    input.bind_key(KeyCode::KeyA, MoveLeft);
    input.bind_key(KeyCode::ArrowRight, MoveRight);
    input.bind_key(KeyCode::KeyD, MoveRight);
    input.bind_mouse(MouseButton::Left, Attack);
    input.bind_key(KeyCode::KeyF, Attack);
    input.bind_key(KeyCode::KeyR, Restart);
    input.bind_key(KeyCode::KeyQ, Quit);

    input.register_axis(AxisId::HORIZONTAL, MoveLeft, MoveRight, AxisSettings::default());
}

//=== ControlInput ========================================================

/// Input as the gameplay controllers see it.
pub trait ControlInput {
    /// Went down this frame.
    fn pressed(&self, action: ControlAction) -> bool;
    fn held(&self, action: ControlAction) -> bool;
    fn axis(&self, id: AxisId) -> f32;
}

impl ControlInput for InputSystem<ControlAction> {
    fn pressed(&self, action: ControlAction) -> bool {
        self.action_pressed(action)
    }

    fn held(&self, action: ControlAction) -> bool {
        self.action_down(action)
    }

    fn axis(&self, id: AxisId) -> f32 {
        InputSystem::axis(self, id)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
