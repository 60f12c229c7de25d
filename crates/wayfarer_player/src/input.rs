//! Per-frame player input

use wayfarer_math::Vec2;

/// Input sampled for one simulation step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Vertical axis: negative runs forward, positive runs backward
    pub forward: f32,
    /// Horizontal axis: positive strafes right, negative strafes left
    pub strafe: f32,
    /// Jump went down this frame
    pub jump_pressed: bool,
    /// Fire went down this frame
    pub fire_pressed: bool,
    /// Pointer position in screen space
    pub pointer: Vec2,
}

impl FrameInput {
    /// No input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the vertical axis
    pub fn with_forward(mut self, forward: f32) -> Self {
        self.forward = forward;
        self
    }

    /// Set the horizontal axis
    pub fn with_strafe(mut self, strafe: f32) -> Self {
        self.strafe = strafe;
        self
    }

    /// Press jump
    pub fn with_jump(mut self) -> Self {
        self.jump_pressed = true;
        self
    }

    /// Press fire
    pub fn with_fire(mut self) -> Self {
        self.fire_pressed = true;
        self
    }

    /// Set the pointer position
    pub fn with_pointer(mut self, x: f32, y: f32) -> Self {
        self.pointer = Vec2::new(x, y);
        self
    }
}
