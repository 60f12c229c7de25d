//! Locomotion states and the animation blend parameter

use wayfarer_math::damp;

/// Directional locomotion chosen from the input axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locomotion {
    #[default]
    Idle,
    Forward,
    Backward,
    StrafeRight,
    StrafeLeft,
}

impl Locomotion {
    /// Pick a state from the axes. The first matching axis wins:
    /// forward, backward, strafe right, strafe left.
    pub fn from_axes(forward: f32, strafe: f32) -> Self {
        if forward < 0.0 {
            Locomotion::Forward
        } else if forward > 0.0 {
            Locomotion::Backward
        } else if strafe > 0.0 {
            Locomotion::StrafeRight
        } else if strafe < 0.0 {
            Locomotion::StrafeLeft
        } else {
            Locomotion::Idle
        }
    }

    /// Blend-tree position of this state
    pub fn blend_target(self) -> f32 {
        match self {
            Locomotion::Idle => 0.0,
            Locomotion::Forward => 0.25,
            Locomotion::Backward => 0.5,
            Locomotion::StrafeRight => 0.75,
            Locomotion::StrafeLeft => 1.0,
        }
    }

    pub fn is_moving(self) -> bool {
        self != Locomotion::Idle
    }
}

/// Float animator parameter damped toward its target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendParameter {
    value: f32,
    damp_time: f32,
}

impl BlendParameter {
    pub fn new(damp_time: f32) -> Self {
        Self { value: 0.0, damp_time }
    }

    /// Current damped value
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Step toward `target`, returning the new value
    pub fn advance(&mut self, target: f32, delta_time: f32) -> f32 {
        self.value = damp(self.value, target, self.damp_time, delta_time);
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_priority() {
        assert_eq!(Locomotion::from_axes(-1.0, 1.0), Locomotion::Forward);
        assert_eq!(Locomotion::from_axes(0.5, -1.0), Locomotion::Backward);
        assert_eq!(Locomotion::from_axes(0.0, 1.0), Locomotion::StrafeRight);
        assert_eq!(Locomotion::from_axes(0.0, -0.2), Locomotion::StrafeLeft);
        assert_eq!(Locomotion::from_axes(0.0, 0.0), Locomotion::Idle);
    }

    #[test]
    fn test_blend_targets() {
        assert_eq!(Locomotion::Idle.blend_target(), 0.0);
        assert_eq!(Locomotion::Forward.blend_target(), 0.25);
        assert_eq!(Locomotion::Backward.blend_target(), 0.5);
        assert_eq!(Locomotion::StrafeRight.blend_target(), 0.75);
        assert_eq!(Locomotion::StrafeLeft.blend_target(), 1.0);
    }

    #[test]
    fn test_blend_is_smoothed() {
        let mut blend = BlendParameter::new(0.1);
        let first = blend.advance(1.0, 0.02);
        assert!(first > 0.0 && first < 1.0);
        for _ in 0..100 {
            blend.advance(1.0, 0.02);
        }
        assert!((blend.value() - 1.0).abs() < 1e-3);
    }
}
