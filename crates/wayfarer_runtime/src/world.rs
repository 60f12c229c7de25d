//! Stand-ins for the engine services the controller queries
//!
//! A flat floor for physics, a straight-down camera for aiming and a clip
//! timer that plays the part of the animator.

use wayfarer_math::{Ray, Vec2, Vec3};
use wayfarer_player::{AimCamera, AnimationCommand, AnimationTrigger, PhysicsWorld};

use crate::session_config::WorldConfig;

/// An infinite (or square) horizontal floor
#[derive(Debug, Clone, Copy)]
pub struct FlatGround {
    pub height: f32,
    pub half_extent: Option<f32>,
    pub layer: u32,
}

impl FlatGround {
    pub fn from_config(config: &WorldConfig) -> Self {
        Self {
            height: config.ground_height,
            half_extent: config.ground_half_extent,
            layer: config.ground_layer,
        }
    }

    /// Is there floor under this point
    pub fn covers(&self, point: Vec3) -> bool {
        match self.half_extent {
            Some(extent) => point.x.abs() <= extent && point.z.abs() <= extent,
            None => true,
        }
    }
}

impl PhysicsWorld for FlatGround {
    fn check_sphere(&self, center: Vec3, radius: f32, layer_mask: u32) -> bool {
        if layer_mask & self.layer == 0 || !self.covers(center) {
            return false;
        }
        // Small tolerance so a body resting on the floor reads as grounded
        (center.y - self.height).abs() <= radius + 0.001
    }

    fn sweep(&self, from: Vec3, delta: Vec3) -> Vec3 {
        let mut to = from + delta;
        if self.covers(to) && from.y >= self.height && to.y < self.height {
            to.y = self.height;
        }
        to
    }
}

/// Orthographic camera looking straight down.
///
/// Screen coordinates map directly to world X/Z.
#[derive(Debug, Clone, Copy)]
pub struct TopDownCamera {
    pub height: f32,
}

impl TopDownCamera {
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

impl AimCamera for TopDownCamera {
    fn screen_point_to_ray(&self, screen: Vec2) -> Ray {
        Ray::new(Vec3::new(screen.x, self.height, screen.y), Vec3::NEG_Y)
    }
}

/// Plays one-shot clips and reports when they end
#[derive(Debug, Clone)]
pub struct ClipTimer {
    clip_length: f32,
    remaining: Option<f32>,
    last_trigger: Option<AnimationTrigger>,
}

impl ClipTimer {
    pub fn new(clip_length: f32) -> Self {
        Self {
            clip_length,
            remaining: None,
            last_trigger: None,
        }
    }

    /// Feed an animator command. Only triggers start or stop clips.
    pub fn apply(&mut self, command: &AnimationCommand) {
        match *command {
            AnimationCommand::Blend { value, .. } => log::trace!("Move blend {:.2}", value),
            AnimationCommand::Jumping(_) => {}
            AnimationCommand::Trigger(trigger) => {
                log::debug!("Animator trigger {}", trigger.name());
                self.last_trigger = Some(trigger);
                match trigger {
                    AnimationTrigger::Attack | AnimationTrigger::Ability => {
                        self.remaining = Some(self.clip_length);
                    }
                    AnimationTrigger::Die => self.remaining = None,
                }
            }
        }
    }

    /// Advance the playing clip. Returns true on the frame it finishes.
    pub fn update(&mut self, delta_time: f32) -> bool {
        let Some(remaining) = self.remaining else {
            return false;
        };
        let remaining = remaining - delta_time;
        if remaining <= 0.0 {
            self.remaining = None;
            true
        } else {
            self.remaining = Some(remaining);
            false
        }
    }

    pub fn is_playing(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn last_trigger(&self) -> Option<AnimationTrigger> {
        self.last_trigger
    }
}
