//! Overlap events

use crate::entity::EntityId;

/// Type of overlap event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlapEventType {
    /// Subject entered the entity's trigger sphere
    Enter,
    /// Subject left the entity's trigger sphere
    Exit,
}

/// An overlap between the subject (the player) and a world entity
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapEvent {
    /// Type of event
    pub event_type: OverlapEventType,
    /// The world entity that was touched
    pub entity: EntityId,
    /// The moving subject
    pub subject: EntityId,
    /// Simulation time of the event
    pub time: f32,
}

impl OverlapEvent {
    /// Create an enter event
    pub fn enter(entity: EntityId, subject: EntityId, time: f32) -> Self {
        Self {
            event_type: OverlapEventType::Enter,
            entity,
            subject,
            time,
        }
    }

    /// Create an exit event
    pub fn exit(entity: EntityId, subject: EntityId, time: f32) -> Self {
        Self {
            event_type: OverlapEventType::Exit,
            entity,
            subject,
            time,
        }
    }

    /// Check if this is an enter event
    pub fn is_enter(&self) -> bool {
        self.event_type == OverlapEventType::Enter
    }

    /// Check if this is an exit event
    pub fn is_exit(&self) -> bool {
        self.event_type == OverlapEventType::Exit
    }
}
