use glam::Vec3;
use crate::api::types::EntityId;
use crate::tween::target::Positioned;

/// Minimal scene object: an id and a world-space position.
/// Rendering and behavior live in the host; the engine only moves things.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    /// Inactive entities keep their tweens but are not advanced.
    pub active: bool,
    pub pos: Vec3,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            active: true,
            pos: Vec3::ZERO,
        }
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

impl Positioned for Entity {
    fn position(&self) -> Vec3 {
        self.pos
    }

    fn set_position(&mut self, pos: Vec3) {
        self.pos = pos;
    }
}
