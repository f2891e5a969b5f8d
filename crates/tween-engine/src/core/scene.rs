use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// The objects tweens move, addressed by `EntityId`.
/// The animator resolves each id here once per tick. Counts stay in the
/// hundreds, so a linear scan over a flat Vec is enough.
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
        }
    }

    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Remove an entity. Order of the remaining entities is not kept.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.index_of(id)?;
        Some(self.entities.swap_remove(idx))
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.index_of(id).map(|idx| &self.entities[idx])
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        let idx = self.index_of(id)?;
        Some(&mut self.entities[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|e| e.id == id)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = EntityId(1);
        scene.spawn(Entity::new(id).with_pos(Vec3::new(10.0, 20.0, 30.0)));
        assert_eq!(scene.get(id).map(|e| e.pos), Some(Vec3::new(10.0, 20.0, 30.0)));
        assert!(scene.get(EntityId(2)).is_none());
    }

    #[test]
    fn get_mut_writes_through() {
        let mut scene = Scene::with_capacity(4);
        let id = EntityId(3);
        scene.spawn(Entity::new(id));
        scene.get_mut(id).unwrap().pos = Vec3::ONE;
        assert_eq!(scene.get(id).unwrap().pos, Vec3::ONE);
    }

    #[test]
    fn despawn_removes_entity() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)));
        scene.spawn(Entity::new(EntityId(2)));
        assert_eq!(scene.len(), 2);

        let removed = scene.despawn(EntityId(1)).unwrap();
        assert_eq!(removed.id, EntityId(1));
        assert_eq!(scene.len(), 1);
        assert!(scene.get(EntityId(2)).is_some());
        assert!(scene.despawn(EntityId(1)).is_none());
    }

    #[test]
    fn iter_visits_every_entity() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());
        for i in 0..3 {
            scene.spawn(Entity::new(EntityId(i)));
        }
        let ids: Vec<u32> = scene.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }
}
