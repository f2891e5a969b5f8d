// tween/animator.rs
//
// Animator — runs move sequences against scene entities, addressed by EntityId.
// Holds ids, never entities: the scene stays owned by the host.
//
// Usage:
//   let mut animator = Animator::new();
//   let handle = animator.move_with_ease(&mut scene, id, from, to, 1.0, true, EaseType::EaseInOut)?;
//   animator.tick(dt, &mut scene);  // once per frame
//   handle.cancel();                // or animator.cancel(handle.id)

use std::collections::HashMap;
use glam::Vec3;
use crate::api::error::TweenError;
use crate::api::types::{EntityId, TweenId};
use crate::core::scene::Scene;
use super::easing::EaseType;
use super::sequence::{CancelToken, LoopMode, Sequence, SequenceState, TaskStatus};
use super::task::MoveRequest;

/// Returned when a move starts. Cancelling the token stops the move on the
/// next tick, before it writes anything.
#[derive(Debug, Clone)]
pub struct TweenHandle {
    pub id: TweenId,
    pub entity: EntityId,
    token: CancelToken,
}

impl TweenHandle {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// A finished sequence, reported through `drain_completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finished {
    pub id: TweenId,
    pub entity: EntityId,
    pub status: TaskStatus,
}

/// Manages all active move sequences.
#[derive(Debug, Default)]
pub struct Animator {
    tweens: HashMap<TweenId, (EntityId, Sequence)>,
    next_id: u32,
    /// Sequences that ended since the last drain.
    finished: Vec<Finished>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tweens: HashMap::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Linear move of `entity`. Same as `move_with_ease(.., EaseType::Linear)`.
    pub fn move_to(
        &mut self,
        scene: &mut Scene,
        entity: EntityId,
        begin: Vec3,
        end: Vec3,
        duration: f32,
        pingpong: bool,
    ) -> Result<TweenHandle, TweenError> {
        self.move_with_ease(scene, entity, begin, end, duration, pingpong, EaseType::Linear)
    }

    /// Start moving `entity`. Its first frame (position = `begin`) is applied
    /// immediately.
    #[allow(clippy::too_many_arguments)]
    pub fn move_with_ease(
        &mut self,
        scene: &mut Scene,
        entity: EntityId,
        begin: Vec3,
        end: Vec3,
        duration: f32,
        pingpong: bool,
        easing: EaseType,
    ) -> Result<TweenHandle, TweenError> {
        let sequence = Sequence::new(begin, end, duration, LoopMode::from_pingpong(pingpong), easing);
        self.add(scene, entity, sequence)
    }

    /// Start a move described by a `MoveRequest`.
    pub fn start(
        &mut self,
        scene: &mut Scene,
        entity: EntityId,
        request: &MoveRequest,
    ) -> Result<TweenHandle, TweenError> {
        self.add(scene, entity, request.to_sequence())
    }

    /// Register an unstarted sequence and drive its first frame.
    pub fn add(
        &mut self,
        scene: &mut Scene,
        entity: EntityId,
        mut sequence: Sequence,
    ) -> Result<TweenHandle, TweenError> {
        let target = scene
            .get_mut(entity)
            .ok_or(TweenError::UnknownEntity(entity))?;

        let id = TweenId(self.next_id);
        self.next_id += 1;

        let token = sequence.cancel_token();
        let status = sequence.start(target);
        log::debug!("tween {:?} started on {:?} ({:?})", id, entity, sequence.loop_mode());

        if status.is_running() {
            self.tweens.insert(id, (entity, sequence));
        } else {
            self.finished.push(Finished { id, entity, status });
        }

        Ok(TweenHandle { id, entity, token })
    }

    /// Stop a sequence now. Returns false if it was not running.
    pub fn cancel(&mut self, id: TweenId) -> bool {
        match self.tweens.remove(&id) {
            Some((entity, mut sequence)) => {
                sequence.cancel();
                self.finished.push(Finished { id, entity, status: TaskStatus::Cancelled });
                true
            }
            None => false,
        }
    }

    /// Stop every sequence moving `entity`.
    pub fn cancel_entity(&mut self, entity: EntityId) -> usize {
        let ids: Vec<TweenId> = self
            .tweens
            .iter()
            .filter(|(_, (e, _))| *e == entity)
            .map(|(&id, _)| id)
            .collect();
        for &id in &ids {
            self.cancel(id);
        }
        ids.len()
    }

    /// Advance all sequences by one frame and apply them to the scene.
    /// Returns the number of sequences that ended this tick.
    pub fn tick(&mut self, dt: f32, scene: &mut Scene) -> usize {
        let mut ended = Vec::new();

        for (&id, (entity_id, sequence)) in self.tweens.iter_mut() {
            if sequence.cancel_requested() {
                sequence.cancel();
                ended.push((id, TaskStatus::Cancelled));
                continue;
            }

            let Some(entity) = scene.get_mut(*entity_id) else {
                log::warn!("tween {:?}: entity {:?} left the scene, dropping", id, entity_id);
                sequence.cancel();
                ended.push((id, TaskStatus::Cancelled));
                continue;
            };

            if !entity.active {
                continue;
            }

            let status = sequence.resume(entity, dt);
            if !status.is_running() {
                ended.push((id, status));
            }
        }

        let count = ended.len();
        for (id, status) in ended {
            if let Some((entity, _)) = self.tweens.remove(&id) {
                self.finished.push(Finished { id, entity, status });
            }
        }

        count
    }

    /// Drain sequences that completed or were cancelled.
    pub fn drain_completed(&mut self) -> impl Iterator<Item = Finished> + '_ {
        self.finished.drain(..)
    }

    pub fn is_running(&self, id: TweenId) -> bool {
        self.tweens.contains_key(&id)
    }

    /// Direction of a running sequence.
    pub fn state(&self, id: TweenId) -> Option<SequenceState> {
        self.tweens.get(&id).map(|(_, s)| s.state())
    }

    /// Number of active sequences.
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    /// Whether there are no active sequences.
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Drop all sequences without reporting them.
    pub fn clear(&mut self) {
        self.tweens.clear();
        self.finished.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Entity;

    fn scene_with(id: EntityId) -> Scene {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(id).with_pos(Vec3::splat(-1.0)));
        scene
    }

    #[test]
    fn single_shot_move() {
        let id = EntityId(1);
        let mut scene = scene_with(id);
        let mut animator = Animator::new();

        let handle = animator
            .move_to(&mut scene, id, Vec3::ZERO, Vec3::new(100.0, 0.0, 0.0), 1.0, false)
            .unwrap();
        assert_eq!(scene.get(id).unwrap().pos, Vec3::ZERO);

        // Tick halfway
        assert_eq!(animator.tick(0.5, &mut scene), 0);
        let e = scene.get(id).unwrap();
        assert!((e.pos.x - 50.0).abs() < 0.01);

        // Tick to completion
        assert_eq!(animator.tick(0.5, &mut scene), 1);
        assert_eq!(scene.get(id).unwrap().pos, Vec3::new(100.0, 0.0, 0.0));

        assert!(animator.is_empty());
        assert!(!animator.is_running(handle.id));
        let finished: Vec<_> = animator.drain_completed().collect();
        assert_eq!(
            finished,
            vec![Finished { id: handle.id, entity: id, status: TaskStatus::Completed }]
        );
    }

    #[test]
    fn ping_pong_keeps_running() {
        let id = EntityId(1);
        let mut scene = scene_with(id);
        let mut animator = Animator::new();

        let handle = animator
            .move_to(&mut scene, id, Vec3::ZERO, Vec3::new(100.0, 0.0, 0.0), 1.0, true)
            .unwrap();

        // Go to end
        animator.tick(1.0, &mut scene);
        assert_eq!(scene.get(id).unwrap().pos.x, 100.0);
        assert_eq!(animator.state(handle.id), Some(SequenceState::Backward));

        // Backward starts, then returns to begin
        animator.tick(0.016, &mut scene);
        animator.tick(1.0, &mut scene);
        assert_eq!(scene.get(id).unwrap().pos.x, 0.0);
        assert_eq!(animator.state(handle.id), Some(SequenceState::Forward));
        assert_eq!(animator.len(), 1);
    }

    #[test]
    fn handle_cancel_freezes_position() {
        let id = EntityId(1);
        let mut scene = scene_with(id);
        let mut animator = Animator::new();

        let handle = animator
            .move_with_ease(&mut scene, id, Vec3::ZERO, Vec3::ONE, 1.0, true, EaseType::EaseOut)
            .unwrap();
        animator.tick(0.3, &mut scene);
        let held = scene.get(id).unwrap().pos;

        handle.cancel();
        assert!(handle.is_cancelled());
        assert_eq!(animator.tick(0.3, &mut scene), 1);
        animator.tick(0.3, &mut scene);

        assert_eq!(scene.get(id).unwrap().pos, held);
        assert!(animator.is_empty());
        let finished: Vec<_> = animator.drain_completed().collect();
        assert_eq!(finished[0].status, TaskStatus::Cancelled);
    }

    #[test]
    fn cancel_by_id_and_entity() {
        let a = EntityId(1);
        let b = EntityId(2);
        let mut scene = scene_with(a);
        scene.spawn(Entity::new(b));
        let mut animator = Animator::new();

        let first = animator.move_to(&mut scene, a, Vec3::ZERO, Vec3::X, 1.0, true).unwrap();
        animator.move_to(&mut scene, b, Vec3::ZERO, Vec3::Y, 1.0, true).unwrap();
        animator.move_to(&mut scene, b, Vec3::ZERO, Vec3::Z, 1.0, true).unwrap();

        assert!(animator.cancel(first.id));
        assert!(!animator.cancel(first.id));
        assert_eq!(animator.cancel_entity(b), 2);
        assert!(animator.is_empty());
        assert_eq!(animator.drain_completed().count(), 3);
    }

    #[test]
    fn unknown_entity_is_an_error() {
        let mut scene = Scene::new();
        let mut animator = Animator::new();
        let err = animator
            .move_to(&mut scene, EntityId(9), Vec3::ZERO, Vec3::ONE, 1.0, false)
            .unwrap_err();
        assert!(matches!(err, TweenError::UnknownEntity(EntityId(9))));
        assert!(animator.is_empty());
    }

    #[test]
    fn despawned_entity_drops_its_tween() {
        let id = EntityId(1);
        let mut scene = scene_with(id);
        let mut animator = Animator::new();

        animator.move_to(&mut scene, id, Vec3::ZERO, Vec3::ONE, 1.0, true).unwrap();
        scene.despawn(id);
        assert_eq!(animator.tick(0.1, &mut scene), 1);
        assert!(animator.is_empty());
    }

    #[test]
    fn inactive_entity_is_paused() {
        let id = EntityId(1);
        let mut animator = Animator::new();

        let mut scene = Scene::new();
        scene.spawn(Entity::new(id).inactive());
        animator.move_to(&mut scene, id, Vec3::ZERO, Vec3::ONE, 1.0, false).unwrap();
        animator.tick(0.5, &mut scene);
        assert_eq!(scene.get(id).unwrap().pos, Vec3::ZERO);

        scene.get_mut(id).unwrap().active = true;
        animator.tick(0.5, &mut scene);
        assert_eq!(scene.get(id).unwrap().pos, Vec3::splat(0.5));
    }

    #[test]
    fn zero_duration_finishes_at_start() {
        let id = EntityId(1);
        let mut scene = scene_with(id);
        let mut animator = Animator::new();

        let request = MoveRequest::new(Vec3::ZERO, Vec3::splat(4.0), 0.0);
        let handle = animator.start(&mut scene, id, &request).unwrap();

        assert_eq!(scene.get(id).unwrap().pos, Vec3::splat(4.0));
        assert!(!animator.is_running(handle.id));
        let finished: Vec<_> = animator.drain_completed().collect();
        assert_eq!(finished[0].status, TaskStatus::Completed);
    }

    #[test]
    fn clear_removes_everything() {
        let id = EntityId(1);
        let mut scene = scene_with(id);
        let mut animator = Animator::with_capacity(8);
        animator.move_to(&mut scene, id, Vec3::ZERO, Vec3::ONE, 1.0, true).unwrap();
        animator.clear();
        assert!(animator.is_empty());
        assert_eq!(animator.drain_completed().count(), 0);
    }
}
