use glam::Vec3;
use tween_engine::{
    Animator, EaseType, Entity, EntityId, FrameClock, MoveRequest, Scene,
    TweenConfig, TweenError, TweenId,
};

/// Owns the scene, the animator, and the frame clock, and wires them to the
/// browser's frame loop.
///
/// `lib.rs` keeps one of these in a `thread_local!` and exports free functions
/// via `#[wasm_bindgen]`; everything here is plain Rust and runs natively.
pub struct TweenRunner {
    scene: Scene,
    animator: Animator,
    clock: FrameClock,
    config: TweenConfig,
    next_id: u32,
    /// Flat `[id, x, y, z]` per entity, rebuilt every tick for shared-memory reads.
    position_buffer: Vec<f32>,
    /// Ids of tweens that ended during the last tick.
    finished_buffer: Vec<u32>,
}

impl TweenRunner {
    pub fn new(config: TweenConfig) -> Self {
        let clock = FrameClock::new(config.max_frame_delta);
        Self {
            scene: Scene::with_capacity(config.entity_capacity),
            animator: Animator::with_capacity(config.tween_capacity),
            clock,
            position_buffer: Vec::with_capacity(config.entity_capacity * 4),
            finished_buffer: Vec::new(),
            next_id: 1,
            config,
        }
    }

    /// Build a runner from a JSON config. An empty string means defaults.
    pub fn from_json(json: &str) -> Result<Self, TweenError> {
        if json.trim().is_empty() {
            return Ok(Self::new(TweenConfig::default()));
        }
        Ok(Self::new(TweenConfig::from_json(json)?))
    }

    /// Add an entity at `pos`. Returns its id.
    pub fn spawn(&mut self, pos: Vec3) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.scene.spawn(Entity::new(id).with_pos(pos));
        self.rebuild_positions();
        id
    }

    /// Remove an entity, cancelling its tweens first.
    pub fn despawn(&mut self, id: EntityId) -> bool {
        self.animator.cancel_entity(id);
        let removed = self.scene.despawn(id).is_some();
        self.rebuild_positions();
        removed
    }

    pub fn set_position(&mut self, id: EntityId, pos: Vec3) -> bool {
        let Some(entity) = self.scene.get_mut(id) else {
            return false;
        };
        entity.pos = pos;
        self.rebuild_positions();
        true
    }

    pub fn position(&self, id: EntityId) -> Option<Vec3> {
        self.scene.get(id).map(|e| e.pos)
    }

    pub fn move_to(
        &mut self,
        id: EntityId,
        begin: Vec3,
        end: Vec3,
        duration: f32,
        pingpong: bool,
    ) -> Result<TweenId, TweenError> {
        let handle = self.animator.move_to(&mut self.scene, id, begin, end, duration, pingpong)?;
        Ok(handle.id)
    }

    /// `ease` is the numeric tag from JS; unknown values mean Linear.
    pub fn move_with_ease(
        &mut self,
        id: EntityId,
        begin: Vec3,
        end: Vec3,
        duration: f32,
        pingpong: bool,
        ease: u32,
    ) -> Result<TweenId, TweenError> {
        let handle = self.animator.move_with_ease(
            &mut self.scene,
            id,
            begin,
            end,
            duration,
            pingpong,
            EaseType::from_index(ease),
        )?;
        Ok(handle.id)
    }

    /// Start a move from a JSON `MoveRequest`.
    pub fn start_json(&mut self, id: EntityId, json: &str) -> Result<TweenId, TweenError> {
        let request = MoveRequest::from_json(json)?;
        let handle = self.animator.start(&mut self.scene, id, &request)?;
        Ok(handle.id)
    }

    pub fn cancel(&mut self, tween: TweenId) -> bool {
        self.animator.cancel(tween)
    }

    pub fn cancel_entity(&mut self, id: EntityId) -> usize {
        self.animator.cancel_entity(id)
    }

    /// Run one frame from a `requestAnimationFrame` timestamp.
    pub fn frame(&mut self, now_ms: f64) -> usize {
        let dt = self.clock.tick_ms(now_ms);
        self.step(dt)
    }

    /// Run one frame with a host-measured delta in seconds.
    pub fn tick(&mut self, dt: f32) -> usize {
        let dt = self.clock.clamp(dt);
        self.step(dt)
    }

    fn step(&mut self, dt: f32) -> usize {
        let ended = self.animator.tick(dt, &mut self.scene);

        self.finished_buffer.clear();
        for finished in self.animator.drain_completed() {
            log::debug!("tween {:?} on {:?}: {:?}", finished.id, finished.entity, finished.status);
            self.finished_buffer.push(finished.id.0);
        }

        self.rebuild_positions();
        ended
    }

    fn rebuild_positions(&mut self) {
        self.position_buffer.clear();
        for entity in self.scene.iter() {
            self.position_buffer
                .extend_from_slice(&[entity.id.0 as f32, entity.pos.x, entity.pos.y, entity.pos.z]);
        }
    }

    // ---- Accessors for SharedArrayBuffer reads ----

    pub fn positions(&self) -> &[f32] {
        &self.position_buffer
    }

    pub fn positions_ptr(&self) -> *const f32 {
        self.position_buffer.as_ptr()
    }

    pub fn positions_len(&self) -> u32 {
        self.position_buffer.len() as u32
    }

    pub fn finished_ptr(&self) -> *const u32 {
        self.finished_buffer.as_ptr()
    }

    pub fn finished_len(&self) -> u32 {
        self.finished_buffer.len() as u32
    }

    pub fn active_tweens(&self) -> u32 {
        self.animator.len() as u32
    }

    pub fn config(&self) -> &TweenConfig {
        &self.config
    }
}
