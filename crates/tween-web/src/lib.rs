pub mod runner;

pub use runner::TweenRunner;

use std::cell::RefCell;
use glam::Vec3;
use wasm_bindgen::prelude::*;
use tween_engine::{EntityId, TweenError, TweenId};

thread_local! {
    static RUNNER: RefCell<Option<TweenRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut TweenRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Tweens not initialized. Call tween_init() first.");
        f(runner)
    })
}

fn to_js(err: TweenError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Install logging and create the runner. `config_json` may be empty.
#[wasm_bindgen]
pub fn tween_init(config_json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = TweenRunner::from_json(config_json).map_err(to_js)?;
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    log::info!("tween-web: initialized");
    Ok(())
}

// ---- Entities ----

#[wasm_bindgen]
pub fn tween_spawn(x: f32, y: f32, z: f32) -> u32 {
    with_runner(|r| r.spawn(Vec3::new(x, y, z)).0)
}

#[wasm_bindgen]
pub fn tween_despawn(entity: u32) -> bool {
    with_runner(|r| r.despawn(EntityId(entity)))
}

#[wasm_bindgen]
pub fn tween_set_position(entity: u32, x: f32, y: f32, z: f32) -> bool {
    with_runner(|r| r.set_position(EntityId(entity), Vec3::new(x, y, z)))
}

// ---- Moves ----

#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn tween_move_to(
    entity: u32,
    bx: f32,
    by: f32,
    bz: f32,
    ex: f32,
    ey: f32,
    ez: f32,
    duration: f32,
    pingpong: bool,
) -> Result<u32, JsValue> {
    with_runner(|r| {
        r.move_to(
            EntityId(entity),
            Vec3::new(bx, by, bz),
            Vec3::new(ex, ey, ez),
            duration,
            pingpong,
        )
    })
    .map(|id| id.0)
    .map_err(to_js)
}

/// `ease`: 0 Linear, 1 EaseIn, 2 EaseOut, 3 EaseInOut. Anything else is Linear.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn tween_move_with_ease(
    entity: u32,
    bx: f32,
    by: f32,
    bz: f32,
    ex: f32,
    ey: f32,
    ez: f32,
    duration: f32,
    pingpong: bool,
    ease: u32,
) -> Result<u32, JsValue> {
    with_runner(|r| {
        r.move_with_ease(
            EntityId(entity),
            Vec3::new(bx, by, bz),
            Vec3::new(ex, ey, ez),
            duration,
            pingpong,
            ease,
        )
    })
    .map(|id| id.0)
    .map_err(to_js)
}

#[wasm_bindgen]
pub fn tween_start_json(entity: u32, request_json: &str) -> Result<u32, JsValue> {
    with_runner(|r| r.start_json(EntityId(entity), request_json))
        .map(|id| id.0)
        .map_err(to_js)
}

#[wasm_bindgen]
pub fn tween_cancel(tween: u32) -> bool {
    with_runner(|r| r.cancel(TweenId(tween)))
}

#[wasm_bindgen]
pub fn tween_cancel_entity(entity: u32) -> u32 {
    with_runner(|r| r.cancel_entity(EntityId(entity)) as u32)
}

// ---- Frame loop ----

/// Call from `requestAnimationFrame` with its timestamp.
#[wasm_bindgen]
pub fn tween_frame(now_ms: f64) -> u32 {
    with_runner(|r| r.frame(now_ms) as u32)
}

#[wasm_bindgen]
pub fn tween_tick(dt: f32) -> u32 {
    with_runner(|r| r.tick(dt) as u32)
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn tween_position(entity: u32) -> Option<Vec<f32>> {
    with_runner(|r| r.position(EntityId(entity)).map(|p| p.to_array().to_vec()))
}

/// Copy of the `[id, x, y, z]` buffer.
#[wasm_bindgen]
pub fn tween_positions() -> js_sys::Float32Array {
    with_runner(|r| js_sys::Float32Array::from(r.positions()))
}

#[wasm_bindgen]
pub fn get_positions_ptr() -> *const f32 {
    with_runner(|r| r.positions_ptr())
}

#[wasm_bindgen]
pub fn get_positions_len() -> u32 {
    with_runner(|r| r.positions_len())
}

#[wasm_bindgen]
pub fn get_finished_ptr() -> *const u32 {
    with_runner(|r| r.finished_ptr())
}

#[wasm_bindgen]
pub fn get_finished_len() -> u32 {
    with_runner(|r| r.finished_len())
}

#[wasm_bindgen]
pub fn get_active_tweens() -> u32 {
    with_runner(|r| r.active_tweens())
}
