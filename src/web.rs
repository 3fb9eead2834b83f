//! WebAssembly bindings
//!
//! Exposes `PingPongScene` to a JavaScript host engine. Coordinates cross
//! the boundary as small unsigned integers; positions come back packed in a
//! two-element array.

use wasm_bindgen::prelude::*;

use crate::scene::PingPongScene;
use crate::settings::Settings;

/// Install the panic hook and console logger
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("Logger already initialised"));
    }
}

/// Ping-pong scene handle for JavaScript
#[wasm_bindgen]
pub struct PingPong {
    scene: PingPongScene,
}

#[wasm_bindgen]
impl PingPong {
    /// Create a scene using settings from LocalStorage (or defaults)
    #[wasm_bindgen(constructor)]
    pub fn new() -> PingPong {
        PingPong {
            scene: PingPongScene::new(Settings::load()),
        }
    }

    /// Replace settings, persisting them when valid. Fails if validation or
    /// LocalStorage fails; the scene keeps its old settings in that case.
    pub fn configure(
        &mut self,
        ball_speed: u8,
        max_paddle_angle: u8,
        paddle_width: u8,
    ) -> Result<(), JsError> {
        let settings = Settings {
            ball_speed,
            max_paddle_angle,
            paddle_width,
        };
        settings.validate()?;
        settings.save()?;
        self.scene.set_settings(settings);
        Ok(())
    }

    pub fn init(&mut self, x: u8, y: u8, angle: u16) {
        self.scene.init(x, y, angle);
    }

    /// Advance one frame; returns `[x, y]`
    pub fn update(&mut self) -> Vec<u8> {
        let (x, y) = self.scene.update();
        vec![x, y]
    }

    #[wasm_bindgen(js_name = reflectHorizontal)]
    pub fn reflect_horizontal(&mut self) {
        self.scene.reflect_horizontal();
    }

    #[wasm_bindgen(js_name = reflectVertical)]
    pub fn reflect_vertical(&mut self) {
        self.scene.reflect_vertical();
    }

    #[wasm_bindgen(js_name = paddleReflect)]
    pub fn paddle_reflect(&mut self, paddle_x: u8, paddle_y: u8) -> bool {
        self.scene.paddle_reflect(paddle_x, paddle_y)
    }

    #[wasm_bindgen(js_name = setActive)]
    pub fn set_active(&mut self, active: bool) {
        self.scene.set_active(active);
    }

    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.scene.is_active()
    }

    #[wasm_bindgen(js_name = onSceneEnter)]
    pub fn on_scene_enter(&mut self) {
        self.scene.on_scene_enter();
    }

    #[wasm_bindgen(js_name = onSceneTick)]
    pub fn on_scene_tick(&mut self) {
        self.scene.on_scene_tick();
    }
}

impl Default for PingPong {
    fn default() -> Self {
        Self::new()
    }
}
