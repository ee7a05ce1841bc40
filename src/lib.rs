use wasm_bindgen::prelude::*;

pub mod animation;
pub mod app;
pub mod data;
pub mod entities;
pub mod error;
pub mod interaction;
pub mod logging;
pub mod math;

pub use app::Greeting;
pub use error::SceneError;

use data::SceneConfig;
use math::{Mat4, Vec3};

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    logging::init(log::LevelFilter::Info);
}

/// Change the console log level ("error", "warn", "info", "debug", "trace")
#[wasm_bindgen]
pub fn set_log_level(level: &str) {
    log::set_max_level(logging::parse_level(level));
}

/// Engine state exposed to JavaScript
///
/// The host calls `tick` once per animation frame, then pulls the pose
/// buffers for that frame. Input events map onto `toggle`, `pick`/`pick_at`
/// and `edit_photo`.
#[wasm_bindgen]
pub struct HolidayTree {
    greeting: Greeting,
}

#[wasm_bindgen]
impl HolidayTree {
    /// Create a scene with the default layout and photos
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<HolidayTree, JsValue> {
        let greeting = Greeting::new(&SceneConfig::default()).map_err(to_js)?;
        Ok(Self { greeting })
    }

    /// Create a scene from a YAML configuration string
    #[wasm_bindgen]
    pub fn from_yaml(yaml: &str) -> Result<HolidayTree, JsValue> {
        let greeting = Greeting::from_yaml(yaml).map_err(to_js)?;
        Ok(Self { greeting })
    }

    /// Advance the transition by `dt` seconds; returns the new progress
    #[wasm_bindgen]
    pub fn tick(&mut self, dt: f32) -> f32 {
        self.greeting.tick(dt)
    }

    /// Flip between scattered and assembled; returns true when now formed
    #[wasm_bindgen]
    pub fn toggle(&mut self) -> bool {
        self.greeting.toggle() == animation::TransitionState::Formed
    }

    /// Focus a photo panel by id, or clear focus with `undefined`
    #[wasm_bindgen]
    pub fn pick(&mut self, id: Option<u32>) -> Option<u32> {
        self.greeting.pick(id).id()
    }

    /// Pick by pointer position using the host camera's matrices
    /// (column-major, 16 floats each). Returns the focused photo id.
    #[wasm_bindgen]
    #[allow(clippy::too_many_arguments)]
    pub fn pick_at(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        view: &[f32],
        projection: &[f32],
        camera_x: f32,
        camera_y: f32,
        camera_z: f32,
    ) -> Result<Option<u32>, JsValue> {
        let view = Mat4::from_slice(view)
            .ok_or_else(|| JsValue::from_str("view matrix must be 16 finite floats"))?;
        let projection = Mat4::from_slice(projection)
            .ok_or_else(|| JsValue::from_str("projection matrix must be 16 finite floats"))?;

        let hit = self.greeting.pick_at(
            x,
            y,
            width,
            height,
            &view,
            &projection,
            Vec3::new(camera_x, camera_y, camera_z),
        );
        Ok(hit.map(|h| h.photo_id))
    }

    /// Point photo `id` at a new image; returns false for unknown ids
    #[wasm_bindgen]
    pub fn edit_photo(&mut self, id: u32, url: &str) -> bool {
        self.greeting.edit_photo(id, url)
    }

    #[wasm_bindgen]
    pub fn progress(&self) -> f32 {
        self.greeting.progress()
    }

    #[wasm_bindgen]
    pub fn is_formed(&self) -> bool {
        self.greeting.state() == animation::TransitionState::Formed
    }

    /// False while entities are still moving; hosts may skip pose uploads
    #[wasm_bindgen]
    pub fn is_settled(&self) -> bool {
        self.greeting.is_settled()
    }

    #[wasm_bindgen]
    pub fn selected_id(&self) -> Option<u32> {
        self.greeting.selection().id()
    }

    /// Whether the host camera should auto-rotate this frame
    #[wasm_bindgen]
    pub fn auto_rotate(&self) -> bool {
        self.greeting.auto_rotate()
    }

    // === Pose buffers: position(3) + rotation(3) per entity ===

    #[wasm_bindgen]
    pub fn foliage_poses(&self) -> js_sys::Float32Array {
        let data = self.greeting.foliage().get_pose_data(self.greeting.progress());
        js_sys::Float32Array::from(data.as_slice())
    }

    #[wasm_bindgen]
    pub fn ornament_poses(&self) -> js_sys::Float32Array {
        let data = self.greeting.ornaments().get_pose_data(self.greeting.progress());
        js_sys::Float32Array::from(data.as_slice())
    }

    /// Panel poses, in the order of `polaroid_photo_ids`
    #[wasm_bindgen]
    pub fn polaroid_poses(&self) -> js_sys::Float32Array {
        let data = self.greeting.polaroids().get_pose_data(self.greeting.progress());
        js_sys::Float32Array::from(data.as_slice())
    }

    #[wasm_bindgen]
    pub fn polaroid_photo_ids(&self) -> Vec<u32> {
        self.greeting.polaroids().iter().map(|p| p.photo_id).collect()
    }

    #[wasm_bindgen]
    pub fn foliage_count(&self) -> usize {
        self.greeting.foliage().count()
    }

    #[wasm_bindgen]
    pub fn ornament_count(&self) -> usize {
        self.greeting.ornaments().count()
    }

    /// Photo list as a JSON array of `{ id, url }`
    #[wasm_bindgen]
    pub fn photos_json(&self) -> String {
        self.greeting.photos().to_json()
    }

    #[wasm_bindgen]
    pub fn photo_url(&self, id: u32) -> Option<String> {
        self.greeting.photos().get(id).map(|p| p.url.clone())
    }
}

fn to_js(err: SceneError) -> JsValue {
    log::error!("{}", err);
    JsValue::from_str(&err.to_string())
}
