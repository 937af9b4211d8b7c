//! Browser binding for the background particle field
//!
//! Load the generated module on any page and call `start()`. Pages without a
//! `<canvas id="bg-grid">` are left alone.
//!
//! ```js
//! import init, { start } from "./sisterhood_viz.js";
//! await init();
//! const background = start();
//! // background?.stop();
//! ```
//!
//! The returned handle owns the animation: freeing it stops the loop.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use sisterhood_field::{FieldConfig, ParticleField};

mod animation;
mod canvas2d;

pub use animation::{Animation, viewport_size};
pub use canvas2d::Canvas2DSurface;

/// Id of the canvas the background paints onto
pub const CANVAS_ID: &str = "bg-grid";

/// Initialize WASM panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // Fails only if the host page already installed a subscriber
    let _ = tracing_wasm::try_set_as_global_default();
}

/// Handle to a running background animation
#[wasm_bindgen]
pub struct Background {
    animation: Animation,
}

#[wasm_bindgen]
impl Background {
    /// Stop animating and detach from the window
    pub fn stop(&mut self) {
        self.animation.stop();
    }

    /// Whether frames are still being drawn
    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.animation.is_running()
    }

    /// Total number of objects in the field
    #[wasm_bindgen(getter)]
    pub fn objects(&self) -> usize {
        self.animation.counts().total()
    }
}

/// Start the background on `#bg-grid` with the default look
#[wasm_bindgen]
pub fn start() -> Result<Option<Background>, JsValue> {
    start_on(CANVAS_ID, FieldConfig::default())
}

/// Start the background on a given canvas with a JSON config
///
/// Missing config keys fall back to their defaults.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(
    canvas_id: &str,
    config_json: &str,
) -> Result<Option<Background>, JsValue> {
    let config: FieldConfig = serde_json::from_str(config_json)
        .map_err(|e| JsValue::from_str(&format!("invalid config: {e}")))?;
    start_on(canvas_id, config)
}

fn start_on(canvas_id: &str, config: FieldConfig) -> Result<Option<Background>, JsValue> {
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let Some(canvas) = document
        .get_element_by_id(canvas_id)
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    else {
        return Ok(None);
    };

    let surface = Canvas2DSurface::new(canvas).map_err(|e| JsValue::from_str(&e))?;
    let field = ParticleField::with_config(surface, browser_rng(), config);
    let animation = Animation::start(window, field)?;

    Ok(Some(Background { animation }))
}

/// ChaCha seeded from `Math.random()`
fn browser_rng() -> ChaCha8Rng {
    let seed = (js_sys::Math::random() * 2f64.powi(53)) as u64;
    ChaCha8Rng::seed_from_u64(seed)
}
