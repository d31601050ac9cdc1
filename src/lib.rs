//! Animated ring of pulsing blobs drawn by one full-screen fragment shader.
//!
//! Everything outside the `wasm` module is plain math and compiles on any target, so
//! the field, click cycle and shader reference are tested on the host.

pub mod bridge;
pub mod clock;
pub mod color;
pub mod config;
pub mod cycle;
pub mod error;
pub mod field;
pub mod shader;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::config::Config;
    use crate::error::VizError;

    mod controls;
    pub mod gl;
    mod render;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or(VizError::MissingElement("window"))?;
        let document = window.document().ok_or(VizError::MissingElement("document"))?;
        let config = config_from_search(&window.location().search().unwrap_or_default())?;
        log::info!("starting blob ring: {config:?}");

        let canvas = document
            .get_element_by_id(&config.canvas_id)
            .ok_or(VizError::MissingElement("canvas"))?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;

        render::start(canvas, &config)?;
        Ok(())
    }

    /// Read a [`Config`] from a `location.search` string, percent-decoded by
    /// the browser's `URLSearchParams`.
    pub fn config_from_search(search: &str) -> Result<Config, JsValue> {
        let params = web_sys::UrlSearchParams::new_with_str(search)?;
        Ok(Config::from_pairs(
            Config::KEYS
                .into_iter()
                .filter_map(|key| params.get(key).map(|value| (key, value))),
        ))
    }
}
