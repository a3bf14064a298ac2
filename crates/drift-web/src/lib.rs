#![cfg(target_arch = "wasm32")]
//! wasm front-end for the drift pointer trail.
//!
//! Hosts construct the effect explicitly through [`PointerTrail::attach`];
//! nothing is registered globally. The returned handle owns a stop flag for
//! clean teardown of the animation loop.

mod dom;
mod events;
mod frame;
mod surface;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use drift_core::{FieldConfig, ParticleField};
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("drift-web loaded");
    Ok(())
}

/// Construction options, mirroring the core `FieldConfig` in a
/// wasm-bindgen-friendly shape.
#[wasm_bindgen]
#[derive(Clone)]
pub struct TrailOptions {
    max_particles: u32,
    colors: Vec<String>,
}

#[wasm_bindgen]
impl TrailOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> TrailOptions {
        let defaults = FieldConfig::default();
        TrailOptions {
            max_particles: defaults.max_particles as u32,
            colors: defaults.colors,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn max_particles(&self) -> u32 {
        self.max_particles
    }

    #[wasm_bindgen(setter)]
    pub fn set_max_particles(&mut self, max_particles: u32) {
        self.max_particles = max_particles;
    }

    #[wasm_bindgen(getter)]
    pub fn colors(&self) -> Vec<String> {
        self.colors.clone()
    }

    #[wasm_bindgen(setter)]
    pub fn set_colors(&mut self, colors: Vec<String>) {
        self.colors = colors;
    }
}

impl Default for TrailOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a mounted trail effect.
///
/// Dropping the handle does not stop the animation; call [`PointerTrail::stop`].
/// Event listeners stay registered for the page's lifetime.
#[wasm_bindgen]
pub struct PointerTrail {
    running: Rc<Cell<bool>>,
}

#[wasm_bindgen]
impl PointerTrail {
    /// Mount the effect into `container` (default: `document.body`) as a
    /// non-interactive canvas overlay and start its animation loop.
    pub fn attach(
        container: Option<web::HtmlElement>,
        options: Option<TrailOptions>,
    ) -> Result<PointerTrail, JsValue> {
        let options = options.unwrap_or_default();
        mount(container, options).map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }

    /// Halt the animation loop after the current frame.
    pub fn stop(&self) {
        self.running.set(false);
        log::info!("pointer trail stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

fn mount(container: Option<web::HtmlElement>, options: TrailOptions) -> anyhow::Result<PointerTrail> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = match container {
        Some(el) => el,
        None => document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no document body"))?,
    };

    let canvas = dom::create_overlay_canvas(&document, &container)
        .map_err(|e| anyhow::anyhow!("canvas setup failed: {e:?}"))?;
    dom::fit_canvas_to_container(&canvas, &container);

    let config = FieldConfig {
        max_particles: options.max_particles as usize,
        colors: options.colors,
    };
    let seed = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    let field = Rc::new(RefCell::new(ParticleField::new(config, seed)?));

    let surface = surface::CanvasSurface::new(&canvas)
        .map_err(|e| anyhow::anyhow!("2d context unavailable: {e:?}"))?;

    events::wire_resize(&window, canvas.clone(), container.clone());
    events::wire_pointer_move(&container, canvas, field.clone());

    let running = Rc::new(Cell::new(true));
    frame::start_loop(field, surface, running.clone());

    log::info!("pointer trail mounted");
    Ok(PointerTrail { running })
}
