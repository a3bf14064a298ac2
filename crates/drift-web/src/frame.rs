use std::cell::{Cell, RefCell};
use std::rc::Rc;

use drift_core::ParticleField;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::surface::CanvasSurface;

/// Drive `field.advance` once per display refresh until `running` is
/// cleared. The closure keeps itself alive through a shared slot and
/// reschedules itself each frame; once halted it simply stops rescheduling
/// (the closure allocation is left to the page, like the event listeners).
pub fn start_loop(
    field: Rc<RefCell<ParticleField>>,
    mut surface: CanvasSurface,
    running: Rc<Cell<bool>>,
) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            log::info!("animation loop halted");
            return;
        }
        field.borrow_mut().advance(&mut surface);
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
