use std::cell::RefCell;
use std::rc::Rc;

use drift_core::{input, ParticleField};
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// Keep the canvas backing store matched to the container on window resize.
/// The listener lives for the page's lifetime (`forget`), matching the
/// effect's fire-and-forget contract.
pub fn wire_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    container: web::HtmlElement,
) {
    let closure = Closure::wrap(Box::new(move || {
        dom::fit_canvas_to_container(&canvas, &container);
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Translate container-scoped pointer movement into spawn bursts at the
/// DPR-corrected surface position.
pub fn wire_pointer_move(
    container: &web::HtmlElement,
    canvas: web::HtmlCanvasElement,
    field: Rc<RefCell<ParticleField>>,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = canvas.get_bounding_client_rect();
        let pos = input::pointer_to_surface(
            Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
            Vec2::new(rect.left() as f32, rect.top() as f32),
            Vec2::new(rect.width() as f32, rect.height() as f32),
            Vec2::new(canvas.width() as f32, canvas.height() as f32),
        );
        field.borrow_mut().spawn_burst(pos);
    }) as Box<dyn FnMut(_)>);
    let _ =
        container.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}
