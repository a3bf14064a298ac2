use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Create a canvas mounted inside `container`, styled as an absolute
/// overlay with `pointer-events: none` so pointer input keeps reaching the
/// underlying content.
pub fn create_overlay_canvas(
    document: &web::Document,
    container: &web::HtmlElement,
) -> Result<web::HtmlCanvasElement, JsValue> {
    let canvas: web::HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    container.append_child(&canvas)?;

    // The container anchors the overlay's absolute positioning.
    let _ = container.style().set_property("position", "relative");

    let style = canvas.style();
    let _ = style.set_property("position", "absolute");
    let _ = style.set_property("top", "0");
    let _ = style.set_property("left", "0");
    let _ = style.set_property("width", "100%");
    let _ = style.set_property("height", "100%");
    let _ = style.set_property("pointer-events", "none");

    Ok(canvas)
}

/// Re-fit the canvas backing store to the container's current client size.
/// Live particle positions are intentionally left alone; they live in
/// absolute surface coordinates.
pub fn fit_canvas_to_container(canvas: &web::HtmlCanvasElement, container: &web::HtmlElement) {
    let width = container.client_width().max(1) as u32;
    let height = container.client_height().max(1) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
}
