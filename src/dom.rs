use crate::constants::backing_size;
use swarm_core::SurfaceSize;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{}", element_id);
    }
}

/// Current window inner size as a surface size.
pub fn window_surface_size(window: &web::Window) -> SurfaceSize {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let (w, h) = backing_size(w, h);
    SurfaceSize::new(w, h)
}

pub fn set_canvas_size(canvas: &web::HtmlCanvasElement, size: SurfaceSize) {
    if canvas.width() != size.width {
        canvas.set_width(size.width);
    }
    if canvas.height() != size.height {
        canvas.set_height(size.height);
    }
}

pub fn input_value(document: &web::Document, element_id: &str) -> Option<String> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        .map(|input| input.value())
}
