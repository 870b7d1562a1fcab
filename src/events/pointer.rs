use crate::dom;
use crate::input;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use swarm_core::Simulation;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub sim: Rc<RefCell<Simulation>>,
}

pub fn wire_pointer_and_resize(w: InputWiring) {
    wire_pointermove(&w);
    wire_resize(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        w.sim.borrow_mut().pointer_mut().move_to(pos);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_resize(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        if let Some(wnd) = web::window() {
            let size = dom::window_surface_size(&wnd);
            w.sim.borrow_mut().request_resize(size, Instant::now());
        }
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
