use crate::canvas::CanvasTextRasterizer;
use crate::constants::{SUBMIT_BUTTON_ID, TEXT_INPUT_ID};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use swarm_core::Simulation;
use wasm_bindgen::JsCast;
use web_sys as web;

fn submit_from_input(
    document: &web::Document,
    sim: &Rc<RefCell<Simulation>>,
    rasterizer: &mut CanvasTextRasterizer,
) {
    let Some(value) = dom::input_value(document, TEXT_INPUT_ID) else {
        log::warn!("[submit] missing #{}", TEXT_INPUT_ID);
        return;
    };
    if let Err(e) = sim.borrow_mut().submit(&value, rasterizer) {
        log::error!("[submit] rebuild failed: {}", e);
    }
}

/// Button click and Enter in the text field both submit the field's value.
pub fn wire_submit(
    document: &web::Document,
    sim: Rc<RefCell<Simulation>>,
    rasterizer: CanvasTextRasterizer,
) {
    {
        let doc = document.clone();
        let sim = sim.clone();
        let mut rasterizer = rasterizer.clone();
        dom::add_click_listener(document, SUBMIT_BUTTON_ID, move || {
            submit_from_input(&doc, &sim, &mut rasterizer);
        });
    }

    if let Some(el) = document.get_element_by_id(TEXT_INPUT_ID) {
        let doc = document.clone();
        let mut rasterizer = rasterizer;
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                if ev.key() == "Enter" {
                    submit_from_input(&doc, &sim, &mut rasterizer);
                    ev.prevent_default();
                }
            }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
