use crate::canvas::{CanvasSurface, CanvasTextRasterizer};
use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use swarm_core::{FrameDriver, Simulation};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sim: Rc<RefCell<Simulation>>,
    pub canvas: web::HtmlCanvasElement,
    pub surface: CanvasSurface,
    pub rasterizer: CanvasTextRasterizer,
    pub driver: FrameDriver,
}

impl FrameContext {
    pub fn frame(&mut self, time_ms: f64) {
        let mut sim = self.sim.borrow_mut();

        // Debounced resize lands here so the canvas and the swarm change together.
        if sim.resize_pending() {
            if let Err(e) = sim.poll_resize(Instant::now(), &mut self.rasterizer) {
                log::error!("[frame] resize rebuild failed: {}", e);
            }
            dom::set_canvas_size(&self.canvas, sim.size());
        }

        self.driver.tick(&mut sim, &mut self.surface, time_ms);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |time_ms: f64| {
        frame_ctx_tick.borrow_mut().frame(time_ms);
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
