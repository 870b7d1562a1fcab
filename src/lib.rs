#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use swarm_core::{FrameDriver, Simulation, SwarmParams};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod input;

use canvas::{CanvasSurface, CanvasTextRasterizer};
use constants::{CANVAS_ID, INITIAL_TEXT};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("glyph-swarm starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Glyph sampling reads pixels, so wait until web fonts are usable.
async fn wait_for_fonts(document: &web::Document) {
    let ready = match document.fonts().ready() {
        Ok(p) => p,
        Err(e) => {
            log::warn!("[init] document.fonts.ready unavailable: {:?}", e);
            return;
        }
    };
    if let Err(e) = JsFuture::from(ready).await {
        log::warn!("[init] font loading failed: {:?}", e);
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let size = dom::window_surface_size(&window);
    dom::set_canvas_size(&canvas, size);
    let surface = CanvasSurface::new(canvas.clone())?;
    let mut rasterizer = CanvasTextRasterizer::new(document.clone());

    wait_for_fonts(&document).await;

    let seed = js_sys::Date::now() as u64;
    let sim = Rc::new(RefCell::new(Simulation::new(
        size,
        SwarmParams::default(),
        seed,
    )));
    {
        let mut s = sim.borrow_mut();
        if let Err(e) = s.submit(INITIAL_TEXT, &mut rasterizer) {
            log::error!("[init] initial rebuild failed: {}", e);
        }
        log::info!(
            "[init] {}x{} particles={}",
            size.width,
            size.height,
            s.swarm().len()
        );
    }

    events::wire_pointer_and_resize(events::InputWiring {
        canvas: canvas.clone(),
        sim: sim.clone(),
    });
    events::wire_submit(&document, sim.clone(), rasterizer.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sim,
        canvas,
        surface,
        rasterizer,
        driver: FrameDriver::new(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
