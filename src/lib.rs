#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod effects;
mod events;
mod frame;
mod input;
mod listener;
mod render;

struct App {
    frame_loop: frame::AnimationLoop,
    context: Rc<RefCell<frame::FrameContext>>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-fx starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Cancel the frame loop and detach every effect. Safe to call repeatedly.
#[wasm_bindgen]
pub fn shutdown() {
    let app = APP.with(|app| app.borrow_mut().take());
    if let Some(app) = app {
        app.frame_loop.cancel();
        app.context.borrow_mut().teardown_all();
        log::info!("[fx] shut down");
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    dom::dom_ready(&document).await?;

    if APP.with(|app| app.borrow().is_some()) {
        log::warn!("[fx] already running; ignoring second init");
        return Ok(());
    }

    let page = Rc::new(RefCell::new(input::PageState::default()));
    let mut listeners = events::wire_pointer_tracking(&window, &page);
    listeners.push(events::wire_visibility(&document, &page));

    let effects = effects::discover(&window, &document);
    if effects.is_empty() {
        log::info!("[fx] nothing to animate on this page");
    }

    let context = Rc::new(RefCell::new(frame::FrameContext::new(
        window, page, effects, listeners,
    )));
    let frame_loop = frame::start_loop(context.clone());
    APP.with(|app| {
        *app.borrow_mut() = Some(App {
            frame_loop,
            context,
        })
    });
    Ok(())
}
