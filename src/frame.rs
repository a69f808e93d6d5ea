use crate::constants::MAX_FRAME_DT_SEC;
use crate::core::PointerSnapshot;
use crate::dom;
use crate::effects::{Effect, EffectStatus};
use crate::input::PageState;
use crate::listener::EventListener;
use glam::Vec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything an effect may read during one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    pub dt_sec: f32,
    pub pointer: PointerSnapshot,
    pub scroll_y: f32,
    pub viewport: Vec2,
    pub dpr: f32,
}

pub struct FrameContext {
    pub window: web::Window,
    pub page: Rc<RefCell<PageState>>,
    pub effects: Vec<Box<dyn Effect>>,
    // page-level listeners feeding `page`
    pub listeners: Vec<EventListener>,
    pub last_instant: Instant,
    pub was_hidden: bool,
}

impl FrameContext {
    pub fn new(
        window: web::Window,
        page: Rc<RefCell<PageState>>,
        effects: Vec<Box<dyn Effect>>,
        listeners: Vec<EventListener>,
    ) -> Self {
        Self {
            window,
            page,
            effects,
            listeners,
            last_instant: Instant::now(),
            was_hidden: false,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let page = *self.page.borrow();
        if page.hidden {
            self.was_hidden = true;
            self.last_instant = now;
            return;
        }
        let dt = if self.was_hidden {
            // resume without replaying the time spent hidden
            self.was_hidden = false;
            0.0
        } else {
            (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC)
        };
        self.last_instant = now;

        let input = FrameInput {
            dt_sec: dt,
            pointer: page.pointer.snapshot(),
            scroll_y: dom::scroll_y(&self.window),
            viewport: dom::viewport_size(&self.window),
            dpr: dom::device_pixel_ratio(&self.window),
        };

        // registration order
        self.effects.retain_mut(|fx| match fx.tick(&input) {
            EffectStatus::Alive => true,
            EffectStatus::Detached => {
                log::info!("[fx] {} detached; tearing down", fx.name());
                fx.teardown();
                false
            }
        });
    }

    pub fn teardown_all(&mut self) {
        for fx in &mut self.effects {
            fx.teardown();
        }
        self.effects.clear();
        for l in &mut self.listeners {
            l.remove();
        }
        self.listeners.clear();
    }
}

/// A requestAnimationFrame loop with an idempotent cancellation point.
///
/// The closure only holds a weak reference to itself, so dropping the loop
/// frees it.
pub struct AnimationLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    handle: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

impl AnimationLoop {
    pub fn start(mut on_frame: impl FnMut() + 'static) -> Self {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));
        let running = Rc::new(Cell::new(true));

        let tick_weak = Rc::downgrade(&tick);
        let handle_tick = handle.clone();
        let running_tick = running.clone();
        let closure = Closure::wrap(Box::new(move || {
            handle_tick.set(None);
            if !running_tick.get() {
                return;
            }
            on_frame();
            if !running_tick.get() {
                return;
            }
            if let Some(tick) = tick_weak.upgrade() {
                if let Some(cb) = tick.borrow().as_ref() {
                    handle_tick.set(request_frame(cb));
                }
            }
        }) as Box<dyn FnMut()>);

        handle.set(request_frame(&closure));
        *tick.borrow_mut() = Some(closure);
        Self {
            tick,
            handle,
            running,
        }
    }

    /// Stop scheduling frames. Safe to call any number of times.
    pub fn cancel(&self) {
        self.running.set(false);
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.cancel();
        self.tick.borrow_mut().take();
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    let w = web::window()?;
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> AnimationLoop {
    AnimationLoop::start(move || frame_ctx.borrow_mut().frame())
}
