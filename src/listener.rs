use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An attached DOM event listener that detaches itself when removed or
/// dropped.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    callback: Option<Closure<dyn FnMut(web::Event)>>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) = target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref::<js_sys::Function>())
        {
            log::warn!("[listener] could not attach {}: {:?}", kind, e);
        }
        Self {
            target: target.clone(),
            kind,
            callback: Some(callback),
        }
    }

    /// Detach; a second call is a no-op.
    pub fn remove(&mut self) {
        if let Some(callback) = self.callback.take() {
            _ = self.target.remove_event_listener_with_callback(
                self.kind,
                callback.as_ref().unchecked_ref::<js_sys::Function>(),
            );
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        self.remove();
    }
}
