use crate::input::PageState;
use crate::listener::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Mirror `document.hidden` into `page.hidden` so the frame loop can idle.
pub fn wire_visibility(document: &web::Document, page: &Rc<RefCell<PageState>>) -> EventListener {
    page.borrow_mut().hidden = document.hidden();
    let page = page.clone();
    let doc = document.clone();
    EventListener::new(document, "visibilitychange", move |_ev| {
        let hidden = doc.hidden();
        page.borrow_mut().hidden = hidden;
        log::info!("[fx] page {}", if hidden { "hidden" } else { "visible" });
    })
}
