use crate::input::{self, PageState};
use crate::listener::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer across the whole window into `page.pointer`.
///
/// The returned listeners stay attached until dropped.
pub fn wire_pointer_tracking(window: &web::Window, page: &Rc<RefCell<PageState>>) -> Vec<EventListener> {
    vec![
        wire_pointermove(window, page),
        wire_pointerout(window, page),
        wire_pointerdown(window, page),
        wire_pointerup(window, page),
    ]
}

fn wire_pointermove(window: &web::Window, page: &Rc<RefCell<PageState>>) -> EventListener {
    let page = page.clone();
    EventListener::new(window, "pointermove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            page.borrow_mut().pointer.position = Some(input::pointer_client_px(ev));
        }
    })
}

fn wire_pointerout(window: &web::Window, page: &Rc<RefCell<PageState>>) -> EventListener {
    let page = page.clone();
    EventListener::new(window, "pointerout", move |ev| {
        // Leaving the window has no related target; moving between elements does.
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            if ev.related_target().is_none() {
                let mut page = page.borrow_mut();
                page.pointer.position = None;
                page.pointer.down = false;
            }
        }
    })
}

fn wire_pointerdown(window: &web::Window, page: &Rc<RefCell<PageState>>) -> EventListener {
    let page = page.clone();
    EventListener::new(window, "pointerdown", move |_ev| {
        page.borrow_mut().pointer.down = true;
    })
}

fn wire_pointerup(window: &web::Window, page: &Rc<RefCell<PageState>>) -> EventListener {
    let page = page.clone();
    EventListener::new(window, "pointerup", move |_ev| {
        page.borrow_mut().pointer.down = false;
    })
}
