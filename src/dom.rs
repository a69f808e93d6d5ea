use crate::core::Rect;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Resolve once the document has parsed, so element lookups see the page.
pub async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        _ = document.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &opts,
        );
    });
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("DOMContentLoaded wait failed: {:?}", e))?;
    Ok(())
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> Vec2 {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Vec2::new(read(window.inner_width()), read(window.inner_height()))
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

#[inline]
pub fn device_pixel_ratio(window: &web::Window) -> f32 {
    let dpr = window.device_pixel_ratio() as f32;
    if dpr > 0.0 {
        dpr
    } else {
        1.0
    }
}

pub fn is_touch_device(window: &web::Window) -> bool {
    window.navigator().max_touch_points() > 0
        || js_sys::Reflect::has(window, &"ontouchstart".into()).unwrap_or(false)
}

/// Viewport-space bounding box.
pub fn element_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
}

pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    collect_nodes(root.query_selector_all(selector))
}

pub fn query_all_in_document(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    collect_nodes(document.query_selector_all(selector))
}

fn collect_nodes(list: Result<web::NodeList, wasm_bindgen::JsValue>) -> Vec<web::HtmlElement> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// Numeric `data-*` attribute; malformed values are logged and ignored.
pub fn data_f32(el: &web::Element, attr: &str) -> Option<f32> {
    let raw = el.get_attribute(attr)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f32>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            log::warn!("[dom] ignoring {}={:?} on <{}>", attr, raw, el.tag_name());
            None
        }
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn clear_style(el: &web::HtmlElement, property: &str) {
    _ = el.style().remove_property(property);
}

/// Whether the element (or an ancestor) should show the native pointer.
pub fn is_interactive(window: &web::Window, el: &web::Element, selector: &str) -> bool {
    if matches!(el.closest(selector), Ok(Some(_))) {
        return true;
    }
    window
        .get_computed_style(el)
        .ok()
        .flatten()
        .and_then(|style| style.get_property_value("cursor").ok())
        .map(|c| c == "pointer")
        .unwrap_or(false)
}
