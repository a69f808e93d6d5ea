use super::{element_attached, Effect, EffectStatus};
use crate::constants::PARALLAX_SELECTOR;
use crate::core::geometry::Rect;
use crate::core::scroll::{
    Property, ScrollBinding, ScrollReveal, TriggerEdge, TriggerRegion, SCALE_FROM, SCALE_TO,
};
use crate::dom;
use crate::frame::FrameInput;
use glam::Vec2;
use web_sys as web;

enum Driver {
    Scrub(ScrollBinding),
    Reveal(ScrollReveal),
}

/// Resolved scroll offsets, refreshed when the viewport changes.
#[derive(Clone, Copy)]
enum Measured {
    Region(TriggerRegion),
    Start(f32),
}

/// `[data-parallax="up|down|scale|fade"]`.
///
/// Optional `data-speed` (up/down), `data-from`/`data-to` (scale),
/// `data-start`/`data-end` trigger edges such as `"top 85%"`, and
/// `data-delay` seconds (fade).
pub struct ScrollEffect {
    el: web::HtmlElement,
    driver: Driver,
    measured: Option<(Vec2, Measured)>,
}

fn parse_edge(el: &web::Element, attr: &str) -> Option<TriggerEdge> {
    let raw = el.get_attribute(attr)?;
    match raw.parse::<TriggerEdge>() {
        Ok(edge) => Some(edge),
        Err(e) => {
            log::warn!("[scroll] {}: {:?}", attr, e);
            None
        }
    }
}

impl ScrollEffect {
    pub fn attach_all(window: &web::Window, document: &web::Document) -> Vec<Self> {
        let effects: Vec<Self> = dom::query_all_in_document(document, PARALLAX_SELECTOR)
            .into_iter()
            .filter_map(Self::attach)
            .collect();
        if !effects.is_empty() {
            log::info!(
                "[scroll] {} scroll-linked elements at scrollY={}",
                effects.len(),
                dom::scroll_y(window)
            );
        }
        effects
    }

    fn attach(el: web::HtmlElement) -> Option<Self> {
        let kind = el.get_attribute("data-parallax").unwrap_or_default();
        let speed = dom::data_f32(&el, "data-speed").unwrap_or(1.0);
        let driver = match kind.trim() {
            "up" | "" => Driver::Scrub(ScrollBinding::parallax_up(speed)),
            "down" => Driver::Scrub(ScrollBinding::parallax_down(speed)),
            "scale" => Driver::Scrub(ScrollBinding::parallax_scale(
                dom::data_f32(&el, "data-from").unwrap_or(SCALE_FROM),
                dom::data_f32(&el, "data-to").unwrap_or(SCALE_TO),
            )),
            "fade" => {
                let mut reveal = ScrollReveal::fade_up();
                if let Some(delay) = dom::data_f32(&el, "data-delay") {
                    reveal = reveal.delay(delay);
                }
                Driver::Reveal(reveal)
            }
            other => {
                log::warn!("[scroll] unknown data-parallax={:?}; skipping", other);
                return None;
            }
        };
        let driver = match driver {
            Driver::Scrub(binding) => {
                let (start, end) = binding.edges();
                let start = parse_edge(&el, "data-start").unwrap_or(*start);
                let end = parse_edge(&el, "data-end").unwrap_or(*end);
                Driver::Scrub(binding.with_edges(start, end))
            }
            Driver::Reveal(reveal) => match parse_edge(&el, "data-start") {
                Some(start) => Driver::Reveal(reveal.starting_at(start)),
                None => Driver::Reveal(reveal),
            },
        };
        Some(Self {
            el,
            driver,
            measured: None,
        })
    }

    /// Measure the untransformed document box and resolve the trigger offsets.
    fn measure(&self, frame: &FrameInput) -> Measured {
        dom::clear_style(&self.el, "transform");
        let rect: Rect = dom::element_rect(&self.el).offset_by_scroll(frame.scroll_y);
        match &self.driver {
            Driver::Scrub(binding) => Measured::Region(binding.region(&rect, frame.viewport.y)),
            Driver::Reveal(reveal) => Measured::Start(reveal.start_offset(&rect, frame.viewport.y)),
        }
    }

    fn apply(&self, values: impl Iterator<Item = (Property, f32)>) {
        let mut translate = Vec2::ZERO;
        let mut scale = 1.0;
        let mut opacity = None;
        for (property, v) in values {
            match property {
                Property::TranslateX => translate.x = v,
                Property::TranslateY => translate.y = v,
                Property::Scale => scale = v,
                Property::Opacity => opacity = Some(v),
            }
        }
        dom::set_style(&self.el, "transform", &super::transform_css(translate, scale));
        if let Some(o) = opacity {
            dom::set_style(&self.el, "opacity", &format!("{:.4}", o));
        }
    }
}

impl Effect for ScrollEffect {
    fn name(&self) -> &'static str {
        "scroll"
    }

    fn tick(&mut self, frame: &FrameInput) -> EffectStatus {
        if element_attached(&self.el) == EffectStatus::Detached {
            return EffectStatus::Detached;
        }
        let measured = match self.measured {
            Some((viewport, m)) if viewport == frame.viewport => m,
            _ => {
                let m = self.measure(frame);
                self.measured = Some((frame.viewport, m));
                m
            }
        };
        match (&mut self.driver, measured) {
            (Driver::Scrub(binding), Measured::Region(region)) => {
                binding.update(&region, frame.scroll_y, frame.dt_sec);
            }
            (Driver::Reveal(reveal), Measured::Start(start)) => {
                reveal.update(start, frame.scroll_y, frame.dt_sec);
            }
            _ => {}
        }
        match &self.driver {
            Driver::Scrub(binding) => self.apply(binding.values()),
            Driver::Reveal(reveal) => self.apply(reveal.values()),
        }
        EffectStatus::Alive
    }

    fn teardown(&mut self) {
        dom::clear_style(&self.el, "transform");
        dom::clear_style(&self.el, "opacity");
    }
}
