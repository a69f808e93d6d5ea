// Scroll-linked transforms.
//
// A trigger region is a pair of scroll offsets derived from an element's
// document box and the viewport ("top bottom" means: when the element's top
// meets the viewport's bottom). Progress through the region drives linear or
// eased interpolation of visual properties.

use super::easing::{exp_smooth, lerp, Ease};
use super::geometry::Rect;
use anyhow::{anyhow, bail};
use smallvec::SmallVec;
use std::str::FromStr;

// Scrubbed progress snaps to the raw value once this close.
pub const SCRUB_SNAP_EPSILON: f32 = 1e-4;

pub const PARALLAX_DISTANCE_PX: f32 = 50.0;
pub const PARALLAX_SCRUB_SEC: f32 = 1.2;
pub const SCALE_SCRUB_SEC: f32 = 1.0;
pub const SCALE_FROM: f32 = 0.95;
pub const SCALE_TO: f32 = 1.0;

pub const REVEAL_OFFSET_Y_PX: f32 = 30.0;
pub const REVEAL_DURATION_SEC: f32 = 1.2;
pub const REVEAL_EASE: Ease = Ease::POWER3_OUT;

/// A point along an element or the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    /// Fraction of the extent: 0 is the top, 1 the bottom.
    Fraction(f32),
    Pixels(f32),
}

impl Anchor {
    #[inline]
    pub fn resolve(self, extent: f32) -> f32 {
        match self {
            Anchor::Fraction(f) => f * extent,
            Anchor::Pixels(px) => px,
        }
    }
}

// `f32::from_str` also takes "nan" and "inf".
fn parse_finite(s: &str) -> Option<f32> {
    s.parse::<f32>().ok().filter(|v| v.is_finite())
}

impl FromStr for Anchor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let s = s.trim();
        match s {
            "top" => return Ok(Anchor::Fraction(0.0)),
            "center" => return Ok(Anchor::Fraction(0.5)),
            "bottom" => return Ok(Anchor::Fraction(1.0)),
            _ => {}
        }
        if let Some(pct) = s.strip_suffix('%') {
            let v = parse_finite(pct).ok_or_else(|| anyhow!("bad percentage anchor {s:?}"))?;
            return Ok(Anchor::Fraction(v / 100.0));
        }
        let px = s.strip_suffix("px").unwrap_or(s);
        parse_finite(px)
            .map(Anchor::Pixels)
            .ok_or_else(|| anyhow!("bad anchor {s:?}"))
    }
}

/// "<element anchor> <viewport anchor>", e.g. `"top bottom"` or `"top 85%"`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerEdge {
    pub element: Anchor,
    pub viewport: Anchor,
}

impl TriggerEdge {
    pub const fn new(element: Anchor, viewport: Anchor) -> Self {
        Self { element, viewport }
    }

    /// Scroll offset at which this edge is crossed. `element` is in document
    /// space.
    pub fn scroll_offset(&self, element: &Rect, viewport_height: f32) -> f32 {
        element.top + self.element.resolve(element.height) - self.viewport.resolve(viewport_height)
    }
}

impl FromStr for TriggerEdge {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let mut parts = s.split_whitespace();
        let (Some(element), Some(viewport), None) = (parts.next(), parts.next(), parts.next())
        else {
            bail!("trigger edge needs two anchors, got {s:?}");
        };
        Ok(Self {
            element: element.parse()?,
            viewport: viewport.parse()?,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerRegion {
    pub start: f32,
    pub end: f32,
}

impl TriggerRegion {
    pub fn resolve(start: &TriggerEdge, end: &TriggerEdge, element: &Rect, viewport_height: f32) -> Self {
        Self {
            start: start.scroll_offset(element, viewport_height),
            end: end.scroll_offset(element, viewport_height),
        }
    }

    /// Normalized progress, clamped to \[0, 1\]. A zero-length region is a
    /// step at `start`.
    pub fn progress(&self, scroll: f32) -> f32 {
        let span = self.end - self.start;
        if span.abs() <= f32::EPSILON {
            return if scroll >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll - self.start) / span).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    TranslateX,
    TranslateY,
    Opacity,
    Scale,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    pub property: Property,
    pub from: f32,
    pub to: f32,
}

impl Track {
    pub const fn new(property: Property, from: f32, to: f32) -> Self {
        Self { property, from, to }
    }

    #[inline]
    pub fn value(&self, eased: f32) -> f32 {
        lerp(self.from, self.to, eased)
    }
}

pub type Tracks = SmallVec<[Track; 3]>;

/// Property values scrubbed continuously by scroll position.
#[derive(Clone, Debug)]
pub struct ScrollBinding {
    start: TriggerEdge,
    end: TriggerEdge,
    tracks: Tracks,
    ease: Ease,
    scrub: Option<f32>,
    progress: Option<f32>,
}

impl ScrollBinding {
    pub fn new(start: TriggerEdge, end: TriggerEdge) -> Self {
        Self {
            start,
            end,
            tracks: Tracks::new(),
            ease: Ease::Linear,
            scrub: None,
            progress: None,
        }
    }

    /// Region from the element entering at the bottom to leaving at the top.
    pub fn full_pass() -> Self {
        Self::new(
            TriggerEdge::new(Anchor::Fraction(0.0), Anchor::Fraction(1.0)),
            TriggerEdge::new(Anchor::Fraction(1.0), Anchor::Fraction(0.0)),
        )
    }

    pub fn parallax_up(speed: f32) -> Self {
        Self::full_pass()
            .track(Property::TranslateY, 0.0, -PARALLAX_DISTANCE_PX * speed)
            .scrub(PARALLAX_SCRUB_SEC)
    }

    pub fn parallax_down(speed: f32) -> Self {
        Self::full_pass()
            .track(Property::TranslateY, 0.0, PARALLAX_DISTANCE_PX * speed)
            .scrub(PARALLAX_SCRUB_SEC)
    }

    pub fn parallax_scale(from: f32, to: f32) -> Self {
        Self::full_pass()
            .track(Property::Scale, from, to)
            .scrub(SCALE_SCRUB_SEC)
    }

    pub fn track(mut self, property: Property, from: f32, to: f32) -> Self {
        self.tracks.push(Track::new(property, from, to));
        self
    }

    pub fn with_edges(mut self, start: TriggerEdge, end: TriggerEdge) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Smooth the rendered progress with time constant `tau_sec`.
    pub fn scrub(mut self, tau_sec: f32) -> Self {
        self.scrub = (tau_sec > 0.0).then_some(tau_sec);
        self
    }

    pub fn edges(&self) -> (&TriggerEdge, &TriggerEdge) {
        (&self.start, &self.end)
    }

    pub fn region(&self, element: &Rect, viewport_height: f32) -> TriggerRegion {
        TriggerRegion::resolve(&self.start, &self.end, element, viewport_height)
    }

    /// Feed the current scroll offset; returns the rendered progress.
    pub fn update(&mut self, region: &TriggerRegion, scroll: f32, dt_sec: f32) -> f32 {
        let raw = region.progress(scroll);
        let next = match (self.progress, self.scrub) {
            (Some(current), Some(tau)) => {
                let p = exp_smooth(current, raw, dt_sec, tau);
                if (p - raw).abs() < SCRUB_SNAP_EPSILON {
                    raw
                } else {
                    p
                }
            }
            // first sample lands where the page already is
            _ => raw,
        };
        self.progress = Some(next);
        next
    }

    pub fn progress(&self) -> f32 {
        self.progress.unwrap_or(0.0)
    }

    pub fn value_at(&self, property: Property, progress: f32) -> Option<f32> {
        let eased = self.ease.apply(progress);
        self.tracks
            .iter()
            .find(|t| t.property == property)
            .map(|t| t.value(eased))
    }

    pub fn values(&self) -> impl Iterator<Item = (Property, f32)> + '_ {
        let eased = self.ease.apply(self.progress());
        self.tracks.iter().map(move |t| (t.property, t.value(eased)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum RevealState {
    Pending,
    Playing { elapsed: f32 },
}

/// One-shot entrance animation that plays once the scroll position passes
/// `start` and never reverses.
#[derive(Clone, Debug)]
pub struct ScrollReveal {
    start: TriggerEdge,
    tracks: Tracks,
    duration: f32,
    delay: f32,
    ease: Ease,
    state: RevealState,
}

impl ScrollReveal {
    pub fn new(start: TriggerEdge, duration: f32, ease: Ease) -> Self {
        Self {
            start,
            tracks: Tracks::new(),
            duration: duration.max(0.0),
            delay: 0.0,
            ease,
            state: RevealState::Pending,
        }
    }

    /// Fade in while rising 30 px, once the element's top passes 85 % of the
    /// viewport.
    pub fn fade_up() -> Self {
        Self::new(
            TriggerEdge::new(Anchor::Fraction(0.0), Anchor::Fraction(0.85)),
            REVEAL_DURATION_SEC,
            REVEAL_EASE,
        )
        .track(Property::Opacity, 0.0, 1.0)
        .track(Property::TranslateY, REVEAL_OFFSET_Y_PX, 0.0)
    }

    pub fn track(mut self, property: Property, from: f32, to: f32) -> Self {
        self.tracks.push(Track::new(property, from, to));
        self
    }

    pub fn starting_at(mut self, start: TriggerEdge) -> Self {
        self.start = start;
        self
    }

    /// Hold the first frame for `delay_sec` after triggering (stagger).
    pub fn delay(mut self, delay_sec: f32) -> Self {
        self.delay = delay_sec.max(0.0);
        self
    }

    pub fn start_offset(&self, element: &Rect, viewport_height: f32) -> f32 {
        self.start.scroll_offset(element, viewport_height)
    }

    pub fn is_triggered(&self) -> bool {
        matches!(self.state, RevealState::Playing { .. })
    }

    pub fn is_finished(&self) -> bool {
        match self.state {
            RevealState::Pending => false,
            RevealState::Playing { elapsed } => elapsed >= self.delay + self.duration,
        }
    }

    /// Returns the eased progress of the entrance.
    pub fn update(&mut self, start_offset: f32, scroll: f32, dt_sec: f32) -> f32 {
        self.state = match self.state {
            RevealState::Pending if scroll >= start_offset => RevealState::Playing { elapsed: 0.0 },
            RevealState::Pending => RevealState::Pending,
            RevealState::Playing { elapsed } => RevealState::Playing {
                elapsed: (elapsed + dt_sec.max(0.0)).min(self.delay + self.duration),
            },
        };
        self.progress()
    }

    pub fn progress(&self) -> f32 {
        match self.state {
            RevealState::Pending => 0.0,
            RevealState::Playing { elapsed } => {
                let t = elapsed - self.delay;
                if t <= 0.0 {
                    0.0
                } else if self.duration <= 0.0 || t >= self.duration {
                    1.0
                } else {
                    self.ease.apply(t / self.duration)
                }
            }
        }
    }

    pub fn values(&self) -> impl Iterator<Item = (Property, f32)> + '_ {
        let p = self.progress();
        self.tracks.iter().map(move |t| (t.property, t.value(p)))
    }
}
