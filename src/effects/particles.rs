use super::{element_attached, Effect, EffectStatus};
use crate::constants::PARTICLE_CANVAS_ID;
use crate::core::particles::ParticleField;
use crate::frame::FrameInput;
use crate::render::ParticlePainter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hero background: particle field painted onto `#fx-particles`.
pub struct ParticleEffect {
    painter: ParticlePainter,
    field: ParticleField,
    rng: StdRng,
}

impl ParticleEffect {
    pub fn attach(window: &web::Window, document: &web::Document) -> Option<Self> {
        let Some(el) = document.get_element_by_id(PARTICLE_CANVAS_ID) else {
            log::info!("[particles] no #{}; skipping", PARTICLE_CANVAS_ID);
            return None;
        };
        let canvas = match el.dyn_into::<web::HtmlCanvasElement>() {
            Ok(c) => c,
            Err(_) => {
                log::warn!("[particles] #{} is not a <canvas>", PARTICLE_CANVAS_ID);
                return None;
            }
        };
        let painter = match ParticlePainter::new(canvas) {
            Ok(p) => p,
            Err(e) => {
                log::error!("[particles] {:?}", e);
                return None;
            }
        };
        let mut rng = StdRng::from_entropy();
        let viewport = crate::dom::viewport_size(window);
        let field = ParticleField::new(viewport, &mut rng);
        log::info!("[particles] {} particles for {}x{}", field.len(), viewport.x, viewport.y);
        Some(Self {
            painter,
            field,
            rng,
        })
    }
}

impl Effect for ParticleEffect {
    fn name(&self) -> &'static str {
        "particles"
    }

    fn tick(&mut self, frame: &FrameInput) -> EffectStatus {
        if element_attached(self.painter.canvas()) == EffectStatus::Detached {
            return EffectStatus::Detached;
        }
        if self.painter.needs_resize(frame.viewport, frame.dpr) {
            self.painter.resize(frame.viewport, frame.dpr);
            if self.field.viewport() != frame.viewport {
                self.field.resize(frame.viewport, &mut self.rng);
                log::info!(
                    "[particles] resized to {}x{}; regenerated {} particles",
                    frame.viewport.x,
                    frame.viewport.y,
                    self.field.len()
                );
            }
        }
        self.field.step(&frame.pointer);
        self.painter.draw(&self.field);
        EffectStatus::Alive
    }

    fn teardown(&mut self) {
        self.painter.clear();
    }
}
