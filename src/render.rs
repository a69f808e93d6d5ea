use crate::constants::{LINK_LINE_WIDTH, PARTICLE_RGB};
use crate::core::particles::ParticleField;
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn rgba(alpha: f32) -> String {
    let [r, g, b] = PARTICLE_RGB;
    format!("rgba({}, {}, {}, {:.4})", r, g, b, alpha.clamp(0.0, 1.0))
}

/// Canvas2D painter for the particle field.
pub struct ParticlePainter {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    css_size: Vec2,
    dpr: f32,
}

impl ParticlePainter {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext(2d) failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("unexpected 2d context object: {:?}", e))?;
        Ok(Self {
            canvas,
            ctx,
            css_size: Vec2::ZERO,
            dpr: 0.0,
        })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    pub fn needs_resize(&self, css_size: Vec2, dpr: f32) -> bool {
        self.css_size != css_size || self.dpr != dpr
    }

    /// Match the backing store to `css_size * dpr` and draw in CSS pixels.
    pub fn resize(&mut self, css_size: Vec2, dpr: f32) {
        self.css_size = css_size;
        self.dpr = dpr;
        let w_px = (css_size.x * dpr) as u32;
        let h_px = (css_size.y * dpr) as u32;
        self.canvas.set_width(w_px.max(1));
        self.canvas.set_height(h_px.max(1));
        let style = self.canvas.style();
        _ = style.set_property("width", &format!("{}px", css_size.x));
        _ = style.set_property("height", &format!("{}px", css_size.y));
        // absolute transform, so repeated resizes never compound
        let d = f64::from(dpr);
        _ = self.ctx.set_transform(d, 0.0, 0.0, d, 0.0, 0.0);
    }

    pub fn draw(&self, field: &ParticleField) {
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, f64::from(self.css_size.x), f64::from(self.css_size.y));

        for p in field.particles() {
            ctx.begin_path();
            ctx.set_fill_style_str(&rgba(p.opacity()));
            _ = ctx.arc(
                f64::from(p.position.x),
                f64::from(p.position.y),
                f64::from(p.radius()),
                0.0,
                TAU,
            );
            ctx.fill();
        }

        ctx.set_line_width(LINK_LINE_WIDTH);
        for link in field.links() {
            ctx.begin_path();
            ctx.set_stroke_style_str(&rgba(link.opacity));
            ctx.move_to(f64::from(link.from.x), f64::from(link.from.y));
            ctx.line_to(f64::from(link.to.x), f64::from(link.to.y));
            ctx.stroke();
        }
    }

    pub fn clear(&self) {
        self.ctx
            .clear_rect(0.0, 0.0, f64::from(self.css_size.x), f64::from(self.css_size.y));
    }
}
