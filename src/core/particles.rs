// Anti-gravity particle field.
//
// Particles drift slowly upward, get pushed away from the pointer and relax
// back to their own baseline velocity. The simulation steps once per
// rendered frame; all rates below are per frame at ~60 Hz.

use super::pointer::PointerSnapshot;
use glam::Vec2;
use rand::Rng;

// Population
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;
pub const MOBILE_PARTICLE_COUNT: usize = 150;
pub const DESKTOP_PARTICLE_COUNT: usize = 350;

// Pointer repulsion
pub const REPULSION_RADIUS_PX: f32 = 250.0;
pub const REPULSION_STRENGTH: f32 = 0.05;

// Fraction of the gap to baseline velocity closed each frame
pub const VELOCITY_RELAX_PER_FRAME: f32 = 0.02;

// How far past the viewport edge a particle may travel before wrapping
pub const WRAP_MARGIN_PX: f32 = 10.0;

// Connective lines
pub const LINK_DISTANCE_PX: f32 = 100.0;
pub const LINK_DEPTH_TOLERANCE: f32 = 0.2;
pub const LINK_LOOKAHEAD: usize = 14;
pub const LINK_BASE_ALPHA: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub base_velocity: Vec2,
    pub size: f32,
    pub alpha: f32,
    /// Pseudo-z in \[0, 1\]; 0 is far, 1 is near. Only biases size and opacity.
    pub depth: f32,
}

impl Particle {
    /// Random particle somewhere in the viewport, drifting sideways and up.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: Vec2) -> Self {
        let position = Vec2::new(rng.gen::<f32>() * viewport.x, rng.gen::<f32>() * viewport.y);
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * 0.2,
            -rng.gen::<f32>() * 0.5 - 0.1,
        );
        Self {
            position,
            velocity,
            base_velocity: velocity,
            size: rng.gen::<f32>() * 2.0 + 0.5,
            alpha: rng.gen::<f32>() * 0.5 + 0.1,
            depth: rng.gen::<f32>(),
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size * (0.8 + 0.6 * self.depth)
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.alpha * (0.5 + 0.5 * self.depth)
    }

    fn repel_from(&mut self, pointer: Vec2) {
        let away = self.position - pointer;
        let dist = away.length();
        if dist >= REPULSION_RADIUS_PX {
            return;
        }
        let force = (REPULSION_RADIUS_PX - dist) / REPULSION_RADIUS_PX;
        // Directly under the pointer there is no "away"; push along the heading.
        let dir = if dist > f32::EPSILON {
            away / dist
        } else {
            self.velocity.try_normalize().unwrap_or(Vec2::NEG_Y)
        };
        self.velocity += dir * force * REPULSION_STRENGTH;
    }
}

/// Particle count for a viewport of the given CSS width. Exactly 768 px
/// already gets the desktop count.
#[inline]
pub fn particle_count_for_width(width: f32) -> usize {
    if width < MOBILE_BREAKPOINT_PX {
        MOBILE_PARTICLE_COUNT
    } else {
        DESKTOP_PARTICLE_COUNT
    }
}

/// Wrap a position back into `[-margin, extent + margin]` on both axes.
#[inline]
pub fn wrap_position(position: &mut Vec2, viewport: Vec2) {
    let m = WRAP_MARGIN_PX;
    if position.y < -m {
        position.y = viewport.y + m;
    } else if position.y > viewport.y + m {
        position.y = -m;
    }
    if position.x < -m {
        position.x = viewport.x + m;
    } else if position.x > viewport.x + m {
        position.x = -m;
    }
}

/// Line segment between two nearby particles of similar depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: Vec2,
    pub to: Vec2,
    pub opacity: f32,
}

pub struct ParticleField {
    viewport: Vec2,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(viewport: Vec2, rng: &mut R) -> Self {
        let mut field = Self {
            viewport,
            particles: Vec::new(),
        };
        field.regenerate(rng);
        field
    }

    pub fn from_particles(viewport: Vec2, particles: Vec<Particle>) -> Self {
        Self {
            viewport,
            particles,
        }
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Adopt a new viewport and rebuild the whole set; nothing carries over.
    pub fn resize<R: Rng + ?Sized>(&mut self, viewport: Vec2, rng: &mut R) {
        self.viewport = viewport;
        self.regenerate(rng);
    }

    fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let count = particle_count_for_width(self.viewport.x);
        let viewport = self.viewport;
        self.particles.clear();
        self.particles
            .extend((0..count).map(|_| Particle::spawn(rng, viewport)));
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self, pointer: &PointerSnapshot) {
        let viewport = self.viewport;
        for p in &mut self.particles {
            if let Some(at) = pointer.position {
                p.repel_from(at);
            }
            p.position += p.velocity;
            p.velocity += (p.base_velocity - p.velocity) * VELOCITY_RELAX_PER_FRAME;
            wrap_position(&mut p.position, viewport);
        }
    }

    /// Connective lines for the current positions. Each particle only looks
    /// at the next `LINK_LOOKAHEAD` particles in storage order.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let ps = &self.particles;
        (0..ps.len()).flat_map(move |i| {
            let p = ps[i];
            let end = (i + 1 + LINK_LOOKAHEAD).min(ps.len());
            ps[i + 1..end].iter().filter_map(move |q| {
                let dist = p.position.distance(q.position);
                if dist < LINK_DISTANCE_PX && (p.depth - q.depth).abs() < LINK_DEPTH_TOLERANCE {
                    Some(Link {
                        from: p.position,
                        to: q.position,
                        opacity: LINK_BASE_ALPHA * (1.0 - dist / LINK_DISTANCE_PX) * p.opacity(),
                    })
                } else {
                    None
                }
            })
        })
    }
}
