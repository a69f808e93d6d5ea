// Easing curves, interpolation and time-based smoothing shared by every effect.
//
// Everything here is a pure function of `(current, target, dt)` or a small
// value type that advances by `dt`, so effects never hand-roll their own
// follow-the-target math.

use std::f32::consts::{PI, TAU};

/// Ease curve mapping linear progress in \[0, 1\] to eased progress.
///
/// Every curve maps 0 to exactly 0 and 1 to exactly 1; only `BackOut` and
/// `ElasticOut` leave \[0, 1\] in between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    /// `powerN.out`: `1 - (1 - p)^(N + 1)`.
    PowerOut(u8),
    SineInOut,
    ExpoOut,
    BackOut { overshoot: f32 },
    ElasticOut { amplitude: f32, period: f32 },
}

impl Ease {
    pub const POWER2_OUT: Ease = Ease::PowerOut(2);
    pub const POWER3_OUT: Ease = Ease::PowerOut(3);
    pub const POWER4_OUT: Ease = Ease::PowerOut(4);

    pub const fn back_out(overshoot: f32) -> Self {
        Ease::BackOut { overshoot }
    }

    pub const fn elastic_out(amplitude: f32, period: f32) -> Self {
        Ease::ElasticOut { amplitude, period }
    }

    pub fn apply(self, progress: f32) -> f32 {
        let p = progress.clamp(0.0, 1.0);
        if p <= 0.0 {
            return 0.0;
        }
        if p >= 1.0 {
            return 1.0;
        }
        match self {
            Ease::Linear => p,
            Ease::PowerOut(n) => 1.0 - (1.0 - p).powi(i32::from(n) + 1),
            Ease::SineInOut => -((PI * p).cos() - 1.0) / 2.0,
            Ease::ExpoOut => 1.0 - 2f32.powf(-10.0 * p),
            Ease::BackOut { overshoot: s } => {
                let q = p - 1.0;
                q * q * ((s + 1.0) * q + s) + 1.0
            }
            Ease::ElasticOut { amplitude, period } => {
                let (a, period, shift) = elastic_terms(amplitude, period);
                a * 2f32.powf(-10.0 * p) * ((p - shift) * TAU / period).sin() + 1.0
            }
        }
    }

    /// Upper bound on how far the curve can exceed 1.0, as a fraction of the
    /// distance travelled.
    pub fn max_overshoot(self) -> f32 {
        match self {
            Ease::Linear | Ease::PowerOut(_) | Ease::SineInOut | Ease::ExpoOut => 0.0,
            Ease::BackOut { overshoot: s } => {
                if s <= 0.0 {
                    return 0.0;
                }
                // peak of q^2((s+1)q + s) on [-1, 0]
                let q = 2.0 * s / (3.0 * (s + 1.0));
                q * q * s / 3.0
            }
            Ease::ElasticOut { amplitude, period } => {
                // the sine is non-positive until p passes `shift`
                let (a, _, shift) = elastic_terms(amplitude, period);
                a * 2f32.powf(-10.0 * shift)
            }
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Linear
    }
}

#[inline]
fn elastic_terms(amplitude: f32, period: f32) -> (f32, f32, f32) {
    let a = amplitude.max(1.0);
    let period = if period > 0.0 { period } else { 0.3 };
    let period = period / amplitude.clamp(f32::EPSILON, 1.0);
    let shift = period / TAU * (1.0 / a).asin();
    (a, period, shift)
}

/// Blend with exact endpoints: `t == 0` yields `from`, `t == 1` yields `to`.
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from * (1.0 - t) + to * t
}

/// Linear map of `value` from `[in_min, in_max]` to `[out_min, out_max]`, unclamped.
#[inline]
pub fn map_range(in_min: f32, in_max: f32, out_min: f32, out_max: f32, value: f32) -> f32 {
    let span = in_max - in_min;
    if span.abs() <= f32::EPSILON {
        return out_min;
    }
    out_min + (value - in_min) * (out_max - out_min) / span
}

/// Frame-rate independent exponential approach with time constant `tau_sec`.
#[inline]
pub fn exp_smooth(current: f32, target: f32, dt_sec: f32, tau_sec: f32) -> f32 {
    if tau_sec <= 0.0 {
        return target;
    }
    let alpha = 1.0 - (-dt_sec.max(0.0) / tau_sec).exp();
    current + (target - current) * alpha
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringParams {
    /// Heavily damped spring used by magnetic buttons; never overshoots.
    pub const MAGNETIC: SpringParams = SpringParams {
        stiffness: 150.0,
        damping: 15.0,
        mass: 0.1,
    };

    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringState {
    pub value: f32,
    pub velocity: f32,
}

// Semi-implicit Euler is only stable for small steps at this stiffness.
const SPRING_SUBSTEP_SEC: f32 = 1.0 / 1000.0;
const SPRING_MAX_SUBSTEPS: u32 = 200;

/// Advance a damped spring toward `target` by `dt_sec`.
pub fn spring_step(state: SpringState, target: f32, dt_sec: f32, params: SpringParams) -> SpringState {
    if dt_sec <= 0.0 {
        return state;
    }
    let steps = ((dt_sec / SPRING_SUBSTEP_SEC).ceil() as u32).clamp(1, SPRING_MAX_SUBSTEPS);
    let h = dt_sec / steps as f32;
    let mass = params.mass.max(f32::EPSILON);
    let SpringState {
        mut value,
        mut velocity,
    } = state;
    for _ in 0..steps {
        let accel = (-params.stiffness * (value - target) - params.damping * velocity) / mass;
        velocity += accel * h;
        value += velocity * h;
    }
    SpringState { value, velocity }
}

/// Retargetable tween: each retarget restarts from the current interpolated
/// value, so overlapping updates never jump.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    ease: Ease,
}

impl Tween {
    /// A tween already resting at `value`.
    pub fn settled(value: f32, duration: f32, ease: Ease) -> Self {
        Self {
            from: value,
            to: value,
            duration: duration.max(0.0),
            elapsed: duration.max(0.0),
            ease,
        }
    }

    pub fn value(&self) -> f32 {
        if self.duration <= 0.0 || self.elapsed >= self.duration {
            return self.to;
        }
        lerp(self.from, self.to, self.ease.apply(self.elapsed / self.duration))
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn ease(&self) -> Ease {
        self.ease
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn retarget(&mut self, target: f32) {
        let current = self.value();
        self.from = current;
        self.to = target;
        self.elapsed = 0.0;
    }

    pub fn retarget_with(&mut self, target: f32, duration: f32, ease: Ease) {
        self.retarget(target);
        self.duration = duration.max(0.0);
        self.ease = ease;
    }

    pub fn advance(&mut self, dt_sec: f32) -> f32 {
        self.elapsed = (self.elapsed + dt_sec.max(0.0)).min(self.duration);
        self.value()
    }
}

// A spring counts as settled once both terms drop below this.
const SPRING_REST_EPSILON: f32 = 1e-3;

/// A value that eases toward a target, either by tween or by spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Follower {
    Tween(Tween),
    Spring {
        state: SpringState,
        target: f32,
        params: SpringParams,
    },
}

impl Follower {
    pub fn tween(value: f32, duration: f32, ease: Ease) -> Self {
        Follower::Tween(Tween::settled(value, duration, ease))
    }

    pub fn spring(value: f32, params: SpringParams) -> Self {
        Follower::Spring {
            state: SpringState {
                value,
                velocity: 0.0,
            },
            target: value,
            params,
        }
    }

    pub fn value(&self) -> f32 {
        match self {
            Follower::Tween(t) => t.value(),
            Follower::Spring { state, .. } => state.value,
        }
    }

    pub fn target(&self) -> f32 {
        match self {
            Follower::Tween(t) => t.target(),
            Follower::Spring { target, .. } => *target,
        }
    }

    pub fn retarget(&mut self, new_target: f32) {
        match self {
            Follower::Tween(t) => t.retarget(new_target),
            Follower::Spring { target, .. } => *target = new_target,
        }
    }

    pub fn advance(&mut self, dt_sec: f32) -> f32 {
        match self {
            Follower::Tween(t) => t.advance(dt_sec),
            Follower::Spring {
                state,
                target,
                params,
            } => {
                *state = spring_step(*state, *target, dt_sec, *params);
                if (state.value - *target).abs() < SPRING_REST_EPSILON
                    && state.velocity.abs() < SPRING_REST_EPSILON
                {
                    *state = SpringState {
                        value: *target,
                        velocity: 0.0,
                    };
                }
                state.value
            }
        }
    }

    pub fn is_settled(&self) -> bool {
        match self {
            Follower::Tween(t) => t.is_finished(),
            Follower::Spring { state, target, .. } => {
                state.value == *target && state.velocity == 0.0
            }
        }
    }
}
