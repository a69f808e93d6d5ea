// Endless back-and-forth idle motion with a single cancellation point.

use super::easing::Ease;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Delayed,
    Running,
    Cancelled,
}

/// Yoyo loop: eases from 0 to `amplitude` over `half_period`, back again,
/// forever, until cancelled.
#[derive(Clone, Debug)]
pub struct FloatLoop {
    amplitude: f32,
    half_period: f32,
    delay: f32,
    ease: Ease,
    elapsed: f32,
    state: LoopState,
}

impl FloatLoop {
    pub fn new(amplitude: f32, half_period: f32, delay: f32, ease: Ease) -> Self {
        let delay = delay.max(0.0);
        Self {
            amplitude,
            half_period: half_period.max(f32::EPSILON),
            delay,
            ease,
            elapsed: 0.0,
            state: if delay > 0.0 {
                LoopState::Delayed
            } else {
                LoopState::Running
            },
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Stop the loop; the offset reads 0 from now on. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        self.state = LoopState::Cancelled;
    }

    pub fn advance(&mut self, dt_sec: f32) -> f32 {
        if self.state == LoopState::Cancelled {
            return 0.0;
        }
        self.elapsed += dt_sec.max(0.0);
        if self.state == LoopState::Delayed && self.elapsed >= self.delay {
            self.state = LoopState::Running;
        }
        self.offset()
    }

    pub fn offset(&self) -> f32 {
        self.amplitude * self.phase()
    }

    /// Eased position in \[0, 1\] along the current leg; 1 is fully out.
    pub fn phase(&self) -> f32 {
        if self.state != LoopState::Running {
            return 0.0;
        }
        let t = (self.elapsed - self.delay).max(0.0) / self.half_period;
        let leg = t.floor();
        let eased = self.ease.apply(t - leg);
        // even legs go out, odd legs come back
        if (leg as u64) % 2 == 0 {
            eased
        } else {
            1.0 - eased
        }
    }
}

// `[data-float]` defaults: rise 20 px and back over 3 s each way
pub const FLOAT_DEFAULT_LIFT_PX: f32 = -20.0;
pub const FLOAT_DEFAULT_SWAY_DEG: f32 = 0.0;
pub const FLOAT_DEFAULT_HALF_PERIOD_SEC: f32 = 3.0;
pub const FLOAT_EASE: Ease = Ease::SineInOut;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FloatSample {
    pub lift: f32,
    pub sway_deg: f32,
}

/// Idle bob with a matching sway; both ride the same loop phase.
#[derive(Clone, Debug)]
pub struct FloatMotion {
    lift: f32,
    sway_deg: f32,
    cycle: FloatLoop,
}

impl FloatMotion {
    pub fn new(lift: f32, sway_deg: f32, half_period: f32, delay: f32) -> Self {
        Self {
            lift,
            sway_deg,
            cycle: FloatLoop::new(1.0, half_period, delay, FLOAT_EASE),
        }
    }

    pub fn state(&self) -> LoopState {
        self.cycle.state()
    }

    pub fn cancel(&mut self) {
        self.cycle.cancel();
    }

    pub fn advance(&mut self, dt_sec: f32) -> FloatSample {
        self.cycle.advance(dt_sec);
        self.sample()
    }

    pub fn sample(&self) -> FloatSample {
        let phase = self.cycle.phase();
        FloatSample {
            lift: self.lift * phase,
            sway_deg: self.sway_deg * phase,
        }
    }
}

impl Default for FloatMotion {
    fn default() -> Self {
        Self::new(
            FLOAT_DEFAULT_LIFT_PX,
            FLOAT_DEFAULT_SWAY_DEG,
            FLOAT_DEFAULT_HALF_PERIOD_SEC,
            0.0,
        )
    }
}
