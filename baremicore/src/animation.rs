//! Animations for the calculator screen
//!
//! Three independent motions, all advanced from the frame delta:
//! the display pulse on every tap, the operator icon flip on toggle, and
//! the spring-driven knob of the add/subtract switch.

use crate::engine::OperatorMode;

/// Timed keyframes: the value eases from where it is to each target in turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    rest: f32,
    from: f32,
    steps: Vec<(f32, f32)>,
    elapsed: f32,
}

impl Sequence {
    pub fn at_rest(rest: f32) -> Self {
        Self {
            rest,
            from: rest,
            steps: Vec::new(),
            elapsed: 0.0,
        }
    }

    /// Replace any running keyframes. Each step is `(target, seconds)`.
    pub fn start(&mut self, steps: &[(f32, f32)]) {
        self.from = self.value();
        self.steps = steps.to_vec();
        self.elapsed = 0.0;
    }

    pub fn update(&mut self, dt: f32) {
        if !self.steps.is_empty() {
            self.elapsed += dt;
            if self.elapsed >= self.total_duration() {
                self.from = self.steps.last().map(|s| s.0).unwrap_or(self.rest);
                self.steps.clear();
                self.elapsed = 0.0;
            }
        }
    }

    pub fn value(&self) -> f32 {
        let mut start = self.from;
        let mut t = self.elapsed;
        for &(target, duration) in &self.steps {
            if t < duration {
                let p = if duration > 0.0 { t / duration } else { 1.0 };
                return lerp(start, target, ease_out_quad(p));
            }
            t -= duration;
            start = target;
        }
        start
    }

    pub fn is_running(&self) -> bool {
        !self.steps.is_empty()
    }

    pub fn snap(&mut self) {
        self.from = self.rest;
        self.steps.clear();
        self.elapsed = 0.0;
    }

    fn total_duration(&self) -> f32 {
        self.steps.iter().map(|s| s.1).sum()
    }
}

/// Damped spring toward `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub position: f32,
    pub velocity: f32,
    pub target: f32,
    pub damping: f32,
    pub mass: f32,
    pub stiffness: f32,
}

/// Integration step cap; frame deltas are split into pieces no larger.
const SPRING_MAX_STEP: f32 = 1.0 / 240.0;
const SPRING_REST_EPSILON: f32 = 1e-3;

impl Spring {
    pub fn new(position: f32) -> Self {
        Self {
            position,
            velocity: 0.0,
            target: position,
            damping: 15.0,
            mass: 1.0,
            stiffness: 200.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
            return;
        }
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(SPRING_MAX_STEP);
            let force = -self.stiffness * (self.position - self.target) - self.damping * self.velocity;
            self.velocity += force / self.mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
    }

    pub fn snap_to(&mut self, position: f32) {
        self.position = position;
        self.target = position;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        (self.position - self.target).abs() < SPRING_REST_EPSILON
            && self.velocity.abs() < SPRING_REST_EPSILON
    }
}

/// All motion on the main screen.
#[derive(Debug, Clone)]
pub struct Animator {
    display_scale: Sequence,
    operator_flip: Sequence,
    knob: Spring,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

impl Animator {
    pub fn new() -> Self {
        Self {
            display_scale: Sequence::at_rest(1.0),
            operator_flip: Sequence::at_rest(0.0),
            knob: Spring::new(knob_target(OperatorMode::Add)),
        }
    }

    /// Small squeeze of the display after a preset tap.
    pub fn operand_applied(&mut self) {
        self.display_scale.start(&[(0.95, 0.05), (1.0, 0.1)]);
    }

    pub fn operator_toggled(&mut self, mode: OperatorMode) {
        self.knob.target = knob_target(mode);
        self.operator_flip.start(&[(1.0, 0.1), (0.0, 0.1)]);
    }

    /// Swell of the display; switch and icon jump back without motion.
    pub fn cleared(&mut self) {
        self.display_scale.start(&[(1.05, 0.1), (1.0, 0.1)]);
        self.knob.snap_to(knob_target(OperatorMode::Add));
        self.operator_flip.snap();
    }

    pub fn update(&mut self, dt: f32) {
        self.display_scale.update(dt);
        self.operator_flip.update(dt);
        self.knob.update(dt);
    }

    pub fn is_animating(&self) -> bool {
        self.display_scale.is_running() || self.operator_flip.is_running() || !self.knob.is_settled()
    }

    pub fn display_scale(&self) -> f32 {
        self.display_scale.value()
    }

    pub fn operator_rotation_degrees(&self) -> f32 {
        lerp(0.0, 180.0, self.operator_flip.value())
    }

    pub fn operator_scale(&self) -> f32 {
        lerp(1.0, 1.2, self.operator_flip.value())
    }

    /// 0.0 with the knob over the add end, 1.0 over the subtract end.
    pub fn knob_position(&self) -> f32 {
        self.knob.position
    }
}

fn knob_target(mode: OperatorMode) -> f32 {
    match mode {
        OperatorMode::Add => 0.0,
        OperatorMode::Subtract => 1.0,
    }
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Quadratic ease-out function for smooth deceleration
pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}
