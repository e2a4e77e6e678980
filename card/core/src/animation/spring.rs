//! Damped Spring
//!
//! Physically flavoured easing toward a target, used for button press
//! feedback. Integrated with fixed substeps so the result does not depend
//! on the caller's frame rate.

use std::time::Duration;

/// Integration substep
const STEP: Duration = Duration::from_millis(4);

/// Velocity and distance below which the spring snaps to rest
const REST_THRESHOLD: f32 = 0.001;

/// Default stiffness (matches common mobile toolkit defaults)
pub const DEFAULT_TENSION: f32 = 40.0;

/// Default damping
pub const DEFAULT_FRICTION: f32 = 7.0;

/// A damped spring value
#[derive(Clone, Debug)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    tension: f32,
    friction: f32,
    /// Unintegrated time carried between calls
    carry: Duration,
}

impl Spring {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            tension: DEFAULT_TENSION,
            friction: DEFAULT_FRICTION,
            carry: Duration::ZERO,
        }
    }

    /// Pull toward a new target with default tension
    pub fn set_target(&mut self, target: f32) {
        self.set_target_with(target, DEFAULT_TENSION, DEFAULT_FRICTION);
    }

    /// Pull toward a new target with explicit tension/friction
    pub fn set_target_with(&mut self, target: f32, tension: f32, friction: f32) {
        self.target = target;
        self.tension = tension.max(1.0);
        self.friction = friction.max(0.0);
    }

    pub fn advance(&mut self, delta: Duration) {
        if self.is_at_rest() {
            return;
        }

        self.carry += delta;
        let dt = STEP.as_secs_f32();
        while self.carry >= STEP {
            self.carry -= STEP;
            let accel = self.tension * (self.target - self.value) - self.friction * self.velocity;
            self.velocity += accel * dt;
            self.value += self.velocity * dt;
        }

        if self.velocity.abs() < REST_THRESHOLD && (self.target - self.value).abs() < REST_THRESHOLD
        {
            self.value = self.target;
            self.velocity = 0.0;
            self.carry = Duration::ZERO;
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_at_rest(&self) -> bool {
        self.velocity == 0.0 && self.value == self.target
    }
}
