use std::time::Duration;

use crate::config::AnimationSettings;

/// Integration step. Frames are split into steps of this size so the
/// result does not depend on the tick rate.
const STEP_SECS: f64 = 0.001;

/// Longest frame integrated in one call; a stalled UI resumes instead of
/// replaying seconds of motion.
const MAX_FRAME: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub tension: f64,
    pub friction: f64,
    pub mass: f64,
    pub precision: f64,
}

impl SpringConfig {
    pub const STIFF: SpringConfig = SpringConfig {
        tension: 210.0,
        friction: 20.0,
        mass: 1.0,
        precision: 0.01,
    };

    pub fn from_settings(settings: &AnimationSettings) -> Self {
        Self {
            tension: settings.tension,
            friction: settings.friction,
            mass: settings.mass,
            precision: settings.precision,
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::STIFF
    }
}

/// Damped spring pulling `value` toward `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    resting: bool,
    config: SpringConfig,
}

impl Spring {
    pub fn new(value: f64, config: SpringConfig) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            resting: true,
            config,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_resting(&self) -> bool {
        self.resting
    }

    pub fn set_target(&mut self, target: f64) {
        if target != self.target {
            self.target = target;
            self.resting = false;
        }
    }

    /// Advances the spring by `dt`. Returns whether it is still moving.
    pub fn step(&mut self, dt: Duration) -> bool {
        if self.resting {
            return false;
        }

        let steps = (dt.min(MAX_FRAME).as_secs_f64() / STEP_SECS).ceil() as usize;
        let SpringConfig { tension, friction, mass, precision } = self.config;

        for _ in 0..steps {
            let spring_force = -tension * (self.value - self.target);
            let damping_force = -friction * self.velocity;
            let acceleration = (spring_force + damping_force) / mass;
            self.velocity += acceleration * STEP_SECS;
            self.value += self.velocity * STEP_SECS;

            if self.velocity.abs() < precision && (self.value - self.target).abs() < precision {
                self.value = self.target;
                self.velocity = 0.0;
                self.resting = true;
                break;
            }
        }

        !self.resting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn test_new_spring_rests() {
        let mut spring = Spring::new(1.0, SpringConfig::STIFF);
        assert!(spring.is_resting());
        assert!(!spring.step(FRAME));
        assert_eq!(spring.value(), 1.0);
    }

    #[test]
    fn test_converges_to_target() {
        let mut spring = Spring::new(0.0, SpringConfig::STIFF);
        spring.set_target(1.0);
        assert!(!spring.is_resting());

        let mut frames = 0;
        while spring.step(FRAME) {
            frames += 1;
            assert!(frames < 500, "spring never settled");
        }
        assert_eq!(spring.value(), 1.0);
        assert!(spring.is_resting());
    }

    #[test]
    fn test_moves_toward_target_first_frame() {
        let mut spring = Spring::new(60.0, SpringConfig::STIFF);
        spring.set_target(-250.0);
        spring.step(FRAME);
        assert!(spring.value() < 60.0);
        assert!(spring.value() > -250.0);
    }

    #[test]
    fn test_same_target_keeps_resting() {
        let mut spring = Spring::new(5.0, SpringConfig::STIFF);
        spring.set_target(5.0);
        assert!(spring.is_resting());
    }
}
