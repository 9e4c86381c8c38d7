use std::f64::consts::FRAC_PI_4;

use super::Controller;

// ---------------------------------------------------------------------------
// PID controller with fixed step and clamped integral
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PidConfig {
    pub k_p: f64,
    pub k_i: f64,
    pub k_d: f64,
    pub dt: f64,
    /// Bound on the accumulated integral. Zero or negative disables the clamp.
    pub integral_clamp: f64,
}

impl PidConfig {
    pub fn new(k_p: f64, k_i: f64, k_d: f64) -> Self {
        Self {
            k_p,
            k_i,
            k_d,
            ..Self::default()
        }
    }
}

impl Default for PidConfig {
    fn default() -> Self {
        Self {
            k_p: 0.0,
            k_i: 0.0,
            k_d: 0.0,
            dt: 1.0,
            integral_clamp: FRAC_PI_4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Pid {
    config: PidConfig,
    target: f64,
    integral: f64,
    prev_error: f64,
}

impl Pid {
    pub fn new(config: PidConfig) -> Self {
        Self {
            config,
            target: 0.0,
            integral: 0.0,
            prev_error: 0.0,
        }
    }

    pub fn config(&self) -> &PidConfig {
        &self.config
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn integral(&self) -> f64 {
        self.integral
    }

    pub fn update(&mut self, measurement: f64) -> f64 {
        let PidConfig {
            k_p,
            k_i,
            k_d,
            dt,
            integral_clamp,
        } = self.config;
        let error = self.target - measurement;

        self.integral += error * dt;
        // Anti-windup
        if integral_clamp > 0.0 && self.integral.abs() > integral_clamp {
            self.integral = integral_clamp.copysign(self.integral);
        }

        // First call differentiates against a zero previous error.
        let derivative = (error - self.prev_error) / dt;
        self.prev_error = error;

        k_p * error + k_i * self.integral + k_d * derivative
    }

    pub fn reset(&mut self) {
        self.integral = 0.0;
        self.prev_error = 0.0;
    }
}

impl Controller for Pid {
    fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    fn update(&mut self, measurement: f64) -> f64 {
        Pid::update(self, measurement)
    }

    fn dt(&self) -> f64 {
        self.config.dt
    }

    fn reset(&mut self) {
        Pid::reset(self);
    }

    fn name(&self) -> &str {
        "Pid"
    }
}
