use std::f64::consts::FRAC_PI_4;

use crate::control::PidConfig;
use crate::error::{ensure_finite, TuneError, TuneResult};
use crate::physics::ball::{DEFAULT_MASS, DEFAULT_SIGMA, DEFAULT_SIZE};
use crate::physics::swing::{DEFAULT_LENGTH, DEFAULT_MAX_ANGLE, DEFAULT_MAX_DELTA};
use crate::physics::{Ball, Swing};
use crate::tuning::Gains;

// ---------------------------------------------------------------------------
// Per-run configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub max_ticks: usize,
    pub dt: f64, // controller step, also drives the ball
    pub integral_clamp: f64, // rad
    pub target: f64,
    pub sigma: f64, // settle tolerance
    pub initial_position: f64,
    pub ball_size: f64,
    pub ball_mass: f64,
    pub max_angle: f64, // rad
    pub max_delta: f64, // rad, full span per tick
    pub swing_length: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_ticks: 10_000,
            dt: 1.0,
            integral_clamp: FRAC_PI_4,
            target: 0.0,
            sigma: DEFAULT_SIGMA,
            initial_position: 70.0,
            ball_size: DEFAULT_SIZE,
            ball_mass: DEFAULT_MASS,
            max_angle: DEFAULT_MAX_ANGLE,
            max_delta: DEFAULT_MAX_DELTA,
            swing_length: DEFAULT_LENGTH,
        }
    }
}

impl SimConfig {
    pub fn swing(&self) -> Swing {
        Swing::new(self.max_angle, self.max_delta, self.swing_length)
    }

    pub fn ball(&self) -> Ball {
        Ball::new(self.initial_position, self.ball_size, self.ball_mass)
    }

    pub fn pid_config(&self, gains: Gains) -> PidConfig {
        PidConfig {
            k_p: gains.kp,
            k_i: gains.ki,
            k_d: gains.kd,
            dt: self.dt,
            integral_clamp: self.integral_clamp,
        }
    }

    pub fn validate(&self) -> TuneResult<()> {
        for (name, value) in [
            ("integral_clamp", self.integral_clamp),
            ("target", self.target),
            ("sigma", self.sigma),
            ("initial_position", self.initial_position),
            ("ball_size", self.ball_size),
            ("max_angle", self.max_angle),
            ("max_delta", self.max_delta),
            ("swing_length", self.swing_length),
        ] {
            ensure_finite(name, value)?;
        }
        for (name, value) in [("max_angle", self.max_angle), ("max_delta", self.max_delta)] {
            if value < 0.0 {
                return Err(TuneError::NegativeLimit { name, value });
            }
        }
        if self.max_ticks == 0 {
            return Err(TuneError::EmptyTickBudget);
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(TuneError::InvalidDt(self.dt));
        }
        if !(self.ball_mass.is_finite() && self.ball_mass > 0.0) {
            return Err(TuneError::InvalidMass(self.ball_mass));
        }
        if self.ball_size < 0.0 || self.ball_size >= self.swing_length {
            return Err(TuneError::BallDoesNotFit {
                size: self.ball_size,
                length: self.swing_length,
            });
        }
        let limit = self.swing_length / 2.0 - self.ball_size / 2.0;
        if self.initial_position.abs() > limit {
            return Err(TuneError::StartOutOfRange {
                position: self.initial_position,
                limit,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(SimConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        let bad = SimConfig {
            dt: 0.0,
            ..SimConfig::default()
        };
        assert_eq!(bad.validate(), Err(TuneError::InvalidDt(0.0)));

        let bad = SimConfig {
            ball_mass: 0.0,
            ..SimConfig::default()
        };
        assert_eq!(bad.validate(), Err(TuneError::InvalidMass(0.0)));

        let bad = SimConfig {
            max_ticks: 0,
            ..SimConfig::default()
        };
        assert_eq!(bad.validate(), Err(TuneError::EmptyTickBudget));

        let bad = SimConfig {
            initial_position: 96.0,
            ..SimConfig::default()
        };
        assert!(matches!(
            bad.validate(),
            Err(TuneError::StartOutOfRange { .. })
        ));

        let bad = SimConfig {
            ball_size: 250.0,
            ..SimConfig::default()
        };
        assert!(matches!(
            bad.validate(),
            Err(TuneError::BallDoesNotFit { .. })
        ));

        let bad = SimConfig {
            sigma: f64::INFINITY,
            ..SimConfig::default()
        };
        assert!(matches!(
            bad.validate(),
            Err(TuneError::NonFinite { name: "sigma", .. })
        ));

        let bad = SimConfig {
            max_angle: -0.5,
            ..SimConfig::default()
        };
        assert_eq!(
            bad.validate(),
            Err(TuneError::NegativeLimit {
                name: "max_angle",
                value: -0.5
            })
        );

        let bad = SimConfig {
            max_delta: -0.1,
            ..SimConfig::default()
        };
        assert_eq!(
            bad.validate(),
            Err(TuneError::NegativeLimit {
                name: "max_delta",
                value: -0.1
            })
        );
    }

    #[test]
    fn zero_limits_are_valid() {
        // A locked swing is a legal, if useless, configuration.
        let locked = SimConfig {
            max_angle: 0.0,
            max_delta: 0.0,
            ..SimConfig::default()
        };
        assert_eq!(locked.validate(), Ok(()));
        let mut swing = locked.swing();
        swing.tilt(0.3);
        assert_eq!(swing.angle(), 0.0);
    }

    #[test]
    fn pid_config_carries_gains() {
        let cfg = SimConfig::default().pid_config(Gains::new(0.1, 0.2, 0.3));
        assert_eq!(cfg.k_p, 0.1);
        assert_eq!(cfg.k_i, 0.2);
        assert_eq!(cfg.k_d, 0.3);
        assert_eq!(cfg.dt, 1.0);
        assert_eq!(cfg.integral_clamp, FRAC_PI_4);
    }
}
