use std::f64::consts::{FRAC_PI_4, PI};

// ---------------------------------------------------------------------------
// Swing: tiltable beam with rate and travel limits
// ---------------------------------------------------------------------------

/// Default mechanical travel, rad either side of level.
pub const DEFAULT_MAX_ANGLE: f64 = FRAC_PI_4;
/// Default full tilt-rate span per tick, rad (split evenly between directions).
pub const DEFAULT_MAX_DELTA: f64 = PI / 36.0;
/// Default beam length, length-units.
pub const DEFAULT_LENGTH: f64 = 200.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Swing {
    angle: f64, // rad, positive tips the ball toward +position
    min_angle: f64,
    max_angle: f64,
    min_delta: f64, // rad per tick
    max_delta: f64,
    length: f64,
}

impl Swing {
    /// Level swing. `max_angle` bounds the tilt symmetrically; `max_delta` is
    /// the full span of one tick's tilt change, so each direction gets half.
    pub fn new(max_angle: f64, max_delta: f64, length: f64) -> Self {
        Self {
            angle: 0.0,
            min_angle: -max_angle,
            max_angle,
            min_delta: -max_delta / 2.0,
            max_delta: max_delta / 2.0,
            length,
        }
    }

    /// Apply a tilt change, saturating first on rate and then on travel.
    /// A NaN delta leaves the swing where it is.
    pub fn tilt(&mut self, delta: f64) {
        if delta.is_nan() {
            return;
        }
        let delta = delta.clamp(self.min_delta, self.max_delta);
        self.angle = (self.angle + delta).clamp(self.min_angle, self.max_angle);
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn min_angle(&self) -> f64 {
        self.min_angle
    }

    pub fn max_angle(&self) -> f64 {
        self.max_angle
    }

    pub fn min_delta(&self) -> f64 {
        self.min_delta
    }

    pub fn max_delta(&self) -> f64 {
        self.max_delta
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn half_length(&self) -> f64 {
        self.length / 2.0
    }
}

impl Default for Swing {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ANGLE, DEFAULT_MAX_DELTA, DEFAULT_LENGTH)
    }
}
