use crate::error::{ensure_finite, TuneError, TuneResult};

// ---------------------------------------------------------------------------
// Sweep configuration
// ---------------------------------------------------------------------------

/// How the refinement loop picks the next `k_d` from the current bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefineStep {
    /// `(d_max - d_min) / 2`: half the bracket width, measured from zero.
    #[default]
    HalfWidth,
    /// `(d_max + d_min) / 2`: the bracket midpoint.
    Midpoint,
}

impl RefineStep {
    pub fn next_kd(self, d_min: f64, d_max: f64) -> f64 {
        match self {
            RefineStep::HalfWidth => (d_max - d_min) / 2.0,
            RefineStep::Midpoint => (d_max + d_min) / 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub kp_start: f64,
    pub kp_end: f64, // exclusive
    pub kp_step: f64,
    pub ki: f64,
    pub d_min_bracket: (f64, f64),
    pub d_max_bracket: (f64, f64),
    pub refine_step: RefineStep,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            kp_start: 0.001,
            kp_end: 0.035,
            kp_step: 1e-7,
            ki: 0.01,
            d_min_bracket: (0.0, 0.2),
            d_max_bracket: (0.1, 0.5),
            refine_step: RefineStep::HalfWidth,
        }
    }
}

impl SweepConfig {
    /// Sweep over a single `k_p` value.
    pub fn single(kp: f64) -> Self {
        Self {
            kp_start: kp,
            kp_end: kp + 1.0,
            kp_step: 1.0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> TuneResult<()> {
        ensure_finite("kp_start", self.kp_start)?;
        ensure_finite("kp_end", self.kp_end)?;
        ensure_finite("ki", self.ki)?;
        if !(self.kp_step.is_finite() && self.kp_step > 0.0) {
            return Err(TuneError::InvalidStep(self.kp_step));
        }
        if self.kp_start >= self.kp_end {
            return Err(TuneError::EmptyRange {
                start: self.kp_start,
                end: self.kp_end,
            });
        }
        for (name, (low, high)) in [("d_min", self.d_min_bracket), ("d_max", self.d_max_bracket)] {
            ensure_finite(name, low)?;
            ensure_finite(name, high)?;
            if low > high {
                return Err(TuneError::InvalidBracket { name, low, high });
            }
        }
        Ok(())
    }

    /// Number of `k_p` grid points in `[kp_start, kp_end)`.
    pub fn grid_len(&self) -> usize {
        let mut n = ((self.kp_end - self.kp_start) / self.kp_step).ceil() as usize;
        while n > 0 && self.kp_at(n - 1) >= self.kp_end {
            n -= 1;
        }
        n
    }

    /// Grid point `i`, computed from the index so no rounding accumulates.
    pub fn kp_at(&self, i: usize) -> f64 {
        self.kp_start + i as f64 * self.kp_step
    }
}
