use super::Controller;

// ---------------------------------------------------------------------------
// Scripted controller: replays a fixed list of corrections
// ---------------------------------------------------------------------------

/// Returns pre-recorded corrections in order, then `fallback` once the script
/// runs out. Measurements are recorded so tests can inspect what the runner fed in.
#[derive(Debug, Clone, Default)]
pub struct ScriptedController {
    script: Vec<f64>,
    fallback: f64,
    dt: f64,
    cursor: usize,
    target: f64,
    pub measurements: Vec<f64>,
}

impl ScriptedController {
    pub fn new(script: Vec<f64>, fallback: f64) -> Self {
        Self {
            script,
            fallback,
            dt: 1.0,
            ..Self::default()
        }
    }

    /// Always answers with the same correction.
    pub fn constant(correction: f64) -> Self {
        Self::new(Vec::new(), correction)
    }

    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}

impl Controller for ScriptedController {
    fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    fn update(&mut self, measurement: f64) -> f64 {
        self.measurements.push(measurement);
        let out = self.script.get(self.cursor).copied().unwrap_or(self.fallback);
        self.cursor += 1;
        out
    }

    fn dt(&self) -> f64 {
        self.dt
    }

    fn reset(&mut self) {
        self.cursor = 0;
        self.measurements.clear();
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}
