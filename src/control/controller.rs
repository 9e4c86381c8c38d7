/// Trait for swing controllers.
///
/// The runner feeds the ball position in every tick and applies the returned
/// value as a tilt delta. Implementations keep whatever state they need
/// between calls; a fresh instance is used for every run.
pub trait Controller {
    /// Set the position the controller should drive the ball to.
    fn set_target(&mut self, target: f64);

    /// Compute a tilt correction from the latest measured position.
    fn update(&mut self, measurement: f64) -> f64;

    /// Fixed time step the controller was configured with.
    fn dt(&self) -> f64;

    /// Reset controller internal state (e.g., PID integrators).
    fn reset(&mut self) {}

    /// Human-readable name for logging/display.
    fn name(&self) -> &str {
        "unnamed"
    }
}
