use nalgebra::{Rotation2, Vector2};

use super::swing::Swing;
use super::G;

// ---------------------------------------------------------------------------
// Ball riding the swing
// ---------------------------------------------------------------------------

pub const DEFAULT_SIZE: f64 = 10.0;
pub const DEFAULT_MASS: f64 = 1.0;
/// Settle tolerance on both position and speed.
pub const DEFAULT_SIGMA: f64 = 1e-5;

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub position: f64, // signed offset from the swing center
    pub size: f64, // diameter
    pub mass: f64,
    speed: f64, // average over the last tick, not integrated
}

impl Ball {
    pub fn new(position: f64, size: f64, mass: f64) -> Self {
        Self {
            position,
            size,
            mass,
            speed: 0.0,
        }
    }

    /// Ball at `position` with default size and mass.
    pub fn at(position: f64) -> Self {
        Self::new(position, DEFAULT_SIZE, DEFAULT_MASS)
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Furthest the ball's center can travel from the swing center.
    pub fn limit(&self, swing: &Swing) -> f64 {
        swing.half_length() - self.size / 2.0
    }

    /// Advance one tick on `swing`.
    ///
    /// The ball starts every tick from rest: displacement is `a*dt^2/2` for the
    /// tangential gravity component at the current angle. Hitting an end-stop
    /// pins the ball there with zero speed.
    pub fn step(&mut self, swing: &Swing, dt: f64) {
        let force = self.mass * G * swing.angle().sin();
        let accel = force / self.mass;
        let distance = accel * dt * dt / 2.0;
        self.position += distance;

        let limit = self.limit(swing);
        if self.position.abs() > limit {
            self.position = limit.copysign(self.position);
            self.speed = 0.0;
        } else {
            self.speed = distance / dt;
        }
    }

    /// True when both position and speed are within `sigma` of zero.
    pub fn is_centered(&self, sigma: f64) -> bool {
        self.speed.abs() < sigma && self.position.abs() < sigma
    }

    pub fn is_centered_default(&self) -> bool {
        self.is_centered(DEFAULT_SIGMA)
    }

    /// Ball center in the pivot frame (x along level, y up).
    pub fn world_position(&self, swing: &Swing) -> Vector2<f64> {
        Rotation2::new(-swing.angle()) * Vector2::new(self.position, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tilted(angle: f64) -> Swing {
        let mut s = Swing::new(std::f64::consts::FRAC_PI_2, 4.0, 200.0);
        s.tilt(angle);
        s
    }

    #[test]
    fn level_swing_holds_ball() {
        let swing = Swing::default();
        let mut ball = Ball::at(70.0);
        ball.step(&swing, 1.0);
        assert_eq!(ball.position, 70.0);
        assert_eq!(ball.speed(), 0.0);
    }

    #[test]
    fn displacement_from_rest_each_tick() {
        let swing = tilted(0.5);
        let mut ball = Ball::at(0.0);
        let expected = G * 0.5_f64.sin() / 2.0;
        ball.step(&swing, 1.0);
        assert_relative_eq!(ball.position, expected, epsilon = 1e-12);
        assert_relative_eq!(ball.speed(), expected, epsilon = 1e-12);
        // No velocity carried over: the second tick moves the same distance.
        ball.step(&swing, 1.0);
        assert_relative_eq!(ball.position, 2.0 * expected, epsilon = 1e-12);
        assert_relative_eq!(ball.speed(), expected, epsilon = 1e-12);
    }

    #[test]
    fn mass_cancels() {
        let swing = tilted(-0.3);
        let mut light = Ball::new(10.0, 10.0, 0.1);
        let mut heavy = Ball::new(10.0, 10.0, 50.0);
        light.step(&swing, 0.5);
        heavy.step(&swing, 0.5);
        assert_relative_eq!(light.position, heavy.position, epsilon = 1e-12);
    }

    #[test]
    fn end_stop_pins_ball() {
        let swing = tilted(0.7);
        let mut ball = Ball::at(94.0);
        ball.step(&swing, 1.0);
        assert_eq!(ball.position, 95.0);
        assert_eq!(ball.speed(), 0.0);

        let swing = tilted(-0.7);
        let mut ball = Ball::at(-94.0);
        ball.step(&swing, 1.0);
        assert_eq!(ball.position, -95.0);
        assert_eq!(ball.speed(), 0.0);
    }

    #[test]
    fn centered_needs_both_position_and_speed() {
        let mut ball = Ball::at(0.0);
        assert!(ball.is_centered_default());

        ball.position = 2e-5;
        assert!(!ball.is_centered_default());

        // Passing through the center while moving does not count.
        let swing = tilted(0.2);
        let mut moving = Ball::at(-G * 0.2_f64.sin() / 2.0);
        moving.step(&swing, 1.0);
        assert!(moving.position.abs() < 1e-12);
        assert!(!moving.is_centered_default());
    }

    #[test]
    fn world_position_follows_tilt() {
        let swing = tilted(std::f64::consts::FRAC_PI_4);
        let ball = Ball::at(10.0);
        let p = ball.world_position(&swing);
        // Positive tilt lowers the +position end.
        assert_relative_eq!(p.x, 10.0 * std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(p.y, -10.0 * std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
    }
}
