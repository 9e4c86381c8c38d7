pub mod swing;
pub mod ball;

pub use swing::Swing;
pub use ball::Ball;

/// Gravitational acceleration used by the ball model.
pub const G: f64 = 9.81;
