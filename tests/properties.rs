//! Property tests for the swing and ball invariants.

use proptest::prelude::*;
use swing_tune::physics::{Ball, Swing};

/// Swing tilted to `angle` by repeated saturated steps.
fn swing_at(angle: f64) -> Swing {
    let mut swing = Swing::default();
    for _ in 0..64 {
        let remaining = angle - swing.angle();
        if remaining == 0.0 {
            break;
        }
        swing.tilt(remaining);
    }
    swing
}

/// Finite deltas well past the rate limit, plus the non-finite values a
/// misbehaving controller could return.
fn any_delta() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -10.0f64..10.0,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

proptest! {
    /// Angle stays in bounds and moves by the rate-limited delta unless it
    /// hits a travel limit, in which case it sits exactly on that limit.
    #[test]
    fn tilt_respects_limits(start in -0.78f64..0.78, delta in any_delta()) {
        let mut swing = swing_at(start);
        let before = swing.angle();
        swing.tilt(delta);
        let after = swing.angle();

        prop_assert!(after >= swing.min_angle() && after <= swing.max_angle());

        if delta.is_nan() {
            prop_assert_eq!(after, before);
            return Ok(());
        }
        let clamped = delta.clamp(swing.min_delta(), swing.max_delta());
        let unbounded = before + clamped;
        if unbounded > swing.max_angle() {
            prop_assert_eq!(after, swing.max_angle());
        } else if unbounded < swing.min_angle() {
            prop_assert_eq!(after, swing.min_angle());
        } else {
            prop_assert_eq!(after, unbounded);
        }
    }

    /// Any tick that would carry the ball past an end-stop pins it there.
    #[test]
    fn end_stop_pins_ball(
        start in -95.0f64..95.0,
        angle in -0.78f64..0.78,
        dt in 0.1f64..4.0
    ) {
        let swing = swing_at(angle);
        let mut ball = Ball::at(start);
        let limit = ball.limit(&swing);
        let distance = 9.81 * swing.angle().sin() * dt * dt / 2.0;

        ball.step(&swing, dt);

        prop_assert!(ball.position.abs() <= limit);
        if (start + distance).abs() > limit {
            prop_assert_eq!(ball.speed(), 0.0);
            prop_assert_eq!(ball.position.abs(), limit);
            prop_assert_eq!(ball.position.signum(), (start + distance).signum());
        }
    }

    /// Never centered when position is outside sigma, whatever the speed.
    #[test]
    fn off_center_is_never_centered(
        offset in 1e-5f64..90.0,
        sign in prop::bool::ANY,
        sigma in 1e-6f64..1e-5
    ) {
        let position = if sign { offset } else { -offset };
        let ball = Ball::at(position);
        prop_assert!(!ball.is_centered(sigma.min(offset)));
        prop_assert!(!ball.is_centered_default());
    }

    /// Never centered while moving at or above sigma, even at the center.
    #[test]
    fn moving_ball_is_never_centered(angle in 1e-3f64..0.78, sign in prop::bool::ANY) {
        let angle = if sign { angle } else { -angle };
        let swing = swing_at(angle);
        let distance = 9.81 * swing.angle().sin() / 2.0;
        let mut ball = Ball::at(-distance);
        ball.step(&swing, 1.0);
        prop_assert!(ball.speed().abs() >= 1e-5);
        prop_assert!(!ball.is_centered_default());
    }
}
