use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_relative_eq;

use super::{
    Action, Config, ConfigError, Error, Event, Status, integrate, integrate_unobserved,
};

/// Upper half of the unit circle, with square-root behaviour at both ends.
fn half_circle(x: f64) -> f64 {
    (1.0 - x * x).max(0.0).sqrt()
}

#[test]
fn integrates_smooth_function_in_one_pass() {
    let solution = integrate_unobserved(&f64::cos, [0.0, FRAC_PI_2], &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.subintervals, 1);
    assert_eq!(solution.evaluations, 21);
    assert_relative_eq!(solution.value, 1.0, epsilon = 1e-14);
}

#[test]
fn resolves_square_root_edges() {
    let solution =
        integrate_unobserved(&half_circle, [-1.0, 1.0], &Config::default()).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.subintervals > 1);
    assert!(solution.abs_error <= 1.49e-8 * FRAC_PI_2);
    assert_relative_eq!(solution.value, FRAC_PI_2, epsilon = 1e-9);
}

#[test]
fn unbounded_budget_converges() {
    let radius: f64 = 3.0;
    let solution = integrate_unobserved(
        &|x: f64| (radius * radius - x * x).max(0.0).sqrt(),
        [-radius, radius],
        &Config::unbounded(),
    )
    .expect("should converge");

    assert_relative_eq!(solution.value, 0.5 * PI * radius * radius, max_relative = 1e-9);
}

#[test]
fn resolves_regularized_peak() {
    let eps: f64 = 1e-10;
    let config = Config::default().with_max_subintervals(200).unwrap();

    let solution = integrate_unobserved(&|x: f64| 1.0 / (x * x + eps).sqrt(), [-1.0, 1.0], &config)
        .expect("should converge");

    let expected = 2.0 * (1.0 / eps.sqrt()).asinh();
    assert_relative_eq!(solution.value, expected, max_relative = 1e-7);
}

#[test]
fn reversed_bounds_negate_result() {
    let forward = integrate_unobserved(&half_circle, [-1.0, 1.0], &Config::default()).unwrap();
    let backward = integrate_unobserved(&half_circle, [1.0, -1.0], &Config::default()).unwrap();

    assert_relative_eq!(forward.value, -backward.value, epsilon = 1e-12);
}

#[test]
fn zero_width_interval_is_zero() {
    let solution = integrate_unobserved(&half_circle, [0.5, 0.5], &Config::default()).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.evaluations, 0);
    assert_relative_eq!(solution.value, 0.0);
}

#[test]
fn errors_when_budget_is_exhausted() {
    let config = Config::default().with_max_subintervals(2).unwrap();

    let result = integrate_unobserved(&half_circle, [-1.0, 1.0], &config);

    match result {
        Err(Error::SubdivisionLimit {
            limit,
            value,
            abs_error,
            bound,
        }) => {
            assert_eq!(limit, 2);
            assert!(abs_error > bound);
            assert_relative_eq!(value, FRAC_PI_2, epsilon = 1e-2);
        }
        other => panic!("expected subdivision limit, got {other:?}"),
    }
}

#[test]
fn errors_on_non_finite_bounds() {
    let result = integrate_unobserved(&half_circle, [f64::NEG_INFINITY, 1.0], &Config::default());
    assert!(matches!(result, Err(Error::NonFiniteBounds { .. })));

    let result = integrate_unobserved(&half_circle, [0.0, f64::NAN], &Config::default());
    assert!(matches!(result, Err(Error::NonFiniteBounds { .. })));
}

#[test]
fn errors_on_non_finite_integrand() {
    // The rule samples the centre, where 1/x is infinite.
    let result = integrate_unobserved(&|x: f64| 1.0 / x, [-1.0, 1.0], &Config::default());

    assert!(matches!(result, Err(Error::NonFiniteValue { .. })));
}

#[test]
fn observer_can_stop_integration() {
    let mut events = Vec::new();
    let observer = |event: &Event| {
        events.push(*event);
        (event.iter >= 3).then_some(Action::StopEarly)
    };

    let solution = integrate(&half_circle, [-1.0, 1.0], &Config::default(), observer)
        .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.subintervals, 4);
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].bisected, [-1.0, 1.0]);
    assert!(events.iter().all(|event| event.abs_error > 0.0));
}

#[test]
fn rejects_invalid_configs() {
    assert_eq!(Config::new(0, 1e-8, 1e-8), Err(ConfigError::MaxSubintervals));
    assert_eq!(Config::new(10, -1.0, 1e-8), Err(ConfigError::AbsTol));
    assert_eq!(Config::new(10, 1e-8, f64::NAN), Err(ConfigError::RelTol));
    assert_eq!(Config::new(10, 0.0, 0.0), Err(ConfigError::ZeroTolerance));
}
