use std::{cell::Cell, f64::consts::E};

use approx::{assert_abs_diff_eq, assert_relative_eq};
use thiserror::Error;

use fixstep_core::{Grid, GridError, State, equation};

use super::{
    Action, Error, Event, Method, Status, euler, integrate, rk2, rk4, solve, solve_unobserved,
};

#[derive(Debug, Error, Clone, PartialEq)]
#[error("equation undefined at x = {x}")]
struct Undefined {
    x: f64,
}

/// Absolute error of `method` on dy/dx = y over [0, 1] with y(0) = 1.
fn growth_error(method: Method, step_size: f64) -> f64 {
    let growth = equation::from_fn(|_x, y| y);
    let y = integrate(&growth, method, 1.0, 0.0, 1.0, step_size).unwrap();
    (y - E).abs()
}

#[test]
#[allow(clippy::float_cmp)]
fn zero_slope_leaves_initial_value_unchanged() {
    let flat = equation::from_fn(|_x, _y| 0.0);

    for method in Method::ALL {
        let y = integrate(&flat, method, 4.2, -3.0, 7.0, 0.01).unwrap();
        assert_eq!(y, 4.2, "{method}");
    }
}

#[test]
fn constant_slope_adds_slope_times_interval() {
    let constant = equation::from_fn(|_x, _y| -1.5);

    for method in Method::ALL {
        let y = integrate(&constant, method, 2.0, 0.0, 1.0, 0.1).unwrap();
        assert_relative_eq!(y, 0.5, epsilon = 1e-12);
    }
}

#[test]
fn exponential_growth_accuracy_by_method() {
    let h = 1e-3;
    let growth = equation::from_fn(|_x, y| y);

    let y_euler = euler::integrate(&growth, 1.0, 0.0, 1.0, h).unwrap();
    let y_rk2 = rk2::integrate(&growth, 1.0, 0.0, 1.0, h).unwrap();
    let y_rk4 = rk4::integrate(&growth, 1.0, 0.0, 1.0, h).unwrap();

    // RK4 matches e well beyond four decimal places.
    assert_abs_diff_eq!(y_rk4, E, epsilon = 1e-10);

    // RK2 differs from RK4 by O(h²), Euler by O(h).
    let rk2_gap = (y_rk2 - y_rk4).abs();
    let euler_gap = (y_euler - y_rk4).abs();
    assert!(rk2_gap < h * h, "rk2 gap {rk2_gap}");
    assert!(euler_gap < 2.0 * h && euler_gap > 0.1 * h, "euler gap {euler_gap}");
    assert!(euler_gap > 1000.0 * rk2_gap);
}

#[test]
fn halving_step_size_follows_method_order() {
    // RK4 uses a coarser step so its error stays well above round-off.
    let cases = [
        (Method::Euler, 1e-2, 1.8..2.2),
        (Method::Rk2, 1e-2, 3.6..4.4),
        (Method::Rk4, 1e-1, 14.0..18.0),
    ];

    for (method, h, expected) in cases {
        let ratio = growth_error(method, h) / growth_error(method, h / 2.0);
        assert!(
            expected.contains(&ratio),
            "{method}: error ratio {ratio} outside {expected:?}"
        );
    }
}

#[test]
#[allow(clippy::float_cmp)]
fn degenerate_interval_never_calls_equation() {
    let never = equation::try_from_fn(|x, _y| Err(Undefined { x }));

    for method in Method::ALL {
        let y = integrate(&never, method, 1.25, 3.0, 3.0, 0.1).unwrap();
        assert_eq!(y, 1.25);
    }
}

#[test]
fn equation_error_on_first_call_is_returned_unchanged() {
    let calls = Cell::new(0);
    let failing = equation::try_from_fn(|x, _y| {
        calls.set(calls.get() + 1);
        Err(Undefined { x })
    });

    for method in Method::ALL {
        calls.set(0);

        let error = integrate(&failing, method, 1.0, 0.5, 1.5, 0.1).unwrap_err();

        assert_eq!(error.into_equation(), Some(Undefined { x: 0.5 }));
        assert_eq!(calls.get(), 1, "{method} kept evaluating after a failure");
    }
}

#[test]
fn equation_error_mid_integration_aborts() {
    // Defined only for x < 0.5.
    let partial = equation::try_from_fn(|x: f64, y: f64| {
        if x < 0.5 {
            Ok(y)
        } else {
            Err(Undefined { x })
        }
    });
    let grid = Grid::new(0.0, 1.0, 0.25).unwrap();

    let mut last_step = 0;
    let result = euler::solve(&partial, 1.0, &grid, |event: &Event| {
        last_step = event.step;
        None
    });

    let Err(Error::Equation(Undefined { x })) = result else {
        panic!("expected an equation error");
    };
    assert_relative_eq!(x, 0.5);
    assert_eq!(last_step, 2);
}

#[test]
fn invalid_grid_is_rejected_before_integration() {
    let growth = equation::from_fn(|_x, y| y);

    let error = integrate(&growth, Method::Rk4, 1.0, 0.0, 1.0, 0.0).unwrap_err();
    assert!(matches!(error, Error::Grid(GridError::StepSize(_))));
    assert!(error.equation().is_none());

    let error = rk2::integrate(&growth, 1.0, 1.0, 0.0, 0.1).unwrap_err();
    assert!(matches!(error, Error::Grid(GridError::Reversed { .. })));
}

#[test]
#[allow(clippy::float_cmp)]
fn non_finite_values_propagate() {
    // The slope at x = 0 is infinite and stays infinite.
    let reciprocal = equation::from_fn(|x, _y| 1.0 / x);
    let y = euler::integrate(&reciprocal, 0.0, 0.0, 1.0, 0.5).unwrap();
    assert_eq!(y, f64::INFINITY);

    let root = equation::from_fn(|_x, y: f64| y.sqrt());
    for method in Method::ALL {
        let y = integrate(&root, method, -1.0, 0.0, 1.0, 0.1).unwrap();
        assert!(y.is_nan(), "{method}");
    }
}

#[test]
fn non_integral_quotient_stops_at_grid_end() {
    // 1.25 / 0.5 rounds up to 3 steps, ending at x = 1.5.
    let unit = equation::from_fn(|_x, _y| 1.0);
    let grid = Grid::new(0.0, 1.25, 0.5).unwrap();

    let solution = solve_unobserved(&unit, Method::Euler, 0.0, &grid).unwrap();

    assert_eq!(solution.steps, 3);
    assert_relative_eq!(solution.state.x, grid.end());
    assert_relative_eq!(solution.state.y, 1.5);
}

#[test]
fn short_remainder_is_not_integrated() {
    // 1.0 / 0.3 rounds to 3 steps, so a unit slope stops at y = 0.9.
    let unit = equation::from_fn(|_x, _y| 1.0);

    let y = euler::integrate(&unit, 0.0, 0.0, 1.0, 0.3).unwrap();

    assert_relative_eq!(y, 0.9, epsilon = 1e-12);
}

#[test]
fn solution_reports_steps_and_evaluations() {
    let calls = Cell::new(0);
    let counted = equation::from_fn(|_x, y| {
        calls.set(calls.get() + 1);
        -y
    });
    let grid = Grid::new(0.0, 2.0, 0.1).unwrap();

    for method in Method::ALL {
        calls.set(0);

        let solution = solve_unobserved(&counted, method, 1.0, &grid).unwrap();

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.method, method);
        assert_eq!(solution.steps, 20);
        assert_eq!(solution.evaluations, calls.get());
        assert_eq!(solution.evaluations, 20 * method.evaluations_per_step());
        assert_relative_eq!(solution.state.x, 2.0, epsilon = 1e-12);
    }
}

#[test]
fn observer_sees_every_step_from_zero() {
    let growth = equation::from_fn(|_x, y| y);
    let grid = Grid::new(1.0, 2.0, 0.25).unwrap();

    let mut events = Vec::new();
    let solution = rk4::solve(&growth, 3.0, &grid, |event: &Event| {
        events.push(*event);
        None
    })
    .unwrap();

    let steps: Vec<_> = events.iter().map(|e| e.step).collect();
    assert_eq!(steps, vec![0, 1, 2, 3, 4]);

    assert_eq!(events[0].state, State::new(1.0, 3.0));
    assert_relative_eq!(events[2].state.x, 1.5);
    assert_eq!(events[4].state, solution.state);
}

#[test]
fn observer_can_stop_early() {
    let growth = equation::from_fn(|_x, y| y);
    let grid = Grid::new(0.0, 1.0, 0.01).unwrap();

    let observer = |event: &Event| {
        if event.state.y > 1.5 {
            Some(Action::StopEarly)
        } else {
            None
        }
    };

    let solution = solve(&growth, Method::Rk2, 1.0, &grid, observer).unwrap();

    // y = e^x first exceeds 1.5 once x passes ln(1.5) ≈ 0.405.
    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps, 41);
    assert_eq!(solution.evaluations, 82);
    assert!(solution.state.y > 1.5);
}

#[test]
fn observer_can_stop_before_first_step() {
    let never = equation::try_from_fn(|x, _y| Err(Undefined { x }));
    let grid = Grid::new(0.0, 1.0, 0.1).unwrap();

    let solution = solve(&never, Method::Euler, 7.0, &grid, |_: &Event| {
        Some(Action::StopEarly)
    })
    .unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps, 0);
    assert_eq!(solution.evaluations, 0);
    assert_eq!(solution.state, State::new(0.0, 7.0));
}

#[test]
fn default_step_size_is_accurate() {
    let cosine = equation::from_fn(|x: f64, _y| x.cos());
    let grid = Grid::with_default_step(0.0, 1.0).unwrap();

    let solution = solve_unobserved(&cosine, Method::Euler, 0.0, &grid).unwrap();

    assert_eq!(solution.steps, 1_000_000);
    assert_abs_diff_eq!(solution.state.y, 1.0_f64.sin(), epsilon = 1e-6);
}
