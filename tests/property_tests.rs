use physlab::params::PendulumParams;
use physlab::pendulum::{energy, step_rk4, PendulumState};
use physlab::projectile::{path_linear_drag, path_no_drag, range, Launch, ProjectileParams};
use physlab::series::{align, TimeSeries};
use proptest::prelude::*;

/// Strictly increasing times built from positive gaps.
fn times_from_gaps(start: f64, gaps: &[f64]) -> Vec<f64> {
    let mut t = start;
    let mut out = vec![t];
    for g in gaps {
        t += g;
        out.push(t);
    }
    out
}

// =============================================================================
// Interpolation
// =============================================================================

proptest! {
    #[test]
    fn interpolated_value_stays_between_neighbours(
        gaps in prop::collection::vec(0.01f64..5.0, 1..20),
        seed_values in prop::collection::vec(-1e4f64..1e4, 21),
        query in -10.0f64..120.0,
    ) {
        let times = times_from_gaps(0.0, &gaps);
        let values = seed_values[..times.len()].to_vec();
        let s = TimeSeries::new(times.clone(), values.clone()).unwrap();

        let v = s.interpolate(query);
        let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(v >= lo - 1e-9 && v <= hi + 1e-9, "v={} outside [{}, {}]", v, lo, hi);

        if query <= times[0] {
            prop_assert_eq!(v, values[0]);
        }
        if query >= times[times.len() - 1] {
            prop_assert_eq!(v, values[values.len() - 1]);
        }
    }

    #[test]
    fn linear_data_is_interpolated_exactly(
        gaps in prop::collection::vec(0.1f64..3.0, 1..15),
        slope in -50.0f64..50.0,
        offset in -100.0f64..100.0,
        frac in 0.0f64..1.0,
    ) {
        let times = times_from_gaps(0.0, &gaps);
        let values: Vec<f64> = times.iter().map(|t| offset + slope * t).collect();
        let s = TimeSeries::new(times.clone(), values).unwrap();

        let t = times[0] + frac * (times[times.len() - 1] - times[0]);
        let expected = offset + slope * t;
        prop_assert!((s.interpolate(t) - expected).abs() < 1e-8 * (1.0 + expected.abs()));
    }

    #[test]
    fn aligned_lengths_match(
        sparse_gaps in prop::collection::vec(0.5f64..5.0, 1..10),
        dense_gaps in prop::collection::vec(0.05f64..1.0, 1..200),
        dense_start in -2.0f64..2.0,
    ) {
        let st = times_from_gaps(0.0, &sparse_gaps);
        let sparse = TimeSeries::new(st.clone(), st.iter().map(|t| t * 10.0).collect()).unwrap();
        let dt = times_from_gaps(dense_start, &dense_gaps);
        let dense = TimeSeries::new(dt.clone(), vec![1.0; dt.len()]).unwrap();

        let a = align(&dense, &sparse);
        prop_assert_eq!(a.times.len(), a.values.len());
        prop_assert_eq!(a.times.len(), a.dense_values.len());
        prop_assert!(a.times.iter().all(|&t| t <= sparse.max_time()));
        prop_assert_eq!(a.len(), dt.iter().filter(|&&t| t <= sparse.max_time()).count());
    }
}

// =============================================================================
// Pendulum
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn rk4_conserves_energy_for_any_release(
        theta_deg in -170.0f64..170.0,
        omega in -2.0f64..2.0,
        length in 0.05f64..2.0,
    ) {
        let params = PendulumParams::new(9.81, length);
        let mut state = PendulumState::new(theta_deg.to_radians(), omega);
        let e0 = energy(state, &params);

        // 2 seconds at dt = 1e-4
        for _ in 0..20_000 {
            state = step_rk4(state, 1e-4, &params);
        }
        let e1 = energy(state, &params);
        prop_assert!(
            (e1 - e0).abs() <= 1e-6 * e0.max(1.0),
            "energy drift {} from {}",
            (e1 - e0).abs(),
            e0
        );
        prop_assert!(state.theta.is_finite() && state.omega.is_finite());
    }

    #[test]
    fn damping_never_adds_energy(
        theta_deg in -90.0f64..90.0,
        damping in 0.1f64..5.0,
    ) {
        let params = PendulumParams::default().with_damping(damping);
        let mut state = PendulumState::from_degrees(theta_deg);
        let e0 = energy(state, &params);
        for _ in 0..5_000 {
            state = step_rk4(state, 1e-3, &params);
        }
        prop_assert!(energy(state, &params) <= e0 + 1e-9);
    }
}

// =============================================================================
// Projectile
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn drag_shortens_range(
        speed in 10.0f64..40.0,
        angle in 20.0f64..70.0,
    ) {
        let launch = Launch { speed, angle_deg: angle, height: 1.2 };
        let params = ProjectileParams::default();
        let free = range(&path_no_drag(&launch, &params).unwrap());
        let drag = range(&path_linear_drag(&launch, &params).unwrap());
        prop_assert!(drag < free, "drag {} >= free {}", drag, free);
    }
}

#[test]
fn drag_free_range_matches_formula() {
    let params = ProjectileParams::default();
    // Launch from the ground-contact height so the flight ends where it started.
    let h0 = params.radius + physlab::projectile::GROUND_CLEARANCE;
    let launch = Launch {
        speed: 20.0,
        angle_deg: 45.0,
        height: h0,
    };
    let path = path_no_drag(&launch, &params).unwrap();
    let expected = 20.0_f64.powi(2) * (2.0 * 45.0_f64.to_radians()).sin() / params.gravity;
    let (vx, _) = launch.velocity();
    let got = range(&path);
    assert!(
        (got - expected).abs() <= vx * params.dt * 1.01,
        "range {} vs {}",
        got,
        expected
    );
}
