//! Property checks over random coefficient series.

use super::*;
use crate::series::{CoeffPair, Coefficients};
use proptest::prelude::*;
use std::f64::consts::TAU;

fn series() -> impl Strategy<Value = Coefficients> {
    prop::collection::vec((-2.0f64..2.0, -2.0f64..2.0), 1..24).prop_map(|v| {
        Coefficients::new(v.into_iter().map(CoeffPair::from).collect()).unwrap()
    })
}

proptest! {
    #[test]
    fn closes_for_any_series(c in series()) {
        let gap = (evaluate(TAU, &c) - evaluate(0.0, &c)).norm();
        prop_assert!(gap < 1e-9, "gap {}", gap);
    }

    #[test]
    fn scaling_coefficients_scales_the_point(c in series(), s in -5.0f64..5.0, th in -7.0f64..7.0) {
        let p = evaluate(th, &c) * s;
        let q = evaluate(th, &c.scaled(s));
        let tol = 1e-10 * (1.0 + p.norm());
        prop_assert!((p - q).norm() <= tol, "{:?} vs {:?}", p, q);
    }

    #[test]
    fn evaluation_is_deterministic(c in series(), th in -7.0f64..7.0) {
        let p = evaluate(th, &c);
        let q = evaluate(th, &c.clone());
        prop_assert_eq!(p.x.to_bits(), q.x.to_bits());
        prop_assert_eq!(p.y.to_bits(), q.y.to_bits());
    }

    #[test]
    fn text_form_round_trips(c in series()) {
        let back: Coefficients = c.to_string().parse().unwrap();
        prop_assert_eq!(back, c);
    }
}
