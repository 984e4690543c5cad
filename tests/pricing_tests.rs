
use rand::{rngs::StdRng, Rng, SeedableRng};

use bs_calculator::{
    price_call, price_call_with, BlackScholesCall, CallInputs, CdfProvider, PricingError,
    StatrsNormal,
};
use test_utils::reference_vectors;

fn random_inputs(rng: &mut StdRng) -> CallInputs {
    CallInputs::new(
        rng.gen_range(1.0..500.0),
        rng.gen_range(1.0..500.0),
        rng.gen_range(0.01..5.0),
        rng.gen_range(-0.05..0.15),
        rng.gen_range(0.01..1.5),
    )
}

/// Every shipped reference vector must be reproduced by both providers
#[test]
fn test_reference_vectors() {
    let vectors = reference_vectors();
    assert!(!vectors.is_empty(), "No reference vectors loaded");

    // statrs' normal CDF is accurate to ~2.5e-11, which scales with S and K
    for (provider, price_tol) in [(CdfProvider::Erf, 1e-9), (CdfProvider::Statrs, 1e-8)] {
        let pricer = BlackScholesCall::new(provider);
        for v in &vectors {
            let quote = pricer.price(&v.inputs).unwrap();
            assert!(
                (quote.price - v.expected.price).abs() < price_tol,
                "{} ({:?}): price {} vs {}",
                v.case,
                provider,
                quote.price,
                v.expected.price
            );
            assert!((quote.d1 - v.expected.d1).abs() < 1e-9, "{}: d1", v.case);
            assert!((quote.d2 - v.expected.d2).abs() < 1e-9, "{}: d2", v.case);
        }
    }
}

#[test]
fn test_published_examples_to_two_decimals() {
    let quote = price_call(100.0, 95.0, 1.0, 0.05, 0.2).unwrap();
    assert_eq!(format!("{:.2}", quote.price), "13.35");

    let quote = price_call(50.0, 50.0, 0.5, 0.01, 0.3).unwrap();
    assert_eq!(format!("{:.2}", quote.price), "4.34");
}

#[test]
fn test_price_bounds_and_d_spread() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..5_000 {
        let inputs = random_inputs(&mut rng);
        let quote = price_call(
            inputs.spot,
            inputs.strike,
            inputs.years_to_exp,
            inputs.rate,
            inputs.volatility,
        )
        .unwrap();

        assert!(quote.price.is_finite(), "{:?}", inputs);
        assert!(quote.price >= 0.0, "{:?} -> {}", inputs, quote.price);
        assert!(quote.price <= inputs.spot, "{:?} -> {}", inputs, quote.price);

        let spread = inputs.volatility * inputs.years_to_exp.sqrt();
        assert!((quote.d1 - quote.d2 - spread).abs() < 1e-9, "{:?}", inputs);
    }
}

#[test]
fn test_monotone_in_spot_and_strike() {
    let mut rng = StdRng::seed_from_u64(11);
    let pricer = BlackScholesCall::standard();

    for _ in 0..500 {
        let base = random_inputs(&mut rng);

        let mut prev = 0.0;
        for i in 0..50 {
            let spot = base.spot * (0.5 + 0.02 * i as f64);
            let price = pricer.price(&CallInputs { spot, ..base }).unwrap().price;
            assert!(price >= prev - 1e-12 * spot, "spot {} {:?}", spot, base);
            prev = price;
        }

        let mut prev = f64::INFINITY;
        for i in 0..50 {
            let strike = base.strike * (0.5 + 0.02 * i as f64);
            let price = pricer.price(&CallInputs { strike, ..base }).unwrap().price;
            assert!(price <= prev + 1e-12 * base.spot, "strike {} {:?}", strike, base);
            prev = price;
        }
    }
}

#[test]
fn test_price_increases_with_volatility() {
    let pricer = BlackScholesCall::standard();
    let bases = [
        CallInputs::new(100.0, 95.0, 1.0, 0.05, 0.2),
        CallInputs::new(50.0, 50.0, 0.5, 0.01, 0.3),
        CallInputs::new(80.0, 100.0, 2.0, 0.0, 0.25),
        CallInputs::new(120.0, 100.0, 0.5, -0.01, 0.15),
    ];

    for base in bases {
        let mut prev = -1.0;
        for i in 1..=20 {
            let volatility = 0.05 * i as f64;
            let price = pricer
                .price(&CallInputs { volatility, ..base })
                .unwrap()
                .price;
            assert!(price > prev, "sigma {} {:?}", volatility, base);
            prev = price;
        }
    }
}

#[test]
fn test_intrinsic_value_limit() {
    for (spot, strike) in [(100.0, 95.0), (95.0, 100.0), (40.0, 60.0), (60.0, 40.0)] {
        let intrinsic = f64::max(spot - strike, 0.0);
        let mut prev_gap = f64::INFINITY;
        for sigma in [1e-1, 1e-2, 1e-3, 1e-5, 1e-7] {
            let quote = price_call(spot, strike, 1.0, 0.0, sigma).unwrap();
            let gap = (quote.price - intrinsic).abs();
            assert!(gap <= prev_gap + 1e-12, "S={} K={} sigma={}", spot, strike, sigma);
            prev_gap = gap;
        }
        assert!(prev_gap < 1e-9, "S={} K={} gap={}", spot, strike, prev_gap);
    }
}

#[test]
fn test_invalid_inputs_never_produce_nan() {
    let invalid = [
        (0.0, 95.0, 1.0, 0.05, 0.2),
        (100.0, 0.0, 1.0, 0.05, 0.2),
        (100.0, 95.0, 0.0, 0.05, 0.2),
        (100.0, 95.0, 1.0, 0.05, 0.0),
        (-100.0, 95.0, 1.0, 0.05, 0.2),
        (100.0, -95.0, 1.0, 0.05, 0.2),
        (100.0, 95.0, -1.0, 0.05, 0.2),
        (100.0, 95.0, 1.0, 0.05, -0.2),
        (f64::NAN, 95.0, 1.0, 0.05, 0.2),
        (100.0, 95.0, 1.0, f64::NAN, 0.2),
        (100.0, 95.0, 1.0, f64::INFINITY, 0.2),
        (100.0, 95.0, f64::INFINITY, 0.05, 0.2),
        (100.0, 95.0, 1.0, 0.05, f64::INFINITY),
        (f64::INFINITY, 95.0, 1.0, 0.05, 0.2),
        (100.0, f64::INFINITY, 1.0, 0.05, 0.2),
    ];

    for (s, k, t, r, sigma) in invalid {
        match price_call(s, k, t, r, sigma) {
            Err(PricingError::InvalidInput(msg)) => {
                assert!(msg.contains("must be positive") || msg.contains("must be finite"))
            }
            Ok(q) => panic!("expected InvalidInput for {:?}, got {:?}", (s, k, t, r, sigma), q),
        }
    }
}

#[test]
fn test_shared_pricer_across_threads() {
    let pricer = BlackScholesCall::new(StatrsNormal::new());
    let expected = price_call_with(
        StatrsNormal::new(),
        &CallInputs::new(100.0, 95.0, 1.0, 0.05, 0.2),
    )
    .unwrap();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..1_000 {
                    let quote = pricer
                        .price(&CallInputs::new(100.0, 95.0, 1.0, 0.05, 0.2))
                        .unwrap();
                    assert_eq!(quote, expected);
                }
            });
        }
    });
}
