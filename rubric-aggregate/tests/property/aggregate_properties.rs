use proptest::prelude::*;
use rubric_aggregate::*;
use rubric_core::config::AggregatorConfig;
use rubric_core::evidence::{AllTraitState, CoverageStatus, Observation, TraitKey, WeightFactors};

fn config() -> AggregatorConfig {
    AggregatorConfig::default()
}

fn six_observations() -> Vec<Observation> {
    vec![
        Observation::new(TraitKey::Adaptability, 0.8, 0.9),
        Observation::new(TraitKey::Creativity, 0.6, 0.5),
        Observation::new(TraitKey::Reasoning, 0.7, 1.0),
        Observation::new(TraitKey::Adaptability, 0.4, 0.3),
        Observation::new(TraitKey::Creativity, 0.9, 0.7),
        Observation::new(TraitKey::Reasoning, 0.2, 0.25),
    ]
}

fn apply(observations: &[Observation], config: &AggregatorConfig) -> AllTraitState {
    apply_all(&init(config), observations, config).unwrap().0
}

fn arb_trait() -> impl Strategy<Value = TraitKey> {
    prop_oneof![
        Just(TraitKey::Adaptability),
        Just(TraitKey::Creativity),
        Just(TraitKey::Reasoning),
    ]
}

fn arb_observation() -> impl Strategy<Value = Observation> {
    (arb_trait(), -0.5f64..1.5, -0.5f64..1.5)
        .prop_map(|(key, rating, weight)| Observation::new(key, rating, weight))
}

// ── Permutation invariance on the reference fixture ──────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn six_observation_reshuffles_agree(shuffled in Just(six_observations()).prop_shuffle()) {
        let config = config();
        let reference = apply(&six_observations(), &config);
        let result = apply(&shuffled, &config);
        prop_assert!(
            result.approx_eq(&reference, config.numeric_tolerance),
            "order {:?} diverged: {:?} vs {:?}",
            shuffled, result, reference
        );
    }
}

// ── Permutation invariance on arbitrary multisets ────────────────────────

proptest! {
    #[test]
    fn any_permutation_agrees(
        (original, shuffled) in prop::collection::vec(arb_observation(), 0..24)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let config = config();
        prop_assert!(apply(&shuffled, &config).approx_eq(&apply(&original, &config), config.numeric_tolerance));
    }
}

// ── Merge = batch ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn merge_of_split_equals_batch(
        observations in prop::collection::vec(arb_observation(), 0..24),
        split_ratio in 0.0f64..=1.0,
    ) {
        let config = config();
        let split = ((observations.len() as f64) * split_ratio).floor() as usize;
        let (left, right) = observations.split_at(split.min(observations.len()));

        let merged = merge(&apply(left, &config), &apply(right, &config), &config);
        let batch = apply(&observations, &config);
        prop_assert!(merged.approx_eq(&batch, config.numeric_tolerance));
    }

    #[test]
    fn merge_is_associative(
        a in prop::collection::vec(arb_observation(), 0..8),
        b in prop::collection::vec(arb_observation(), 0..8),
        c in prop::collection::vec(arb_observation(), 0..8),
    ) {
        let config = config();
        let (sa, sb, sc) = (apply(&a, &config), apply(&b, &config), apply(&c, &config));
        let left = merge(&merge(&sa, &sb, &config), &sc, &config);
        let right = merge(&sa, &merge(&sb, &sc, &config), &config);
        prop_assert!(left.approx_eq(&right, config.numeric_tolerance));
    }
}

// ── Zero-weight idempotence and bounds ───────────────────────────────────

proptest! {
    #[test]
    fn zero_weight_update_is_exact_noop(
        history in prop::collection::vec(arb_observation(), 0..12),
        key in arb_trait(),
        rating in -10.0f64..10.0,
    ) {
        let config = config();
        let state = apply(&history, &config);
        let (after, _) = update(&state, &Observation::new(key, rating, 0.0), &config).unwrap();
        prop_assert_eq!(after, state);
    }

    #[test]
    fn score_stays_in_unit_interval(observations in prop::collection::vec(arb_observation(), 0..32)) {
        let config = config();
        let state = apply(&observations, &config);
        for (_, trait_state) in state.iter() {
            prop_assert!((0.0..=1.0).contains(&trait_state.score));
            prop_assert!(trait_state.weight >= 0.0);
        }
    }

    #[test]
    fn score_stays_in_unit_interval_at_float_max_cap(
        ratings in prop::collection::vec((arb_trait(), 0.0f64..=1.0), 1..16),
    ) {
        let config = AggregatorConfig { w_max: f64::MAX, ..config() };
        let observations: Vec<Observation> = ratings
            .iter()
            .map(|&(key, rating)| Observation::new(key, rating, f64::MAX))
            .collect();
        let state = apply(&observations, &config);
        let merged = merge(&state, &state, &config);
        for (_, trait_state) in state.iter().chain(merged.iter()) {
            prop_assert!(
                (0.0..=1.0).contains(&trait_state.score),
                "S = {}", trait_state.score
            );
        }
    }
}

// ── Confidence monotonicity ──────────────────────────────────────────────

proptest! {
    #[test]
    fn confidence_strictly_increases_on_positive_weight(
        history in prop::collection::vec(arb_observation(), 0..12),
        key in arb_trait(),
        rating in 0.0f64..=1.0,
        weight in 0.01f64..=1.0,
    ) {
        let config = config();
        let state = apply(&history, &config);
        let before = trait_confidence(state.get(key), &config);
        let (after_state, _) = update(&state, &Observation::new(key, rating, weight), &config).unwrap();
        let after = trait_confidence(after_state.get(key), &config);
        prop_assert!(after > before, "{} !> {}", after, before);

        let (same_state, _) = update(&after_state, &Observation::new(key, rating, 0.0), &config).unwrap();
        prop_assert_eq!(trait_confidence(same_state.get(key), &config), after);
    }
}

// ── Weight bound ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn composed_weight_is_bounded(
        decay in -1.0f64..2.0,
        quality in -1.0f64..2.0,
        independence in -1.0f64..2.0,
        recency in -1.0f64..2.0,
        w_max in 0.0f64..5.0,
    ) {
        let factors = WeightFactors::new(decay, quality, independence, recency);
        let weight = compute_weight(&factors, w_max).unwrap();
        prop_assert!(weight >= 0.0);
        prop_assert!(weight <= w_max);
    }
}

// ── Stop-gate stability ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn stop_gate_never_retracts(observations in prop::collection::vec(arb_observation(), 0..48)) {
        let config = AggregatorConfig { confidence_shape: 0.5, stop_threshold: 0.5, ..config() };
        let coverage = CoverageStatus::all_covered();
        let mut state = init(&config);
        prop_assert!(!stop_check(&state, &coverage, &config));

        let mut opened = false;
        for observation in &observations {
            state = update(&state, observation, &config).unwrap().0;
            let ready = stop_check(&state, &coverage, &config);
            prop_assert!(!(opened && !ready), "gate retracted");
            opened |= ready;
        }
    }
}
