use rubric_core::evidence::*;
use rubric_core::models::{CodingScores, RawScores};
use rubric_core::RubricError;

#[test]
fn observation_record_converts_when_complete() {
    let json = r#"{"trait_key":"reasoning","rating":0.8,"weight":0.5}"#;
    let record: ObservationRecord = serde_json::from_str(json).unwrap();
    let obs = Observation::try_from(record).unwrap();
    assert_eq!(obs, Observation::new(TraitKey::Reasoning, 0.8, 0.5));
}

#[test]
fn observation_record_missing_weight_is_invalid_input() {
    let json = r#"{"trait_key":"creativity","rating":0.8}"#;
    let record: ObservationRecord = serde_json::from_str(json).unwrap();
    let err = Observation::try_from(record).unwrap_err();
    assert_eq!(err, RubricError::missing("weight"));
}

#[test]
fn observation_record_missing_trait_is_invalid_input() {
    let record = ObservationRecord {
        trait_key: None,
        rating: Some(0.1),
        weight: Some(0.1),
    };
    assert!(Observation::try_from(record).unwrap_err().is_invalid_input());
}

#[test]
fn weight_factors_record_rejects_nan_factor() {
    let record = WeightFactorsRecord {
        decay: Some(1.0),
        quality: Some(f64::NAN),
        independence: Some(0.5),
        recency: Some(0.5),
    };
    assert_eq!(
        WeightFactors::try_from(record).unwrap_err(),
        RubricError::not_a_number("quality")
    );
}

#[test]
fn coverage_defaults_to_uncovered() {
    let mut coverage = CoverageStatus::new();
    assert!(!coverage.is_covered(TraitKey::Adaptability));
    coverage.set(TraitKey::Adaptability, true);
    assert!(coverage.is_covered(TraitKey::Adaptability));
    assert!(!coverage.is_covered(TraitKey::Reasoning));
}

#[test]
fn coverage_serializes_as_plain_map() {
    let coverage = CoverageStatus::all_covered();
    let json = serde_json::to_value(&coverage).unwrap();
    assert_eq!(json["adaptability"], true);
    assert_eq!(json["creativity"], true);
    assert_eq!(json["reasoning"], true);
}

#[test]
fn snapshot_reports_noop_and_delta() {
    let before = TraitState::empty(0.5);
    let after = TraitState {
        score: 0.9,
        weight: 1.0,
        samples: 1,
    };
    let snap = Snapshot::transition(TraitKey::Creativity, 0.9, 1.0, &before, &after);
    assert!(!snap.is_noop());
    assert!((snap.score_delta() - 0.4).abs() < 1e-12);

    let noop = Snapshot::transition(TraitKey::Creativity, 0.9, 0.0, &before, &before);
    assert!(noop.is_noop());
    assert_eq!(noop.score_delta(), 0.0);
}

#[test]
fn raw_scores_lift_trait_means_to_percent_scale() {
    let traits = AllTraitState::new(0.5).with(
        TraitKey::Reasoning,
        TraitState {
            score: 0.7,
            weight: 2.0,
            samples: 3,
        },
    );
    let raw = RawScores::from_traits(
        &traits,
        CodingScores {
            code_quality: 90.0,
            problem_solving: 85.0,
            independence: 0.0,
        },
    );
    assert!((raw.reasoning - 70.0).abs() < 1e-9);
    assert_eq!(raw.adaptability, 50.0);
    assert_eq!(raw.code_quality, 90.0);
    assert_eq!(raw.independence, 0.0);
}
