use rubric_core::errors::*;

#[test]
fn invalid_input_carries_field_and_reason() {
    let err = RubricError::not_a_number("rating");
    let msg = err.to_string();
    assert!(msg.contains("rating"), "error should name the field");
    assert!(msg.contains("NaN"));
    assert!(err.is_invalid_input());
}

#[test]
fn missing_value_names_the_field() {
    let err = RubricError::missing("weight");
    assert!(err.to_string().contains("weight"));
    assert!(err.to_string().contains("missing"));
}

#[test]
fn config_validation_error_carries_field_and_message() {
    let err = ConfigError::ValidationFailed {
        field: "scoring.categories".into(),
        message: "must sum to 100".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("scoring.categories"));
    assert!(msg.contains("must sum to 100"));
}

#[test]
fn config_error_converts_to_rubric_error() {
    let config_err = ConfigError::ParseError {
        message: "bad toml".into(),
    };
    let err: RubricError = config_err.into();
    assert!(matches!(err, RubricError::Config(_)));
    assert!(!err.is_invalid_input());
    assert!(err.to_string().contains("bad toml"));
}

#[test]
fn require_number_rejects_only_nan() {
    assert!(require_number("r", f64::NAN).is_err());
    assert_eq!(require_number("r", -3.0), Ok(-3.0));
    assert_eq!(require_number("r", f64::INFINITY), Ok(f64::INFINITY));
}

#[test]
fn require_present_rejects_missing_and_nan() {
    assert_eq!(require_present("w", None), Err(RubricError::missing("w")));
    assert_eq!(
        require_present("w", Some(f64::NAN)),
        Err(RubricError::not_a_number("w"))
    );
    assert_eq!(require_present("w", Some(0.4)), Ok(0.4));
}
