#![cfg(feature = "dev")]

use vecmath_rs::internals::engine::validator::Validator;
use vecmath_rs::internals::primitives::errors::VecMathError;

#[test]
fn test_validate_len() {
    assert!(Validator::validate_len("x", 3, 3).is_ok());
    assert!(Validator::validate_len("x", 4, 3).is_ok());
    assert!(Validator::validate_len("x", 0, 0).is_ok());
    assert_eq!(
        Validator::validate_len("x", 2, 3),
        Err(VecMathError::BufferTooShort {
            operand: "x",
            len: 2,
            n: 3
        })
    );
}

#[test]
fn test_validate_pair_reports_first_offender() {
    assert_eq!(
        Validator::validate_pair("y", 1, "x", 1, 2),
        Err(VecMathError::BufferTooShort {
            operand: "y",
            len: 1,
            n: 2
        })
    );
    assert_eq!(
        Validator::validate_pair("y", 2, "x", 1, 2),
        Err(VecMathError::BufferTooShort {
            operand: "x",
            len: 1,
            n: 2
        })
    );
}

#[test]
fn test_validate_nonzero() {
    assert!(Validator::validate_nonzero(&[1.0, -2.0, 1e-300]).is_ok());
    assert!(Validator::validate_nonzero::<f64>(&[]).is_ok());
    assert_eq!(
        Validator::validate_nonzero(&[1.0, -0.0, 0.0]),
        Err(VecMathError::ZeroElement { index: 1 })
    );
}

#[test]
fn test_validate_positive() {
    assert!(Validator::validate_positive(&[1.0_f32, 1e-30]).is_ok());
    assert_eq!(
        Validator::validate_positive(&[3.0, 0.0]),
        Err(VecMathError::NonPositiveElement {
            index: 1,
            value: 0.0
        })
    );
    assert!(matches!(
        Validator::validate_positive(&[f64::NAN]),
        Err(VecMathError::NonPositiveElement { index: 0, .. })
    ));
    assert!(Validator::validate_positive(&[f64::INFINITY]).is_ok());
}

#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("backend")),
        Err(VecMathError::DuplicateParameter {
            parameter: "backend"
        })
    );
}
