#![cfg(feature = "dev")]

use vecmath_rs::internals::api::{Backend, ExpMode, VecMathBuilder as VecMath, VecMathError};
use vecmath_rs::prelude::{Exact, Fast, KernelConfig, Scalar, Simd, VecKernel};

// ============================================================================
// Builder Tests
// ============================================================================

#[test]
fn test_builder_defaults() {
    let kernel = VecMath::new().build().unwrap();
    assert_eq!(kernel.backend(), Backend::Scalar);
    assert_eq!(kernel.exp_mode(), ExpMode::Fast);
    assert!(!kernel.config().check_domain);
}

#[test]
fn test_builder_sets_every_parameter() {
    let kernel = VecMath::new()
        .backend(Simd)
        .exp_mode(Exact)
        .check_domain()
        .build()
        .unwrap();
    assert_eq!(kernel.backend(), Backend::Simd);
    assert_eq!(kernel.exp_mode(), ExpMode::Exact);
    assert!(kernel.config().check_domain);
}

#[test]
fn test_config_roundtrips_through_public_types() {
    let built = VecMath::new().backend(Simd).check_domain().build().unwrap();
    let config: KernelConfig = built.config();
    assert_eq!(
        config,
        KernelConfig {
            backend: Simd,
            exp_mode: Fast,
            check_domain: true,
        }
    );
    assert_eq!(VecKernel::from_config(config), built);
}

#[test]
fn test_builder_rejects_duplicate_backend() {
    let result = VecMath::new().backend(Scalar).backend(Simd).build();
    assert_eq!(
        result.unwrap_err(),
        VecMathError::DuplicateParameter {
            parameter: "backend"
        }
    );
}

#[test]
fn test_builder_rejects_duplicate_exp_mode_and_domain() {
    assert!(matches!(
        VecMath::new().exp_mode(Fast).exp_mode(Fast).build(),
        Err(VecMathError::DuplicateParameter {
            parameter: "exp_mode"
        })
    ));
    assert!(matches!(
        VecMath::new().check_domain().check_domain().build(),
        Err(VecMathError::DuplicateParameter {
            parameter: "check_domain"
        })
    ));
}

#[test]
fn test_builder_clone_is_independent() {
    let base = VecMath::new().exp_mode(Exact);
    let scalar = base.clone().build().unwrap();
    let simd = base.backend(Simd).build().unwrap();
    assert_eq!(scalar.backend(), Backend::Scalar);
    assert_eq!(simd.backend(), Backend::Simd);
    assert_eq!(scalar.exp_mode(), simd.exp_mode());
}

// ============================================================================
// End-to-end Tests
// ============================================================================

#[test]
fn test_softmax_normalization() {
    let kernel = VecMath::new().backend(Simd).build().unwrap();

    let mut scores = vec![0.0_f64, 1.0, 2.0, -1.0, 0.5];
    let n = scores.len();
    kernel.exp(&mut scores, n).unwrap();
    let z = kernel.sum(&scores, n).unwrap();
    kernel.scale(&mut scores, 1.0 / z, n).unwrap();

    assert!((kernel.sum(&scores, n).unwrap() - 1.0).abs() < 1e-12);
    assert!(scores[2] > scores[1] && scores[1] > scores[0]);
}

#[test]
fn test_gradient_step_f32() {
    let kernel = VecMath::new().backend(Simd).build().unwrap();

    let mut w = vec![1.0_f32; 10];
    let g: Vec<f32> = (0..10).map(|i| i as f32).collect();
    kernel.sub_scaled(&mut w, 0.5, &g, 10).unwrap();

    let expected: Vec<f32> = (0..10).map(|i| 1.0 - 0.5 * i as f32).collect();
    assert_eq!(w, expected);
    let sequential = w.iter().zip(&g).fold(0.0_f32, |s, (a, b)| s + a * b);
    assert_eq!(kernel.dot(&w, &g, 10).unwrap(), sequential);
}
