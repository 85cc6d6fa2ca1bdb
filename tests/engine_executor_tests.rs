#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use vecmath_rs::internals::engine::executor::{ExpMode, KernelConfig, VecKernel};
use vecmath_rs::internals::math::fastexp::fast_exp;
use vecmath_rs::internals::primitives::backend::Backend;
use vecmath_rs::internals::primitives::errors::VecMathError;

fn kernel(backend: Backend) -> VecKernel {
    VecKernel::from_config(KernelConfig {
        backend,
        ..KernelConfig::default()
    })
}

fn strict_kernel() -> VecKernel {
    VecKernel::from_config(KernelConfig {
        check_domain: true,
        ..KernelConfig::default()
    })
}

// ============================================================================
// Length Validation Tests
// ============================================================================

#[test]
fn test_short_output_is_rejected_without_mutation() {
    let k = kernel(Backend::Scalar);
    let mut y = vec![1.0, 2.0];
    let x = vec![1.0, 1.0, 1.0];

    let err = k.add(&mut y, &x, 3).unwrap_err();
    assert_eq!(
        err,
        VecMathError::BufferTooShort {
            operand: "y",
            len: 2,
            n: 3
        }
    );
    assert_eq!(y, vec![1.0, 2.0]);
}

#[test]
fn test_short_input_is_rejected_without_mutation() {
    let k = kernel(Backend::Simd);
    let mut y = vec![1.0; 8];
    let x = vec![1.0; 5];

    let err = k.add_scaled(&mut y, 2.0, &x, 8).unwrap_err();
    assert_eq!(
        err,
        VecMathError::BufferTooShort {
            operand: "x",
            len: 5,
            n: 8
        }
    );
    assert_eq!(y, vec![1.0; 8]);
}

#[test]
fn test_every_operation_checks_length() {
    let k = kernel(Backend::Scalar);
    let mut short = vec![1.0_f64; 2];
    let long = vec![1.0_f64; 4];
    let n = 3;

    assert!(k.zero(&mut short, n).is_err());
    assert!(k.set(&mut short, 1.0, n).is_err());
    assert!(k.copy(&mut short, &long, n).is_err());
    assert!(k.sub(&mut short, &long, n).is_err());
    assert!(k.sub_scaled(&mut short, 1.0, &long, n).is_err());
    assert!(k.mul(&mut short, &long, n).is_err());
    assert!(k.invert(&mut short, n).is_err());
    assert!(k.scale(&mut short, 2.0, n).is_err());
    assert!(k.exp(&mut short, n).is_err());
    assert!(k.dot(&short, &long, n).is_err());
    assert!(k.dot(&long, &short, n).is_err());
    assert!(k.sum(&short, n).is_err());
    assert!(k.sum_log(&short, n).is_err());
    assert_eq!(short, vec![1.0, 1.0]);
}

#[test]
fn test_longer_buffers_are_accepted() {
    let k = kernel(Backend::Simd);
    let mut y = vec![1.0; 10];
    let x = vec![2.0; 12];
    k.add(&mut y, &x, 6).unwrap();
    assert_eq!(&y[..6], &[3.0; 6]);
    assert_eq!(&y[6..], &[1.0; 4]);
}

// ============================================================================
// Backend Dispatch Tests
// ============================================================================

#[test]
fn test_backends_agree_bitwise() {
    let scalar = kernel(Backend::Scalar);
    let simd = kernel(Backend::Simd);
    let x: Vec<f64> = (0..23).map(|i| (i as f64 * 0.37).sin()).collect();
    let y0: Vec<f64> = (0..23).map(|i| (i as f64 * 1.3).cos() + 2.0).collect();

    let mut a = y0.clone();
    let mut b = y0.clone();
    for k in [&scalar, &simd] {
        let y = if k.backend() == Backend::Scalar {
            &mut a
        } else {
            &mut b
        };
        k.add(y, &x, 23).unwrap();
        k.add_scaled(y, 0.3, &x, 23).unwrap();
        k.sub_scaled(y, 1.7, &x, 23).unwrap();
        k.mul(y, &x, 23).unwrap();
        k.scale(y, -2.5, 23).unwrap();
        k.sub(y, &x, 23).unwrap();
        k.invert(y, 23).unwrap();
    }
    let abits: Vec<u64> = a.iter().map(|v| v.to_bits()).collect();
    let bbits: Vec<u64> = b.iter().map(|v| v.to_bits()).collect();
    assert_eq!(abits, bbits);
}

#[test]
fn test_simd_f32_partial_length() {
    let k = kernel(Backend::Simd);
    let mut y = vec![1.0_f32; 11];
    let x = vec![0.5_f32; 11];
    k.mul(&mut y, &x, 9).unwrap();
    assert_eq!(&y[..9], &[0.5; 9]);
    assert_eq!(&y[9..], &[1.0; 2]);
}

// ============================================================================
// Reduction and Exp Tests
// ============================================================================

#[test]
fn test_reductions() {
    let k = VecKernel::default();
    assert_eq!(k.dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], 3).unwrap(), 32.0);
    assert_eq!(k.sum(&[1.0, 2.0, 3.0, 4.0], 4).unwrap(), 10.0);
    let e = core::f64::consts::E;
    assert_relative_eq!(
        k.sum_log(&[1.0, e, e * e], 3).unwrap(),
        3.0,
        max_relative = 1e-14
    );
}

#[test]
fn test_exp_modes() {
    let fast = VecKernel::default();
    let exact = VecKernel::from_config(KernelConfig {
        exp_mode: ExpMode::Exact,
        ..KernelConfig::default()
    });

    let mut a = vec![0.0, 0.75, -3.0];
    let mut b = a.clone();
    fast.exp(&mut a, 3).unwrap();
    exact.exp(&mut b, 3).unwrap();

    assert_eq!(a[0], 1.0);
    assert_eq!(b[0], 1.0);
    assert_eq!(a[1], fast_exp(0.75));
    assert_eq!(b[1], 0.75_f64.exp());
    assert_relative_eq!(a[2], b[2], max_relative = 1e-12);
}

// ============================================================================
// Domain Check Tests
// ============================================================================

#[test]
fn test_invert_domain_check() {
    let k = strict_kernel();
    let mut y = vec![2.0, 0.0, 4.0];
    assert_eq!(
        k.invert(&mut y, 3).unwrap_err(),
        VecMathError::ZeroElement { index: 1 }
    );
    assert_eq!(y, vec![2.0, 0.0, 4.0]);

    // The zero lies outside 0..n
    k.invert(&mut y, 1).unwrap();
    assert_eq!(y[0], 0.5);
}

#[test]
fn test_invert_without_domain_check_gives_infinity() {
    let k = VecKernel::default();
    let mut y = vec![0.0];
    k.invert(&mut y, 1).unwrap();
    assert_eq!(y[0], f64::INFINITY);
}

#[test]
fn test_sum_log_domain_check() {
    let k = strict_kernel();
    assert_eq!(
        k.sum_log(&[1.0, 2.0, -0.5], 3).unwrap_err(),
        VecMathError::NonPositiveElement {
            index: 2,
            value: -0.5
        }
    );
    assert!(matches!(
        k.sum_log(&[0.0_f32], 1),
        Err(VecMathError::NonPositiveElement { index: 0, .. })
    ));
    assert!(matches!(
        k.sum_log(&[1.0, f64::NAN], 2),
        Err(VecMathError::NonPositiveElement { index: 1, .. })
    ));
    assert_eq!(k.sum_log(&[1.0, 1.0, -0.5], 2).unwrap(), 0.0);
}

#[test]
fn test_kernel_is_shareable() {
    fn assert_send_sync<T: Send + Sync + Copy>() {}
    assert_send_sync::<VecKernel>();
}
