//! SIMD lane kernels for elementwise vector operations.
//!
//! ## Purpose
//!
//! This module provides `wide`-based variants of the elementwise routines in
//! `algorithms::vector`, processing a full register (`f64x4` or `f32x8`) per
//! step and finishing the tail with the scalar loop.
//!
//! ## Design notes
//!
//! * **Bit-identical**: Every lane performs the same IEEE operations in the same
//!   order as the scalar loop (`a * x` then `+`, never a fused multiply-add), so
//!   the backend choice never changes results.
//! * **Slices in, slices out**: Callers pass slices already trimmed to `n`.
//!   Paired slices must be the same length.
//!
//! ## Non-goals
//!
//! * Reductions are not vectorized (lane-wise partial sums reorder accumulation).
//! * `exp` is not vectorized.

macro_rules! impl_lanes {
    ($name:ident, $t:ty, $simd:ident, $width:expr) => {
        /// Lane kernels for
        #[doc = concat!("`", stringify!($t), "` using `wide::", stringify!($simd), "`.")]
        pub mod $name {
            use wide::$simd;

            /// Number of elements per register.
            pub const WIDTH: usize = $width;

            #[inline(always)]
            fn load(chunk: &[$t]) -> $simd {
                let mut arr = [0.0; WIDTH];
                arr.copy_from_slice(chunk);
                $simd::from(arr)
            }

            #[inline(always)]
            fn store(chunk: &mut [$t], v: $simd) {
                let arr: [$t; WIDTH] = v.into();
                chunk.copy_from_slice(&arr);
            }

            /// `y[i] += x[i]`.
            pub fn add(y: &mut [$t], x: &[$t]) {
                debug_assert_eq!(y.len(), x.len());
                let mut yc = y.chunks_exact_mut(WIDTH);
                let mut xc = x.chunks_exact(WIDTH);
                for (yb, xb) in (&mut yc).zip(&mut xc) {
                    let v = load(yb) + load(xb);
                    store(yb, v);
                }
                for (yi, &xi) in yc.into_remainder().iter_mut().zip(xc.remainder()) {
                    *yi += xi;
                }
            }

            /// `y[i] += a * x[i]`.
            pub fn add_scaled(y: &mut [$t], a: $t, x: &[$t]) {
                debug_assert_eq!(y.len(), x.len());
                let av = $simd::splat(a);
                let mut yc = y.chunks_exact_mut(WIDTH);
                let mut xc = x.chunks_exact(WIDTH);
                for (yb, xb) in (&mut yc).zip(&mut xc) {
                    let v = load(yb) + av * load(xb);
                    store(yb, v);
                }
                for (yi, &xi) in yc.into_remainder().iter_mut().zip(xc.remainder()) {
                    *yi += a * xi;
                }
            }

            /// `y[i] -= x[i]`.
            pub fn sub(y: &mut [$t], x: &[$t]) {
                debug_assert_eq!(y.len(), x.len());
                let mut yc = y.chunks_exact_mut(WIDTH);
                let mut xc = x.chunks_exact(WIDTH);
                for (yb, xb) in (&mut yc).zip(&mut xc) {
                    let v = load(yb) - load(xb);
                    store(yb, v);
                }
                for (yi, &xi) in yc.into_remainder().iter_mut().zip(xc.remainder()) {
                    *yi -= xi;
                }
            }

            /// `y[i] -= a * x[i]`.
            pub fn sub_scaled(y: &mut [$t], a: $t, x: &[$t]) {
                debug_assert_eq!(y.len(), x.len());
                let av = $simd::splat(a);
                let mut yc = y.chunks_exact_mut(WIDTH);
                let mut xc = x.chunks_exact(WIDTH);
                for (yb, xb) in (&mut yc).zip(&mut xc) {
                    let v = load(yb) - av * load(xb);
                    store(yb, v);
                }
                for (yi, &xi) in yc.into_remainder().iter_mut().zip(xc.remainder()) {
                    *yi -= a * xi;
                }
            }

            /// `y[i] *= x[i]`.
            pub fn mul(y: &mut [$t], x: &[$t]) {
                debug_assert_eq!(y.len(), x.len());
                let mut yc = y.chunks_exact_mut(WIDTH);
                let mut xc = x.chunks_exact(WIDTH);
                for (yb, xb) in (&mut yc).zip(&mut xc) {
                    let v = load(yb) * load(xb);
                    store(yb, v);
                }
                for (yi, &xi) in yc.into_remainder().iter_mut().zip(xc.remainder()) {
                    *yi *= xi;
                }
            }

            /// `y[i] *= a`.
            pub fn scale(y: &mut [$t], a: $t) {
                let av = $simd::splat(a);
                let mut yc = y.chunks_exact_mut(WIDTH);
                for yb in &mut yc {
                    let v = load(yb) * av;
                    store(yb, v);
                }
                for yi in yc.into_remainder() {
                    *yi *= a;
                }
            }

            /// `y[i] = 1 / y[i]`.
            pub fn invert(y: &mut [$t]) {
                let one = $simd::splat(1.0);
                let mut yc = y.chunks_exact_mut(WIDTH);
                for yb in &mut yc {
                    let v = one / load(yb);
                    store(yb, v);
                }
                for yi in yc.into_remainder() {
                    *yi = 1.0 / *yi;
                }
            }
        }
    };
}

impl_lanes!(lanes_f64, f64, f64x4, 4);
impl_lanes!(lanes_f32, f32, f32x8, 8);
