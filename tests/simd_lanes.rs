//! Behavioral tests for the public lane functions.
//!
//! Each case prints its inputs and result so failures on an unfamiliar target
//! show which lane went wrong.

use vgmath::simd::{
    abs, all, any, ceil, clamp, cross, dot, floor, if_then_else, isnan, join, load2f, load4f,
    load_partial, max, min, mix, mix_lanes, sqrt, store, store_partial, Float2, Float4, GVec, Int2,
    Int4, UInt4, FALSE, TRUE,
};

#[test]
fn test_min_max_nan_handling() {
    let nan = f32::NAN;
    let cases = [
        (nan, 5.0, 5.0, 5.0),
        (5.0, nan, 5.0, 5.0),
        (1.0, 2.0, 1.0, 2.0),
        (-3.0, -3.0, -3.0, -3.0),
    ];

    for (a, b, expected_min, expected_max) in cases {
        let lo = min(Float2::splat(a), Float2::splat(b));
        let hi = max(Float4::splat(a), Float4::splat(b));
        println!("a = {a}, b = {b}: min = {:?}, max = {:?}", lo, hi);

        assert_eq!(lo, Float2::splat(expected_min), "min({a}, {b})");
        assert_eq!(hi, Float4::splat(expected_max), "max({a}, {b})");
    }

    // Widths without a dedicated backend kernel take the portable path.
    let lo = min(GVec([nan, 1.0, 7.0]), GVec([3.0, nan, 2.0]));
    assert_eq!(lo.to_array(), [3.0, 1.0, 2.0]);
}

#[test]
fn test_min_max_integers() {
    let a = Int4::new(i32::MIN, -1, 5, i32::MAX);
    let b = Int4::new(0, -2, 5, 0);
    assert_eq!(min(a, b).to_array(), [i32::MIN, -2, 5, 0]);
    assert_eq!(max(a, b).to_array(), [0, -1, 5, i32::MAX]);

    let u = UInt4::new(0, u32::MAX, 3, 4);
    assert_eq!(max(u, UInt4::splat(3)).to_array(), [3, u32::MAX, 3, 4]);
}

#[test]
fn test_clamp_edge_cases() {
    let nan = f32::NAN;
    let x = Float4::new(nan, -5.0, 0.5, 5.0);

    let r = clamp(x, Float4::splat(0.0), Float4::splat(1.0));
    println!("clamp({x:?}, 0, 1) = {r:?}");
    assert_eq!(r.to_array(), [0.0, 0.0, 0.5, 1.0]);

    // hi <= lo returns hi.
    let r = clamp(x, Float4::splat(2.0), Float4::splat(1.0));
    assert_eq!(r.to_array(), [1.0; 4]);

    // NaN bounds are ignored.
    let r = clamp(Float4::new(-1.0, 0.5, 2.0, 0.0), Float4::splat(nan), Float4::splat(1.0));
    assert_eq!(r.to_array(), [-1.0, 0.5, 1.0, 0.0]);
    let r = clamp(Float4::new(-1.0, 0.5, 2.0, 0.0), Float4::splat(0.0), Float4::splat(nan));
    assert_eq!(r.to_array(), [0.0, 0.5, 2.0, 0.0]);
}

#[test]
fn test_abs() {
    let r = abs(Float4::new(-0.0, -1.5, f32::NEG_INFINITY, 2.0));
    assert_eq!(r.to_array(), [0.0, 1.5, f32::INFINITY, 2.0]);
    assert_eq!(r[0].to_bits(), 0.0f32.to_bits());
    assert!(abs(Float2::splat(-f32::NAN)).0.iter().all(|x| x.is_nan() && x.is_sign_positive()));

    assert_eq!(abs(Int2::new(i32::MIN, -7)).to_array(), [i32::MIN, 7]);
}

#[test]
fn test_masks() {
    let x = Float4::new(1.0, f32::NAN, 3.0, f32::NAN);
    let nan_mask = isnan(x);
    assert_eq!(nan_mask.to_array(), [FALSE, TRUE, FALSE, TRUE]);
    assert_eq!(isnan(Int4::splat(7)).to_array(), [FALSE; 4]);

    assert!(any(nan_mask));
    assert!(!all(nan_mask));
    assert!(all(isnan(Float2::splat(f32::NAN))));
    assert!(!any(isnan(Float2::splat(0.0))));

    let cleaned = if_then_else(nan_mask, Float4::splat(0.0), x);
    assert_eq!(cleaned.to_array(), [1.0, 0.0, 3.0, 0.0]);

    // The unselected NaN lanes do not leak.
    let r = if_then_else(Int2::new(TRUE, FALSE), Float2::splat(1.0), Float2::splat(f32::NAN));
    assert_eq!(r.x(), 1.0);
    assert!(r.y().is_nan());
}

#[test]
fn test_rounding_and_sqrt() {
    let x = Float4::new(-1.5, -0.5, 0.5, 1.5);
    assert_eq!(floor(x).to_array(), [-2.0, -1.0, 0.0, 1.0]);
    assert_eq!(ceil(x).to_array(), [-1.0, -0.0, 1.0, 2.0]);

    let r = sqrt(Float4::new(16.0, -1.0, -0.0, f32::INFINITY));
    assert_eq!(r[0], 4.0);
    assert!(r[1].is_nan());
    assert_eq!(r[2].to_bits(), (-0.0f32).to_bits());
    assert_eq!(r[3], f32::INFINITY);

    assert_eq!(sqrt(Float2::new(9.0, 0.25)).to_array(), [3.0, 0.5]);
    assert_eq!(sqrt(GVec([4.0f32])).to_array(), [2.0]);
}

#[test]
fn test_dot_cross() {
    let a = Float4::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(dot(a, a), 30.0);
    assert_eq!(dot(Int2::new(2, 3), Int2::new(4, -1)), 5);
    assert_eq!(cross(Float2::new(1.0, 0.0), Float2::new(0.0, 1.0)), 1.0);
    assert_eq!(cross(Float2::new(0.0, 1.0), Float2::new(1.0, 0.0)), -1.0);
}

#[test]
fn test_mix() {
    let a = Float4::new(0.0, 1.0, -2.0, 10.0);
    let b = Float4::new(1.0, 3.0, 2.0, 20.0);

    assert_eq!(mix(a, b, 0.0), a);
    assert_eq!(mix(a, b, 0.5).to_array(), [0.5, 2.0, 0.0, 15.0]);

    let end = mix(a, b, 1.0);
    for i in 0..4 {
        assert!((end[i] - b[i]).abs() <= f32::EPSILON * b[i].abs(), "lane {i}: {}", end[i]);
    }

    let t = Float4::new(0.0, 0.5, 1.0, 0.25);
    assert_eq!(mix_lanes(a, b, t).to_array(), [0.0, 2.0, 2.0, 12.5]);
}

#[test]
fn test_memory_round_trip_at_offsets() {
    let data: Vec<f32> = (0..7).map(|i| i as f32).collect();
    for offset in 0..=3 {
        let v = load4f(&data[offset..]);
        let mut out = vec![-1.0f32; 4];
        store(&mut out, v);
        assert_eq!(out, data[offset..offset + 4].to_vec(), "offset {offset}");
    }

    let v: Float4 = join(load2f(&data[5..]), Float2::new(7.0, 8.0));
    assert_eq!(v.to_array(), [5.0, 6.0, 7.0, 8.0]);

    let tail: Float4 = load_partial(&data[5..]);
    assert_eq!(tail.to_array(), [5.0, 6.0, 0.0, 0.0]);

    let mut out = [0.0f32; 2];
    store_partial(&mut out, tail).unwrap();
    assert_eq!(out, [5.0, 6.0]);
}
