//! Generic fixed-width vector type.
//!
//! `GVec<T, N>` is a plain `[T; N]` with elementwise operators. Boolean results
//! of lanewise comparisons are [`Mask`]s: vectors of `i32` where true is `-1`
//! (all bits set) and false is `0`.

use std::ops::{
    Add, AddAssign, BitAnd, BitOr, BitXor, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg,
    Not, Sub, SubAssign,
};

use crate::simd::traits::{IntLane, Lane};

/// `N` lanes of `T`.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GVec<T, const N: usize>(pub [T; N]);

/// Lanewise boolean vector.
pub type Mask<const N: usize> = GVec<i32, N>;

pub type Float2 = GVec<f32, 2>;
pub type Float4 = GVec<f32, 4>;
pub type Int2 = GVec<i32, 2>;
pub type Int4 = GVec<i32, 4>;
pub type UInt2 = GVec<u32, 2>;
pub type UInt4 = GVec<u32, 4>;

/// Lane value of a true mask lane.
pub const TRUE: i32 = -1;

/// Lane value of a false mask lane.
pub const FALSE: i32 = 0;

#[inline(always)]
fn mask_lane(value: bool) -> i32 {
    if value {
        TRUE
    } else {
        FALSE
    }
}

impl<T: Lane, const N: usize> GVec<T, N> {
    /// Number of lanes.
    pub const LANES: usize = N;

    #[inline(always)]
    pub const fn from_array(lanes: [T; N]) -> Self {
        Self(lanes)
    }

    /// All lanes set to `value`.
    #[inline(always)]
    pub fn splat(value: T) -> Self {
        Self([value; N])
    }

    #[inline(always)]
    pub fn to_array(self) -> [T; N] {
        self.0
    }

    #[inline(always)]
    pub fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Applies `f` to every lane.
    #[inline(always)]
    pub fn map(self, f: impl FnMut(T) -> T) -> Self {
        Self(self.0.map(f))
    }

    /// Combines lanes pairwise with `f`.
    #[inline(always)]
    pub fn zip_map(self, rhs: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        Self(std::array::from_fn(|i| f(self.0[i], rhs.0[i])))
    }

    #[inline(always)]
    fn compare(self, rhs: Self, mut f: impl FnMut(T, T) -> bool) -> Mask<N> {
        GVec(std::array::from_fn(|i| mask_lane(f(self.0[i], rhs.0[i]))))
    }

    #[inline(always)]
    pub fn simd_eq(self, rhs: Self) -> Mask<N> {
        self.compare(rhs, |a, b| a == b)
    }

    /// True where lanes differ, and for every NaN lane.
    #[inline(always)]
    pub fn simd_ne(self, rhs: Self) -> Mask<N> {
        self.compare(rhs, |a, b| a != b)
    }

    #[inline(always)]
    pub fn simd_lt(self, rhs: Self) -> Mask<N> {
        self.compare(rhs, |a, b| a < b)
    }

    #[inline(always)]
    pub fn simd_le(self, rhs: Self) -> Mask<N> {
        self.compare(rhs, |a, b| a <= b)
    }

    #[inline(always)]
    pub fn simd_gt(self, rhs: Self) -> Mask<N> {
        self.compare(rhs, |a, b| a > b)
    }

    #[inline(always)]
    pub fn simd_ge(self, rhs: Self) -> Mask<N> {
        self.compare(rhs, |a, b| a >= b)
    }
}

impl<T: Lane, const N: usize> Default for GVec<T, N> {
    #[inline(always)]
    fn default() -> Self {
        Self::splat(T::zero())
    }
}

impl<T: Lane, const N: usize> From<[T; N]> for GVec<T, N> {
    #[inline(always)]
    fn from(lanes: [T; N]) -> Self {
        Self(lanes)
    }
}

impl<T: Lane, const N: usize> From<GVec<T, N>> for [T; N] {
    #[inline(always)]
    fn from(v: GVec<T, N>) -> Self {
        v.0
    }
}

impl<T, const N: usize> Index<usize> for GVec<T, N> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for GVec<T, N> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

////// Swizzles //////

impl<T: Lane> GVec<T, 2> {
    #[inline(always)]
    pub fn new(x: T, y: T) -> Self {
        Self([x, y])
    }

    #[inline(always)]
    pub fn x(self) -> T {
        self.0[0]
    }

    #[inline(always)]
    pub fn y(self) -> T {
        self.0[1]
    }

    #[inline(always)]
    pub fn yx(self) -> Self {
        Self([self.0[1], self.0[0]])
    }
}

impl<T: Lane> GVec<T, 4> {
    #[inline(always)]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self([x, y, z, w])
    }

    #[inline(always)]
    pub fn x(self) -> T {
        self.0[0]
    }

    #[inline(always)]
    pub fn y(self) -> T {
        self.0[1]
    }

    #[inline(always)]
    pub fn z(self) -> T {
        self.0[2]
    }

    #[inline(always)]
    pub fn w(self) -> T {
        self.0[3]
    }

    #[inline(always)]
    pub fn xy(self) -> GVec<T, 2> {
        GVec([self.0[0], self.0[1]])
    }

    #[inline(always)]
    pub fn zw(self) -> GVec<T, 2> {
        GVec([self.0[2], self.0[3]])
    }
}

////// Arithmetic //////

macro_rules! impl_binary_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $lane:ident) => {
        impl<T: Lane, const N: usize> $op for GVec<T, N> {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self::Output {
                self.zip_map(rhs, T::$lane)
            }
        }

        impl<T: Lane, const N: usize> $assign for GVec<T, N> {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Self) {
                *self = (*self).$method(rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, lane_add);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, lane_sub);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, lane_mul);
impl_binary_op!(Div, div, DivAssign, div_assign, lane_div);

impl<T: Lane, const N: usize> Neg for GVec<T, N> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        self.map(T::lane_neg)
    }
}

////// Bitwise logic (integer lanes and masks) //////

impl<T: IntLane, const N: usize> BitAnd for GVec<T, N> {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |a, b| a & b)
    }
}

impl<T: IntLane, const N: usize> BitOr for GVec<T, N> {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |a, b| a | b)
    }
}

impl<T: IntLane, const N: usize> BitXor for GVec<T, N> {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |a, b| a ^ b)
    }
}

impl<T: IntLane, const N: usize> Not for GVec<T, N> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        self.map(|a| !a)
    }
}
