use crate::simd::{
    fallback,
    traits::{Backend, IntLane, Lane},
    Active,
};

/// Copies the first `N` lanes of `x`. Only called where `M == N` is known from
/// the surrounding `match`, so it compiles down to a move.
#[inline(always)]
pub(crate) fn cast_width<const M: usize, const N: usize>(x: [f32; M]) -> [f32; N] {
    std::array::from_fn(|i| x[i])
}

impl Lane for f32 {
    #[inline(always)]
    fn lane_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline(always)]
    fn lane_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline(always)]
    fn lane_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline(always)]
    fn lane_div(self, rhs: Self) -> Self {
        self / rhs
    }

    #[inline(always)]
    fn lane_neg(self) -> Self {
        -self
    }

    #[inline(always)]
    fn lane_abs(self) -> Self {
        f32::from_bits(self.to_bits() & 0x7fff_ffff)
    }

    #[inline(always)]
    fn lane_is_nan(self) -> bool {
        self.is_nan()
    }

    #[inline(always)]
    fn min_lanes<const N: usize>(a: [Self; N], b: [Self; N]) -> [Self; N] {
        match N {
            4 => cast_width(Active::min4(cast_width(a), cast_width(b))),
            2 => cast_width(Active::min2(cast_width(a), cast_width(b))),
            _ => fallback::min_lanes(a, b),
        }
    }

    #[inline(always)]
    fn max_lanes<const N: usize>(a: [Self; N], b: [Self; N]) -> [Self; N] {
        match N {
            4 => cast_width(Active::max4(cast_width(a), cast_width(b))),
            2 => cast_width(Active::max2(cast_width(a), cast_width(b))),
            _ => fallback::max_lanes(a, b),
        }
    }
}

macro_rules! impl_int_lane {
    ($t:ty, |$x:ident| $abs:expr) => {
        impl Lane for $t {
            #[inline(always)]
            fn lane_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline(always)]
            fn lane_sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline(always)]
            fn lane_mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline(always)]
            fn lane_div(self, rhs: Self) -> Self {
                if rhs == 0 {
                    0
                } else {
                    self.wrapping_div(rhs)
                }
            }

            #[inline(always)]
            fn lane_neg(self) -> Self {
                self.wrapping_neg()
            }

            #[inline(always)]
            fn lane_abs(self) -> Self {
                let $x = self;
                $abs
            }
        }

        impl IntLane for $t {}
    };
}

impl_int_lane!(i32, |x| x.wrapping_abs());
impl_int_lane!(u32, |x| x);
