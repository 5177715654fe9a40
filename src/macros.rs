/// Select one of two items depending on the digit width.
///
/// The first item is compiled for 28-bit digits (`u32` words), the second
/// for 60-bit digits (`u64` words, feature `u64_digit`).
macro_rules! cfg_digit {
    ($item28:item $item60:item) => {
        #[cfg(not(feature = "u64_digit"))]
        $item28

        #[cfg(feature = "u64_digit")]
        $item60
    };
}

/// Forward the owned/borrowed operand combinations of a binary operator to
/// the reference-reference implementation.
macro_rules! forward_binop {
    (impl $imp:ident for BigUint, $method:ident) => {
        impl $imp<BigUint> for BigUint {
            type Output = BigUint;

            #[inline]
            fn $method(self, other: BigUint) -> BigUint {
                $imp::$method(&self, &other)
            }
        }

        impl $imp<&BigUint> for BigUint {
            type Output = BigUint;

            #[inline]
            fn $method(self, other: &BigUint) -> BigUint {
                $imp::$method(&self, other)
            }
        }

        impl $imp<BigUint> for &BigUint {
            type Output = BigUint;

            #[inline]
            fn $method(self, other: BigUint) -> BigUint {
                $imp::$method(self, &other)
            }
        }
    };
}
