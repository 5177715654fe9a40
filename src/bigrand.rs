//! Randomization of big integers
#![cfg(feature = "rand")]
#![cfg_attr(docsrs, doc(cfg(feature = "rand")))]

use alloc::vec::Vec;

use rand::prelude::*;

use num_integer::Integer;
use num_traits::Zero;

use crate::big_digit::{self, BigDigit};
use crate::biguint::{biguint_from_vec, BigUint};

/// A trait for sampling random big integers.
///
/// The `rand` feature must be enabled to use this. See crate-level documentation for details.
pub trait RandBigInt {
    /// Generate a random [`BigUint`] of the given bit size.
    fn gen_biguint(&mut self, bit_size: u64) -> BigUint;

    /// Generate a random [`BigUint`] less than the given bound. Fails
    /// when the bound is zero.
    fn gen_biguint_below(&mut self, bound: &BigUint) -> BigUint;

    /// Generate a random [`BigUint`] within the given range. The lower
    /// bound is inclusive; the upper bound is exclusive. Fails when
    /// the upper bound is not greater than the lower bound.
    fn gen_biguint_range(&mut self, lbound: &BigUint, ubound: &BigUint) -> BigUint;
}

impl<R: Rng + ?Sized> RandBigInt for R {
    fn gen_biguint(&mut self, bit_size: u64) -> BigUint {
        if bit_size == 0 {
            return BigUint::zero();
        }
        let (digits, rem) = bit_size.div_rem(&(big_digit::BITS as u64));
        let len = digits as usize + (rem > 0) as usize;
        let mut data: Vec<BigDigit> = (0..len)
            .map(|_| self.random::<BigDigit>() & big_digit::MASK)
            .collect();
        if rem > 0 {
            data[len - 1] &= (1 << rem) - 1;
        }
        biguint_from_vec(data)
    }

    fn gen_biguint_below(&mut self, bound: &BigUint) -> BigUint {
        assert!(!bound.is_zero());
        let bits = bound.bits();
        loop {
            let n = self.gen_biguint(bits);
            if n < *bound {
                return n;
            }
        }
    }

    fn gen_biguint_range(&mut self, lbound: &BigUint, ubound: &BigUint) -> BigUint {
        assert!(*lbound < *ubound);
        if lbound.is_zero() {
            self.gen_biguint_below(ubound)
        } else {
            lbound + self.gen_biguint_below(&(ubound - lbound))
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use num_traits::One;

    use super::*;

    #[test]
    fn gen_biguint_respects_the_bit_size() {
        let mut rng = XorShiftRng::from_seed([36u8; 16]);
        for bits in [0u64, 1, 27, 28, 29, 64, 200] {
            for _ in 0..50 {
                let n = rng.gen_biguint(bits);
                assert!(n.bits() <= bits, "{} bits, got {}", bits, n.bits());
            }
        }
    }

    #[test]
    fn gen_biguint_below_stays_below() {
        let mut rng = XorShiftRng::from_seed([37u8; 16]);
        let bound = rng.gen_biguint(100) + BigUint::one();
        for _ in 0..200 {
            assert!(rng.gen_biguint_below(&bound) < bound);
        }
    }

    #[test]
    fn gen_biguint_range_stays_in_range() {
        let mut rng = XorShiftRng::from_seed([38u8; 16]);
        let lo = rng.gen_biguint(90);
        let hi = &lo + &rng.gen_biguint(90) + BigUint::one();
        for _ in 0..200 {
            let n = rng.gen_biguint_range(&lo, &hi);
            assert!(lo <= n && n < hi);
        }
    }
}
