//! Diminished-radix reduction for moduli of the form `2^k − d`.
//!
//! Splitting `a` at bit `k` gives `a = q·2^k + r`, and `2^k ≡ d (mod n)`
//! turns that into `a ≡ q·d + r`, so each pass trades the top of the value
//! for a small multiple of `d` — no division anywhere.

use num_traits::Zero;

use crate::big_digit::{self, BigDigit};
use crate::biguint::multiplication::scalar_mul;
use crate::biguint::shift::div_rem_2d;
use crate::biguint::BigUint;

/// True when the modulus has a single digit, or every bit between the
/// first digit and the top is set — i.e. `n = 2^k − d` with `d` confined
/// to the lowest digit.
pub fn reduce_is_2k(n: &BigUint) -> bool {
    match n.data.len() {
        0 => false,
        1 => true,
        _ => {
            let top = n.bits();
            for i in big_digit::BITS as u64..top {
                if !n.bit(i) {
                    return false;
                }
            }
            true
        }
    }
}

/// True when at least half of the digits equal `MAX_DIGIT`, which makes
/// the multi-digit `μ = 2^k − n` small enough for [`reduce_2k_l`] to
/// converge quickly.
pub fn reduce_is_2k_l(n: &BigUint) -> bool {
    if n.is_zero() {
        return false;
    }
    let full = n.data.iter().filter(|&&d| d == big_digit::MAX_DIGIT).count();
    full >= n.data.len() / 2
}

/// The single digit `d` with `n = 2^bits(n) − d`.
pub fn reduce_2k_setup(n: &BigUint) -> BigDigit {
    let mut tmp = BigUint::power_of_two(n.bits());
    tmp -= n;
    tmp.data.first().copied().unwrap_or(0)
}

/// The multi-digit `μ = 2^bits(n) − n`.
pub fn reduce_2k_setup_l(n: &BigUint) -> BigUint {
    &BigUint::power_of_two(n.bits()) - n
}

/// `a ← a mod n` for `n = 2^k − d` with single-digit `d` from
/// [`reduce_2k_setup`].
pub fn reduce_2k(a: &mut BigUint, n: &BigUint, d: BigDigit) {
    let p = n.bits() as usize;
    loop {
        let (mut q, r) = div_rem_2d(a, p);
        *a = r;
        if !q.is_zero() {
            if d != 1 {
                scalar_mul(&mut q, d);
            }
            *a += &q;
        }
        if *a < *n {
            return;
        }
        *a -= n;
    }
}

/// `a ← a mod n` for `n = 2^k − μ` with multi-digit `μ` from
/// [`reduce_2k_setup_l`].
pub fn reduce_2k_l(a: &mut BigUint, n: &BigUint, mu: &BigUint) {
    let p = n.bits() as usize;
    loop {
        let (q, r) = div_rem_2d(a, p);
        *a = r;
        if !q.is_zero() {
            *a += &(&q * mu);
        }
        if *a < *n {
            return;
        }
        *a -= n;
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use num_traits::One;

    use crate::biguint::test_util;

    use super::*;

    fn two_k_minus(k: u64, d: u64) -> BigUint {
        &BigUint::power_of_two(k) - &BigUint::from(d)
    }

    #[test]
    fn classifier_accepts_diminished_moduli() {
        assert!(reduce_is_2k(&BigUint::from(7u32)));
        assert!(reduce_is_2k(&BigUint::from(1000u32)));
        assert!(reduce_is_2k(&two_k_minus(128, 159)));
        assert!(reduce_is_2k(&two_k_minus(255, 19)));
        assert!(!reduce_is_2k(&BigUint::zero()));
        assert!(!reduce_is_2k(&(&BigUint::power_of_two(128) + &BigUint::one())));
        assert!(!reduce_is_2k(&test_util::gen(
            &mut XorShiftRng::from_seed([23u8; 16]),
            128
        )));
    }

    #[test]
    fn loose_classifier_counts_full_digits() {
        assert!(reduce_is_2k_l(&two_k_minus(200, 1)));
        assert!(reduce_is_2k_l(&two_k_minus(
            200,
            big_digit::MAX_DIGIT as u64
        )));
        assert!(!reduce_is_2k_l(&BigUint::zero()));
        assert!(!reduce_is_2k_l(&BigUint::power_of_two(200)));
    }

    #[test]
    fn setup_recovers_the_deficit() {
        assert_eq!(reduce_2k_setup(&BigUint::from(1000u32)), 24);
        assert_eq!(reduce_2k_setup(&two_k_minus(128, 159)), 159);
        assert_eq!(reduce_2k_setup(&BigUint::from(7u32)), 1);
        assert_eq!(
            reduce_2k_setup_l(&two_k_minus(200, 123456789)),
            BigUint::from(123456789u32)
        );
    }

    #[test]
    fn reduce_matches_division() {
        let mut rng = XorShiftRng::from_seed([24u8; 16]);
        for n in [
            BigUint::from(7u32),
            BigUint::from(1000u32),
            two_k_minus(64, 59),
            two_k_minus(128, 159),
            two_k_minus(255, 19),
        ] {
            let d = reduce_2k_setup(&n);
            for _ in 0..50 {
                let a = test_util::gen_below(&mut rng, &(&n * &n));
                let mut r = a.clone();
                reduce_2k(&mut r, &n, d);
                assert_eq!(r, &a % &n, "a = {}, n = {}", a, n);
            }
        }
    }

    #[test]
    fn reduce_l_matches_division() {
        let mut rng = XorShiftRng::from_seed([25u8; 16]);
        for n in [
            two_k_minus(200, 1),
            two_k_minus(200, 123456789),
            two_k_minus(333, 987654321),
        ] {
            assert!(reduce_is_2k_l(&n));
            let mu = reduce_2k_setup_l(&n);
            for _ in 0..50 {
                let a = test_util::gen_below(&mut rng, &(&n * &n));
                let mut r = a.clone();
                reduce_2k_l(&mut r, &n, &mu);
                assert_eq!(r, &a % &n, "a = {}, n = {}", a, n);
            }
        }
    }

    #[test]
    fn reduce_with_unit_deficit_skips_the_multiply() {
        // n = 2^k − 1 reaches the d == 1 fast path
        let n = two_k_minus(89, 1);
        assert_eq!(reduce_2k_setup(&n), 1);
        let mut a = BigUint::power_of_two(178);
        reduce_2k(&mut a, &n, 1);
        assert_eq!(a, &BigUint::power_of_two(178) % &n);
    }
}
