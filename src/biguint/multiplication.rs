use core::ops::Mul;

use alloc::vec::Vec;

use num_traits::Zero;

use crate::big_digit::{self, BigDigit, DoubleBigDigit};

use super::addition::adc;
use super::{biguint_from_vec, BigUint};

/// Multiply-accumulate with carry: `a + b·c + *acc`, returning the low
/// digit and leaving the carry in `acc`.
#[inline]
pub fn mac_with_carry(a: BigDigit, b: BigDigit, c: BigDigit, acc: &mut DoubleBigDigit) -> BigDigit {
    *acc += a as DoubleBigDigit;
    *acc += b as DoubleBigDigit * c as DoubleBigDigit;
    let (hi, lo) = big_digit::from_double(*acc);
    *acc = hi as DoubleBigDigit;
    lo
}

/// `acc += b·c` for a single digit `c`; `acc` must be one digit longer
/// than `b` to absorb the carry.
pub fn mac_digit(acc: &mut [BigDigit], b: &[BigDigit], c: BigDigit) {
    if c == 0 {
        return;
    }

    let mut carry = 0;
    let (a_lo, a_hi) = acc.split_at_mut(b.len());

    for (a, &b) in a_lo.iter_mut().zip(b) {
        *a = mac_with_carry(*a, b, c, &mut carry);
    }

    for a in a_hi {
        if carry == 0 {
            break;
        }
        *a = adc(*a, 0, &mut carry);
    }

    debug_assert!(carry == 0);
}

/// Schoolbook multiply-accumulate: `acc += a·b`. `acc` must hold at least
/// `a.len() + b.len()` digits.
pub fn mac3(acc: &mut [BigDigit], a: &[BigDigit], b: &[BigDigit]) {
    // keep the inner loop running over the longer operand
    let (a, b) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    for (i, &d) in a.iter().enumerate() {
        mac_digit(&mut acc[i..], b, d);
    }
}

/// `a · b`.
pub fn mul3(a: &[BigDigit], b: &[BigDigit]) -> BigUint {
    let mut data = alloc::vec![0; a.len() + b.len()];
    mac3(&mut data, a, b);
    biguint_from_vec(data)
}

/// `a²`.
pub fn sqr(a: &BigUint) -> BigUint {
    mul3(&a.data, &a.data)
}

/// In-place multiplication by a single digit.
pub fn scalar_mul(a: &mut BigUint, b: BigDigit) {
    match b {
        0 => a.data.clear(),
        1 => {}
        _ => {
            let mut carry = 0;
            for d in a.data.iter_mut() {
                *d = mac_with_carry(0, *d, b, &mut carry);
            }
            if carry != 0 {
                a.data.push(carry as BigDigit);
            }
        }
    }
}

/// The low `digs` digits of `a · b`, i.e. the product modulo `β^digs`.
pub fn mul_low(a: &BigUint, b: &BigUint, digs: usize) -> BigUint {
    let mut w: Vec<BigDigit> = alloc::vec![0; digs];

    for (ix, &ad) in a.data.iter().enumerate() {
        if ix >= digs {
            break;
        }
        let pb = b.data.len().min(digs - ix);
        let mut carry = 0;
        for iy in 0..pb {
            w[ix + iy] = mac_with_carry(w[ix + iy], ad, b.data[iy], &mut carry);
        }
        if ix + pb < digs {
            // the column past b's end has not been produced yet
            debug_assert_eq!(w[ix + pb], 0);
            w[ix + pb] = carry as BigDigit;
        }
    }

    biguint_from_vec(w)
}

/// The digits of `a · b` at positions `digs` and above; everything below
/// stays zero.
///
/// Partial products that land entirely below `digs` are skipped, so the
/// carries they would feed upward are lost and the digit at position
/// `digs` may sit below the true product digit. Barrett reduction corrects
/// for this with its trailing subtractions.
pub fn mul_high(a: &BigUint, b: &BigUint, digs: usize) -> BigUint {
    let mut w: Vec<BigDigit> = alloc::vec![0; a.data.len() + b.data.len()];

    for (ix, &ad) in a.data.iter().enumerate() {
        let start = digs.saturating_sub(ix);
        if start >= b.data.len() {
            continue;
        }
        let mut carry = 0;
        for iy in start..b.data.len() {
            w[ix + iy] = mac_with_carry(w[ix + iy], ad, b.data[iy], &mut carry);
        }
        debug_assert_eq!(w[ix + b.data.len()], 0);
        w[ix + b.data.len()] = carry as BigDigit;
    }

    biguint_from_vec(w)
}

impl Mul<&BigUint> for &BigUint {
    type Output = BigUint;

    fn mul(self, other: &BigUint) -> BigUint {
        if self.is_zero() || other.is_zero() {
            return BigUint::zero();
        }
        mul3(&self.data, &other.data)
    }
}

forward_binop!(impl Mul for BigUint, mul);

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use crate::biguint::shift::mask_bits;

    use super::*;

    fn big(n: u128) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn matches_u128_arithmetic() {
        let mut rng = XorShiftRng::from_seed([3u8; 16]);
        for _ in 0..1000 {
            let x = rng.random::<u64>();
            let y = rng.random::<u64>();
            let prod = &BigUint::from(x) * &BigUint::from(y);
            assert_eq!(prod, big(x as u128 * y as u128));
        }
    }

    #[test]
    fn mul_by_zero_and_one() {
        let a = BigUint::power_of_two(200);
        assert!((&a * &BigUint::zero()).is_zero());
        assert_eq!(&a * &BigUint::from(1u32), a);
    }

    #[test]
    fn sqr_matches_mul() {
        let mut rng = XorShiftRng::from_seed([4u8; 16]);
        for _ in 0..100 {
            let x = BigUint::from(rng.random::<u128>());
            assert_eq!(sqr(&x), &x * &x);
        }
    }

    #[test]
    fn scalar_mul_matches_mul() {
        let mut rng = XorShiftRng::from_seed([5u8; 16]);
        for _ in 0..200 {
            let x = BigUint::from(rng.random::<u128>());
            let d = rng.random::<BigDigit>() & big_digit::MASK;
            let mut a = x.clone();
            scalar_mul(&mut a, d);
            assert_eq!(a, &x * &BigUint::from(d as u64));
        }
    }

    #[test]
    fn mul_low_truncates_the_product() {
        let mut rng = XorShiftRng::from_seed([6u8; 16]);
        for _ in 0..200 {
            let x = BigUint::from(rng.random::<u128>());
            let y = BigUint::from(rng.random::<u128>());
            for digs in 1..8 {
                let mut full = &x * &y;
                mask_bits(&mut full, (digs * big_digit::BITS) as u64);
                assert_eq!(mul_low(&x, &y, digs), full, "digs = {}", digs);
            }
        }
    }

    #[test]
    fn mul_high_with_no_cut_is_the_full_product() {
        let mut rng = XorShiftRng::from_seed([7u8; 16]);
        for _ in 0..200 {
            let x = BigUint::from(rng.random::<u128>());
            let y = BigUint::from(rng.random::<u128>());
            assert_eq!(mul_high(&x, &y, 0), &x * &y);
        }
    }

    #[test]
    fn mul_high_underestimates_by_dropped_carries_only() {
        // mul_high never overshoots the top positions of the product, and
        // what it loses to skipped columns stays far below the retained
        // digits
        let mut rng = XorShiftRng::from_seed([8u8; 16]);
        for _ in 0..200 {
            let x = BigUint::from(rng.random::<u128>());
            let y = BigUint::from(rng.random::<u128>());
            let full = &x * &y;
            for digs in 1..6 {
                let high = mul_high(&x, &y, digs);
                let mut expect = full.clone();
                for d in expect.data.iter_mut().take(digs) {
                    *d = 0;
                }
                let expect = expect.normalized();
                assert!(high <= expect, "digs = {}", digs);
                let lost = &expect - &high;
                assert!(
                    lost < BigUint::power_of_two(((digs + 2) * big_digit::BITS) as u64),
                    "digs = {}",
                    digs
                );
            }
        }
    }
}
