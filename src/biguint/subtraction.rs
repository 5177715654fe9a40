use core::ops::{Sub, SubAssign};

use crate::big_digit::{self, BigDigit, SignedDoubleBigDigit};

use super::BigUint;

/// Subtract with borrow: `a − b + *acc`, returning the low digit and
/// leaving the (negative) borrow in `acc`.
#[inline]
pub fn sbb(a: BigDigit, b: BigDigit, acc: &mut SignedDoubleBigDigit) -> BigDigit {
    *acc += a as SignedDoubleBigDigit;
    *acc -= b as SignedDoubleBigDigit;
    let lo = (*acc & big_digit::MASK as SignedDoubleBigDigit) as BigDigit;
    *acc >>= big_digit::BITS;
    lo
}

/// Two argument subtraction of raw slices, `a -= b`.
///
/// The caller must arrange `a >= b`; a leftover borrow is a contract
/// violation and panics.
pub fn sub2(a: &mut [BigDigit], b: &[BigDigit]) {
    let mut borrow = 0;

    let len = a.len().min(b.len());
    let (a_lo, a_hi) = a.split_at_mut(len);
    let (b_lo, b_hi) = b.split_at(len);

    for (a, b) in a_lo.iter_mut().zip(b_lo) {
        *a = sbb(*a, *b, &mut borrow);
    }

    if borrow != 0 {
        for a in a_hi {
            *a = sbb(*a, 0, &mut borrow);
            if borrow == 0 {
                break;
            }
        }
    }

    assert!(
        borrow == 0 && b_hi.iter().all(|&x| x == 0),
        "cannot subtract b from a because b is larger than a"
    );
}

impl Sub<&BigUint> for &BigUint {
    type Output = BigUint;

    fn sub(self, other: &BigUint) -> BigUint {
        let mut data = self.data.clone();
        sub2(&mut data, &other.data);
        BigUint { data }.normalized()
    }
}

forward_binop!(impl Sub for BigUint, sub);

impl SubAssign<&BigUint> for BigUint {
    fn sub_assign(&mut self, other: &BigUint) {
        sub2(&mut self.data, &other.data);
        self.normalize();
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use crate::big_digit::MASK;

    use super::*;

    #[test]
    fn borrow_ripples_across_digits() {
        let a = BigUint { data: alloc::vec![0, 0, 0, 1] };
        let diff = &a - &BigUint::from(1u32);
        assert_eq!(diff.data, [MASK, MASK, MASK]);
    }

    #[test]
    #[should_panic(expected = "cannot subtract")]
    fn underflow_panics() {
        let _ = &BigUint::from(1u32) - &BigUint::from(2u32);
    }

    #[test]
    fn matches_u64_arithmetic() {
        let mut rng = XorShiftRng::from_seed([2u8; 16]);
        for _ in 0..1000 {
            let x = rng.random::<u64>();
            let y = rng.random::<u64>();
            let (hi, lo) = if x >= y { (x, y) } else { (y, x) };
            let diff = &BigUint::from(hi) - &BigUint::from(lo);
            assert_eq!(diff.to_u64(), Some(hi - lo));
        }
    }
}
