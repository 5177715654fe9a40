use core::ops::{Add, AddAssign};

use crate::big_digit::{self, BigDigit, DoubleBigDigit};

use super::BigUint;

/// Add with carry: `a + b + *acc`, returning the low digit and leaving the
/// carry in `acc`.
#[inline]
pub fn adc(a: BigDigit, b: BigDigit, acc: &mut DoubleBigDigit) -> BigDigit {
    *acc += a as DoubleBigDigit;
    *acc += b as DoubleBigDigit;
    let (hi, lo) = big_digit::from_double(*acc);
    *acc = hi as DoubleBigDigit;
    lo
}

/// Two argument addition of raw slices, `a += b`, returning the final
/// carry. `a` must be at least as long as `b`.
pub fn __add2(a: &mut [BigDigit], b: &[BigDigit]) -> BigDigit {
    debug_assert!(a.len() >= b.len());

    let mut carry = 0;
    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = adc(*a, *b, &mut carry);
    }

    if carry != 0 {
        for a in a_hi {
            *a = adc(*a, 0, &mut carry);
            if carry == 0 {
                break;
            }
        }
    }

    carry as BigDigit
}

/// Two argument addition, `a += b`; `a` must be long enough to absorb the
/// carry.
pub fn add2(a: &mut [BigDigit], b: &[BigDigit]) {
    let carry = __add2(a, b);
    debug_assert!(carry == 0);
}

/// `a += d` for a single digit `d`.
pub(crate) fn add_scalar(a: &mut BigUint, d: BigDigit) {
    debug_assert!(d <= big_digit::MAX_DIGIT);
    if a.data.is_empty() {
        if d != 0 {
            a.data.push(d);
        }
        return;
    }
    let carry = __add2(&mut a.data, &[d]);
    if carry != 0 {
        a.data.push(carry);
    }
}

impl Add<&BigUint> for &BigUint {
    type Output = BigUint;

    fn add(self, other: &BigUint) -> BigUint {
        let (big, small) = if self.data.len() >= other.data.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut data = big.data.clone();
        let carry = __add2(&mut data, &small.data);
        if carry != 0 {
            data.push(carry);
        }
        BigUint { data }
    }
}

forward_binop!(impl Add for BigUint, add);

impl AddAssign<&BigUint> for BigUint {
    fn add_assign(&mut self, other: &BigUint) {
        if self.data.len() < other.data.len() {
            self.data.resize(other.data.len(), 0);
        }
        let carry = __add2(&mut self.data, &other.data);
        if carry != 0 {
            self.data.push(carry);
        }
    }
}
