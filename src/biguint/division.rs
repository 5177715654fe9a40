use core::cmp::Ordering;
use core::ops::Rem;

use alloc::vec::Vec;

use num_traits::{One, Zero};

use crate::big_digit::{self, BigDigit, DoubleBigDigit};

use super::addition::add2;
use super::subtraction::sub2;
use super::{biguint_from_vec, cmp_slice, BigUint};

/// Divide by a single digit in place.
fn div_digit_in_place(a: &mut BigUint, b: BigDigit) -> BigDigit {
    debug_assert!(b != 0);
    let mut rem: DoubleBigDigit = 0;
    for d in a.data.iter_mut().rev() {
        let cur = rem << big_digit::BITS | *d as DoubleBigDigit;
        *d = (cur / b as DoubleBigDigit) as BigDigit;
        rem = cur % b as DoubleBigDigit;
    }
    a.normalize();
    rem as BigDigit
}

/// Quotient and remainder on division by a single digit.
///
/// # Panics
///
/// Panics when `b` is zero.
pub fn div_rem_digit(mut a: BigUint, b: BigDigit) -> (BigUint, BigDigit) {
    assert!(b != 0, "attempt to divide by zero");
    let rem = div_digit_in_place(&mut a, b);
    (a, rem)
}

/// Remainder on division by a single digit.
///
/// # Panics
///
/// Panics when `b` is zero.
pub fn rem_digit(a: &BigUint, b: BigDigit) -> BigDigit {
    assert!(b != 0, "attempt to divide by zero");
    let mut rem: DoubleBigDigit = 0;
    for &d in a.data.iter().rev() {
        rem = (rem << big_digit::BITS | d as DoubleBigDigit) % b as DoubleBigDigit;
    }
    rem as BigDigit
}

/// Quotient and remainder of `u / d`.
///
/// Knuth's Algorithm D shape: normalize so the divisor's top digit fills
/// its digit, estimate each quotient position by dividing the running head
/// by that top digit, and walk the estimate down until the partial product
/// fits.
///
/// # Panics
///
/// Panics when `d` is zero.
pub fn div_rem(u: &BigUint, d: &BigUint) -> (BigUint, BigUint) {
    if d.is_zero() {
        panic!("attempt to divide by zero");
    }
    if u.is_zero() {
        return (BigUint::zero(), BigUint::zero());
    }
    if d.data.len() == 1 {
        if d.data[0] == 1 {
            return (u.clone(), BigUint::zero());
        }
        let (q, rem) = div_rem_digit(u.clone(), d.data[0]);
        return (q, biguint_from_vec(alloc::vec![rem]));
    }

    match u.cmp(d) {
        Ordering::Less => return (BigUint::zero(), u.clone()),
        Ordering::Equal => return (BigUint::one(), BigUint::zero()),
        Ordering::Greater => {}
    }

    let top = *d.data.last().unwrap();
    let shift = big_digit::BITS - (BigDigit::BITS - top.leading_zeros()) as usize;

    let mut a = u << shift;
    let b = d << shift;
    let bn = *b.data.last().unwrap();
    let q_len = a.data.len() - b.data.len() + 1;

    let mut q = BigUint { data: alloc::vec![0; q_len] };
    let one = BigUint::one();
    let mut tmp = BigUint { data: Vec::with_capacity(2) };

    for j in (0..q_len).rev() {
        let offset = j + b.data.len() - 1;
        if offset >= a.data.len() {
            continue;
        }

        let mut q0 = tmp;
        q0.data.truncate(0);
        q0.data.extend_from_slice(&a.data[offset..]);

        div_digit_in_place(&mut q0, bn);
        let mut prod = &b * &q0;

        while cmp_slice(&prod.data, &a.data[j..]) == Ordering::Greater {
            q0 = &q0 - &one;
            prod = &prod - &b;
        }

        add2(&mut q.data[j..], &q0.data);
        sub2(&mut a.data[j..], &prod.data);
        a.normalize();

        tmp = q0;
    }

    debug_assert!(cmp_slice(&a.data, &b.data) == Ordering::Less);

    (q.normalized(), a >> shift)
}

impl Rem<&BigUint> for &BigUint {
    type Output = BigUint;

    #[inline]
    fn rem(self, other: &BigUint) -> BigUint {
        div_rem(self, other).1
    }
}

forward_binop!(impl Rem for BigUint, rem);
