use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::ops::{Shl, Shr};

use num_traits::Zero;

use crate::big_digit::{self, BigDigit};

use super::{biguint_from_vec, BigUint};

/// `n << shift` (bit shift).
pub fn biguint_shl(n: Cow<'_, BigUint>, shift: usize) -> BigUint {
    if shift == 0 || n.is_zero() {
        return n.into_owned();
    }

    let digits = shift / big_digit::BITS;
    let sh = shift % big_digit::BITS;

    let mut data: Vec<BigDigit> = Vec::with_capacity(n.data.len() + digits + 1);
    data.resize(digits, 0);

    if sh == 0 {
        data.extend_from_slice(&n.data);
    } else {
        let mut carry = 0;
        for &d in &n.data {
            data.push((d & (big_digit::MASK >> sh)) << sh | carry);
            carry = d >> (big_digit::BITS - sh);
        }
        if carry != 0 {
            data.push(carry);
        }
    }

    BigUint { data }
}

/// `n >> shift` (bit shift).
pub fn biguint_shr(n: Cow<'_, BigUint>, shift: usize) -> BigUint {
    let digits = shift / big_digit::BITS;
    let sh = shift % big_digit::BITS;

    if digits >= n.data.len() {
        return BigUint::zero();
    }

    let mut data: Vec<BigDigit> = match n {
        Cow::Borrowed(n) => n.data[digits..].to_vec(),
        Cow::Owned(mut n) => {
            n.data.drain(..digits);
            n.data
        }
    };

    if sh > 0 {
        let mut borrow = 0;
        for d in data.iter_mut().rev() {
            let v = *d;
            *d = v >> sh | borrow;
            borrow = (v & ((1 << sh) - 1)) << (big_digit::BITS - sh);
        }
    }

    biguint_from_vec(data)
}

/// Shift left by whole digits in place.
pub fn shl_digits(x: &mut BigUint, n: usize) {
    if n > 0 && !x.is_zero() {
        x.data.splice(0..0, core::iter::repeat(0).take(n));
    }
}

/// Shift right by whole digits in place.
pub fn shr_digits(x: &mut BigUint, n: usize) {
    if n >= x.data.len() {
        x.data.clear();
    } else {
        x.data.drain(..n);
    }
}

/// `x mod 2^bits`, in place.
pub fn mask_bits(x: &mut BigUint, bits: u64) {
    let digits = (bits / big_digit::BITS as u64) as usize;
    let sh = (bits % big_digit::BITS as u64) as u32;

    if digits >= x.data.len() {
        return;
    }
    x.data.truncate(digits + (sh > 0) as usize);
    if sh > 0 {
        if let Some(top) = x.data.last_mut() {
            *top &= (1 << sh) - 1;
        }
    }
    x.normalize();
}

/// Quotient and remainder by `2^bits`: `(x >> bits, x mod 2^bits)`.
pub fn div_rem_2d(x: &BigUint, bits: usize) -> (BigUint, BigUint) {
    let q = biguint_shr(Cow::Borrowed(x), bits);
    let mut r = x.clone();
    mask_bits(&mut r, bits as u64);
    (q, r)
}

impl Shl<usize> for &BigUint {
    type Output = BigUint;

    #[inline]
    fn shl(self, rhs: usize) -> BigUint {
        biguint_shl(Cow::Borrowed(self), rhs)
    }
}

impl Shl<usize> for BigUint {
    type Output = BigUint;

    #[inline]
    fn shl(self, rhs: usize) -> BigUint {
        biguint_shl(Cow::Owned(self), rhs)
    }
}

impl Shr<usize> for &BigUint {
    type Output = BigUint;

    #[inline]
    fn shr(self, rhs: usize) -> BigUint {
        biguint_shr(Cow::Borrowed(self), rhs)
    }
}

impl Shr<usize> for BigUint {
    type Output = BigUint;

    #[inline]
    fn shr(self, rhs: usize) -> BigUint {
        biguint_shr(Cow::Owned(self), rhs)
    }
}
