use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use num_integer::Integer;
use num_traits::{One, Zero};

use crate::big_digit::{self, BigDigit};
use crate::error::Error;

pub(crate) mod addition;
pub(crate) mod division;
pub(crate) mod monty;
pub(crate) mod multiplication;
pub(crate) mod shift;
pub(crate) mod subtraction;

mod zeroize;

/// An unsigned big integer, stored as little-endian digits in radix
/// `2^big_digit::BITS`.
///
/// The digit vector is kept normalized: no trailing zero digits, and zero
/// is the empty vector. Reduction routines may denormalize it transiently
/// while they work, but every public operation restores the invariant
/// before returning.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct BigUint {
    pub(crate) data: Vec<BigDigit>,
}

/// Build a [`BigUint`] from a digit vector, trimming trailing zeros.
pub(crate) fn biguint_from_vec(data: Vec<BigDigit>) -> BigUint {
    BigUint { data }.normalized()
}

/// Three-way magnitude comparison of normalized digit slices.
#[inline]
pub fn cmp_slice(a: &[BigDigit], b: &[BigDigit]) -> Ordering {
    debug_assert!(a.last() != Some(&0));
    debug_assert!(b.last() != Some(&0));

    match a.len().cmp(&b.len()) {
        Ordering::Equal => Iterator::cmp(a.iter().rev(), b.iter().rev()),
        other => other,
    }
}

impl BigUint {
    /// Strip trailing zero digits so `data.len()` counts only significant
    /// digits.
    #[inline]
    pub(crate) fn normalize(&mut self) {
        while let Some(&0) = self.data.last() {
            self.data.pop();
        }
    }

    #[inline]
    pub(crate) fn normalized(mut self) -> BigUint {
        self.normalize();
        self
    }

    /// The little-endian digits of this value.
    #[inline]
    pub fn digits(&self) -> &[BigDigit] {
        &self.data
    }

    /// Position of the most significant set bit, plus one. Zero for zero.
    pub fn bits(&self) -> u64 {
        match self.data.last() {
            None => 0,
            Some(&top) => {
                let top_bits = BigDigit::BITS - top.leading_zeros();
                (self.data.len() as u64 - 1) * big_digit::BITS as u64 + top_bits as u64
            }
        }
    }

    /// Test bit `i`, counting from the least significant.
    pub fn bit(&self, i: u64) -> bool {
        let (digit, bit) = i.div_rem(&(big_digit::BITS as u64));
        match self.data.get(digit as usize) {
            Some(&d) => d >> bit & 1 == 1,
            None => false,
        }
    }

    /// Number of trailing zero bits; `None` for zero.
    pub fn trailing_zeros(&self) -> Option<u64> {
        let i = self.data.iter().position(|&d| d != 0)?;
        Some(i as u64 * big_digit::BITS as u64 + self.data[i].trailing_zeros() as u64)
    }

    /// `2^k`.
    pub fn power_of_two(k: u64) -> BigUint {
        let (digits, bit) = k.div_rem(&(big_digit::BITS as u64));
        let mut data = alloc::vec![0; digits as usize + 1];
        data[digits as usize] = 1 << bit;
        BigUint { data }
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        self.data.first().map_or(true, |&d| d & 1 == 0)
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// Ensure capacity for at least `n` digits, reporting allocation
    /// failure instead of aborting. Never shrinks; the value is unchanged.
    pub fn grow(&mut self, n: usize) -> Result<(), Error> {
        if n > self.data.capacity() {
            let extra = n - self.data.len();
            self.data.try_reserve(extra).map_err(|_| Error::OutOfMemory)?;
        }
        Ok(())
    }

    /// The value as a `u64`, when it fits.
    pub fn to_u64(&self) -> Option<u64> {
        if self.bits() > 64 {
            return None;
        }
        let mut out = 0u64;
        for &d in self.data.iter().rev() {
            out = out << big_digit::BITS | d as u64;
        }
        Some(out)
    }

    /// Modular exponentiation: `self^exp mod modulus`, picking a reduction
    /// strategy from the shape of the modulus.
    ///
    /// # Panics
    ///
    /// Panics when `modulus` is zero. Use [`crate::algorithms::modpow`]
    /// for a fallible variant.
    pub fn modpow(&self, exp: &BigUint, modulus: &BigUint) -> BigUint {
        crate::algorithms::modpow(self, exp, modulus).expect("modulus must be nonzero")
    }
}

impl PartialOrd for BigUint {
    #[inline]
    fn partial_cmp(&self, other: &BigUint) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigUint {
    #[inline]
    fn cmp(&self, other: &BigUint) -> Ordering {
        cmp_slice(&self.data, &other.data)
    }
}

impl Zero for BigUint {
    #[inline]
    fn zero() -> BigUint {
        BigUint { data: Vec::new() }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn set_zero(&mut self) {
        self.data.clear();
    }
}

impl One for BigUint {
    #[inline]
    fn one() -> BigUint {
        BigUint { data: alloc::vec![1] }
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.data == [1]
    }
}

macro_rules! impl_from_small {
    ($($t:ty)*) => {$(
        impl From<$t> for BigUint {
            #[inline]
            fn from(n: $t) -> BigUint {
                BigUint::from(n as u64)
            }
        }
    )*};
}

impl_from_small!(u8 u16 u32);

impl From<u64> for BigUint {
    fn from(mut n: u64) -> BigUint {
        let mut data = Vec::new();
        while n != 0 {
            data.push((n & big_digit::MASK as u64) as BigDigit);
            n >>= big_digit::BITS;
        }
        BigUint { data }
    }
}

impl From<u128> for BigUint {
    fn from(mut n: u128) -> BigUint {
        let mut data = Vec::new();
        while n != 0 {
            data.push((n & big_digit::MASK as u128) as BigDigit);
            n >>= big_digit::BITS;
        }
        BigUint { data }
    }
}

cfg_digit!(
    const DEC_CHUNK: BigDigit = 100_000_000;
    const DEC_CHUNK: BigDigit = 1_000_000_000_000_000_000;
);

cfg_digit!(
    const DEC_DIGITS: usize = 8;
    const DEC_DIGITS: usize = 18;
);

impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use core::fmt::Write;

        if self.is_zero() {
            return f.pad_integral(true, "", "0");
        }

        // peel decimal chunks off the low end, then print them high to low
        let mut chunks = Vec::new();
        let mut rest = self.clone();
        while !rest.is_zero() {
            let (q, r) = division::div_rem_digit(rest, DEC_CHUNK);
            chunks.push(r);
            rest = q;
        }

        let mut s = String::with_capacity(chunks.len() * DEC_DIGITS);
        write!(s, "{}", chunks.last().unwrap())?;
        for chunk in chunks.iter().rev().skip(1) {
            write!(s, "{:0width$}", chunk, width = DEC_DIGITS)?;
        }
        f.pad_integral(true, "", &s)
    }
}

/// The error returned when a decimal string fails to parse as a
/// [`BigUint`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid decimal integer")]
pub struct ParseBigUintError;

impl FromStr for BigUint {
    type Err = ParseBigUintError;

    fn from_str(s: &str) -> Result<BigUint, ParseBigUintError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseBigUintError);
        }

        fn push_chunk(res: &mut BigUint, chunk: &[u8]) {
            let mut val: BigDigit = 0;
            for &b in chunk {
                val = val * 10 + (b - b'0') as BigDigit;
            }
            multiplication::scalar_mul(res, (10 as BigDigit).pow(chunk.len() as u32));
            addition::add_scalar(res, val);
        }

        let mut res = BigUint::zero();
        let (head, tail) = s.as_bytes().split_at(s.len() % DEC_DIGITS);
        if !head.is_empty() {
            push_chunk(&mut res, head);
        }
        for chunk in tail.chunks(DEC_DIGITS) {
            push_chunk(&mut res, chunk);
        }
        Ok(res)
    }
}
