//! Barrett reduction.
//!
//! Handbook of Applied Cryptography, Algorithm 14.42: reduce `x mod m`
//! with two truncated multiplications against a precomputed reciprocal,
//! instead of a full division per reduction.

use num_traits::Zero;

use crate::big_digit::{self, BigDigit};
use crate::biguint::division::div_rem;
use crate::biguint::multiplication::{mul_high, mul_low};
use crate::biguint::shift::{mask_bits, shr_digits};
use crate::biguint::BigUint;
use crate::error::Error;

/// `μ = ⌊β^(2·m.len()) / m⌋`, the reciprocal [`barrett_reduce`] consumes.
pub fn barrett_setup(m: &BigUint) -> Result<BigUint, Error> {
    if m.is_zero() {
        return Err(Error::ZeroModulus);
    }
    let radix_sq = BigUint::power_of_two((2 * m.data.len() * big_digit::BITS) as u64);
    let (mu, _) = div_rem(&radix_sq, m);
    Ok(mu)
}

/// Reduce `x` modulo `m` in place, given `μ` from [`barrett_setup`];
/// expects `0 ≤ x < m²` and a modulus larger than 1.
pub fn barrett_reduce(x: &mut BigUint, m: &BigUint, mu: &BigUint) {
    let um = m.data.len();

    // q = ⌊⌊x / β^(um−1)⌋ · μ / β^(um+1)⌋, the quotient estimate
    let mut q = x.clone();
    shr_digits(&mut q, um - 1);

    if um as BigDigit > (1 as BigDigit) << (big_digit::BITS - 1) {
        // only hit once a modulus spans β/2 digits; kept for completeness
        q = &q * mu;
    } else {
        q = mul_high(&q, mu, um);
    }
    shr_digits(&mut q, um + 1);

    // x − q·m, both taken mod β^(um+1)
    mask_bits(x, ((um + 1) * big_digit::BITS) as u64);
    q = mul_low(&q, m, um + 1);

    if *x < q {
        *x += &BigUint::power_of_two(((um + 1) * big_digit::BITS) as u64);
    }
    *x -= &q;

    // the estimate is off by at most two
    while *x >= *m {
        *x -= m;
    }
}
