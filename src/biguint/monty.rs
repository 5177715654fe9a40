//! Montgomery arithmetic: parameter setup, normalization and reduction.
//!
//! For an odd modulus `n` of `k` digits, the Montgomery radix is
//! `R = β^k`. [`montgomery_setup`] derives `ρ = −n⁻¹ mod β`,
//! [`montgomery_normalization`] computes `R mod n`, and
//! [`montgomery_reduce`] maps `x` to `x·R⁻¹ mod n`, which turns a product
//! of two R-scaled residues back into an R-scaled residue.

use alloc::vec::Vec;

use num_traits::Zero;

use crate::big_digit::{self, BigDigit, DoubleBigDigit, MAX_COMBA, WARRAY};
use crate::error::Error;

use super::shift::shr_digits;
use super::BigUint;

cfg_digit!(
    // each squaring doubles the 4 seed bits of precision: 4 → 32 ≥ 28
    const HENSEL_ROUNDS: usize = 3;
    // 4 → 128 ≥ 60
    const HENSEL_ROUNDS: usize = 5;
);

/// Compute `ρ = −n⁻¹ mod β` for an odd modulus.
///
/// Starts from a 4-bit seed inverse of the low digit and Hensel-lifts it
/// with the doubling identity `x ← x·(2 − n₀·x)`.
pub fn montgomery_setup(n: &BigUint) -> Result<BigDigit, Error> {
    let n0 = match n.data.first() {
        Some(&d) => d,
        None => return Err(Error::ZeroModulus),
    };
    if n0 & 1 == 0 {
        return Err(Error::EvenModulus);
    }

    // x·n₀ ≡ 1 (mod 2^4)
    let mut x = (((n0 + 2) & 4) << 1) + n0;
    for _ in 0..HENSEL_ROUNDS {
        x = x.wrapping_mul((2 as BigDigit).wrapping_sub(n0.wrapping_mul(x)));
    }
    x &= big_digit::MASK;

    // ρ = (β − x) mod β
    let rho = ((1 as DoubleBigDigit) << big_digit::BITS) - x as DoubleBigDigit;
    Ok(rho as BigDigit & big_digit::MASK)
}

/// `R mod n` where `R = β^n.len()`.
///
/// Seeds `2^(bits(n) − 1)`, then doubles up to a whole digit with a
/// conditional subtract keeping the value below `n` throughout. Callers
/// handle the trivial modulus 1 separately.
pub fn montgomery_normalization(n: &BigUint) -> BigUint {
    debug_assert!(!n.is_zero());

    let mut bits = (n.bits() % big_digit::BITS as u64) as usize;
    let mut a;
    if n.data.len() > 1 {
        a = BigUint::power_of_two(
            ((n.data.len() - 1) * big_digit::BITS + bits) as u64 - 1,
        );
    } else {
        a = BigUint { data: alloc::vec![1] };
        bits = 1;
    }

    for _ in 0..(big_digit::BITS + 1 - bits) {
        a = &a << 1;
        if a >= *n {
            a -= n;
        }
    }
    a
}

/// `x ← x·R⁻¹ mod n` for an odd modulus `n` and `ρ` from
/// [`montgomery_setup`]; expects `x < n²`.
///
/// Dispatches to the Comba column reducer when the operand sizes allow it.
pub fn montgomery_reduce(x: &mut BigUint, n: &BigUint, rho: BigDigit) -> Result<(), Error> {
    let digs = n.data.len() * 2 + 1;
    if digs < WARRAY && x.data.len() <= WARRAY && n.data.len() < MAX_COMBA {
        montgomery_reduce_comba(x, n, rho)
    } else {
        montgomery_reduce_baseline(x, n, rho)
    }
}

fn montgomery_reduce_baseline(x: &mut BigUint, n: &BigUint, rho: BigDigit) -> Result<(), Error> {
    let used = n.data.len();
    let digs = used * 2 + 1;
    debug_assert!(x.data.len() <= digs);

    x.grow(digs)?;
    x.data.resize(digs, 0);

    for ix in 0..used {
        // clears x mod β^(ix+1) one digit at a time
        let mu = x.data[ix].wrapping_mul(rho) & big_digit::MASK;

        let mut u: BigDigit = 0;
        for iy in 0..used {
            let r = mu as DoubleBigDigit * n.data[iy] as DoubleBigDigit
                + u as DoubleBigDigit
                + x.data[ix + iy] as DoubleBigDigit;
            let (hi, lo) = big_digit::from_double(r);
            x.data[ix + iy] = lo;
            u = hi;
        }

        let mut iy = ix + used;
        while u != 0 {
            let r = x.data[iy] + u;
            x.data[iy] = r & big_digit::MASK;
            u = r >> big_digit::BITS;
            iy += 1;
        }
    }

    x.normalize();
    shr_digits(x, used);
    if *x >= *n {
        *x -= n;
    }
    Ok(())
}

/// Comba variant of [`montgomery_reduce`]: accumulates whole columns in
/// double-width words and folds the carries once per column.
///
/// Only valid within the [`WARRAY`]/[`MAX_COMBA`] bounds; the dispatcher
/// checks them.
pub fn montgomery_reduce_comba(x: &mut BigUint, n: &BigUint, rho: BigDigit) -> Result<(), Error> {
    let used = n.data.len();
    debug_assert!(used * 2 + 1 < WARRAY && used < MAX_COMBA);
    debug_assert!(x.data.len() <= used * 2 + 1);

    let mut w: Vec<DoubleBigDigit> = alloc::vec![0; used * 2 + 1];
    for (w, &d) in w.iter_mut().zip(&x.data) {
        *w = d as DoubleBigDigit;
    }

    for ix in 0..used {
        let mu = ((w[ix] & big_digit::MASK as DoubleBigDigit) as BigDigit).wrapping_mul(rho)
            & big_digit::MASK;
        for iy in 0..used {
            w[ix + iy] += mu as DoubleBigDigit * n.data[iy] as DoubleBigDigit;
        }
        w[ix + 1] += w[ix] >> big_digit::BITS;
    }
    for ix in used..used * 2 {
        w[ix + 1] += w[ix] >> big_digit::BITS;
    }

    x.grow(used + 1)?;
    x.data.clear();
    x.data
        .extend(w[used..].iter().map(|&c| (c & big_digit::MASK as DoubleBigDigit) as BigDigit));
    x.normalize();

    if *x >= *n {
        *x -= n;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use num_traits::{One, Zero};

    use crate::biguint::test_util;

    use super::*;

    #[test]
    fn setup_rejects_bad_moduli() {
        assert_eq!(montgomery_setup(&BigUint::zero()), Err(Error::ZeroModulus));
        assert_eq!(
            montgomery_setup(&BigUint::from(10u32)),
            Err(Error::EvenModulus)
        );
    }

    #[test]
    fn rho_satisfies_its_identity() {
        let mut rng = XorShiftRng::from_seed([16u8; 16]);
        for bits in [5u64, 28, 60, 100, 256] {
            for _ in 0..50 {
                let n = test_util::gen_odd(&mut rng, bits);
                let rho = montgomery_setup(&n).unwrap();
                let check = rho as DoubleBigDigit * n.data[0] as DoubleBigDigit + 1;
                assert_eq!(check & big_digit::MASK as DoubleBigDigit, 0, "n = {}", n);
            }
        }
    }

    cfg_digit!(
        #[test]
        fn rho_for_nine() {
            let rho = montgomery_setup(&BigUint::from(9u32)).unwrap();
            assert_eq!(rho, 0x71C_71C7);
        }

        #[test]
        fn rho_for_nine() {
            let rho = montgomery_setup(&BigUint::from(9u32)).unwrap();
            assert_eq!(rho, 0x1C7_1C71_C71C_71C7);
        }
    );

    #[test]
    fn normalization_is_r_mod_n() {
        let mut rng = XorShiftRng::from_seed([17u8; 16]);
        for bits in [3u64, 28, 29, 56, 57, 200] {
            for _ in 0..30 {
                let n = test_util::gen_odd(&mut rng, bits);
                if n.is_one() {
                    continue;
                }
                let r = BigUint::power_of_two((n.data.len() * big_digit::BITS) as u64);
                assert_eq!(montgomery_normalization(&n), &r % &n, "n = {}", n);
            }
        }
    }

    #[test]
    fn reduce_divides_out_the_radix() {
        let mut rng = XorShiftRng::from_seed([18u8; 16]);
        for bits in [10u64, 28, 100, 256] {
            for _ in 0..30 {
                let n = test_util::gen_odd(&mut rng, bits);
                if n.is_one() {
                    continue;
                }
                let rho = montgomery_setup(&n).unwrap();
                let x = test_util::gen_below(&mut rng, &(&n * &n));

                let mut r = x.clone();
                montgomery_reduce(&mut r, &n, rho).unwrap();
                assert!(r < n);

                // r·R ≡ x (mod n)
                let shifted = &r << (n.data.len() * big_digit::BITS);
                assert_eq!(&shifted % &n, &x % &n);
            }
        }
    }

    #[test]
    fn reduce_round_trips_through_montgomery_form() {
        let mut rng = XorShiftRng::from_seed([19u8; 16]);
        for _ in 0..50 {
            let n = test_util::gen_odd(&mut rng, 120);
            if n.is_one() {
                continue;
            }
            let rho = montgomery_setup(&n).unwrap();
            let x = test_util::gen_below(&mut rng, &n);

            let mut lifted = &(&x << (n.data.len() * big_digit::BITS)) % &n;
            montgomery_reduce(&mut lifted, &n, rho).unwrap();
            assert_eq!(lifted, x);
        }
    }

    #[test]
    fn comba_matches_baseline() {
        let mut rng = XorShiftRng::from_seed([20u8; 16]);
        for bits in [8u64, 28, 56, 150, 300] {
            for _ in 0..30 {
                let n = test_util::gen_odd(&mut rng, bits);
                let rho = montgomery_setup(&n).unwrap();
                let x = test_util::gen_below(&mut rng, &(&n * &n));

                let mut a = x.clone();
                let mut b = x.clone();
                montgomery_reduce_comba(&mut a, &n, rho).unwrap();
                montgomery_reduce_baseline(&mut b, &n, rho).unwrap();
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn baseline_handles_comba_boundary_sizes() {
        // all-MAX_DIGIT moduli (odd by construction) at the dispatch cutoff
        for used in [MAX_COMBA - 1, MAX_COMBA, MAX_COMBA + 1] {
            let n = &BigUint::power_of_two((used * big_digit::BITS) as u64) - &BigUint::one();
            assert_eq!(n.data.len(), used);
            let rho = montgomery_setup(&n).unwrap();

            let x = &(&n - &BigUint::from(12345u32)) * &(&n - &BigUint::from(67u32));
            let mut r = x.clone();
            montgomery_reduce(&mut r, &n, rho).unwrap();
            assert!(r < n);

            let shifted = &r << (used * big_digit::BITS);
            assert_eq!(&shifted % &n, &x % &n);
        }
    }
}
