//! Sliding-window modular exponentiation.
//!
//! One left-to-right engine serves every reduction strategy: the reducer
//! is picked once per call and carried as a tagged variant, the exponent
//! is scanned bit-by-bit from the top, and multiplies are batched
//! `winsize` bits at a time against a table of precomputed odd powers.

use alloc::vec::Vec;

use num_traits::{One, Zero};

use crate::big_digit::{self, BigDigit};
use crate::biguint::division::div_rem;
use crate::biguint::monty;
use crate::biguint::multiplication::sqr;
use crate::biguint::BigUint;
use crate::error::Error;

use super::barrett;
use super::reduce_2k;

/// Upper bound on the power table, `2^max(winsize)`.
const TAB_SIZE: usize = 256;

/// Cap on the sliding-window width; `None` leaves the bit-size table
/// uncapped.
const MAX_WINDOW: Option<usize> = None;

/// Reduction strategy for [`modpow_general`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reduction {
    /// Barrett reduction; works for any modulus.
    Barrett,
    /// Unrestricted diminished radix, for moduli [`reduce_2k::reduce_is_2k_l`]
    /// accepts.
    Diminished,
}

/// Reduction strategy for [`modpow_fast`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FastReduction {
    /// Montgomery reduction; needs an odd modulus.
    Montgomery,
    /// Digit-diminished radix (`β^k − d`); not implemented.
    DiminishedRadix,
    /// Restricted diminished radix (`2^k − d`, single-digit `d`).
    Diminished2k,
}

/// The reducer bound for the duration of one exponentiation.
enum Reducer {
    Barrett { mu: BigUint },
    Diminished { mu: BigUint },
    Diminished2k { d: BigDigit },
    Montgomery { rho: BigDigit },
}

impl Reducer {
    fn reduce(&self, x: &mut BigUint, m: &BigUint) -> Result<(), Error> {
        match self {
            Reducer::Barrett { mu } => {
                barrett::barrett_reduce(x, m, mu);
                Ok(())
            }
            Reducer::Diminished { mu } => {
                reduce_2k::reduce_2k_l(x, m, mu);
                Ok(())
            }
            Reducer::Diminished2k { d } => {
                reduce_2k::reduce_2k(x, m, *d);
                Ok(())
            }
            Reducer::Montgomery { rho } => monty::montgomery_reduce(x, m, *rho),
        }
    }
}

/// Scanner state for the left-to-right exponent walk.
enum ScanState {
    /// Skipping the zeros above the exponent's top set bit.
    LeadingZeros,
    /// Between windows; zero bits cost one squaring each.
    Squaring,
    /// Accumulating `winsize` bits into the window buffer.
    Window,
}

/// Window width for an exponent of `bits` bits.
fn window_size(bits: u64) -> usize {
    let w = match bits {
        0..=7 => 2,
        8..=36 => 3,
        37..=140 => 4,
        141..=450 => 5,
        451..=1303 => 6,
        1304..=3529 => 7,
        _ => 8,
    };
    match MAX_WINDOW {
        Some(cap) => w.min(cap),
        None => w,
    }
}

/// `g^x mod p` via Barrett or unrestricted diminished-radix reduction
/// (the strategies that accept any modulus shape their classifier allows).
pub fn modpow_general(
    g: &BigUint,
    x: &BigUint,
    p: &BigUint,
    red: Reduction,
) -> Result<BigUint, Error> {
    if p.is_zero() {
        return Err(Error::ZeroModulus);
    }
    if p.is_one() {
        return Ok(BigUint::zero());
    }
    let reducer = match red {
        Reduction::Barrett => Reducer::Barrett {
            mu: barrett::barrett_setup(p)?,
        },
        Reduction::Diminished => Reducer::Diminished {
            mu: reduce_2k::reduce_2k_setup_l(p),
        },
    };
    modpow_window(g, x, p, reducer)
}

/// `g^x mod p` via Montgomery or restricted diminished-radix reduction,
/// the cheaper per-iteration reducers available to odd or `2^k − d`
/// moduli.
pub fn modpow_fast(
    g: &BigUint,
    x: &BigUint,
    p: &BigUint,
    red: FastReduction,
) -> Result<BigUint, Error> {
    if p.is_zero() {
        return Err(Error::ZeroModulus);
    }
    if p.is_one() {
        return Ok(BigUint::zero());
    }
    let reducer = match red {
        FastReduction::Montgomery => Reducer::Montgomery {
            rho: monty::montgomery_setup(p)?,
        },
        FastReduction::DiminishedRadix => return Err(Error::Unimplemented),
        FastReduction::Diminished2k => Reducer::Diminished2k {
            d: reduce_2k::reduce_2k_setup(p),
        },
    };
    modpow_window(g, x, p, reducer)
}

/// `g^x mod p`, choosing the reduction strategy from the shape of the
/// modulus: restricted diminished radix when the modulus is `2^k − d`,
/// Montgomery when it is odd, unrestricted diminished radix when enough
/// digits are saturated, Barrett otherwise.
pub fn modpow(g: &BigUint, x: &BigUint, p: &BigUint) -> Result<BigUint, Error> {
    if p.is_zero() {
        return Err(Error::ZeroModulus);
    }
    if reduce_2k::reduce_is_2k(p) {
        modpow_fast(g, x, p, FastReduction::Diminished2k)
    } else if p.is_odd() {
        modpow_fast(g, x, p, FastReduction::Montgomery)
    } else if reduce_2k::reduce_is_2k_l(p) {
        modpow_general(g, x, p, Reduction::Diminished)
    } else {
        modpow_general(g, x, p, Reduction::Barrett)
    }
}

fn modpow_window(g: &BigUint, x: &BigUint, p: &BigUint, red: Reducer) -> Result<BigUint, Error> {
    let winsize = window_size(x.bits());
    debug_assert!(1 << winsize <= TAB_SIZE);

    let montgomery = matches!(red, Reducer::Montgomery { .. });
    let work = p.data.len() * 2 + 1;

    // M[1] and the running accumulator; Montgomery keeps both R-scaled
    let mut table: Vec<BigUint> = alloc::vec![BigUint::zero(); 1 << winsize];
    let mut res;
    if montgomery {
        res = monty::montgomery_normalization(p);
        table[1] = div_rem(&(g * &res), p).1;
    } else {
        res = BigUint::one();
        table[1] = g % p;
    }
    table[1].grow(work)?;

    // M[2^(winsize−1)] = M[1]^(2^(winsize−1)), then one multiply per slot
    // for the rest of the upper half; the lower half is never used
    let half = 1 << (winsize - 1);
    table[half] = table[1].clone();
    table[half].grow(work)?;
    for _ in 0..winsize - 1 {
        let mut t = sqr(&table[half]);
        red.reduce(&mut t, p)?;
        table[half] = t;
    }
    for i in half + 1..1 << winsize {
        let mut t = &table[i - 1] * &table[1];
        red.reduce(&mut t, p)?;
        t.grow(work)?;
        table[i] = t;
    }

    let mut state = ScanState::LeadingZeros;
    let mut bitbuf: usize = 0;
    let mut bitcpy: usize = 0;

    for &digit in x.data.iter().rev() {
        for i in (0..big_digit::BITS).rev() {
            let bit = digit >> i & 1 == 1;

            match state {
                ScanState::LeadingZeros => {
                    if !bit {
                        continue;
                    }
                }
                ScanState::Squaring => {
                    if !bit {
                        let mut t = sqr(&res);
                        red.reduce(&mut t, p)?;
                        res = t;
                        continue;
                    }
                }
                ScanState::Window => {}
            }

            // a set bit opens a window; every bit inside one is recorded
            state = ScanState::Window;
            bitcpy += 1;
            bitbuf |= (bit as usize) << (winsize - bitcpy);

            if bitcpy == winsize {
                for _ in 0..winsize {
                    let mut t = sqr(&res);
                    red.reduce(&mut t, p)?;
                    res = t;
                }
                let mut t = &res * &table[bitbuf];
                red.reduce(&mut t, p)?;
                res = t;

                bitbuf = 0;
                bitcpy = 0;
                state = ScanState::Squaring;
            }
        }
    }

    // squeeze out a partially filled window
    if let ScanState::Window = state {
        for _ in 0..bitcpy {
            let mut t = sqr(&res);
            red.reduce(&mut t, p)?;
            res = t;

            bitbuf <<= 1;
            if bitbuf & 1 << winsize != 0 {
                let mut t = &res * &table[1];
                red.reduce(&mut t, p)?;
                res = t;
            }
        }
    }

    if montgomery {
        // cancel the residual factor of R
        red.reduce(&mut res, p)?;
    }
    Ok(res)
}
