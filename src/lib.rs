//! Modular arithmetic for arbitrary-precision unsigned integers.
//!
//! This crate implements the reduction and exponentiation core of a big
//! integer library: Montgomery, Barrett and diminished-radix (`2^k − d`)
//! reduction, a sliding-window modular exponentiation engine built on top
//! of them, and the trial-division / Miller–Rabin machinery used for
//! primality screening.
//!
//! The central type is [`BigUint`], an unsigned magnitude stored as
//! little-endian digits in radix `2^28` (or `2^60` with the `u64_digit`
//! feature). Reductions operate on it in place and may grow it; all
//! algorithm entry points are also exported as free functions from
//! [`algorithms`] for callers that want to manage the precomputed
//! parameters (ρ, μ) themselves.
//!
//! ```
//! use num_modular_dig::BigUint;
//!
//! let g = BigUint::from(4u32);
//! let x = BigUint::from(13u32);
//! let p = BigUint::from(497u32);
//! assert_eq!(g.modpow(&x, &p), BigUint::from(445u32));
//! ```
//!
//! ## Features
//!
//! - `std` (default): implements `std::error::Error`, otherwise the crate
//!   is `no_std` + `alloc`.
//! - `u64_digit`: 60-bit digits in `u64` words instead of 28-bit digits in
//!   `u32` words.
//! - `rand`: random big integers ([`RandBigInt`]) and the probabilistic
//!   primality test ([`prime::probably_prime`]).
//! - `zeroize`: digit-buffer wiping via the `zeroize` crate.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[macro_use]
mod macros;

pub mod algorithms;
pub mod big_digit;
pub mod prime;

mod bigrand;
mod biguint;
mod error;

#[cfg(feature = "rand")]
pub use crate::bigrand::RandBigInt;
pub use crate::biguint::{BigUint, ParseBigUintError};
pub use crate::error::Error;
