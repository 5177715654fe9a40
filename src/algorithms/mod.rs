//! Low-level algorithms for modular big integer arithmetic.
//!
//! This module re-exports the internal arithmetic primitives used by
//! [`BigUint`](crate::BigUint), making them available for direct use on
//! digit slices, together with the reduction and exponentiation routines
//! built on top of them.

#![allow(clippy::many_single_char_names)]

// Re-export arithmetic primitives from their canonical locations.
//
// The implementations live inside the `biguint` submodules where they are
// used by the operator trait impls. We simply widen their visibility here.

// --- addition ---
pub use crate::biguint::addition::{__add2, adc, add2};

// --- subtraction ---
pub use crate::biguint::subtraction::{sbb, sub2};

// --- multiplication ---
pub use crate::biguint::multiplication::{
    mac3, mac_digit, mac_with_carry, mul3, mul_high, mul_low, scalar_mul, sqr,
};

// --- division ---
pub use crate::biguint::division::{div_rem, div_rem_digit, rem_digit};

// --- shift ---
pub use crate::biguint::shift::{
    biguint_shl, biguint_shr, div_rem_2d, mask_bits, shl_digits, shr_digits,
};

// --- comparison ---
pub use crate::biguint::cmp_slice;

// --- montgomery arithmetic ---
pub use crate::biguint::monty::{
    montgomery_normalization, montgomery_reduce, montgomery_reduce_comba, montgomery_setup,
};

// --- modular reduction and exponentiation ---
mod barrett;
mod modpow;
mod reduce_2k;

pub use self::barrett::*;
pub use self::modpow::*;
pub use self::reduce_2k::*;
