use thiserror::Error;

/// Errors reported by the reduction and exponentiation routines.
///
/// Fallible operations check every step and unwind immediately; output
/// operands are left in their last-written state and should be treated as
/// invalid by the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Montgomery arithmetic needs an odd modulus.
    #[error("modulus is even")]
    EvenModulus,

    /// Reduction modulo zero is undefined.
    #[error("modulus is zero")]
    ZeroModulus,

    /// A digit buffer could not be grown.
    #[error("digit allocation failed")]
    OutOfMemory,

    /// The digit-diminished-radix exponentiation path is not implemented;
    /// use Montgomery or `2^k − d` reduction instead.
    #[error("reduction mode not implemented")]
    Unimplemented,
}
