#![cfg(feature = "zeroize")]

use zeroize::Zeroize;

use super::BigUint;

impl Zeroize for BigUint {
    fn zeroize(&mut self) {
        // wipes the full capacity, not just the live digits
        self.data.zeroize();
    }
}
