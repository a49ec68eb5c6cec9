//! Function selector fingerprints.

use std::fmt;

use super::keccak256;

/// Leading zero nibbles that make a selector golden (three zero bytes).
pub const GOLDEN_ZEROS: u32 = 6;

/// A Solidity function selector: the first 4 bytes of keccak256(signature).
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Selector([u8; 4]);

impl Selector {
    /// Computes the selector of a signature string.
    #[inline]
    pub fn of(signature: &str) -> Self {
        let hash = keccak256(signature.as_bytes());
        Self([hash[0], hash[1], hash[2], hash[3]])
    }

    /// Creates a selector from raw bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Returns the selector as 8 lowercase hex characters (no 0x prefix).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Number of leading zero hex digits (0..=8).
    #[inline]
    pub fn leading_zeros(&self) -> u32 {
        u32::from_be_bytes(self.0).leading_zeros() / 4
    }

    /// Returns true if the first three bytes are zero.
    #[inline]
    pub fn is_golden(&self) -> bool {
        self.leading_zeros() >= GOLDEN_ZEROS
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Selector(0x{})", self.to_hex())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

/// Returns the hex fingerprint (selector) of a candidate signature.
pub fn fingerprint(candidate: &str) -> String {
    Selector::of(candidate).to_hex()
}

/// Counts consecutive `'0'` characters at the start of a hex fingerprint.
pub fn leading_zero_count(fingerprint: &str) -> usize {
    fingerprint.chars().take_while(|&c| c == '0').count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_selectors() {
        assert_eq!(fingerprint("transfer(address,uint256)"), "a9059cbb");
        assert_eq!(fingerprint("balanceOf(address)"), "70a08231");
        assert_eq!(fingerprint("mint252(uint256,address)"), "00873ffd");
    }

    #[test]
    fn test_leading_zero_count() {
        assert_eq!(leading_zero_count("00873ffd"), 2);
        assert_eq!(leading_zero_count("a0000000"), 0);
        assert_eq!(leading_zero_count("00000000"), 8);
        assert_eq!(leading_zero_count(""), 0);
    }

    #[test]
    fn test_nibble_zeros() {
        assert_eq!(Selector::from_bytes([0x00, 0x0f, 0xff, 0xff]).leading_zeros(), 3);
        assert_eq!(Selector::from_bytes([0x10, 0x00, 0x00, 0x00]).leading_zeros(), 0);
        assert_eq!(Selector::from_bytes([0; 4]).leading_zeros(), 8);
    }

    #[test]
    fn test_golden() {
        assert!(Selector::from_bytes([0, 0, 0, 0x42]).is_golden());
        assert!(!Selector::from_bytes([0, 0, 0x0a, 0x42]).is_golden());
        assert!(!Selector::from_bytes([0, 0, 0x10, 0]).is_golden());
    }

    proptest! {
        #[test]
        fn prop_zero_count_matches_prefix(bytes in any::<[u8; 4]>()) {
            let selector = Selector::from_bytes(bytes);
            let hex = selector.to_hex();
            let count = leading_zero_count(&hex);

            prop_assert_eq!(count, selector.leading_zeros() as usize);
            prop_assert!(hex[..count].chars().all(|c| c == '0'));
            if count < hex.len() {
                prop_assert_ne!(hex.as_bytes()[count], b'0');
            }
        }
    }
}
