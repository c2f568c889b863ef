//! Error raised when a prefix cannot be built from its parts.

use crate::models::Family;
use thiserror::Error;

/// A malformed or out-of-range prefix.
///
/// Always attributable to a single input item; callers decide whether to skip
/// the item or abort.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidPrefix {
    /// The text is not an address, or an address followed by `/length`.
    #[error("invalid prefix syntax: '{0}'")]
    Syntax(String),
    /// The prefix length is longer than the family's address width.
    #[error("prefix length /{len} is out of range for {family}")]
    Length { family: Family, len: u8 },
    /// The numeric address does not fit the family's address width.
    #[error("address {addr:#x} is out of range for {family}")]
    Address { family: Family, addr: u128 },
    /// Strict parsing found bits set to the right of the prefix length.
    #[error("'{0}' has host bits set")]
    HostBits(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = InvalidPrefix::Length {
            family: Family::V4,
            len: 33,
        };
        assert_eq!(err.to_string(), "prefix length /33 is out of range for IPv4");

        let err = InvalidPrefix::Address {
            family: Family::V4,
            addr: 0x1_0000_0000,
        };
        assert_eq!(err.to_string(), "address 0x100000000 is out of range for IPv4");

        let err = InvalidPrefix::HostBits("10.5.5.5/8".to_string());
        assert_eq!(err.to_string(), "'10.5.5.5/8' has host bits set");
    }
}
