use thiserror::Error;

use crate::address_spec::AddressSpecError;
use crate::family::Family;

/// Errors returned by the comparison operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IpCompareError {
    /// One of the operands could not be parsed.
    #[error(transparent)]
    Spec(#[from] AddressSpecError),
    /// The operands belong to different address families and have no defined order.
    #[error("both addresses must be in the same family (got {left} and {right})")]
    IncomparableFamilies {
        /// Family of the left operand
        left: Family,
        /// Family of the right operand
        right: Family,
    },
}

impl IpCompareError {
    /// Returns `true` if an address portion was missing or malformed.
    pub fn is_invalid_address(&self) -> bool {
        matches!(self, Self::Spec(AddressSpecError::InvalidAddress(_)))
    }

    /// Returns `true` if a prefix portion was malformed or out of range.
    pub fn is_invalid_prefix(&self) -> bool {
        matches!(self, Self::Spec(AddressSpecError::InvalidPrefix { .. }))
    }

    /// Returns `true` if an ordering was requested across address families.
    pub fn is_incomparable_families(&self) -> bool {
        matches!(self, Self::IncomparableFamilies { .. })
    }
}
