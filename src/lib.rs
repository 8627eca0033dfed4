#![forbid(missing_debug_implementations)]
#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

mod address_spec;
mod comparator;
mod compare_ops;
mod errors;
mod family;

pub use address_spec::{AddressSpec, AddressSpecError};
pub use comparator::Comparator;
pub use compare_ops::{compare, equal_to, less_than};
pub use errors::IpCompareError;
pub use family::{Family, MixedFamilyOrder};
