use std::fmt;
use std::net::IpAddr;

/// Address family of a parsed address specification
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Family {
    /// IPv4, 32-bit addresses
    V4,
    /// IPv6, 128-bit addresses
    V6,
}

impl Family {
    /// Number of bits in an address of this family, which is also the longest valid prefix.
    pub const fn bit_width(self) -> u8 {
        match self {
            Self::V4 => 32,
            Self::V6 => 128,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::V4 => "IPv4",
            Self::V6 => "IPv6",
        };
        f.write_str(s)
    }
}

impl From<IpAddr> for Family {
    fn from(value: IpAddr) -> Self {
        match value {
            IpAddr::V4(_) => Self::V4,
            IpAddr::V6(_) => Self::V6,
        }
    }
}

/// How [`Comparator::sort`](crate::Comparator::sort) orders addresses of different families.
///
/// The comparison operations themselves never order across families; this only applies
/// when the caller explicitly asks for a combined ordering.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum MixedFamilyOrder {
    /// Fail with [`IpCompareError::IncomparableFamilies`](crate::IpCompareError::IncomparableFamilies)
    #[default]
    Reject,
    /// All IPv4 addresses sort before all IPv6 addresses
    V4First,
    /// All IPv6 addresses sort before all IPv4 addresses
    V6First,
}

impl MixedFamilyOrder {
    /// Rank of `family` under this policy, or `None` when families must not be mixed.
    pub(crate) const fn rank(self, family: Family) -> Option<u8> {
        match (self, family) {
            (Self::Reject, _) => None,
            (Self::V4First, Family::V4) | (Self::V6First, Family::V6) => Some(0),
            (Self::V4First, Family::V6) | (Self::V6First, Family::V4) => Some(1),
        }
    }
}
