use std::cmp::Ordering;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use ipnet::{ip_mask_to_prefix, IpNet};
use thiserror::Error;

use crate::errors::IpCompareError;
use crate::family::Family;

/// Errors that can occur when parsing an address specification
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressSpecError {
    /// The address portion is missing or is not a valid IPv4 or IPv6 literal
    #[error("invalid IP address: {0:?}")]
    InvalidAddress(String),
    /// The prefix portion is not an integer within the bit width of the address family
    #[error("invalid {family} prefix length: {prefix:?}")]
    InvalidPrefix {
        /// Text found after the `/`
        prefix: String,
        /// Family of the address the prefix was attached to
        family: Family,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParseOptions {
    pub(crate) trim_whitespace: bool,
    pub(crate) allow_netmask: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            trim_whitespace: false,
            allow_netmask: false,
        }
    }
}

/// An IP address with an optional prefix length, e.g. `fe80::1` or `10.0.0.7/24`.
///
/// The address keeps every bit it was written with; a prefix does not zero the host part, so
/// `10.0.0.7/24` and `10.0.0.0/24` are different values. A missing prefix is the same as a
/// full-width one: `127.0.0.1` equals `127.0.0.1/32`.
///
/// Equality compares the binary value, so differently spelled IPv6 literals are equal. The
/// [`PartialOrd`] implementation orders by address bits, then by prefix length, and returns
/// `None` for addresses of different families.
///
/// ```
/// use ipcalc::AddressSpec;
///
/// let short: AddressSpec = "fe80::1".parse().unwrap();
/// let long: AddressSpec = "fe80:0::001/128".parse().unwrap();
/// assert_eq!(short, long);
///
/// let v4: AddressSpec = "127.0.0.1".parse().unwrap();
/// assert_eq!(v4.partial_cmp(&short), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressSpec {
    net: IpNet,
}

impl AddressSpec {
    /// Creates an `AddressSpec` from an address and a prefix length.
    /// # Errors
    /// Returns `AddressSpecError::InvalidPrefix` if `prefix_len` exceeds the bit width of the
    /// address family.
    pub fn new(addr: IpAddr, prefix_len: u8) -> Result<Self, AddressSpecError> {
        IpNet::new(addr, prefix_len)
            .map(Self::from)
            .map_err(|_| AddressSpecError::InvalidPrefix {
                prefix: prefix_len.to_string(),
                family: Family::from(addr),
            })
    }

    /// The address exactly as written, without any mask applied.
    pub fn addr(&self) -> IpAddr {
        self.net.addr()
    }

    /// The prefix length, or the family's bit width if none was given.
    pub fn prefix_len(&self) -> u8 {
        self.net.prefix_len()
    }

    /// Family of the address.
    pub fn family(&self) -> Family {
        Family::from(self.addr())
    }

    /// The address as an unsigned integer. IPv4 addresses occupy the low 32 bits.
    pub fn address_bits(&self) -> u128 {
        match self.addr() {
            IpAddr::V4(addr) => u32::from(addr).into(),
            IpAddr::V6(addr) => u128::from(addr),
        }
    }

    /// Returns `true` if no prefix was given or the prefix covers the whole address.
    pub fn is_full_width(&self) -> bool {
        self.prefix_len() == self.family().bit_width()
    }

    /// The address and prefix as an [`IpNet`], host bits intact.
    pub fn as_net(&self) -> IpNet {
        self.net
    }

    /// Equality across any two specifications. Addresses of different families are never equal.
    pub fn is_same_as(&self, other: &Self) -> bool {
        self == other
    }

    /// Three-way comparison: address bits decide, prefix length breaks ties.
    /// # Errors
    /// Returns `IpCompareError::IncomparableFamilies` if the two specifications belong to
    /// different address families.
    pub fn compare_to(&self, other: &Self) -> Result<Ordering, IpCompareError> {
        match (self.family(), other.family()) {
            (Family::V4, Family::V4) | (Family::V6, Family::V6) => Ok(self
                .address_bits()
                .cmp(&other.address_bits())
                .then_with(|| self.prefix_len().cmp(&other.prefix_len()))),
            (left, right) => Err(IpCompareError::IncomparableFamilies { left, right }),
        }
    }

    pub(crate) fn parse_with(s: &str, options: ParseOptions) -> Result<Self, AddressSpecError> {
        let s = if options.trim_whitespace { s.trim() } else { s };

        let (addr_part, prefix_part) = match s.split_once('/') {
            Some((addr, prefix)) => (addr, Some(prefix)),
            None => (s, None),
        };

        let addr = IpAddr::from_str(addr_part)
            .map_err(|_| AddressSpecError::InvalidAddress(addr_part.into()))?;

        match prefix_part {
            Some(prefix) => {
                let prefix_len = parse_prefix(prefix, Family::from(addr), options.allow_netmask)?;
                Self::new(addr, prefix_len)
            }
            None => Ok(Self::from(addr)),
        }
    }
}

fn parse_prefix(
    prefix: &str,
    family: Family,
    allow_netmask: bool,
) -> Result<u8, AddressSpecError> {
    let invalid = || AddressSpecError::InvalidPrefix {
        prefix: prefix.into(),
        family,
    };

    // u8::from_str would also take a leading '+'
    if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) {
        let len: u8 = prefix.parse().map_err(|_| invalid())?;
        return if len <= family.bit_width() {
            Ok(len)
        } else {
            Err(invalid())
        };
    }

    if allow_netmask {
        if let Ok(mask) = IpAddr::from_str(prefix) {
            if Family::from(mask) == family {
                return ip_mask_to_prefix(mask).map_err(|_| invalid());
            }
        }
    }

    Err(invalid())
}

/// Diagnostic form used in log and error messages, always with the prefix length. This is not a
/// canonical textual form and is not used for comparison.
impl fmt::Display for AddressSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.net, f)
    }
}

impl PartialOrd for AddressSpec {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare_to(other).ok()
    }
}

impl From<IpAddr> for AddressSpec {
    fn from(value: IpAddr) -> Self {
        Self {
            net: IpNet::from(value),
        }
    }
}

impl From<IpNet> for AddressSpec {
    fn from(value: IpNet) -> Self {
        Self { net: value }
    }
}

impl FromStr for AddressSpec {
    type Err = AddressSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, ParseOptions::default())
    }
}

impl TryFrom<Option<&str>> for AddressSpec {
    type Error = AddressSpecError;

    fn try_from(value: Option<&str>) -> Result<Self, Self::Error> {
        match value {
            Some(s) => s.parse(),
            None => Err(AddressSpecError::InvalidAddress(String::new())),
        }
    }
}
