use crate::comparator::Comparator;
use crate::errors::IpCompareError;

/// Checks whether two IP addresses are equal.
///
/// The addresses are compared as native 32-bit (IPv4) or 128-bit (IPv6) values, not as text,
/// so `fe80:0::001` and `fe80::1` are equal. Plain addresses and CIDR notation are both
/// accepted; a plain address has a full-width prefix, so `127.0.0.1` equals `127.0.0.1/32`.
/// The prefix lengths must match as well as the address bits.
///
/// # Arguments
///
/// * `left` - The left address, optionally followed by `/<prefix-length>`.
/// * `right` - The right address, optionally followed by `/<prefix-length>`.
///
/// # Returns
///
/// This function returns a [`Result<bool, IpCompareError>`](IpCompareError). It returns
/// `Ok(true)` if the operands are equal and `Ok(false)` otherwise. Addresses of different
/// families are always unequal.
///
/// # Errors
///
/// This function returns [`IpCompareError::Spec`] if either operand is not a valid address
/// or carries an invalid prefix length.
///
/// # Example
///
/// ```rust
/// assert!(ipcalc::equal_to("fe80:0::001", "fe80::1").unwrap());
/// assert!(!ipcalc::equal_to("127.0.0.1", "fe80::1").unwrap());
/// ```
pub fn equal_to(left: &str, right: &str) -> Result<bool, IpCompareError> {
    Comparator::default().equal_to(left, right)
}

/// Compares two IP addresses and returns a `sort()`-compatible result.
///
/// Address bits are compared as unsigned integers. Only when every bit is the same are the
/// prefix lengths compared, and the longer prefix is the larger one.
///
/// # Arguments
///
/// * `left` - The left address, optionally followed by `/<prefix-length>`.
/// * `right` - The right address, optionally followed by `/<prefix-length>`.
///
/// # Returns
///
/// This function returns a [`Result<i8, IpCompareError>`](IpCompareError) holding `1`, `0` or
/// `-1` if the left operand is larger than, equal to, or smaller than the right.
///
/// # Errors
///
/// This function may return:
/// - [`IpCompareError::Spec`] if either operand cannot be parsed.
/// - [`IpCompareError::IncomparableFamilies`] if one operand is IPv4 and the other IPv6. There
///   is no precedence between the two families; use [`Comparator::sort`] with an explicit
///   [`MixedFamilyOrder`](crate::MixedFamilyOrder) when one is needed.
///
/// # Example
///
/// ```rust
/// assert_eq!(ipcalc::compare("127.0.0.1/32", "127.0.0.1/24").unwrap(), 1);
/// assert!(ipcalc::compare("127.0.0.1", "fe80::1").is_err());
/// ```
pub fn compare(left: &str, right: &str) -> Result<i8, IpCompareError> {
    Comparator::default().compare(left, right)
}

/// Checks whether the left IP address is less than the right.
///
/// Ordering follows [`compare`]: address bits first, prefix length on a tie.
///
/// # Arguments
///
/// * `left` - The left address, optionally followed by `/<prefix-length>`.
/// * `right` - The right address, optionally followed by `/<prefix-length>`.
///
/// # Returns
///
/// This function returns a [`Result<bool, IpCompareError>`](IpCompareError). It returns
/// `Ok(true)` if the left operand is smaller and `Ok(false)` otherwise.
///
/// # Errors
///
/// This function returns the same errors as [`compare`], including
/// [`IpCompareError::IncomparableFamilies`] for mixed families.
pub fn less_than(left: &str, right: &str) -> Result<bool, IpCompareError> {
    Comparator::default().less_than(left, right)
}
