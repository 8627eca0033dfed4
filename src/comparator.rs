use std::cmp::Ordering;

use tracing::{debug, trace};
use typed_builder::TypedBuilder;

use crate::address_spec::{AddressSpec, AddressSpecError, ParseOptions};
use crate::errors::IpCompareError;
use crate::family::MixedFamilyOrder;

/// Compares address specifications by their binary value.
///
/// A `Comparator` only carries parsing options; it holds no state between calls and can be
/// shared freely between threads. [`Comparator::default`] matches the free functions
/// [`equal_to`](crate::equal_to), [`compare`](crate::compare) and
/// [`less_than`](crate::less_than).
///
/// # Example
/// ```rust
/// use ipcalc::Comparator;
///
/// let comparator = Comparator::builder().allow_netmask(true).build();
///
/// assert!(comparator.equal_to("10.0.0.1/255.255.255.0", "10.0.0.1/24").unwrap());
/// assert_eq!(comparator.compare("10.0.0.1/32", "10.0.0.1/24").unwrap(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, TypedBuilder)]
pub struct Comparator {
    /// Strip leading and trailing whitespace from each operand before parsing. Off by default,
    /// so padded input is an invalid address.
    #[builder(default = false)]
    trim_whitespace: bool,
    /// Accept a netmask such as `255.255.255.0` in place of a prefix length.
    #[builder(default = false)]
    allow_netmask: bool,
}

impl Default for Comparator {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Comparator {
    /// Whether surrounding whitespace is stripped before parsing.
    pub fn trim_whitespace(&self) -> bool {
        self.trim_whitespace
    }

    /// Whether a netmask is accepted in place of a prefix length.
    pub fn allow_netmask(&self) -> bool {
        self.allow_netmask
    }

    fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            trim_whitespace: self.trim_whitespace,
            allow_netmask: self.allow_netmask,
        }
    }

    /// Parses one address specification with this comparator's options.
    /// # Errors
    /// Returns `AddressSpecError::InvalidAddress` or `AddressSpecError::InvalidPrefix` if the
    /// input is malformed.
    pub fn parse(&self, input: &str) -> Result<AddressSpec, AddressSpecError> {
        match AddressSpec::parse_with(input, self.parse_options()) {
            Ok(spec) => {
                trace!("Parsed '{}' as {} address {}", input, spec.family(), spec);
                Ok(spec)
            }
            Err(err) => {
                debug!("Failed to parse address specification '{}': {}", input, err);
                Err(err)
            }
        }
    }

    fn parse_pair(
        &self,
        left: &str,
        right: &str,
    ) -> Result<(AddressSpec, AddressSpec), IpCompareError> {
        let left = self.parse(left)?;
        let right = self.parse(right)?;
        Ok((left, right))
    }

    /// Returns `true` if both operands have the same address bits and prefix length.
    ///
    /// Addresses of different families are never equal; this is not an error.
    /// # Errors
    /// Returns `IpCompareError::Spec` if either operand cannot be parsed.
    pub fn equal_to(&self, left: &str, right: &str) -> Result<bool, IpCompareError> {
        let (left, right) = self.parse_pair(left, right)?;

        if left.family() != right.family() {
            debug!(
                "Mixed families {} and {} compare unequal",
                left.family(),
                right.family()
            );
            return Ok(false);
        }

        let equal = left.is_same_as(&right);
        trace!("{} == {}: {}", left, right, equal);
        Ok(equal)
    }

    /// Orders two address specifications: address bits first, then prefix length.
    /// # Errors
    /// Returns `IpCompareError::Spec` if either operand cannot be parsed, or
    /// `IpCompareError::IncomparableFamilies` if the operands are of different families.
    pub fn ordering(&self, left: &str, right: &str) -> Result<Ordering, IpCompareError> {
        let (left, right) = self.parse_pair(left, right)?;

        let ordering = left.compare_to(&right).inspect_err(|err| {
            debug!("Refusing to order {} and {}: {}", left, right, err);
        })?;
        trace!("{} cmp {}: {:?}", left, right, ordering);
        Ok(ordering)
    }

    /// Like [`Comparator::ordering`], but returns `-1`, `0` or `1` as used by `sort()` callbacks.
    /// # Errors
    /// See [`Comparator::ordering`].
    pub fn compare(&self, left: &str, right: &str) -> Result<i8, IpCompareError> {
        self.ordering(left, right).map(|ordering| ordering as i8)
    }

    /// Returns `true` if `left` orders strictly before `right`.
    /// # Errors
    /// See [`Comparator::ordering`].
    pub fn less_than(&self, left: &str, right: &str) -> Result<bool, IpCompareError> {
        self.ordering(left, right).map(Ordering::is_lt)
    }

    /// Sorts address strings in ascending order, returning them unchanged in the new order.
    ///
    /// All items are parsed before sorting. Equal items keep their relative order. When the
    /// items contain both families, `mixed` decides whether that is an error or which family
    /// comes first.
    /// # Errors
    /// Returns `IpCompareError::Spec` for the first item that cannot be parsed, or
    /// `IpCompareError::IncomparableFamilies` if families are mixed and `mixed` is
    /// [`MixedFamilyOrder::Reject`].
    pub fn sort<S: AsRef<str>>(
        &self,
        items: Vec<S>,
        mixed: MixedFamilyOrder,
    ) -> Result<Vec<S>, IpCompareError> {
        let mut keyed = items
            .into_iter()
            .map(|item| -> Result<_, IpCompareError> {
                let spec = self.parse(item.as_ref())?;
                Ok((spec, item))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if mixed == MixedFamilyOrder::Reject {
            if let Some((first, _)) = keyed.first() {
                let left = first.family();
                if let Some((other, _)) = keyed.iter().find(|(spec, _)| spec.family() != left) {
                    let right = other.family();
                    debug!("Refusing to sort mixed families {} and {}", left, right);
                    return Err(IpCompareError::IncomparableFamilies { left, right });
                }
            }
        }

        keyed.sort_by_key(|(spec, _)| {
            (
                mixed.rank(spec.family()).unwrap_or(0),
                spec.address_bits(),
                spec.prefix_len(),
            )
        });
        trace!("Sorted {} address specifications", keyed.len());

        Ok(keyed.into_iter().map(|(_, item)| item).collect())
    }
}
