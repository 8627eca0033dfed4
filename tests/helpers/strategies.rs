use std::net::{Ipv4Addr, Ipv6Addr};

use proptest::prelude::*;

/// IPv4 specification text, with or without a prefix.
pub fn ipv4_spec() -> impl Strategy<Value = String> {
    // Small octet ranges make equal addresses, and so prefix tie-breaks, likely.
    (0u8..4, 0u8..4, any::<bool>(), 0u8..=32).prop_map(|(c, d, with_prefix, prefix)| {
        let addr = Ipv4Addr::new(10, 0, c, d);
        if with_prefix {
            format!("{addr}/{prefix}")
        } else {
            addr.to_string()
        }
    })
}

/// IPv6 specification text, sometimes spelled with uncompressed zero groups.
pub fn ipv6_spec() -> impl Strategy<Value = String> {
    (0u16..4, 0u16..4, any::<bool>(), any::<bool>(), 0u8..=128).prop_map(
        |(g7, g8, expanded, with_prefix, prefix)| {
            let addr = if expanded {
                format!("fe80:0000:0:0:0:0:{g7:04x}:{g8:04x}")
            } else {
                Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, g7, g8).to_string()
            };
            if with_prefix {
                format!("{addr}/{prefix}")
            } else {
                addr
            }
        },
    )
}

/// Any valid specification of either family.
pub fn any_spec() -> impl Strategy<Value = String> {
    prop_oneof![ipv4_spec(), ipv6_spec()]
}

/// Three specifications of the same family.
pub fn same_family_triple() -> impl Strategy<Value = (String, String, String)> {
    prop_oneof![
        (ipv4_spec(), ipv4_spec(), ipv4_spec()),
        (ipv6_spec(), ipv6_spec(), ipv6_spec()),
    ]
}
