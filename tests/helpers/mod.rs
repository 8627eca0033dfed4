#![allow(dead_code)]

pub mod strategies;

use ipcalc::IpCompareError;

pub fn assert_incomparable<T: std::fmt::Debug>(result: Result<T, IpCompareError>) {
    match result {
        Err(err) => assert!(
            err.is_incomparable_families(),
            "expected IncomparableFamilies, got {err:?}"
        ),
        Ok(value) => panic!("expected IncomparableFamilies, got Ok({value:?})"),
    }
}

pub fn assert_invalid_address<T: std::fmt::Debug>(result: Result<T, IpCompareError>) {
    match result {
        Err(err) => assert!(
            err.is_invalid_address(),
            "expected InvalidAddress, got {err:?}"
        ),
        Ok(value) => panic!("expected InvalidAddress, got Ok({value:?})"),
    }
}
