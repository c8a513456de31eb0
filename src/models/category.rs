//! Address type: private (RFC 1918), special-use or public.

use super::Address;
use serde::Serialize;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum AddressCategory {
    /// 10/8, 172.16/12, 192.168/16
    Private,
    /// 0/8
    SpecialZero,
    /// 127/8
    SpecialLoopback,
    /// 169.254/16
    SpecialLinkLocal,
    /// 224/4
    SpecialMulticast,
    /// 240/4
    SpecialReserved,
    Public,
}

impl AddressCategory {
    pub fn is_special(self) -> bool {
        !matches!(self, AddressCategory::Private | AddressCategory::Public)
    }
}

/// Classify an address. Only the first two octets matter.
///
/// First match wins: special-use ranges are checked before RFC 1918.
pub fn classify_type(address: Address) -> AddressCategory {
    match (address.first_octet(), address.second_octet()) {
        (0, _) => AddressCategory::SpecialZero,
        (127, _) => AddressCategory::SpecialLoopback,
        (169, 254) => AddressCategory::SpecialLinkLocal,
        (224..=239, _) => AddressCategory::SpecialMulticast,
        (240..=255, _) => AddressCategory::SpecialReserved,
        (10, _) | (172, 16..=31) | (192, 168) => AddressCategory::Private,
        _ => AddressCategory::Public,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_address;

    fn classify(text: &str) -> AddressCategory {
        classify_type(parse_address(text).unwrap())
    }

    #[test]
    fn test_classify_type() {
        assert_eq!(classify("10.0.0.1"), AddressCategory::Private);
        assert_eq!(classify("172.16.0.1"), AddressCategory::Private);
        assert_eq!(classify("172.31.255.255"), AddressCategory::Private);
        assert_eq!(classify("172.15.0.1"), AddressCategory::Public);
        assert_eq!(classify("172.32.0.1"), AddressCategory::Public);
        assert_eq!(classify("192.168.1.1"), AddressCategory::Private);
        assert_eq!(classify("192.169.1.1"), AddressCategory::Public);
        assert_eq!(classify("127.0.0.1"), AddressCategory::SpecialLoopback);
        assert_eq!(classify("0.0.0.0"), AddressCategory::SpecialZero);
        assert_eq!(classify("0.1.2.3"), AddressCategory::SpecialZero);
        assert_eq!(classify("169.254.1.1"), AddressCategory::SpecialLinkLocal);
        assert_eq!(classify("169.253.1.1"), AddressCategory::Public);
        assert_eq!(classify("230.1.1.1"), AddressCategory::SpecialMulticast);
        assert_eq!(classify("250.1.1.1"), AddressCategory::SpecialReserved);
        assert_eq!(classify("255.255.255.255"), AddressCategory::SpecialReserved);
        assert_eq!(classify("8.8.8.8"), AddressCategory::Public);
    }

    #[test]
    fn test_is_special() {
        assert!(AddressCategory::SpecialMulticast.is_special());
        assert!(AddressCategory::SpecialZero.is_special());
        assert!(!AddressCategory::Private.is_special());
        assert!(!AddressCategory::Public.is_special());
    }
}
