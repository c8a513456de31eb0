//! Integration tests for ipv4-class-viz
//!
//! These tests drive the public API from raw user input to the rendered view.

use ipv4_class_viz::output::{category_label, status_led, OutputFormat};
use ipv4_class_viz::processing::Portion;
use ipv4_class_viz::{
    class_of, classify_type, compute_mask, compute_view, default_prefix_for_class, parse_address,
    random_address_for, render_bits, render_octet_labels, AddrClass, AddrError, AddressCategory,
    PrefixLength, ViewInput,
};

#[test]
fn test_end_to_end_classful() {
    let view = compute_view(&ViewInput::classful("10.1.2.3")).expect("valid address");

    assert_eq!(view.class, AddrClass::A);
    assert_eq!(view.prefix_length.get(), 8);
    assert_eq!(view.mask.to_string(), "255.0.0.0");
    assert_eq!(view.category, AddressCategory::Private);
    assert_eq!(status_led(view.category).1, "Privée (RFC1918)");
    assert_eq!(view.address_octets[0].portion, Portion::Network);
    assert!(view.address_octets[1..]
        .iter()
        .all(|o| o.portion == Portion::Host));
}

#[test]
fn test_round_trip_all_octet_values() {
    for v in 0..=255u8 {
        let text = format!("{v}.{}.{}.{v}", 255 - v, v / 2);
        let addr = parse_address(&text).expect("valid address");
        assert_eq!(addr.to_string(), text);
    }
}

#[test]
fn test_invalid_inputs() {
    for text in ["256.1.1.1", "1.2.3", "a.b.c.d", "1.2.3.4.5", "", "1.2.3.-4"] {
        assert!(
            matches!(parse_address(text), Err(AddrError::InvalidAddress(_))),
            "{text:?}"
        );
        assert!(compute_view(&ViewInput::classful(text)).is_err(), "{text:?}");
    }
}

#[test]
fn test_masks() {
    assert_eq!(compute_mask(PrefixLength::clamped(0)), 0x00000000);
    assert_eq!(compute_mask(PrefixLength::clamped(32)), 0xFFFFFFFF);
    assert_eq!(compute_mask(PrefixLength::clamped(24)), 0xFFFFFF00);
}

#[test]
fn test_class_boundaries() {
    let cases = [
        ("127.0.0.1", AddrClass::A),
        ("128.0.0.1", AddrClass::B),
        ("191.255.0.1", AddrClass::B),
        ("192.0.0.1", AddrClass::C),
        ("223.1.1.1", AddrClass::C),
        ("224.0.0.1", AddrClass::D),
        ("240.0.0.1", AddrClass::E),
    ];
    for (text, class) in cases {
        assert_eq!(class_of(parse_address(text).unwrap()), class, "{text}");
    }
    assert_eq!(default_prefix_for_class(AddrClass::B).get(), 16);
}

#[test]
fn test_address_types() {
    let cases = [
        ("10.0.0.1", AddressCategory::Private),
        ("172.16.0.1", AddressCategory::Private),
        ("172.32.0.1", AddressCategory::Public),
        ("192.168.1.1", AddressCategory::Private),
        ("127.0.0.1", AddressCategory::SpecialLoopback),
        ("0.0.0.0", AddressCategory::SpecialZero),
        ("169.254.1.1", AddressCategory::SpecialLinkLocal),
        ("230.1.1.1", AddressCategory::SpecialMulticast),
        ("250.1.1.1", AddressCategory::SpecialReserved),
        ("8.8.8.8", AddressCategory::Public),
    ];
    for (text, category) in cases {
        let found = classify_type(parse_address(text).unwrap());
        assert_eq!(found, category, "{text}");
        assert!(!category_label(found).is_empty());
    }
}

#[test]
fn test_octet_labels_and_bits() {
    let addr = parse_address("192.168.10.42").unwrap();

    let labels = render_octet_labels(addr.bits(), PrefixLength::clamped(24));
    assert_eq!(labels[0].portion, Portion::Network);
    assert_eq!(labels[1].portion, Portion::Network);
    assert_eq!(labels[2].portion, Portion::Network);
    assert_eq!(labels[3].portion, Portion::Host);

    let labels = render_octet_labels(addr.bits(), PrefixLength::clamped(20));
    assert_eq!(labels[2].portion, Portion::Mixed);
    assert_eq!(labels[2].mix_ratio, Some(0.5));

    let bits = render_bits(addr.bits(), PrefixLength::clamped(20));
    assert_eq!(bits.len(), 32);
    assert!(bits[..20].iter().all(|b| b.is_network));
    assert!(bits[20..].iter().all(|b| !b.is_network));
}

#[test]
fn test_random_class_a_repeated() {
    for _ in 0..2000 {
        let [a, _, _, d] = random_address_for(AddrClass::A).unwrap().octets();
        assert!((1..=126).contains(&a));
        assert!((1..=254).contains(&d));
    }
}

#[test]
fn test_json_output_for_invalid_input() {
    let result = compute_view(&ViewInput::classful("1.2.3"));
    let text = OutputFormat::Json.render(&result).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(value["error"].as_str().unwrap().contains("1.2.3"));
}
