//! RUT parsing and formatting properties.

use proptest::prelude::*;
use tc_rut::{format_rut, is_valid, verification_digit, Rut};

proptest! {
    #[test]
    fn completed_bodies_validate(body in 1u32..100_000_000) {
        let rut = Rut::from_body(body);
        prop_assert!(is_valid(&rut.to_string()));
        prop_assert!(is_valid(&rut.formatted()));
        // Bare form: body digits followed directly by the check character
        let bare = format!("{}{}", body, rut.dv());
        prop_assert!(is_valid(&bare));
    }

    #[test]
    fn wrong_check_character_rejected(body in 1u32..100_000_000, dv in prop::sample::select(
        vec!['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'K'],
    )) {
        prop_assume!(dv != verification_digit(body));
        let dashed = format!("{body}-{dv}");
        prop_assert!(!is_valid(&dashed));
    }

    #[test]
    fn formatting_is_stable(body in 1u32..100_000_000) {
        let rut = Rut::from_body(body);
        let once = format_rut(&rut.to_string()).unwrap();
        prop_assert_eq!(&once, &rut.formatted());
        prop_assert_eq!(format_rut(&once).unwrap(), once.clone());
        let parsed: Rut = once.parse().unwrap();
        prop_assert_eq!(parsed, rut);
    }
}

#[test]
fn lowercase_k_parses() {
    let rut: Rut = "12.345.670-k".parse().unwrap();
    assert_eq!(rut.dv(), 'K');
    assert_eq!(rut.formatted(), "12.345.670-K");
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert!(is_valid("  9007586-1 "));
}
