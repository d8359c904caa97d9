//! # Property Tests
//!
//! Round-trip and error-detection properties over every supported country.

use iban_core::bban::{self, CharacterClass, FieldRule};
use iban_core::{check_digit, FieldKind, Iban, IbanBuilder};
use proptest::prelude::*;

fn class_pattern(class: CharacterClass) -> &'static str {
    match class {
        CharacterClass::Numeric => "[0-9]",
        CharacterClass::UpperAlpha => "[A-Z]",
        CharacterClass::MixedAlphanumeric => "[0-9A-Z]",
    }
}

fn field_value(rule: &FieldRule) -> BoxedStrategy<String> {
    let pattern = format!("{}{{{}}}", class_pattern(rule.class()), rule.length());
    proptest::string::string_regex(&pattern)
        .expect("class pattern is a valid regex")
        .boxed()
}

/// A supported country and one valid value per field, in layout order.
fn country_and_fields() -> impl Strategy<Value = (&'static str, Vec<(FieldKind, String)>)> {
    let codes: Vec<&'static str> = bban::supported_countries().collect();
    prop::sample::select(codes).prop_flat_map(|code| {
        let rules = bban::structure_for(code).unwrap().rules();
        let values: Vec<BoxedStrategy<String>> = rules.iter().map(field_value).collect();
        let kinds: Vec<FieldKind> = rules.iter().map(|r| r.kind()).collect();
        (Just(code), values).prop_map(move |(code, values)| {
            (code, kinds.iter().copied().zip(values).collect::<Vec<_>>())
        })
    })
}

fn build(code: &str, fields: &[(FieldKind, String)]) -> Iban {
    fields
        .iter()
        .fold(IbanBuilder::new().country_code(code), |b, (kind, value)| {
            b.field(*kind, value.clone())
        })
        .build()
        .unwrap()
}

proptest! {
    /// Compose -> validate -> decompose returns the original field values.
    #[test]
    fn compose_validate_decompose((code, fields) in country_and_fields()) {
        let iban = build(code, &fields);
        let reparsed = Iban::new(iban.as_str()).unwrap();
        prop_assert_eq!(reparsed.country_code(), code);
        for (kind, value) in &fields {
            prop_assert_eq!(reparsed.field(*kind), Some(value.as_str()));
        }
        let decomposed = reparsed.fields();
        prop_assert_eq!(decomposed.len(), fields.len());
    }

    /// Substituting the computed check digits always yields remainder 1.
    #[test]
    fn computed_check_digit_validates(
        country in "[A-Z]{2}",
        bban in "[0-9A-Z]{1,30}",
    ) {
        let digits = check_digit::compute(&country, &bban).unwrap();
        prop_assert_eq!(digits.len(), 2);
        let value: u8 = digits.parse().unwrap();
        prop_assert!((1..=98).contains(&value));
        let iban = format!("{country}{digits}{bban}");
        prop_assert!(check_digit::validate(&iban).is_ok());
    }

    /// Removing the spaces from the display form gives back the IBAN.
    #[test]
    fn formatted_string_round_trips((code, fields) in country_and_fields()) {
        let iban = build(code, &fields);
        let formatted = iban.to_formatted_string();
        prop_assert_eq!(formatted.replace(' ', ""), iban.as_str());
        prop_assert!(!formatted.ends_with(' '));
        prop_assert!(formatted.split(' ').all(|group| (1..=4).contains(&group.len())));
    }

    /// Replacing one BBAN character with another of the same kind (digit for
    /// digit, letter for letter) is always detected.
    #[test]
    fn same_kind_substitution_is_detected(
        (code, fields) in country_and_fields(),
        position in any::<prop::sample::Index>(),
        shift in 1u8..10,
    ) {
        let iban = build(code, &fields);
        let mut bytes = iban.as_str().as_bytes().to_vec();
        let i = 4 + position.index(iban.bban().len());
        bytes[i] = match bytes[i] {
            b @ b'0'..=b'9' => b'0' + (b - b'0' + shift) % 10,
            b => b'A' + (b - b'A' + shift) % 26,
        };
        let mutant = String::from_utf8(bytes).unwrap();
        prop_assert!(Iban::new(mutant).is_err());
    }
}

/// A digit/letter swap changes the length of the numeral, so it can collide.
/// Enumerate every single-character substitution in one IBAN's account
/// number and check that the only collisions are digit/letter swaps.
#[test]
fn single_character_collisions_are_cross_kind_only() {
    let original = "TR330006100519786457841326";
    let alphabet = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let mut collisions = Vec::new();

    for i in 9..original.len() {
        for &replacement in alphabet.iter() {
            let current = original.as_bytes()[i];
            if replacement == current {
                continue;
            }
            let mut bytes = original.as_bytes().to_vec();
            bytes[i] = replacement;
            let mutant = String::from_utf8(bytes).unwrap();
            if Iban::new(mutant.as_str()).is_ok() {
                collisions.push((i, current, replacement));
            }
        }
    }

    for (i, from, to) in &collisions {
        assert_ne!(
            from.is_ascii_digit(),
            to.is_ascii_digit(),
            "same-kind collision at {i}: {} -> {}",
            *from as char,
            *to as char
        );
    }
}

#[test]
fn values_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Iban>();
    assert_send_sync::<iban_core::Bic>();
    assert_send_sync::<iban_core::IbanError>();
    assert_send_sync::<iban_core::BbanStructure>();
}

#[test]
fn concurrent_validation_agrees() {
    let inputs = [
        "TR330006100519786457841326",
        "DE89370400440532013000",
        "GB29NWBK60161331926819",
        "TR340006100519786457841326",
    ];
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    inputs
                        .iter()
                        .map(|s| iban_core::iban::is_valid(s))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), vec![true, true, true, false]);
        }
    });
}
