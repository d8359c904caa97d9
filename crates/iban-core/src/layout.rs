//! # Layout Validator
//!
//! Walks a [`BbanStructure`] over a candidate BBAN. Two modes:
//!
//! - [`validate_and_slice`] checks every field's length and character class,
//!   requires the string to be consumed exactly, and returns every field.
//! - [`slice_field`] reads a single field. Earlier fields only advance the
//!   cursor; their characters are counted but not class-checked.
//!
//! Indexes in violations are byte offsets into the BBAN.

use std::collections::BTreeMap;
use std::ops::Range;

use crate::bban::{BbanStructure, CharacterClass, FieldKind, FieldRule};
use crate::error::IbanFormatViolation;

/// Validate `bban` against `structure` and split it into its fields.
///
/// # Errors
///
/// - [`IbanFormatViolation::FieldTooShort`] when the string ends inside a field.
/// - [`IbanFormatViolation::InvalidCharacter`] for the first character outside
///   its field's class.
/// - [`IbanFormatViolation::BbanLength`] when characters remain after the last
///   field.
pub fn validate_and_slice<'a>(
    bban: &'a str,
    structure: &BbanStructure,
) -> Result<BTreeMap<FieldKind, &'a str>, IbanFormatViolation> {
    let mut fields = BTreeMap::new();
    let mut cursor = 0;

    for rule in structure.rules() {
        let value = read_field(bban, cursor, rule)?;
        fields.insert(rule.kind(), value);
        cursor += rule.length();
    }

    if cursor != bban.len() {
        return Err(IbanFormatViolation::BbanLength {
            expected: cursor,
            actual: bban.chars().count(),
        });
    }

    Ok(fields)
}

/// Read the field of the given kind from `bban`.
///
/// Returns `Ok(None)` when the layout has no such field. Only the requested
/// field is class-checked, and trailing characters are not an error.
pub fn slice_field<'a>(
    bban: &'a str,
    structure: &BbanStructure,
    kind: FieldKind,
) -> Result<Option<&'a str>, IbanFormatViolation> {
    let mut cursor = 0;
    for rule in structure.rules() {
        if rule.kind() == kind {
            return read_field(bban, cursor, rule).map(Some);
        }
        cursor += rule.length();
    }
    Ok(None)
}

fn read_field<'a>(
    bban: &'a str,
    cursor: usize,
    rule: &FieldRule,
) -> Result<&'a str, IbanFormatViolation> {
    let end = cursor + rule.length();
    if end > bban.len() {
        return Err(IbanFormatViolation::FieldTooShort { field: rule.kind() });
    }

    if let Some((character, index)) = find_violation(bban, cursor..end, rule.class()) {
        return Err(IbanFormatViolation::InvalidCharacter {
            field: rule.kind(),
            class: rule.class(),
            character,
            index,
        });
    }

    // Every byte in range is ASCII, so both ends are char boundaries.
    Ok(&bban[cursor..end])
}

/// First character in `range` that falls outside `class`, with its offset.
///
/// `range` must lie within `input`.
pub(crate) fn find_violation(
    input: &str,
    range: Range<usize>,
    class: CharacterClass,
) -> Option<(char, usize)> {
    let start = range.start;
    input.as_bytes()[range]
        .iter()
        .position(|b| !class.matches(*b))
        .map(|i| (char_at(input, start + i), start + i))
}

/// The character starting at byte `index`, or U+FFFD when `index` falls
/// inside a multi-byte character.
pub(crate) fn char_at(input: &str, index: usize) -> char {
    input
        .get(index..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}
