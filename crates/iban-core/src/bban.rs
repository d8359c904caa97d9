//! # BBAN Layouts — Field Rules and the Country Registry
//!
//! A BBAN (Basic Bank Account Number) is the country-specific part of an
//! IBAN. Each supported country defines its BBAN as an ordered list of
//! [`FieldRule`]s; the order is the left-to-right order of the characters.
//!
//! ## Invariants
//!
//! - Every rule has a non-zero length. [`FieldRule::new`] is a `const fn`
//!   that rejects zero, so a bad registry entry fails to compile.
//! - The sum of a structure's rule lengths is its BBAN length. Rules never
//!   overlap: the layout walk consumes exactly `length` characters per rule.
//! - The registry is a compile-time constant sorted by country code. It is
//!   shared by reference and cannot be mutated, so lookups hand out
//!   [`BbanStructure`] handles instead of copies.

use serde::{Deserialize, Serialize};

/// Characters occupied by the country code and check digits.
pub(crate) const IBAN_PREFIX_LENGTH: usize = 4;

/// The role a slice of the BBAN plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Identifies the bank.
    BankCode,
    /// Identifies the branch within the bank.
    BranchCode,
    /// Leading part of a split account number (Czechia, Slovakia).
    AccountNumberPrefix,
    /// The account number proper.
    AccountNumber,
    /// Domestic check digit(s), independent of the IBAN check digit.
    NationalCheckDigit,
    /// Kind of account (Bulgaria, Brazil).
    AccountType,
    /// Account holder position (Brazil).
    OwnerAccountNumber,
    /// Holder identification, e.g. the Icelandic kennitala.
    IdentificationNumber,
    /// Balance account number.
    BalanceAccountNumber,
}

impl FieldKind {
    /// Every field kind, in declaration order.
    pub fn all() -> &'static [FieldKind] {
        &[
            Self::BankCode,
            Self::BranchCode,
            Self::AccountNumberPrefix,
            Self::AccountNumber,
            Self::NationalCheckDigit,
            Self::AccountType,
            Self::OwnerAccountNumber,
            Self::IdentificationNumber,
            Self::BalanceAccountNumber,
        ]
    }

    /// The snake_case identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BankCode => "bank_code",
            Self::BranchCode => "branch_code",
            Self::AccountNumberPrefix => "account_number_prefix",
            Self::AccountNumber => "account_number",
            Self::NationalCheckDigit => "national_check_digit",
            Self::AccountType => "account_type",
            Self::OwnerAccountNumber => "owner_account_number",
            Self::IdentificationNumber => "identification_number",
            Self::BalanceAccountNumber => "balance_account_number",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The characters a field may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    /// ASCII digits `0-9`.
    Numeric,
    /// ASCII uppercase letters `A-Z`.
    UpperAlpha,
    /// ASCII digits and uppercase letters.
    MixedAlphanumeric,
}

impl CharacterClass {
    /// Whether `byte` belongs to this class.
    pub fn matches(&self, byte: u8) -> bool {
        match self {
            Self::Numeric => byte.is_ascii_digit(),
            Self::UpperAlpha => byte.is_ascii_uppercase(),
            Self::MixedAlphanumeric => byte.is_ascii_digit() || byte.is_ascii_uppercase(),
        }
    }

    /// The single-letter code used by the SWIFT IBAN registry.
    pub fn code(&self) -> char {
        match self {
            Self::Numeric => 'n',
            Self::UpperAlpha => 'a',
            Self::MixedAlphanumeric => 'c',
        }
    }

    /// Parse a registry code, ignoring case.
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            'n' => Some(Self::Numeric),
            'a' => Some(Self::UpperAlpha),
            'c' => Some(Self::MixedAlphanumeric),
            _ => None,
        }
    }

    /// The snake_case identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::UpperAlpha => "upper_alpha",
            Self::MixedAlphanumeric => "mixed_alphanumeric",
        }
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fixed-width slice of a BBAN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FieldRule {
    kind: FieldKind,
    class: CharacterClass,
    length: usize,
}

impl FieldRule {
    /// Create a rule.
    ///
    /// # Panics
    ///
    /// Panics if `length` is zero. In a `const` context this is a compile
    /// error, which is how the registry is built.
    pub const fn new(kind: FieldKind, class: CharacterClass, length: usize) -> Self {
        assert!(length > 0, "field length must be positive");
        Self {
            kind,
            class,
            length,
        }
    }

    /// What the field holds.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The characters the field may contain.
    pub fn class(&self) -> CharacterClass {
        self.class
    }

    /// Number of characters the field occupies.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Registry notation: `5!n` is exactly five digits.
impl std::fmt::Display for FieldRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}!{}", self.length, self.class.code())
    }
}

/// The ordered field layout of one country's BBAN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BbanStructure {
    rules: &'static [FieldRule],
}

impl BbanStructure {
    /// The rules in BBAN order.
    pub fn rules(&self) -> &'static [FieldRule] {
        self.rules
    }

    /// Total BBAN length: the sum of all rule lengths.
    pub const fn bban_length(&self) -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < self.rules.len() {
            total += self.rules[i].length;
            i += 1;
        }
        total
    }

    /// Total IBAN length for the country.
    pub const fn iban_length(&self) -> usize {
        IBAN_PREFIX_LENGTH + self.bban_length()
    }

    /// Whether the layout has a rule of the given kind.
    pub fn contains(&self, kind: FieldKind) -> bool {
        self.rules.iter().any(|rule| rule.kind == kind)
    }

    /// The rule for `kind`, if the layout has one.
    pub fn rule(&self, kind: FieldKind) -> Option<&'static FieldRule> {
        self.rules.iter().find(|rule| rule.kind == kind)
    }
}

impl std::fmt::Display for BbanStructure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", rule.kind, rule)?;
        }
        Ok(())
    }
}

/// Look up the BBAN layout of a country.
///
/// The match is exact: callers normalize to uppercase first.
pub fn structure_for(country_code: &str) -> Option<BbanStructure> {
    REGISTRY
        .binary_search_by(|(code, _)| (*code).cmp(country_code))
        .ok()
        .map(|i| REGISTRY[i].1)
}

/// Whether the country's layout has a rule of the given kind.
///
/// Unsupported countries support no fields.
pub fn is_field_supported(country_code: &str, kind: FieldKind) -> bool {
    structure_for(country_code).is_some_and(|s| s.contains(kind))
}

/// Whether the country has a BBAN layout.
pub fn is_supported_country(country_code: &str) -> bool {
    structure_for(country_code).is_some()
}

/// Country codes with a BBAN layout, in ascending order.
pub fn supported_countries() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(code, _)| *code)
}

/// Full IBAN length for a supported country.
pub fn iban_length(country_code: &str) -> Option<usize> {
    structure_for(country_code).map(|s| s.iban_length())
}

/// The longest IBAN of any supported country.
pub fn max_iban_length() -> usize {
    MAX_IBAN_LENGTH
}

const fn longest_iban(registry: &[(&str, BbanStructure)]) -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < registry.len() {
        let length = registry[i].1.iban_length();
        if length > max {
            max = length;
        }
        i += 1;
    }
    max
}

const MAX_IBAN_LENGTH: usize = longest_iban(REGISTRY);

macro_rules! bban {
    ($($kind:ident($length:expr, $class:ident)),+ $(,)?) => {
        BbanStructure {
            rules: &[$(FieldRule::new(FieldKind::$kind, CharacterClass::$class, $length)),+],
        }
    };
}

// Sorted by country code; `structure_for` relies on it.
const REGISTRY: &[(&str, BbanStructure)] = &[
    (
        "AD",
        bban![
            BankCode(4, Numeric),
            BranchCode(4, Numeric),
            AccountNumber(12, MixedAlphanumeric),
        ],
    ),
    (
        "AE",
        bban![BankCode(3, Numeric), AccountNumber(16, Numeric)],
    ),
    (
        "AL",
        bban![
            BankCode(3, Numeric),
            BranchCode(4, Numeric),
            NationalCheckDigit(1, Numeric),
            AccountNumber(16, MixedAlphanumeric),
        ],
    ),
    (
        "AT",
        bban![BankCode(5, Numeric), AccountNumber(11, Numeric)],
    ),
    (
        "AZ",
        bban![
            BankCode(4, UpperAlpha),
            AccountNumber(20, MixedAlphanumeric),
        ],
    ),
    (
        "BA",
        bban![
            BankCode(3, Numeric),
            BranchCode(3, Numeric),
            AccountNumber(8, Numeric),
            NationalCheckDigit(2, Numeric),
        ],
    ),
    (
        "BE",
        bban![
            BankCode(3, Numeric),
            AccountNumber(7, Numeric),
            NationalCheckDigit(2, Numeric),
        ],
    ),
    (
        "BG",
        bban![
            BankCode(4, UpperAlpha),
            BranchCode(4, Numeric),
            AccountType(2, Numeric),
            AccountNumber(8, MixedAlphanumeric),
        ],
    ),
    (
        "BH",
        bban![
            BankCode(4, UpperAlpha),
            AccountNumber(14, MixedAlphanumeric),
        ],
    ),
    (
        "BR",
        bban![
            BankCode(8, Numeric),
            BranchCode(5, Numeric),
            AccountNumber(10, Numeric),
            AccountType(1, UpperAlpha),
            OwnerAccountNumber(1, MixedAlphanumeric),
        ],
    ),
    (
        "CH",
        bban![BankCode(5, Numeric), AccountNumber(12, MixedAlphanumeric)],
    ),
    (
        "CR",
        bban![BankCode(4, Numeric), AccountNumber(14, Numeric)],
    ),
    (
        "CY",
        bban![
            BankCode(3, Numeric),
            BranchCode(5, Numeric),
            AccountNumber(16, MixedAlphanumeric),
        ],
    ),
    (
        "CZ",
        bban![
            BankCode(4, Numeric),
            AccountNumberPrefix(6, Numeric),
            AccountNumber(10, Numeric),
        ],
    ),
    (
        "DE",
        bban![BankCode(8, Numeric), AccountNumber(10, Numeric)],
    ),
    (
        "DK",
        bban![BankCode(4, Numeric), AccountNumber(10, Numeric)],
    ),
    (
        "DO",
        bban![BankCode(4, MixedAlphanumeric), AccountNumber(20, Numeric)],
    ),
    (
        "EE",
        bban![
            BankCode(2, Numeric),
            BranchCode(2, Numeric),
            AccountNumber(11, Numeric),
            NationalCheckDigit(1, Numeric),
        ],
    ),
    (
        "ES",
        bban![
            BankCode(4, Numeric),
            BranchCode(4, Numeric),
            NationalCheckDigit(2, Numeric),
            AccountNumber(10, Numeric),
        ],
    ),
    (
        "FI",
        bban![
            BankCode(6, Numeric),
            AccountNumber(7, Numeric),
            NationalCheckDigit(1, Numeric),
        ],
    ),
    (
        "FO",
        bban![
            BankCode(4, Numeric),
            AccountNumber(9, Numeric),
            NationalCheckDigit(1, Numeric),
        ],
    ),
    (
        "FR",
        bban![
            BankCode(5, Numeric),
            BranchCode(5, Numeric),
            AccountNumber(11, MixedAlphanumeric),
            NationalCheckDigit(2, Numeric),
        ],
    ),
    (
        "GB",
        bban![
            BankCode(4, UpperAlpha),
            BranchCode(6, Numeric),
            AccountNumber(8, Numeric),
        ],
    ),
    (
        "GE",
        bban![BankCode(2, UpperAlpha), AccountNumber(16, Numeric)],
    ),
    (
        "GI",
        bban![
            BankCode(4, UpperAlpha),
            AccountNumber(15, MixedAlphanumeric),
        ],
    ),
    (
        "GL",
        bban![
            BankCode(4, Numeric),
            AccountNumber(9, Numeric),
            NationalCheckDigit(1, Numeric),
        ],
    ),
    (
        "GR",
        bban![
            BankCode(3, Numeric),
            BranchCode(4, Numeric),
            AccountNumber(16, MixedAlphanumeric),
        ],
    ),
    (
        "GT",
        bban![
            BankCode(4, MixedAlphanumeric),
            AccountNumber(20, MixedAlphanumeric),
        ],
    ),
    (
        "HR",
        bban![BankCode(7, Numeric), AccountNumber(10, Numeric)],
    ),
    (
        "IE",
        bban![
            BankCode(4, UpperAlpha),
            BranchCode(6, Numeric),
            AccountNumber(8, Numeric),
        ],
    ),
    (
        "IL",
        bban![
            BankCode(3, Numeric),
            BranchCode(3, Numeric),
            AccountNumber(13, Numeric),
        ],
    ),
    (
        "IS",
        bban![
            BankCode(4, Numeric),
            BranchCode(2, Numeric),
            AccountNumber(6, Numeric),
            IdentificationNumber(10, Numeric),
        ],
    ),
    (
        "IT",
        bban![
            NationalCheckDigit(1, UpperAlpha),
            BankCode(5, Numeric),
            BranchCode(5, Numeric),
            AccountNumber(12, MixedAlphanumeric),
        ],
    ),
    (
        "JO",
        bban![
            BankCode(4, UpperAlpha),
            BranchCode(4, Numeric),
            AccountNumber(18, MixedAlphanumeric),
        ],
    ),
    (
        "KW",
        bban![
            BankCode(4, UpperAlpha),
            AccountNumber(22, MixedAlphanumeric),
        ],
    ),
    (
        "KZ",
        bban![BankCode(3, Numeric), AccountNumber(13, MixedAlphanumeric)],
    ),
    (
        "LB",
        bban![BankCode(4, Numeric), AccountNumber(20, MixedAlphanumeric)],
    ),
    (
        "LI",
        bban![BankCode(5, Numeric), AccountNumber(12, MixedAlphanumeric)],
    ),
    (
        "LT",
        bban![BankCode(5, Numeric), AccountNumber(11, Numeric)],
    ),
    (
        "LU",
        bban![BankCode(3, Numeric), AccountNumber(13, MixedAlphanumeric)],
    ),
    (
        "LV",
        bban![
            BankCode(4, UpperAlpha),
            AccountNumber(13, MixedAlphanumeric),
        ],
    ),
    (
        "MC",
        bban![
            BankCode(5, Numeric),
            BranchCode(5, Numeric),
            AccountNumber(11, MixedAlphanumeric),
            NationalCheckDigit(2, Numeric),
        ],
    ),
    (
        "MD",
        bban![
            BankCode(2, MixedAlphanumeric),
            AccountNumber(18, MixedAlphanumeric),
        ],
    ),
    (
        "ME",
        bban![
            BankCode(3, Numeric),
            AccountNumber(13, Numeric),
            NationalCheckDigit(2, Numeric),
        ],
    ),
    (
        "MK",
        bban![
            BankCode(3, Numeric),
            AccountNumber(10, MixedAlphanumeric),
            NationalCheckDigit(2, Numeric),
        ],
    ),
    (
        "MR",
        bban![
            BankCode(5, Numeric),
            BranchCode(5, Numeric),
            AccountNumber(11, Numeric),
            NationalCheckDigit(2, Numeric),
        ],
    ),
    (
        "MT",
        bban![
            BankCode(4, UpperAlpha),
            BranchCode(5, Numeric),
            AccountNumber(18, MixedAlphanumeric),
        ],
    ),
    (
        "NL",
        bban![BankCode(4, UpperAlpha), AccountNumber(10, Numeric)],
    ),
    (
        "NO",
        bban![
            BankCode(4, Numeric),
            AccountNumber(6, Numeric),
            NationalCheckDigit(1, Numeric),
        ],
    ),
    (
        "PK",
        bban![
            BankCode(4, UpperAlpha),
            AccountNumber(16, MixedAlphanumeric),
        ],
    ),
    (
        "PL",
        bban![
            BankCode(3, Numeric),
            BranchCode(4, Numeric),
            NationalCheckDigit(1, Numeric),
            AccountNumber(16, Numeric),
        ],
    ),
    (
        "PT",
        bban![
            BankCode(4, Numeric),
            BranchCode(4, Numeric),
            AccountNumber(11, Numeric),
            NationalCheckDigit(2, Numeric),
        ],
    ),
    (
        "QA",
        bban![
            BankCode(4, UpperAlpha),
            AccountNumber(21, MixedAlphanumeric),
        ],
    ),
    (
        "RO",
        bban![
            BankCode(4, UpperAlpha),
            AccountNumber(16, MixedAlphanumeric),
        ],
    ),
    (
        "RS",
        bban![
            BankCode(3, Numeric),
            AccountNumber(13, Numeric),
            NationalCheckDigit(2, Numeric),
        ],
    ),
    (
        "SA",
        bban![BankCode(2, Numeric), AccountNumber(18, MixedAlphanumeric)],
    ),
    (
        "SE",
        bban![BankCode(3, Numeric), AccountNumber(17, Numeric)],
    ),
    (
        "SI",
        bban![
            BankCode(2, Numeric),
            BranchCode(3, Numeric),
            AccountNumber(8, Numeric),
            NationalCheckDigit(2, Numeric),
        ],
    ),
    (
        "SK",
        bban![
            BankCode(4, Numeric),
            AccountNumberPrefix(6, Numeric),
            AccountNumber(10, Numeric),
        ],
    ),
    (
        "SM",
        bban![
            NationalCheckDigit(1, UpperAlpha),
            BankCode(5, Numeric),
            BranchCode(5, Numeric),
            AccountNumber(12, MixedAlphanumeric),
        ],
    ),
    (
        "TL",
        bban![
            BankCode(3, Numeric),
            AccountNumber(14, Numeric),
            NationalCheckDigit(2, Numeric),
        ],
    ),
    (
        "TN",
        bban![
            BankCode(2, Numeric),
            BranchCode(3, Numeric),
            AccountNumber(15, MixedAlphanumeric),
        ],
    ),
    (
        "TR",
        bban![BankCode(5, Numeric), AccountNumber(17, MixedAlphanumeric)],
    ),
    (
        "UA",
        bban![BankCode(6, Numeric), AccountNumber(19, MixedAlphanumeric)],
    ),
    (
        "VG",
        bban![BankCode(4, UpperAlpha), AccountNumber(16, Numeric)],
    ),
    (
        "XK",
        bban![
            BankCode(2, Numeric),
            BranchCode(2, Numeric),
            AccountNumber(10, Numeric),
            NationalCheckDigit(2, Numeric),
        ],
    ),
];
