//! # Known IBAN Corpus
//!
//! Published sample IBANs, one per supported country. Every registry entry
//! must have a sample here, and every sample must validate and decompose
//! into fields that reassemble to its BBAN.

use iban_core::bban;
use iban_core::{FieldKind, Iban, IbanError, IbanFormatViolation};

const SAMPLES: &[&str] = &[
    "AD1200012030200359100100",
    "AE070331234567890123456",
    "AL47212110090000000235698741",
    "AT611904300234573201",
    "AZ21NABZ00000000137010001944",
    "BA391290079401028494",
    "BE68539007547034",
    "BG80BNBG96611020345678",
    "BH67BMAG00001299123456",
    "BR9700360305000010009795493P1",
    "CH9300762011623852957",
    "CR05015202001026284066",
    "CY17002001280000001200527600",
    "CZ6508000000192000145399",
    "DE89370400440532013000",
    "DK5000400440116243",
    "DO28BAGR00000001212453611324",
    "EE382200221020145685",
    "ES9121000418450200051332",
    "FI2112345600000785",
    "FO6264600001631634",
    "FR1420041010050500013M02606",
    "GB29NWBK60161331926819",
    "GE29NB0000000101904917",
    "GI75NWBK000000007099453",
    "GL8964710001000206",
    "GR1601101250000000012300695",
    "GT82TRAJ01020000001210029690",
    "HR1210010051863000160",
    "IE29AIBK93115212345678",
    "IL620108000000099999999",
    "IS140159260076545510730339",
    "IT60X0542811101000000123456",
    "JO94CBJO0010000000000131000302",
    "KW81CBKU0000000000001234560101",
    "KZ86125KZT5004100100",
    "LB62099900000001001901229114",
    "LI21088100002324013AA",
    "LT121000011101001000",
    "LU280019400644750000",
    "LV80BANK0000435195001",
    "MC5811222000010123456789030",
    "MD24AG000225100013104168",
    "ME25505000012345678951",
    "MK07250120000058984",
    "MR1300020001010000123456753",
    "MT84MALT011000012345MTLCAST001S",
    "NL91ABNA0417164300",
    "NO9386011117947",
    "PK36SCBL0000001123456702",
    "PL61109010140000071219812874",
    "PT50000201231234567890154",
    "QA58DOHB00001234567890ABCDEFG",
    "RO49AAAA1B31007593840000",
    "RS35260005601001611379",
    "SA0380000000608010167519",
    "SE4550000000058398257466",
    "SI56263300012039086",
    "SK3112000000198742637541",
    "SM86U0322509800000000270100",
    "TL380080012345678910157",
    "TN5910006035183598478831",
    "TR330006100519786457841326",
    "UA213223130000026007233566001",
    "VG96VPVG0000012345678901",
    "XK051212012345678906",
];

#[test]
fn every_sample_validates() {
    for sample in SAMPLES {
        let iban = Iban::new(*sample).unwrap_or_else(|e| panic!("{sample}: {e}"));
        assert_eq!(iban.as_str(), *sample);
        assert_eq!(iban.structure().iban_length(), sample.len(), "{sample}");
    }
}

#[test]
fn every_supported_country_has_a_sample() {
    for code in bban::supported_countries() {
        assert!(
            SAMPLES.iter().any(|s| s.starts_with(code)),
            "no sample IBAN for {code}"
        );
    }
    assert_eq!(SAMPLES.len(), bban::supported_countries().count());
}

#[test]
fn fields_reassemble_to_bban() {
    for sample in SAMPLES {
        let iban = Iban::new(*sample).unwrap();
        let reassembled: String = iban
            .structure()
            .rules()
            .iter()
            .map(|rule| iban.field(rule.kind()).unwrap())
            .collect();
        assert_eq!(reassembled, iban.bban(), "{sample}");
    }
}

#[test]
fn single_field_accessors_match_full_decomposition() {
    for sample in SAMPLES {
        let iban = Iban::new(*sample).unwrap();
        let fields = iban.fields();
        for kind in FieldKind::all() {
            assert_eq!(
                iban.field(*kind),
                fields.get(kind).copied(),
                "{sample} {kind}"
            );
        }
    }
}

#[test]
fn builder_reproduces_every_sample() {
    for sample in SAMPLES {
        let iban = Iban::new(*sample).unwrap();
        let builder = iban
            .fields()
            .into_iter()
            .fold(Iban::builder().country_code(iban.country_code()), |b, (kind, value)| {
                b.field(kind, value)
            });
        assert_eq!(builder.build().unwrap(), iban, "{sample}");
    }
}

#[test]
fn every_sample_rejects_a_bumped_check_digit() {
    for sample in SAMPLES {
        let digits: u8 = sample[2..4].parse().unwrap();
        let bumped = if digits == 98 { 2 } else { digits + 1 };
        let mutant = format!("{}{bumped:02}{}", &sample[..2], &sample[4..]);
        assert_eq!(
            Iban::new(mutant).unwrap_err(),
            IbanError::InvalidCheckDigit {
                expected: sample[2..4].to_string(),
                actual: format!("{bumped:02}"),
            },
            "{sample}"
        );
    }
}

#[test]
fn lowercase_samples_are_rejected() {
    for sample in SAMPLES {
        let lower = sample.to_lowercase();
        assert!(matches!(
            Iban::new(lower).unwrap_err(),
            IbanError::Format(IbanFormatViolation::CountryCode { .. })
        ));
    }
}

#[test]
fn turkey_field_support() {
    assert!(bban::is_field_supported("TR", FieldKind::BankCode));
    assert!(!bban::is_field_supported("TR", FieldKind::AccountType));
}
