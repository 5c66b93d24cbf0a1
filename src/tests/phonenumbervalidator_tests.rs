use super::{init_logger, region_code::RegionCode};
use crate::phonenumbervalidator::{
    MatchType, PHONE_NUMBER_VALIDATOR, PhoneNumberType, PhoneNumberValidator,
};

fn get_validator() -> &'static PhoneNumberValidator {
    init_logger();
    &PHONE_NUMBER_VALIDATOR
}

#[test]
fn validate_us_number() {
    let validator = get_validator();

    let (info, formats) = validator.validate("+1 650-253-0000", "").unwrap();
    assert!(info.is_valid);
    assert!(info.is_possible_number);
    assert_eq!(info.phone_number_type, PhoneNumberType::FixedLineOrMobile);
    assert_eq!(info.country_code, 1);
    assert_eq!(info.detected_region_code, RegionCode::us());

    assert_eq!(formats.e164, "+16502530000");
    assert_eq!(formats.international, "+1 650-253-0000");
    assert_eq!(formats.national, "(650) 253-0000");
    assert_eq!(formats.rfc3966, "tel:+1-650-253-0000");
}

#[test]
fn validate_accepts_every_written_form() {
    let validator = get_validator();

    for input in ["+1 650-253-0000", "(650) 253-0000", "+16502530000", "tel:+1-650-253-0000"] {
        let (info, formats) = validator.validate(input, RegionCode::us()).unwrap();
        assert!(info.is_valid, "{input}");
        assert_eq!(formats.e164, "+16502530000", "{input}");
    }
}

#[test]
fn validate_ignores_region_case_and_padding() {
    let validator = get_validator();

    let expected = validator.validate("650 253 0000", RegionCode::us()).unwrap();
    assert!(expected.0.is_valid);
    for region in ["us", " US ", "\tUs\n"] {
        assert_eq!(validator.validate("650 253 0000", region).unwrap(), expected, "{region:?}");
    }
}

#[test]
fn validate_classifies_number_types() {
    let validator = get_validator();

    let (info, _) = validator.validate("+34 666 777 888", None).unwrap();
    assert!(info.is_valid);
    assert_eq!(info.phone_number_type, PhoneNumberType::Mobile);
    assert_eq!(info.detected_region_code, RegionCode::es());

    let (info, _) = validator.validate("+1 800-723-3456", None).unwrap();
    assert!(info.is_valid);
    assert_eq!(info.phone_number_type, PhoneNumberType::TollFree);

    let (info, _) = validator.validate("+44 121 234 5678", None).unwrap();
    assert_eq!(info.phone_number_type, PhoneNumberType::FixedLine);
    assert_eq!(info.detected_region_code, RegionCode::gb());
}

#[test]
fn validate_italian_fixed_line() {
    let validator = get_validator();

    for (input, region) in [("02 1234 5678", RegionCode::it()), ("+39 02 1234 5678", "")] {
        let (info, formats) = validator.validate(input, region).unwrap();
        assert!(info.is_valid, "{input}");
        assert_eq!(info.phone_number_type, PhoneNumberType::FixedLine, "{input}");
        assert_eq!(info.country_code, 39, "{input}");
        assert_eq!(info.detected_region_code, RegionCode::it(), "{input}");
        assert_eq!(formats.e164, "+390212345678", "{input}");
    }
}

#[test]
fn validate_rejects_unparseable_input() {
    let validator = get_validator();

    let (info, formats) = validator.validate("", RegionCode::us()).unwrap();
    assert!(!info.is_valid);
    assert_eq!(info.phone_number_type, PhoneNumberType::Unknown);
    assert!(formats.international.is_empty());
    assert!(formats.national.is_empty());
    assert!(formats.e164.is_empty());
    assert!(formats.rfc3966.is_empty());

    let too_long = "1".repeat(500);
    let (info, formats) = validator.validate(too_long.as_str(), RegionCode::us()).unwrap();
    assert!(!info.is_valid);
    assert!(formats.e164.is_empty());
}

#[test]
fn validate_national_number_needs_a_known_region() {
    let validator = get_validator();

    for region in [None, Some(""), Some(RegionCode::xx()), Some(RegionCode::zzz())] {
        let (info, formats) = validator.validate("650 253 0000", region).unwrap();
        assert!(!info.is_valid, "{region:?}");
        assert_eq!(info.country_code, 0);
        assert!(formats.e164.is_empty());
    }
}

#[test]
fn validate_null_phone_number() {
    let validator = get_validator();

    let err = validator.validate(None, RegionCode::us()).unwrap_err();
    assert_eq!(err.parameter(), "phoneNumber");
}

#[test]
fn format_portuguese_number() {
    let validator = get_validator();

    let result = validator.format("+351912345678", "").unwrap();
    assert!(result.success);
    assert!(result.error_message.is_empty());
    assert_eq!(result.formats.e164, "+351912345678");
    assert!(result.formats.rfc3966.starts_with("tel:"));
    assert!(result.formats.international.starts_with("+351 "));
    assert!(!result.formats.national.is_empty());
}

#[test]
fn format_reports_parse_diagnostic() {
    let validator = get_validator();

    let result = validator.format("650 253 0000", RegionCode::xx()).unwrap();
    assert!(!result.success);
    assert_eq!(result.error_message, "Missing or invalid default region.");
    assert!(result.formats.e164.is_empty());

    let result = validator.format("garbage", RegionCode::us()).unwrap();
    assert!(!result.success);
    assert!(!result.error_message.is_empty());
}

#[test]
fn e164_round_trip_keeps_country_and_region() {
    let validator = get_validator();

    for (input, region) in [
        ("(650) 253-0000", RegionCode::us()),
        ("+44 20 7946 0958", ""),
        ("912345678", RegionCode::pt()),
        ("+34 666 777 888", ""),
    ] {
        let (info, formats) = validator.validate(input, region).unwrap();
        assert!(!formats.e164.is_empty(), "{input}");

        let (reparsed, reformatted) = validator.validate(formats.e164.as_str(), None).unwrap();
        assert_eq!(reparsed.country_code, info.country_code, "{input}");
        assert_eq!(reparsed.detected_region_code, info.detected_region_code, "{input}");
        assert_eq!(reformatted.e164, formats.e164, "{input}");
    }
}

#[test]
fn match_garbage_first_number() {
    let validator = get_validator();

    let result = validator.match_numbers("garbage", "+1 650-253-0000", RegionCode::us()).unwrap();
    assert!(!result.is_match);
    assert_eq!(result.match_type, MatchType::NotANumber);
    assert!(result.error_message.starts_with("phoneNumber1:"));
}

#[test]
fn match_garbage_second_number() {
    let validator = get_validator();

    let result = validator.match_numbers("+1 650-253-0000", "garbage", RegionCode::us()).unwrap();
    assert!(!result.is_match);
    assert_eq!(result.match_type, MatchType::NotANumber);
    assert!(result.error_message.starts_with("phoneNumber2:"));
}

#[test]
fn match_same_number_written_differently() {
    let validator = get_validator();

    let result = validator
        .match_numbers("+1 650-253-0000", "(650) 253-0000", RegionCode::us())
        .unwrap();
    assert!(result.is_match);
    assert_eq!(result.match_type, MatchType::ExactMatch);
    assert_eq!(result.match_type.as_ref(), "EXACT_MATCH");
    assert!(result.error_message.is_empty());
}

#[test]
fn match_short_nsn_is_not_a_match() {
    let validator = get_validator();

    let result = validator.match_numbers("650 253 0000", "253 0000", RegionCode::us()).unwrap();
    assert!(!result.is_match);
    assert_eq!(result.match_type, MatchType::ShortNsnMatch);
    assert!(result.error_message.is_empty());
}

#[test]
fn match_different_numbers() {
    let validator = get_validator();

    let result = validator.match_numbers("+1 650-253-0000", "+44 20 7946 0958", None).unwrap();
    assert!(!result.is_match);
    assert_eq!(result.match_type, MatchType::NoMatch);
}

#[test]
fn match_null_arguments() {
    let validator = get_validator();

    let err = validator.match_numbers(None, "+1 650-253-0000", None).unwrap_err();
    assert_eq!(err.parameter(), "phoneNumber1");
    let err = validator.match_numbers("+1 650-253-0000", None, None).unwrap_err();
    assert_eq!(err.parameter(), "phoneNumber2");
}

#[test]
fn get_region_of_british_number() {
    let validator = get_validator();

    let result = validator.get_region("+44 20 7946 0958", "").unwrap();
    assert!(result.success);
    assert!(result.error_message.is_empty());
    assert_eq!(result.detected_region_code, RegionCode::gb());
    assert_eq!(result.country_code, 44);
}

#[test]
fn get_region_ignores_bogus_region_for_international_number() {
    let validator = get_validator();

    for region in [RegionCode::xx(), RegionCode::zzz(), "xx ", ""] {
        let result = validator.get_region("+351912345678", region).unwrap();
        assert!(result.success, "{region:?}");
        assert_eq!(result.detected_region_code, RegionCode::pt());
        assert_eq!(result.country_code, 351);
    }
}

#[test]
fn get_region_of_vatican_number() {
    let validator = get_validator();

    let result = validator.get_region("+39 06 6988 3145", "").unwrap();
    assert!(result.success);
    assert_eq!(result.detected_region_code, RegionCode::va());
    assert_eq!(result.country_code, 39);

    let (info, _) = validator.validate("+39 06 6988 3145", None).unwrap();
    assert!(info.is_valid);
    assert_eq!(info.phone_number_type, PhoneNumberType::FixedLine);
    assert_eq!(info.detected_region_code, RegionCode::va());
}

#[test]
fn get_region_of_non_geographical_number() {
    let validator = get_validator();

    let result = validator.get_region("+800 1234 0000", None).unwrap();
    assert!(result.success);
    assert_eq!(result.detected_region_code, RegionCode::un001());
    assert_eq!(result.country_code, 800);
}

#[test]
fn get_region_failure_keeps_defaults() {
    let validator = get_validator();

    let result = validator.get_region("650 253 0000", RegionCode::xx()).unwrap();
    assert!(!result.success);
    assert_eq!(result.error_message, "Missing or invalid default region.");
    assert!(result.detected_region_code.is_empty());
    assert_eq!(result.country_code, 0);
}
