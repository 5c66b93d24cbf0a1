mod helper_functions;
pub mod enums;
pub mod errors;
pub mod phonenumbervalidator;
pub mod results;

use std::sync::LazyLock;

pub use enums::{MatchType, NumberLengthType, PhoneNumberFormat, PhoneNumberType};
pub use phonenumbervalidator::PhoneNumberValidator;
pub use results::{FormatResult, MatchResult, PhoneNumberFormats, PhoneNumberInfo, RegionResult};

pub static PHONE_NUMBER_VALIDATOR: LazyLock<PhoneNumberValidator> =
    LazyLock::new(PhoneNumberValidator::default);
