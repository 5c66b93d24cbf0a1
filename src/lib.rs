mod interfaces;
mod engine;
mod phonenumbervalidator;
pub mod i18n;

/// Every validator operation shares the same boilerplate around the parse
/// step, so it lives in a macro whose name says what happens there.
mod macros;

#[cfg(test)]
mod tests;

pub use engine::{LibPhoneNumberEngine, NUMBER_ENGINE};
pub use interfaces::NumberEngine;
pub use phonenumbervalidator::{
    FormatResult, MatchResult, MatchType, NumberLengthType, PHONE_NUMBER_VALIDATOR,
    PhoneNumberFormat, PhoneNumberFormats, PhoneNumberInfo, PhoneNumberType,
    PhoneNumberValidator, RegionResult,
    errors::{FormatError, InvalidArgumentError, ParseError, ValidationError},
};
