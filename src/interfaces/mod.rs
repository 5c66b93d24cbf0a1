use crate::phonenumbervalidator::{
    MatchType, PhoneNumberFormat, PhoneNumberType,
    errors::{FormatError, ParseError},
};

/// Phone number engine API consumed by the validator, used to isolate the
/// underlying libphonenumber implementation and allow different
/// implementations to be swapped in easily.
///
/// An engine is shared by every caller of a validator, so it must answer
/// queries concurrently without external locking.
pub trait NumberEngine: Send + Sync {
    /// Opaque parsed number. Owned by a single operation, never cached.
    type Number;

    /// Parses `text`, using `default_region` for numbers written in national
    /// format. The error's `Display` text is the diagnostic reported to callers.
    fn parse(&self, text: &str, default_region: Option<&str>) -> Result<Self::Number, ParseError>;

    /// Full validation against the numbering plan of the number's region.
    fn is_valid_number(&self, number: &Self::Number) -> bool;

    /// Length-only check, weaker than [`NumberEngine::is_valid_number`].
    fn is_possible_number(&self, number: &Self::Number) -> bool;

    fn number_type(&self, number: &Self::Number) -> PhoneNumberType;

    fn format(&self, number: &Self::Number, format: PhoneNumberFormat) -> Result<String, FormatError>;

    /// Best guess region for the number, `None` when no unique region claims it.
    fn region_code_for_number(&self, number: &Self::Number) -> Option<String>;

    fn country_code(&self, number: &Self::Number) -> i32;

    /// Compares two parsed numbers. Never returns [`MatchType::NotANumber`].
    fn compare(&self, first: &Self::Number, second: &Self::Number) -> MatchType;
}
