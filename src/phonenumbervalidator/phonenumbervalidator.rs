// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::{trace, warn};

use super::{
    FormatResult, MatchResult, PhoneNumberFormats, PhoneNumberInfo, RegionResult,
    errors::InvalidArgumentError,
    helper_functions::{format_all, prefixed_error_message, required},
};
use crate::{
    engine::{LibPhoneNumberEngine, NUMBER_ENGINE},
    i18n::RegionCode,
    interfaces::NumberEngine,
    macros::parsed_or_return,
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, InvalidArgumentError>;

/// Validates, formats, compares and locates phone numbers.
///
/// Every operation returns a fully populated record. Bad numbers and bad
/// regions are reported inside the record; the only `Err` is a missing
/// phone number argument, which is rejected before anything else happens.
///
/// Region arguments are normalized first: surrounding whitespace and case do
/// not matter, and an empty region means no default region.
#[derive(Debug, Clone)]
pub struct PhoneNumberValidator<E: NumberEngine = LibPhoneNumberEngine<'static>> {
    engine: E,
}

impl Default for PhoneNumberValidator {
    fn default() -> Self {
        Self::new(*NUMBER_ENGINE)
    }
}

impl<E: NumberEngine> PhoneNumberValidator<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Checks a phone number and renders it in all four formats.
    ///
    /// A number that cannot be parsed yields the default records. A number
    /// that parses but cannot be formatted keeps its validity fields and
    /// empty format strings.
    pub fn validate<'p, 'r>(
        &self,
        phone_number: impl Into<Option<&'p str>>,
        region_code: impl Into<Option<&'r str>>,
    ) -> Result<(PhoneNumberInfo, PhoneNumberFormats)> {
        let phone_number = required(phone_number.into(), "phoneNumber")?;
        let region_code = RegionCode::normalize(region_code.into());

        let mut info = PhoneNumberInfo::default();
        let mut formats = PhoneNumberFormats::default();

        let number = parsed_or_return!(
            self.engine.parse(phone_number, region_code.as_deref()),
            err => trace!("Validate: {err}"),
            (info, formats)
        );

        info.is_valid = self.engine.is_valid_number(&number);
        info.is_possible_number = self.engine.is_possible_number(&number);
        info.phone_number_type = self.engine.number_type(&number);
        info.country_code = self.engine.country_code(&number);
        info.detected_region_code = self
            .engine
            .region_code_for_number(&number)
            .unwrap_or_default();

        match format_all(&self.engine, &number) {
            Ok(all_formats) => formats = all_formats,
            Err(err) => warn!("Validate: parsed number left unformatted: {err}"),
        }
        Ok((info, formats))
    }

    /// Renders a phone number as international, national, E.164 and RFC3966
    /// strings. Failures are reported through `success` and `error_message`.
    pub fn format<'p, 'r>(
        &self,
        phone_number: impl Into<Option<&'p str>>,
        region_code: impl Into<Option<&'r str>>,
    ) -> Result<FormatResult> {
        let phone_number = required(phone_number.into(), "phoneNumber")?;
        let region_code = RegionCode::normalize(region_code.into());

        let mut result = FormatResult::default();

        let number = parsed_or_return!(
            self.engine.parse(phone_number, region_code.as_deref()),
            err => result.error_message = err.to_string(),
            result
        );

        match format_all(&self.engine, &number) {
            Ok(formats) => {
                result.success = true;
                result.formats = formats;
            }
            Err(err) => {
                warn!("Format: parsed number left unformatted: {err}");
                result.error_message = err.to_string();
            }
        }
        Ok(result)
    }

    /// Compares two phone numbers, both read with the same default region.
    ///
    /// `is_match` holds only for an exact or NSN match. When a number cannot
    /// be parsed the error message says which one; the second number is not
    /// looked at if the first one already failed.
    pub fn match_numbers<'p1, 'p2, 'r>(
        &self,
        phone_number1: impl Into<Option<&'p1 str>>,
        phone_number2: impl Into<Option<&'p2 str>>,
        region_code: impl Into<Option<&'r str>>,
    ) -> Result<MatchResult> {
        let phone_number1 = required(phone_number1.into(), "phoneNumber1")?;
        let phone_number2 = required(phone_number2.into(), "phoneNumber2")?;
        let region_code = RegionCode::normalize(region_code.into());

        let mut result = MatchResult::default();

        let first = parsed_or_return!(
            self.engine.parse(phone_number1, region_code.as_deref()),
            err => result.error_message = prefixed_error_message("phoneNumber1", &err.to_string()),
            result
        );
        let second = parsed_or_return!(
            self.engine.parse(phone_number2, region_code.as_deref()),
            err => result.error_message = prefixed_error_message("phoneNumber2", &err.to_string()),
            result
        );

        result.match_type = self.engine.compare(&first, &second);
        result.is_match = result.match_type.is_match();
        trace!("Match: {}", result.match_type);
        Ok(result)
    }

    /// Finds the calling code and region of a phone number. The region is
    /// empty when no single region claims the number.
    pub fn get_region<'p, 'r>(
        &self,
        phone_number: impl Into<Option<&'p str>>,
        region_code: impl Into<Option<&'r str>>,
    ) -> Result<RegionResult> {
        let phone_number = required(phone_number.into(), "phoneNumber")?;
        let region_code = RegionCode::normalize(region_code.into());

        let mut result = RegionResult::default();

        let number = parsed_or_return!(
            self.engine.parse(phone_number, region_code.as_deref()),
            err => result.error_message = err.to_string(),
            result
        );

        result.success = true;
        result.country_code = self.engine.country_code(&number);
        result.detected_region_code = self
            .engine
            .region_code_for_number(&number)
            .unwrap_or_default();
        Ok(result)
    }
}
