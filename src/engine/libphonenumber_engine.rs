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

use std::fmt::Write;

use log::{trace, warn};
use phonenumber::{
    Metadata, PhoneNumber, country,
    metadata::{DATABASE, Database},
};

use super::{
    comparisons::is_number_match,
    helper_functions::{get_number_type_helper, mode_for_format, test_number_length},
};
use crate::{
    interfaces::NumberEngine,
    phonenumbervalidator::{
        MatchType, NumberLengthType, PhoneNumberFormat, PhoneNumberType,
        errors::{FormatError, ParseError, ValidationError},
    },
};

/// Number engine backed by the `phonenumber` crate.
///
/// Holds nothing but a shared reference to read-only metadata, so one
/// instance can serve any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct LibPhoneNumberEngine<'d> {
    /// Per-region numbering plans. The compiled-in database unless a caller
    /// loaded its own.
    database: &'d Database,
}

impl LibPhoneNumberEngine<'static> {
    /// Engine over the metadata compiled into the `phonenumber` crate.
    pub fn new() -> Self {
        Self::with_database(&DATABASE)
    }
}

impl Default for LibPhoneNumberEngine<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'d> LibPhoneNumberEngine<'d> {
    /// Engine over caller supplied metadata, for example one produced by
    /// `Database::load` from a newer `PhoneNumberMetadata.xml`.
    pub fn with_database(database: &'d Database) -> Self {
        Self { database }
    }

    pub fn database(&self) -> &'d Database {
        self.database
    }

    /// Maps a normalized region code onto a country id the parser accepts.
    /// Regions the metadata does not know are treated as no default region
    /// at all, which is what libphonenumber does with them.
    fn country_id_for_region(&self, region_code: &str) -> Option<country::Id> {
        let country_id = self
            .database
            .by_id(region_code)
            .and_then(|_| region_code.parse().ok());
        if country_id.is_none() {
            warn!("Invalid or unknown region code provided: {region_code}");
        }
        country_id
    }

    /// Checks the national significant number against the possible lengths
    /// of the main region for the number's calling code.
    pub fn is_possible_number_with_reason(
        &self,
        phone_number: &PhoneNumber,
    ) -> Result<NumberLengthType, ValidationError> {
        let country_code = phone_number.country().code();
        let Some(metadata) = self
            .database
            .by_code(&country_code)
            .and_then(|metadata| metadata.into_iter().next())
        else {
            trace!("Unknown country calling code {country_code}");
            return Err(ValidationError::InvalidCountryCode);
        };
        let national_significant_number = phone_number.national().to_string();
        test_number_length(&national_significant_number, metadata)
    }

    /// Finds the region whose numbering plan claims the number.
    ///
    /// The national significant number keeps its leading zeros, so Italian
    /// fixed lines resolve to IT or VA instead of to no region at all.
    fn region_metadata_for_number(&self, phone_number: &PhoneNumber) -> Option<&'d Metadata> {
        let country_code = phone_number.country().code();
        let region_codes = self.database.region(&country_code)?;
        if region_codes.len() == 1 {
            // Also covers non-geographical entities, which all share the
            // "001" id and can only be told apart by calling code.
            return self
                .database
                .by_code(&country_code)
                .and_then(|metadata| metadata.into_iter().next());
        }

        let national_number = phone_number.national().to_string();
        for region_code in region_codes {
            let Some(metadata) = self.database.by_id(region_code) else {
                continue;
            };
            match metadata.leading_digits() {
                Some(leading_digits) => {
                    if leading_digits
                        .find(&national_number)
                        .is_some_and(|found| found.start() == 0)
                    {
                        return Some(metadata);
                    }
                }
                None => {
                    if get_number_type_helper(&national_number, metadata) != PhoneNumberType::Unknown {
                        return Some(metadata);
                    }
                }
            }
        }
        trace!("No region of calling code {country_code} claims {national_number}");
        None
    }
}

impl NumberEngine for LibPhoneNumberEngine<'_> {
    type Number = PhoneNumber;

    fn parse(&self, text: &str, default_region: Option<&str>) -> Result<PhoneNumber, ParseError> {
        let country = default_region.and_then(|region| self.country_id_for_region(region));
        phonenumber::parse_with(self.database, country, text).map_err(|err| {
            trace!("Could not parse {text:?} (default region {default_region:?}): {err:?}");
            ParseError::from(err)
        })
    }

    fn is_valid_number(&self, number: &PhoneNumber) -> bool {
        self.number_type(number) != PhoneNumberType::Unknown
    }

    fn is_possible_number(&self, number: &PhoneNumber) -> bool {
        match self.is_possible_number_with_reason(number) {
            Ok(_) => true,
            Err(reason) => {
                trace!("Number is not possible: {reason}");
                false
            }
        }
    }

    fn number_type(&self, number: &PhoneNumber) -> PhoneNumberType {
        self.region_metadata_for_number(number)
            .map_or(PhoneNumberType::Unknown, |metadata| {
                get_number_type_helper(&number.national().to_string(), metadata)
            })
    }

    fn format(&self, number: &PhoneNumber, format: PhoneNumberFormat) -> Result<String, FormatError> {
        let mut formatted_number = String::new();
        // The formatter refuses calling codes it has no metadata for.
        write!(
            formatted_number,
            "{}",
            number.format_with(self.database).mode(mode_for_format(format))
        )
        .map_err(|_| FormatError(format))?;
        Ok(formatted_number)
    }

    fn region_code_for_number(&self, number: &PhoneNumber) -> Option<String> {
        self.region_metadata_for_number(number)
            .map(|metadata| metadata.id().to_owned())
    }

    fn country_code(&self, number: &PhoneNumber) -> i32 {
        i32::from(number.country().code())
    }

    fn compare(&self, first: &PhoneNumber, second: &PhoneNumber) -> MatchType {
        is_number_match(first, second)
    }
}
