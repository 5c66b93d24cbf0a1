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

use thiserror::Error;

use super::PhoneNumberFormat;

/// A required argument was not supplied.
///
/// This is the only error a validator operation returns: every other bad input
/// is reported through the operation's own result record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Value cannot be null (parameter '{parameter}')")]
pub struct InvalidArgumentError {
    parameter: &'static str,
}

impl InvalidArgumentError {
    pub(crate) fn new(parameter: &'static str) -> Self {
        Self { parameter }
    }

    /// Name of the missing parameter, as seen by the hosting layer.
    pub fn parameter(&self) -> &'static str {
        self.parameter
    }
}

/// Reasons a text could not be interpreted as a phone number.
///
/// The `Display` text is the diagnostic handed back to callers verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Missing or invalid default region.")]
    InvalidCountryCode, // INVALID_COUNTRY_CODE in the java version.
    #[error("The string supplied did not seem to be a phone number.")]
    NotANumber,
    #[error("Phone number too short after IDD.")]
    TooShortAfterIdd,
    #[error("The string supplied is too short to be a phone number.")]
    TooShortNsn,
    #[error("The string supplied is too long to be a phone number.")]
    TooLongNsn, // TOO_LONG in the java version.
}

/// The engine parsed a number but could not render it in the requested format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Could not format number as {0}")]
pub struct FormatError(pub PhoneNumberFormat);

/// Possible outcomes when testing if a phone number is possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    /// The number has an invalid country calling code.
    #[error("The number has an invalid country calling code")]
    InvalidCountryCode,
    /// The number is shorter than all valid numbers for this region.
    #[error("The number is shorter than all valid numbers for this region")]
    TooShort,
    /// The number is longer than the shortest valid numbers for this region,
    /// shorter than the longest valid numbers for this region, and does not
    /// itself have a number length that matches valid numbers for this region.
    #[error("\
    The number is longer than the shortest valid numbers for this region,\
    shorter than the longest valid numbers for this region, and does not\
    itself have a number length that matches valid numbers for this region\
    ")]
    InvalidLength,
    /// The number is longer than all valid numbers for this region.
    #[error("The number is longer than all valid numbers for this region")]
    TooLong,
}

impl From<phonenumber::ParseError> for ParseError {
    fn from(value: phonenumber::ParseError) -> Self {
        match value {
            phonenumber::ParseError::NoNumber => ParseError::NotANumber,
            phonenumber::ParseError::InvalidCountryCode => ParseError::InvalidCountryCode,
            phonenumber::ParseError::TooShortAfterIdd => ParseError::TooShortAfterIdd,
            phonenumber::ParseError::TooShortNsn => ParseError::TooShortNsn,
            phonenumber::ParseError::TooLong => ParseError::TooLongNsn,
            // Digits that survived the grammar but overflow an integer.
            phonenumber::ParseError::MalformedInteger(_) => ParseError::NotANumber,
        }
    }
}
