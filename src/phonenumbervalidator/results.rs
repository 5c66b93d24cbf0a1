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

//! Fixed-shape output records.
//!
//! `Default` is the documented failure state of each record. Operations start
//! from it and only overwrite a field once the engine call feeding it succeeded.

use super::{MatchType, PhoneNumberType};

/// Validation and identification details for a phone number.
///
/// Failure state: `{ false, false, UNKNOWN, 0, "" }`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PhoneNumberInfo {
    /// Strict validity against the numbering plan of the number's region.
    pub is_valid: bool,
    /// Length-only check, weaker than `is_valid`.
    pub is_possible_number: bool,
    pub phone_number_type: PhoneNumberType,
    /// Country calling code, `0` when parsing failed.
    pub country_code: i32,
    /// Region the number belongs to, may differ from the supplied region.
    pub detected_region_code: String,
}

/// A phone number rendered in the four standard formats.
///
/// Failure state: all fields empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PhoneNumberFormats {
    /// e.g. `+1 650-253-0000`
    pub international: String,
    /// e.g. `(650) 253-0000`
    pub national: String,
    /// e.g. `+16502530000`
    pub e164: String,
    /// e.g. `tel:+1-650-253-0000`
    pub rfc3966: String,
}

/// Output of [`PhoneNumberValidator::format`](super::PhoneNumberValidator::format).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FormatResult {
    pub success: bool,
    pub error_message: String,
    #[cfg_attr(feature = "serde", serde(rename = "phoneNumberFormats"))]
    pub formats: PhoneNumberFormats,
}

/// Output of [`PhoneNumberValidator::match_numbers`](super::PhoneNumberValidator::match_numbers).
///
/// Failure state: `{ false, NOT_A_NUMBER, "" }`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MatchResult {
    pub is_match: bool,
    pub match_type: MatchType,
    pub error_message: String,
}

/// Output of [`PhoneNumberValidator::get_region`](super::PhoneNumberValidator::get_region).
///
/// Failure state: `{ false, "", "", 0 }`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RegionResult {
    pub success: bool,
    pub error_message: String,
    pub detected_region_code: String,
    pub country_code: i32,
}
