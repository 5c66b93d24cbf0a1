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

use std::collections::BTreeSet;

use log::trace;
use phonenumber::{Metadata, Mode, Type, metadata::Descriptor};

use crate::phonenumbervalidator::{
    NumberLengthType, PhoneNumberFormat, PhoneNumberType, errors::ValidationError,
};

/// Maps a format style onto the engine's formatter mode.
pub(super) fn mode_for_format(format: PhoneNumberFormat) -> Mode {
    match format {
        PhoneNumberFormat::E164 => Mode::E164,
        PhoneNumberFormat::International => Mode::International,
        PhoneNumberFormat::National => Mode::National,
        PhoneNumberFormat::RFC3966 => Mode::Rfc3966,
    }
}

/// Checks a national significant number against a descriptor of the
/// region's metadata. A missing descriptor matches nothing.
fn is_number_matching_desc(national_number: &str, number_desc: Option<&Descriptor>) -> bool {
    number_desc.is_some_and(|desc| desc.is_match(national_number))
}

/// Classifies a national significant number, leading zeros included, against
/// the numbering plan of one region.
pub(super) fn get_number_type_helper(national_number: &str, metadata: &Metadata) -> PhoneNumberType {
    let descriptors = metadata.descriptors();
    if !descriptors.general().is_match(national_number) {
        trace!("Number '{national_number}' type unknown - doesn't match general national number pattern");
        return PhoneNumberType::Unknown;
    }

    const SPECIAL_RATE_TYPES: [(Type, PhoneNumberType); 8] = [
        (Type::PremiumRate, PhoneNumberType::PremiumRate),
        (Type::TollFree, PhoneNumberType::TollFree),
        (Type::SharedCost, PhoneNumberType::SharedCost),
        (Type::Voip, PhoneNumberType::VoIP),
        (Type::PersonalNumber, PhoneNumberType::PersonalNumber),
        (Type::Pager, PhoneNumberType::Pager),
        (Type::Uan, PhoneNumberType::UAN),
        (Type::Voicemail, PhoneNumberType::VoiceMail),
    ];
    for (kind, number_type) in SPECIAL_RATE_TYPES {
        if is_number_matching_desc(national_number, descriptors.get(kind)) {
            trace!("Number '{national_number}' is a {number_type} number");
            return number_type;
        }
    }

    let fixed_line = descriptors.fixed_line();
    let mobile = descriptors.mobile();
    let same_mobile_and_fixed_line_pattern = fixed_line.map(|desc| desc.national_number().as_str())
        == mobile.map(|desc| desc.national_number().as_str());

    if is_number_matching_desc(national_number, fixed_line) {
        if same_mobile_and_fixed_line_pattern || is_number_matching_desc(national_number, mobile) {
            trace!("Number '{national_number}' is fixed-line or mobile");
            return PhoneNumberType::FixedLineOrMobile;
        }
        trace!("Number '{national_number}' is a fixed line number");
        return PhoneNumberType::FixedLine;
    }
    // Otherwise, test to see if the number is mobile. Only do this if certain
    // that the patterns for mobile and fixed line aren't the same.
    if !same_mobile_and_fixed_line_pattern && is_number_matching_desc(national_number, mobile) {
        trace!("Number '{national_number}' is a mobile number");
        return PhoneNumberType::Mobile;
    }
    trace!("Number '{national_number}' type unknown - doesn't match any specific number type pattern");
    PhoneNumberType::Unknown
}

/// Number types whose descriptors make up the general description of a
/// region. Short-number categories are not part of it.
const GENERAL_DESC_TYPES: [Type; 10] = [
    Type::FixedLine,
    Type::Mobile,
    Type::TollFree,
    Type::PremiumRate,
    Type::SharedCost,
    Type::PersonalNumber,
    Type::Voip,
    Type::Pager,
    Type::Uan,
    Type::Voicemail,
];

/// Returns the sorted possible lengths and local-only lengths of the general
/// description of a region.
///
/// Source metadata only records lengths on the per-type descriptors, so when
/// the general descriptor has none they are the union over all types. A
/// length that is national for any type is never local-only.
pub(super) fn general_possible_lengths(phone_metadata: &Metadata) -> (Vec<u16>, Vec<u16>) {
    let descriptors = phone_metadata.descriptors();
    let general_desc = descriptors.general();
    if !general_desc.possible_length().is_empty() {
        return (
            general_desc.possible_length().to_vec(),
            general_desc.possible_local_length().to_vec(),
        );
    }

    let mut lengths = BTreeSet::new();
    let mut local_lengths = BTreeSet::new();
    for desc in GENERAL_DESC_TYPES.iter().filter_map(|kind| descriptors.get(*kind)) {
        lengths.extend(desc.possible_length().iter().copied());
        local_lengths.extend(desc.possible_local_length().iter().copied());
    }
    local_lengths.retain(|length| !lengths.contains(length));

    (lengths.into_iter().collect(), local_lengths.into_iter().collect())
}

/// Helper method to check a national significant number against the possible
/// lengths of the general description for a region, and determine whether it
/// matches, or is too short or too long.
pub(super) fn test_number_length(
    national_significant_number: &str,
    phone_metadata: &Metadata,
) -> Result<NumberLengthType, ValidationError> {
    let (possible_lengths, local_lengths) = general_possible_lengths(phone_metadata);

    // No lengths at all means no numbers exist for this entity.
    let (Some(&minimum_length), Some(&maximum_length)) =
        (possible_lengths.first(), possible_lengths.last())
    else {
        return Err(ValidationError::InvalidLength);
    };

    let actual_length = national_significant_number.len() as u16;
    // There is never an overlap between the possible lengths and the
    // local-only lengths.
    if local_lengths.contains(&actual_length) {
        return Ok(NumberLengthType::IsPossibleLocalOnly);
    }

    if minimum_length == actual_length {
        Ok(NumberLengthType::IsPossible)
    } else if minimum_length > actual_length {
        Err(ValidationError::TooShort)
    } else if maximum_length < actual_length {
        Err(ValidationError::TooLong)
    } else if possible_lengths[1..].contains(&actual_length) {
        Ok(NumberLengthType::IsPossible)
    } else {
        Err(ValidationError::InvalidLength)
    }
}
