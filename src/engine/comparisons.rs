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

use log::trace;
use phonenumber::{NationalNumber, PhoneNumber};

use crate::phonenumbervalidator::MatchType;

/// Only the fields needed to uniquely identify a phone number, rather than
/// any fields that capture the context in which the phone number was created
/// (country code source, preferred carrier).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CoreFields<'a> {
    country_code: u16,
    /// Carries the number of leading zeros as well.
    national_number: NationalNumber,
    extension: Option<&'a str>,
}

impl<'a> CoreFields<'a> {
    fn of(phone_number: &'a PhoneNumber) -> Self {
        Self {
            country_code: phone_number.country().code(),
            national_number: *phone_number.national(),
            extension: phone_number.extension().map(|extension| extension.as_ref()),
        }
    }
}

/// Returns true when one national number is a suffix of the other or both
/// are the same. Leading zeros are not part of the comparison.
fn is_national_number_suffix_of_the_other(first: &CoreFields, second: &CoreFields) -> bool {
    let first_national_number = first.national_number.value().to_string();
    let second_national_number = second.national_number.value().to_string();
    // Note that ends_with returns true if the numbers are equal.
    first_national_number.ends_with(&second_national_number)
        || second_national_number.ends_with(&first_national_number)
}

/// Takes two phone numbers and compares them for equality.
///
/// Returns `ExactMatch` if the country calling code, NSN, presence of a
/// leading zero for Italian numbers and any extension present are the same.
/// Returns `NsnMatch` if either or both has no country calling code
/// specified, and the NSNs and extensions are the same.
/// Returns `ShortNsnMatch` if either or both has no country calling code
/// specified, or the country calling code specified is the same, and one NSN
/// could be a shorter version of the other number. This includes the case
/// where one has an extension specified, and the other does not.
/// Returns `NoMatch` otherwise.
pub(super) fn is_number_match(first_number: &PhoneNumber, second_number: &PhoneNumber) -> MatchType {
    let mut first = CoreFields::of(first_number);
    let second = CoreFields::of(second_number);

    // Early exit if both had extensions and these are different.
    if let (Some(first_extension), Some(second_extension)) = (first.extension, second.extension) {
        if first_extension != second_extension {
            trace!("Extensions differ ({first_extension} vs {second_extension}), no match");
            return MatchType::NoMatch;
        }
    }

    let first_country_code = first.country_code;
    let second_country_code = second.country_code;
    // Both had country_code specified.
    if first_country_code != 0 && second_country_code != 0 {
        if first == second {
            return MatchType::ExactMatch;
        } else if first_country_code == second_country_code
            && is_national_number_suffix_of_the_other(&first, &second)
        {
            // A SHORT_NSN_MATCH occurs if there is a difference because of the
            // presence or absence of an 'Italian leading zero', the presence or
            // absence of an extension, or one NSN being a shorter variant of the
            // other.
            return MatchType::ShortNsnMatch;
        }
        // This is not a match.
        return MatchType::NoMatch;
    }

    // Checks cases where one or both country_code fields were not specified.
    // To make equality checks easier, we first set the country_code fields to
    // be equal.
    first.country_code = second_country_code;
    // If all else was the same, then this is an NSN_MATCH.
    if first == second {
        return MatchType::NsnMatch;
    }
    if is_national_number_suffix_of_the_other(&first, &second) {
        return MatchType::ShortNsnMatch;
    }
    MatchType::NoMatch
}
