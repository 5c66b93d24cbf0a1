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

use strum::{AsRefStr, Display, EnumIter, IntoStaticStr};

/// Defines the various standardized formats for representing phone numbers.
///
/// `INTERNATIONAL` and `NATIONAL` formats align with the ITU-T E.123 recommendation,
/// but use local conventions like hyphens (-) instead of spaces for separators.
///
/// For example, the Google Switzerland office number would be:
/// - **INTERNATIONAL**: `+41 44 668 1800`
/// - **NATIONAL**: `044 668 1800`
/// - **E164**: `+41446681800` (international format without formatting)
/// - **RFC3966**: `tel:+41-44-668-1800` (hyphen-separated with a "tel:" prefix)
#[derive(Debug, Display, AsRefStr, IntoStaticStr, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// **E.164 format.**
    /// Example: `+41446681800`.
    #[strum(serialize = "E164")]
    E164,
    /// **International format.**
    /// Example: `+41 44 668 1800`.
    #[strum(serialize = "INTERNATIONAL")]
    International,
    /// **National format.**
    /// May include a national prefix (like '0') and uses local formatting conventions.
    /// Example: `044 668 1800`.
    #[strum(serialize = "NATIONAL")]
    National,
    /// **RFC3966 format.**
    /// Starts with "tel:" and uses hyphens as separators.
    /// Example: `tel:+41-44-668-1800`.
    #[strum(serialize = "RFC3966")]
    RFC3966,
}

/// Categorizes phone numbers based on their primary use.
///
/// Converts to the upper snake case literal used by the output records
/// (`"FIXED_LINE_OR_MOBILE"`, `"VOIP"`, ...) through `Display` or `AsRef<str>`.
#[derive(
    Debug, Default, Display, AsRefStr, IntoStaticStr, EnumIter, Clone, Copy, PartialEq, Eq, Hash,
)]
pub enum PhoneNumberType {
    /// **Fixed-line numbers.**
    #[strum(serialize = "FIXED_LINE")]
    FixedLine,
    /// **Mobile numbers.**
    #[strum(serialize = "MOBILE")]
    Mobile,
    /// **Fixed-line or mobile.**
    /// Used in regions (e.g., the USA) where it's impossible to distinguish between
    /// fixed-line and mobile numbers by looking at the phone number itself.
    #[strum(serialize = "FIXED_LINE_OR_MOBILE")]
    FixedLineOrMobile,
    /// **Toll-free numbers.**
    #[strum(serialize = "TOLL_FREE")]
    TollFree,
    /// **Premium-rate numbers.**
    #[strum(serialize = "PREMIUM_RATE")]
    PremiumRate,
    /// **Shared-cost numbers.**
    /// The cost of the call is split between the caller and the recipient.
    #[strum(serialize = "SHARED_COST")]
    SharedCost,
    /// **Voice over IP (VoIP) numbers.**
    #[strum(serialize = "VOIP")]
    VoIP,
    /// **Personal numbers.**
    /// A number associated with a person, not a location or device.
    #[strum(serialize = "PERSONAL_NUMBER")]
    PersonalNumber,
    /// **Pagers.**
    #[strum(serialize = "PAGER")]
    Pager,
    /// **Universal Access Numbers (UAN).**
    #[strum(serialize = "UAN")]
    UAN,
    /// **Voicemail access numbers.**
    #[strum(serialize = "VOICEMAIL")]
    VoiceMail,
    /// **Unknown type.**
    /// The number does not match any of the known patterns for its region, or
    /// it could not be parsed at all.
    #[default]
    #[strum(serialize = "UNKNOWN")]
    Unknown,
}

/// Describes the degree of similarity between two phone numbers.
#[derive(
    Debug, Default, Display, AsRefStr, IntoStaticStr, EnumIter, Clone, Copy, PartialEq, Eq, Hash,
)]
pub enum MatchType {
    /// **Not a number.**
    /// At least one of the inputs could not be parsed. Engines never return
    /// this from a comparison; the validator sets it when parsing fails.
    #[default]
    #[strum(serialize = "NOT_A_NUMBER")]
    NotANumber,
    /// **No match.**
    /// The two numbers are entirely different.
    #[strum(serialize = "NO_MATCH")]
    NoMatch,
    /// **Short National Significant Number match.**
    /// One number is a shorter version of the other's National Significant Number (NSN).
    /// For example, `6502530000` is a short match for `16502530000`.
    #[strum(serialize = "SHORT_NSN_MATCH")]
    ShortNsnMatch,
    /// **National Significant Number (NSN) match.**
    /// The numbers share the same NSN but one of them carries no country code.
    #[strum(serialize = "NSN_MATCH")]
    NsnMatch,
    /// **Exact match.**
    /// The two numbers are identical in every aspect, including country code, NSN, and
    /// any specified extensions.
    #[strum(serialize = "EXACT_MATCH")]
    ExactMatch,
}

impl MatchType {
    /// Whether this outcome counts as a match for the boolean `is_match` field.
    ///
    /// Only `EXACT_MATCH` and `NSN_MATCH` qualify; `SHORT_NSN_MATCH` does not.
    pub fn is_match(self) -> bool {
        matches!(self, MatchType::ExactMatch | MatchType::NsnMatch)
    }
}

/// Represents the possible outcomes when checking if a phone number's length is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberLengthType {
    /// **The length is valid for a dialable number.**
    IsPossible,
    /// **The length is valid for a local-only number.**
    /// The number's length is too short for a full national number but matches a pattern
    /// for a number that can be dialed within a specific local area (e.g., without the area code).
    IsPossibleLocalOnly,
}

#[cfg(feature = "serde")]
crate::macros::serialize_as_str!(PhoneNumberFormat, PhoneNumberType, MatchType);
