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

use crate::interfaces::NumberEngine;

use super::{
    PhoneNumberFormat, PhoneNumberFormats,
    errors::{FormatError, InvalidArgumentError},
};

/// Returns the argument or the invalid-argument fault naming it.
pub(super) fn required<'a>(
    value: Option<&'a str>,
    parameter: &'static str,
) -> Result<&'a str, InvalidArgumentError> {
    value.ok_or_else(|| InvalidArgumentError::new(parameter))
}

/// Renders the number in every supported style. Either all four strings are
/// produced or none is.
pub(super) fn format_all<E: NumberEngine>(
    engine: &E,
    number: &E::Number,
) -> Result<PhoneNumberFormats, FormatError> {
    Ok(PhoneNumberFormats {
        international: engine.format(number, PhoneNumberFormat::International)?,
        national: engine.format(number, PhoneNumberFormat::National)?,
        e164: engine.format(number, PhoneNumberFormat::E164)?,
        rfc3966: engine.format(number, PhoneNumberFormat::RFC3966)?,
    })
}

/// Error message for a failure attributed to one of several inputs.
pub(super) fn prefixed_error_message(parameter: &str, diagnostic: &str) -> String {
    fast_cat::concat_str!(parameter, ": ", diagnostic)
}
