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

use std::borrow::Cow;

use log::trace;

use crate::string_util::to_ascii_digits;

use super::{
    field::Result, field_regexps::FIELD_REGEXPS, helper_constants::{
        PHONE_INVALID_MESSAGE, POST_CODE_INVALID_MESSAGE,
    }, ErrorCode, Field, FieldOptions, RegexField,
};

/// Bangladesh post code field: exactly four decimal digits.
///
/// ```
/// use bdlocalflavor::{BdPostCodeField, Field};
///
/// let field = BdPostCodeField::new();
/// assert_eq!(field.clean(Some("1207")).unwrap(), "1207");
/// assert!(field.clean(Some("12070")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct BdPostCodeField {
    inner: RegexField,
}

impl BdPostCodeField {
    pub fn new() -> Self {
        Self::with_options(FieldOptions::default())
    }

    pub fn with_options(options: FieldOptions) -> Self {
        let options = options.or_error_message(ErrorCode::Invalid, POST_CODE_INVALID_MESSAGE);
        Self {
            inner: RegexField::from_shared(FIELD_REGEXPS.post_code.clone()).with_options(options),
        }
    }
}

impl Default for BdPostCodeField {
    fn default() -> Self {
        Self::new()
    }
}

impl Field for BdPostCodeField {
    fn options(&self) -> &FieldOptions {
        self.inner.options()
    }

    fn clean(&self, value: Option<&str>) -> Result<String> {
        self.inner.clean(value)
    }
}

/// Bangladesh phone number field.
///
/// Parentheses, ASCII white space and hyphens are dropped; what remains must
/// be 8 to 13 ASCII digits and is returned as the cleaned value.
///
/// ```
/// use bdlocalflavor::{BdPhoneNumberField, Field};
///
/// let field = BdPhoneNumberField::new();
/// assert_eq!(field.clean(Some("(017) 123-45678")).unwrap(), "01712345678");
/// assert_eq!(field.clean(None).unwrap(), "");
/// ```
#[derive(Debug, Clone)]
pub struct BdPhoneNumberField {
    options: FieldOptions,
    ascii_digits: bool,
}

impl BdPhoneNumberField {
    pub fn new() -> Self {
        Self::with_options(FieldOptions::default())
    }

    pub fn with_options(options: FieldOptions) -> Self {
        Self {
            options: options.or_error_message(ErrorCode::Invalid, PHONE_INVALID_MESSAGE),
            ascii_digits: false,
        }
    }

    /// When set, digits from other scripts (e.g. Bengali `০১৭...`) are
    /// converted to ASCII before the value is matched, so they are accepted.
    /// Off by default: only ASCII digits are valid.
    pub fn ascii_digits(mut self, ascii_digits: bool) -> Self {
        self.ascii_digits = ascii_digits;
        self
    }

    /// Drops parentheses, ASCII white space and hyphens. Borrows when there is
    /// nothing to drop.
    pub fn normalize(value: &str) -> Cow<'_, str> {
        FIELD_REGEXPS.phone_separators.replace_all(value, "")
    }
}

impl Default for BdPhoneNumberField {
    fn default() -> Self {
        Self::new()
    }
}

impl Field for BdPhoneNumberField {
    fn options(&self) -> &FieldOptions {
        &self.options
    }

    fn clean(&self, value: Option<&str>) -> Result<String> {
        let Some(value) = self.options.check_required(value)? else {
            return Ok(String::new());
        };
        let value = if self.ascii_digits { to_ascii_digits(value) } else { Cow::Borrowed(value) };
        let normalized = Self::normalize(&value);
        let Some(digits) = FIELD_REGEXPS.phone_digits
            .captures(&normalized)
            .and_then(|captures| captures.get(1)) else {
            let error = self.options.error(ErrorCode::Invalid, &[]);
            trace!(
                "Phone number of {} chars rejected: {}",
                value.chars().count(),
                error.code().as_ref()
            );
            return Err(error);
        };
        Ok(digits.as_str().to_string())
    }
}
