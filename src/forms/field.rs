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

use std::{borrow::Cow, collections::HashMap};

use crate::string_util::fill_placeholders;

use super::{errors::ValidationError, ErrorCode};

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Returns `true` for values a form treats as "no input": a missing value or
/// an empty string.
pub fn is_empty_value(value: Option<&str>) -> bool {
    matches!(value, None | Some(""))
}

/// A form field: turns raw user input into a cleaned value or rejects it.
pub trait Field {
    fn options(&self) -> &FieldOptions;

    /// Validates `value` and returns its canonical form.
    ///
    /// Empty input (see [`is_empty_value`]) cleans to `""` unless the field
    /// is required, in which case it fails with [`ErrorCode::Required`].
    fn clean(&self, value: Option<&str>) -> Result<String>;

    fn required(&self) -> bool {
        self.options().is_required()
    }
}

/// Per-instance settings shared by every field type.
///
/// ```
/// use bdlocalflavor::{BdPostCodeField, ErrorCode, Field, FieldOptions};
///
/// let field = BdPostCodeField::with_options(
///     FieldOptions::new()
///         .required(true)
///         .error_message(ErrorCode::Invalid, "Post code is four digits."),
/// );
/// assert_eq!(field.clean(Some("12a4")).unwrap_err().message(), "Post code is four digits.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldOptions {
    required: bool,
    error_messages: HashMap<ErrorCode, Cow<'static, str>>,
}

impl FieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Replaces the message reported for `code`.
    pub fn error_message(mut self, code: ErrorCode, message: impl Into<Cow<'static, str>>) -> Self {
        self.error_messages.insert(code, message.into());
        self
    }

    /// Sets the message for `code` unless the caller already replaced it.
    /// Field types use this for their own defaults.
    pub(crate) fn or_error_message(mut self, code: ErrorCode, message: &'static str) -> Self {
        self.error_messages.entry(code).or_insert(Cow::Borrowed(message));
        self
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Message template reported for `code`, placeholders unfilled.
    pub fn message(&self, code: ErrorCode) -> &str {
        match self.error_messages.get(&code) {
            Some(message) => &**message,
            None => code.default_message(),
        }
    }

    pub(crate) fn error(&self, code: ErrorCode, params: &[(&str, &str)]) -> ValidationError {
        let template = Cow::Owned(self.message(code).to_owned());
        ValidationError::new(code, fill_placeholders(template, params))
    }

    /// Base step of every `clean`: `Ok(None)` for empty, non required input,
    /// `Err` for empty required input, and the value otherwise.
    pub(crate) fn check_required<'a>(&self, value: Option<&'a str>) -> Result<Option<&'a str>> {
        match value {
            None | Some("") if self.required => Err(self.error(ErrorCode::Required, &[])),
            None | Some("") => Ok(None),
            Some(value) => Ok(Some(value)),
        }
    }
}
