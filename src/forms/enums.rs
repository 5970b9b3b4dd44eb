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

use strum::{AsRefStr, EnumIter};

use super::helper_constants::{
    INVALID_CHOICE_MESSAGE, INVALID_MESSAGE, MAX_LENGTH_MESSAGE, MIN_LENGTH_MESSAGE,
    REQUIRED_MESSAGE,
};

/// Identifies why a value was rejected by a field.
///
/// Every code has a default message; fields may replace it per instance
/// through [`FieldOptions::error_message`](super::FieldOptions::error_message).
/// The string form (`as_ref()`) is the snake case name, e.g. `"invalid_choice"`.
#[derive(Debug, EnumIter, AsRefStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCode {
    /// **Required.**
    /// The field is required and the value is empty.
    Required,
    /// **Invalid.**
    /// The value does not have the expected format.
    Invalid,
    /// **Too long.**
    /// The value has more characters than `max_length` allows.
    /// Message placeholders: `{max}`, `{length}`.
    MaxLength,
    /// **Too short.**
    /// The value has fewer characters than `min_length` allows.
    /// Message placeholders: `{min}`, `{length}`.
    MinLength,
    /// **Unknown choice.**
    /// The value is not one of the choices of a select widget.
    /// Message placeholder: `{value}`.
    InvalidChoice,
}

impl ErrorCode {
    /// Message used when neither the field type nor the field instance
    /// supplies one.
    pub fn default_message(self) -> &'static str {
        match self {
            ErrorCode::Required => REQUIRED_MESSAGE,
            ErrorCode::Invalid => INVALID_MESSAGE,
            ErrorCode::MaxLength => MAX_LENGTH_MESSAGE,
            ErrorCode::MinLength => MIN_LENGTH_MESSAGE,
            ErrorCode::InvalidChoice => INVALID_CHOICE_MESSAGE,
        }
    }
}
