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

/// Replaces every Unicode decimal digit (Bengali `০`-`৯`, Arabic-Indic,
/// full-width, ...) with its ASCII counterpart.
///
/// Returns the input borrowed if it is already ASCII.
pub fn to_ascii_digits(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        return Cow::Borrowed(s);
    }
    Cow::Owned(dec_from_char::normalize_decimals(s).to_string())
}

/// Replaces `{name}` placeholders of a message template with their values.
///
/// Only allocates when a placeholder is actually present.
pub fn fill_placeholders(template: Cow<'static, str>, params: &[(&str, &str)]) -> Cow<'static, str> {
    params.iter().fold(template, |message, &(name, value)| {
        let placeholder = fast_cat::concat_str!("{", name, "}");
        if message.contains(placeholder.as_str()) {
            Cow::Owned(message.replace(placeholder.as_str(), value))
        } else {
            message
        }
    })
}
