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

// Bangladesh post codes are exactly four ASCII digits.
pub const POST_CODE_PATTERN: &'static str = r"^[0-9]{4}$";

// Group 1 holds the ASCII digits of a phone number once separators are gone.
pub const PHONE_DIGITS_PATTERN: &'static str = r"^([0-9]{8,13})$";

// Characters dropped from phone input before it is matched: parentheses,
// runs of ASCII white space and hyphens. Other spaces (NBSP, ideographic)
// are kept and make the value invalid.
pub const PHONE_SEPARATORS_PATTERN: &'static str = r"\(|\)|[ \t\n\r\x0B\x0C]+|-";

pub const REQUIRED_MESSAGE: &'static str = "This field is required.";
pub const INVALID_MESSAGE: &'static str = "Enter a valid value.";
pub const MAX_LENGTH_MESSAGE: &'static str =
    "Ensure this value has at most {max} characters (it has {length}).";
pub const MIN_LENGTH_MESSAGE: &'static str =
    "Ensure this value has at least {min} characters (it has {length}).";
pub const INVALID_CHOICE_MESSAGE: &'static str =
    "Select a valid choice. {value} is not one of the available choices.";

pub const POST_CODE_INVALID_MESSAGE: &'static str = "Enter a 4 digit post code.";
pub const PHONE_INVALID_MESSAGE: &'static str = "Phone numbers must be between 8 to 13 digits.";
