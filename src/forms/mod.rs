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

mod helper_constants;
mod field_regexps;
mod field;
mod regex_field;
mod fields;
mod widgets;
pub mod errors;
pub mod enums;

pub use enums::ErrorCode;
pub use field::{is_empty_value, Field, FieldOptions, Result};
pub use fields::{BdPhoneNumberField, BdPostCodeField};
pub use regex_field::RegexField;
pub use widgets::{BdDistrictSelect, BdDivisionSelect, BdUpazilaSelect, ChoiceField, Select};
