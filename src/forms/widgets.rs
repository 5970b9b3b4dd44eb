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

use std::collections::BTreeMap;

use log::trace;

use crate::{
    macros::select_widget,
    regions::{self, Choice, DISTRICT_CHOICES, DIVISION_CHOICES, UPAZILLA_CHOICES},
};

use super::{field::Result, ErrorCode, Field, FieldOptions};

/// A single-choice dropdown over a fixed list of `(value, label)` pairs.
///
/// Only holds data; turning it into HTML is left to the caller.
#[derive(Debug, Clone)]
pub struct Select {
    attrs: BTreeMap<String, String>,
    choices: &'static [Choice],
}

impl Select {
    pub fn new(choices: &'static [Choice]) -> Self {
        Self { attrs: BTreeMap::new(), choices }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn attrs(&self) -> &BTreeMap<String, String> {
        &self.attrs
    }

    /// Choices in display order.
    pub fn choices(&self) -> &'static [Choice] {
        self.choices
    }

    pub fn contains(&self, value: &str) -> bool {
        self.label_for(value).is_some()
    }

    pub fn label_for(&self, value: &str) -> Option<&'static str> {
        regions::label_for(self.choices, value)
    }
}

select_widget! {
    /// A Select widget that uses a list of Bangladesh divisions as its choices.
    BdDivisionSelect => DIVISION_CHOICES
}

select_widget! {
    /// A Select widget that uses a list of Bangladesh districts as its choices.
    BdDistrictSelect => DISTRICT_CHOICES
}

select_widget! {
    /// A Select widget that uses a list of Bangladesh upazilas as its choices.
    BdUpazilaSelect => UPAZILLA_CHOICES
}

/// Field accepting only the values offered by its [`Select`].
///
/// ```
/// use bdlocalflavor::{BdDivisionSelect, ChoiceField, ErrorCode, Field};
///
/// let field = ChoiceField::new(BdDivisionSelect::new());
/// assert_eq!(field.clean(Some("sylhet")).unwrap(), "sylhet");
/// assert_eq!(field.clean(Some("assam")).unwrap_err().code(), ErrorCode::InvalidChoice);
/// ```
#[derive(Debug, Clone)]
pub struct ChoiceField {
    widget: Select,
    options: FieldOptions,
}

impl ChoiceField {
    pub fn new(widget: impl Into<Select>) -> Self {
        Self { widget: widget.into(), options: FieldOptions::default() }
    }

    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }

    pub fn widget(&self) -> &Select {
        &self.widget
    }
}

impl Field for ChoiceField {
    fn options(&self) -> &FieldOptions {
        &self.options
    }

    fn clean(&self, value: Option<&str>) -> Result<String> {
        let Some(value) = self.options.check_required(value)? else {
            return Ok(String::new());
        };
        if !self.widget.contains(value) {
            trace!(
                "Value of {} chars is not one of {} choices",
                value.chars().count(),
                self.widget.choices().len()
            );
            return Err(self.options.error(ErrorCode::InvalidChoice, &[("value", value)]));
        }
        Ok(value.to_string())
    }
}
