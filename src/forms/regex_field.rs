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

use std::sync::Arc;

use log::trace;
use regex::Regex;

use super::{
    errors::InvalidPatternError, field::Result, field_regexps::FIELD_REGEXPS, ErrorCode, Field,
    FieldOptions,
};

/// A text field whose value must match a regular expression.
///
/// The pattern is searched for, not implicitly anchored: use `^...$` to
/// require the whole value to match. Length limits count characters and are
/// checked before the pattern.
#[derive(Debug, Clone)]
pub struct RegexField {
    regex: Arc<Regex>,
    max_length: Option<usize>,
    min_length: Option<usize>,
    options: FieldOptions,
}

impl RegexField {
    /// Compiles `pattern`, reusing the compiled form if any field was already
    /// declared with the same pattern.
    pub fn new(pattern: &str) -> std::result::Result<Self, InvalidPatternError> {
        let regex = FIELD_REGEXPS.regexp_cache.get_regex(pattern)?;
        Ok(Self::from_shared(regex))
    }

    pub(crate) fn from_shared(regex: Arc<Regex>) -> Self {
        Self {
            regex,
            max_length: None,
            min_length: None,
            options: FieldOptions::default(),
        }
    }

    pub fn max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn min_length(mut self, min_length: Option<usize>) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    fn check_length(&self, value: &str) -> Result<()> {
        if self.max_length.is_none() && self.min_length.is_none() {
            return Ok(());
        }
        let length = value.chars().count();
        let mut length_buf = itoa::Buffer::new();
        if let Some(max) = self.max_length.filter(|max| length > *max) {
            let mut max_buf = itoa::Buffer::new();
            return Err(self.options.error(
                ErrorCode::MaxLength,
                &[("max", max_buf.format(max)), ("length", length_buf.format(length))],
            ));
        }
        if let Some(min) = self.min_length.filter(|min| length < *min) {
            let mut min_buf = itoa::Buffer::new();
            return Err(self.options.error(
                ErrorCode::MinLength,
                &[("min", min_buf.format(min)), ("length", length_buf.format(length))],
            ));
        }
        Ok(())
    }
}

impl Field for RegexField {
    fn options(&self) -> &FieldOptions {
        &self.options
    }

    fn clean(&self, value: Option<&str>) -> Result<String> {
        let Some(value) = self.options.check_required(value)? else {
            return Ok(String::new());
        };
        self.check_length(value)?;
        if !self.regex.is_match(value) {
            trace!(
                "Value of {} chars does not match '{}'",
                value.chars().count(),
                self.regex.as_str()
            );
            return Err(self.options.error(ErrorCode::Invalid, &[]));
        }
        Ok(value.to_string())
    }
}
