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

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::regexp_cache::RegexCache;

use super::helper_constants::{PHONE_DIGITS_PATTERN, PHONE_SEPARATORS_PATTERN, POST_CODE_PATTERN};

pub(super) struct FieldRegExps {
    /// Compiled [`POST_CODE_PATTERN`], shared by every post code field.
    pub post_code: Arc<Regex>,

    /// Compiled [`PHONE_DIGITS_PATTERN`]. Group 1 is the cleaned value.
    pub phone_digits: Regex,

    /// Compiled [`PHONE_SEPARATORS_PATTERN`]. Every match is removed from
    /// phone input before `phone_digits` is applied.
    pub phone_separators: Regex,

    /// Patterns handed to `RegexField::new` at runtime.
    pub regexp_cache: RegexCache,
}

impl FieldRegExps {
    fn new() -> Self {
        Self {
            post_code: Arc::new(Regex::new(POST_CODE_PATTERN).unwrap()),
            phone_digits: Regex::new(PHONE_DIGITS_PATTERN).unwrap(),
            phone_separators: Regex::new(PHONE_SEPARATORS_PATTERN).unwrap(),
            regexp_cache: RegexCache::with_capacity(16),
        }
    }
}

pub(super) static FIELD_REGEXPS: LazyLock<FieldRegExps> = LazyLock::new(FieldRegExps::new);
