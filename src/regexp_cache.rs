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

use dashmap::DashMap;
use log::{error, trace};
use regex::Regex;

use crate::forms::errors::InvalidPatternError;

/// Compiled field patterns keyed by their source text, so that every field
/// declared with the same pattern shares one `Regex`.
pub struct RegexCache {
    cache: DashMap<String, Arc<Regex>>
}

impl RegexCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<Regex>, InvalidPatternError> {
        if let Some(regex) = self.cache.get(pattern) {
            return Ok(regex.value().clone());
        }
        let entry = self.cache.entry(pattern.to_string()).or_try_insert_with(|| {
            trace!("Compiling field pattern '{pattern}'");
            Regex::new(pattern).map(Arc::new).map_err(|err| {
                error!("Invalid field pattern '{pattern}': {err}");
                InvalidPatternError(err)
            })
        })?;
        Ok(entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }
}
