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

/// Declares a `Select` widget type bound to one static choice table.
///
/// The three region selects differ only in their table, so the
/// constructor, `Deref` to [`Select`](crate::forms::Select) and the
/// conversions are generated here instead of being written three times.
macro_rules! select_widget {
    ($(#[$meta:meta])* $name:ident => $choices:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            select: $crate::forms::Select,
        }

        impl $name {
            pub fn new() -> Self {
                Self { select: $crate::forms::Select::new($choices) }
            }

            /// Adds an HTML attribute, e.g. `class` or `id`.
            pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
                self.select = self.select.attr(name, value);
                self
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::ops::Deref for $name {
            type Target = $crate::forms::Select;

            fn deref(&self) -> &Self::Target {
                &self.select
            }
        }

        impl From<$name> for $crate::forms::Select {
            fn from(widget: $name) -> Self {
                widget.select
            }
        }
    };
}

pub(crate) use select_widget;
