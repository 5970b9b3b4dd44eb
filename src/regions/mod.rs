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

//! Administrative regions of Bangladesh: 8 divisions, 64 districts and
//! their upazilas (sub-districts).
//!
//! Each table is an ordered list of `(value, label)` pairs. Values are
//! lowercase ascii slugs, stable across releases; labels are English names.
//! Upazila names shared by several districts have the district appended to
//! their value, e.g. `kaliganj-gazipur`.

use strum::{AsRefStr, EnumIter};

pub use crate::generated::{DISTRICT_CHOICES, DIVISION_CHOICES, UPAZILLA_CHOICES};
use crate::generated::{DISTRICT_DIVISIONS, UPAZILLA_DISTRICTS};

/// A `(value, label)` pair offered by a select widget.
pub type Choice = (&'static str, &'static str);

/// Level of the administrative hierarchy, from largest to smallest.
#[derive(Debug, EnumIter, AsRefStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum RegionLevel {
    Division,
    District,
    Upazila,
}

impl RegionLevel {
    pub fn choices(self) -> &'static [Choice] {
        match self {
            RegionLevel::Division => DIVISION_CHOICES,
            RegionLevel::District => DISTRICT_CHOICES,
            RegionLevel::Upazila => UPAZILLA_CHOICES,
        }
    }

    /// The level directly above this one, `None` for divisions.
    pub fn parent(self) -> Option<RegionLevel> {
        match self {
            RegionLevel::Division => None,
            RegionLevel::District => Some(RegionLevel::Division),
            RegionLevel::Upazila => Some(RegionLevel::District),
        }
    }

    pub fn contains(self, value: &str) -> bool {
        self.label_for(value).is_some()
    }

    pub fn label_for(self, value: &str) -> Option<&'static str> {
        label_for(self.choices(), value)
    }
}

pub(crate) fn label_for(choices: &'static [Choice], value: &str) -> Option<&'static str> {
    choices
        .iter()
        .find(|(choice_value, _)| *choice_value == value)
        .map(|(_, label)| *label)
}

fn parent_of(choices: &[Choice], parents: &'static [&'static str], value: &str) -> Option<&'static str> {
    let position = choices.iter().position(|(choice_value, _)| *choice_value == value)?;
    parents.get(position).copied()
}

fn children_of<'a>(
    choices: &'static [Choice], parents: &'static [&'static str], parent: &'a str
) -> impl Iterator<Item = Choice> + 'a {
    choices
        .iter()
        .zip(parents)
        .filter(move |(_, choice_parent)| **choice_parent == parent)
        .map(|(choice, _)| *choice)
}

/// Division value of a district, `None` if the district is unknown.
pub fn division_of_district(district: &str) -> Option<&'static str> {
    parent_of(DISTRICT_CHOICES, DISTRICT_DIVISIONS, district)
}

/// District value of an upazila, `None` if the upazila is unknown.
pub fn district_of_upazila(upazila: &str) -> Option<&'static str> {
    parent_of(UPAZILLA_CHOICES, UPAZILLA_DISTRICTS, upazila)
}

/// Districts of a division in table order. Empty for an unknown division.
pub fn districts_in_division(division: &str) -> impl Iterator<Item = Choice> + '_ {
    children_of(DISTRICT_CHOICES, DISTRICT_DIVISIONS, division)
}

/// Upazilas of a district in table order. Empty for an unknown district.
pub fn upazilas_in_district(district: &str) -> impl Iterator<Item = Choice> + '_ {
    children_of(UPAZILLA_CHOICES, UPAZILLA_DISTRICTS, district)
}
