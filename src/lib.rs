//! Bangladesh-specific form helpers: post code and phone number fields,
//! and select widgets for divisions, districts and upazilas.
//!
//! ```
//! use bdlocalflavor::{BdPhoneNumberField, BdPostCodeField, Field};
//!
//! assert_eq!(BdPostCodeField::new().clean(Some("1000")).unwrap(), "1000");
//! assert_eq!(BdPhoneNumberField::new().clean(Some("02-9556 677")).unwrap(), "029556677");
//! ```

mod generated;
mod regexp_cache;
pub(crate) mod string_util;
pub mod forms;
pub mod regions;

/// Boilerplate shared by the region select widgets lives here as a
/// macro, so each widget declaration reads as "name => table".
mod macros;

#[cfg(test)]
mod tests;

pub use forms::{
    errors::{InvalidPatternError, ValidationError}, is_empty_value, BdDistrictSelect,
    BdDivisionSelect, BdPhoneNumberField, BdPostCodeField, BdUpazilaSelect, ChoiceField,
    ErrorCode, Field, FieldOptions, RegexField, Select,
};
pub use regions::{
    district_of_upazila, districts_in_division, division_of_district, upazilas_in_district,
    Choice, RegionLevel, DISTRICT_CHOICES, DIVISION_CHOICES, UPAZILLA_CHOICES,
};
