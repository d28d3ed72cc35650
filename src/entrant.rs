//! Entrant data model
//!
//! An entrant is the person a pass is issued to. Every field is individually
//! optional; which fields must be present is decided per pass category by the
//! validation rules, never by this type.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::EntrantField;

/// A social security number split into its three numeric groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ssn {
    /// Area number (first group)
    pub area: u16,
    /// Group number (middle group)
    pub group: u16,
    /// Serial number (last group)
    pub serial: u16,
}

impl Ssn {
    /// Create an SSN from its three numeric groups
    pub fn new(area: u16, group: u16, serial: u16) -> Self {
        Self { area, group, serial }
    }
}

impl fmt::Display for Ssn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}-{:02}-{:04}", self.area, self.group, self.serial)
    }
}

/// Someone who can enter the park: a guest, employee, manager, etc.
///
/// Plain data holder. Constructed once by the caller, immutable thereafter,
/// and owned by exactly one [`Pass`](crate::Pass). Callers typically build it
/// with struct-update syntax:
///
/// ```rust
/// use park_pass_engine::Entrant;
///
/// let entrant = Entrant {
///     first_name: Some("First".to_string()),
///     last_name: Some("Last".to_string()),
///     ..Default::default()
/// };
/// assert!(entrant.date_of_birth.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entrant {
    /// Date of birth
    pub date_of_birth: Option<NaiveDate>,
    /// Social security number
    pub ssn: Option<Ssn>,
    /// Project or work-order number
    pub project_number: Option<u32>,
    /// First name
    pub first_name: Option<String>,
    /// Last name
    pub last_name: Option<String>,
    /// Company name
    pub company: Option<String>,
    /// Street address
    pub street_address: Option<String>,
    /// City
    pub city: Option<String>,
    /// State
    pub state: Option<String>,
    /// Zip code
    pub zip_code: Option<u32>,
}

impl Entrant {
    /// Whole years between the date of birth and `as_of`
    ///
    /// Returns `None` if the date of birth is absent or later than `as_of`.
    pub fn age(&self, as_of: NaiveDate) -> Option<u32> {
        let dob = self.date_of_birth?;
        if dob > as_of {
            return None;
        }
        let mut years = as_of.year() - dob.year();
        if (as_of.month(), as_of.day()) < (dob.month(), dob.day()) {
            years -= 1;
        }
        u32::try_from(years).ok()
    }

    /// Whether `as_of` falls on the entrant's birthday (month and day equal)
    ///
    /// Returns `None` if the date of birth is absent.
    pub fn is_birthday(&self, as_of: NaiveDate) -> Option<bool> {
        let dob = self.date_of_birth?;
        Some(dob.month() == as_of.month() && dob.day() == as_of.day())
    }

    /// Whether the given field is present on this entrant
    pub fn has_field(&self, field: EntrantField) -> bool {
        match field {
            EntrantField::DateOfBirth => self.date_of_birth.is_some(),
            EntrantField::Ssn => self.ssn.is_some(),
            EntrantField::ProjectNumber => self.project_number.is_some(),
            EntrantField::FirstName => self.first_name.is_some(),
            EntrantField::LastName => self.last_name.is_some(),
            EntrantField::Company => self.company.is_some(),
            EntrantField::StreetAddress => self.street_address.is_some(),
            EntrantField::City => self.city.is_some(),
            EntrantField::State => self.state.is_some(),
            EntrantField::ZipCode => self.zip_code.is_some(),
        }
    }

    /// All fields from `required` that are absent on this entrant
    pub fn missing_fields(&self, required: &[EntrantField]) -> Vec<EntrantField> {
        required.iter().copied().filter(|field| !self.has_field(*field)).collect()
    }
}
