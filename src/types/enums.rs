//! Enumeration types for the park pass engine
//!
//! This module contains the closed vocabularies used throughout the engine:
//! checkpoint request kinds, pass categories, and entrant data fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Areas of the park guarded by an access checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParkArea {
    /// Public amusement areas open to every valid pass
    Amusement,
    /// Food preparation areas
    Kitchen,
    /// Maintenance shops and service corridors
    Maintenance,
    /// Ride control booths
    RideControl,
    /// Back-office areas
    Office,
}

impl ParkArea {
    /// All park area variants, in checkpoint display order
    pub const ALL: [ParkArea; 5] = [
        ParkArea::Amusement,
        ParkArea::Kitchen,
        ParkArea::Maintenance,
        ParkArea::RideControl,
        ParkArea::Office,
    ];
}

impl fmt::Display for ParkArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParkArea::Amusement => write!(f, "Amusement"),
            ParkArea::Kitchen => write!(f, "Kitchen"),
            ParkArea::Maintenance => write!(f, "Maintenance"),
            ParkArea::RideControl => write!(f, "Ride Control"),
            ParkArea::Office => write!(f, "Office"),
        }
    }
}

impl FromStr for ParkArea {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "amusement" => Ok(ParkArea::Amusement),
            "kitchen" => Ok(ParkArea::Kitchen),
            "maintenance" => Ok(ParkArea::Maintenance),
            "ride control" | "ridecontrol" => Ok(ParkArea::RideControl),
            "office" => Ok(ParkArea::Office),
            _ => Err(format!("Unknown park area: {}", s)),
        }
    }
}

/// Classes of ride access a pass can grant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RideAccess {
    /// Access to all rides
    AllRides,
    /// Permission to skip ride lines
    SkipLines,
}

impl RideAccess {
    /// All ride access variants
    pub const ALL: [RideAccess; 2] = [RideAccess::AllRides, RideAccess::SkipLines];
}

impl fmt::Display for RideAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RideAccess::AllRides => write!(f, "All Rides"),
            RideAccess::SkipLines => write!(f, "Skip Lines"),
        }
    }
}

impl FromStr for RideAccess {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all rides" | "allrides" | "all" => Ok(RideAccess::AllRides),
            "skip lines" | "skiplines" | "skip" => Ok(RideAccess::SkipLines),
            _ => Err(format!("Unknown ride access: {}", s)),
        }
    }
}

/// Types of discounts a pass can carry at a register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscountType {
    /// Discount at food registers
    Food,
    /// Discount at merchandise registers
    Merchandise,
}

impl DiscountType {
    /// All discount variants
    pub const ALL: [DiscountType; 2] = [DiscountType::Food, DiscountType::Merchandise];
}

impl fmt::Display for DiscountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscountType::Food => write!(f, "Food"),
            DiscountType::Merchandise => write!(f, "Merchandise"),
        }
    }
}

impl FromStr for DiscountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(DiscountType::Food),
            "merchandise" | "merch" => Ok(DiscountType::Merchandise),
            _ => Err(format!("Unknown discount type: {}", s)),
        }
    }
}

/// Pass categories issuable by the park
///
/// Each category is a fixed bundle of required entrant fields, area and ride
/// permissions, and discount rates, looked up in the policy table. The set is
/// closed; callers cannot extend it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassCategory {
    /// Standard park guest
    ClassicGuest,
    /// VIP guest with line-skip privileges and discounts
    VipGuest,
    /// Free pass for children under five
    FreeChildGuest,
    /// Hourly employee assigned to food services
    HourlyEmployeeFoodServices,
    /// Hourly employee assigned to ride services
    HourlyEmployeeRideServices,
    /// Hourly employee assigned to maintenance
    HourlyEmployeeMaintenance,
    /// Park manager
    Manager,
    /// Fallback category granting no rights anywhere
    Unspecialized,
}

impl PassCategory {
    /// The categories a caller can normally issue (excludes the
    /// [`Unspecialized`](PassCategory::Unspecialized) fallback)
    pub const ISSUABLE: [PassCategory; 7] = [
        PassCategory::ClassicGuest,
        PassCategory::VipGuest,
        PassCategory::FreeChildGuest,
        PassCategory::HourlyEmployeeFoodServices,
        PassCategory::HourlyEmployeeRideServices,
        PassCategory::HourlyEmployeeMaintenance,
        PassCategory::Manager,
    ];

    /// Every category including the fallback, for exhaustive table checks
    pub const ALL: [PassCategory; 8] = [
        PassCategory::ClassicGuest,
        PassCategory::VipGuest,
        PassCategory::FreeChildGuest,
        PassCategory::HourlyEmployeeFoodServices,
        PassCategory::HourlyEmployeeRideServices,
        PassCategory::HourlyEmployeeMaintenance,
        PassCategory::Manager,
        PassCategory::Unspecialized,
    ];

    /// Whether this is an hourly employee category
    pub fn is_hourly_employee(&self) -> bool {
        matches!(
            self,
            PassCategory::HourlyEmployeeFoodServices
                | PassCategory::HourlyEmployeeRideServices
                | PassCategory::HourlyEmployeeMaintenance
        )
    }
}

impl fmt::Display for PassCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassCategory::ClassicGuest => write!(f, "Classic Guest"),
            PassCategory::VipGuest => write!(f, "VIP Guest"),
            PassCategory::FreeChildGuest => write!(f, "Free Child Guest"),
            PassCategory::HourlyEmployeeFoodServices => {
                write!(f, "Hourly Employee - Food Services")
            }
            PassCategory::HourlyEmployeeRideServices => {
                write!(f, "Hourly Employee - Ride Services")
            }
            PassCategory::HourlyEmployeeMaintenance => {
                write!(f, "Hourly Employee - Maintenance")
            }
            PassCategory::Manager => write!(f, "Manager"),
            PassCategory::Unspecialized => write!(f, "Unspecialized"),
        }
    }
}

impl FromStr for PassCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classic guest" | "classicguest" | "guest" => Ok(PassCategory::ClassicGuest),
            "vip guest" | "vipguest" | "vip" => Ok(PassCategory::VipGuest),
            "free child guest" | "freechildguest" | "free child" | "child" => {
                Ok(PassCategory::FreeChildGuest)
            }
            "hourly employee - food services" | "food services" | "foodservices" => {
                Ok(PassCategory::HourlyEmployeeFoodServices)
            }
            "hourly employee - ride services" | "ride services" | "rideservices" => {
                Ok(PassCategory::HourlyEmployeeRideServices)
            }
            "hourly employee - maintenance" | "maintenance employee" => {
                Ok(PassCategory::HourlyEmployeeMaintenance)
            }
            "manager" => Ok(PassCategory::Manager),
            "unspecialized" => Ok(PassCategory::Unspecialized),
            _ => Err(format!("Unknown pass category: {}", s)),
        }
    }
}

/// Entrant data fields a pass category can require at issuance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntrantField {
    /// Date of birth
    DateOfBirth,
    /// Social security number
    Ssn,
    /// Project or work-order number
    ProjectNumber,
    /// First name
    FirstName,
    /// Last name
    LastName,
    /// Company name
    Company,
    /// Street address
    StreetAddress,
    /// City
    City,
    /// State
    State,
    /// Zip code
    ZipCode,
}

impl fmt::Display for EntrantField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntrantField::DateOfBirth => write!(f, "date of birth"),
            EntrantField::Ssn => write!(f, "social security number"),
            EntrantField::ProjectNumber => write!(f, "project number"),
            EntrantField::FirstName => write!(f, "first name"),
            EntrantField::LastName => write!(f, "last name"),
            EntrantField::Company => write!(f, "company"),
            EntrantField::StreetAddress => write!(f, "street address"),
            EntrantField::City => write!(f, "city"),
            EntrantField::State => write!(f, "state"),
            EntrantField::ZipCode => write!(f, "zip code"),
        }
    }
}
