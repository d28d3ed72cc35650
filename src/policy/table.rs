//! Per-category policy records
//!
//! The single source of truth for what each pass category may do. Categories
//! differ only in the data of their [`CategoryPolicy`] record; the membership
//! evaluation lives here exactly once and is shared by every category.

use serde::Serialize;

use crate::types::{DiscountType, EntrantField, ParkArea, PassCategory, RideAccess};

/// The fixed policy bundle for one pass category
///
/// Holds the required-field set checked at issuance, the park-area and
/// ride-access permission sets consulted at swipe time, the discount rates,
/// and the optional age window enforced at issuance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryPolicy {
    /// Entrant fields that must be present before a pass is issued
    pub required_fields: &'static [EntrantField],
    /// Park areas this category may enter
    pub park_areas: &'static [ParkArea],
    /// Ride access classes this category may use
    pub ride_access: &'static [RideAccess],
    /// Discount rate at food registers, 0.0 - 1.0
    pub food_discount: f32,
    /// Discount rate at merchandise registers, 0.0 - 1.0
    pub merchandise_discount: f32,
    /// Upper age bound, exclusive: the entrant's age must be strictly below
    pub max_age_exclusive: Option<u32>,
}

impl CategoryPolicy {
    /// Whether this category may enter the given park area
    pub fn allows_area(&self, area: ParkArea) -> bool {
        self.park_areas.contains(&area)
    }

    /// Whether this category may use the given ride access class
    pub fn allows_ride(&self, access: RideAccess) -> bool {
        self.ride_access.contains(&access)
    }

    /// Discount rate for the given register type
    ///
    /// Total: 0.0 is a valid "no discount" rate, never an error.
    pub fn discount(&self, discount: DiscountType) -> f32 {
        match discount {
            DiscountType::Food => self.food_discount,
            DiscountType::Merchandise => self.merchandise_discount,
        }
    }
}

/// Personal and address data required of every employee category
const EMPLOYEE_REQUIRED_FIELDS: &[EntrantField] = &[
    EntrantField::FirstName,
    EntrantField::LastName,
    EntrantField::StreetAddress,
    EntrantField::City,
    EntrantField::State,
    EntrantField::ZipCode,
];

const CLASSIC_GUEST: CategoryPolicy = CategoryPolicy {
    required_fields: &[],
    park_areas: &[ParkArea::Amusement],
    ride_access: &[RideAccess::AllRides],
    food_discount: 0.0,
    merchandise_discount: 0.0,
    max_age_exclusive: None,
};

const VIP_GUEST: CategoryPolicy = CategoryPolicy {
    required_fields: &[],
    park_areas: &[ParkArea::Amusement],
    ride_access: &[RideAccess::AllRides, RideAccess::SkipLines],
    food_discount: 0.10,
    merchandise_discount: 0.20,
    max_age_exclusive: None,
};

const FREE_CHILD_GUEST: CategoryPolicy = CategoryPolicy {
    required_fields: &[EntrantField::DateOfBirth],
    park_areas: &[ParkArea::Amusement],
    ride_access: &[RideAccess::AllRides],
    food_discount: 0.0,
    merchandise_discount: 0.0,
    max_age_exclusive: Some(5),
};

const HOURLY_FOOD_SERVICES: CategoryPolicy = CategoryPolicy {
    required_fields: EMPLOYEE_REQUIRED_FIELDS,
    park_areas: &[ParkArea::Amusement, ParkArea::Kitchen],
    ride_access: &[RideAccess::AllRides],
    food_discount: 0.15,
    merchandise_discount: 0.25,
    max_age_exclusive: None,
};

const HOURLY_RIDE_SERVICES: CategoryPolicy = CategoryPolicy {
    required_fields: EMPLOYEE_REQUIRED_FIELDS,
    park_areas: &[ParkArea::Amusement, ParkArea::RideControl],
    ride_access: &[RideAccess::AllRides],
    food_discount: 0.15,
    merchandise_discount: 0.25,
    max_age_exclusive: None,
};

const HOURLY_MAINTENANCE: CategoryPolicy = CategoryPolicy {
    required_fields: EMPLOYEE_REQUIRED_FIELDS,
    park_areas: &[
        ParkArea::Amusement,
        ParkArea::Kitchen,
        ParkArea::RideControl,
        ParkArea::Maintenance,
    ],
    ride_access: &[],
    food_discount: 0.15,
    merchandise_discount: 0.25,
    max_age_exclusive: None,
};

const MANAGER: CategoryPolicy = CategoryPolicy {
    required_fields: EMPLOYEE_REQUIRED_FIELDS,
    park_areas: &[
        ParkArea::Amusement,
        ParkArea::Kitchen,
        ParkArea::RideControl,
        ParkArea::Maintenance,
        ParkArea::Office,
    ],
    ride_access: &[RideAccess::AllRides, RideAccess::SkipLines],
    food_discount: 0.25,
    merchandise_discount: 0.25,
    max_age_exclusive: None,
};

const UNSPECIALIZED: CategoryPolicy = CategoryPolicy {
    required_fields: &[],
    park_areas: &[],
    ride_access: &[],
    food_discount: 0.0,
    merchandise_discount: 0.0,
    max_age_exclusive: None,
};

impl PassCategory {
    /// The policy record for this category
    pub fn policy(self) -> &'static CategoryPolicy {
        match self {
            PassCategory::ClassicGuest => &CLASSIC_GUEST,
            PassCategory::VipGuest => &VIP_GUEST,
            PassCategory::FreeChildGuest => &FREE_CHILD_GUEST,
            PassCategory::HourlyEmployeeFoodServices => &HOURLY_FOOD_SERVICES,
            PassCategory::HourlyEmployeeRideServices => &HOURLY_RIDE_SERVICES,
            PassCategory::HourlyEmployeeMaintenance => &HOURLY_MAINTENANCE,
            PassCategory::Manager => &MANAGER,
            PassCategory::Unspecialized => &UNSPECIALIZED,
        }
    }
}
