//! Authorization policy for pass categories
//!
//! The policy table maps each [`PassCategory`](crate::types::PassCategory) to
//! its fixed bundle of permissions and requirements, and the validation rules
//! enforce those requirements when a pass is issued.
//!
//! # Overview
//!
//! - **CategoryPolicy**: per-category permission sets, discount rates, and
//!   required fields, with the single membership evaluator
//! - **validate_for_issue**: field-presence and age-window checks run before
//!   any pass exists
//!
//! # Usage Example
//!
//! ```rust
//! use park_pass_engine::policy::validate_for_issue;
//! use park_pass_engine::types::{DiscountType, ParkArea, PassCategory};
//! use park_pass_engine::Entrant;
//! use chrono::NaiveDate;
//!
//! let policy = PassCategory::VipGuest.policy();
//! assert!(policy.allows_area(ParkArea::Amusement));
//! assert_eq!(policy.discount(DiscountType::Merchandise), 0.20);
//!
//! let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
//! assert!(validate_for_issue(PassCategory::VipGuest, &Entrant::default(), today).is_ok());
//! ```

pub mod table;
pub mod validation;

// Re-export all public types for convenience
pub use table::CategoryPolicy;
pub use validation::validate_for_issue;
