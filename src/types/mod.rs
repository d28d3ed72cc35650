//! Core types and identifiers for the park pass engine
//!
//! This module contains the fundamental vocabularies of the engine:
//!
//! - **Enums**: checkpoint request kinds ([`ParkArea`], [`RideAccess`],
//!   [`DiscountType`]), the closed [`PassCategory`] set, and the
//!   [`EntrantField`] names used by validation.
//! - **Identifiers**: the UUID-based [`PassId`] stamped on every issued pass.
//!
//! # Usage Example
//!
//! ```rust
//! use park_pass_engine::types::*;
//!
//! let category = PassCategory::VipGuest;
//! let area: ParkArea = "ride control".parse().unwrap();
//! let id = PassId::new();
//!
//! assert_eq!(area, ParkArea::RideControl);
//! assert!(PassCategory::ISSUABLE.contains(&category));
//! assert!(id.to_string().starts_with("PASS_"));
//! ```

pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use enums::*;
pub use identifiers::*;
