//! Pass issuance and checkpoint dispatch
//!
//! # Overview
//!
//! - **Pass**: binds a validated entrant to a fixed category and dispatches
//!   checkpoint requests through the policy table
//! - **SwipeResult**: success/message outcome for access checkpoints, with
//!   the shared birthday-aware message selector
//!
//! # Usage Example
//!
//! ```rust
//! use park_pass_engine::pass::issue_pass;
//! use park_pass_engine::types::{DiscountType, ParkArea, PassCategory};
//! use park_pass_engine::{Entrant, FixedClock};
//! use chrono::NaiveDate;
//!
//! let clock = FixedClock::new(NaiveDate::from_ymd_opt(2026, 8, 6).unwrap());
//! let pass = issue_pass(PassCategory::VipGuest, Entrant::default(), &clock).unwrap();
//!
//! assert!(pass.swipe_park_area(ParkArea::Amusement, &clock).success);
//! assert_eq!(pass.swipe_discount(DiscountType::Food), 0.10);
//! ```

#[allow(clippy::module_inception)]
pub mod pass;
pub mod swipe;

// Re-export all public types for convenience
pub use pass::{issue_pass, Pass};
pub use swipe::{swipe_message, SwipeResult};
