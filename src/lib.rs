//! Park Pass Engine
//!
//! An access-control and discount-entitlement engine for amusement park
//! passes: given an entrant and the pass category they were issued, decide
//! whether a swipe at a given checkpoint (a park area, a ride-access gate, or
//! a discount register) is permitted, and what discount rate applies.
//!
//! # Overview
//!
//! Every pass category is a fixed bundle of required entrant fields, park-area
//! and ride-access permission sets, and discount rates, recorded in a single
//! policy table. Issuing a pass validates the entrant against the category's
//! requirements; swiping an issued pass is a pure, total lookup against the
//! table, with birthday-aware messaging layered on access outcomes.
//!
//! ## Key Properties
//!
//! - **Single policy table**: categories differ only in data; the membership
//!   evaluation exists exactly once
//! - **Fail-fast issuance**: no pass exists unless its entrant satisfied the
//!   category's validation rules
//! - **Total swipe evaluation**: swipes never error; unpermitted requests
//!   yield unsuccessful results, discount swipes always yield a rate
//! - **Deterministic time**: age and birthday computation go through an
//!   injectable [`ParkClock`]
//!
//! ## Quick Start
//!
//! ```rust
//! use park_pass_engine::types::{DiscountType, ParkArea, PassCategory};
//! use park_pass_engine::{issue_pass, Entrant, FixedClock};
//! use chrono::NaiveDate;
//!
//! let clock = FixedClock::new(NaiveDate::from_ymd_opt(2026, 8, 6).unwrap());
//! let entrant = Entrant {
//!     first_name: Some("First".to_string()),
//!     last_name: Some("Last".to_string()),
//!     street_address: Some("Street Address".to_string()),
//!     city: Some("City".to_string()),
//!     state: Some("CA".to_string()),
//!     zip_code: Some(90000),
//!     ..Default::default()
//! };
//!
//! let pass = issue_pass(PassCategory::Manager, entrant, &clock)?;
//! assert!(pass.swipe_park_area(ParkArea::Office, &clock).success);
//! assert_eq!(pass.swipe_discount(DiscountType::Food), 0.25);
//! # Ok::<(), park_pass_engine::PassError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: checkpoint and category enums, pass identifiers
//! - [`entrant`]: the optional-everywhere entrant record and derived queries
//! - [`clock`]: injectable calendar source
//! - [`policy`]: the per-category policy table and issuance validation
//! - [`pass`]: pass issuance, swipe dispatch, and checkpoint messaging
//! - [`error`]: issuance error types
//! - [`logging`]: tracing subscriber configuration for embedders
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod clock;
pub mod entrant;
pub mod error;
pub mod logging;
pub mod pass;
pub mod policy;
pub mod types;

// Core types and identifiers
pub use types::{DiscountType, EntrantField, ParkArea, PassCategory, PassId, RideAccess};

// Entrant data model
pub use entrant::{Entrant, Ssn};

// Time source
pub use clock::{FixedClock, ParkClock, SystemClock};

// Policy table and validation
pub use policy::{validate_for_issue, CategoryPolicy};

// Pass issuance and swipe dispatch
pub use pass::{issue_pass, swipe_message, Pass, SwipeResult};

// Errors and logging
pub use error::{PassError, PassResult};
pub use logging::LoggingConfig;
