//! Pass issuance and swipe dispatch
//!
//! A pass binds a validated entrant to exactly one category, fixed at
//! construction. Every checkpoint request goes through the category's policy
//! record; access outcomes are wrapped in birthday-aware messaging.

use serde::Serialize;
use tracing::{debug, info};

use crate::clock::ParkClock;
use crate::entrant::Entrant;
use crate::error::PassResult;
use crate::pass::swipe::{SwipeResult, UNSPECIALIZED_MESSAGE};
use crate::policy::validate_for_issue;
use crate::types::{DiscountType, ParkArea, PassCategory, PassId, RideAccess};

/// A park pass issued to a single entrant
///
/// The pass is the unit of authorization: it exists only if its entrant
/// satisfied the category's validation rules at issuance time, and it is
/// immutable afterwards. Swiping never fails and never mutates the pass.
#[derive(Debug, Clone, Serialize)]
pub struct Pass {
    id: PassId,
    category: PassCategory,
    entrant: Entrant,
}

impl Pass {
    /// Issue a pass of the given category to an entrant
    ///
    /// The sole construction entry point. Runs the category's validation
    /// rules against the entrant as of `clock`'s current date and fails
    /// without constructing anything if they are not met.
    pub fn issue(
        category: PassCategory,
        entrant: Entrant,
        clock: &dyn ParkClock,
    ) -> PassResult<Self> {
        validate_for_issue(category, &entrant, clock.today())?;

        let pass = Self { id: PassId::new(), category, entrant };
        info!(pass_id = %pass.id, category = %category, "pass issued");
        Ok(pass)
    }

    /// The unique identifier stamped on this pass at issuance
    pub fn id(&self) -> PassId {
        self.id
    }

    /// The category this pass was issued under
    pub fn category(&self) -> PassCategory {
        self.category
    }

    /// The entrant this pass was assigned to
    pub fn entrant(&self) -> &Entrant {
        &self.entrant
    }

    /// Swipe the pass at a park-area checkpoint
    pub fn swipe_park_area(&self, area: ParkArea, clock: &dyn ParkClock) -> SwipeResult {
        let allowed = self.category.policy().allows_area(area);
        debug!(pass_id = %self.id, area = %area, allowed, "park area swipe");
        self.access_result(allowed, clock)
    }

    /// Swipe the pass at a ride-access gate
    pub fn swipe_ride_access(&self, access: RideAccess, clock: &dyn ParkClock) -> SwipeResult {
        let allowed = self.category.policy().allows_ride(access);
        debug!(pass_id = %self.id, access = %access, allowed, "ride access swipe");
        self.access_result(allowed, clock)
    }

    /// Swipe the pass at a discount register
    ///
    /// Total: always returns a rate in 0.0 - 1.0, where 0.0 means
    /// "no discount". There is no failure mode and no message.
    pub fn swipe_discount(&self, discount: DiscountType) -> f32 {
        let rate = self.category.policy().discount(discount);
        debug!(pass_id = %self.id, discount = %discount, rate, "discount swipe");
        rate
    }

    /// Wrap an access outcome in the appropriate checkpoint message
    fn access_result(&self, success: bool, clock: &dyn ParkClock) -> SwipeResult {
        // The fallback category reports its lack of specialization explicitly
        // rather than hiding behind the generic denial message.
        if self.category == PassCategory::Unspecialized {
            return SwipeResult::with_message(false, UNSPECIALIZED_MESSAGE);
        }

        let is_birthday = self.entrant.is_birthday(clock.today()).unwrap_or(false);
        SwipeResult::new(success, is_birthday)
    }
}

/// Issue a pass of the given category to an entrant
///
/// Convenience wrapper around [`Pass::issue`].
pub fn issue_pass(
    category: PassCategory,
    entrant: Entrant,
    clock: &dyn ParkClock,
) -> PassResult<Pass> {
    Pass::issue(category, entrant, clock)
}
