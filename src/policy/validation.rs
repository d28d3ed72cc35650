//! Issuance-time validation rules
//!
//! Checks an entrant against the target category's requirements before a pass
//! may exist: field presence first, then any category age window. Validation
//! is pure; nothing partially validated is ever observable.

use chrono::NaiveDate;
use tracing::warn;

use crate::entrant::Entrant;
use crate::error::{PassError, PassResult};
use crate::types::PassCategory;

/// Validate an entrant for issuance of a pass in the given category
///
/// Returns `Ok(())` only if every required field is present and, where the
/// category carries an age window, the entrant's age as of `today` satisfies
/// it. `MissingInformation` reports every absent required field.
pub fn validate_for_issue(
    category: PassCategory,
    entrant: &Entrant,
    today: NaiveDate,
) -> PassResult<()> {
    let policy = category.policy();

    let missing = entrant.missing_fields(policy.required_fields);
    if !missing.is_empty() {
        warn!(
            category = %category,
            missing = ?missing,
            "pass issuance rejected: missing information"
        );
        return Err(PassError::missing_information(missing));
    }

    if let Some(limit) = policy.max_age_exclusive {
        // Field presence was checked above, so a missing age here means the
        // date of birth lies in the future.
        match entrant.age(today) {
            Some(age) if age < limit => {}
            Some(age) => {
                let description = format!(
                    "entrant must be younger than {} for a {} pass, but is {} as of {}",
                    limit, category, age, today
                );
                warn!(category = %category, age, "pass issuance rejected: wrong age");
                return Err(PassError::wrong_age(description));
            }
            None => {
                let description = format!(
                    "entrant's date of birth is later than {}; age cannot be determined",
                    today
                );
                warn!(category = %category, "pass issuance rejected: wrong age");
                return Err(PassError::wrong_age(description));
            }
        }
    }

    Ok(())
}
