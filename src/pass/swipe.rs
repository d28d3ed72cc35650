//! Swipe results and checkpoint messaging
//!
//! Access checkpoints return a success flag plus a message for the gate
//! display. Message selection is defined once for all categories and depends
//! only on the outcome and whether the swipe lands on the entrant's birthday.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Message for a successful swipe on the entrant's birthday
pub const BIRTHDAY_WELCOME_MESSAGE: &str = "Welcome and Happy Birthday!";
/// Message for a denied swipe on the entrant's birthday
pub const BIRTHDAY_DENIED_MESSAGE: &str =
    "It may be your birthday, but you're still not allowed in this area.";
/// Message for a successful swipe
pub const WELCOME_MESSAGE: &str = "Welcome!";
/// Message for a denied swipe
pub const DENIED_MESSAGE: &str = "Sorry, you're not allowed in here.";
/// Message returned by the unspecialized fallback category
pub const UNSPECIALIZED_MESSAGE: &str =
    "This pass category grants no access rights.";

/// Select the gate message for an access outcome
///
/// Purely a function of the success flag and the birthday flag; shared by
/// every pass category.
pub fn swipe_message(success: bool, is_birthday: bool) -> &'static str {
    match (success, is_birthday) {
        (true, true) => BIRTHDAY_WELCOME_MESSAGE,
        (false, true) => BIRTHDAY_DENIED_MESSAGE,
        (true, false) => WELCOME_MESSAGE,
        (false, false) => DENIED_MESSAGE,
    }
}

/// Outcome of a swipe at a park-area or ride-access checkpoint
///
/// Immutable value: whether access was granted plus the message to show at
/// the gate. Discount checkpoints do not produce a `SwipeResult`; they return
/// a bare rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwipeResult {
    /// Whether the swipe granted access
    pub success: bool,
    /// Message to show the entrant at the checkpoint
    pub message: String,
}

impl SwipeResult {
    /// Create a result with the birthday-aware message for the outcome
    pub fn new(success: bool, is_birthday: bool) -> Self {
        Self {
            success,
            message: swipe_message(success, is_birthday).to_string(),
        }
    }

    /// Create a result with an explicit message
    pub fn with_message(success: bool, message: impl Into<String>) -> Self {
        Self { success, message: message.into() }
    }
}

impl fmt::Display for SwipeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = if self.success { "granted" } else { "denied" };
        write!(f, "{}: {}", outcome, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_selection_covers_all_outcomes() {
        assert_eq!(swipe_message(true, true), BIRTHDAY_WELCOME_MESSAGE);
        assert_eq!(swipe_message(false, true), BIRTHDAY_DENIED_MESSAGE);
        assert_eq!(swipe_message(true, false), WELCOME_MESSAGE);
        assert_eq!(swipe_message(false, false), DENIED_MESSAGE);
    }

    #[test]
    fn test_message_depends_only_on_flags() {
        // Same flags always select the same string
        assert_eq!(swipe_message(true, false), swipe_message(true, false));
        assert_ne!(swipe_message(true, false), swipe_message(true, true));
        assert_ne!(swipe_message(false, false), swipe_message(false, true));
    }

    #[test]
    fn test_swipe_result_constructors() {
        let result = SwipeResult::new(true, false);
        assert!(result.success);
        assert_eq!(result.message, WELCOME_MESSAGE);

        let fallback = SwipeResult::with_message(false, UNSPECIALIZED_MESSAGE);
        assert!(!fallback.success);
        assert_eq!(fallback.message, UNSPECIALIZED_MESSAGE);
    }

    #[test]
    fn test_swipe_result_display() {
        let granted = SwipeResult::new(true, true);
        assert_eq!(format!("{}", granted), "granted: Welcome and Happy Birthday!");

        let denied = SwipeResult::new(false, false);
        assert_eq!(format!("{}", denied), "denied: Sorry, you're not allowed in here.");
    }

    #[test]
    fn test_swipe_result_serde_round_trip() {
        let result = SwipeResult::new(false, true);
        let json = serde_json::to_string(&result).unwrap();
        let deserialized: SwipeResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }
}
