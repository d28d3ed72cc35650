//! Integration tests for pass issuance and validation rules
//!
//! Exercises the category-specific requirements enforced before a pass may
//! exist: field presence, the free-child age window, and error reporting.

use chrono::NaiveDate;
use park_pass_engine::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn clock() -> FixedClock {
    FixedClock::new(date(2026, 8, 6))
}

fn employee_entrant() -> Entrant {
    Entrant {
        first_name: Some("First".to_string()),
        last_name: Some("Last".to_string()),
        street_address: Some("Street Address".to_string()),
        city: Some("City".to_string()),
        state: Some("CA".to_string()),
        zip_code: Some(90000),
        ..Default::default()
    }
}

/// Classic and VIP guest passes require no entrant data at all
#[test]
fn test_guest_passes_issue_for_anonymous_entrant() {
    let pass = issue_pass(PassCategory::ClassicGuest, Entrant::default(), &clock()).unwrap();
    assert_eq!(pass.category(), PassCategory::ClassicGuest);

    let pass = issue_pass(PassCategory::VipGuest, Entrant::default(), &clock()).unwrap();
    assert_eq!(pass.category(), PassCategory::VipGuest);
}

/// A free child pass cannot be issued without a date of birth
#[test]
fn test_child_pass_requires_date_of_birth() {
    let error =
        issue_pass(PassCategory::FreeChildGuest, Entrant::default(), &clock()).unwrap_err();

    assert_eq!(
        error,
        PassError::missing_information(vec![EntrantField::DateOfBirth])
    );
    assert!(error.is_recoverable());
}

/// Born exactly five years ago today: too old, rejected with WrongAge
#[test]
fn test_child_pass_rejects_exactly_five_years_old() {
    let entrant = Entrant {
        date_of_birth: Some(date(2021, 8, 6)),
        ..Default::default()
    };

    let error = issue_pass(PassCategory::FreeChildGuest, entrant, &clock()).unwrap_err();
    match &error {
        PassError::WrongAge { description } => {
            assert!(description.contains("younger than 5"), "got: {}", description);
        }
        other => panic!("expected WrongAge, got {:?}", other),
    }
}

/// Born five years ago tomorrow (age 4 years, 364 days): still qualifies
#[test]
fn test_child_pass_accepts_one_day_under_five() {
    let entrant = Entrant {
        date_of_birth: Some(date(2021, 8, 7)),
        ..Default::default()
    };

    let pass = issue_pass(PassCategory::FreeChildGuest, entrant, &clock()).unwrap();
    assert_eq!(pass.category(), PassCategory::FreeChildGuest);
}

/// Newborns qualify for the free child pass
#[test]
fn test_child_pass_accepts_age_zero() {
    let entrant = Entrant {
        date_of_birth: Some(date(2026, 8, 1)),
        ..Default::default()
    };

    assert!(issue_pass(PassCategory::FreeChildGuest, entrant, &clock()).is_ok());
}

/// Employee passes with names but no address fail, naming every missing field
#[test]
fn test_employee_pass_reports_all_missing_fields() {
    let partial = Entrant {
        first_name: Some("First".to_string()),
        last_name: Some("Last".to_string()),
        ..Default::default()
    };

    let error =
        issue_pass(PassCategory::HourlyEmployeeRideServices, partial, &clock()).unwrap_err();

    match &error {
        PassError::MissingInformation { fields } => {
            assert!(fields.contains(&EntrantField::StreetAddress));
            assert!(fields.contains(&EntrantField::City));
            assert!(fields.contains(&EntrantField::State));
            assert!(fields.contains(&EntrantField::ZipCode));
            assert!(!fields.contains(&EntrantField::FirstName));
        }
        other => panic!("expected MissingInformation, got {:?}", other),
    }

    // The error message names the offending fields for caller diagnostics
    assert!(error.to_string().contains("street address"));
}

/// An entrant lacking only the street address is still rejected
#[test]
fn test_employee_pass_rejects_missing_street_address() {
    let mut entrant = employee_entrant();
    entrant.street_address = None;

    for category in [
        PassCategory::HourlyEmployeeFoodServices,
        PassCategory::HourlyEmployeeRideServices,
        PassCategory::HourlyEmployeeMaintenance,
        PassCategory::Manager,
    ] {
        let error = issue_pass(category, entrant.clone(), &clock()).unwrap_err();
        assert_eq!(
            error,
            PassError::missing_information(vec![EntrantField::StreetAddress]),
            "category: {}",
            category
        );
    }
}

/// Complete personal data issues every employee category and Manager
#[test]
fn test_employee_passes_issue_with_complete_data() {
    for category in [
        PassCategory::HourlyEmployeeFoodServices,
        PassCategory::HourlyEmployeeRideServices,
        PassCategory::HourlyEmployeeMaintenance,
        PassCategory::Manager,
    ] {
        let pass = issue_pass(category, employee_entrant(), &clock()).unwrap();
        assert_eq!(pass.category(), category);
    }
}

/// Issued passes keep their entrant and get distinct identifiers
#[test]
fn test_issued_passes_are_distinct_and_immutable() {
    let first = issue_pass(PassCategory::Manager, employee_entrant(), &clock()).unwrap();
    let second = issue_pass(PassCategory::Manager, employee_entrant(), &clock()).unwrap();

    assert_ne!(first.id(), second.id());
    assert_eq!(first.entrant(), second.entrant());
    assert_eq!(first.entrant().first_name.as_deref(), Some("First"));
}

/// Age restrictions apply only to the free child category
#[test]
fn test_no_age_restriction_outside_child_pass() {
    let adult = Entrant {
        date_of_birth: Some(date(1960, 1, 1)),
        ..employee_entrant()
    };

    assert!(issue_pass(PassCategory::ClassicGuest, adult.clone(), &clock()).is_ok());
    assert!(issue_pass(PassCategory::VipGuest, adult.clone(), &clock()).is_ok());
    assert!(issue_pass(PassCategory::Manager, adult, &clock()).is_ok());
}
