mod common;

use common::{record_with_new_category, test_service};
use kakebo::application::{CategoryDecision, ExpenseOutcome};
use kakebo::domain::DEFAULT_CATEGORIES;

#[test]
fn test_fresh_service_has_the_seven_defaults_in_order() {
    let service = test_service();
    assert_eq!(service.categories(), &DEFAULT_CATEGORIES);
    assert_eq!(service.categories().len(), 7);
}

#[test]
fn test_declined_category_leaves_everything_unchanged() {
    let mut service = test_service();

    let pending = match service.add_expense("Rent", 5000).unwrap() {
        ExpenseOutcome::UnknownCategory(pending) => pending,
        ExpenseOutcome::Recorded(_) => panic!("Rent is not a default category"),
    };
    assert_eq!(pending.category, "Rent");
    assert_eq!(pending.amount_cents, 5000);

    // Nothing changed while the expense was pending
    assert_eq!(service.categories().len(), 7);
    assert!(service.transactions().is_empty());

    let decision = service.confirm_category(pending, false).unwrap();
    assert!(matches!(decision, CategoryDecision::Declined));

    assert_eq!(service.categories().len(), 7);
    assert!(service.transactions().is_empty());
    assert_eq!(service.balance_cents(), 0);
}

#[test]
fn test_accepted_category_adds_exactly_one_entry_of_each() {
    let mut service = test_service();

    let receipt = record_with_new_category(&mut service, "Rent", 5000);
    assert_eq!(receipt.category, "Rent");
    assert_eq!(receipt.balance_cents, -5000);

    assert_eq!(service.categories().len(), 8);
    assert_eq!(service.categories().last().map(String::as_str), Some("Rent"));
    assert_eq!(service.transactions().len(), 1);
}

#[test]
fn test_registered_category_is_known_from_then_on() {
    let mut service = test_service();
    record_with_new_category(&mut service, "Rent", 5000);

    // The second expense against the same category needs no confirmation.
    let outcome = service.add_expense("Rent", 2500).unwrap();
    assert!(matches!(outcome, ExpenseOutcome::Recorded(_)));
    assert_eq!(service.categories().len(), 8);
    assert_eq!(service.transactions().len(), 2);
}

#[test]
fn test_category_match_is_case_sensitive() {
    let mut service = test_service();

    let outcome = service.add_expense("groceries", 1000).unwrap();
    assert!(matches!(outcome, ExpenseOutcome::UnknownCategory(_)));
}
