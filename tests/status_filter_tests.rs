use fleet_requisition::models::{RequestStatus, StakeholderRequest};
use fleet_requisition::status_filter::{filter_by_status, filter_records, filter_options};
use std::borrow::Cow;

mod common;

#[derive(Debug, Clone, PartialEq)]
struct Record {
    status: String,
}

fn record(status: &str) -> Record {
    Record {
        status: status.to_string(),
    }
}

#[test]
fn test_all_returns_input_unchanged() {
    let items = vec![record("Rejected"), record("Pending"), record("Approved")];
    let filtered = filter_by_status(&items, "All", |r| r.status.as_str());

    assert!(matches!(filtered, Cow::Borrowed(_)));
    assert_eq!(filtered.as_ptr(), items.as_ptr());
    assert_eq!(filtered.into_owned(), items);
}

#[test]
fn test_selects_matching_status() {
    let items = vec![record("Pending"), record("Approved")];
    let filtered = filter_by_status(&items, "Approved", |r| r.status.as_str());
    assert_eq!(filtered.as_ref(), &[record("Approved")]);
}

#[test]
fn test_status_match_is_exact() {
    let items = vec![record("Approved"), record("Partially Approved"), record("approved")];
    let filtered = filter_by_status(&items, "Approved", |r| r.status.as_str());
    assert_eq!(filtered.len(), 1);
}

#[test]
fn test_filters_typed_records() {
    let mut requests = vec![
        StakeholderRequest::new("1", "Excavator", 2, "John Doe", "25 Aug 2025"),
        StakeholderRequest::new("2", "Forklift", 1, "Alice Smith", "24 Aug 2025"),
        StakeholderRequest::new("3", "Crane", 1, "Bob Johnson", "23 Aug 2025"),
    ];
    requests[1].status = RequestStatus::Rejected;

    let pending = filter_records(&requests, "Pending");
    let ids: Vec<&str> = pending.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);

    assert_eq!(filter_records(&requests, "Rejected").len(), 1);
    assert!(filter_records(&requests, "Approved").is_empty());
    assert_eq!(filter_records(&requests, "All").len(), 3);
}

#[test]
fn test_partial_approvals_are_filterable_by_label() {
    let mut request = common::RequestBuilder::new("9", "Loaders", 4).build();
    request.status = RequestStatus::PartiallyApproved;
    let history = vec![request];

    assert_eq!(filter_records(&history, "Partially Approved").len(), 1);
    assert!(filter_records(&history, "Approved").is_empty());
}

#[test]
fn test_dropdown_options() {
    assert_eq!(filter_options().first(), Some(&"All"));
    assert_eq!(filter_options().len(), 4);
}
