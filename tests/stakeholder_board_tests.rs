use fleet_requisition::fleet::seed_stakeholder_requests;
use fleet_requisition::models::RequestStatus;
use fleet_requisition::requests::StakeholderBoard;
use fleet_requisition::FleetError;

#[test]
fn test_single_decisions_update_in_place() {
    let mut board = StakeholderBoard::new(seed_stakeholder_requests());

    board.approve("2").unwrap();
    let rejected = board.reject("3", "Crane unavailable").unwrap();
    assert_eq!(rejected.rejection_reason.as_deref(), Some("Crane unavailable"));

    let statuses: Vec<RequestStatus> = board.requests().iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![RequestStatus::Pending, RequestStatus::Approved, RequestStatus::Rejected]
    );
    assert_eq!(board.pending_count(), 1);
}

#[test]
fn test_bulk_approve_only_touches_pending() {
    let mut board = StakeholderBoard::new(seed_stakeholder_requests());
    board.reject("1", "Duplicate").unwrap();

    assert_eq!(board.approve_all_pending(), 2);
    let statuses: Vec<RequestStatus> = board.requests().iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![RequestStatus::Rejected, RequestStatus::Approved, RequestStatus::Approved]
    );
    assert_eq!(board.requests()[0].rejection_reason.as_deref(), Some("Duplicate"));

    // nothing left to approve
    assert_eq!(board.approve_all_pending(), 0);
    assert_eq!(board.reject_all_pending("late"), 0);
}

#[test]
fn test_bulk_reject_sets_reason() {
    let mut board = StakeholderBoard::new(seed_stakeholder_requests());
    assert_eq!(board.reject_all_pending("Budget freeze"), 3);
    assert!(board
        .requests()
        .iter()
        .all(|r| r.status == RequestStatus::Rejected && r.rejection_reason.as_deref() == Some("Budget freeze")));
    assert_eq!(board.filtered("Rejected").len(), 3);
    assert!(board.filtered("Pending").is_empty());
}

#[test]
fn test_unknown_stakeholder_request() {
    let mut board = StakeholderBoard::new(seed_stakeholder_requests());
    assert!(matches!(board.approve("99"), Err(FleetError::NotFound(_))));
}

#[test]
fn test_approval_after_rejection_clears_reason() {
    let mut board = StakeholderBoard::new(seed_stakeholder_requests());
    board.reject("1", "Duplicate").unwrap();

    let approved = board.approve("1").unwrap();
    assert_eq!(approved.status, RequestStatus::Approved);
    assert_eq!(approved.rejection_reason, None);
}
