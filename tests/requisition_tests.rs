use fleet_requisition::models::RequestStatus;
use fleet_requisition::requests::RequisitionLog;
use fleet_requisition::FleetError;
use uuid::Uuid;

#[test]
fn test_submit_parses_form_values() {
    let mut log = RequisitionLog::new();
    let requisition = log.submit("  Excavator ", " 2 ", " site prep ").unwrap().clone();

    assert_eq!(requisition.equipment_name, "Excavator");
    assert_eq!(requisition.quantity, 2);
    assert_eq!(requisition.remarks, "site prep");
    assert_eq!(requisition.status, RequestStatus::Pending);
    assert!(Uuid::parse_str(&requisition.id).is_ok());
    assert_eq!(log.len(), 1);
}

#[test]
fn test_invalid_form_is_rejected() {
    let mut log = RequisitionLog::new();
    assert!(matches!(log.submit("", "1", ""), Err(FleetError::InvalidArgument(_))));
    assert!(matches!(log.submit("Crane", "-1", ""), Err(FleetError::InvalidArgument(_))));
    assert!(matches!(log.submit("Crane", "0", ""), Err(FleetError::InvalidArgument(_))));
    assert!(matches!(log.submit("Crane", "1.5", ""), Err(FleetError::InvalidArgument(_))));
    assert!(log.is_empty());
}

#[test]
fn test_update_and_remove() {
    let mut log = RequisitionLog::new();
    let first = log.submit("Crane", "1", "").unwrap().id.clone();
    let second = log.submit("Forklift", "3", "warehouse").unwrap().id.clone();

    let updated = log.update(&first, "Mobile Crane", "2", "taller boom").unwrap();
    assert_eq!(updated.equipment_name, "Mobile Crane");
    assert_eq!(updated.quantity, 2);
    assert_eq!(updated.status, RequestStatus::Pending);

    // a failed edit leaves the record untouched
    assert!(log.update(&first, "Mobile Crane", "zero", "").is_err());
    assert_eq!(log.requisitions()[0].quantity, 2);

    let removed = log.remove(&second).unwrap();
    assert_eq!(removed.equipment_name, "Forklift");
    assert_eq!(log.len(), 1);
    assert!(matches!(log.remove(&second), Err(FleetError::NotFound(_))));
    assert!(matches!(log.update(&second, "X", "1", ""), Err(FleetError::NotFound(_))));
}

#[test]
fn test_filter_requisitions() {
    let mut log = RequisitionLog::new();
    log.submit("Crane", "1", "").unwrap();
    log.submit("Loader", "2", "").unwrap();

    assert_eq!(log.filtered("Pending").len(), 2);
    assert!(log.filtered("Approved").is_empty());
    assert_eq!(log.filtered("All").len(), 2);
}
