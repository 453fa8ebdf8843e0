#![allow(dead_code)]

use chrono::{NaiveDate, TimeZone, Utc};
use fleet_requisition::models::{EquipmentItem, EquipmentStatus, EquipmentType, ManagerRequest, Priority};
use fleet_requisition::session::FleetSession;
use fleet_requisition::traits::{MockNotifier, TestClock};
use std::sync::Arc;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Build a type whose items carry the given statuses, ids starting at 1
pub fn equipment_type(type_name: &str, statuses: &[EquipmentStatus]) -> EquipmentType {
    let items = statuses
        .iter()
        .enumerate()
        .map(|(i, status)| EquipmentItem::new(i as i64 + 1, format!("{} {}", type_name, i + 1), *status))
        .collect();
    EquipmentType::new(type_name, items)
}

/// Builder for creating test manager requests
pub struct RequestBuilder {
    id: String,
    equipment_name: String,
    quantity: u32,
    supervisor_name: String,
    priority: Priority,
    requested_date: NaiveDate,
}

impl RequestBuilder {
    pub fn new(id: &str, equipment_name: &str, quantity: u32) -> Self {
        Self {
            id: id.to_string(),
            equipment_name: equipment_name.to_string(),
            quantity,
            supervisor_name: "Test Supervisor".to_string(),
            priority: Priority::Medium,
            requested_date: date(2024, 1, 1),
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn requested_on(mut self, requested_date: NaiveDate) -> Self {
        self.requested_date = requested_date;
        self
    }

    pub fn build(self) -> ManagerRequest {
        ManagerRequest::new(
            self.id,
            self.equipment_name,
            self.quantity,
            "test remark",
            self.supervisor_name,
            self.requested_date,
        )
        .unwrap()
        .with_priority(self.priority)
    }
}

/// Session over a small fleet with a mock notifier and a clock fixed at 2024-01-01 10:00 UTC
pub struct TestContext {
    pub session: FleetSession<MockNotifier>,
    pub notifier: MockNotifier,
    pub clock: TestClock,
}

impl TestContext {
    pub fn new() -> Self {
        use EquipmentStatus::*;
        let fleet = vec![
            equipment_type("Loaders", &[Available, Available, InUse, UnderMaintenance]),
            equipment_type("Cranes", &[InUse, UnderMaintenance]),
        ];
        let notifier = MockNotifier::new();
        let clock = TestClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());
        let session = FleetSession::new(fleet, notifier.clone(), Arc::new(clock.clone()), chrono_tz::UTC);

        Self {
            session,
            notifier,
            clock,
        }
    }
}
