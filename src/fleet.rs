// Demo fleet and seed requests used when no real data source is wired in
use chrono::NaiveDate;
use lazy_static::lazy_static;

use crate::error::Result;
use crate::models::{EquipmentItem, EquipmentStatus, EquipmentType, ManagerRequest, StakeholderRequest};

lazy_static! {
    /// Loaders, Dumpers and Trucks with statuses cycling by index
    pub static ref DEMO_FLEET: Vec<EquipmentType> = vec![
        demo_type("Loaders", "Loader", 20, 1),
        demo_type("Dumpers", "Dumper", 15, 101),
        demo_type("Trucks", "Truck", 25, 201),
    ];
}

/// Status assigned to the `index`-th demo unit
pub fn cycled_status(index: usize) -> EquipmentStatus {
    match index % 3 {
        0 => EquipmentStatus::Available,
        1 => EquipmentStatus::InUse,
        _ => EquipmentStatus::UnderMaintenance,
    }
}

fn demo_type(type_name: &str, unit_name: &str, count: usize, first_id: i64) -> EquipmentType {
    let items = (0..count)
        .map(|index| {
            EquipmentItem::new(
                first_id + index as i64,
                format!("{} {}", unit_name, index + 1),
                cycled_status(index),
            )
        })
        .collect();
    EquipmentType::new(type_name, items)
}

/// Owned copy of the demo fleet for a session to mutate
pub fn demo_fleet() -> Vec<EquipmentType> {
    DEMO_FLEET.clone()
}

pub fn seed_manager_requests(today: NaiveDate) -> Result<Vec<ManagerRequest>> {
    Ok(vec![
        ManagerRequest::new("1", "Excavator", 2, "Urgent requirement", "John Doe", today)?,
        ManagerRequest::new("2", "Forklift", 1, "Needed for warehouse", "Alice Smith", today)?,
        ManagerRequest::new("3", "Crane", 1, "Project site use", "Bob Johnson", today)?,
    ])
}

pub fn seed_stakeholder_requests() -> Vec<StakeholderRequest> {
    vec![
        StakeholderRequest::new("1", "Excavator", 2, "John Doe", "25 Aug 2025"),
        StakeholderRequest::new("2", "Forklift", 1, "Alice Smith", "24 Aug 2025"),
        StakeholderRequest::new("3", "Crane", 1, "Bob Johnson", "23 Aug 2025"),
    ]
}
