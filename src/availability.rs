use serde::Serialize;

use crate::constants::Constants;
use crate::models::{EquipmentAvailability, EquipmentItem, EquipmentStatus, EquipmentType};

/// Name reported on the fleet-wide overview
pub const FLEET_OVERVIEW_NAME: &str = "All Equipment";

/// Count item statuses and derive the utilization rate.
///
/// `utilization_rate` is `floor(in_use / total * 100)`, or 0 for an empty sequence.
pub fn summarize<'a, I>(type_name: &str, items: I) -> EquipmentAvailability
where
    I: IntoIterator<Item = &'a EquipmentItem>,
{
    let mut available_units = 0;
    let mut in_use_units = 0;
    let mut maintenance_units = 0;

    for item in items {
        match item.status {
            EquipmentStatus::Available => available_units += 1,
            EquipmentStatus::InUse => in_use_units += 1,
            EquipmentStatus::UnderMaintenance => maintenance_units += 1,
        }
    }

    let total_units = available_units + in_use_units + maintenance_units;

    EquipmentAvailability {
        type_name: type_name.to_string(),
        total_units,
        available_units,
        in_use_units,
        maintenance_units,
        utilization_rate: utilization_rate(in_use_units, total_units),
    }
}

fn utilization_rate(in_use_units: usize, total_units: usize) -> u32 {
    if total_units == 0 {
        return 0;
    }
    // in_use <= total, so the quotient is at most 100
    ((in_use_units as u128 * 100) / total_units as u128) as u32
}

impl EquipmentType {
    pub fn availability_summary(&self) -> EquipmentAvailability {
        summarize(&self.type_name, &self.items)
    }

    pub fn available_units(&self) -> usize {
        self.count_with_status(EquipmentStatus::Available)
    }
}

/// Totals across every type in the fleet
pub fn fleet_overview(types: &[EquipmentType]) -> EquipmentAvailability {
    summarize(
        FLEET_OVERVIEW_NAME,
        types.iter().flat_map(|equipment_type| equipment_type.items.iter()),
    )
}

/// Snapshot for every type, in fleet order
pub fn summarize_fleet(types: &[EquipmentType]) -> Vec<EquipmentAvailability> {
    types
        .iter()
        .map(EquipmentType::availability_summary)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UtilizationBand {
    Low,
    Optimal,
    High,
}

impl UtilizationBand {
    pub fn from_rate(rate: u32) -> Self {
        if rate < Constants::UTILIZATION_LOW_BELOW {
            Self::Low
        } else if rate < Constants::UTILIZATION_OPTIMAL_BELOW {
            Self::Optimal
        } else {
            Self::High
        }
    }
}

impl EquipmentAvailability {
    pub fn utilization_band(&self) -> UtilizationBand {
        UtilizationBand::from_rate(self.utilization_rate)
    }
}
