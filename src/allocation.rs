use chrono::NaiveDate;
use std::ops::RangeInclusive;

use crate::constants::Constants;
use crate::error::{FleetError, Result};
use crate::models::{AllocationResult, EquipmentType};
use crate::time::{format_iso_date, next_available_placeholder};

/// Classify a requested quantity against the number of free units.
///
/// Fully available when `available_units >= requested_quantity`, partially available when
/// some but not enough units are free, otherwise not available with tomorrow as the
/// next-available date.
pub fn decide(
    available_units: i64,
    requested_quantity: i64,
    today: NaiveDate,
) -> Result<AllocationResult> {
    if available_units < 0 {
        return Err(FleetError::invalid(format!(
            "available units must not be negative (got {})",
            available_units
        )));
    }
    if requested_quantity < 0 {
        return Err(FleetError::invalid(format!(
            "requested quantity must not be negative (got {})",
            requested_quantity
        )));
    }

    if available_units >= requested_quantity {
        Ok(AllocationResult::FullyAvailable { available_units })
    } else if available_units > 0 {
        Ok(AllocationResult::PartiallyAvailable {
            available_units,
            requested_units: requested_quantity,
        })
    } else {
        let next = next_available_placeholder(today)?;
        Ok(AllocationResult::NotAvailable {
            next_available_date: format_iso_date(next),
        })
    }
}

/// Resolve an equipment type by its exact name
pub fn find_type<'a>(types: &'a [EquipmentType], type_name: &str) -> Result<&'a EquipmentType> {
    types
        .iter()
        .find(|equipment_type| equipment_type.type_name == type_name)
        .ok_or_else(|| FleetError::not_found(format!("equipment type '{}'", type_name)))
}

impl EquipmentType {
    pub fn can_fulfill_request(&self, requested_quantity: i64, today: NaiveDate) -> Result<AllocationResult> {
        let available = i64::try_from(self.available_units())
            .map_err(|_| FleetError::invalid("available unit count out of range"))?;
        decide(available, requested_quantity, today)
    }
}

impl AllocationResult {
    pub fn is_fully_available(&self) -> bool {
        matches!(self, AllocationResult::FullyAvailable { .. })
    }

    /// Free units reported by the result (zero when nothing is available)
    pub fn available_units(&self) -> i64 {
        match self {
            AllocationResult::FullyAvailable { available_units }
            | AllocationResult::PartiallyAvailable { available_units, .. } => *available_units,
            AllocationResult::NotAvailable { .. } => 0,
        }
    }

    /// One-line description shown next to a pending request
    pub fn status_message(&self, requested_quantity: u32) -> String {
        match self {
            AllocationResult::FullyAvailable { available_units } => format!(
                "{} {} units available - Can fulfill completely",
                Constants::FULLY_AVAILABLE_MARK,
                available_units
            ),
            AllocationResult::PartiallyAvailable { available_units, .. } => format!(
                "{} Only {}/{} available - Partial approval possible",
                Constants::PARTIALLY_AVAILABLE_MARK,
                available_units,
                requested_quantity
            ),
            AllocationResult::NotAvailable { next_available_date } => format!(
                "{} No units available - Next available: {}",
                Constants::NOT_AVAILABLE_MARK,
                next_available_date
            ),
        }
    }
}

/// Quantities a manager may approve for a partial approval
pub fn partial_approval_range(available_units: u32, requested_quantity: u32) -> Option<RangeInclusive<u32>> {
    let upper = available_units.min(requested_quantity);
    (upper >= 1).then(|| 1..=upper)
}

/// Quantity proposed before the manager adjusts it: every free unit, capped at the request
pub fn default_partial_quantity(available_units: u32, requested_quantity: u32) -> Option<u32> {
    partial_approval_range(available_units, requested_quantity).map(|range| *range.end())
}

/// Check a manager-chosen quantity against the partial approval bounds
pub fn validate_partial_quantity(quantity: u32, available_units: u32, requested_quantity: u32) -> Result<u32> {
    match partial_approval_range(available_units, requested_quantity) {
        Some(range) if range.contains(&quantity) => Ok(quantity),
        Some(range) => Err(FleetError::invalid(format!(
            "approved quantity {} outside {}..={}",
            quantity,
            range.start(),
            range.end()
        ))),
        None => Err(FleetError::invalid(
            "no units available for partial approval",
        )),
    }
}
