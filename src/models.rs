use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::Constants;
use crate::error::{FleetError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentStatus {
    Available,
    #[serde(rename = "In Use")]
    InUse,
    #[serde(rename = "Under Maintenance")]
    UnderMaintenance,
}

impl EquipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => Constants::EQUIPMENT_AVAILABLE,
            Self::InUse => Constants::EQUIPMENT_IN_USE,
            Self::UnderMaintenance => Constants::EQUIPMENT_UNDER_MAINTENANCE,
        }
    }
}

impl FromStr for EquipmentStatus {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            Constants::EQUIPMENT_AVAILABLE => Ok(Self::Available),
            Constants::EQUIPMENT_IN_USE => Ok(Self::InUse),
            Constants::EQUIPMENT_UNDER_MAINTENANCE => Ok(Self::UnderMaintenance),
            other => Err(FleetError::invalid(format!(
                "unknown equipment status '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<EquipmentStatus> for String {
    fn from(status: EquipmentStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Who currently holds a unit and until when
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationInfo {
    pub allocated_to: String,
    pub allocated_date: NaiveDate,
    pub expected_return_date: NaiveDate,
    pub request_id: String,
}

/// A single physical unit of machinery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentItem {
    pub id: i64,
    pub name: String,
    pub status: EquipmentStatus,
    pub current_allocation: Option<AllocationInfo>,
    pub maintenance_schedule: Option<String>,
}

impl EquipmentItem {
    pub fn new(id: i64, name: impl Into<String>, status: EquipmentStatus) -> Self {
        Self {
            id,
            name: name.into(),
            status,
            current_allocation: None,
            maintenance_schedule: None,
        }
    }

    pub fn with_allocation(mut self, allocation: AllocationInfo) -> Self {
        self.current_allocation = Some(allocation);
        self
    }

    pub fn with_maintenance_schedule(mut self, schedule: impl Into<String>) -> Self {
        self.maintenance_schedule = Some(schedule.into());
        self
    }

    pub fn set_status(&mut self, status: EquipmentStatus) {
        self.status = status;
    }
}

/// A named category owning its units exclusively
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentType {
    pub type_name: String,
    pub items: Vec<EquipmentItem>,
}

impl EquipmentType {
    pub fn new(type_name: impl Into<String>, items: Vec<EquipmentItem>) -> Self {
        Self {
            type_name: type_name.into(),
            items,
        }
    }

    pub fn count_with_status(&self, status: EquipmentStatus) -> usize {
        self.items.iter().filter(|item| item.status == status).count()
    }

    pub fn item_mut(&mut self, item_id: i64) -> Option<&mut EquipmentItem> {
        self.items.iter_mut().find(|item| item.id == item_id)
    }
}

/// Point-in-time aggregate of item statuses for one type (or the whole fleet)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentAvailability {
    pub type_name: String,
    pub total_units: usize,
    pub available_units: usize,
    pub in_use_units: usize,
    pub maintenance_units: usize,
    pub utilization_rate: u32,
}

/// Outcome of checking a requested quantity against free units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AllocationResult {
    #[serde(rename_all = "camelCase")]
    FullyAvailable { available_units: i64 },
    #[serde(rename_all = "camelCase")]
    PartiallyAvailable {
        available_units: i64,
        requested_units: i64,
    },
    #[serde(rename_all = "camelCase")]
    NotAvailable { next_available_date: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn weight(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Urgent => 4,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }
}

impl FromStr for Priority {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            "Urgent" => Ok(Self::Urgent),
            other => Err(FleetError::invalid(format!("unknown priority '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    #[serde(rename = "Partially Approved")]
    PartiallyApproved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => Constants::STATUS_PENDING,
            Self::Approved => Constants::STATUS_APPROVED,
            Self::PartiallyApproved => Constants::STATUS_PARTIALLY_APPROVED,
            Self::Rejected => Constants::STATUS_REJECTED,
        }
    }
}

impl FromStr for RequestStatus {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            Constants::STATUS_PENDING => Ok(Self::Pending),
            Constants::STATUS_APPROVED => Ok(Self::Approved),
            Constants::STATUS_PARTIALLY_APPROVED => Ok(Self::PartiallyApproved),
            Constants::STATUS_REJECTED => Ok(Self::Rejected),
            other => Err(FleetError::invalid(format!(
                "unknown request status '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RequestStatus> for String {
    fn from(status: RequestStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Records that carry a request status label
pub trait StatusRecord {
    fn status(&self) -> RequestStatus;

    fn status_label(&self) -> &'static str {
        self.status().as_str()
    }
}

/// Request as seen on the manager approval screens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerRequest {
    pub id: String,
    pub equipment_name: String,
    pub quantity: u32,
    pub remark: String,
    pub supervisor_name: String,
    pub status: RequestStatus,
    pub priority: Priority,
    pub requested_date: NaiveDate,
    pub required_duration: u32,
    pub project_name: String,
    pub allocated_quantity: u32,
    pub allocation_notes: String,
}

impl ManagerRequest {
    pub fn new(
        id: impl Into<String>,
        equipment_name: impl Into<String>,
        quantity: u32,
        remark: impl Into<String>,
        supervisor_name: impl Into<String>,
        requested_date: NaiveDate,
    ) -> Result<Self> {
        if quantity == 0 {
            return Err(FleetError::invalid("requested quantity must be at least 1"));
        }

        Ok(Self {
            id: id.into(),
            equipment_name: equipment_name.into(),
            quantity,
            remark: remark.into(),
            supervisor_name: supervisor_name.into(),
            status: RequestStatus::Pending,
            priority: Priority::default(),
            requested_date,
            required_duration: Constants::DEFAULT_REQUIRED_DURATION_DAYS,
            project_name: Constants::DEFAULT_PROJECT_NAME.to_string(),
            allocated_quantity: 0,
            allocation_notes: String::new(),
        })
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_project(mut self, project_name: impl Into<String>, required_duration: u32) -> Self {
        self.project_name = project_name.into();
        self.required_duration = required_duration;
        self
    }
}

impl StatusRecord for ManagerRequest {
    fn status(&self) -> RequestStatus {
        self.status
    }
}

/// Request as seen on the stakeholder dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeholderRequest {
    pub id: String,
    pub equipment_name: String,
    pub quantity: u32,
    pub requester: String,
    pub request_date: String,
    pub status: RequestStatus,
    pub rejection_reason: Option<String>,
}

impl StakeholderRequest {
    pub fn new(
        id: impl Into<String>,
        equipment_name: impl Into<String>,
        quantity: u32,
        requester: impl Into<String>,
        request_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            equipment_name: equipment_name.into(),
            quantity,
            requester: requester.into(),
            request_date: request_date.into(),
            status: RequestStatus::Pending,
            rejection_reason: None,
        }
    }
}

impl StatusRecord for StakeholderRequest {
    fn status(&self) -> RequestStatus {
        self.status
    }
}

/// A requisition raised from the request form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requisition {
    pub id: String,
    pub equipment_name: String,
    pub quantity: u32,
    pub remarks: String,
    pub status: RequestStatus,
}

impl StatusRecord for Requisition {
    fn status(&self) -> RequestStatus {
        self.status
    }
}
